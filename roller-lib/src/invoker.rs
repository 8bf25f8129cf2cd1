use crate::config::Config;
use crate::config::ROUTE_PREFIX;
use crate::error::Error;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::outcome::Body;
use crate::outcome::Outcome;
use crate::outcome::Value;
use crate::output::Output;
use crate::request::Request;
use tracing::debug;
use tracing::error;
use tracing::info;

/// Issue roll requests and render their outcome
///
/// Every failure is logged and rendered as the failure marker, nothing
/// escapes [`Invoker::roll`]. There is no timeout and no retry: each call
/// is one request, and concurrent calls do not know about each other.
pub struct Invoker<F> {
    fetch: F,
    route_prefix: String,
}

impl<F: Fetch> Invoker<F> {
    pub fn new(fetch: F) -> Self {
        Invoker {
            fetch,
            route_prefix: ROUTE_PREFIX.to_owned(),
        }
    }

    pub fn with_config(fetch: F, config: &Config) -> Self {
        Invoker {
            fetch,
            route_prefix: config.route_prefix.clone(),
        }
    }

    /// Roll and write the marker into `target`, if any
    pub async fn roll(&self, request: &Request, target: Option<&dyn Output>) -> Outcome {
        let outcome = match self.fetch_value(request).await {
            Ok(value) => {
                info!("Rolled {} = `{}`", request, value);
                Outcome::Rolled(value)
            }
            Err(e) => {
                error!("Roll {} failed: {}", request, e);
                Outcome::Failed(e)
            }
        };
        if let Some(target) = target {
            target.write(&outcome.marker());
        }
        outcome
    }

    async fn fetch_value(&self, request: &Request) -> Result<Value> {
        let path = request.path(&self.route_prefix);
        debug!("GET `{}`", path);
        let response = self.fetch.get(&path).await?;
        if !response.is_success() {
            return Err(Error::Status(response.status));
        }
        Ok(Body::parse(&response.body)?.result)
    }
}
