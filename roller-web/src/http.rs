use async_trait::async_trait;
use gloo_net::http::Request;
use roller_lib::error::Error;
use roller_lib::error::Result;
use roller_lib::fetch::Fetch;
use roller_lib::fetch::Response;

/// Browser `fetch` against the page's own origin
pub struct GlooFetch;

#[async_trait(?Send)]
impl Fetch for GlooFetch {
    async fn get(&self, path: &str) -> Result<Response> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status();
        if !response.ok() {
            return Ok(Response::new(status, String::new()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Response::new(status, body))
    }
}
