use async_trait::async_trait;
use roller_lib::error::Error;
use roller_lib::error::Result;
use roller_lib::fetch::Fetch;
use roller_lib::fetch::Response;

/// GET the roll route from a remote server
pub(crate) struct HttpFetch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetch {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Fetch for HttpFetch {
    async fn get(&self, path: &str) -> Result<Response> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Response::new(status, body))
    }
}
