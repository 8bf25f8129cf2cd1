use crate::error::Result;
use async_trait::async_trait;

/// Status and text body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Response {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    /// Same range a browser reports as `ok`
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Interface for issuing the roll GET request
///
/// `Err` means the request never completed (`Error::Transport`),
/// any status the server answered with is an `Ok`.
#[async_trait(?Send)]
pub trait Fetch {
    async fn get(&self, path: &str) -> Result<Response>;
}

#[async_trait(?Send)]
impl<T: Fetch + ?Sized> Fetch for &T {
    async fn get(&self, path: &str) -> Result<Response> {
        (**self).get(path).await
    }
}

#[async_trait(?Send)]
impl<T: Fetch + ?Sized> Fetch for std::rc::Rc<T> {
    async fn get(&self, path: &str) -> Result<Response> {
        (**self).get(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(Response::ok("").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(199, "").is_success());
        assert!(!Response::new(301, "").is_success());
        assert!(!Response::new(404, "").is_success());
        assert!(!Response::new(500, "").is_success());
    }
}
