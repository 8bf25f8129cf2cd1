use super::RandomSource;
use super::Sheets;
use super::Source;
use crate::config::ROUTE_PREFIX;
use crate::error::Result;
use crate::fetch::Fetch;
use crate::fetch::Response;
use crate::outcome::Body;
use crate::outcome::Value;
use async_trait::async_trait;
use rand::rngs::StdRng;
use std::cell::RefCell;
use tracing::debug;

const NOT_FOUND: &str = r#"{"detail":"Not Found"}"#;
const NO_CHARACTER: &str = r#"{"detail":"Персонаж не найден"}"#;

/// Answer the roll route from sheets held in memory
pub struct LocalFetch<S> {
    sheets: Sheets,
    route_prefix: String,
    source: RefCell<S>,
}

impl LocalFetch<RandomSource<StdRng>> {
    pub fn new(sheets: Sheets) -> Self {
        Self::with_source(sheets, RandomSource::from_entropy())
    }
}

impl<S: Source> LocalFetch<S> {
    pub fn with_source(sheets: Sheets, source: S) -> Self {
        LocalFetch {
            sheets,
            route_prefix: ROUTE_PREFIX.to_owned(),
            source: RefCell::new(source),
        }
    }

    pub fn route_prefix(mut self, route_prefix: impl Into<String>) -> Self {
        self.route_prefix = route_prefix.into();
        self
    }

    fn answer(&self, path: &str) -> Result<Response> {
        let rest = path
            .strip_prefix(self.route_prefix.trim_end_matches('/'))
            .and_then(|rest| rest.strip_prefix('/'));
        let Some(rest) = rest else {
            return Ok(Response::new(404, NOT_FOUND));
        };
        // a path parameter never spans a `/`
        let mut parts = rest.splitn(4, '/');
        let (Some(character_id), Some(attribute), Some(skill), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Ok(Response::new(404, NOT_FOUND));
        };
        let Some(sheet) = self.sheets.get(character_id) else {
            return Ok(Response::new(404, NO_CHARACTER));
        };
        let throw = sheet.roll_with_source(attribute, skill, &mut *self.source.borrow_mut());
        debug!("Character `{}` threw {}", character_id, throw);
        let body = Body {
            result: Value::Integer(throw.total()),
        };
        Ok(Response::ok(serde_json::to_string(&body)?))
    }
}

#[async_trait(?Send)]
impl<S: Source> Fetch for LocalFetch<S> {
    async fn get(&self, path: &str) -> Result<Response> {
        self.answer(path)
    }
}
