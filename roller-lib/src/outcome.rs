use crate::error::Error;
use crate::error::Result;
use serde::Deserialize;
use serde::Serialize;

pub const ROLLED_SIGIL: &str = "🎲";
pub const FAILED_MARKER: &str = "⚠ Ошибка!";

/// Display value of a roll as sent by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Success body of the roll route, other fields are ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub result: Value,
}

impl Body {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// What one roll invocation ended with
#[derive(Debug)]
pub enum Outcome {
    Rolled(Value),
    Failed(Error),
}

impl Outcome {
    /// Text written to the output element
    pub fn marker(&self) -> String {
        match self {
            Outcome::Rolled(value) => format!("{ROLLED_SIGIL} {value}"),
            Outcome::Failed(_) => FAILED_MARKER.to_owned(),
        }
    }

    pub fn is_rolled(&self) -> bool {
        matches!(self, Outcome::Rolled(_))
    }

    pub fn as_rolled(&self) -> Option<&Value> {
        match self {
            Outcome::Rolled(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    pub fn as_failed(&self) -> Option<&Error> {
        match self {
            Outcome::Rolled(_) => None,
            Outcome::Failed(error) => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_result_marker() {
        let body = Body::parse(r#"{"result": 7}"#).unwrap();
        assert_eq!("🎲 7", Outcome::Rolled(body.result).marker());
    }

    #[test]
    fn extra_fields_ignored() {
        let body = Body::parse(r#"{"result": "12 (d10 + 2)", "die": 10}"#).unwrap();
        assert_eq!(Value::Text("12 (d10 + 2)".to_owned()), body.result);
        assert_eq!("🎲 12 (d10 + 2)", Outcome::Rolled(body.result).marker());
    }

    #[test]
    fn whole_float_prints_like_integer() {
        let body = Body::parse(r#"{"result": 7.0}"#).unwrap();
        assert_eq!("🎲 7", Outcome::Rolled(body.result).marker());
        let body = Body::parse(r#"{"result": 2.5}"#).unwrap();
        assert_eq!("🎲 2.5", Outcome::Rolled(body.result).marker());
    }

    #[test]
    fn bare_number_body_is_malformed() {
        let err = Body::parse("7").unwrap_err();
        assert!(matches!(err, Error::Body(_)));
    }

    #[test]
    fn missing_or_null_result_is_malformed() {
        assert!(Body::parse(r#"{"value": 7}"#).is_err());
        assert!(Body::parse(r#"{"result": null}"#).is_err());
        assert!(Body::parse("<html>").is_err());
    }

    #[test]
    fn failed_marker() {
        let outcome = Outcome::Failed(Error::Status(500));
        assert_eq!("⚠ Ошибка!", outcome.marker());
        assert!(!outcome.is_rolled());
        assert!(matches!(outcome.as_failed(), Some(Error::Status(500))));
    }
}
