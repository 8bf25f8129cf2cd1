use serde::Deserialize;

pub const TRIGGER_SELECTOR: &str = ".roll-button";
pub const OUTPUT_SELECTOR: &str = ".roll-result";
pub const CHARACTER_ATTR: &str = "data-character-id";
pub const ATTRIBUTE_ATTR: &str = "data-attribute";
pub const SKILL_ATTR: &str = "data-skill";
pub const BOUND_ATTR: &str = "data-roll-bound";
pub const ROUTE_PREFIX: &str = "/characters/roll";

/// Selectors, data attribute names and route used by the binder and invoker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trigger_selector: String,
    pub output_selector: String,
    pub character_attr: String,
    pub attribute_attr: String,
    pub skill_attr: String,
    /// Set on a trigger once a click handler is attached to it
    pub bound_attr: String,
    pub route_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trigger_selector: TRIGGER_SELECTOR.to_owned(),
            output_selector: OUTPUT_SELECTOR.to_owned(),
            character_attr: CHARACTER_ATTR.to_owned(),
            attribute_attr: ATTRIBUTE_ATTR.to_owned(),
            skill_attr: SKILL_ATTR.to_owned(),
            bound_attr: BOUND_ATTR.to_owned(),
            route_prefix: ROUTE_PREFIX.to_owned(),
        }
    }
}

impl Config {
    /// Parse a RON config, missing fields keep their defaults
    pub fn from_ron(input: &str) -> crate::error::Result<Self> {
        Ok(ron::de::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let config = Config::from_ron(r#"(route_prefix: "/api/roll")"#).unwrap();
        assert_eq!("/api/roll", config.route_prefix);
        assert_eq!(TRIGGER_SELECTOR, config.trigger_selector);
        assert_eq!(OUTPUT_SELECTOR, config.output_selector);
    }

    #[test]
    fn bad_ron_is_sheet_error() {
        let err = Config::from_ron("(route_prefix: 3").unwrap_err();
        assert!(matches!(err, crate::error::Error::Sheet(_)));
    }
}
