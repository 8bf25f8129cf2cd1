use crate::parser::Parser;
use std::str::FromStr;

/// Keep the three fields identifying one roll
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Request {
    pub character_id: String,
    pub attribute: String,
    pub skill: String,
}

impl Request {
    pub fn new(
        character_id: impl Into<String>,
        attribute: impl Into<String>,
        skill: impl Into<String>,
    ) -> Self {
        Request {
            character_id: character_id.into(),
            attribute: attribute.into(),
            skill: skill.into(),
        }
    }

    /// Route path for this roll, fields are substituted as they are
    pub fn path(&self, route_prefix: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            route_prefix.trim_end_matches('/'),
            self.character_id,
            self.attribute,
            self.skill
        )
    }
}

impl FromStr for Request {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::parse_request(s)
    }
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "`{}` with `{}` for character `{}`",
            self.attribute, self.skill, self.character_id
        )
    }
}
