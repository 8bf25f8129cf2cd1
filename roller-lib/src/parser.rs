use crate::error::Result;
use crate::request::Request;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "roller.pest"]
pub struct Parser;

impl Parser {
    /// Parse `<character> <attribute> <skill>`, fields may be double quoted
    pub fn parse_request(input: &str) -> Result<Request> {
        let request = Self::parse(Rule::request, input)?
            .next()
            .ok_or("empty roll request")?;
        let mut fields = request
            .into_inner()
            .filter(|pair| pair.as_rule() == Rule::field)
            .map(Self::extract_field);
        match (fields.next(), fields.next(), fields.next()) {
            (Some(character_id), Some(attribute), Some(skill)) => {
                Ok(Request::new(character_id, attribute, skill))
            }
            _ => Err("a roll request needs a character, an attribute and a skill".into()),
        }
    }

    fn extract_field(field: Pair<Rule>) -> String {
        field
            .into_inner()
            .next()
            .map(|value| value.as_str().to_owned())
            .unwrap_or_default()
    }
}
