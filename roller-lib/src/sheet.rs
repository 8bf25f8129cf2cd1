pub mod local;

use crate::error::Result;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Value a character has for an attribute it does not list
pub const DEFAULT_ATTRIBUTE: i64 = 1;

/// Interface for rolling dices
pub trait Source {
    fn throw(&mut self, sides: u64) -> u64;
}

/// Default random dice roller
pub struct RandomSource<T: Rng> {
    pub generator: T,
}

impl RandomSource<StdRng> {
    pub fn from_entropy() -> Self {
        RandomSource {
            generator: StdRng::from_entropy(),
        }
    }
}

impl<T: Rng> Source for RandomSource<T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..1 + sides)
    }
}

/// Die thrown for an attribute value, d4 for anything off the scale
pub fn die_for(value: i64) -> u64 {
    match value {
        1 => 4,
        2 => 6,
        3 => 8,
        4 => 10,
        5 => 12,
        _ => 4,
    }
}

/// One attribute throw plus the skill bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub sides: u64,
    pub value: u64,
    pub bonus: i64,
}

impl Throw {
    /// Saturates at the `i64` bounds, bonuses come from user sheets
    pub fn total(&self) -> i64 {
        self.bonus.saturating_add(self.value as i64)
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{} [{}]", self.sides, self.value)?;
        match self.bonus {
            0 => (),
            b if b < 0 => write!(f, " - {}", -b)?,
            b => write!(f, " + {}", b)?,
        }
        write!(f, " = {}", self.total())
    }
}

/// Attribute values and skill bonuses of one character
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sheet {
    pub name: Option<String>,
    pub attributes: BTreeMap<String, i64>,
    pub skills: BTreeMap<String, i64>,
}

impl Sheet {
    pub fn attribute(&self, name: &str) -> i64 {
        self.attributes
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_ATTRIBUTE)
    }

    pub fn bonus(&self, skill: &str) -> i64 {
        self.skills.get(skill).copied().unwrap_or(0)
    }

    /// Throw the attribute die and add the skill bonus
    pub fn roll_with_source<S: Source>(&self, attribute: &str, skill: &str, source: &mut S) -> Throw {
        let sides = die_for(self.attribute(attribute));
        Throw {
            sides,
            value: source.throw(sides),
            bonus: self.bonus(skill),
        }
    }

    pub fn roll(&self, attribute: &str, skill: &str) -> Throw {
        self.roll_with_source(attribute, skill, &mut RandomSource::from_entropy())
    }
}

/// Sheets by character id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sheets(BTreeMap<String, Sheet>);

impl Sheets {
    pub fn from_ron(input: &str) -> Result<Self> {
        Ok(ron::de::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::Error::Sheet(format!("{}: {}", path.display(), e)))?;
        Self::from_ron(&content)
    }

    pub fn insert(&mut self, character_id: impl Into<String>, sheet: Sheet) {
        self.0.insert(character_id.into(), sheet);
    }

    pub fn get(&self, character_id: &str) -> Option<&Sheet> {
        self.0.get(character_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every attribute and skill name used by any sheet, sorted
    pub fn names(&self) -> Vec<String> {
        self.0
            .values()
            .flat_map(|sheet| sheet.attributes.keys().chain(sheet.skills.keys()))
            .sorted()
            .dedup()
            .cloned()
            .collect()
    }
}
