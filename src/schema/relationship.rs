use std::{fmt, str::FromStr};

use serde::Serialize;

use super::error::{SchemaError, SchemaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    #[serde(rename = "1:1")]
    OneToOne,
    #[serde(rename = "N:1")]
    ManyToOne,
    #[serde(rename = "1:N")]
    OneToMany,
    #[serde(rename = "N:N")]
    ManyToMany,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::OneToOne => "1:1",
            Cardinality::ManyToOne => "N:1",
            Cardinality::OneToMany => "1:N",
            Cardinality::ManyToMany => "N:N",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cardinality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1:1" => Ok(Cardinality::OneToOne),
            "N:1" => Ok(Cardinality::ManyToOne),
            "1:N" => Ok(Cardinality::OneToMany),
            "N:N" => Ok(Cardinality::ManyToMany),
            other => Err(format!("unknown cardinality '{other}'")),
        }
    }
}

/// A parsed `from -> to (cardinality)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
    pub cardinality: Cardinality,
}

impl Relationship {
    pub fn parse(raw: &str) -> SchemaResult<Self> {
        let malformed = |reason: &str| SchemaError::MalformedRelationship {
            relationship: raw.to_string(),
            reason: reason.to_string(),
        };

        let (from, rest) = raw
            .split_once("->")
            .ok_or_else(|| malformed("missing '->'"))?;

        let rest = rest.trim();
        let open = rest
            .find('(')
            .ok_or_else(|| malformed("missing '(cardinality)'"))?;
        let to = &rest[..open];
        let tail = rest[open + 1..]
            .strip_suffix(')')
            .ok_or_else(|| malformed("cardinality must end with ')'"))?;

        let from = from.trim();
        let to = to.trim();
        validate_table_name(from).map_err(|reason| malformed(&reason))?;
        validate_table_name(to).map_err(|reason| malformed(&reason))?;

        let cardinality = tail
            .trim()
            .parse::<Cardinality>()
            .map_err(|reason| malformed(&reason))?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            cardinality,
        })
    }

    pub fn tables(&self) -> [&str; 2] {
        [self.from.as_str(), self.to.as_str()]
    }
}

impl FromStr for Relationship {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::parse(s)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cardinality)
    }
}

fn validate_table_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("empty table name".to_string());
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return Err(format!("invalid table name '{name}'"));
    }
    if chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_') {
        Ok(())
    } else {
        Err(format!("invalid table name '{name}'"))
    }
}

/// Parses every statement, stopping at the first malformed one.
pub fn parse_all(raw: &[&str]) -> SchemaResult<Vec<Relationship>> {
    raw.iter().map(|entry| Relationship::parse(entry)).collect()
}
