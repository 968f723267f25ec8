//! Field selector
//!
//! Names one categorical attribute of a [`Record`](super::Record). Filtering
//! and grouping are parameterized over this instead of having one code path
//! per attribute.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Categorical attribute of a record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Country,
    Sector,
    Region,
    Topic,
    Intensity,
    Pestle,
    Source,
}

impl Field {
    /// Attributes a [`FilterSelection`](crate::pipeline::FilterSelection) can constrain, in select order
    pub const FILTERABLE: [Field; 4] = [Field::Country, Field::Sector, Field::Region, Field::Topic];

    /// Get all fields for iteration
    pub fn all() -> &'static [Field] {
        &[
            Field::Country,
            Field::Sector,
            Field::Region,
            Field::Topic,
            Field::Intensity,
            Field::Pestle,
            Field::Source,
        ]
    }

    /// Lowercase key, also used as the select `name` in the browser UI
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Country => "country",
            Field::Sector => "sector",
            Field::Region => "region",
            Field::Topic => "topic",
            Field::Intensity => "intensity",
            Field::Pestle => "pestle",
            Field::Source => "source",
        }
    }

    /// Capitalized display label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Country => "Country",
            Field::Sector => "Sector",
            Field::Region => "Region",
            Field::Topic => "Topic",
            Field::Intensity => "Intensity",
            Field::Pestle => "PESTLE",
            Field::Source => "Source",
        }
    }

    /// Label of the "no constraint" option of a filter select
    pub fn all_label(&self) -> &'static str {
        match self {
            Field::Country => "All Countries",
            Field::Sector => "All Sectors",
            Field::Region => "All Regions",
            Field::Topic => "All Topics",
            Field::Intensity => "All Intensities",
            Field::Pestle => "All PESTLE",
            Field::Source => "All Sources",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown field name
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown field: {0} (expected one of country, sector, region, topic, intensity, pestle, source)")]
pub struct ParseFieldError(pub String);

impl FromStr for Field {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Field::all()
            .iter()
            .copied()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}
