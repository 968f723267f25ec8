//! Record type for the report dataset
//!
//! The published dataset is loosely typed: the same key holds a number in
//! one entry, `""` in the next and is missing from a third. Decoding
//! normalizes every attribute to an `Option`, so the pipeline only ever
//! has to deal with "present" or "absent".

use serde::{Deserialize, Serialize};

use super::field::Field;

/// One categorized report from the dataset
///
/// Unknown keys are ignored and a missing key decodes as `None`.
/// Empty strings decode as `None` too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Free-text headline
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub sector: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub topic: Option<String>,
    /// Bucket key for the intensity chart. Stored in its string form
    /// (`6` in the JSON becomes `"6"`).
    #[serde(deserialize_with = "lenient::text")]
    pub intensity: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub likelihood: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub relevance: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub impact: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub pestle: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub source: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub insight: Option<String>,
    #[serde(deserialize_with = "lenient::year")]
    pub start_year: Option<i32>,
    #[serde(deserialize_with = "lenient::year")]
    pub end_year: Option<i32>,
    /// Date the report was added, as published (e.g. "January, 20 2017 03:51:25")
    #[serde(deserialize_with = "lenient::text")]
    pub added: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub published: Option<String>,
    /// Link to the external report
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
}

impl Record {
    /// Create an empty record (every attribute absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the title
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    /// Builder method: set a categorical attribute
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = non_empty(value.into());
        match field {
            Field::Country => self.country = value,
            Field::Sector => self.sector = value,
            Field::Region => self.region = value,
            Field::Topic => self.topic = value,
            Field::Intensity => self.intensity = value,
            Field::Pestle => self.pestle = value,
            Field::Source => self.source = value,
        }
        self
    }

    /// Builder method: set the likelihood
    pub fn with_likelihood(mut self, likelihood: f64) -> Self {
        self.likelihood = Some(likelihood);
        self
    }

    /// Builder method: set the report link
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_empty(url.into());
        self
    }

    /// Value of a categorical attribute, `None` when absent
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Country => self.country.as_deref(),
            Field::Sector => self.sector.as_deref(),
            Field::Region => self.region.as_deref(),
            Field::Topic => self.topic.as_deref(),
            Field::Intensity => self.intensity.as_deref(),
            Field::Pestle => self.pestle.as_deref(),
            Field::Source => self.source.as_deref(),
        }
    }

    /// Likelihood with the absent case mapped to 0
    pub fn likelihood_or_zero(&self) -> f64 {
        self.likelihood.unwrap_or(0.0)
    }

    /// Title or the empty string
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Deserializers that accept whatever scalar the dataset happens to carry
mod lenient {
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(f64),
        Flag(bool),
        Other(IgnoredAny),
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Scalar>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Scalar::Text(s)) if !s.is_empty() => Some(s),
            Some(Scalar::Number(n)) => Some(n.to_string()),
            Some(Scalar::Flag(b)) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Scalar>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Scalar::Number(n)) => Some(n),
            Some(Scalar::Text(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(number(deserializer)?
            .filter(|n| n.fract() == 0.0 && n.abs() <= i32::MAX as f64)
            .map(|n| n as i32))
    }
}
