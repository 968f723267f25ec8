//! Filter Engine
//!
//! Exact-match filtering over the four filterable attributes, and the
//! title search used by the report list. Both are total, stable and pure.

use serde::{Deserialize, Serialize};

use crate::record::{Field, Record};

/// Up to four exact-match constraints. `None` is the identity constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl FilterSelection {
    /// Selection with every constraint unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: constrain a field
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    /// Set or unset the constraint on `field`.
    ///
    /// An empty value unsets the constraint, which is what the "All ..."
    /// option of a select submits. Returns `false` (and changes nothing)
    /// when `field` is not one of [`Field::FILTERABLE`].
    pub fn set(&mut self, field: Field, value: Option<String>) -> bool {
        let value = value.filter(|v| !v.is_empty());
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Current constraint on `field`
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Country => self.country.as_deref(),
            Field::Sector => self.sector.as_deref(),
            Field::Region => self.region.as_deref(),
            Field::Topic => self.topic.as_deref(),
            _ => None,
        }
    }

    /// Unset every constraint
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        self.constraints().next().is_none()
    }

    /// Set constraints in field order
    pub fn constraints(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::FILTERABLE
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    /// True when `record` satisfies every set constraint.
    ///
    /// A record without the constrained attribute never matches.
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints()
            .all(|(field, wanted)| record.field(field) == Some(wanted))
    }

    fn slot_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Country => Some(&mut self.country),
            Field::Sector => Some(&mut self.sector),
            Field::Region => Some(&mut self.region),
            Field::Topic => Some(&mut self.topic),
            _ => None,
        }
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        for (i, (field, value)) in self.constraints().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field, value)?;
        }
        Ok(())
    }
}

/// Records satisfying `criteria`, in input order
pub fn filter<'a, I>(records: I, criteria: &FilterSelection) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Records whose title contains `query`, ignoring case, in input order.
///
/// An empty query returns every record, including untitled ones. Otherwise
/// untitled records never match.
pub fn search<'a, I>(records: I, query: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if query.is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record
                .title
                .as_deref()
                .map(|title| title.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new()
                .titled("Oil prices rise")
                .with(Field::Country, "USA")
                .with(Field::Sector, "Energy")
                .with(Field::Region, "Northern America"),
            Record::new()
                .titled("Hospital capacity")
                .with(Field::Country, "USA")
                .with(Field::Sector, "Health"),
            Record::new()
                .titled("North Sea gas")
                .with(Field::Country, "UK")
                .with(Field::Sector, "Energy")
                .with(Field::Topic, "gas"),
            Record::new().with(Field::Sector, "Energy"),
        ]
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let records = sample();
        let result = filter(&records, &FilterSelection::new());
        assert_eq!(result.len(), records.len());
        for (kept, original) in result.iter().zip(&records) {
            assert!(std::ptr::eq(*kept, original));
        }
    }

    #[test]
    fn test_single_field_soundness_and_completeness() {
        let records = sample();
        let criteria = FilterSelection::new().with(Field::Sector, "Energy");
        let result = filter(&records, &criteria);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|r| r.sector.as_deref() == Some("Energy")));
        for record in &records {
            let kept = result.iter().any(|r| std::ptr::eq(*r, record));
            assert_eq!(kept, record.sector.as_deref() == Some("Energy"));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let criteria = FilterSelection::new()
            .with(Field::Country, "USA")
            .with(Field::Sector, "Energy");

        let once = filter(&records, &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = sample();
        let result = filter(&records, &FilterSelection::new().with(Field::Sector, "Energy"));
        let titles: Vec<_> = result.iter().map(|r| r.title_or_empty()).collect();
        assert_eq!(titles, vec!["Oil prices rise", "North Sea gas", ""]);
    }

    #[test]
    fn test_missing_field_never_matches() {
        let records = sample();
        let result = filter(&records, &FilterSelection::new().with(Field::Topic, "gas"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title_or_empty(), "North Sea gas");
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let records = sample();
        let result = filter(&records, &FilterSelection::new().with(Field::Country, "usa"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_empty_collection() {
        let records: Vec<Record> = Vec::new();
        let criteria = FilterSelection::new().with(Field::Region, "Asia");
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_set_empty_value_unsets() {
        let mut selection = FilterSelection::new().with(Field::Country, "USA");
        assert!(!selection.is_empty());

        assert!(selection.set(Field::Country, Some(String::new())));
        assert!(selection.is_empty());
        assert_eq!(selection.get(Field::Country), None);
    }

    #[test]
    fn test_set_rejects_unfilterable_field() {
        let mut selection = FilterSelection::new();
        assert!(!selection.set(Field::Intensity, Some("6".to_string())));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_display() {
        assert_eq!(FilterSelection::new().to_string(), "none");
        let selection = FilterSelection::new()
            .with(Field::Topic, "oil")
            .with(Field::Country, "USA");
        assert_eq!(selection.to_string(), "country=USA, topic=oil");
    }

    #[test]
    fn test_search_empty_query_returns_all() {
        let records = sample();
        assert_eq!(search(&records, "").len(), records.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let result = search(&records, "GAS");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title_or_empty(), "North Sea gas");
    }

    #[test]
    fn test_search_no_match() {
        let records = sample();
        assert!(search(&records, "FOO").is_empty());
    }

    #[test]
    fn test_search_skips_untitled_records() {
        let records = sample();
        // Every titled record contains a space; the untitled one must not match
        assert_eq!(search(&records, " ").len(), 3);
    }
}
