//! Aggregator
//!
//! Projections that feed the charts:
//!
//! - `group_count`: (key, count) per distinct value of one field
//! - `likelihood_series`: one (title, likelihood) point per record
//! - `distinct_values`: the option list of a filter select
//!
//! Every output follows first-occurrence order of the input. Chart segment
//! order (and therefore segment color) depends on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::record::{Field, Record};

/// Group key used for records that lack the grouped attribute.
///
/// Absent values are counted, not dropped, so the counts of a grouping
/// always add up to the number of input records.
pub const MISSING_KEY: &str = "";

/// Number of records sharing one value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    pub key: String,
    pub count: usize,
}

impl GroupedCount {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// One point of the likelihood line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Count records per value of `field`, in first-occurrence order
pub fn group_count<'a, I>(records: I, field: Field) -> Vec<GroupedCount>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: Vec<GroupedCount> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for record in records {
        let key = record.field(field).unwrap_or(MISSING_KEY);
        match positions.get(key) {
            Some(&idx) => groups[idx].count += 1,
            None => {
                positions.insert(key, groups.len());
                groups.push(GroupedCount::new(key, 1));
            }
        }
    }

    groups
}

/// (title, likelihood) for every record, in input order.
///
/// Missing likelihoods plot as 0 and missing titles label as "".
pub fn likelihood_series<'a, I>(records: I) -> Vec<SeriesPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| SeriesPoint {
            label: record.title_or_empty().to_string(),
            value: record.likelihood_or_zero(),
        })
        .collect()
}

/// Distinct present values of `field`, in first-occurrence order
pub fn distinct_values<'a, I>(records: I, field: Field) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    group_count(records, field)
        .into_iter()
        .map(|group| group.key)
        .filter(|key| key != MISSING_KEY)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::filter::{filter, FilterSelection};

    fn country(value: &str) -> Record {
        Record::new().with(Field::Country, value)
    }

    #[test]
    fn test_group_count_first_occurrence_order() {
        let records = vec![country("A"), country("B"), country("A"), country("C")];
        let groups = group_count(&records, Field::Country);
        assert_eq!(
            groups,
            vec![
                GroupedCount::new("A", 2),
                GroupedCount::new("B", 1),
                GroupedCount::new("C", 1),
            ]
        );
    }

    #[test]
    fn test_group_count_missing_values_use_empty_key() {
        let records = vec![country("A"), Record::new(), country("A"), Record::new()];
        let groups = group_count(&records, Field::Country);
        assert_eq!(
            groups,
            vec![GroupedCount::new("A", 2), GroupedCount::new(MISSING_KEY, 2)]
        );
    }

    #[test]
    fn test_group_count_sums_to_input_length() {
        let records = vec![
            country("A"),
            Record::new(),
            country("B").with(Field::Sector, "Energy"),
            country("A").with(Field::Sector, "Energy"),
            country("D"),
        ];

        for field in Field::all() {
            let groups = group_count(&records, *field);
            let total: usize = groups.iter().map(|g| g.count).sum();
            assert_eq!(total, records.len(), "field {}", field);

            let mut keys: Vec<_> = groups.iter().map(|g| g.key.as_str()).collect();
            let mut expected: Vec<_> = records
                .iter()
                .map(|r| r.field(*field).unwrap_or(MISSING_KEY))
                .collect();
            keys.sort();
            expected.sort();
            expected.dedup();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_group_count_empty_input() {
        let records: Vec<Record> = Vec::new();
        assert!(group_count(&records, Field::Topic).is_empty());
    }

    #[test]
    fn test_filter_then_group_scenario() {
        let records = vec![
            country("USA").with(Field::Sector, "Energy"),
            country("USA").with(Field::Sector, "Health"),
            country("UK").with(Field::Sector, "Energy"),
        ];

        let usa = filter(&records, &FilterSelection::new().with(Field::Country, "USA"));
        assert_eq!(usa.len(), 2);

        let groups = group_count(usa, Field::Sector);
        assert_eq!(
            groups,
            vec![GroupedCount::new("Energy", 1), GroupedCount::new("Health", 1)]
        );
    }

    #[test]
    fn test_intensity_groups_by_string_form() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"intensity": 6}, {"intensity": "6"}, {"intensity": 16}]"#).unwrap();
        let groups = group_count(&records, Field::Intensity);
        assert_eq!(
            groups,
            vec![GroupedCount::new("6", 2), GroupedCount::new("16", 1)]
        );
    }

    #[test]
    fn test_likelihood_series_one_point_per_record() {
        let records = vec![
            Record::new().titled("first").with_likelihood(3.0),
            Record::new().titled("second"),
            Record::new().with_likelihood(1.0),
        ];
        let series = likelihood_series(&records);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0], SeriesPoint { label: "first".into(), value: 3.0 });
        assert_eq!(series[1], SeriesPoint { label: "second".into(), value: 0.0 });
        assert_eq!(series[2], SeriesPoint { label: String::new(), value: 1.0 });
    }

    #[test]
    fn test_distinct_values_skip_missing() {
        let records = vec![country("B"), Record::new(), country("A"), country("B")];
        assert_eq!(distinct_values(&records, Field::Country), vec!["B", "A"]);
    }
}
