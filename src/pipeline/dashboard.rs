//! Dashboard View
//!
//! Composes the filter and aggregation steps into everything a renderer
//! needs for one frame: the counts for the header and the six chart
//! specs. Rebuilt from scratch on every selection change; nothing is cached.

use serde::{Deserialize, Serialize};

use super::aggregate::{distinct_values, group_count, likelihood_series, GroupedCount, SeriesPoint};
use super::filter::{filter, FilterSelection};
use crate::record::{Field, Record};

/// Segment colors, cycled by segment index
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#FF5A5F"];

/// Color of the segment at `index`
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// How a chart is drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Donut,
    Bar,
    Line,
}

/// Data behind a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "points", rename_all = "lowercase")]
pub enum ChartData {
    Grouped(Vec<GroupedCount>),
    Series(Vec<SeriesPoint>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Grouped(groups) => groups.len(),
            ChartData::Series(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (label, value) pairs regardless of the underlying shape
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        match self {
            ChartData::Grouped(groups) => groups
                .iter()
                .map(|g| (g.key.as_str(), g.count as f64))
                .collect(),
            ChartData::Series(points) => points
                .iter()
                .map(|p| (p.label.as_str(), p.value))
                .collect(),
        }
    }
}

/// One chart of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Stable identifier, e.g. "country" or "likelihood"
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub data: ChartData,
}

impl ChartSpec {
    fn grouped(records: &[&Record], field: Field, kind: ChartKind) -> Self {
        Self {
            id: field.as_str().to_string(),
            title: format!("{} Distribution", field.label()),
            kind,
            data: ChartData::Grouped(group_count(records.iter().copied(), field)),
        }
    }

    fn likelihood(records: &[&Record]) -> Self {
        Self {
            id: "likelihood".to_string(),
            title: "Likelihood Over Time".to_string(),
            kind: ChartKind::Line,
            data: ChartData::Series(likelihood_series(records.iter().copied())),
        }
    }
}

/// Everything rendered for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Size of the full collection
    pub total: usize,
    /// Size of the filtered subset
    pub matched: usize,
    pub selection: FilterSelection,
    pub charts: Vec<ChartSpec>,
}

impl DashboardView {
    /// Filter `records` by `selection` and aggregate the subset
    pub fn build(records: &[Record], selection: &FilterSelection) -> Self {
        let subset = filter(records, selection);
        Self::from_subset(records.len(), &subset, selection)
    }

    /// Aggregate an already filtered subset
    pub fn from_subset(total: usize, subset: &[&Record], selection: &FilterSelection) -> Self {
        let charts = vec![
            ChartSpec::grouped(subset, Field::Country, ChartKind::Pie),
            ChartSpec::grouped(subset, Field::Sector, ChartKind::Bar),
            ChartSpec::likelihood(subset),
            ChartSpec::grouped(subset, Field::Intensity, ChartKind::Donut),
            ChartSpec::grouped(subset, Field::Region, ChartKind::Pie),
            ChartSpec::grouped(subset, Field::Topic, ChartKind::Bar),
        ];

        Self {
            total,
            matched: subset.len(),
            selection: selection.clone(),
            charts,
        }
    }

    /// Look up a chart by id
    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.id == id)
    }
}

/// Option lists of the filter selects, taken from the full collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub country: Vec<String>,
    pub sector: Vec<String>,
    pub region: Vec<String>,
    pub topic: Vec<String>,
}

impl FilterOptions {
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            country: distinct_values(records, Field::Country),
            sector: distinct_values(records, Field::Sector),
            region: distinct_values(records, Field::Region),
            topic: distinct_values(records, Field::Topic),
        }
    }

    /// Options of one select; empty for fields that cannot be filtered on
    pub fn get(&self, field: Field) -> &[String] {
        match field {
            Field::Country => &self.country,
            Field::Sector => &self.sector,
            Field::Region => &self.region,
            Field::Topic => &self.topic,
            _ => &[],
        }
    }
}
