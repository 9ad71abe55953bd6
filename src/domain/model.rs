use serde::{Serialize, Serializer};

/// Shown in the average column when no listing carried usable salary data.
pub const AVERAGE_PLACEHOLDER: &str = "-";

/// Everything a source returned for one query term.
#[derive(Debug, Clone)]
pub struct Listings<R> {
    /// Total the service reports as matching, independent of salary data.
    pub found: u64,
    pub records: Vec<R>,
}

/// A salary range with at least one bound present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryBounds {
    From(f64),
    To(f64),
    Range { from: f64, to: f64 },
}

impl SalaryBounds {
    /// Returns `None` when both bounds are absent, so an estimate can never be
    /// requested for a listing without salary data.
    pub fn new(from: Option<f64>, to: Option<f64>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Some(SalaryBounds::Range { from, to }),
            (Some(from), None) => Some(SalaryBounds::From(from)),
            (None, Some(to)) => Some(SalaryBounds::To(to)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryStats {
    pub usable: usize,
    /// Present iff `usable > 0`.
    pub average: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub term: String,
    pub found: u64,
    pub usable: usize,
    #[serde(serialize_with = "serialize_average")]
    pub average: Option<i64>,
}

// A missing average is written as the placeholder, never as `null`.
fn serialize_average<S>(average: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match average {
        Some(average) => serializer.serialize_i64(*average),
        None => serializer.serialize_str(AVERAGE_PLACEHOLDER),
    }
}

impl ReportRow {
    pub fn new(term: impl Into<String>, found: u64, stats: SalaryStats) -> Self {
        Self {
            term: term.into(),
            found,
            usable: stats.usable,
            average: stats.average,
        }
    }

    pub fn average_cell(&self) -> String {
        self.average
            .map(|average| average.to_string())
            .unwrap_or_else(|| AVERAGE_PLACEHOLDER.to_string())
    }

    pub fn cells(&self) -> [String; 4] {
        [
            self.term.clone(),
            self.found.to_string(),
            self.usable.to_string(),
            self.average_cell(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<ReportRow>,
}
