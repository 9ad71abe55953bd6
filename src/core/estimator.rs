use crate::domain::model::SalaryBounds;

const OPEN_TOP_FACTOR: f64 = 1.2;
const OPEN_BOTTOM_FACTOR: f64 = 0.8;

impl SalaryBounds {
    /// Point estimate of the range. Not rounded.
    pub fn estimate(&self) -> f64 {
        match *self {
            SalaryBounds::From(from) => OPEN_TOP_FACTOR * from,
            SalaryBounds::To(to) => OPEN_BOTTOM_FACTOR * to,
            SalaryBounds::Range { from, to } => (from + to) / 2.0,
        }
    }
}
