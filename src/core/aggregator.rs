use crate::domain::model::SalaryStats;

/// Counts the estimates and rounds their mean to the nearest integer.
pub fn summarize<I>(estimates: I) -> SalaryStats
where
    I: IntoIterator<Item = f64>,
{
    let (usable, total) = estimates
        .into_iter()
        .fold((0usize, 0.0f64), |(count, sum), estimate| {
            (count + 1, sum + estimate)
        });

    let average = if usable > 0 {
        Some((total / usable as f64).round() as i64)
    } else {
        None
    };

    SalaryStats { usable, average }
}
