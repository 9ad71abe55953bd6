use crate::core::aggregator::summarize;
use crate::domain::model::{Listings, SalaryBounds, SalaryStats};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A paginated vacancy search service.
///
/// `fetch` and `salary_bounds` are independent: fetching never filters, and
/// the filter never talks to the network.
#[async_trait]
pub trait VacancySource: Send + Sync {
    type Record: Send + 'static;

    /// Display title of the report built from this source.
    fn title(&self) -> &str;

    /// Retrieves every page of listings for `term`.
    async fn fetch(&self, term: &str) -> Result<Listings<Self::Record>>;

    /// Source-specific filter; `None` means the record is not usable.
    fn salary_bounds(&self, record: &Self::Record) -> Option<SalaryBounds>;

    fn aggregate(&self, records: &[Self::Record]) -> SalaryStats {
        summarize(
            records
                .iter()
                .filter_map(|record| self.salary_bounds(record))
                .map(|bounds| bounds.estimate()),
        )
    }
}
