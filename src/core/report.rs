use crate::core::table::{AsciiTable, Justify};
use crate::domain::model::{Report, ReportRow};
use crate::domain::ports::VacancySource;
use crate::utils::error::{ReportError, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub const REPORT_HEADER: [&str; 4] = [
    "Язык программирования",
    "Всего вакансий",
    "Подходящих вакансий",
    "Средняя зарплата",
];

/// Builds one report row per query term, in term order.
pub struct ReportBuilder {
    terms: Vec<String>,
    concurrency: usize,
}

impl ReportBuilder {
    pub fn new(terms: Vec<String>) -> Self {
        Self {
            terms,
            concurrency: 1,
        }
    }

    /// Number of terms processed at once. Pages of a single term are always
    /// requested one after another.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn build<S>(&self, source: Arc<S>) -> Result<Report>
    where
        S: VacancySource + 'static,
    {
        tracing::info!(
            "Building report '{}' for {} terms",
            source.title(),
            self.terms.len()
        );

        let rows = if self.concurrency == 1 {
            self.build_sequential(source.as_ref()).await?
        } else {
            self.build_concurrent(Arc::clone(&source)).await?
        };

        Ok(Report {
            title: source.title().to_string(),
            rows,
        })
    }

    async fn build_sequential<S: VacancySource>(&self, source: &S) -> Result<Vec<ReportRow>> {
        let mut rows = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            rows.push(build_row(source, term).await?);
        }
        Ok(rows)
    }

    async fn build_concurrent<S>(&self, source: Arc<S>) -> Result<Vec<ReportRow>>
    where
        S: VacancySource + 'static,
    {
        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        for (index, term) in self.terms.iter().cloned().enumerate() {
            let source = Arc::clone(&source);
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|e| ReportError::TaskError {
                        message: e.to_string(),
                    })?;
                let row = build_row(source.as_ref(), &term).await?;
                Ok::<_, ReportError>((index, row))
            });
        }

        let mut slots: Vec<Option<ReportRow>> = vec![None; self.terms.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, row) = joined.map_err(|e| ReportError::TaskError {
                message: e.to_string(),
            })??;
            slots[index] = Some(row);
        }

        Ok(slots.into_iter().flatten().collect())
    }
}

async fn build_row<S: VacancySource + ?Sized>(source: &S, term: &str) -> Result<ReportRow> {
    let listings = source.fetch(term).await?;
    let stats = source.aggregate(&listings.records);

    tracing::info!(
        "{}: {} found, {} with salary, average {:?}",
        term,
        listings.found,
        stats.usable,
        stats.average
    );

    Ok(ReportRow::new(term, listings.found, stats))
}

impl Report {
    /// ASCII table with the found and usable columns right-justified.
    pub fn render(&self) -> String {
        let header = REPORT_HEADER.iter().map(|cell| cell.to_string()).collect();
        let mut table = AsciiTable::new(header)
            .title(&self.title)
            .justify(1, Justify::Right)
            .justify(2, Justify::Right);

        for row in &self.rows {
            table.push_row(row.cells().to_vec());
        }

        table.render()
    }
}
