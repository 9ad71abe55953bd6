use crate::adapters::http::get_json;
use crate::adapters::{lenient_items, lenient_number, lenient_object, lenient_string};
use crate::config::{search_text, HeadHunterConfig};
use crate::domain::model::{Listings, SalaryBounds};
use crate::domain::ports::VacancySource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "HeadHunter";

/// One page of `GET /vacancies`.
#[derive(Debug, Clone, Deserialize)]
pub struct HhPage {
    #[serde(default, deserialize_with = "lenient_items")]
    pub items: Vec<HhVacancy>,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub found: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhSalary {
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub to: Option<f64>,
}

pub struct HeadHunterSource {
    client: Client,
    config: HeadHunterConfig,
}

impl HeadHunterSource {
    pub fn new(client: Client, config: HeadHunterConfig) -> Self {
        Self { client, config }
    }

    async fn fetch_page(&self, text: &str, page: u32) -> Result<HhPage> {
        tracing::debug!("Requesting {} page {} for '{}'", SOURCE_NAME, page, text);

        let request = self.client.get(&self.config.endpoint).query(&[
            ("text", text.to_string()),
            ("area", self.config.area.to_string()),
            ("only_with_salary", self.config.only_with_salary.to_string()),
            ("period", self.config.period.to_string()),
            ("per_page", self.config.per_page.to_string()),
            ("page", page.to_string()),
        ]);

        get_json(SOURCE_NAME, request).await
    }
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    type Record = HhVacancy;

    fn title(&self) -> &str {
        &self.config.title
    }

    /// Walks pages until the last page the service reports.
    async fn fetch(&self, term: &str) -> Result<Listings<HhVacancy>> {
        let text = search_text(&self.config.keyword_prefix, term);
        let mut records = Vec::new();
        let mut page = 0;

        let found = loop {
            let response = self.fetch_page(&text, page).await?;
            records.extend(response.items);

            if page >= response.pages.saturating_sub(1) {
                break response.found;
            }
            page += 1;
        };

        tracing::debug!(
            "{}: {} pages, {} records for '{}'",
            SOURCE_NAME,
            page + 1,
            records.len(),
            term
        );

        Ok(Listings { found, records })
    }

    /// Only salaries in the configured currency count. A zero bound is a real value.
    fn salary_bounds(&self, record: &HhVacancy) -> Option<SalaryBounds> {
        let salary = record.salary.as_ref()?;

        if salary.currency.as_deref() != Some(self.config.currency.as_str()) {
            tracing::trace!(
                "Skipping {:?}: currency {:?}",
                record.name,
                salary.currency
            );
            return None;
        }

        SalaryBounds::new(salary.from, salary.to)
    }
}
