use crate::adapters::http::get_json;
use crate::adapters::{lenient_items, lenient_number, lenient_string};
use crate::config::{search_text, SuperJobConfig};
use crate::domain::model::{Listings, SalaryBounds};
use crate::domain::ports::VacancySource;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "SuperJob";
const API_KEY_HEADER: &str = "X-Api-App-Id";

/// One page of `GET /2.0/vacancies/`.
#[derive(Debug, Clone, Deserialize)]
pub struct SjPage {
    #[serde(default, deserialize_with = "lenient_items")]
    pub objects: Vec<SjVacancy>,
    #[serde(default)]
    pub more: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SjVacancy {
    #[serde(default, deserialize_with = "lenient_string")]
    pub profession: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub payment_to: Option<f64>,
}

pub struct SuperJobSource {
    client: Client,
    config: SuperJobConfig,
    api_key: String,
}

impl SuperJobSource {
    /// Fails when no application key is configured.
    pub fn new(client: Client, config: SuperJobConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ReportError::MissingConfigError {
                field: "superjob.api_key".to_string(),
            })?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<SjPage> {
        tracing::debug!("Requesting {} page {} for '{}'", SOURCE_NAME, page, keyword);

        let request = self
            .client
            .get(&self.config.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[
                ("town", self.config.town.clone()),
                ("keyword", keyword.to_string()),
                ("page", page.to_string()),
                ("count", self.config.per_page.to_string()),
            ]);

        get_json(SOURCE_NAME, request).await
    }
}

#[async_trait]
impl VacancySource for SuperJobSource {
    type Record = SjVacancy;

    fn title(&self) -> &str {
        &self.config.title
    }

    /// The service reports no total, so `found` is the number of records collected.
    async fn fetch(&self, term: &str) -> Result<Listings<SjVacancy>> {
        let keyword = search_text(&self.config.keyword_prefix, term);
        let mut records = Vec::new();
        let mut page = 0;

        loop {
            let response = self.fetch_page(&keyword, page).await?;
            if response.objects.is_empty() {
                break;
            }
            records.extend(response.objects);
            if !response.more {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            "{}: {} records over {} pages for '{}'",
            SOURCE_NAME,
            records.len(),
            page + 1,
            term
        );

        Ok(Listings {
            found: records.len() as u64,
            records,
        })
    }

    /// Zero or negative payments mean "not specified". At least one bound must be
    /// positive; after that every present bound, zero included, is used.
    fn salary_bounds(&self, record: &SjVacancy) -> Option<SalaryBounds> {
        let has_payment = [record.payment_from, record.payment_to]
            .into_iter()
            .flatten()
            .any(|payment| payment > 0.0);

        if !has_payment {
            tracing::trace!("Skipping {:?}: no payment", record.profession);
            return None;
        }

        SalaryBounds::new(record.payment_from, record.payment_to)
    }
}
