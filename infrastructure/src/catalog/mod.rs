//! GitHub Models catalog listing

use jargon_domain::Credential;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Request ceiling for the listing call
pub const CATALOG_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected catalog format: {0}")]
    Format(String),
}

/// One model offered by the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Identifier usable as a wire model name
    pub id: String,
    /// Friendly name, when the catalog provides one
    pub name: Option<String>,
    pub publisher: Option<String>,
}

#[derive(Deserialize)]
struct RawEntry {
    id: Option<String>,
    name: Option<String>,
    friendly_name: Option<String>,
    publisher: Option<String>,
}

impl RawEntry {
    /// Older catalog shapes only carry `name`, which then serves as the id
    fn into_entry(self) -> Option<CatalogEntry> {
        let (id, name) = match self.id {
            Some(id) => (id, self.friendly_name.or(self.name)),
            None => (self.name?, self.friendly_name),
        };
        Some(CatalogEntry {
            id,
            name,
            publisher: self.publisher,
        })
    }
}

impl CatalogEntry {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Bare(Vec<serde_json::Value>),
    Wrapped { data: Vec<serde_json::Value> },
}

/// Client for the model catalog endpoint
pub struct GitHubModelCatalog {
    client: reqwest::Client,
    url: String,
}

impl GitHubModelCatalog {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(CATALOG_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch every model the token can see, sorted by id
    pub async fn list_available_models(
        &self,
        credential: &Credential,
    ) -> Result<Vec<CatalogEntry>, CatalogError> {
        info!(url = %self.url, "Listing available models");
        let response = self
            .client
            .get(&self.url)
            .header(reqwest::header::AUTHORIZATION, credential.bearer_header())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: crate::providers::error_message(&body),
            });
        }

        let entries = parse_catalog(&body)?;
        debug!(count = entries.len(), "Catalog entries parsed");
        Ok(entries)
    }
}

/// Accepts a bare array or an object with a `data` array; items without an
/// id are skipped
fn parse_catalog(body: &str) -> Result<Vec<CatalogEntry>, CatalogError> {
    let items = match serde_json::from_str::<CatalogBody>(body) {
        Ok(CatalogBody::Bare(items)) | Ok(CatalogBody::Wrapped { data: items }) => items,
        Err(e) => return Err(CatalogError::Format(e.to_string())),
    };

    let mut entries: Vec<CatalogEntry> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<RawEntry>(item).ok())
        .filter_map(RawEntry::into_entry)
        .collect();
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(entries)
}
