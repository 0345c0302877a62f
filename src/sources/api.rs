use crate::models::Property;
use crate::sources::traits::PropertySource;
use crate::sources::types::ApiParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Property list served by the rental REST API
pub struct RentalApiSource {
    client: Client,
    params: ApiParams,
}

impl RentalApiSource {
    /// Create a source for every listing on the default local API
    pub fn new() -> Result<Self> {
        Self::with_params(ApiParams::default())
    }

    /// Create a source with custom connection parameters
    pub fn with_params(params: ApiParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .user_agent(concat!("rental-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, params })
    }

    pub fn params(&self) -> &ApiParams {
        &self.params
    }
}

/// Decode a `GET /Properties` body. Records that cannot be read as a
/// property (no id, wrong shape) are skipped rather than failing the list.
pub fn parse_properties(body: &str) -> Result<Vec<Property>> {
    let records: Vec<Value> =
        serde_json::from_str(body).context("Response body is not a JSON array")?;

    let total = records.len();
    let mut properties = Vec::with_capacity(total);
    for (idx, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Property>(record) {
            Ok(property) => properties.push(property),
            Err(e) => warn!("Skipped property record {}: {}", idx, e),
        }
    }

    if properties.len() < total {
        info!("Kept {} of {} property records", properties.len(), total);
    }
    Ok(properties)
}

#[async_trait]
impl PropertySource for RentalApiSource {
    async fn fetch(&self) -> Result<Vec<Property>> {
        let url = self.params.url();
        info!("Fetching properties ({:?})", self.params.scope);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach rental API")?;

        if !response.status().is_success() {
            warn!("Rental API returned status: {}", response.status());
            anyhow::bail!("Failed to fetch {}: {}", url, response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        debug!("Downloaded {} bytes", body.len());

        let properties = parse_properties(&body)?;
        info!("Loaded {} properties from API", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "rental-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_records_without_id() {
        let body = r#"[
            {"propertyId": 1, "city": "Kathmandu", "price": "5000"},
            {"city": "Pokhara"},
            {"propertyId": 3, "price": 8000}
        ]"#;

        let properties = parse_properties(body).unwrap();
        let ids: Vec<i64> = properties.iter().map(|p| p.property_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(properties[1].price, Some(8000));
    }

    #[test]
    fn test_parse_keeps_records_with_null_fields() {
        let body = r#"[
            {"propertyId": 1, "city": "Kathmandu", "description": null, "price": "5000"},
            {"propertyId": 2, "city": "Pokhara", "images": null, "status": null}
        ]"#;

        let properties = parse_properties(body).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].description, "");
        assert_eq!(properties[0].price, Some(5000));
        assert!(properties[1].images.is_empty());
        assert_eq!(properties[1].status, crate::models::PropertyStatus::default());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        assert!(parse_properties(r#"{"error": "unauthorized"}"#).is_err());
        assert!(parse_properties("<html>").is_err());
    }

    #[test]
    fn test_with_params_keeps_scope() {
        let params = ApiParams {
            scope: crate::sources::Scope::Landlord(9),
            ..Default::default()
        };
        let source = RentalApiSource::with_params(params).unwrap();
        assert!(source.params().url().ends_with("/Properties/Landlord/9"));
        assert_eq!(source.source_name(), "rental-api");
    }
}
