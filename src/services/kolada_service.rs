use async_trait::async_trait;
use std::time::Duration;

use crate::models::{DataEntry, KpiDataResponse, KpiGroup, KpiGroupsResponse};
use crate::utils::AppError;

const KOLADA_API_BASE: &str = "http://api.kolada.se/v2";

// The original front-end blocks on these calls, so keep them bounded.
const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// The two Kolada resources the service consumes. Handlers depend on
/// this trait so tests can substitute a fake.
#[async_trait]
pub trait StatisticsApi: Send + Sync {
    /// `GET /v2/kpi_groups` - the full KPI group listing.
    async fn fetch_kpi_groups(&self) -> Result<Vec<KpiGroup>, AppError>;

    /// `GET /v2/data/kpi/{kpi}/municipality/{ids}/year/{years}`.
    /// `municipality_ids` and `years` are comma-joined lists; they are
    /// interpolated verbatim, no validation happens on this side.
    async fn fetch_kpi_data(
        &self,
        kpi_id: &str,
        municipality_ids: &str,
        years: &str,
    ) -> Result<Vec<DataEntry>, AppError>;
}

pub struct KoladaClient {
    client: reqwest::Client,
    base_url: String,
}

impl KoladaClient {
    pub fn new() -> Self {
        Self::with_base_url(KOLADA_API_BASE)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        KoladaClient {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("Failed to reach Kolada: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::UpstreamMalformed(format!(
                "Kolada API error: {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::UpstreamMalformed(format!("Failed to parse Kolada response: {}", e)))
    }
}

#[async_trait]
impl StatisticsApi for KoladaClient {
    async fn fetch_kpi_groups(&self) -> Result<Vec<KpiGroup>, AppError> {
        let url = format!("{}/kpi_groups", self.base_url);
        log::info!("📡 GET {}", url);

        let body: KpiGroupsResponse = self.get_json(&url).await?;

        log::info!("✅ Retrieved {} KPI groups from Kolada", body.values.len());
        Ok(body.values)
    }

    async fn fetch_kpi_data(
        &self,
        kpi_id: &str,
        municipality_ids: &str,
        years: &str,
    ) -> Result<Vec<DataEntry>, AppError> {
        let url = format!(
            "{}/data/kpi/{}/municipality/{}/year/{}",
            self.base_url, kpi_id, municipality_ids, years
        );
        log::info!("📡 GET {}/data/kpi/{}/municipality/.../year/{}", self.base_url, kpi_id, years);

        let body: KpiDataResponse = self.get_json(&url).await?;

        log::info!("✅ Retrieved {} data entries for KPI {}", body.values.len(), kpi_id);
        Ok(body.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_base_url_maps_to_upstream_unavailable() {
        // Nothing listens on the discard port; connect is refused
        // immediately on loopback.
        let client = KoladaClient::with_base_url("http://127.0.0.1:9");

        let groups = client.fetch_kpi_groups().await;
        assert!(matches!(groups, Err(AppError::UpstreamUnavailable(_))));

        let data = client.fetch_kpi_data("N00914", "0114", "2024").await;
        assert!(matches!(data, Err(AppError::UpstreamUnavailable(_))));
    }
}
