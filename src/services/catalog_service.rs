use std::sync::{Arc, RwLock};

use crate::models::{CatalogSnapshot, KpiGroup, KpiRecord, SearchPage};
use crate::services::kolada_service::StatisticsApi;
use crate::utils::AppError;

pub const PER_PAGE: usize = 50;

// Kolada lists internal "Enhetsdata" unit-level groups in the same
// catalog; the front-end never charts those.
const EXCLUDED_TITLE_PREFIX: &str = "Enhets";

/// Process-wide KPI catalog cache. Starts empty, populated lazily on
/// first access, never refreshed for the life of the process. Two
/// concurrent first calls may both fetch; both store an equivalent
/// snapshot, so the duplicate work is harmless.
pub struct CatalogCache {
    api: Arc<dyn StatisticsApi>,
    snapshot: RwLock<Option<Arc<CatalogSnapshot>>>,
}

impl CatalogCache {
    pub fn new(api: Arc<dyn StatisticsApi>) -> Self {
        CatalogCache {
            api,
            snapshot: RwLock::new(None),
        }
    }

    /// Returns the cached catalog, fetching and flattening it from the
    /// upstream group listing on first call. On upstream failure the
    /// cache stays empty and the next call retries.
    pub async fn get_catalog(&self) -> Result<Arc<CatalogSnapshot>, AppError> {
        let cached = self.snapshot.read().ok().and_then(|guard| guard.clone());
        if let Some(snapshot) = cached {
            log::info!(
                "📦 Cache HIT - Returning {} KPIs from cache. Last updated: {}",
                snapshot.kpis.len(),
                snapshot.last_update
            );
            return Ok(snapshot);
        }

        log::info!("📡 Cache MISS - Fetching KPIs from API");
        let groups = self.api.fetch_kpi_groups().await.map_err(|e| {
            log::error!("❌ API ERROR - Failed to fetch KPIs: {}", e);
            e
        })?;

        let snapshot = Arc::new(CatalogSnapshot {
            kpis: flatten_groups(&groups),
            last_update: chrono::Utc::now().to_rfc3339(),
        });

        if let Ok(mut guard) = self.snapshot.write() {
            *guard = Some(snapshot.clone());
            log::info!("💾 Cache UPDATED - Stored {} KPIs in cache", snapshot.kpis.len());
        }

        Ok(snapshot)
    }

    /// Case-insensitive substring search over KPI titles and group
    /// titles, paginated at [`PER_PAGE`]. An empty term degenerates to
    /// pure pagination. `page` below 1 is clamped to 1.
    pub async fn search(&self, term: &str, page: i64) -> Result<SearchPage, AppError> {
        let snapshot = self.get_catalog().await?;
        Ok(search_catalog(&snapshot.kpis, term, page))
    }
}

/// Flattens every group's member list into individual records; each
/// member inherits its parent group's title and id.
pub fn flatten_groups(groups: &[KpiGroup]) -> Vec<KpiRecord> {
    let mut kpis = Vec::new();
    for group in groups {
        for member in &group.members {
            kpis.push(KpiRecord {
                id: member.member_id.clone(),
                title: member.member_title.clone(),
                group_title: group.title.clone(),
                group_id: group.id.clone(),
            });
        }
    }
    kpis
}

pub fn search_catalog(kpis: &[KpiRecord], term: &str, page: i64) -> SearchPage {
    let filtered = kpis
        .iter()
        .filter(|kpi| !kpi.title.starts_with(EXCLUDED_TITLE_PREFIX));

    let term = term.to_lowercase();
    let matching: Vec<&KpiRecord> = if term.is_empty() {
        filtered.collect()
    } else {
        filtered
            .filter(|kpi| {
                kpi.title.to_lowercase().contains(&term)
                    || kpi.group_title.to_lowercase().contains(&term)
            })
            .collect()
    };

    let page = page.max(1) as usize;
    let start = (page - 1) * PER_PAGE;

    SearchPage {
        results: matching.iter().skip(start).take(PER_PAGE).map(|&kpi| kpi.clone()).collect(),
        has_more: start + PER_PAGE < matching.len(),
    }
}
