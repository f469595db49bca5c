use serde::{Deserialize, Serialize};

/// One flattened catalog entry: a KPI member together with the group
/// it was listed under.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct KpiRecord {
    pub id: String,
    pub title: String,
    pub group_title: String,
    pub group_id: String,
}

/// Upstream shape of `GET /v2/kpi_groups`.
#[derive(Debug, Serialize, Deserialize)]
pub struct KpiGroupsResponse {
    pub values: Vec<KpiGroup>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KpiGroup {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub members: Vec<KpiGroupMember>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KpiGroupMember {
    pub member_id: String,
    pub member_title: String,
}

/// The full flattened KPI catalog, built once per process.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub kpis: Vec<KpiRecord>,
    pub last_update: String,
}

/// Upstream shape of `GET /v2/data/kpi/{kpi}/municipality/{ids}/year/{years}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct KpiDataResponse {
    pub values: Vec<DataEntry>,
}

/// One municipality/period entry from the data endpoint. Serialized
/// back verbatim by the pass-through route.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct DataEntry {
    pub kpi: String,
    pub municipality: String,
    pub period: u32,
    pub values: Vec<DataValue>,
}

#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct DataValue {
    #[serde(default)]
    pub count: Option<i64>,
    pub gender: String,
    #[serde(default)]
    pub status: Option<String>,
    pub value: Option<f64>,
}

/// One aggregate ("T") measurement for a year.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct TimeSeriesPoint {
    pub year: String,
    pub value: f64,
}

/// One page of catalog search results.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SearchPage {
    pub results: Vec<KpiRecord>,
    pub has_more: bool,
}

impl SearchPage {
    pub fn empty() -> Self {
        SearchPage {
            results: Vec::new(),
            has_more: false,
        }
    }
}
