use serde::{Deserialize, Serialize};

/// Static reference document: `{"values": [{"id": ..., "type": ...}]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MunicipalityReference {
    pub values: Vec<MunicipalityRecord>,
}

/// One entry from the municipality reference file. `type` is "K" for
/// kommun (municipality) or "L" for region-level entities.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct MunicipalityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}
