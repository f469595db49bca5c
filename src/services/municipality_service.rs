use crate::models::{MunicipalityRecord, MunicipalityReference};
use crate::utils::AppError;

const MUNICIPALITY_DATA_PATH: &str = "static/data/municipality_id.json";

// Kommun-level entities; "L" entries are regions and are never charted.
const KOMMUN_TYPE: &str = "K";

/// Reads the static municipality reference file and returns the
/// kommun-level ("K") entries. Loaded fresh on every call; the file is
/// small enough that caching it buys nothing.
pub fn load_kommuner() -> Result<Vec<MunicipalityRecord>, AppError> {
    let document = std::fs::read_to_string(MUNICIPALITY_DATA_PATH).map_err(|e| {
        AppError::NotFound(format!(
            "Failed to read municipality reference {}: {}",
            MUNICIPALITY_DATA_PATH, e
        ))
    })?;

    Ok(kommuner_only(parse_reference(&document)?))
}

pub fn parse_reference(document: &str) -> Result<Vec<MunicipalityRecord>, AppError> {
    let reference: MunicipalityReference = serde_json::from_str(document).map_err(|e| {
        AppError::UpstreamMalformed(format!("Failed to parse municipality reference: {}", e))
    })?;
    Ok(reference.values)
}

pub fn kommuner_only(records: Vec<MunicipalityRecord>) -> Vec<MunicipalityRecord> {
    records.into_iter().filter(|m| m.kind == KOMMUN_TYPE).collect()
}
