use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::models::DataEntry;
use crate::services::data_service;
use crate::services::kolada_service::StatisticsApi;
use crate::services::municipality_service;
use crate::utils::AppError;

#[derive(Deserialize)]
pub struct MunicipalityDataQuery {
    pub year: Option<String>,
}

/// GET /municipality_ids
/// All kommun-level entries from the static reference file.
#[utoipa::path(
    get,
    path = "/municipality_ids",
    tag = "Municipalities",
    responses(
        (status = 200, description = "Kommun ids and type codes", body = [crate::models::MunicipalityRecord]),
        (status = 500, description = "Reference file missing or malformed")
    )
)]
pub async fn get_municipality_ids() -> HttpResponse {
    match municipality_service::load_kommuner() {
        Ok(kommuner) => HttpResponse::Ok().json(kommuner),
        Err(e) => {
            log::error!("❌ Failed to load municipality reference: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

/// GET /municipality_data/{kpi_id}?year=2024
/// Raw upstream values for one KPI across every kommun at one year.
/// A missing year answers an empty list, not an error.
#[utoipa::path(
    get,
    path = "/municipality_data/{kpi_id}",
    tag = "Municipalities",
    params(
        ("kpi_id" = String, Path, description = "Kolada KPI id"),
        ("year" = Option<String>, Query, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Upstream value entries, one per kommun", body = [DataEntry]),
        (status = 500, description = "Upstream fetch failed")
    )
)]
pub async fn get_municipality_data(
    path: web::Path<String>,
    query: web::Query<MunicipalityDataQuery>,
    api: web::Data<dyn StatisticsApi>,
) -> HttpResponse {
    let kpi_id = path.into_inner();
    log::info!("🗺️ GET /municipality_data/{}?year={:?}", kpi_id, query.year);

    match data_service::municipality_values(api.get_ref(), &kpi_id, query.year.as_deref()).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(AppError::MissingParameter(_)) => HttpResponse::Ok().json(Vec::<DataEntry>::new()),
        Err(e) => {
            log::error!("❌ Failed to fetch municipality data: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
