use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kommundata Service API",
        version = "1.0.0",
        description = "JSON proxy for the Kolada public-sector statistics API. \n\n**Features:**\n- Flattened KPI catalog with in-memory caching\n- Substring search with pagination\n- Per-kommun values for one KPI/year\n- Total-only historical series per KPI/kommun"
    ),
    paths(
        crate::api::health::health_check,
        crate::api::kpis::get_kpi_data,
        crate::api::kpis::search_kpis,
        crate::api::kpis::get_historical_data,
        crate::api::municipalities::get_municipality_ids,
        crate::api::municipalities::get_municipality_data,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::KpiRecord,
            crate::models::SearchPage,
            crate::models::TimeSeriesPoint,
            crate::models::MunicipalityRecord,
            crate::models::DataEntry,
            crate::models::DataValue,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint for monitoring service status."),
        (name = "KPIs", description = "KPI catalog search and time-series endpoints."),
        (name = "Municipalities", description = "Kommun reference data and cross-kommun KPI values.")
    )
)]
pub struct ApiDoc;
