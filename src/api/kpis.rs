use actix_web::{web, HttpResponse};
use chrono::Datelike;
use serde::Deserialize;

use crate::models::SearchPage;
use crate::services::catalog_service::CatalogCache;
use crate::services::data_service;
use crate::services::kolada_service::StatisticsApi;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub page: Option<i64>,
}

/// GET /kpi_data
/// The year range offered by the front-end: current year and the five
/// before it, descending.
#[utoipa::path(
    get,
    path = "/kpi_data",
    tag = "KPIs",
    responses(
        (status = 200, description = "Available years, descending", body = [String])
    )
)]
pub async fn get_kpi_data() -> HttpResponse {
    let years = data_service::available_years(chrono::Local::now().year());
    HttpResponse::Ok().json(years)
}

/// GET /search_kpis?term=skol&page=1
/// Substring search over the cached KPI catalog. A failed catalog
/// fetch degrades to an empty page; the next request retries upstream.
#[utoipa::path(
    get,
    path = "/search_kpis",
    tag = "KPIs",
    params(
        ("term" = Option<String>, Query, description = "Search term matched against KPI and group titles"),
        ("page" = Option<i64>, Query, description = "1-based page number, 50 results per page")
    ),
    responses(
        (status = 200, description = "One page of matching KPIs", body = SearchPage)
    )
)]
pub async fn search_kpis(
    query: web::Query<SearchQuery>,
    catalog: web::Data<CatalogCache>,
) -> HttpResponse {
    let term = query.term.as_deref().unwrap_or("");
    let page = query.page.unwrap_or(1);
    log::info!("🔍 GET /search_kpis?term={}&page={}", term, page);

    match catalog.search(term, page).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => {
            log::error!("❌ KPI search failed: {}", e);
            HttpResponse::Ok().json(SearchPage::empty())
        }
    }
}

/// GET /historical_data/{kpi_id}/{municipality_id}
/// Total-only time series from 2017 through the current year.
#[utoipa::path(
    get,
    path = "/historical_data/{kpi_id}/{municipality_id}",
    tag = "KPIs",
    params(
        ("kpi_id" = String, Path, description = "Kolada KPI id"),
        ("municipality_id" = String, Path, description = "Kommun id")
    ),
    responses(
        (status = 200, description = "One total value per year", body = [crate::models::TimeSeriesPoint]),
        (status = 500, description = "Upstream fetch or transform failed")
    )
)]
pub async fn get_historical_data(
    path: web::Path<(String, String)>,
    api: web::Data<dyn StatisticsApi>,
) -> HttpResponse {
    let (kpi_id, municipality_id) = path.into_inner();
    log::info!("📈 GET /historical_data/{}/{}", kpi_id, municipality_id);

    let current_year = chrono::Local::now().year();
    match data_service::historical_series(api.get_ref(), &kpi_id, &municipality_id, current_year).await {
        Ok(series) => {
            log::info!("✅ {} historical points for KPI {}", series.len(), kpi_id);
            HttpResponse::Ok().json(series)
        }
        Err(e) => {
            log::error!("❌ Error fetching historical data: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataEntry, KpiGroup};
    use crate::utils::AppError;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct DownApi;

    #[async_trait]
    impl StatisticsApi for DownApi {
        async fn fetch_kpi_groups(&self) -> Result<Vec<KpiGroup>, AppError> {
            Err(AppError::UpstreamUnavailable("connection refused".to_string()))
        }

        async fn fetch_kpi_data(
            &self,
            _kpi_id: &str,
            _municipality_ids: &str,
            _years: &str,
        ) -> Result<Vec<DataEntry>, AppError> {
            Err(AppError::UpstreamUnavailable("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_kpi_data_returns_six_years_descending() {
        let app = test::init_service(
            App::new().route("/kpi_data", web::get().to(get_kpi_data)),
        )
        .await;

        let req = test::TestRequest::get().uri("/kpi_data").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let years: Vec<String> = test::read_body_json(resp).await;
        assert_eq!(years.len(), 6);
        for pair in years.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[actix_web::test]
    async fn test_search_degrades_to_empty_page_when_catalog_fetch_fails() {
        let api: Arc<dyn StatisticsApi> = Arc::new(DownApi);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(CatalogCache::new(api)))
                .route("/search_kpis", web::get().to(search_kpis)),
        )
        .await;

        let req = test::TestRequest::get().uri("/search_kpis?term=skol&page=1").to_request();
        let resp = test::call_service(&app, req).await;

        // Not an error status: the next request retries the fetch.
        assert_eq!(resp.status(), StatusCode::OK);
        let page: SearchPage = test::read_body_json(resp).await;
        assert!(page.results.is_empty());
        assert!(!page.has_more);
    }

    #[actix_web::test]
    async fn test_historical_data_failure_answers_error_payload_with_500() {
        let api: Arc<dyn StatisticsApi> = Arc::new(DownApi);
        let api_data: web::Data<dyn StatisticsApi> = web::Data::from(api);
        let app = test::init_service(App::new().app_data(api_data).route(
            "/historical_data/{kpi_id}/{municipality_id}",
            web::get().to(get_historical_data),
        ))
        .await;

        let req = test::TestRequest::get().uri("/historical_data/N00914/0114").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
    }
}
