use crate::models::{DataEntry, TimeSeriesPoint};
use crate::services::kolada_service::StatisticsApi;
use crate::services::municipality_service;
use crate::utils::AppError;

// Historical charts start here; Kolada coverage before 2017 is spotty
// for many KPIs.
const HISTORY_START_YEAR: i32 = 2017;

// "T" is the aggregate row; "K"/"M" are the gender breakdowns.
const TOTAL_GENDER: &str = "T";

/// The year range offered by the front-end picker: the current year
/// and the five before it, descending.
pub fn available_years(current_year: i32) -> Vec<String> {
    (0..6).map(|offset| (current_year - offset).to_string()).collect()
}

/// One upstream call covering every kommun for a single year; the
/// upstream value entries are passed through unmodified.
pub async fn municipality_values(
    api: &dyn StatisticsApi,
    kpi_id: &str,
    year: Option<&str>,
) -> Result<Vec<DataEntry>, AppError> {
    let year = year
        .filter(|y| !y.is_empty())
        .ok_or_else(|| AppError::MissingParameter("year".to_string()))?;

    let kommuner = municipality_service::load_kommuner()?;
    let ids: Vec<&str> = kommuner.iter().map(|m| m.id.as_str()).collect();

    api.fetch_kpi_data(kpi_id, &ids.join(","), year).await
}

/// Time series for one KPI/kommun pair, 2017 through the current year.
/// Keeps exactly the aggregate ("T") value per year; years without a
/// non-null total are omitted.
pub async fn historical_series(
    api: &dyn StatisticsApi,
    kpi_id: &str,
    municipality_id: &str,
    current_year: i32,
) -> Result<Vec<TimeSeriesPoint>, AppError> {
    let years: Vec<String> = (HISTORY_START_YEAR..=current_year).map(|y| y.to_string()).collect();

    let entries = api.fetch_kpi_data(kpi_id, municipality_id, &years.join(",")).await?;

    let mut series = Vec::new();
    for entry in &entries {
        for value in &entry.values {
            if value.gender == TOTAL_GENDER {
                if let Some(total) = value.value {
                    series.push(TimeSeriesPoint {
                        year: entry.period.to_string(),
                        value: total,
                    });
                }
            }
        }
    }

    Ok(series)
}
