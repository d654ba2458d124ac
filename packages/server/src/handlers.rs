//! HTTP handler functions for the fire map API.

use actix_web::{HttpResponse, web};
use fire_map_analytics::{aggregate, filter, kpi, seasonal};
use fire_map_analytics_models::FireFilter;
use fire_map_fire_models::FireCause;
use fire_map_geography_models::AutonomousCommunity;
use fire_map_server_models::{
    ApiCause, ApiCauseEvolution, ApiChoroplethEntry, ApiCommunity, ApiHealth, ApiMajorFire,
    ApiMeta, ApiRanking, ApiSeasonality, ApiSummary, DashboardQueryParams,
};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/meta`
///
/// Returns the dataset year range and the community/cause taxonomies
/// backing the filter controls.
pub async fn meta(state: web::Data<AppState>) -> HttpResponse {
    let communities = AutonomousCommunity::all()
        .iter()
        .map(|c| ApiCommunity {
            code: c.code(),
            name: c.name().to_string(),
        })
        .collect();

    let causes = FireCause::all()
        .iter()
        .map(|c| ApiCause {
            code: c.code(),
            name: c.name().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ApiMeta {
        year_min: state.year_min,
        year_max: state.year_max,
        total_records: state.records.len() as u64,
        communities,
        causes,
    })
}

/// `GET /api/summary`
///
/// Returns the KPI card values for the active filter.
pub async fn summary(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let active = build_filter(&params);
    let records = filter::apply(&state.records, &active);
    HttpResponse::Ok().json(ApiSummary::from(kpi::summary(&records)))
}

/// `GET /api/choropleth`
///
/// Returns per-province burned-area totals over the full dataset. The map
/// deliberately ignores the active filter: filtering only moves the focus,
/// the shading stays comparable across filter changes.
pub async fn choropleth(state: web::Data<AppState>) -> HttpResponse {
    let records: Vec<&_> = state.records.iter().collect();
    let entries: Vec<ApiChoroplethEntry> = aggregate::burned_area_by_province(&records)
        .into_iter()
        .map(ApiChoroplethEntry::from)
        .collect();
    HttpResponse::Ok().json(entries)
}

/// `GET /api/ranking`
///
/// Returns the regional ranking for the active filter.
pub async fn ranking(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let active = build_filter(&params);
    let records = filter::apply(&state.records, &active);
    HttpResponse::Ok().json(ApiRanking::from(aggregate::regional_ranking(&records)))
}

/// `GET /api/causes`
///
/// Returns the cause-evolution series for the active filter.
pub async fn causes(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let active = build_filter(&params);
    let records = filter::apply(&state.records, &active);
    HttpResponse::Ok().json(ApiCauseEvolution::from(aggregate::cause_evolution(&records)))
}

/// `GET /api/seasonality`
///
/// Returns the seasonal density grid for the active filter, or JSON `null`
/// when too few weeks qualify.
pub async fn seasonality(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let active = build_filter(&params);
    let records = filter::apply(&state.records, &active);
    HttpResponse::Ok().json(seasonal::seasonal_distribution(&records).map(ApiSeasonality::from))
}

/// `GET /api/fires/major`
///
/// Returns the major-fire markers for a focused community. The `community`
/// query parameter is required.
pub async fn major_fires(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let Some(community) = params
        .community
        .and_then(|code| AutonomousCommunity::from_code(code).ok())
    else {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "A valid community code is required"
        }));
    };

    let records: Vec<&_> = state.records.iter().collect();
    let markers: Vec<ApiMajorFire> = aggregate::major_fires(&records, community)
        .into_iter()
        .map(ApiMajorFire::from)
        .collect();
    HttpResponse::Ok().json(markers)
}

/// `GET /api/geo/provinces`
///
/// Returns the province boundary layer as `GeoJSON`.
pub async fn geo_provinces(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/geo+json")
        .body(state.provinces_geojson.clone())
}

/// `GET /api/geo/communities`
///
/// Returns the dissolved community boundary layer as `GeoJSON`.
pub async fn geo_communities(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/geo+json")
        .body(state.communities_geojson.clone())
}

/// Builds the record filter from the shared query parameters.
///
/// Unknown community or cause codes are ignored rather than rejected; the
/// filter controls only offer valid codes.
fn build_filter(params: &DashboardQueryParams) -> FireFilter {
    let community = params
        .community
        .and_then(|code| AutonomousCommunity::from_code(code).ok());

    let causes: Vec<FireCause> = params
        .causes
        .as_deref()
        .map(|s| {
            s.split(',')
                .filter_map(|c| c.trim().parse::<u8>().ok())
                .filter_map(|code| FireCause::from_code(code).ok())
                .collect()
        })
        .unwrap_or_default();

    FireFilter {
        year_from: params.year_from,
        year_to: params.year_to,
        community,
        causes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test::{self}};
    use chrono::{Datelike, NaiveDate};
    use fire_map_fire_models::{FireRecord, FireSizeClass};
    use fire_map_geography::ProvinceAtlas;
    use fire_map_geography_models::Province;

    fn params(
        year_from: Option<i32>,
        community: Option<u8>,
        causes: Option<&str>,
    ) -> DashboardQueryParams {
        DashboardQueryParams {
            year_from,
            year_to: None,
            community,
            causes: causes.map(ToString::to_string),
        }
    }

    #[test]
    fn builds_filter_from_codes() {
        let filter = build_filter(&params(Some(1990), Some(3), Some("1,4")));
        assert_eq!(filter.year_from, Some(1990));
        assert_eq!(filter.community, Some(AutonomousCommunity::Galicia));
        assert_eq!(filter.causes, vec![FireCause::Lightning, FireCause::Arson]);
    }

    #[test]
    fn ignores_unknown_codes() {
        let filter = build_filter(&params(None, Some(99), Some("1,junk,42")));
        assert_eq!(filter.community, None);
        assert_eq!(filter.causes, vec![FireCause::Lightning]);
    }

    #[test]
    fn empty_params_build_the_default_filter() {
        let filter = build_filter(&params(None, None, None));
        assert_eq!(filter, FireFilter::default());
    }

    fn sample_record(year: i32) -> FireRecord {
        let date = NaiveDate::from_ymd_opt(year, 8, 15).unwrap();
        FireRecord {
            id: 1,
            date,
            year,
            month: 8,
            week: date.iso_week().week(),
            latitude: 42.3,
            longitude: -7.5,
            explicit_coords: true,
            community: AutonomousCommunity::Galicia,
            province: Province::Ourense,
            municipality: "Verín".to_string(),
            cause: FireCause::Arson,
            size_class: FireSizeClass::Fire,
            area_ha: 120.0,
            deaths: None,
            injuries: None,
            control_time_min: None,
            extinction_time_min: None,
            personnel: None,
            resources: None,
            operational_cost: None,
            economic_losses: None,
        }
    }

    #[actix_web::test]
    async fn summary_endpoint_reports_filtered_totals() {
        let state = web::Data::new(AppState::new(
            vec![sample_record(1990), sample_record(1995)],
            &ProvinceAtlas::new(Vec::new()),
        ));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/summary", web::get().to(summary)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/summary?yearFrom=1993")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["totalFires"], 1);
        assert_eq!(body["peakYear"], 1995);
    }

    #[actix_web::test]
    async fn major_fires_endpoint_requires_a_community() {
        let state = web::Data::new(AppState::new(
            vec![sample_record(1990)],
            &ProvinceAtlas::new(Vec::new()),
        ));
        let app = test::init_service(
            App::new()
                .app_data(state)
                .route("/api/fires/major", web::get().to(major_fires)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/fires/major").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
