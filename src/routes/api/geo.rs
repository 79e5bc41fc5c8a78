use axum::{Router, extract::Query, routing::get};
use serde::{Deserialize, Serialize};

use crate::{
    response::{ApiResult, JsonApiResponse},
    schema::{Coordinate, generate_google_maps_link},
};

#[derive(Debug, Deserialize)]
pub struct DistanceQuery {
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
}

#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize)]
pub struct DistanceResponse {
    pub from: Coordinate,
    pub to: Coordinate,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct MapsLinkResponse {
    pub url: String,
}

pub fn router() -> Router {
    Router::new()
        .route("/geo/distance", get(distance))
        .route("/geo/maps-link", get(maps_link))
}

async fn distance(Query(query): Query<DistanceQuery>) -> ApiResult<DistanceResponse> {
    let from = Coordinate::new(query.lat1, query.lon1)?;
    let to = Coordinate::new(query.lat2, query.lon2)?;
    JsonApiResponse::ok(DistanceResponse {
        distance_km: from.distance_km(&to),
        from,
        to,
    })
}

async fn maps_link(Query(query): Query<PointQuery>) -> ApiResult<MapsLinkResponse> {
    let url = generate_google_maps_link(query.lat, query.lng)?;
    JsonApiResponse::ok(MapsLinkResponse { url })
}
