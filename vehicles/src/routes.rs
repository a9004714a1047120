use askama::Template;
use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use shared::{ApiError, ApiResult, Db, FormBody, JsonBody, RecordId, Vehicle, VehiclePayload};
use tracing::info;

use crate::db;
use crate::templates::{EditPage, IndexPage};

const NOT_FOUND: &str = "Carro não encontrado";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub buscar_marca: Option<String>,
}

impl SearchParams {
    /// A blank search box means no filter.
    fn brand(&self) -> Option<&str> {
        self.buscar_marca
            .as_deref()
            .filter(|brand| !brand.is_empty())
    }
}

/// GET /?buscar_marca= - Inventory page
pub async fn index(conn: Db, Query(params): Query<SearchParams>) -> ApiResult<Html<String>> {
    let vehicles = db::list_vehicles(&conn, params.brand())?;
    let page = IndexPage {
        vehicles: &vehicles,
        search: params.brand().unwrap_or_default(),
    }
    .render()?;
    Ok(Html(page))
}

/// GET /carros?buscar_marca= - Vehicles as JSON
pub async fn list_vehicles(
    conn: Db,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Vehicle>>> {
    let vehicles = db::list_vehicles(&conn, params.brand())?;
    Ok(Json(vehicles))
}

/// Body of the 201 answer to the create form; browsers do not follow
/// `Location` on a 201, so the page refreshes back to the list itself.
const BACK_TO_LIST: &str = r#"<!DOCTYPE html><html><head><meta http-equiv="refresh" content="0; url=/"></head><body><a href="/">Voltar</a></body></html>"#;

/// POST /carros - Create from the inventory page form, then back to the list
pub async fn create_vehicle(
    conn: Db,
    FormBody(payload): FormBody<VehiclePayload>,
) -> ApiResult<impl IntoResponse> {
    let vehicle = db::insert_vehicle(&conn, payload.normalized())?;
    info!(id = vehicle.id, brand = %vehicle.brand, "vehicle created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, "/")],
        Html(BACK_TO_LIST),
    ))
}

/// GET /carros/:id
pub async fn get_vehicle(conn: Db, RecordId(id): RecordId) -> ApiResult<Json<Vehicle>> {
    let vehicle = db::get_vehicle(&conn, id)?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(Json(vehicle))
}

/// GET /editar/:id - Edit page, or back to the list if the vehicle is gone
///
/// An id that does not parse cannot name a vehicle, so it redirects too.
pub async fn edit_page(conn: Db, id: Option<RecordId>) -> ApiResult<Response> {
    let Some(RecordId(id)) = id else {
        return Ok(Redirect::to("/").into_response());
    };
    let Some(vehicle) = db::get_vehicle(&conn, id)? else {
        return Ok(Redirect::to("/").into_response());
    };
    let page = EditPage { vehicle: &vehicle }.render()?;
    Ok(Html(page).into_response())
}

/// PUT /carros/:id - Replace every field of a vehicle
pub async fn update_vehicle(
    conn: Db,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<VehiclePayload>,
) -> ApiResult<Json<Value>> {
    db::update_vehicle(&conn, id, payload.normalized())?.ok_or(ApiError::NotFound(NOT_FOUND))?;
    info!(id, "vehicle updated");
    Ok(Json(json!({ "status": "success" })))
}

/// DELETE /carros/:id
pub async fn delete_vehicle(conn: Db, RecordId(id): RecordId) -> ApiResult<StatusCode> {
    if db::delete_vehicle(&conn, id)? {
        info!(id, "vehicle deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(NOT_FOUND))
    }
}
