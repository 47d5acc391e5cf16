//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{ErrorKind, LineId, StationId};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_section),
        )
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    payload: Result<Json<CreateStationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let station = state.service.create_station(&req.name).await?;
    let location = format!("/stations/{}", station.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from(&station)),
    )
        .into_response())
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.service.list_stations().await;
    Json(stations.iter().map(StationResponse::from).collect())
}

async fn delete_station(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.service.delete_station(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_line(
    State(state): State<AppState>,
    payload: Result<Json<CreateLineRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let line = state.service.create_line(req.into()).await?;
    let location = format!("/lines/{}", line.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(LineResponse::from_line(&line)),
    )
        .into_response())
}

async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.service.list_lines().await;
    Json(lines.iter().map(LineResponse::from_line).collect())
}

async fn show_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let line = state.service.get_line(LineId(id)).await?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn update_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateLineRequest>, JsonRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let line = state
        .service
        .update_line(LineId(id), &req.name, &req.color)
        .await?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn delete_line(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.service.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a section to a line.
async fn add_section(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<SectionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(id) = id?;
    let Json(req) = payload?;
    let view = state
        .service
        .add_section(
            LineId(id),
            req.up_station_id,
            req.down_station_id,
            req.distance,
        )
        .await?;
    let location = format!("/lines/{}/sections", view.line_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(SectionResponse::from(&view)),
    )
        .into_response())
}

/// Remove the last section of a line.
async fn remove_section(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    query: Result<Query<RemoveSectionQuery>, QueryRejection>,
) -> Result<Json<SectionResponse>, AppError> {
    let Path(id) = id?;
    let Query(query) = query?;
    let view = state
        .service
        .remove_section(LineId(id), query.station_id)
        .await?;
    Ok(Json(SectionResponse::from(&view)))
}

/// Shortest path between two stations.
async fn find_path(
    State(state): State<AppState>,
    query: Result<Query<PathQuery>, QueryRejection>,
) -> Result<Json<PathResponse>, AppError> {
    let Query(query) = query?;
    let path = state.service.find_path(query.source, query.target).await?;
    Ok(Json(PathResponse::from(&path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { code: &'static str, message: String },
    NotFound { code: &'static str, message: String },
}

impl AppError {
    /// Input that could not be extracted from the request.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            code: ErrorKind::InvalidRequest.code(),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let kind = e.kind();
        let code = kind.code();
        let message = e.to_string();

        match kind {
            ErrorKind::StationNotFound | ErrorKind::LineNotFound => {
                AppError::NotFound { code, message }
            }
            _ => AppError::BadRequest { code, message },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::invalid_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::BadRequest { code, message } | AppError::NotFound { code, message } => {
                (code, message)
            }
        };

        warn!(%status, code, %message, "request rejected");

        let body = Json(ErrorResponse {
            error: message,
            code,
        });
        (status, body).into_response()
    }
}
