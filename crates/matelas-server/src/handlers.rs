//! Route handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use log::info;
use serde::Serialize;

use matelas::{
    LayoutService, PointLayout,
    export::{CSV_FILE_NAME, ExportFormat},
    request::LayoutRequest,
};

use crate::{ApiError, page::INDEX_HTML};

/// Name reported by the health probe.
const SERVICE_NAME: &str = "matelas-calc";

#[derive(Debug, Serialize)]
pub struct HealthInfo {
    status: &'static str,
    service: &'static str,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

fn compute(
    service: &LayoutService,
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> Result<PointLayout, ApiError> {
    let Json(request) = payload?;
    let input = service.resolve(&request)?;
    Ok(service.compute(&input)?)
}

pub async fn calculate(
    State(service): State<Arc<LayoutService>>,
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> Result<Json<PointLayout>, ApiError> {
    let layout = compute(&service, payload)?;
    info!(points_count = layout.points().len(); "Layout served");

    Ok(Json(layout))
}

pub async fn download_csv(
    State(service): State<Arc<LayoutService>>,
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let layout = compute(&service, payload)?;
    let body = service.render_csv(&layout)?;
    info!(points_count = layout.points().len(); "CSV served");

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                ExportFormat::Csv.content_type().to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={CSV_FILE_NAME}"),
            ),
        ],
        body,
    )
        .into_response())
}
