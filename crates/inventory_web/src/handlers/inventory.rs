//! Root redirect, landing page and health check.

use actix_web::{web, HttpRequest, HttpResponse};
use inventory_core::item_service;
use log::debug;

use super::{html, redirect};
use crate::error::Result;
use crate::state::AppState;
use crate::views;

/// `GET /`
pub async fn root(req: HttpRequest) -> HttpResponse {
    debug!(
        "event=root_redirect module=web status=ok peer={}",
        req.peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );
    redirect("/inventory")
}

/// `GET /inventory`
pub async fn overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    let overview = state
        .run(|conn| Ok(item_service(conn).overview()?))
        .await?;
    Ok(html(views::inventory::overview(&overview)))
}

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": inventory_core::core_version(),
    }))
}
