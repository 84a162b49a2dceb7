// src/server.rs
//! `GET /score` over HTTP.
//!
//! Each request builds its own source, request and report. The blocking fetch
//! runs on the blocking pool; nothing is shared between requests except the
//! read-only [`ServerConfig`].

use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::config::consts::DEFAULT_PORT;
use crate::config::{ExtractOptions, ScoreRequest, Seat};
use crate::error::{Error, Result};
use crate::extract::Report;
use crate::scrape::{self, Source};

/// Deployment defaults; query parameters override the ids.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub draw_url: Option<String>,
    pub tournament_id: Option<String>,
    pub match_id: Option<String>,
    pub player_id: Option<String>,
    pub side: Option<Seat>,
    pub options: ExtractOptions,
}

impl ServerConfig {
    /// Read `PORT`, `DRAW_URL`, `TOURNAMENT_ID`, `MATCH_ID`, `PLAYER_ID`,
    /// `PLAYER_SIDE`, `COLUMN_SCHEMA`, `MATCH_MODE`, `HISTORY_FORMAT`, `FLAG_MODE`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| get(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(p) => p.parse().map_err(|_| Error::Config(format!("PORT is not a port: {p}")))?,
            None => DEFAULT_PORT,
        };

        let side: Option<Seat> = var("PLAYER_SIDE").map(|v| v.parse()).transpose()?;

        let mut options = ExtractOptions::default();
        if let Some(v) = var("COLUMN_SCHEMA") { options.column_schema = v.parse()?; }
        if let Some(v) = var("MATCH_MODE") { options.match_mode = v.parse()?; }
        if let Some(v) = var("HISTORY_FORMAT") { options.history_format = v.parse()?; }
        if let Some(v) = var("FLAG_MODE") { options.flag_mode = v.parse()?; }

        Ok(Self {
            port,
            draw_url: var("DRAW_URL"),
            tournament_id: var("TOURNAMENT_ID"),
            match_id: var("MATCH_ID"),
            player_id: var("PLAYER_ID"),
            side,
            options,
        })
    }

    /// Source and request for one call. Missing ids are an input error.
    pub fn resolve(&self, q: &ScoreQuery) -> Result<(Source, ScoreRequest)> {
        let source = match (&q.tournament_id, &self.draw_url, &self.tournament_id) {
            (Some(id), _, _) if !id.trim().is_empty() => Source::Tournament(id.clone()),
            (_, Some(url), _) => Source::Url(url.clone()),
            (_, _, Some(id)) => Source::Tournament(id.clone()),
            _ => return Err(Error::MissingParam("tournamentId")),
        };
        // a blank query value falls back to the configured id
        let pick = |q: &Option<String>, cfg: &Option<String>| {
            q.clone().filter(|v| !v.trim().is_empty()).or_else(|| cfg.clone())
        };
        let side = match q.side.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Some(v.parse::<Seat>()?),
            None => self.side,
        };
        let request = ScoreRequest::new(
            pick(&q.match_id, &self.match_id),
            pick(&q.player_id, &self.player_id),
        )
        .with_side(side);
        request.validate()?;
        Ok((source, request))
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreQuery {
    pub tournament_id: Option<String>,
    pub match_id: Option<String>,
    pub player_id: Option<String>,
    pub side: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ErrorBody {
    fn from_error(e: &Error) -> Self {
        match e.status_code() {
            500 => Self { error: s!("Failed to fetch or parse data"), details: Some(e.to_string()) },
            _ => Self { error: e.to_string(), details: None },
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            loge!("GET /score failed: {self}");
        } else {
            logd!("GET /score: {self}");
        }
        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

async fn score(
    State(cfg): State<Arc<ServerConfig>>,
    Query(q): Query<ScoreQuery>,
) -> std::result::Result<Json<Report>, Error> {
    let (source, request) = cfg.resolve(&q)?;
    let options = cfg.options;

    // the one suspension point: fetch + pure extract on the blocking pool
    let report = tokio::task::spawn_blocking(move || scrape::run(&source, &request, &options))
        .await
        .map_err(|e| Error::Parse(format!("extract task failed: {e}")))??;
    Ok(Json(report))
}

pub fn router(cfg: Arc<ServerConfig>) -> Router {
    Router::new()
        .route("/score", get(score))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(cfg)
}

pub async fn serve(cfg: ServerConfig) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    logf!("Server running on port {}", cfg.port);
    axum::serve(listener, router(Arc::new(cfg))).await?;
    Ok(())
}
