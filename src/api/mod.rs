use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::{
    EXPECTED_RETURN_BOUNDS, InputBounds, InputError, MONTHLY_INVESTMENT_BOUNDS, SipSummary,
    SliderLabels, TIME_PERIOD_BOUNDS, clamp_inputs, slider_labels, summarize,
};

mod cli;

pub use cli::{CalcArgs, Cli, Command, render_text};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every field is optional; missing ones keep the calculator's initial values.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SipPayload {
    monthly_investment: Option<f64>,
    expected_return: Option<f64>,
    time_period: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoundsResponse {
    monthly_investment: InputBounds,
    expected_return: InputBounds,
    time_period: InputBounds,
    labels: SliderLabels,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Calc(args) => {
            let summary = summarize(&clamp_inputs(args.raw_inputs())?);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_text(&summary));
            }
            Ok(())
        }
        Command::Serve { port } => Ok(run_http_server(port).await?),
    }
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "SIP calculator API listening");
    info!("local access: http://127.0.0.1:{port}/api/sip");

    axum::serve(listener, router()).await
}

fn router() -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/bounds", get(bounds_handler))
        .route("/api/sip", get(sip_get_handler).post(sip_post_handler))
        .fallback(not_found_handler)
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, HealthResponse { status: "ok" })
}

async fn bounds_handler() -> Response {
    json_response(
        StatusCode::OK,
        BoundsResponse {
            monthly_investment: MONTHLY_INVESTMENT_BOUNDS,
            expected_return: EXPECTED_RETURN_BOUNDS,
            time_period: TIME_PERIOD_BOUNDS,
            labels: slider_labels(),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn sip_get_handler(Query(payload): Query<SipPayload>) -> Response {
    sip_handler_impl(payload)
}

async fn sip_post_handler(Json(payload): Json<SipPayload>) -> Response {
    sip_handler_impl(payload)
}

fn sip_handler_impl(payload: SipPayload) -> Response {
    debug!(?payload, "sip request");
    match summary_from_payload(payload) {
        Ok(summary) => json_response(StatusCode::OK, summary),
        Err(err) => error_response(StatusCode::BAD_REQUEST, &err.to_string()),
    }
}

fn summary_from_payload(payload: SipPayload) -> Result<SipSummary, InputError> {
    let mut raw = CalcArgs::default().raw_inputs();

    if let Some(v) = payload.monthly_investment {
        raw.monthly_investment = v;
    }
    if let Some(v) = payload.expected_return {
        raw.expected_return = v;
    }
    if let Some(v) = payload.time_period {
        raw.time_period = v;
    }

    Ok(summarize(&clamp_inputs(raw)?))
}

#[cfg(test)]
fn summary_from_json(json: &str) -> Result<SipSummary, String> {
    let payload = serde_json::from_str::<SipPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    summary_from_payload(payload).map_err(|e| e.to_string())
}

fn with_cache_control(mut response: Response) -> Response {
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)).into_response())
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}
