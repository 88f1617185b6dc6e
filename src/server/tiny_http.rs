//! tiny_http server adapter
//!
//! Handles routing, body parsing, and response conversion for tiny_http.

use std::io::{Cursor, Read};

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use taskmatrix::api::{
    self, ApiError, ApiResponse, BreakdownRequest, ClassifyRequest, PrioritizeRequest,
    RecommendRequest, ScoreRequest,
};
use taskmatrix::core::models::RankPolicy;
use taskmatrix::core::ports::BreakdownSource;

/// What every request handler may need besides the request itself
pub struct ServerContext {
    /// Budget thresholds for ranking
    pub policy: RankPolicy,
    /// Where breakdown requests without a saved reply are sent
    pub source: Box<dyn BreakdownSource>,
}

// =============================================================================
// REQUEST HANDLING
// =============================================================================

/// Handle an API request and return a response
pub fn handle_api_request(
    request: &mut Request,
    ctx: &ServerContext,
) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();
    log::debug!("{method} {path}");

    let (status, body) = route(&method, &path, request.as_reader(), ctx);
    if status >= 400 {
        log::warn!("{method} {path} -> {status}");
    }

    let mut response = Response::from_data(body.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response.add_header(header);
    }
    response
}

/// Map a method and path to a handler, returning the status and JSON body
///
/// Paths are accepted under `/api/v1` (versioned) and `/api`.
pub fn route(
    method: &Method,
    path: &str,
    body: &mut dyn Read,
    ctx: &ServerContext,
) -> (u16, String) {
    let path = path.split('?').next().unwrap_or_default();
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);

    match (method, api_path) {
        (&Method::Get, "/health") => handle_result(Ok(api::health())),

        (&Method::Post, "/classify") => match read_json_body::<ClassifyRequest>(body) {
            Ok(req) => handle_result(api::classify(&req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/prioritize") => match read_json_body::<PrioritizeRequest>(body) {
            Ok(req) => handle_result(api::prioritize(&req, &ctx.policy)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/matrix") => match read_json_body::<PrioritizeRequest>(body) {
            Ok(req) => handle_result(api::matrix(&req, &ctx.policy)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/recommend") => match read_json_body::<RecommendRequest>(body) {
            Ok(req) => handle_result(api::recommend(&req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/score") => match read_json_body::<ScoreRequest>(body) {
            Ok(req) => handle_result(api::score(&req)),
            Err(e) => error_response(&e),
        },

        (&Method::Post, "/breakdown") => match read_json_body::<BreakdownRequest>(body) {
            Ok(req) => handle_result(api::breakdown(&req, ctx.source.as_ref(), &ctx.policy)),
            Err(e) => error_response(&e),
        },

        _ => error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        ))),
    }
}

// =============================================================================
// BODY PARSING
// =============================================================================

/// Read and parse JSON body from request
fn read_json_body<T: DeserializeOwned>(body: &mut dyn Read) -> Result<T, ApiError> {
    let mut text = String::new();
    body.read_to_string(&mut text)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;

    serde_json::from_str(&text).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

// =============================================================================
// RESPONSE CONVERSION
// =============================================================================

/// Convert a handler result to a status and JSON body
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> (u16, String) {
    match result {
        Ok(data) => (200, to_json(&ApiResponse::success(data))),
        Err(e) => error_response(&e),
    }
}

/// Error envelope with the error's status code
fn error_response(error: &ApiError) -> (u16, String) {
    (error.status_code(), to_json(&ApiResponse::<()>::error(error)))
}

fn to_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string())
}
