//! Request routing and identifier resolution

use crate::error::{ApiError, Result};
use crate::handlers::{self, SaveRequest};
use crate::response::{error_response, json_response};
use empire_core::PlayerId;
use empire_db::Store;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};
use percent_encoding::percent_decode_str;

/// Dispatch a request to its handler and render the result as JSON.
///
/// The body has already been collected; `query` is the raw query string,
/// if any.
pub fn route(
    store: &Store,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &[u8],
) -> Response<Full<Bytes>> {
    match dispatch(store, method, path, query, body) {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("{} {} failed: {}", method, path, err);
            error_response(err.status(), &err.to_string())
        }
    }
}

fn dispatch(
    store: &Store,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &[u8],
) -> Result<Response<Full<Bytes>>> {
    match (method, path) {
        (&Method::POST, "/api/save") => {
            let request: SaveRequest = if body.is_empty() {
                SaveRequest::default()
            } else {
                serde_json::from_slice(body)
                    .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {}", e)))?
            };
            // Body takes precedence over the query parameter
            let user_id = match request.user_id {
                Some(id) => PlayerId::new(id),
                None => user_id_from_query(query)?.ok_or(ApiError::MissingUserId)?,
            };
            let response = handlers::save(store, user_id, &request.data)?;
            Ok(json_response(StatusCode::OK, &response))
        }
        (&Method::GET, "/api/data") => {
            let user_id = user_id_from_query(query)?.ok_or(ApiError::MissingUserId)?;
            let response = handlers::load(store, user_id)?;
            Ok(json_response(StatusCode::OK, &response))
        }
        (&Method::GET, "/api/leaderboard") => {
            let response = handlers::leaderboard(store)?;
            Ok(json_response(StatusCode::OK, &response))
        }
        _ => Ok(error_response(StatusCode::NOT_FOUND, "not found")),
    }
}

/// Extract a `userId` value from a query string like `userId=42&x=y`.
fn user_id_from_query(query: Option<&str>) -> Result<Option<PlayerId>> {
    let Some(query) = query else {
        return Ok(None);
    };
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        if parts.next() != Some("userId") {
            continue;
        }
        let raw = parts.next().unwrap_or("");
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .map_err(|_| ApiError::BadRequest("invalid query encoding".to_string()))?;
        let id = decoded
            .parse::<u64>()
            .map_err(|_| ApiError::BadRequest(format!("invalid userId: {}", decoded)))?;
        return Ok(Some(PlayerId::new(id)));
    }
    Ok(None)
}
