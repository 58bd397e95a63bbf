//! Web visit tracking routes

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppError;
use crate::models::web_visit::WebVisit;
use crate::service;
use crate::state::AppState;

use super::ApiResult;

/// Client IP: X-Forwarded-For header first, then peer address from extensions.
fn client_ip(request: &Request) -> String {
    if let Some(forwarded) = request.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            // Comma-separated when proxied; first entry is the original client
            if let Some(first) = value.split(',').next() {
                let ip = first.trim();
                if !ip.is_empty() {
                    return ip.to_owned();
                }
            }
        }
    }

    request
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|ci| ci.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_owned())
}

pub async fn register_visit(
    State(state): State<AppState>,
    request: Request,
) -> Result<(StatusCode, Json<WebVisit>), AppError> {
    let ip = client_ip(&request);
    let visit = service::web_visit::record(&state.pool, &ip).await?;
    Ok((StatusCode::CREATED, Json(visit)))
}

pub async fn visit_count(State(state): State<AppState>) -> ApiResult<serde_json::Value> {
    let count = service::web_visit::count(&state.pool).await?;
    Ok(Json(serde_json::json!({ "count": count })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::ConnectInfo;
    use std::net::SocketAddr;

    fn request() -> Request {
        Request::new(Body::empty())
    }

    #[test]
    fn forwarded_header_wins_over_peer_address() {
        let mut req = request();
        req.headers_mut()
            .insert("x-forwarded-for", "203.0.113.9, 10.0.0.1".parse().unwrap());
        req.extensions_mut()
            .insert(ConnectInfo("192.0.2.1:4321".parse::<SocketAddr>().unwrap()));
        assert_eq!(client_ip(&req), "203.0.113.9");
    }

    #[test]
    fn falls_back_to_peer_address() {
        let mut req = request();
        req.extensions_mut()
            .insert(ConnectInfo("192.0.2.1:4321".parse::<SocketAddr>().unwrap()));
        assert_eq!(client_ip(&req), "192.0.2.1");
    }

    #[test]
    fn unknown_when_nothing_available() {
        assert_eq!(client_ip(&request()), "unknown");
    }
}
