use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{
        header::{HOST, LOCATION},
        uri::Authority,
        StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::*;

static X_FORWARDED_PROTO: &str = "x-forwarded-proto";

const DEFAULT_HTTPS_PORT: u16 = 443;

/// Answers requests that did not arrive over HTTPS with a `307 Temporary
/// Redirect` to the same path on the configured HTTPS port. TLS is terminated
/// in front of this service, so the original scheme is read from
/// `X-Forwarded-Proto`. Without a configured HTTPS port every request passes.
pub(crate) async fn redirect_to_https(
    State(app_state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(https_port) = app_state.config.https_port() else {
        return next.run(request).await;
    };

    if is_https(&request) {
        return next.run(request).await;
    }

    match https_location(&request, https_port) {
        Some(location) => {
            debug!("Redirecting plaintext request to {location}");
            (StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response()
        }
        None => {
            warn!("Cannot redirect to HTTPS, request has no usable Host");
            (StatusCode::BAD_REQUEST, "Bad Request").into_response()
        }
    }
}

fn is_https(request: &Request) -> bool {
    if request.uri().scheme_str() == Some("https") {
        return true;
    }

    // The left-most entry is the protocol the client used to reach the first proxy.
    request
        .headers()
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
}

fn https_location(request: &Request, https_port: u16) -> Option<String> {
    let authority = match request.headers().get(HOST) {
        Some(host) => host.to_str().ok()?.parse::<Authority>().ok()?,
        None => request.uri().authority()?.clone(),
    };

    let port = if https_port == DEFAULT_HTTPS_PORT {
        String::new()
    } else {
        format!(":{https_port}")
    };
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Some(format!("https://{}{port}{path_and_query}", authority.host()))
}
