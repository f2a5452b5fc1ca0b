use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// The raw `Last-Event-ID` header, if the client sent a readable one. Never
/// rejects: a missing or non-UTF-8 header is `None`.
pub(crate) struct LastEventId(pub Option<String>);

impl<S> FromRequestParts<S> for LastEventId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(sse::LAST_EVENT_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(LastEventId(value))
    }
}
