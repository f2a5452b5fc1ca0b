//! Server-Sent Events (SSE) plumbing shared by the web layer.
//!
//! # Wire format
//!
//! Events are axum [`Event`](axum::response::sse::Event)s served through
//! [`Sse`](axum::response::sse::Sse), which writes `event:`, `id:`, `retry:` and
//! `data:` fields in the order they were set and closes each event with a blank
//! line. Every event is handed to hyper as its own body chunk, so it reaches the
//! client as soon as it is produced.
//!
//! # Streams
//!
//! [`stream::periodic`] drives a producer on a fixed interval until a
//! `CancellationToken` fires or the client goes away. Streams are independent:
//! nothing is shared between connections and a slow or vanished client only
//! affects its own stream.

pub mod stream;

/// Request header browsers send on reconnect, carrying the last id they saw.
pub const LAST_EVENT_ID: &str = "last-event-id";
