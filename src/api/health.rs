//! Liveness endpoint

use serde_json::json;

use crate::models::envelope::{Envelope, Status};

/// Heartbeat endpoint
#[utoipa::path(
    get,
    path = "/heartbeat",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive", body = Envelope)
    )
)]
pub async fn heartbeat() -> Envelope {
    Envelope::new(
        Status::Success,
        Some(json!({ "version": env!("CARGO_PKG_VERSION") })),
    )
}
