//! Response envelope and status taxonomy
//!
//! Every service result is wrapped in a uniform `{STATUS, DATA}` envelope.
//! The HTTP layer translates the status into a transport code through the
//! static table in [`Status::http_status`]; every status an operation can
//! produce has an entry there.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Outcome of a service operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Success,
    Failure,
    UserCreated,
    UserRemoved,
    UserAlreadyExists,
    UserNonexistent,
    BookCreated,
    BookRemoved,
    BookAlreadyExists,
    BookNonexistent,
    WishlistUpdated,
}

impl Status {
    /// Status to transport-code mapping table
    pub fn http_status(&self) -> StatusCode {
        match self {
            Status::Success
            | Status::UserRemoved
            | Status::BookRemoved
            | Status::WishlistUpdated => StatusCode::OK,
            Status::UserCreated | Status::BookCreated => StatusCode::CREATED,
            Status::UserNonexistent | Status::BookNonexistent => StatusCode::NOT_FOUND,
            Status::UserAlreadyExists | Status::BookAlreadyExists => StatusCode::NOT_ACCEPTABLE,
            Status::Failure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Uniform `{STATUS, DATA}` result wrapper
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    #[serde(rename = "STATUS")]
    pub status: Status,
    #[serde(rename = "DATA")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn new(status: Status, data: Option<Value>) -> Self {
        Self { status, data }
    }

    /// Envelope carrying a status and a null DATA field
    pub fn status_only(status: Status) -> Self {
        Self::new(status, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_screaming_snake_case() {
        let json = serde_json::to_value(Status::UserAlreadyExists).unwrap();
        assert_eq!(json, "USER_ALREADY_EXISTS");
        let json = serde_json::to_value(Status::WishlistUpdated).unwrap();
        assert_eq!(json, "WISHLIST_UPDATED");
    }

    #[test]
    fn envelope_renders_status_and_data_keys() {
        let envelope = Envelope::status_only(Status::Success);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["STATUS"], "SUCCESS");
        assert_eq!(json["DATA"], Value::Null);
    }

    #[test]
    fn every_status_maps_to_a_transport_code() {
        let statuses = [
            (Status::Success, StatusCode::OK),
            (Status::Failure, StatusCode::INTERNAL_SERVER_ERROR),
            (Status::UserCreated, StatusCode::CREATED),
            (Status::UserRemoved, StatusCode::OK),
            (Status::UserAlreadyExists, StatusCode::NOT_ACCEPTABLE),
            (Status::UserNonexistent, StatusCode::NOT_FOUND),
            (Status::BookCreated, StatusCode::CREATED),
            (Status::BookRemoved, StatusCode::OK),
            (Status::BookAlreadyExists, StatusCode::NOT_ACCEPTABLE),
            (Status::BookNonexistent, StatusCode::NOT_FOUND),
            (Status::WishlistUpdated, StatusCode::OK),
        ];
        for (status, expected) in statuses {
            assert_eq!(status.http_status(), expected, "{:?}", status);
        }
    }
}
