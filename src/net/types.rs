//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless. `ApplicationStatus` is encoded as a bare integer on the wire;
//! the enum keeps that encoding behind `TryFrom`/`From` conversions instead
//! of leaking magic numbers into callers.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated account as returned by `GET /user/profile`.
///
/// Immutable once fetched; replaced wholesale on re-login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: i64,
    /// Display/login name.
    pub username: String,
}

/// Login form payload for `POST /auth/login`.
///
/// Transient: never persisted, dropped after the exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

/// Registration form payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login exchange response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

/// Profile fetch response wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// Successful signup response.
///
/// Signup does not authenticate the caller; the account must verify its
/// email before login succeeds.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignupResponse {
    pub message: String,
    /// Identifier of the pending account, when the server includes one.
    #[serde(default)]
    pub user_id: Option<i64>,
}

/// Plain message response used by the verification endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Pipeline stage of a tracked job application.
///
/// Wire encoding is the bare integer discriminant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ApplicationStatus {
    #[default]
    Applied = 0,
    Interview = 1,
    OfferReceived = 2,
    Rejected = 3,
}

impl ApplicationStatus {
    /// Human-readable label for list and badge rendering.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::OfferReceived => "Offer received",
            Self::Rejected => "Rejected",
        }
    }

    /// Badge color class for statuses that get visual emphasis.
    #[must_use]
    pub fn badge_color(self) -> Option<&'static str> {
        match self {
            Self::OfferReceived => Some("success"),
            Self::Rejected => Some("danger"),
            Self::Applied | Self::Interview => None,
        }
    }
}

impl From<ApplicationStatus> for u8 {
    fn from(status: ApplicationStatus) -> Self {
        status as Self
    }
}

impl TryFrom<u8> for ApplicationStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Applied),
            1 => Ok(Self::Interview),
            2 => Ok(Self::OfferReceived),
            3 => Ok(Self::Rejected),
            other => Err(format!("unknown application status {other}")),
        }
    }
}

/// A tracked job application as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub location: String,
    /// RFC 3339 timestamp of when the application was submitted.
    pub applied_date: String,
    /// Internship term (e.g. `"Summer 2026"`).
    pub term: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Server-relative path of the uploaded resume.
    pub resume_url: String,
    pub user_id: i64,
}

/// Resume file attached to a create/update submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeFile {
    /// Original filename; the backend requires a `.pdf` suffix.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Editable fields of an application, submitted as a multipart form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub company: String,
    pub position: String,
    pub status: ApplicationStatus,
    pub location: String,
    pub applied_date: String,
    pub term: String,
    pub note: Option<String>,
    /// Required on create; optional on update to keep the stored file.
    pub resume: Option<ResumeFile>,
}

impl ApplicationDraft {
    /// Text fields of the multipart body, in submission order.
    ///
    /// The resume attachment is handled separately by the HTTP backend.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("company", self.company.clone()),
            ("position", self.position.clone()),
            ("status", u8::from(self.status).to_string()),
            ("location", self.location.clone()),
            ("applied_date", self.applied_date.clone()),
            ("term", self.term.clone()),
        ];
        if let Some(note) = &self.note {
            fields.push(("note", note.clone()));
        }
        fields
    }
}
