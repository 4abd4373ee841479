//! Project membership status updates.
//!
//! A tech lead changing a member's status posts the new status to
//! `<base><request_id>/`. What the page does after a failed post is decided
//! by the caller through [`FailurePolicy`].

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MembershipStatus {
    AwaitingAuthorisation,
    Authorised,
    Declined,
    Revoked,
    Suspended,
}

impl MembershipStatus {
    pub const ALL: [MembershipStatus; 5] = [
        MembershipStatus::AwaitingAuthorisation,
        MembershipStatus::Authorised,
        MembershipStatus::Declined,
        MembershipStatus::Revoked,
        MembershipStatus::Suspended,
    ];

    /// Code the server stores and expects in the `status` field.
    pub fn code(self) -> u8 {
        match self {
            MembershipStatus::AwaitingAuthorisation => 1,
            MembershipStatus::Authorised => 2,
            MembershipStatus::Declined => 3,
            MembershipStatus::Revoked => 4,
            MembershipStatus::Suspended => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MembershipStatus::AwaitingAuthorisation => "Awaiting Authorisation",
            MembershipStatus::Authorised => "Authorised",
            MembershipStatus::Declined => "Declined",
            MembershipStatus::Revoked => "Revoked",
            MembershipStatus::Suspended => "Suspended",
        }
    }
}

impl TryFrom<u8> for MembershipStatus {
    type Error = FormError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .ok_or(FormError::UnknownStatus(code))
    }
}

impl From<MembershipStatus> for u8 {
    fn from(status: MembershipStatus) -> u8 {
        status.code()
    }
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub request_id: u64,
    pub project_id: u64,
    pub status: MembershipStatus,
}

impl StatusUpdate {
    pub fn new(request_id: u64, project_id: u64, status: MembershipStatus) -> Self {
        Self {
            request_id,
            project_id,
            status,
        }
    }

    /// `<base><request_id>/`; `base` is expected to end with a slash.
    pub fn endpoint(&self, base: &str) -> String {
        format!("{}{}/", base, self.request_id)
    }

    /// Form body for the post, including the CSRF token.
    pub fn form_fields(&self, csrf_token: &str) -> Vec<(&'static str, String)> {
        vec![
            ("request_id", self.request_id.to_string()),
            ("project_id", self.project_id.to_string()),
            ("status", self.status.code().to_string()),
            ("csrfmiddlewaretoken", csrf_token.to_string()),
        ]
    }
}

/// Body of a successful update, e.g. `{"message": "Successfully updated."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Sends a status update to the server.
pub trait StatusTransport {
    fn post(&self, url: &str, fields: &[(&'static str, String)]) -> Result<StatusResponse, FormError>;
}

/// What the page does after a failed update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Reload the page, as on success.
    Reload,
    /// Keep the page and show the error in the message region.
    ShowMessage,
}

/// What the page should do once an update has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reaction {
    Reload,
    ShowMessage(String),
}

pub struct StatusHandler<T> {
    transport: T,
    base_url: String,
    csrf_token: String,
    on_failure: FailurePolicy,
}

impl<T: StatusTransport> StatusHandler<T> {
    pub fn new(
        transport: T,
        base_url: impl Into<String>,
        csrf_token: impl Into<String>,
        on_failure: FailurePolicy,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            csrf_token: csrf_token.into(),
            on_failure,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Post one update. Success always reloads.
    pub fn submit(&self, update: &StatusUpdate) -> Reaction {
        let url = update.endpoint(&self.base_url);
        let fields = update.form_fields(&self.csrf_token);
        match self.transport.post(&url, &fields) {
            Ok(response) => {
                log::info!(
                    "membership request {} set to {}: {}",
                    update.request_id,
                    update.status,
                    response.message
                );
                Reaction::Reload
            }
            Err(err) => {
                log::warn!("membership request {} not updated: {}", update.request_id, err);
                match self.on_failure {
                    FailurePolicy::Reload => Reaction::Reload,
                    FailurePolicy::ShowMessage => Reaction::ShowMessage(err.to_string()),
                }
            }
        }
    }
}
