//! Membership status update over HTTP.

use log::info;
use rcd_forms::api::HttpTransport;
use rcd_forms::membership::{FailurePolicy, MembershipStatus, Reaction, StatusHandler, StatusUpdate};

pub fn run_set_status(
    origin: &str,
    base: &str,
    request_id: u64,
    project_id: u64,
    status: u8,
    csrf_token: &str,
    show_message: bool,
) -> anyhow::Result<()> {
    let status = MembershipStatus::try_from(status)?;
    let policy = if show_message {
        FailurePolicy::ShowMessage
    } else {
        FailurePolicy::Reload
    };
    let handler = StatusHandler::new(HttpTransport::new(origin), base, csrf_token, policy);
    match handler.submit(&StatusUpdate::new(request_id, project_id, status)) {
        Reaction::Reload => {
            info!("Request {} submitted; reload the page", request_id);
            Ok(())
        }
        Reaction::ShowMessage(message) => anyhow::bail!(message),
    }
}
