//! HTTP transport for membership status updates.

use crate::error::FormError;
use crate::membership::{StatusResponse, StatusTransport};
use reqwest::blocking::Client;

/// Posts status updates as an AJAX form submission.
pub struct HttpTransport {
    client: Client,
    origin: String,
}

impl HttpTransport {
    /// `origin` is prefixed to every endpoint, e.g. `https://portal.example.ac.uk`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            origin: origin.into(),
        }
    }
}

impl StatusTransport for HttpTransport {
    fn post(&self, url: &str, fields: &[(&'static str, String)]) -> Result<StatusResponse, FormError> {
        let full_url = format!("{}{}", self.origin.trim_end_matches('/'), url);
        log::debug!("posting status update to {}", full_url);

        let response = self
            .client
            .post(&full_url)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(reqwest::header::REFERER, &full_url)
            .form(fields)
            .send()
            .map_err(|e| FormError::Transport {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FormError::Transport {
                status: Some(status.as_u16()),
                message: body,
            });
        }
        response.json::<StatusResponse>().map_err(|e| FormError::Transport {
            status: Some(status.as_u16()),
            message: e.to_string(),
        })
    }
}
