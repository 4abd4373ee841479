use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("The two password fields didn't match.")]
    PasswordMismatch,

    #[error("This field is required.")]
    EmptyPassword,

    #[error("Enter a valid date in {format} format, got '{value}'")]
    InvalidDate { value: String, format: String },

    #[error("Date format '{0}' cannot be used for a date field")]
    InvalidFormat(String),

    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },

    #[error("Unknown membership status code {0}")]
    UnknownStatus(u8),

    #[error("Status update failed{}: {message}", status_suffix(.status))]
    Transport { status: Option<u16>, message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message() {
        let with_status = FormError::Transport {
            status: Some(400),
            message: "bad status".to_string(),
        };
        assert_eq!(with_status.to_string(), "Status update failed (400): bad status");

        let without = FormError::Transport {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(without.to_string(), "Status update failed: connection refused");
    }
}
