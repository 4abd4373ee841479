//! Password reset form check, run before anything is submitted.

use crate::error::FormError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReset {
    pub password: String,
    pub confirm: String,
}

impl PasswordReset {
    pub fn new(password: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            confirm: confirm.into(),
        }
    }

    /// Refuse an empty password or two fields that differ.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password.is_empty() {
            return Err(FormError::EmptyPassword);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    /// Text for the form's inline message region, if any.
    pub fn inline_message(&self) -> Option<String> {
        self.validate().err().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_passwords() {
        assert_eq!(PasswordReset::new("hunter22", "hunter22").validate(), Ok(()));
        assert_eq!(PasswordReset::new("hunter22", "hunter22").inline_message(), None);
    }

    #[test]
    fn test_mismatch() {
        let form = PasswordReset::new("hunter22", "hunter23");
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(
            form.inline_message().as_deref(),
            Some("The two password fields didn't match.")
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(PasswordReset::default().validate(), Err(FormError::EmptyPassword));
        // an empty password is reported even when the confirmation differs
        assert_eq!(
            PasswordReset::new("", "x").validate(),
            Err(FormError::EmptyPassword)
        );
    }
}
