//! "I am the PI" checkbox attached to an email field.
//!
//! Checking the box fills the field with the reference email and hides it;
//! unchecking shows the field again with whatever value it holds.

use serde::Serialize;

pub const PI_LABEL: &str = " I am the PI ";

/// How the email field should be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    pub field_id: String,
    pub value: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCheckbox {
    field_id: String,
    reference_email: String,
    value: String,
    checked: bool,
}

impl EmailCheckbox {
    /// The box starts checked when the field already holds the reference email.
    pub fn new(
        field_id: impl Into<String>,
        reference_email: impl Into<String>,
        current_value: impl Into<String>,
    ) -> Self {
        let reference_email = reference_email.into();
        let value = current_value.into();
        let checked = value == reference_email;
        Self {
            field_id: field_id.into(),
            reference_email,
            value,
            checked,
        }
    }

    pub fn label(&self) -> &'static str {
        PI_LABEL
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_checked(&mut self, checked: bool) -> FieldState {
        self.checked = checked;
        if checked {
            self.value = self.reference_email.clone();
        }
        self.state()
    }

    pub fn toggle(&mut self) -> FieldState {
        self.set_checked(!self.checked)
    }

    /// Typing into the field. Ignored while the field is locked.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        if self.checked {
            return false;
        }
        self.value = value.into();
        true
    }

    pub fn state(&self) -> FieldState {
        FieldState {
            field_id: self.field_id.clone(),
            value: self.value.clone(),
            visible: !self.checked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PI: &str = "pi@example.ac.uk";

    #[test]
    fn test_initially_checked_when_value_matches() {
        let checkbox = EmailCheckbox::new("id_pi_email", PI, PI);
        assert!(checkbox.is_checked());
        assert!(!checkbox.state().visible);

        let other = EmailCheckbox::new("id_pi_email", PI, "someone@example.ac.uk");
        assert!(!other.is_checked());
        assert!(other.state().visible);
    }

    #[test]
    fn test_checking_locks_field() {
        let mut checkbox = EmailCheckbox::new("id_pi_email", PI, "");
        let state = checkbox.toggle();
        assert_eq!(state.value, PI);
        assert!(!state.visible);
        assert!(!checkbox.set_value("typed@example.ac.uk"));
        assert_eq!(checkbox.value(), PI);
    }

    #[test]
    fn test_unchecking_shows_field() {
        let mut checkbox = EmailCheckbox::new("id_pi_email", PI, PI);
        let state = checkbox.toggle();
        assert!(state.visible);
        assert_eq!(state.value, PI);
        assert!(checkbox.set_value("other@example.ac.uk"));
        assert_eq!(checkbox.state().value, "other@example.ac.uk");
        assert_eq!(checkbox.label(), " I am the PI ");
    }
}
