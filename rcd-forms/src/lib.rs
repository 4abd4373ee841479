//! Form interactions on the portal's pages.
//!
//! - `date_picker`: date fields written as `YYYY-MM-DD`
//! - `membership`: membership status updates and what happens after them
//! - `password_reset`: client-side password confirmation check
//! - `email_checkbox`: the "I am the PI" checkbox on email fields
//! - `api` (feature `api`): HTTP transport for status updates

pub mod date_picker;
pub mod email_checkbox;
pub mod error;
pub mod membership;
pub mod password_reset;

#[cfg(feature = "api")]
pub mod api;

pub use error::FormError;
