//! UI components for the signup app
//!
//! `SignupForm` is the root of the tree; `BaseError` and `BaseButton` are
//! registered globally at bootstrap so any component can reference them by
//! name.

pub mod base_button;
pub mod base_error;
pub mod signup_form;

pub use base_button::BaseButton;
pub use base_error::BaseError;
pub use signup_form::SignupForm;
