//! Common reusable UI components
//!
//! Controls shared by the header, the pages and the contact form.

pub mod button;
pub mod form;

pub use button::AnimatedButton;
pub use form::{FieldError, FormField, TextAreaField};
