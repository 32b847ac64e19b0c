//! Create and edit forms
//!
//! Both forms hold a [`crate::ContactDraft`] updated one field at a time by
//! input name, and talk to the service through a
//! [`crate::ContactRepository`] passed in at submit time.

pub mod create;
pub mod edit;

pub use create::ContactForm;
pub use edit::EditForm;
