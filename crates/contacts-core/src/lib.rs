// # contacts-core
//
// Core library for the contact list client.
//
// ## Architecture Overview
//
// This library provides everything between the user's input and the
// contact service, without doing any I/O itself:
// - **ContactRepository**: Trait for the service that owns contact records
// - **ContactListController**: Loads the list once and derives the searched, paginated view
// - **Pagination**: Page strip computed from a total and a page size
// - **ContactForm / EditForm**: Field state and submission for create and update
// - **MemoryContactRepository**: In-process service stand-in
//
// ## Design Principles
//
// 1. **Service is the source of truth**: local state changes only after the service confirms
// 2. **Derived views**: rows are recomputed from state, never stored
// 3. **One call per action**: no retries, batching or caching
// 4. **Library-First**: front-ends are thin layers over this crate

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod model;
pub mod repository;
pub mod traits;

// Re-export core types for convenience
pub use config::{ApiConfig, ContactsConfig, SearchScope, ViewConfig};
pub use controller::{ContactListController, ListEvent, ListRow, ListView, LoadState, Pagination};
pub use error::{Error, Result, ViewError};
pub use form::{ContactForm, EditForm};
pub use model::{Contact, ContactDraft, ContactField, ContactId};
pub use repository::MemoryContactRepository;
pub use traits::ContactRepository;
