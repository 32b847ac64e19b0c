// # Contact Repository Trait
//
// Defines the interface to the service that owns contact records.
//
// ## Implementations
//
// - HTTP/JSON: `contacts-http` crate
// - In-process: `MemoryContactRepository` (tests, demos, embedding)
//
// ## Usage
//
// ```rust,ignore
// use contacts_core::{ContactDraft, ContactRepository};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let repository = /* ContactRepository implementation */;
//
//     let created = repository
//         .create(&ContactDraft::new("Alice", "Engineer", "5550100", "alice@example.com"))
//         .await?;
//     repository.delete(&created.id).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::model::{Contact, ContactDraft, ContactId};

/// Trait for contact repository implementations
///
/// Every method performs exactly one round-trip to the service. There is
/// no retry, batching or caching at this layer; a failure is returned to
/// the caller once.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Errors
///
/// Transport failures and non-2xx responses are reported as
/// [`crate::Error::Http`] with the status and body text in the message.
/// Callers do not branch on the cause.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Fetch every contact, in the order the service returns them
    async fn list(&self) -> Result<Vec<Contact>, crate::Error>;

    /// Create a contact from a draft
    ///
    /// The service assigns the identifier and creation timestamp and
    /// returns the stored record.
    async fn create(&self, draft: &ContactDraft) -> Result<Contact, crate::Error>;

    /// Replace the user-entered fields of a contact
    ///
    /// # Returns
    ///
    /// The service's authoritative copy of the updated record
    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact, crate::Error>;

    /// Delete a contact
    ///
    /// `Ok(())` means the service confirmed the deletion.
    async fn delete(&self, id: &ContactId) -> Result<(), crate::Error>;

    /// Get the repository name (for logging/debugging)
    fn repository_name(&self) -> &'static str;
}
