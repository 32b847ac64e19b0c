// # Memory Contact Repository
//
// In-process implementation of ContactRepository.
//
// ## Purpose
//
// Stands in for the remote contact service: it assigns identifiers and
// creation timestamps the way the service would and keeps records in a
// Vec in insertion order. Nothing survives a restart.
//
// ## When to Use
//
// - Testing the list controller and forms without a network
// - Demos and embedding where a service is not available

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::Error;
use crate::model::{Contact, ContactDraft, ContactId};
use crate::traits::ContactRepository;

/// In-memory contact repository
///
/// Records are stored in a Vec protected by a RwLock; clones share the
/// same records.
///
/// # Example
///
/// ```rust,no_run
/// use contacts_core::{ContactDraft, ContactRepository, MemoryContactRepository};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repository = MemoryContactRepository::new();
///
///     let draft = ContactDraft::new("Alice", "Engineer", "5550100", "alice@example.com");
///     let created = repository.create(&draft).await?;
///
///     assert_eq!(repository.list().await?, vec![created]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryContactRepository {
    inner: Arc<RwLock<Vec<Contact>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryContactRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with records
    ///
    /// Records keep their identifiers and timestamps as given.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(contacts)),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the number of records in the repository
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Check if the repository is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    fn mint_id(&self) -> ContactId {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        ContactId::new(format!("mem-{:08}", n))
    }
}

#[async_trait]
impl ContactRepository for MemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, Error> {
        Ok(self.inner.read().await.clone())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, Error> {
        draft.validate()?;

        let mut guard = self.inner.write().await;

        // Seeded records may already hold ids in the minted range
        let id = loop {
            let id = self.mint_id();
            if !guard.iter().any(|c| c.id == id) {
                break id;
            }
        };

        let contact = Contact {
            id,
            full_name: draft.full_name.clone(),
            work_profile: draft.work_profile.clone(),
            contact_no: draft.contact_no.clone(),
            email: draft.email.clone(),
            created_at: Utc::now(),
        };

        debug!("Created contact {}", contact.id);
        guard.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact, Error> {
        draft.validate()?;

        let mut guard = self.inner.write().await;
        let stored = guard
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| Error::not_found(id.to_string()))?;

        stored.full_name = draft.full_name.clone();
        stored.work_profile = draft.work_profile.clone();
        stored.contact_no = draft.contact_no.clone();
        stored.email = draft.email.clone();

        debug!("Updated contact {}", id);
        Ok(stored.clone())
    }

    async fn delete(&self, id: &ContactId) -> Result<(), Error> {
        let mut guard = self.inner.write().await;
        let before = guard.len();
        guard.retain(|c| &c.id != id);

        if guard.len() == before {
            return Err(Error::not_found(id.to_string()));
        }

        debug!("Deleted contact {}", id);
        Ok(())
    }

    fn repository_name(&self) -> &'static str {
        "memory"
    }
}
