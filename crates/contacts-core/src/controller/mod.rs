//! Contact list controller
//!
//! The ContactListController is responsible for:
//! - Loading every contact once, newest first
//! - Holding the loaded collection as the local copy of the service's data
//! - Deriving the searched and paginated rows on demand
//! - Deleting contacts and applying edits once the service confirms them
//!
//! ## Architecture
//!
//! ```text
//!                    ┌───────────────────────┐
//!                    │  ContactRepository    │
//!                    └───────────────────────┘
//!                         ▲             │
//!        list/update/delete             │ Contact(s)
//!                         │             ▼
//!                    ┌───────────────────────┐
//!   search, page ───▶│ ContactListController │───▶ ListEvent (notify)
//!                    └───────────────────────┘
//!                         │             │
//!                         ▼             ▼
//!                    ┌──────────┐  ┌──────────┐
//!                    │ ListView │  │ EditForm │
//!                    └──────────┘  └──────────┘
//! ```
//!
//! ## Lifecycle
//!
//! `Loading` → [`ContactListController::mount`] → `Ready` or `Failed`.
//! Mounting happens once; there is no reload.
//!
//! ## Concurrency
//!
//! Every operation that talks to the service takes `&mut self` and awaits
//! the call before touching the collection, so only one can be in flight.
//! Dropping an operation's future cancels it together with its completion.

pub mod pagination;
pub mod view;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::{SearchScope, ViewConfig};
use crate::error::{Result, ViewError};
use crate::form::EditForm;
use crate::model::{Contact, ContactId};
use crate::traits::ContactRepository;

pub use pagination::Pagination;
pub use view::{ListRow, ListView};

/// Load state of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet, or the initial fetch is outstanding
    Loading,
    /// Contacts are loaded
    Ready,
    /// The initial fetch failed; the list stays empty
    Failed(ViewError),
}

/// Events emitted by the ContactListController
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Initial load succeeded
    Loaded { count: usize },

    /// Initial load failed
    LoadFailed { error: String },

    /// Current page changed
    PageChanged { page: usize },

    /// Service confirmed a deletion
    Deleted { id: ContactId },

    /// Deletion failed
    DeleteFailed { id: ContactId, error: String },

    /// Edit form opened for a contact
    EditOpened { id: ContactId },

    /// Service returned an updated record and it was applied
    Updated { id: ContactId },

    /// Update failed; the edit form stays open
    UpdateFailed { id: ContactId, error: String },
}

/// Contact list controller
///
/// Owns the only local copy of the contact collection; nothing else writes
/// to it. The rows shown to the user come from [`Self::view`], which is
/// recomputed from the collection, the search text and the page on every
/// call.
pub struct ContactListController {
    /// Repository for the owning service
    repository: Arc<dyn ContactRepository>,

    /// Loaded contacts, newest first
    contacts: Vec<Contact>,

    state: LoadState,

    search: String,

    /// Current page, 1-based
    page: usize,

    page_size: usize,

    search_scope: SearchScope,

    /// Open edit form, if any
    editing: Option<EditForm>,

    /// Last delete failure, shown beside the table
    error: Option<ViewError>,

    /// Event sender for external monitoring
    event_tx: mpsc::Sender<ListEvent>,
}

impl ContactListController {
    /// Create a new controller
    ///
    /// # Returns
    ///
    /// A tuple of (controller, event_receiver) where event_receiver yields list events
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        config: &ViewConfig,
    ) -> Result<(Self, mpsc::Receiver<ListEvent>)> {
        config.validate()?;

        let (tx, rx) = mpsc::channel(config.event_channel_capacity);

        let controller = Self {
            repository,
            contacts: Vec::new(),
            state: LoadState::Loading,
            search: String::new(),
            page: 1,
            page_size: config.page_size,
            search_scope: config.search_scope,
            editing: None,
            error: None,
            event_tx: tx,
        };

        Ok((controller, rx))
    }

    /// Load the contact list
    ///
    /// Only the first call fetches. Later calls report the outcome of the
    /// first one without touching the service.
    pub async fn mount(&mut self) -> std::result::Result<(), ViewError> {
        match &self.state {
            LoadState::Loading => {}
            LoadState::Ready => {
                debug!("Contact list already loaded");
                return Ok(());
            }
            LoadState::Failed(err) => return Err(err.clone()),
        }

        match self.repository.list().await {
            Ok(mut contacts) => {
                dedup_by_id(&mut contacts);
                view::sort_newest_first(&mut contacts);
                info!(
                    "Loaded {} contact(s) from {}",
                    contacts.len(),
                    self.repository.repository_name()
                );

                self.contacts = contacts;
                self.state = LoadState::Ready;
                self.emit_event(ListEvent::Loaded {
                    count: self.contacts.len(),
                });
                Ok(())
            }
            Err(e) => {
                error!("Error fetching contact details: {}", e);
                let err = ViewError::fetch();
                self.state = LoadState::Failed(err.clone());
                self.emit_event(ListEvent::LoadFailed {
                    error: e.to_string(),
                });
                Err(err)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Loaded contacts, newest first
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_scope(&self) -> SearchScope {
        self.search_scope
    }

    /// Change the search text
    ///
    /// When searching the whole collection the match count changes the
    /// page strip, so the view returns to page 1.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search {
            return;
        }

        self.search = text;
        if self.search_scope == SearchScope::Collection {
            self.set_page(1);
        }
    }

    /// Go to a page (1-based; 0 is treated as 1)
    pub fn set_page(&mut self, page: usize) {
        let page = page.max(1);
        if page == self.page {
            return;
        }

        self.page = page;
        self.emit_event(ListEvent::PageChanged { page });
    }

    /// Go to a page picked from the page strip
    ///
    /// Numbers that are not on the strip for the current search are
    /// ignored. Returns whether the pick was accepted.
    pub fn select_page(&mut self, page: usize) -> bool {
        let selected = self.view().pagination.select(page);
        match selected {
            Some(page) => {
                self.set_page(page);
                true
            }
            None => {
                debug!("Page {} is not on the strip", page);
                false
            }
        }
    }

    /// Rows and page strip for the current state
    pub fn view(&self) -> ListView<'_> {
        view::derive_view(
            &self.contacts,
            &self.search,
            self.page,
            self.page_size,
            self.search_scope,
        )
    }

    /// Last delete failure
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Delete a contact
    ///
    /// The request is sent even if the id is not held locally. The local
    /// copy is only changed once the service confirms; on failure the
    /// collection is left as it was and [`Self::error`] is set.
    pub async fn delete(&mut self, id: &ContactId) -> std::result::Result<(), ViewError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                let before = self.contacts.len();
                self.contacts.retain(|c| &c.id != id);
                if self.contacts.len() == before {
                    debug!("Deleted contact {} was not held locally", id);
                }

                if self.editing.as_ref().is_some_and(|form| form.id() == id) {
                    self.editing = None;
                }

                info!("Contact deleted: {}", id);
                self.emit_event(ListEvent::Deleted { id: id.clone() });
                Ok(())
            }
            Err(e) => {
                error!("Error deleting contact {}: {}", id, e);
                let err = ViewError::delete();
                self.error = Some(err.clone());
                self.emit_event(ListEvent::DeleteFailed {
                    id: id.clone(),
                    error: e.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Open the edit form for a contact
    ///
    /// Returns `None` and opens nothing if the id is not held locally.
    pub fn edit(&mut self, id: &ContactId) -> Option<&mut EditForm> {
        let Some(contact) = self.contacts.iter().find(|c| &c.id == id).cloned() else {
            warn!("Cannot edit contact {}: not in the list", id);
            return None;
        };

        self.emit_event(ListEvent::EditOpened { id: id.clone() });
        self.editing = Some(EditForm::open(contact));
        self.editing.as_mut()
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.editing.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        self.editing.as_mut()
    }

    /// Close the edit form, discarding unsaved changes
    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    /// Submit the open edit form
    ///
    /// On success the service's record replaces the local one and the form
    /// closes. On failure the form stays open with its error set. Without
    /// an open form this does nothing.
    pub async fn submit_edit(&mut self) -> std::result::Result<(), ViewError> {
        let Some(form) = self.editing.as_mut() else {
            debug!("No edit form open");
            return Ok(());
        };

        match form.submit(self.repository.as_ref()).await {
            Ok(updated) => {
                let id = updated.id.clone();
                self.apply_update(updated);
                self.editing = None;
                self.emit_event(ListEvent::Updated { id });
                Ok(())
            }
            Err(err) => {
                let id = form.id().clone();
                self.emit_event(ListEvent::UpdateFailed {
                    id,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Replace the local copy of a contact with the service's record
    ///
    /// Leaves exactly one entry per id. A record that is not held locally
    /// is not inserted.
    fn apply_update(&mut self, updated: Contact) {
        let Some(pos) = self.contacts.iter().position(|c| c.id == updated.id) else {
            warn!("Updated contact {} is not in the list", updated.id);
            return;
        };

        let id = updated.id.clone();
        self.contacts[pos] = updated;

        let mut seen = false;
        self.contacts.retain(|c| {
            if c.id != id {
                return true;
            }
            let keep = !seen;
            seen = true;
            keep
        });
    }

    /// Emit a list event
    fn emit_event(&self, event: ListEvent) {
        // Send event, logging warning if channel is full (backpressure)
        if self.event_tx.try_send(event).is_err() {
            warn!("List event channel full, dropping event. Consider increasing event_channel_capacity.");
        }
    }
}

/// Keep the first occurrence of each id
fn dedup_by_id(contacts: &mut Vec<Contact>) {
    let mut seen = std::collections::HashSet::new();
    let before = contacts.len();
    contacts.retain(|c| seen.insert(c.id.clone()));

    if contacts.len() != before {
        warn!(
            "Dropped {} contact(s) with duplicate ids",
            before - contacts.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_event_clone() {
        let event = ListEvent::Deleted {
            id: ContactId::new("42"),
        };
        assert_eq!(event.clone(), event);
    }

    #[test]
    fn test_dedup_keeps_first() {
        let at = chrono::Utc::now();
        let make = |id: &str, name: &str| Contact {
            id: ContactId::new(id),
            full_name: name.to_string(),
            work_profile: String::new(),
            contact_no: String::new(),
            email: String::new(),
            created_at: at,
        };

        let mut contacts = vec![make("1", "first"), make("2", "other"), make("1", "second")];
        dedup_by_id(&mut contacts);

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].full_name, "first");
    }
}
