//! Edit-contact form
//!
//! Opened by the list controller for one contact. The fields are seeded
//! once from that contact; later changes to the list do not re-seed them.

use tracing::{error, info};

use crate::error::{Result, ViewError};
use crate::model::{Contact, ContactDraft, ContactField, ContactId};
use crate::traits::ContactRepository;

/// Form state for updating an existing contact
#[derive(Debug, Clone)]
pub struct EditForm {
    /// The contact as it was when the form opened
    original: Contact,
    draft: ContactDraft,
    error: Option<ViewError>,
}

impl EditForm {
    /// Open a form seeded from `contact`
    pub fn open(contact: Contact) -> Self {
        let draft = contact.draft();
        Self {
            original: contact,
            draft,
            error: None,
        }
    }

    pub fn id(&self) -> &ContactId {
        &self.original.id
    }

    pub fn original(&self) -> &Contact {
        &self.original
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Update one field by its input name (e.g. `"email"`)
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: ContactField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Whether any field differs from the seeded contact
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original.draft()
    }

    /// Message from the last failed submit
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// Send the edited fields to the service
    ///
    /// On success the service's copy of the record is returned for the
    /// caller to apply. On failure the form keeps its fields and shows an
    /// error; it stays open.
    pub async fn submit(
        &mut self,
        repository: &dyn ContactRepository,
    ) -> std::result::Result<Contact, ViewError> {
        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            let err = ViewError::Incomplete(missing);
            self.error = Some(err.clone());
            return Err(err);
        }

        match repository.update(self.id(), &self.draft).await {
            Ok(updated) => {
                info!("Contact updated: {}", updated.id);
                self.error = None;
                Ok(updated)
            }
            Err(e) => {
                error!("Error updating contact {}: {}", self.id(), e);
                let err = ViewError::update();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
