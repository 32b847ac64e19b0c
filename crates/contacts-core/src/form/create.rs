//! Add-contact form

use tracing::{error, info};

use crate::error::{Result, ViewError};
use crate::model::{Contact, ContactDraft, ContactField};
use crate::traits::ContactRepository;

/// Form state for creating a contact
///
/// Starts with four empty fields. A successful submit clears them again;
/// a failed one keeps what was typed and records a message.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    error: Option<ViewError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
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

    /// Update one field by its input name (e.g. `"fullName"`)
    ///
    /// An unknown name is rejected and leaves every field unchanged.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: ContactField = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    /// Message from the last failed submit
    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    /// Send the form to the service
    ///
    /// Blank required fields fail with [`ViewError::Incomplete`] before any
    /// request is made. There is no retry.
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

        match repository.create(&self.draft).await {
            Ok(contact) => {
                info!("Contact added: {} ({})", contact.full_name, contact.id);
                self.draft = ContactDraft::default();
                self.error = None;
                Ok(contact)
            }
            Err(e) => {
                error!(
                    "Error adding contact via {}: {}",
                    repository.repository_name(),
                    e
                );
                let err = ViewError::create();
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryContactRepository;

    #[test]
    fn test_keyed_update_changes_one_field() {
        let mut form = ContactForm::new();
        form.set_field("workProfile", "Engineer").unwrap();

        assert_eq!(form.value(ContactField::WorkProfile), "Engineer");
        assert_eq!(form.value(ContactField::FullName), "");
        assert_eq!(form.value(ContactField::ContactNo), "");
        assert_eq!(form.value(ContactField::Email), "");
    }

    #[test]
    fn test_unknown_field_name_rejected() {
        let mut form = ContactForm::new();
        assert!(form.set_field("phone", "555").is_err());
        assert_eq!(form.draft(), &ContactDraft::default());
    }

    #[tokio::test]
    async fn test_submit_resets_fields() {
        let repository = MemoryContactRepository::new();
        let mut form = ContactForm::new();
        form.set(ContactField::FullName, "Alice");
        form.set(ContactField::WorkProfile, "Engineer");
        form.set(ContactField::ContactNo, "5550100");
        form.set(ContactField::Email, "alice@example.com");

        let created = form.submit(&repository).await.unwrap();

        assert_eq!(created.full_name, "Alice");
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(form.error().is_none());
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_incomplete_submit_sends_nothing() {
        let repository = MemoryContactRepository::new();
        let mut form = ContactForm::new();
        form.set(ContactField::FullName, "Alice");

        let err = form.submit(&repository).await.unwrap_err();

        assert!(matches!(err, ViewError::Incomplete(ref f) if f.len() == 3));
        assert_eq!(form.error(), Some(&err));
        assert_eq!(form.value(ContactField::FullName), "Alice");
        assert!(repository.is_empty().await);
    }
}
