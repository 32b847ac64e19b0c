//! Contact data model
//!
//! [`Contact`] is the record the service owns; [`ContactDraft`] is the part
//! of it a user types in. The wire shape uses the service's field names:
//!
//! ```json
//! { "_id": "...", "fullName": "...", "workProfile": "...",
//!   "contactNo": "...", "email": "...", "createdAt": "2024-01-01T00:00:00Z" }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Server-assigned contact identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContactId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A contact record as held by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier (immutable after creation)
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub full_name: String,
    pub work_profile: String,
    pub contact_no: String,
    pub email: String,
    /// Creation timestamp (immutable after creation)
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// The user-editable part of this contact
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            full_name: self.full_name.clone(),
            work_profile: self.work_profile.clone(),
            contact_no: self.contact_no.clone(),
            email: self.email.clone(),
        }
    }

    /// Check whether this contact matches a search text
    ///
    /// Empty text matches everything. Name, work profile and email compare
    /// case-insensitively; the phone number compares as typed.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }

        let needle = text.to_lowercase();
        self.full_name.to_lowercase().contains(&needle)
            || self.work_profile.to_lowercase().contains(&needle)
            || self.contact_no.contains(text)
            || self.email.to_lowercase().contains(&needle)
    }
}

/// The four user-entered fields of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub full_name: String,
    pub work_profile: String,
    pub contact_no: String,
    pub email: String,
}

impl ContactDraft {
    /// Create a draft with all four fields set
    pub fn new(
        full_name: impl Into<String>,
        work_profile: impl Into<String>,
        contact_no: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            work_profile: work_profile.into(),
            contact_no: contact_no.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::WorkProfile => &self.work_profile,
            ContactField::ContactNo => &self.contact_no,
            ContactField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FullName => &mut self.full_name,
            ContactField::WorkProfile => &mut self.work_profile,
            ContactField::ContactNo => &mut self.contact_no,
            ContactField::Email => &mut self.email,
        };
        *slot = value.into();
    }

    /// Fields that are blank (empty or whitespace only)
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Check that every required field is present
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }

        let names: Vec<&str> = missing.iter().map(|f| f.name()).collect();
        Err(Error::invalid_input(format!(
            "missing required field(s): {}",
            names.join(", ")
        )))
    }
}

/// Names one of the four user-entered fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    WorkProfile,
    ContactNo,
    Email,
}

impl ContactField {
    /// All fields in form order
    pub const ALL: [ContactField; 4] = [
        ContactField::FullName,
        ContactField::WorkProfile,
        ContactField::ContactNo,
        ContactField::Email,
    ];

    /// Wire/input name (e.g. `fullName`)
    pub fn name(self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::WorkProfile => "workProfile",
            ContactField::ContactNo => "contactNo",
            ContactField::Email => "email",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            ContactField::FullName => "Full Name",
            ContactField::WorkProfile => "Work Profile",
            ContactField::ContactNo => "Contact No",
            ContactField::Email => "Email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ContactField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::invalid_input(format!("unknown contact field: {}", s)))
    }
}
