//! Test doubles and common utilities for contract tests
//!
//! This module provides a scripted repository that records every call and
//! can be told to fail, plus helpers for building contacts.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use contacts_core::error::{Error, Result};
use contacts_core::{
    Contact, ContactDraft, ContactId, ContactRepository, SearchScope, ViewConfig,
};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

/// A repository double that tracks calls and serves a fixed list
///
/// Mutations act on its own copy of the records, like a real service would.
pub struct MockRepository {
    records: Mutex<Vec<Contact>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_mutations: AtomicBool,
    deleted_ids: Mutex<Vec<ContactId>>,
    /// When set, delete waits until notified
    delete_gate: Option<Arc<Notify>>,
}

impl MockRepository {
    pub fn new(records: Vec<Contact>) -> Self {
        Self {
            records: Mutex::new(records),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_mutations: AtomicBool::new(false),
            deleted_ids: Mutex::new(Vec::new()),
            delete_gate: None,
        }
    }

    /// A repository whose deletes block until `gate` is notified
    pub fn with_delete_gate(records: Vec<Contact>, gate: Arc<Notify>) -> Self {
        Self {
            delete_gate: Some(gate),
            ..Self::new(records)
        }
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn deleted_ids(&self) -> Vec<ContactId> {
        self.deleted_ids.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<Contact> {
        self.records.lock().unwrap().clone()
    }

    fn check_mutation(&self) -> Result<()> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(Error::http("503 Service Unavailable: scripted failure"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ContactRepository for MockRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::http("connection refused"));
        }
        Ok(self.records())
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_mutation()?;

        let mut records = self.records.lock().unwrap();
        let contact = Contact {
            id: ContactId::new(format!("srv-{}", records.len() + 1)),
            full_name: draft.full_name.clone(),
            work_profile: draft.work_profile.clone(),
            contact_no: draft.contact_no.clone(),
            email: draft.email.clone(),
            created_at: Utc::now(),
        };
        records.push(contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_mutation()?;

        let mut records = self.records.lock().unwrap();
        let stored = records
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| Error::http(format!("404 Not Found: {}", id)))?;
        stored.full_name = draft.full_name.clone();
        stored.work_profile = draft.work_profile.clone();
        stored.contact_no = draft.contact_no.clone();
        stored.email = draft.email.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.delete_gate {
            gate.notified().await;
        }
        self.check_mutation()?;

        self.deleted_ids.lock().unwrap().push(id.clone());
        self.records.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }

    fn repository_name(&self) -> &'static str {
        "mock"
    }
}

/// Fixed reference time for test data
pub fn t0() -> DateTime<Utc> {
    "2024-01-01T09:00:00Z".parse().unwrap()
}

/// A contact created `minutes` after [`t0`]
pub fn contact_at(id: &str, full_name: &str, minutes: i64) -> Contact {
    Contact {
        id: ContactId::new(id),
        full_name: full_name.to_string(),
        work_profile: "Engineer".to_string(),
        contact_no: format!("555{:04}", minutes),
        email: format!("{}@example.com", full_name.to_lowercase()),
        created_at: t0() + Duration::minutes(minutes),
    }
}

/// Six contacts T1..T6, oldest first, as the service might return them
pub fn six_contacts() -> Vec<Contact> {
    (1..=6)
        .map(|i| contact_at(&format!("t{}", i), &format!("T{}", i), i))
        .collect()
}

/// View configuration with the default page size of 5
pub fn view_config(search_scope: SearchScope) -> ViewConfig {
    ViewConfig {
        search_scope,
        ..ViewConfig::default()
    }
}
