//! Core traits for the contacts client
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`ContactRepository`]: List, create, update and delete contacts on the owning service

pub mod repository;

pub use repository::ContactRepository;
