//! Core records and storage contracts for postboard.
//!
//! Everything in this crate is pure: record types, the repository traits the
//! storage backends implement, and the key rules those backends share.

pub mod records;
pub mod storage;
