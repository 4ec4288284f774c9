//! Persistence-friendly domain models for the back office.

pub mod category;
pub mod client;
pub mod common;
pub mod contract;
pub mod transaction;
