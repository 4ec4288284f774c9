pub mod json_backend;
pub mod watch;

use std::path::Path;

use crate::{errors::StoreError, ledger::Office};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing office
/// snapshots.
pub trait StorageBackend: Send + Sync {
    fn save(&self, office: &Office, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Office>;
    fn list(&self) -> Result<Vec<String>>;

    /// Optional helpers for ad-hoc file operations. Default
    /// implementations forward to the JSON codec.
    fn save_to_path(&self, office: &Office, path: &Path) -> Result<()> {
        json_backend::save_office_to_path(office, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Office> {
        json_backend::load_office_from_path(path)
    }
}

pub use json_backend::JsonStorage;
pub use watch::{ChangeHub, Collection, Subscription};
