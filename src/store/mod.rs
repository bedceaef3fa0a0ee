pub mod json;
pub mod memory;
pub mod storage_port;

use std::fs;
use std::path::Path;

use crate::domain::contact::{Contact, ValidationReq};
use crate::errors::AppError;
use crate::validation::validate_email;

/// Contract shared by every backing store. Callers go through this trait
/// only; the canonical copy of each contact lives inside the store.
pub trait ContactStore {
    /// Inserts with a store-assigned id, ignoring any id already set on the
    /// contact, and returns the assigned id. Durable stores persist before
    /// returning; a persistence failure leaves the in-memory change applied.
    fn add(&mut self, contact: Contact) -> Result<u32, AppError>;

    /// Inserts under the id already set on the contact (the flag-driven
    /// path). A duplicate id is rejected, and the next-id counter is bumped
    /// past the supplied id so assigned ids stay unique.
    fn add_with_id(&mut self, contact: Contact) -> Result<(), AppError>;

    /// Every contact ordered by ascending id. An empty store yields an
    /// empty vec.
    fn get_all(&self) -> Vec<&Contact>;

    fn get_by_id(&self, id: u32) -> Result<&Contact, AppError>;

    /// Empty arguments leave the corresponding field unchanged; a non-empty
    /// email is re-validated before anything is applied.
    fn update(&mut self, id: u32, new_name: &str, new_email: &str) -> Result<(), AppError>;

    fn delete(&mut self, id: u32) -> Result<(), AppError>;
}

#[derive(Debug)]
pub enum StoreBackend {
    Mem,
    Json,
}

impl StoreBackend {
    pub fn is_json(&self) -> bool {
        matches!(self, StoreBackend::Json)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StoreBackend::Json),
            "mem" => Ok(StoreBackend::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage backend".to_string(),
            )),
        }
    }
}

pub fn parse_store(choice: &str, path: &str) -> Result<Box<dyn ContactStore>, AppError> {
    match StoreBackend::from(choice)? {
        StoreBackend::Json => Ok(Box::new(json::JsonFileStore::new(path)?)),
        StoreBackend::Mem => Ok(Box::new(memory::MemoryStore::new())),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn recognizes_backends() -> Result<(), AppError> {
        assert!(StoreBackend::from("json")?.is_json());
        assert_eq!(StoreBackend::from("mem")?.is_which(), "mem");

        assert!(matches!(
            StoreBackend::from("sqlite"),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }
}
