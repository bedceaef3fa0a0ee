pub use crate::cli::run_app;
pub use crate::domain::contact::{Contact, ValidationReq};
pub use crate::errors::AppError;
pub use crate::store::{
    ContactStore, StoreBackend, json::JsonFileStore, memory::MemoryStore, parse_store,
    storage_port::{export_contacts_to_csv, import_contacts_from_csv},
};
pub use crate::validation::{validate_email, validate_name};
