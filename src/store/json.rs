use super::*;

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, ffi::OsString, path::PathBuf};

/// On-disk layout of the backing file. The field names are load-bearing;
/// files written by earlier releases must keep parsing.
#[derive(Serialize, Deserialize)]
struct FileFormat {
    #[serde(default)]
    next_id: u32,
    #[serde(default)]
    contacts: Vec<Contact>,
}

/// Durable store: an in-memory map mirrored to a JSON file on every
/// mutation with a write-to-temp-then-rename protocol.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    contacts: HashMap<u32, Contact>,
    next_id: u32,
}

impl JsonFileStore {
    /// Reloads existing state from `path`. A missing file starts an empty
    /// store; an unparseable one is a fatal Format error and the file is
    /// left untouched for the operator to inspect.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let mut store = Self {
            path: path.into(),
            contacts: HashMap::new(),
            next_id: 1,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<(), AppError> {
        if !fs::exists(&self.path)? {
            return Ok(());
        }

        let data = fs::read_to_string(&self.path)?;
        let payload: FileFormat = serde_json::from_str(&data)
            .map_err(|e| AppError::Format(format!("{}: {e}", self.path.display())))?;

        // Contacts keep the ids they were stored under; the array on disk
        // is not assumed to be sorted.
        self.contacts = payload
            .contacts
            .into_iter()
            .map(|cont| (cont.id, cont))
            .collect();

        self.next_id = if payload.next_id > 0 {
            payload.next_id
        } else {
            // Hand-edited or legacy file without the counter
            self.contacts.keys().max().copied().unwrap_or(0) + 1
        };

        Ok(())
    }

    /// Serializes the whole store, sorted by ascending id, and swaps it
    /// onto the backing path. A failure in either step leaves the previous
    /// file intact; the in-memory state is already ahead of disk then.
    fn save(&self) -> Result<(), AppError> {
        let mut contacts: Vec<Contact> = self.contacts.values().cloned().collect();
        contacts.sort_by_key(|cont| cont.id);

        let payload = FileFormat {
            next_id: self.next_id,
            contacts,
        };
        let encoded = serde_json::to_vec_pretty(&payload)?;

        create_file_parent(&self.path)?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, &encoded).map_err(AppError::Persistence)?;
        fs::rename(&tmp, &self.path).map_err(AppError::Persistence)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = OsString::from(path.as_os_str());
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

impl ContactStore for JsonFileStore {
    fn add(&mut self, mut contact: Contact) -> Result<u32, AppError> {
        contact.id = self.next_id;
        let id = contact.id;

        self.contacts.insert(id, contact);
        self.next_id += 1;

        self.save()?;
        Ok(id)
    }

    fn add_with_id(&mut self, contact: Contact) -> Result<(), AppError> {
        if self.contacts.contains_key(&contact.id) {
            return Err(AppError::Validation(format!(
                "a contact with id {} already exists",
                contact.id
            )));
        }

        if contact.id >= self.next_id {
            self.next_id = contact.id + 1;
        }
        self.contacts.insert(contact.id, contact);

        self.save()
    }

    fn get_all(&self) -> Vec<&Contact> {
        let mut all: Vec<&Contact> = self.contacts.values().collect();
        all.sort_by_key(|cont| cont.id);
        all
    }

    fn get_by_id(&self, id: u32) -> Result<&Contact, AppError> {
        self.contacts
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("contact {id}")))
    }

    fn update(&mut self, id: u32, new_name: &str, new_email: &str) -> Result<(), AppError> {
        let contact = self
            .contacts
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("contact {id}")))?;

        if !new_email.is_empty() && !validate_email(new_email) {
            return Err(AppError::Validation(ValidationReq::email_req()));
        }

        if !new_name.is_empty() {
            contact.name = new_name.to_string();
        }
        if !new_email.is_empty() {
            contact.email = new_email.to_string();
        }

        self.save()
    }

    fn delete(&mut self, id: u32) -> Result<(), AppError> {
        if self.contacts.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("contact {id}")));
        }

        self.save()
    }
}
