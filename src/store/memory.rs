use super::*;

use std::collections::HashMap;

/// Volatile store: same contract as the durable one, contents are lost on
/// process exit. Doubles as the reference implementation in tests.
#[derive(Debug)]
pub struct MemoryStore {
    contacts: HashMap<u32, Contact>,
    next_id: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            contacts: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryStore {
    fn add(&mut self, mut contact: Contact) -> Result<u32, AppError> {
        contact.id = self.next_id;
        let id = contact.id;

        self.contacts.insert(id, contact);
        self.next_id += 1;
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
        Ok(())
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
        Ok(())
    }

    fn delete(&mut self, id: u32) -> Result<(), AppError> {
        if self.contacts.remove(&id).is_none() {
            return Err(AppError::NotFound(format!("contact {id}")));
        }
        Ok(())
    }
}
