use super::*;

use super::contact::Contact;

/// Owns the in-memory collection and writes it back through the
/// [`ContactStore`] after every mutation.
pub struct ContactManager {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
}

impl ContactManager {
    /// Loads the collection once from `storage`.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mem = storage.load()?;
        tracing::info!(
            medium = storage.get_medium(),
            contacts = mem.len(),
            "loaded contacts"
        );

        Ok(Self { mem, storage })
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn exists(&self, name: &str, phone: &str) -> bool {
        self.mem.iter().any(|c| c.matches(name, phone))
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<Uuid, AppError> {
        let contact = Contact::new(name.to_string(), phone.to_string());
        contact.validate()?;

        if self.exists(name, phone) {
            tracing::debug!(name, phone, "rejected duplicate contact");
            return Err(AppError::DuplicateContact);
        }

        let id = contact.id;
        self.mem.push(contact);
        tracing::debug!(%id, total = self.mem.len(), "added contact");

        self.save()?;
        Ok(id)
    }

    pub fn delete_contact(&mut self, id: &Uuid) -> Result<Contact, AppError> {
        let Some(index) = self.mem.iter().position(|c| &c.id == id) else {
            return Err(AppError::NotFound("Contact".to_string()));
        };

        let removed = self.mem.remove(index);
        tracing::debug!(%id, total = self.mem.len(), "deleted contact");

        self.save()?;
        Ok(removed)
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.save(&self.mem)
    }
}
