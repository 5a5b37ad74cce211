use super::*;

/// Slot holding the serialized collection.
pub const CONTACTS_KEY: &str = "contacts";

/// Stores the whole collection as a JSON array under [`CONTACTS_KEY`].
pub struct LocalStorage<S: KeyValueStore> {
    pub medium: String,
    kv: S,
}

impl<S: KeyValueStore> LocalStorage<S> {
    pub fn new(medium: &str, kv: S) -> Self {
        Self {
            medium: medium.to_string(),
            kv,
        }
    }
}

impl<S: KeyValueStore> ContactStore for LocalStorage<S> {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        let Some(data) = self.kv.get_item(CONTACTS_KEY)? else {
            return Ok(Vec::new());
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).map_err(|e| {
            tracing::error!(key = CONTACTS_KEY, error = %e, "stored contacts are not readable");
            AppError::CorruptStorage(format!("key \"{}\": {}", CONTACTS_KEY, e))
        })
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let data = serde_json::to_string(contacts)?;
        self.kv.set_item(CONTACTS_KEY, &data)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
