use super::*;

use tracing::{debug, info, warn};

/// Storage key holding the whole serialized contact list.
pub const CONTACTS_KEY: &str = "contacts";

/// In-memory contact list mirrored to a single key of a `KeyValueStore`.
///
/// Memory is the only read path: `list_all` and `list_favorites` never touch
/// storage, which is re-read only by an explicit `load`. Every successful
/// `add` rewrites the full list under `CONTACTS_KEY`.
pub struct ContactBook {
    mem: Vec<Contact>,
    storage: Box<dyn KeyValueStore>,
}

impl ContactBook {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            mem: Vec::new(),
            storage,
        }
    }

    pub fn open(storage: Box<dyn KeyValueStore>) -> Result<Self, AppError> {
        let mut book = Self::new(storage);
        book.load()?;
        Ok(book)
    }

    /// Replaces the in-memory list with what storage holds.
    ///
    /// A missing key is an empty book. A blob that does not parse, or that
    /// repeats an email, fails with `CorruptState` and leaves memory as it was.
    pub fn load(&mut self) -> Result<&[Contact], AppError> {
        let contacts = match self.storage.get(CONTACTS_KEY)? {
            Some(blob) => helper::deserialize_contacts(&blob)?,
            None => Vec::new(),
        };

        if let Some(email) = helper::first_duplicate_email(&contacts) {
            return Err(AppError::CorruptState(format!(
                "email '{}' is stored more than once",
                email
            )));
        }

        debug!(
            medium = self.storage.get_medium(),
            count = contacts.len(),
            "contacts loaded"
        );
        self.mem = contacts;
        Ok(self.mem.as_slice())
    }

    pub fn add(&mut self, candidate: Contact) -> Result<&[Contact], AppError> {
        if self.find_by_email(&candidate.email).is_some() {
            warn!(email = %candidate.email, "contact rejected, email already in book");
            return Err(AppError::DuplicateEmail(candidate.email));
        }

        self.mem.push(candidate);

        if let Err(err) = self.save() {
            // Keep memory equal to what storage still holds.
            self.mem.pop();
            warn!(error = %err, "persisting contacts failed, add rolled back");
            return Err(err);
        }

        info!(count = self.mem.len(), "contact added");
        Ok(self.mem.as_slice())
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.mem
    }

    pub fn list_favorites(&self) -> Vec<&Contact> {
        self.mem.iter().filter(|c| c.is_favorite).collect()
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.same_email(email))
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn storage_medium(&self) -> &str {
        self.storage.get_medium()
    }

    fn save(&self) -> Result<(), AppError> {
        let blob = helper::serialize_contacts(&self.mem)?;
        debug!(
            medium = self.storage.get_medium(),
            bytes = blob.len(),
            "writing contacts"
        );
        self.storage.set(CONTACTS_KEY, &blob)
    }
}
