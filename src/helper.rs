use std::collections::HashSet;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub fn serialize_contacts(contacts: &[Contact]) -> Result<String, AppError> {
    serde_json::to_string(contacts).map_err(|e| AppError::Persistence(std::io::Error::other(e)))
}

/// Parses the persisted blob back into an ordered contact list.
///
/// Anything that is not a JSON array of contacts, including an empty string,
/// is reported as `AppError::CorruptState` rather than read as "no contacts".
pub fn deserialize_contacts(blob: &str) -> Result<Vec<Contact>, AppError> {
    serde_json::from_str::<Vec<Contact>>(blob).map_err(|e| AppError::CorruptState(e.to_string()))
}

pub fn first_duplicate_email(contacts: &[Contact]) -> Option<&str> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(contacts.len());

    contacts
        .iter()
        .map(|c| c.email.as_str())
        .find(|email| !seen.insert(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, is_favorite: bool) -> Contact {
        Contact::new(
            name.to_string(),
            "0800".to_string(),
            email.to_string(),
            "".to_string(),
            is_favorite,
        )
    }

    #[test]
    fn blob_round_trip_keeps_order() -> Result<(), AppError> {
        let contacts = vec![
            contact("Zed", "z@x.com", true),
            contact("Ana", "a@x.com", false),
            contact("Mia", "", true),
        ];

        let blob = serialize_contacts(&contacts)?;
        let restored = deserialize_contacts(&blob)?;

        assert_eq!(restored, contacts);
        Ok(())
    }

    #[test]
    fn rejects_malformed_blobs() {
        for blob in ["", "   ", "{", "{}", "null", r#"[{"name":"Ana"}]"#] {
            let result = deserialize_contacts(blob);
            assert!(
                matches!(result, Err(AppError::CorruptState(_))),
                "blob {blob:?} should be corrupt"
            );
        }
    }

    #[test]
    fn empty_array_is_an_empty_book() -> Result<(), AppError> {
        assert!(deserialize_contacts("[]")?.is_empty());
        Ok(())
    }

    #[test]
    fn finds_first_repeated_email() {
        let contacts = vec![
            contact("Ana", "a@x.com", false),
            contact("Bia", "b@x.com", false),
            contact("Ana Clone", "a@x.com", true),
        ];

        assert_eq!(first_duplicate_email(&contacts), Some("a@x.com"));
        assert_eq!(first_duplicate_email(&contacts[..2]), None);
    }
}
