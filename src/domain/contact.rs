use serde::{Deserialize, Serialize};

pub const FAVORITE_LABEL: &str = "Favorito";
pub const NOT_FAVORITE_LABEL: &str = "Não Favorito";

/// A single entry of the contact book.
///
/// Field names on the wire follow the blob written by earlier releases:
/// `birthdate` is stored as `nascimento` and `is_favorite` as `isFavorite`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,

    // Free-form, never parsed into a date.
    #[serde(rename = "nascimento")]
    pub birthdate: String,

    #[serde(rename = "isFavorite", default = "bool::default")]
    pub is_favorite: bool,
}

impl Contact {
    pub fn new(
        name: String,
        phone: String,
        email: String,
        birthdate: String,
        is_favorite: bool,
    ) -> Self {
        Contact {
            name,
            phone,
            email,
            birthdate,
            is_favorite,
        }
    }

    /// Exact, case-sensitive comparison on the uniqueness key.
    pub fn same_email(&self, email: &str) -> bool {
        self.email == email
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.is_favorite {
            FAVORITE_LABEL
        } else {
            NOT_FAVORITE_LABEL
        }
    }
}
