pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::contact::Contact;

pub const DUPLICATE_EMAIL_ALERT: &str = "Contato com este email já está adicionado.";

// OUTPUT FUNCTIONS
pub fn display_contact(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:15} {:^30} {:<12} {}",
        contact.name,
        contact.phone,
        contact.email,
        contact.birthdate,
        contact.favorite_label()
    )
}

/// The favorites view drops the flag column, every row is a favorite.
pub fn display_favorite(position: usize, contact: &Contact) -> String {
    format!(
        "{position:>3}. {:<20} {:15} {:^30} {:<12}",
        contact.name, contact.phone, contact.email, contact.birthdate
    )
}
