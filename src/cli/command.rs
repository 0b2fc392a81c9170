use crate::storage::DEFAULT_STORAGE_DIR;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact book with favorites")]
pub struct Cli {
    /// Storage choice (mem, file) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Directory where the file storage keeps its data
    #[arg(long, env = "CONTACTS_STORAGE_DIR", default_value_t = String::from(DEFAULT_STORAGE_DIR))]
    pub storage_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact, email must not already be in the book
    Add {
        /// Contact name
        #[arg(long, default_value_t)]
        name: String,

        /// Contact phone number
        #[arg(long, default_value_t)]
        phone: String,

        /// Contact email address
        #[arg(long, default_value_t)]
        email: String,

        /// Birthdate, kept as typed
        #[arg(long, default_value_t)]
        birthdate: String,

        /// Mark the contact as a favorite
        #[arg(short, long)]
        favorite: bool,
    },
    /// List all contacts in the order they were added
    List,
    /// List favorite contacts only
    Favorites,
}
