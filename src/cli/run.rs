use crate::{
    cli::{DUPLICATE_EMAIL_ALERT, display_contact, display_favorite},
    prelude::{
        AppError, Contact, ContactBook, StorageMediums,
        command::{Cli, Commands},
        parse_storage_type,
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    // .env values must be in the environment before clap reads its `env` defaults
    dotenv().ok();
    let cli = Cli::parse();

    let medium: StorageMediums = cli.storage_choice.parse()?;
    debug!(
        medium = medium.is_which(),
        dir = %cli.storage_dir,
        "storage selected"
    );

    let storage = parse_storage_type(medium, &cli.storage_dir)?;
    let mut book = ContactBook::open(storage)?;

    match cli.command {
        Commands::Add {
            name,
            phone,
            email,
            birthdate,
            favorite,
        } => {
            let new_contact = Contact::new(name, phone, email, birthdate, favorite);

            match book.add(new_contact) {
                Ok(_) => {
                    println!("Contact added successfully");
                    Ok(())
                }
                Err(AppError::DuplicateEmail(email)) => {
                    eprintln!("{}", DUPLICATE_EMAIL_ALERT);
                    Err(AppError::DuplicateEmail(email))
                }
                Err(e) => Err(e),
            }
        }

        Commands::List => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in book.list_all().iter().enumerate() {
                println!("{}", display_contact(i + 1, c));
            }
            Ok(())
        }

        Commands::Favorites => {
            let favorites = book.list_favorites();

            if favorites.is_empty() {
                println!("No favorite contact yet");
                return Ok(());
            }

            for (i, c) in favorites.iter().enumerate() {
                println!("{}", display_favorite(i + 1, c));
            }
            Ok(())
        }
    }
}
