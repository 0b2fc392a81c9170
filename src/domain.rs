pub mod contact;
pub mod manager;
pub mod shared;

use crate::{errors::AppError, helper, storage::KeyValueStore};
use contact::Contact;
