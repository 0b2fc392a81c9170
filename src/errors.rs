use core::fmt;
use std::sync::PoisonError;

#[derive(Debug)]
pub enum AppError {
    DuplicateEmail(String),
    CorruptState(String),
    Persistence(std::io::Error),
    Validation(String),
    LockPoisoned,
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err)
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_err: PoisonError<T>) -> Self {
        AppError::LockPoisoned
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::DuplicateEmail(email) => {
                write!(f, "A contact with email '{}' already exists", email)
            }
            AppError::CorruptState(reason) => {
                write!(f, "Stored contacts could not be read: {}", reason)
            }
            AppError::Persistence(e) => {
                write!(f, "I/O error while accessing contact storage: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
            AppError::LockPoisoned => {
                write!(f, "Contact book lock poisoned by a panicked writer")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;

    #[test]
    fn confirm_duplicate_email_message() {
        let err = AppError::DuplicateEmail("a@x.com".to_string());

        assert_eq!(
            format!("{}", err),
            "A contact with email 'a@x.com' already exists"
        );
    }

    #[test]
    fn io_error_becomes_persistence_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = AppError::from(io);

        assert!(matches!(err, AppError::Persistence(_)));
        assert!(format!("{}", err).contains("read-only"));
        assert!(err.source().is_some());
    }

    #[test]
    fn poisoned_mutex_maps_to_lock_poisoned() {
        let lock = Arc::new(Mutex::new(0));
        let lock2 = Arc::clone(&lock);

        let _ = thread::spawn(move || {
            let _guard = lock2.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err: AppError = lock.lock().unwrap_err().into();
        assert!(matches!(err, AppError::LockPoisoned));
    }
}
