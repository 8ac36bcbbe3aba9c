use std::any::Any;
use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DecoratorError {
    #[error("inner unit panicked: {0}")]
    Panicked(String),

    #[error("task {id} is still in flight, join it before dispatching again")]
    TaskInFlight { id: Uuid },

    #[error("background task {id} panicked: {message}")]
    TaskPanicked { id: Uuid, message: String },

    #[error("failed to spawn background task: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to await background task {id}: {reason}")]
    Join { id: Uuid, reason: String },
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_payloads() {
        let payload = std::panic::catch_unwind(|| -> () { panic!("static text") }).unwrap_err();
        assert_eq!(panic_message(&*payload), "static text");

        let payload = std::panic::catch_unwind(|| -> () { panic!("formatted {}", 7) }).unwrap_err();
        assert_eq!(panic_message(&*payload), "formatted 7");

        let payload = std::panic::catch_unwind(|| -> () { std::panic::panic_any(42u8) }).unwrap_err();
        assert_eq!(panic_message(&*payload), "non-string panic payload");
    }

    #[test]
    fn test_redirect_error_names_the_path() {
        let err = DecoratorError::Redirect {
            path: PathBuf::from("/nowhere/log.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("failed to open log file /nowhere/log.txt"));
    }
}
