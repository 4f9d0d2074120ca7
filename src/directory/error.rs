use thiserror::Error;

pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Errors raised by directory operations.
///
/// The display strings are the `detail` messages returned to API clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student not signed up for this activity")]
    NotRegistered,

    /// A seed listed the same participant twice for one activity.
    #[error("Duplicate participant {email} in seed for {activity}")]
    DuplicateSeedParticipant { activity: String, email: String },
}
