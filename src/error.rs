use crate::identity::IdentityError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("github error: {0}")]
    GitHub(String),

    #[error("invalid page size {0}: must be between 1 and 100")]
    InvalidPageSize(u8),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("no username configured: pass --user or set SHOWCASE_USERNAME")]
    MissingUsername,
}

impl From<octocrab::Error> for ShowcaseError {
    fn from(e: octocrab::Error) -> Self {
        match e {
            octocrab::Error::GitHub { source, .. } => ShowcaseError::GitHub(format!(
                "{} ({})",
                source.message, source.status_code
            )),
            other => ShowcaseError::GitHub(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
