use thiserror::Error;

/// Error types for the seeding workflow
#[derive(Error, Debug)]
pub enum SeedError {
    /// Could not open the data store
    #[error("Connection error: {0}")]
    Connection(sea_orm::DbErr),

    /// A create, update or reset against the data store failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A generator was asked to pick a reference from a pool with no entries
    #[error("Cannot pick from empty {0} pool")]
    EmptyPool(&'static str),

    /// Reading the operator's confirmation failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),

    /// The demo account request could not be delivered
    #[error("Signup error: {0}")]
    Signup(#[from] reqwest::Error),
}

/// Type alias for Result with SeedError
pub type Result<T> = std::result::Result<T, SeedError>;
