use thiserror::Error;

/// Domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No department assigned: {person}")]
    DepartmentUnset { person: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
