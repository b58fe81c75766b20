use thiserror::Error;

/// Failures while waiting on the console for a value.
#[derive(Debug, Error)]
pub enum InputError {
    /// Standard input was closed before a value arrived.
    #[error("end of input")]
    Eof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate employee id: {id}")]
    DuplicateId { id: i32 },
}
