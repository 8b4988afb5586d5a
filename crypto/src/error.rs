use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("empty address")]
    Empty,

    #[error("address {address} does not start with prefix {prefix}")]
    WrongPrefix { address: String, prefix: String },

    #[error("address {0} is too short")]
    TooShort(String),

    #[error("address {0} contains an invalid character")]
    InvalidCharacter(String),

    #[error("address {0} has a bad checksum")]
    BadChecksum(String),

    #[error("address {0} is not canonically encoded")]
    NonCanonical(String),
}
