use crate::types::ChannelKind;
use simatic_error::SimaticError;
use std::result::Result as StdResult;
use thiserror::Error as ThisError;

/// Unified address validation result type
pub type Result<T> = StdResult<T, AddressError>;

/// Configuration defects detected while validating channel addresses.
///
/// None of these are transient: retrying with the same input yields the
/// same error.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AddressError {
    #[error("Channel ID is missing")]
    MissingIdentity,

    #[error("Channel type is missing")]
    MissingChannelType,

    #[error("No state or command address specified")]
    NoAddressSpecified,

    #[error("Unsupported channel type '{0}'")]
    UnsupportedChannelKind(String),

    /// The address does not match any accepted form of the channel kind.
    ///
    /// `accepted` is the user-facing description of the forms the kind
    /// accepts, including examples.
    #[error("Unsupported address '{address}' for typeID={kind}. {accepted}")]
    AddressGrammarMismatch {
        kind: ChannelKind,
        address: String,
        accepted: &'static str,
    },
}

impl AddressError {
    /// Rejected address string, when the error is about a specific address.
    pub fn rejected_address(&self) -> Option<&str> {
        match self {
            AddressError::AddressGrammarMismatch { address, .. } => Some(address),
            _ => None,
        }
    }
}

impl From<AddressError> for SimaticError {
    #[inline]
    fn from(e: AddressError) -> Self {
        SimaticError::ValidationError(e.to_string())
    }
}
