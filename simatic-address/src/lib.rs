//! Address grammar and validation for Siemens S7 channel bindings.
//!
//! A channel of a given [`ChannelKind`] is bound to PLC memory through a
//! textual address such as `MW100`, `DB1.DBD0F`, `M100.7` or `MB100[16]`.
//! [`AddressValidator`] checks those strings against the grammar of the
//! channel kind and decodes them into an [`AddressSpec`] before any I/O is
//! attempted.

mod addr;
pub mod config;
pub mod constants;
pub mod error;
mod grammar;
pub mod report;
pub mod types;
mod validator;

pub use config::{ChannelAddressConfig, ResolvedChannel};
pub use error::{AddressError, Result};
pub use report::{validate_channels, ChannelOutcome, ValidationReport};
pub use types::{AccessWidth, AddressSpec, Area, ChannelKind};
pub use validator::AddressValidator;
