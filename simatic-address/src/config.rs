use super::types::{AddressSpec, ChannelKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Address configuration of one channel as supplied by the user.
///
/// Every field is optional on purpose: missing values are reported by
/// [`AddressValidator::validate_config`](crate::AddressValidator::validate_config)
/// rather than by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelAddressConfig {
    /// Channel identifier
    #[serde(default)]
    pub channel_id: Option<String>,
    /// Channel-type identifier, e.g. `chNumber` or `simatic:chNumber`
    #[serde(default)]
    pub channel_type: Option<String>,
    /// Address read to update the channel state
    #[serde(default)]
    pub state_address: Option<String>,
    /// Address written when the channel receives a command
    #[serde(default)]
    pub command_address: Option<String>,
}

impl ChannelAddressConfig {
    pub fn new(channel_id: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            channel_id: Some(channel_id.into()),
            channel_type: Some(kind.type_id().to_string()),
            ..Default::default()
        }
    }

    pub fn with_state_address(mut self, address: impl Into<String>) -> Self {
        self.state_address = Some(address.into());
        self
    }

    pub fn with_command_address(mut self, address: impl Into<String>) -> Self {
        self.command_address = Some(address.into());
        self
    }
}

impl Display for ChannelAddressConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let show = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "ChID={},StateAddress={},CmdAddress={}",
            show(&self.channel_id),
            show(&self.state_address),
            show(&self.command_address)
        )
    }
}

/// Channel whose addresses were validated and decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedChannel {
    pub channel_id: String,
    pub kind: ChannelKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<AddressSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<AddressSpec>,
}
