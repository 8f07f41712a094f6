use super::{
    addr::parse_address,
    config::{ChannelAddressConfig, ResolvedChannel},
    error::{AddressError, Result},
    types::{AddressSpec, ChannelKind},
};

/// Stateless validator over the fixed per-kind grammars.
///
/// Holds no data; every call is independent and it may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl AddressValidator {
    pub fn new() -> Self {
        AddressValidator
    }

    /// Validate `address` against the grammar of `kind` and decode it.
    #[inline]
    pub fn validate(&self, kind: ChannelKind, address: &str) -> Result<AddressSpec> {
        parse_address(kind, address)
    }

    /// Like [`validate`](Self::validate) with the kind given as a
    /// channel-type identifier.
    pub fn validate_type_id(&self, type_id: &str, address: &str) -> Result<AddressSpec> {
        let kind = type_id.parse::<ChannelKind>()?;
        self.validate(kind, address)
    }

    /// Check a channel configuration.
    ///
    /// Checks run in a fixed order and stop at the first failure: identity,
    /// channel type, address presence, state address, command address.
    pub fn validate_config(&self, config: &ChannelAddressConfig) -> Result<()> {
        self.resolve_config(config).map(|_| ())
    }

    /// Same checks as [`validate_config`](Self::validate_config), returning
    /// the decoded addresses.
    ///
    /// An absent or blank channel type is `MissingChannelType`; a present
    /// but unknown one is `UnsupportedChannelKind`.
    pub fn resolve_config(&self, config: &ChannelAddressConfig) -> Result<ResolvedChannel> {
        let channel_id = present(&config.channel_id).ok_or(AddressError::MissingIdentity)?;
        let kind = present(&config.channel_type)
            .ok_or(AddressError::MissingChannelType)?
            .parse::<ChannelKind>()?;

        if config.state_address.is_none() && config.command_address.is_none() {
            return Err(AddressError::NoAddressSpecified);
        }

        let state = config
            .state_address
            .as_deref()
            .map(|a| self.validate(kind, a))
            .transpose()?;
        let command = config
            .command_address
            .as_deref()
            .map(|a| self.validate(kind, a))
            .transpose()?;

        Ok(ResolvedChannel {
            channel_id: channel_id.to_string(),
            kind,
            state,
            command,
        })
    }
}

/// Non-blank value of an optional identifier.
#[inline]
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccessWidth, Area};

    fn dimmer(id: &str) -> ChannelAddressConfig {
        ChannelAddressConfig::new(id, ChannelKind::Dimmer)
    }

    #[test]
    fn test_validate_type_id() {
        let v = AddressValidator::new();
        let spec = v.validate_type_id("simatic:chColor", "DB5.DBD12").unwrap();
        assert_eq!(spec.area, Area::DataBlock);
        assert_eq!(spec.width, Some(AccessWidth::DoubleWord));
        assert_eq!(
            v.validate_type_id("chRgb", "MD0"),
            Err(AddressError::UnsupportedChannelKind("chRgb".into()))
        );
    }

    #[test]
    fn test_check_order() {
        let v = AddressValidator;

        // identity first, even when everything else is wrong too
        let cfg = ChannelAddressConfig {
            channel_id: None,
            channel_type: None,
            state_address: Some("garbage".into()),
            command_address: None,
        };
        assert_eq!(v.validate_config(&cfg), Err(AddressError::MissingIdentity));

        let cfg = ChannelAddressConfig {
            channel_id: Some("  ".into()),
            ..dimmer("x").with_state_address("MB1")
        };
        assert_eq!(v.validate_config(&cfg), Err(AddressError::MissingIdentity));

        let cfg = ChannelAddressConfig {
            channel_id: Some("c1".into()),
            channel_type: None,
            ..Default::default()
        };
        assert_eq!(v.validate_config(&cfg), Err(AddressError::MissingChannelType));

        let cfg = ChannelAddressConfig {
            channel_type: Some("chHeater".into()),
            ..dimmer("c1")
        };
        assert_eq!(
            v.validate_config(&cfg),
            Err(AddressError::UnsupportedChannelKind("chHeater".into()))
        );

        assert_eq!(
            v.validate_config(&dimmer("c1")),
            Err(AddressError::NoAddressSpecified)
        );

        // state is reported before command
        let cfg = dimmer("c1")
            .with_state_address("MW1")
            .with_command_address("MX2");
        assert_eq!(
            v.validate_config(&cfg).unwrap_err().rejected_address(),
            Some("MW1")
        );

        let cfg = dimmer("c1")
            .with_state_address("MB1")
            .with_command_address("MX2");
        assert_eq!(
            v.validate_config(&cfg).unwrap_err().rejected_address(),
            Some("MX2")
        );
    }

    #[test]
    fn test_resolve_both_directions() {
        let cfg = dimmer("level")
            .with_state_address("MB100")
            .with_command_address("MB200");
        let resolved = AddressValidator.resolve_config(&cfg).unwrap();
        assert_eq!(resolved.channel_id, "level");
        assert_eq!(resolved.kind, ChannelKind::Dimmer);
        assert_eq!(resolved.state.map(|s| s.offset), Some(100));
        assert_eq!(resolved.command.map(|s| s.offset), Some(200));
    }

    #[test]
    fn test_command_only() {
        let cfg = ChannelAddressConfig::new("blind", ChannelKind::Rollershutter)
            .with_command_address("QB4");
        let resolved = AddressValidator.resolve_config(&cfg).unwrap();
        assert!(resolved.state.is_none());
        assert_eq!(resolved.command.map(|s| s.area), Some(Area::Output));
    }
}
