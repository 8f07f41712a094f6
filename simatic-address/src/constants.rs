// Identifiers shared with the binding's thing/channel registry.

/// Binding identifier used as the namespace of channel-type UIDs
/// (`simatic:chNumber`).
pub const BINDING_ID: &str = "simatic";

pub const CHANNEL_NUMBER: &str = "chNumber";
pub const CHANNEL_COLOR: &str = "chColor";
pub const CHANNEL_STRING: &str = "chString";
pub const CHANNEL_CONTACT: &str = "chContact";
pub const CHANNEL_SWITCH: &str = "chSwitch";
pub const CHANNEL_DIMMER: &str = "chDimmer";
pub const CHANNEL_ROLLERSHUTTER: &str = "chRollershutter";
