#![allow(dead_code)]

use simatic_address::{AddressSpec, AddressValidator, ChannelAddressConfig, ChannelKind};
use std::sync::Once;
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Decode or panic with useful context.
pub fn spec(kind: ChannelKind, input: &str) -> AddressSpec {
    match AddressValidator.validate(kind, input) {
        Ok(s) => s,
        Err(e) => panic!("validate failed for '{input}' ({kind}): {e}"),
    }
}

/// Addresses every kind must accept, with their canonical rendering.
pub fn accepted_samples(kind: ChannelKind) -> Vec<(&'static str, &'static str)> {
    match kind {
        ChannelKind::Number => vec![
            ("IB10", "IB10"),
            ("EB10", "IB10"),
            ("QW2", "QW2"),
            ("AW2", "QW2"),
            ("MW100", "MW100"),
            ("MD100F", "MD100F"),
            ("MW8F", "MW8F"),
            ("DB1.DBD0", "DB1.DBD0"),
            ("DB1.DBD0F", "DB1.DBD0F"),
            ("DB12.DBB3", "DB12.DBB3"),
        ],
        ChannelKind::String => vec![
            ("MB100[16]", "MB100[16]"),
            ("EB0[1]", "IB0[1]"),
            ("DB2.DBB8[32]", "DB2.DBB8[32]"),
        ],
        ChannelKind::Switch | ChannelKind::Contact => vec![
            ("MB100", "MB100"),
            ("M100.0", "M100.0"),
            ("M100.7", "M100.7"),
            ("A4.2", "Q4.2"),
            ("DB1.DBB0", "DB1.DBB0"),
            ("DB1.DBX0.3", "DB1.DBX0.3"),
        ],
        ChannelKind::Dimmer | ChannelKind::Rollershutter => vec![
            ("MB100", "MB100"),
            ("QB0", "QB0"),
            ("DB7.DBB1", "DB7.DBB1"),
        ],
        ChannelKind::Color => vec![
            ("MD100", "MD100"),
            ("ED4", "ID4"),
            ("DB3.DBD16", "DB3.DBD16"),
        ],
    }
}

/// Addresses every kind must reject.
pub fn rejected_samples(kind: ChannelKind) -> Vec<&'static str> {
    let mut common = vec!["", "mb100", "XB1", "MB", "DB1.DB", "DB1", " MB1", "MB1 "];
    common.extend(match kind {
        ChannelKind::Number => vec!["MB100F", "DB1.DW0", "M1.0", "DB1.DBX0.1", "MB1[4]"],
        ChannelKind::String => vec!["MB100", "MW100[4]", "MB100[0]", "MB100[]", "DB1.DBD0[4]"],
        ChannelKind::Switch | ChannelKind::Contact => {
            vec!["M100.8", "MW2", "MD2", "DB1.DBX0", "DB1.X0.1", "M1.0.1"]
        }
        ChannelKind::Dimmer | ChannelKind::Rollershutter => vec!["M1.0", "MW2", "MB1F"],
        ChannelKind::Color => vec!["MB1", "MW1", "MD1F", "DB1.DBB0"],
    });
    common
}

pub fn channel(id: &str, kind: ChannelKind) -> ChannelAddressConfig {
    ChannelAddressConfig::new(id, kind)
}
