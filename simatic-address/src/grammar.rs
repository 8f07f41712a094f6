use super::types::ChannelKind;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Address forms. Capture names shared by all forms:
// `area` area letter, `db` data block number, `width` width letter,
// `offset` byte offset, `bit` bit index, `float` float suffix, `len` string length.
const AREA_BYTE: &str = r"^(?P<area>[IQAEM])(?P<width>B)(?P<offset>[0-9]+)$";
const AREA_WIDE: &str = r"^(?P<area>[IQAEM])(?P<width>[WD])(?P<offset>[0-9]+)(?P<float>F)?$";
const AREA_DWORD: &str = r"^(?P<area>[IQAEM])(?P<width>D)(?P<offset>[0-9]+)$";
const AREA_STRING: &str = r"^(?P<area>[IQAEM])(?P<width>B)(?P<offset>[0-9]+)\[(?P<len>[0-9]+)\]$";
const AREA_BIT: &str = r"^(?P<area>[IQAEM])(?P<offset>[0-9]+)\.(?P<bit>[0-7])$";
const DB_BYTE: &str = r"^DB(?P<db>[0-9]+)\.DB(?P<width>B)(?P<offset>[0-9]+)$";
const DB_WIDE: &str = r"^DB(?P<db>[0-9]+)\.DB(?P<width>[WD])(?P<offset>[0-9]+)(?P<float>F)?$";
const DB_DWORD: &str = r"^DB(?P<db>[0-9]+)\.DB(?P<width>D)(?P<offset>[0-9]+)$";
const DB_STRING: &str = r"^DB(?P<db>[0-9]+)\.DB(?P<width>B)(?P<offset>[0-9]+)\[(?P<len>[0-9]+)\]$";
const DB_BIT: &str = r"^DB(?P<db>[0-9]+)\.DBX(?P<offset>[0-9]+)\.(?P<bit>[0-7])$";

const NUMBER_ACCEPTED: &str =
    "Supported types B,W,D. Address example IB10, MW100, DB1.DBD0, DB1.DBD0F";
const STRING_ACCEPTED: &str =
    "Supported types BYTE. Length must be specified. Address example MB100[16]";
const BIT_OR_BYTE_ACCEPTED: &str = "Supported types BYTE, BIT. Address example MB100, M100.0";
const BYTE_ACCEPTED: &str = "Supported types BYTE. Address example MB100";
const DWORD_ACCEPTED: &str = "Supported types DWORD. Address example MD100";

/// Set of address forms accepted for one channel kind.
pub(crate) struct Grammar {
    name: &'static str,
    forms: Vec<Regex>,
    accepted: &'static str,
}

impl Grammar {
    fn compile(name: &'static str, patterns: &[&str], accepted: &'static str) -> Self {
        let forms = patterns
            .iter()
            .map(|p| Regex::new(p).expect("address form patterns are static and valid"))
            .collect();
        Grammar {
            name,
            forms,
            accepted,
        }
    }

    #[inline]
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    /// Human readable description of the accepted forms.
    #[inline]
    pub(crate) fn accepted(&self) -> &'static str {
        self.accepted
    }

    /// Match `input` against each form, first match wins.
    #[inline]
    pub(crate) fn captures<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        self.forms.iter().find_map(|re| re.captures(input))
    }
}

static NUMBER: Lazy<Grammar> = Lazy::new(|| {
    Grammar::compile(
        "number",
        &[AREA_BYTE, AREA_WIDE, DB_BYTE, DB_WIDE],
        NUMBER_ACCEPTED,
    )
});

static STRING: Lazy<Grammar> =
    Lazy::new(|| Grammar::compile("string", &[AREA_STRING, DB_STRING], STRING_ACCEPTED));

// Switch/Contact and Dimmer/Rollershutter currently accept the same forms but
// are kept as separate grammars so either can change on its own.
static SWITCH: Lazy<Grammar> = Lazy::new(|| {
    Grammar::compile(
        "switch",
        &[AREA_BYTE, DB_BYTE, AREA_BIT, DB_BIT],
        BIT_OR_BYTE_ACCEPTED,
    )
});

static CONTACT: Lazy<Grammar> = Lazy::new(|| {
    Grammar::compile(
        "contact",
        &[AREA_BYTE, DB_BYTE, AREA_BIT, DB_BIT],
        BIT_OR_BYTE_ACCEPTED,
    )
});

static DIMMER: Lazy<Grammar> =
    Lazy::new(|| Grammar::compile("dimmer", &[AREA_BYTE, DB_BYTE], BYTE_ACCEPTED));

static COLOR: Lazy<Grammar> =
    Lazy::new(|| Grammar::compile("color", &[AREA_DWORD, DB_DWORD], DWORD_ACCEPTED));

static ROLLERSHUTTER: Lazy<Grammar> =
    Lazy::new(|| Grammar::compile("rollershutter", &[AREA_BYTE, DB_BYTE], BYTE_ACCEPTED));

/// Grammar selected by channel kind. There is no fallback between kinds.
pub(crate) fn grammar_for(kind: ChannelKind) -> &'static Grammar {
    match kind {
        ChannelKind::Number => &*NUMBER,
        ChannelKind::String => &*STRING,
        ChannelKind::Switch => &*SWITCH,
        ChannelKind::Contact => &*CONTACT,
        ChannelKind::Dimmer => &*DIMMER,
        ChannelKind::Color => &*COLOR,
        ChannelKind::Rollershutter => &*ROLLERSHUTTER,
    }
}
