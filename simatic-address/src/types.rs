use super::{
    constants::{
        BINDING_ID, CHANNEL_COLOR, CHANNEL_CONTACT, CHANNEL_DIMMER, CHANNEL_NUMBER,
        CHANNEL_ROLLERSHUTTER, CHANNEL_STRING, CHANNEL_SWITCH,
    },
    error::AddressError,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// PLC memory area an address points into.
///
/// Discriminants are the S7 wire area codes.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    /// Inputs (`I`, German `E`)
    Input = 0x81,
    /// Outputs (`Q`, German `A`)
    Output = 0x82,
    /// Merkers / flags (`M`)
    Memory = 0x83,
    /// Data blocks (`DB<n>.`)
    DataBlock = 0x84,
}

impl Area {
    /// Resolve an area letter, accepting both the English and German spelling.
    #[inline]
    pub fn from_letter(c: char) -> Option<Area> {
        match c {
            'I' | 'E' => Some(Area::Input),
            'Q' | 'A' => Some(Area::Output),
            'M' => Some(Area::Memory),
            _ => None,
        }
    }

    /// Canonical prefix used when rendering an address.
    #[inline]
    pub fn letter(self) -> &'static str {
        match self {
            Area::Input => "I",
            Area::Output => "Q",
            Area::Memory => "M",
            Area::DataBlock => "DB",
        }
    }

    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Area {
    type Error = ();
    fn try_from(v: u8) -> std::result::Result<Self, Self::Error> {
        match v {
            0x81 => Ok(Area::Input),
            0x82 => Ok(Area::Output),
            0x83 => Ok(Area::Memory),
            0x84 => Ok(Area::DataBlock),
            _ => Err(()),
        }
    }
}

/// Unit size of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessWidth {
    Bit,
    Byte,
    Word,
    DoubleWord,
}

impl AccessWidth {
    #[inline]
    pub fn from_letter(c: char) -> Option<AccessWidth> {
        match c {
            'X' => Some(AccessWidth::Bit),
            'B' => Some(AccessWidth::Byte),
            'W' => Some(AccessWidth::Word),
            'D' => Some(AccessWidth::DoubleWord),
            _ => None,
        }
    }

    #[inline]
    pub fn letter(self) -> char {
        match self {
            AccessWidth::Bit => 'X',
            AccessWidth::Byte => 'B',
            AccessWidth::Word => 'W',
            AccessWidth::DoubleWord => 'D',
        }
    }

    /// Bytes covered by one unit; a bit still occupies its byte.
    #[inline]
    pub fn size(self) -> u32 {
        match self {
            AccessWidth::Bit | AccessWidth::Byte => 1,
            AccessWidth::Word => 2,
            AccessWidth::DoubleWord => 4,
        }
    }
}

/// Semantic role of a channel. Selects the address grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    #[serde(rename = "chNumber")]
    Number,
    #[serde(rename = "chString")]
    String,
    #[serde(rename = "chSwitch")]
    Switch,
    #[serde(rename = "chContact")]
    Contact,
    #[serde(rename = "chDimmer")]
    Dimmer,
    #[serde(rename = "chColor")]
    Color,
    #[serde(rename = "chRollershutter")]
    Rollershutter,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 7] = [
        ChannelKind::Number,
        ChannelKind::String,
        ChannelKind::Switch,
        ChannelKind::Contact,
        ChannelKind::Dimmer,
        ChannelKind::Color,
        ChannelKind::Rollershutter,
    ];

    /// Channel-type identifier as registered by the binding.
    #[inline]
    pub fn type_id(self) -> &'static str {
        match self {
            ChannelKind::Number => CHANNEL_NUMBER,
            ChannelKind::String => CHANNEL_STRING,
            ChannelKind::Switch => CHANNEL_SWITCH,
            ChannelKind::Contact => CHANNEL_CONTACT,
            ChannelKind::Dimmer => CHANNEL_DIMMER,
            ChannelKind::Color => CHANNEL_COLOR,
            ChannelKind::Rollershutter => CHANNEL_ROLLERSHUTTER,
        }
    }
}

impl Display for ChannelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.type_id())
    }
}

/// Accepts `chNumber` as well as the qualified UID form `simatic:chNumber`.
impl FromStr for ChannelKind {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .strip_prefix(BINDING_ID)
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(s);
        ChannelKind::ALL
            .into_iter()
            .find(|kind| kind.type_id() == id)
            .ok_or_else(|| AddressError::UnsupportedChannelKind(s.to_string()))
    }
}

/// Decoded channel address.
///
/// Either `bit_index` is set (bit addressing, `width` is `None`) or `width`
/// is set (byte/word/double-word addressing, `bit_index` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpec {
    /// Memory area
    pub area: Area,
    /// Data block number when `area == DataBlock`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_number: Option<u16>,
    /// Access width, absent for bit addressing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<AccessWidth>,
    /// Byte offset within the area or data block
    pub offset: u32,
    /// Bit 0..=7 within the byte at `offset`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_index: Option<u8>,
    /// Interpret the word/double word as IEEE-754 float
    #[serde(default)]
    pub is_float: bool,
    /// String buffer length in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_length: Option<u16>,
}

impl AddressSpec {
    #[inline]
    pub fn is_bit(&self) -> bool {
        self.bit_index.is_some()
    }

    /// Number of bytes the address spans in PLC memory.
    pub fn byte_len(&self) -> u32 {
        if let Some(len) = self.array_length {
            return u32::from(len);
        }
        self.width.map_or(1, AccessWidth::size)
    }
}

/// Renders the canonical address text, which parses back to an equal spec.
impl Display for AddressSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.db_number {
            Some(db) => {
                write!(f, "DB{db}.DB")?;
                if self.bit_index.is_some() {
                    f.write_str("X")?;
                }
            }
            None => f.write_str(self.area.letter())?,
        }
        match (self.bit_index, self.width) {
            (Some(bit), _) => write!(f, "{}.{}", self.offset, bit)?,
            (None, Some(width)) => write!(f, "{}{}", width.letter(), self.offset)?,
            (None, None) => write!(f, "{}", self.offset)?,
        }
        if self.is_float {
            f.write_str("F")?;
        }
        if let Some(len) = self.array_length {
            write!(f, "[{len}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_synonyms() {
        assert_eq!(Area::from_letter('I'), Some(Area::Input));
        assert_eq!(Area::from_letter('E'), Some(Area::Input));
        assert_eq!(Area::from_letter('Q'), Some(Area::Output));
        assert_eq!(Area::from_letter('A'), Some(Area::Output));
        assert_eq!(Area::from_letter('M'), Some(Area::Memory));
        assert_eq!(Area::from_letter('D'), None);
        assert_eq!(Area::try_from(Area::DataBlock.code()), Ok(Area::DataBlock));
        assert!(Area::try_from(0x1C).is_err());
    }

    #[test]
    fn test_channel_kind_ids() {
        for kind in ChannelKind::ALL {
            assert_eq!(kind.type_id().parse::<ChannelKind>(), Ok(kind));
            assert_eq!(format!("simatic:{kind}").parse::<ChannelKind>(), Ok(kind));
        }
        assert_eq!(
            "chThermostat".parse::<ChannelKind>(),
            Err(AddressError::UnsupportedChannelKind("chThermostat".into()))
        );
        assert!("other:chNumber".parse::<ChannelKind>().is_err());
        assert!("chnumber".parse::<ChannelKind>().is_err());
    }

    #[test]
    fn test_channel_kind_serde_uses_type_id() {
        let json = serde_json::to_string(&ChannelKind::Rollershutter).unwrap();
        assert_eq!(json, "\"chRollershutter\"");
    }

    #[test]
    fn test_display_canonical_forms() {
        let spec = AddressSpec {
            area: Area::DataBlock,
            db_number: Some(3),
            width: None,
            offset: 12,
            bit_index: Some(5),
            is_float: false,
            array_length: None,
        };
        assert_eq!(spec.to_string(), "DB3.DBX12.5");
        assert_eq!(spec.byte_len(), 1);

        let spec = AddressSpec {
            area: Area::Output,
            db_number: None,
            width: Some(AccessWidth::DoubleWord),
            offset: 8,
            bit_index: None,
            is_float: true,
            array_length: None,
        };
        assert_eq!(spec.to_string(), "QD8F");
        assert_eq!(spec.byte_len(), 4);

        let spec = AddressSpec {
            area: Area::Memory,
            db_number: None,
            width: Some(AccessWidth::Byte),
            offset: 100,
            bit_index: None,
            is_float: false,
            array_length: Some(16),
        };
        assert_eq!(spec.to_string(), "MB100[16]");
        assert_eq!(spec.byte_len(), 16);
    }
}
