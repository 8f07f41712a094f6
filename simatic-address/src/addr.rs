use super::{
    error::{AddressError, Result},
    grammar::grammar_for,
    types::{AccessWidth, AddressSpec, Area, ChannelKind},
};
use regex::Captures;
use std::str::FromStr;
use tracing::trace;

/// Match `input` against the grammar of `kind` and decode it.
///
/// Digit runs that match a form but do not fit the decoded field (offset
/// `u32`, data block `u16`, string length `u16`) and zero-length strings are
/// rejected the same way as a non-matching address.
pub(crate) fn parse_address(kind: ChannelKind, input: &str) -> Result<AddressSpec> {
    let grammar = grammar_for(kind);
    let spec = grammar.captures(input).and_then(|caps| decode(&caps));
    match spec {
        Some(spec) => {
            trace!(grammar = grammar.name(), address = input, spec = ?spec, "address decoded");
            Ok(spec)
        }
        None => Err(AddressError::AddressGrammarMismatch {
            kind,
            address: input.to_string(),
            accepted: grammar.accepted(),
        }),
    }
}

fn decode(caps: &Captures<'_>) -> Option<AddressSpec> {
    let db_number = field::<u16>(caps, "db")?;
    let area = match db_number {
        Some(_) => Area::DataBlock,
        None => letter(caps, "area").and_then(Area::from_letter)?,
    };
    let offset = field::<u32>(caps, "offset")??;
    let bit_index = field::<u8>(caps, "bit")?;
    let width = match bit_index {
        Some(_) => None,
        None => Some(letter(caps, "width").and_then(AccessWidth::from_letter)?),
    };
    let array_length = match field::<u16>(caps, "len")? {
        Some(0) => return None,
        len => len,
    };
    Some(AddressSpec {
        area,
        db_number,
        width,
        offset,
        bit_index,
        is_float: caps.name("float").is_some(),
        array_length,
    })
}

/// Parse an optional numeric group.
///
/// Outer `None` means the group matched but does not fit `T`.
#[inline]
fn field<T: FromStr>(caps: &Captures<'_>, name: &str) -> Option<Option<T>> {
    match caps.name(name) {
        Some(m) => m.as_str().parse::<T>().ok().map(Some),
        None => Some(None),
    }
}

#[inline]
fn letter(caps: &Captures<'_>, name: &str) -> Option<char> {
    caps.name(name).and_then(|m| m.as_str().chars().next())
}
