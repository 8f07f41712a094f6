use super::{
    config::{ChannelAddressConfig, ResolvedChannel},
    error::AddressError,
    validator::AddressValidator,
};
use serde::{Serialize, Serializer};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Outcome of validating one channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ChannelOutcome {
    Accepted(ResolvedChannel),
    Rejected {
        /// Channel id, or `#<index>` when the channel has none
        channel: String,
        #[serde(serialize_with = "serialize_display")]
        error: AddressError,
    },
}

impl ChannelOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ChannelOutcome::Accepted(_))
    }

    pub fn error(&self) -> Option<&AddressError> {
        match self {
            ChannelOutcome::Accepted(_) => None,
            ChannelOutcome::Rejected { error, .. } => Some(error),
        }
    }
}

/// Per-channel outcomes in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub outcomes: Vec<ChannelOutcome>,
}

impl ValidationReport {
    pub fn accepted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected(&self) -> usize {
        self.outcomes.len() - self.accepted()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.outcomes.iter().all(ChannelOutcome::is_accepted)
    }

    pub fn errors(&self) -> impl Iterator<Item = &AddressError> {
        self.outcomes.iter().filter_map(ChannelOutcome::error)
    }
}

/// Validate every channel of a device independently.
///
/// A rejected channel is logged and recorded; it does not stop validation
/// of the remaining channels.
pub fn validate_channels(channels: &[ChannelAddressConfig]) -> ValidationReport {
    let validator = AddressValidator::new();
    let outcomes = channels
        .iter()
        .enumerate()
        .map(|(index, config)| match validator.resolve_config(config) {
            Ok(resolved) => {
                debug!(channel = %resolved.channel_id, kind = %resolved.kind, "channel addresses accepted");
                ChannelOutcome::Accepted(resolved)
            }
            Err(error) => {
                let channel = config
                    .channel_id
                    .clone()
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| format!("#{index}"));
                warn!(channel = %channel, config = %config, error = %error, "channel addresses rejected");
                ChannelOutcome::Rejected { channel, error }
            }
        })
        .collect::<Vec<_>>();

    let report = ValidationReport { outcomes };
    info!(
        total = channels.len(),
        accepted = report.accepted(),
        rejected = report.rejected(),
        "channel validation finished"
    );
    report
}

fn serialize_display<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
