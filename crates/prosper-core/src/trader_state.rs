//! Versioned state carried between ticks.
//!
//! The harness hands back whatever text we returned on the previous tick.
//! Decoding is strict: an absent or empty blob yields the default state,
//! but a blob that is present and does not match the schema is an error.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Current schema version written by `encode`.
pub const TRADER_STATE_VERSION: u32 = 1;

/// State persisted across ticks. The strategy keeps no fields yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraderState {
    /// Blobs without a version (`{}`) are treated as the current version.
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    TRADER_STATE_VERSION
}

impl Default for TraderState {
    fn default() -> Self {
        Self {
            version: TRADER_STATE_VERSION,
        }
    }
}

impl TraderState {
    /// Decode the blob received from the harness.
    pub fn decode(text: Option<&str>) -> Result<Self> {
        let text = match text.map(str::trim) {
            None | Some("") => return Ok(Self::default()),
            Some(t) => t,
        };

        let state: Self = serde_json::from_str(text).map_err(CoreError::TraderStateDecode)?;
        if state.version != TRADER_STATE_VERSION {
            return Err(CoreError::UnsupportedTraderStateVersion {
                found: state.version,
                expected: TRADER_STATE_VERSION,
            });
        }
        Ok(state)
    }

    /// Encode for the harness to hand back next tick.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(CoreError::TraderStateEncode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_is_default() {
        assert_eq!(TraderState::decode(None).unwrap(), TraderState::default());
        assert_eq!(TraderState::decode(Some("")).unwrap(), TraderState::default());
        assert_eq!(TraderState::decode(Some("  ")).unwrap(), TraderState::default());
    }

    #[test]
    fn test_unversioned_object_is_accepted() {
        assert_eq!(TraderState::decode(Some("{}")).unwrap(), TraderState::default());
    }

    #[test]
    fn test_round_trip() {
        let state = TraderState::default();
        let text = state.encode().unwrap();
        assert_eq!(text, r#"{"version":1}"#);
        assert_eq!(TraderState::decode(Some(&text)).unwrap(), state);
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(matches!(
            TraderState::decode(Some("not json")),
            Err(CoreError::TraderStateDecode(_))
        ));
        assert!(matches!(
            TraderState::decode(Some(r#"{"version":1,"kelp_ema":2031.5}"#)),
            Err(CoreError::TraderStateDecode(_))
        ));
    }

    #[test]
    fn test_future_version_is_error() {
        let err = TraderState::decode(Some(r#"{"version":7}"#)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedTraderStateVersion {
                found: 7,
                expected: 1
            }
        ));
    }
}
