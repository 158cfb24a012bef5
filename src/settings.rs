pub mod persistence;

pub use persistence::SettingsManager;

use serde::{Deserialize, Serialize};

/// The two persisted scope flags.
///
/// The on-disk format stores each flag as a JSON integer, non-zero
/// meaning set. A missing or malformed field
/// falls back to `false` on its own; it never fails the whole load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeState {
    #[serde(with = "int_flag")]
    pub lissajous: bool,
    #[serde(with = "int_flag")]
    pub external: bool,
}

mod int_flag {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(i64::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        // Accept any value; anything that is not a non-zero integer
        // reads as false.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_i64().unwrap_or(0) != 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_encode_as_integers() {
        let state = ScopeState {
            lissajous: true,
            external: false,
        };
        let json: serde_json::Value = serde_json::to_value(state).unwrap();
        assert_eq!(json["lissajous"], 1);
        assert_eq!(json["external"], 0);
    }

    #[test]
    fn missing_fields_default_to_false() {
        let state: ScopeState = serde_json::from_str(r#"{"lissajous": 1}"#).unwrap();
        assert!(state.lissajous);
        assert!(!state.external);

        let state: ScopeState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, ScopeState::default());
    }

    #[test]
    fn malformed_fields_default_to_false() {
        let state: ScopeState =
            serde_json::from_str(r#"{"lissajous": "yes", "external": 2}"#).unwrap();
        assert!(!state.lissajous);
        assert!(state.external);
    }
}
