//! Tunable bounds for room sampling and the placement attempt budget.

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};

/// Smallest side that still leaves a floor tile inside a wall perimeter.
const SMALLEST_ROOM_SIDE: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub min_room_side: u32,
    pub max_room_side: u32,
    pub min_room_count: u32,
    pub max_room_count: u32,
    /// Candidate rooms sampled before placement gives up.
    pub max_placement_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_room_side: 4,
            max_room_side: 20,
            min_room_count: 5,
            max_room_count: 10,
            max_placement_attempts: 50_000,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_room_side < SMALLEST_ROOM_SIDE {
            return Err(invalid(format!(
                "min_room_side {} is below {SMALLEST_ROOM_SIDE}",
                self.min_room_side
            )));
        }
        if self.min_room_side > self.max_room_side {
            return Err(invalid(format!(
                "min_room_side {} exceeds max_room_side {}",
                self.min_room_side, self.max_room_side
            )));
        }
        if self.min_room_count == 0 {
            return Err(invalid("min_room_count must be at least 1".to_string()));
        }
        if self.min_room_count > self.max_room_count {
            return Err(invalid(format!(
                "min_room_count {} exceeds max_room_count {}",
                self.min_room_count, self.max_room_count
            )));
        }
        if self.max_room_side > i32::MAX as u32 || self.max_room_count > i32::MAX as u32 {
            return Err(invalid("bounds must fit in a signed 32-bit draw".to_string()));
        }
        if self.max_placement_attempts == 0 {
            return Err(invalid("max_placement_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> GenerationError {
    GenerationError::InvalidConfig { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_side_bounds_are_rejected() {
        let config = GeneratorConfig { min_room_side: 9, max_room_side: 6, ..Default::default() };
        assert!(matches!(config.validate(), Err(GenerationError::InvalidConfig { .. })));
    }

    #[test]
    fn rooms_without_interior_are_rejected() {
        let config = GeneratorConfig { min_room_side: 2, ..Default::default() };
        assert!(matches!(config.validate(), Err(GenerationError::InvalidConfig { .. })));
    }

    #[test]
    fn zero_rooms_and_zero_attempts_are_rejected() {
        let no_rooms = GeneratorConfig { min_room_count: 0, ..Default::default() };
        assert!(no_rooms.validate().is_err());

        let no_attempts = GeneratorConfig { max_placement_attempts: 0, ..Default::default() };
        assert!(no_attempts.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"max_room_count": 6}"#).expect("deserialize");
        assert_eq!(config.max_room_count, 6);
        assert_eq!(config.min_room_side, 4);
        assert_eq!(config.max_placement_attempts, 50_000);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed = serde_json::from_str::<GeneratorConfig>(r#"{"corridor_width": 2}"#);
        assert!(parsed.is_err());
    }
}
