use log::warn;

/// Environment variable overriding the board side length
pub const BOARD_SIZE_VAR: &str = "LIFE_BOARD_SIZE";
/// Environment variable overriding generations per second
pub const SPEED_VAR: &str = "LIFE_SPEED";

/// Playback settings for the demo
#[derive(Clone, Debug, PartialEq)]
pub struct PlayConfig {
    /// Side length of the board in cells
    pub board_size: usize,
    /// Generations per second while running
    pub updates_per_second: f32,
    /// On-screen size of a cell in pixels
    pub cell_size: f32,
    /// Fraction of cells alive after a randomize
    pub random_density: f64,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            board_size: 64,
            updates_per_second: 10.0,
            cell_size: 10.0,
            random_density: 0.3,
        }
    }
}

impl PlayConfig {
    /// Defaults with overrides read from the process environment
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`; unparsable values are logged and skipped
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(BOARD_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => self.board_size = size,
                _ => warn!("Ignoring {BOARD_SIZE_VAR}={raw:?}: expected a positive integer"),
            }
        }
        if let Some(raw) = lookup(SPEED_VAR) {
            match raw.trim().parse::<f32>() {
                Ok(speed) if speed.is_finite() && speed > 0.0 => {
                    self.updates_per_second = speed.clamp(MIN_SPEED, MAX_SPEED);
                }
                _ => warn!("Ignoring {SPEED_VAR}={raw:?}: expected a positive number"),
            }
        }
        self
    }
}

/// Slowest playback speed in generations per second
pub const MIN_SPEED: f32 = 1.0;
/// Fastest playback speed in generations per second
pub const MAX_SPEED: f32 = 60.0;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = PlayConfig::default().with_overrides(lookup(&[]));
        assert_eq!(config, PlayConfig::default());
    }

    #[test]
    fn test_overrides_applied() {
        let config = PlayConfig::default()
            .with_overrides(lookup(&[(BOARD_SIZE_VAR, "128"), (SPEED_VAR, "25")]));
        assert_eq!(config.board_size, 128);
        assert_eq!(config.updates_per_second, 25.0);
    }

    #[test]
    fn test_speed_clamped() {
        let config = PlayConfig::default().with_overrides(lookup(&[(SPEED_VAR, "500")]));
        assert_eq!(config.updates_per_second, MAX_SPEED);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = PlayConfig::default()
            .with_overrides(lookup(&[(BOARD_SIZE_VAR, "0"), (SPEED_VAR, "fast")]));
        assert_eq!(config, PlayConfig::default());
    }
}
