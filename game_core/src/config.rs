use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Errors raised while loading or validating a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub human_paddle_speed: f32,
    pub cpu_paddle_speed: f32,
    pub ball_speed: f32,
    pub win_score: u8,
    /// Fixed logic ticks per second
    pub tick_rate: f64,
    /// Upper bound on catch-up ticks per rendered frame (None = unbounded)
    pub max_ticks_per_frame: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_paddle_speed: Params::HUMAN_PADDLE_SPEED,
            cpu_paddle_speed: Params::CPU_PADDLE_SPEED,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            max_ticks_per_frame: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let speeds = [
            ("human_paddle_speed", self.human_paddle_speed),
            ("cpu_paddle_speed", self.cpu_paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (field, speed) in speeds {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive finite number",
                });
            }
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate",
                reason: "must be a positive finite number",
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "must be at least 1",
            });
        }
        if self.max_ticks_per_frame == Some(0) {
            return Err(ConfigError::Invalid {
                field: "max_ticks_per_frame",
                reason: "must be at least 1 when set",
            });
        }
        Ok(())
    }

    /// Duration of one logic tick in milliseconds
    pub fn tick_ms(&self) -> f64 {
        1000.0 / self.tick_rate
    }

    /// Duration of one logic tick in seconds
    pub fn tick_secs(&self) -> f32 {
        (1.0 / self.tick_rate) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_params() {
        let config = Config::new();
        assert_eq!(config.win_score, 11);
        assert_eq!(config.human_paddle_speed, 300.0);
        assert_eq!(config.cpu_paddle_speed, 150.0);
        assert_eq!(config.ball_speed, 200.0);
        assert_eq!(config.max_ticks_per_frame, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tick_duration() {
        let config = Config::new();
        assert!((config.tick_ms() - 10.0).abs() < 1e-9);
        assert!((config.tick_secs() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "win_score": 5, "max_ticks_per_frame": 8 }"#)
            .expect("partial config should parse");
        assert_eq!(config.win_score, 5);
        assert_eq!(config.max_ticks_per_frame, Some(8));
        assert_eq!(config.ball_speed, Params::BALL_SPEED);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json("{ win_score: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Config::from_json(r#"{ "ball_speed": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "ball_speed",
                ..
            }
        ));

        let zero_win = Config {
            win_score: 0,
            ..Config::default()
        };
        assert!(zero_win.validate().is_err());

        let zero_cap = Config {
            max_ticks_per_frame: Some(0),
            ..Config::default()
        };
        assert!(zero_cap.validate().is_err());

        let bad_rate = Config {
            tick_rate: 0.0,
            ..Config::default()
        };
        assert!(bad_rate.validate().is_err());
    }
}
