//! Runtime configuration for the field.
//!
//! Defaults come from `constants.rs`. Hosts may override individual values via
//! a string lookup; the web front end feeds the canvas element's `data-*`
//! attributes (`data-star-count`, `data-star-size`, `data-star-color`,
//! `data-max-fps`, `data-seed`).

use crate::constants::{MAX_STAR_COUNT, STAR_COLOR, STAR_COUNT, STAR_SIZE, TARGET_FPS};
use crate::error::ConfigError;
use std::str::FromStr;

pub const KEY_STAR_COUNT: &str = "star-count";
pub const KEY_STAR_SIZE: &str = "star-size";
pub const KEY_STAR_COLOR: &str = "star-color";
pub const KEY_MAX_FPS: &str = "max-fps";
pub const KEY_SEED: &str = "seed";

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub star_count: usize,
    pub star_size: f32,
    pub color: String,
    pub max_fps: f32,
    /// Fixed RNG seed; `None` samples from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            star_size: STAR_SIZE,
            color: STAR_COLOR.to_string(),
            max_fps: TARGET_FPS,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Build a config from defaults plus any overrides `lookup` returns.
    /// Missing keys keep their default; present keys must be valid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(KEY_STAR_COUNT) {
            let n: usize = parse(KEY_STAR_COUNT, &raw)?;
            if n == 0 || n > MAX_STAR_COUNT {
                return Err(out_of_range(KEY_STAR_COUNT, raw));
            }
            cfg.star_count = n;
        }
        if let Some(raw) = lookup(KEY_STAR_SIZE) {
            let s: f32 = parse(KEY_STAR_SIZE, &raw)?;
            if !s.is_finite() || s <= 0.0 {
                return Err(out_of_range(KEY_STAR_SIZE, raw));
            }
            cfg.star_size = s;
        }
        if let Some(raw) = lookup(KEY_STAR_COLOR) {
            let c = raw.trim();
            if c.is_empty() {
                return Err(ConfigError::Invalid {
                    key: KEY_STAR_COLOR,
                    value: raw,
                });
            }
            cfg.color = c.to_string();
        }
        if let Some(raw) = lookup(KEY_MAX_FPS) {
            let fps: f32 = parse(KEY_MAX_FPS, &raw)?;
            if !fps.is_finite() || fps <= 0.0 {
                return Err(out_of_range(KEY_MAX_FPS, raw));
            }
            cfg.max_fps = fps;
        }
        if let Some(raw) = lookup(KEY_SEED) {
            cfg.seed = Some(parse(KEY_SEED, &raw)?);
        }
        Ok(cfg)
    }

    /// Minimum spacing between executed frames, in milliseconds.
    #[inline]
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.max_fps as f64
    }
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn out_of_range(key: &'static str, value: String) -> ConfigError {
    ConfigError::OutOfRange { key, value }
}
