//! Starfield configuration.
//!
//! All values are plain numbers with defaults matching the stock look: a
//! sparse field of faint white stars that brighten and double in size when the
//! pointer comes within a tenth of the viewport's short side.

use crate::constants::*;
use crate::tween::Ease;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("density ratio must be within [0, 4], got {0}")]
    Density(f32),
    #[error("size limit must be >= 1, got {0}")]
    SizeLimit(f32),
    #[error("default alpha must be within [0.1, 1], got {0}")]
    DefaultAlpha(f32),
    #[error("scale limit must be > 0, got {0}")]
    ScaleLimit(f32),
    #[error("proximity ratio must be > 0, got {0}")]
    ProximityRatio(f32),
    #[error("frame rate must be > 0, got {0}")]
    Fps(f32),
    #[error("tween duration must be >= 0, got {0}")]
    TweenDuration(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarfieldConfig {
    /// Stars per pixel of the viewport's shorter side.
    pub density_ratio: f32,
    /// Largest star diameter in pixels.
    pub size_limit: f32,
    /// Resting opacity, also the upper bound of the initial opacity.
    pub default_alpha: f32,
    /// Scale applied to a star directly under the pointer.
    pub scale_limit: f32,
    /// Influence radius as a fraction of the viewport's shorter side.
    pub proximity_ratio: f32,
    pub fps: f32,
    pub tween_duration_sec: f32,
    pub ease: Ease,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            density_ratio: DEFAULT_DENSITY_RATIO,
            size_limit: DEFAULT_SIZE_LIMIT,
            default_alpha: DEFAULT_ALPHA,
            scale_limit: DEFAULT_SCALE_LIMIT,
            proximity_ratio: DEFAULT_PROXIMITY_RATIO,
            fps: DEFAULT_FPS,
            tween_duration_sec: DEFAULT_TWEEN_DURATION_SEC,
            ease: Ease::default(),
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_DENSITY_RATIO).contains(&self.density_ratio) {
            return Err(ConfigError::Density(self.density_ratio));
        }
        if !(self.size_limit.is_finite() && self.size_limit >= MIN_SIZE) {
            return Err(ConfigError::SizeLimit(self.size_limit));
        }
        if !(MIN_ALPHA..=1.0).contains(&self.default_alpha) {
            return Err(ConfigError::DefaultAlpha(self.default_alpha));
        }
        if !(self.scale_limit.is_finite() && self.scale_limit > 0.0) {
            return Err(ConfigError::ScaleLimit(self.scale_limit));
        }
        if !(self.proximity_ratio.is_finite() && self.proximity_ratio > 0.0) {
            return Err(ConfigError::ProximityRatio(self.proximity_ratio));
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::Fps(self.fps));
        }
        if !(self.tween_duration_sec.is_finite() && self.tween_duration_sec >= 0.0) {
            return Err(ConfigError::TweenDuration(self.tween_duration_sec));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(StarfieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_proximity() {
        let cfg = StarfieldConfig {
            proximity_ratio: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ProximityRatio(0.0)));
    }

    #[test]
    fn rejects_alpha_below_floor() {
        let cfg = StarfieldConfig {
            default_alpha: 0.05,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::DefaultAlpha(_))));
    }

    #[test]
    fn rejects_nan_density() {
        let cfg = StarfieldConfig {
            density_ratio: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Density(_))));
    }

    #[test]
    fn rejects_huge_density() {
        let cfg = StarfieldConfig {
            density_ratio: 1e30,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Density(1e30)));
        let at_cap = StarfieldConfig {
            density_ratio: MAX_DENSITY_RATIO,
            ..Default::default()
        };
        assert_eq!(at_cap.validate(), Ok(()));
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = ConfigError::SizeLimit(0.5).to_string();
        assert!(msg.contains("0.5"), "{msg}");
    }
}
