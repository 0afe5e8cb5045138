//! Editor configuration.
//!
//! Loaded from YAML; every field has a default so a partial file only
//! overrides what it names:
//!
//! ```yaml
//! defaults: { p0: 75, p1: 50, p2: 90, p3: 25 }
//! sampling: { step: 0.5 }
//! style:
//!   handle: { radius: 2.0, idle: [0, 0, 0], active: [255, 0, 0] }
//! base_location: "http://localhost/"
//! ```

use std::path::Path;

use ce_core::{PointRole, Real, ensure_finite, ensure_in_domain};
use ce_curve::SamplingConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, EditorResult};
use crate::surface::{MarkerStyle, Rgb};

/// Values seeding the control points when the incoming link lacks them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialValues {
    pub p0: Real,
    pub p1: Real,
    pub p2: Real,
    pub p3: Real,
}

impl Default for InitialValues {
    fn default() -> Self {
        let [p0, p1, p2, p3] = PointRole::ALL.map(PointRole::default_value);
        Self { p0, p1, p2, p3 }
    }
}

impl InitialValues {
    pub fn as_array(&self) -> [Real; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

/// Control-point handle appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleStyle {
    /// Radius in view-box units.
    pub radius: Real,
    pub idle: Rgb,
    pub active: Rgb,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            radius: 2.0,
            idle: Rgb::BLACK,
            active: Rgb::RED,
        }
    }
}

/// Appearance of the sampled curve markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveStyle {
    pub radius: Real,
    pub color: Rgb,
    pub stroke_width: Real,
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self {
            radius: 0.1,
            color: Rgb::GREEN,
            stroke_width: 0.3,
        }
    }
}

impl CurveStyle {
    pub fn marker_style(&self) -> MarkerStyle {
        MarkerStyle {
            fill: self.color,
            stroke: self.color,
            stroke_width: self.stroke_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub handle: HandleStyle,
    pub curve: CurveStyle,
}

/// Complete editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub defaults: InitialValues,
    pub sampling: SamplingConfig,
    pub style: StyleConfig,
    /// Base location captured links are built on.
    pub base_location: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            defaults: InitialValues::default(),
            sampling: SamplingConfig::default(),
            style: StyleConfig::default(),
            base_location: "http://localhost/".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> EditorResult<()> {
        for (role, value) in PointRole::ALL.iter().zip(self.defaults.as_array()) {
            ensure_in_domain(value, role.name())?;
        }
        self.sampling.validate()?;

        let handle = &self.style.handle;
        let curve = &self.style.curve;
        for (value, what) in [
            (handle.radius, "style.handle.radius"),
            (curve.radius, "style.curve.radius"),
            (curve.stroke_width, "style.curve.stroke_width"),
        ] {
            if ensure_finite(value, what)? < 0.0 {
                return Err(EditorError::InvalidConfig {
                    what: format!("{what} must not be negative"),
                });
            }
        }

        url::Url::parse(&self.base_location).map_err(|err| EditorError::InvalidConfig {
            what: format!("base_location '{}': {err}", self.base_location),
        })?;
        Ok(())
    }

    pub fn from_yaml_str(content: &str) -> EditorResult<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> EditorResult<String> {
        self.validate()?;
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load_yaml(path: &Path) -> EditorResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save_yaml(&self, path: &Path) -> EditorResult<()> {
        let content = self.to_yaml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EditorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.defaults.as_array(), [75.0, 50.0, 90.0, 25.0]);
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let config = EditorConfig::from_yaml_str(
            "defaults:\n  p2: 10\nsampling:\n  step: 1.0\n",
        )
        .unwrap();
        assert_eq!(config.defaults.as_array(), [75.0, 50.0, 10.0, 25.0]);
        assert_eq!(config.sampling.step, 1.0);
        assert_eq!(config.style, StyleConfig::default());
    }

    #[test]
    fn colours_are_rgb_triples() {
        let config =
            EditorConfig::from_yaml_str("style:\n  handle:\n    active: [0, 0, 255]\n").unwrap();
        assert_eq!(config.style.handle.active, Rgb(0, 0, 255));
    }

    #[test]
    fn out_of_domain_default_is_rejected() {
        let err = EditorConfig::from_yaml_str("defaults:\n  p0: 140\n").unwrap_err();
        assert!(matches!(err, EditorError::Core(_)));
    }

    #[test]
    fn bad_sampling_is_rejected() {
        let err = EditorConfig::from_yaml_str("sampling:\n  step: 0\n").unwrap_err();
        assert!(matches!(err, EditorError::Curve(_)));
    }

    #[test]
    fn bad_base_location_is_rejected() {
        let err = EditorConfig::from_yaml_str("base_location: nowhere\n").unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig { .. }));
    }

    #[test]
    fn negative_radius_is_rejected() {
        let err =
            EditorConfig::from_yaml_str("style:\n  curve:\n    radius: -1\n").unwrap_err();
        assert!(matches!(err, EditorError::InvalidConfig { .. }));
    }
}
