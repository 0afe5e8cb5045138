//! Curve redraws.

use std::cell::Cell;

use ce_core::Real;
use ce_curve::{SamplingConfig, sample_curve};

use crate::config::CurveStyle;
use crate::surface::{Marker, SharedSurface};

/// Tag shared by every curve sample marker.
pub const CURVE_TAG: &str = "curve";

/// Samples the curve and materializes it as markers on the surface.
///
/// Every redraw replaces the whole previous sample set: old markers are
/// removed, then the new ones are added, within one surface borrow.
pub struct CurveRenderer {
    surface: SharedSurface,
    sampling: SamplingConfig,
    style: CurveStyle,
    redraws: Cell<u64>,
}

impl CurveRenderer {
    pub fn new(surface: SharedSurface, sampling: SamplingConfig, style: CurveStyle) -> Self {
        Self {
            surface,
            sampling,
            style,
            redraws: Cell::new(0),
        }
    }

    pub fn draw(&self, values: [Real; 4]) {
        let samples = sample_curve(values, &self.sampling);
        let marker_style = self.style.marker_style();

        let mut surface = self.surface.borrow_mut();
        let removed = surface.remove_tagged(CURVE_TAG);
        for center in &samples {
            surface.add_marker(Marker {
                center: *center,
                radius: self.style.radius,
                style: marker_style,
                tag: CURVE_TAG,
            });
        }
        drop(surface);

        self.redraws.set(self.redraws.get() + 1);
        tracing::debug!(?values, removed, added = samples.len(), "curve redrawn");
    }

    /// Number of redraws since creation.
    pub fn redraw_count(&self) -> u64 {
        self.redraws.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Rgb, Scene};
    use ce_core::Bounds;

    #[test]
    fn redraw_replaces_previous_samples() {
        let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
        let renderer =
            CurveRenderer::new(scene.clone(), SamplingConfig::default(), CurveStyle::default());

        renderer.draw([75.0, 50.0, 90.0, 25.0]);
        assert_eq!(scene.borrow().markers_tagged(CURVE_TAG).count(), 200);

        renderer.draw([10.0, 20.0, 30.0, 40.0]);
        let scene = scene.borrow();
        assert_eq!(scene.markers_tagged(CURVE_TAG).count(), 200);
        assert_eq!(renderer.redraw_count(), 2);

        let first = &scene.markers()[0];
        assert!((first.center.y - 20.0).abs() < 1e-9);
        assert_eq!(first.radius, 0.1);
        assert_eq!(first.style.fill, Rgb::GREEN);
        assert_eq!(first.style.stroke_width, 0.3);
    }

    #[test]
    fn markers_match_sampler_output() {
        let scene = Scene::new(Bounds::new(0.0, 0.0, 100.0, 100.0)).shared();
        let sampling = SamplingConfig {
            step: 10.0,
            ..SamplingConfig::default()
        };
        let renderer = CurveRenderer::new(scene.clone(), sampling, CurveStyle::default());
        renderer.draw([0.0, 100.0, 0.0, 100.0]);

        let centers: Vec<_> = scene.borrow().markers().iter().map(|m| m.center).collect();
        assert_eq!(centers, sample_curve([0.0, 100.0, 0.0, 100.0], &sampling));
    }
}
