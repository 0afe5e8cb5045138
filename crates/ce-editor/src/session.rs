//! Editor startup and link capture.

use std::rc::Rc;

use ce_core::{PointRole, Real};
use ce_link::{decode, encode};
use ce_signals::{Observable, Subscription, combine_latest};
use url::Url;

use crate::binding::bind_handle;
use crate::config::EditorConfig;
use crate::controller::ControlPointController;
use crate::document::Document;
use crate::error::EditorResult;
use crate::renderer::CurveRenderer;
use crate::surface::SharedSurface;

/// A running editor: four controllers, their handle bindings and the
/// curve subscription over all four value streams.
///
/// Dropping the session tears every subscription down.
pub struct EditorSession {
    config: EditorConfig,
    controllers: [ControlPointController; 4],
    renderer: Rc<CurveRenderer>,
    _bindings: Subscription,
    _curve: Subscription,
}

impl EditorSession {
    /// Startup entry point. Seeds the control points from `link` (falling
    /// back to the configured defaults for absent fields), wires handle
    /// bindings, then subscribes the renderer to the combined values, which
    /// draws the initial curve once.
    pub fn start(
        config: EditorConfig,
        link: Option<&str>,
        surface: SharedSurface,
        document: Document,
    ) -> EditorResult<Self> {
        config.validate()?;

        let decoded = link.map(decode).unwrap_or_default();
        let initial = decoded.or(config.defaults.as_array());

        let controllers = PointRole::ALL.map(|role| {
            ControlPointController::new(
                role,
                initial[role.index()],
                document.clone(),
                Rc::clone(&surface),
            )
        });

        let bindings = Subscription::merge(
            controllers
                .iter()
                .map(|c| bind_handle(c, Rc::clone(&surface), config.style.handle))
                .collect(),
        );

        let renderer = Rc::new(CurveRenderer::new(
            Rc::clone(&surface),
            config.sampling,
            config.style.curve,
        ));
        let combined = combine_latest(controllers.each_ref().map(|c| c.value_stream().source()));
        let curve = {
            let renderer = Rc::clone(&renderer);
            combined.subscribe(move |values: &[Real; 4]| renderer.draw(*values))
        };

        tracing::info!(values = ?controllers.each_ref().map(|c| c.value()), "ready");

        Ok(Self {
            config,
            controllers,
            renderer,
            _bindings: bindings,
            _curve: curve,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn controller(&self, role: PointRole) -> &ControlPointController {
        &self.controllers[role.index()]
    }

    pub fn controllers(&self) -> &[ControlPointController; 4] {
        &self.controllers
    }

    pub fn renderer(&self) -> &CurveRenderer {
        &self.renderer
    }

    /// Current values, read through each point's value stream.
    pub fn values(&self) -> [Real; 4] {
        self.controllers.each_ref().map(|c| c.value_stream().current())
    }

    /// Encode the current values into a shareable link.
    pub fn capture_link(&self) -> EditorResult<Url> {
        let url = encode(&self.config.base_location, self.values())?;
        tracing::info!(%url, "generated");
        Ok(url)
    }
}
