/// Preview composer: owns the layout surface, accepts a host stream, and
/// rebuilds the banner + renderer regions when preparation completes.
///
/// Thread contract: `do_preview` returns promptly and hands the read /
/// classify / document-preparation work to a background thread (the embedded
/// engine initializes non-instantaneously). The background thread never
/// touches the surface; it posts a plan, and the owner thread applies it in
/// `pump`. Resize is handled synchronously on the owner thread.

use crate::classifier;
use crate::config::PreviewConfig;
use crate::events::{EventQueue, PreviewEvent, SurfacePlan};
use crate::renderer::{RendererSettings, SandboxedRenderer, ViewportStyle};
use crate::stream;
use crate::surface::PreviewSurface;
use std::io::Read;

pub struct PreviewControl {
    surface: PreviewSurface,
    events: EventQueue,
    generation: u64,
    config: PreviewConfig,
}

impl PreviewControl {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, PreviewConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: PreviewConfig) -> Self {
        Self {
            surface: PreviewSurface::new(width, height),
            events: EventQueue::new(),
            generation: 0,
            config,
        }
    }

    /// Start previewing a new input. Returns before any region is visible;
    /// the composed surface appears once `pump` drains the completion event.
    /// A second call supersedes the first: its surface is discarded wholesale
    /// and a completion from the overwritten request never lands.
    pub fn do_preview(&mut self, input: impl Read + Send + 'static) {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.events.sender();
        let max_size = self.config.max_size;
        let viewport = self.config.viewport_style();
        std::thread::spawn(move || {
            let plan = prepare_surface(input, max_size, &viewport);
            // Send fails only if the control was torn down meanwhile.
            let _ = tx.send(PreviewEvent::SurfaceReady { generation, plan });
        });
    }

    /// Drain completions and apply the current request's plan. Owner thread
    /// only; this is the single place the region tree mutates.
    pub fn pump(&mut self) {
        for event in self.events.try_drain() {
            let PreviewEvent::SurfaceReady { generation, plan } = event;
            if generation != self.generation {
                log::debug!("discarding superseded surface (generation {generation})");
                continue;
            }
            self.apply(plan);
        }
    }

    fn apply(&mut self, plan: SurfacePlan) {
        self.surface.clear();
        if let Some(text) = plan.banner_text {
            self.surface.push_banner(text, self.config.banner_color());
        }
        if let Some(renderer) = plan.renderer {
            self.surface.push_renderer(renderer);
        }
        log::debug!("surface rebuilt with {} region(s)", self.surface.region_count());
    }

    /// Host-originated resize. Propagates to the banner synchronously.
    pub fn on_resize(&mut self, new_width: u32) {
        self.surface.on_resize(new_width);
    }

    pub fn width(&self) -> u32 {
        self.surface.width
    }

    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PreviewConfig) {
        self.config = config;
    }
}

impl Drop for PreviewControl {
    fn drop(&mut self) {
        // Release the embedded renderer with the surface, not at collection time.
        self.surface.clear();
        log::debug!("preview control disposed");
    }
}

/// Background half of `do_preview`: ingest, classify, prepare the sandboxed
/// document. Every failure folds into the banner path; nothing escapes to
/// the host.
fn prepare_surface(input: impl Read, max_size: usize, viewport: &ViewportStyle) -> SurfacePlan {
    let text = match stream::read_svg(input, max_size) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("preview ingestion failed: {e}");
            return SurfacePlan {
                banner_text: Some(format!("Unable to preview this file: {e}.")),
                renderer: None,
            };
        }
    };

    let classification = classifier::classify(&text);
    let mut renderer = SandboxedRenderer::new(RendererSettings::sandboxed());
    renderer.load_svg(&text, viewport);

    let banner_text = classification.flagged().then(|| {
        format!(
            "Some content in this file was blocked from the preview: {}. \
             The file on disk is unchanged.",
            classification.summary()
        )
    });

    SurfacePlan { banner_text, renderer: Some(renderer) }
}
