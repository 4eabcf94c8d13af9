/// Declarative layout tree for the composed preview: an ordered list of
/// regions with explicit dock policy, interpreted by whatever host UI layer
/// embeds the control. At most two regions exist: an optional warning banner
/// docked to the top edge, and a renderer filling the remaining space.

use crate::renderer::SandboxedRenderer;
use crate::theme::Color;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dock {
    Top,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollBars {
    None,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BorderStyle {
    None,
    FixedSingle,
}

/// Pixel height of one banner text line.
const BANNER_LINE_HEIGHT: u32 = 20;

/// Warning banner: read-only multi-line text docked across the top, painted
/// over the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    pub text: String,
    pub dock: Dock,
    pub back_color: Color,
    pub multiline: bool,
    pub read_only: bool,
    pub scroll_bars: ScrollBars,
    pub border_style: BorderStyle,
    pub width: u32,
    pub height: u32,
}

impl Banner {
    /// Content-sized height, full client width.
    pub fn new(text: impl Into<String>, width: u32, back_color: Color) -> Self {
        let text = text.into();
        let lines = text.lines().count().max(1) as u32;
        Self {
            text,
            dock: Dock::Top,
            back_color,
            multiline: true,
            read_only: true,
            scroll_bars: ScrollBars::None,
            border_style: BorderStyle::None,
            width,
            height: lines * BANNER_LINE_HEIGHT,
        }
    }
}

/// The embedded rendering surface, filling whatever the banner leaves.
#[derive(Debug, Serialize)]
pub struct RendererRegion {
    pub dock: Dock,
    pub renderer: SandboxedRenderer,
}

impl RendererRegion {
    pub fn new(renderer: SandboxedRenderer) -> Self {
        Self { dock: Dock::Fill, renderer }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind")]
pub enum Region {
    Banner(Banner),
    Renderer(RendererRegion),
}

/// The composed visual state. Populated once per preview request; a new
/// request clears and rebuilds it wholesale, never patches.
#[derive(Debug, Serialize)]
pub struct PreviewSurface {
    regions: Vec<Region>,
    pub width: u32,
    pub height: u32,
}

impl PreviewSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { regions: Vec::new(), width, height }
    }

    /// Drop every region. Releases any renderer the surface held.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Insert the banner. Must be called before `push_renderer` so the banner
    /// lands at index 0 and overlays in paint order.
    pub fn push_banner(&mut self, text: impl Into<String>, back_color: Color) {
        self.regions.push(Region::Banner(Banner::new(text, self.width, back_color)));
    }

    pub fn push_renderer(&mut self, renderer: SandboxedRenderer) {
        self.regions.push(Region::Renderer(RendererRegion::new(renderer)));
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.regions.iter().find_map(|r| match r {
            Region::Banner(b) => Some(b),
            _ => None,
        })
    }

    pub fn renderer(&self) -> Option<&RendererRegion> {
        self.regions.iter().find_map(|r| match r {
            Region::Renderer(r) => Some(r),
            _ => None,
        })
    }

    /// Host-originated resize. Banners track the client width exactly, on
    /// every event; the renderer's fill dock needs no bookkeeping.
    pub fn on_resize(&mut self, new_width: u32) {
        self.width = new_width;
        for region in &mut self.regions {
            if let Region::Banner(b) = region {
                b.width = new_width;
            }
        }
    }
}
