/// Sandboxed embedded renderer: models the script-disabled, network-isolated
/// surface the SVG is shown through. Content is always loaded inline as a
/// complete document, never by URL navigation, so nothing can be resolved
/// remotely even before the policy kicks in.

use crate::theme::{self, Color};
use serde::Serialize;

/// Engine configuration. The no-script / no-network guarantee lives here, at
/// the surface level, independent of what the classifier found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RendererSettings {
    pub script_enabled: bool,
    pub external_content_enabled: bool,
    pub default_dialogs_enabled: bool,
    pub context_menu_enabled: bool,
}

impl RendererSettings {
    /// Everything off. The composer never loosens these.
    pub fn sandboxed() -> Self {
        Self {
            script_enabled: false,
            external_content_enabled: false,
            default_dialogs_enabled: false,
            context_menu_enabled: false,
        }
    }
}

/// Viewport styling for the wrapped document.
#[derive(Debug, Clone, Copy)]
pub struct ViewportStyle {
    pub background: Color,
    pub checkered: bool,
}

impl Default for ViewportStyle {
    fn default() -> Self {
        Self { background: theme::WHITE, checkered: false }
    }
}

#[derive(Debug, Serialize)]
pub struct SandboxedRenderer {
    pub settings: RendererSettings,
    #[serde(skip)]
    document: Option<String>,
}

impl SandboxedRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings, document: None }
    }

    /// Wrap the SVG text into a self-contained document and load it.
    pub fn load_svg(&mut self, svg: &str, viewport: &ViewportStyle) {
        self.document = Some(wrap_svg_document(svg, viewport));
        log::debug!("renderer loaded {} byte document", svg.len());
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn loaded(&self) -> bool {
        self.document.is_some()
    }
}

impl Drop for SandboxedRenderer {
    fn drop(&mut self) {
        log::debug!("releasing embedded renderer");
    }
}

/// Build the document shown by the renderer: the SVG centered and scaled to
/// fit, over the configured viewport background, under a Content-Security-
/// Policy that forbids script execution and every network fetch.
fn wrap_svg_document(svg: &str, viewport: &ViewportStyle) -> String {
    let bg = if viewport.checkered {
        format!("background-color: {}; {}", viewport.background.to_hex(), theme::CHECKERBOARD_CSS)
    } else {
        format!("background-color: {};", viewport.background.to_hex())
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="Content-Security-Policy" content="default-src 'none'; style-src 'unsafe-inline'; img-src data:; connect-src 'none';">
<style>
* {{ margin: 0; padding: 0; }}
body {{
    {bg}
    display: flex;
    align-items: center;
    justify-content: center;
    min-height: 100vh;
    overflow: hidden;
}}
body > svg {{
    max-width: 100%;
    max-height: 100vh;
}}
</style>
</head>
<body>
{svg}
</body>
</html>"#
    )
}
