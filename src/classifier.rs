/// Content classifier: conservative scan of raw SVG text for constructs the
/// sandboxed renderer will neutralize (script execution, network egress).
/// Substring/structural matching only; no schema validation, no DOM build.

use bitflags::bitflags;
use regex::Regex;
use std::sync::LazyLock;

bitflags! {
    /// Disallowed constructs found in the input.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BlockedConstructs: u8 {
        const SCRIPT          = 1 << 0;
        const EVENT_HANDLER   = 1 << 1;
        const REMOTE_REFERENCE = 1 << 2;
        const FOREIGN_OBJECT  = 1 << 3;
        const EXTERNAL_ENTITY = 1 << 4;
    }
}

// `<script>` in any case, with or without a namespace prefix (`<svg:script>`,
// `<a:script/>`).
static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(?:[a-z_][a-z0-9._-]*:)?script\b").unwrap()
});

// Inline event handlers: onload="...", onclick='...', etc.
static EVENT_HANDLER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\son[a-z]+\s*=\s*["']"#).unwrap()
});

// href / xlink:href pointing at a remote URL.
static REMOTE_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:xlink:)?href\s*=\s*["']\s*https?://"#).unwrap()
});

static FOREIGN_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<\s*(?:[a-z_][a-z0-9._-]*:)?foreignobject\b").unwrap()
});

// DOCTYPE with an internal subset, or a bare entity declaration (XXE vector).
static EXTERNAL_ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!doctype\s[^>]*\[|<!entity\s").unwrap()
});

/// Result of classifying one document. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub blocked: BlockedConstructs,
}

impl Classification {
    pub fn clean() -> Self {
        Self { blocked: BlockedConstructs::empty() }
    }

    pub fn flagged(&self) -> bool {
        !self.blocked.is_empty()
    }

    /// Human-readable list of what was found, for the banner text.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.blocked.contains(BlockedConstructs::SCRIPT) {
            parts.push("script elements");
        }
        if self.blocked.contains(BlockedConstructs::EVENT_HANDLER) {
            parts.push("event handler attributes");
        }
        if self.blocked.contains(BlockedConstructs::REMOTE_REFERENCE) {
            parts.push("remote resource references");
        }
        if self.blocked.contains(BlockedConstructs::FOREIGN_OBJECT) {
            parts.push("foreignObject elements");
        }
        if self.blocked.contains(BlockedConstructs::EXTERNAL_ENTITY) {
            parts.push("external entity declarations");
        }
        parts.join(", ")
    }
}

/// Scan SVG text for disallowed constructs. Pure and total: the same input
/// always yields the same result, and malformed or partial markup that
/// matches nothing is simply not flagged.
pub fn classify(text: &str) -> Classification {
    let mut blocked = BlockedConstructs::empty();
    if SCRIPT_RE.is_match(text) {
        blocked |= BlockedConstructs::SCRIPT;
    }
    if EVENT_HANDLER_RE.is_match(text) {
        blocked |= BlockedConstructs::EVENT_HANDLER;
    }
    if REMOTE_REF_RE.is_match(text) {
        blocked |= BlockedConstructs::REMOTE_REFERENCE;
    }
    if FOREIGN_OBJECT_RE.is_match(text) {
        blocked |= BlockedConstructs::FOREIGN_OBJECT;
    }
    if EXTERNAL_ENTITY_RE.is_match(text) {
        blocked |= BlockedConstructs::EXTERNAL_ENTITY;
    }
    Classification { blocked }
}

/// Cheap sniff: does this byte buffer look like an SVG document?
/// Checks only the first 1 KiB, tolerating an XML prolog and leading
/// whitespace. Non-UTF-8 head bytes mean "not SVG".
pub fn looks_like_svg(data: &[u8]) -> bool {
    let head = &data[..data.len().min(1024)];
    let text = match std::str::from_utf8(head) {
        Ok(s) => s,
        // A multi-byte char may straddle the 1 KiB cut; keep the valid prefix.
        Err(e) if e.valid_up_to() > 0 => {
            match std::str::from_utf8(&head[..e.valid_up_to()]) {
                Ok(s) => s,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };
    let text = text.trim_start();
    text.starts_with("<svg")
        || (text.starts_with("<?xml") && text.contains("<svg"))
}
