/// Completion marshaling: background preparation threads post ready events
/// here; only the owner thread drains them. This is the portable stand-in
/// for "post back to the UI thread" in a host message loop.

use crate::renderer::SandboxedRenderer;
use std::sync::mpsc::{channel, Receiver, Sender};

/// What the composer should build once preparation finishes. Carries the
/// renderer itself so ownership transfers to the surface on apply.
#[derive(Debug)]
pub struct SurfacePlan {
    pub banner_text: Option<String>,
    pub renderer: Option<SandboxedRenderer>,
}

#[derive(Debug)]
pub enum PreviewEvent {
    SurfaceReady { generation: u64, plan: SurfacePlan },
}

pub struct EventQueue {
    tx: Sender<PreviewEvent>,
    rx: Receiver<PreviewEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Handle for a background thread to post completions through.
    pub fn sender(&self) -> Sender<PreviewEvent> {
        self.tx.clone()
    }

    /// Non-blocking drain of everything queued so far, in post order.
    pub fn try_drain(&self) -> Vec<PreviewEvent> {
        self.rx.try_iter().collect()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
