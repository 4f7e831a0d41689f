//! Scene host collaborator
//!
//! Windows never reach into the scene. Item handlers receive a
//! `&mut dyn SceneHost` and ask it for things; the host decides what happens.
//! [`SceneRequests`] queues the requests so the game loop can apply them
//! after input handling, without borrowing windows and scene at once.

use crate::settings::GameMode;

/// Identifies a window to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

/// Overlays a menu can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Options,
    GameModeSelect,
    GameOptions,
}

pub trait SceneHost {
    fn remove_window(&mut self, id: WindowId);

    fn raise_overlay(&mut self, overlay: Overlay);

    fn close_overlay(&mut self);

    /// Asks the player to confirm, then opens an external link
    fn confirm_and_open(&mut self, prompt: &str, url: &str);

    fn start_game(&mut self, mode: GameMode);
}

/// A request recorded by [`SceneRequests`]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneRequest {
    RemoveWindow(WindowId),
    RaiseOverlay(Overlay),
    CloseOverlay,
    ConfirmAndOpen { prompt: String, url: String },
    StartGame(GameMode),
}

/// Queueing host
#[derive(Debug, Default)]
pub struct SceneRequests {
    pending: Vec<SceneRequest>,
}

impl SceneRequests {
    pub fn new() -> Self {
        SceneRequests { pending: Vec::new() }
    }

    /// Takes every queued request, oldest first
    pub fn drain(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[SceneRequest] {
        &self.pending
    }
}

impl SceneHost for SceneRequests {
    fn remove_window(&mut self, id: WindowId) {
        self.pending.push(SceneRequest::RemoveWindow(id));
    }

    fn raise_overlay(&mut self, overlay: Overlay) {
        self.pending.push(SceneRequest::RaiseOverlay(overlay));
    }

    fn close_overlay(&mut self) {
        self.pending.push(SceneRequest::CloseOverlay);
    }

    fn confirm_and_open(&mut self, prompt: &str, url: &str) {
        self.pending.push(SceneRequest::ConfirmAndOpen {
            prompt: prompt.to_string(),
            url: url.to_string(),
        });
    }

    fn start_game(&mut self, mode: GameMode) {
        self.pending.push(SceneRequest::StartGame(mode));
    }
}
