//! Process-wide session flags
//!
//! These flags never touch the document timeline.

use services_profile_store::Theme;

/// Which presentation of the document is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Scroll-driven narrative, shown first
    #[default]
    Story,
    /// Plain resume layout
    Resume,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Story => ViewMode::Resume,
            ViewMode::Resume => ViewMode::Story,
        }
    }
}

/// Independent session flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub theme: Theme,
    pub editing: bool,
    pub authenticated: bool,
    /// Access gate dialog open
    pub gate_open: bool,
    /// Command overlay open
    pub palette_open: bool,
    pub view_mode: ViewMode,
}

impl SessionState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            editing: false,
            authenticated: false,
            gate_open: false,
            palette_open: false,
            view_mode: ViewMode::Story,
        }
    }

    /// Leaves edit mode, or enters it when authenticated
    ///
    /// An unauthenticated request opens the access gate instead.
    pub fn toggle_editing(&mut self) {
        if self.editing {
            self.editing = false;
        } else if self.authenticated {
            self.editing = true;
        } else {
            self.gate_open = true;
        }
    }

    /// Access gate passed
    pub fn grant_access(&mut self) {
        self.authenticated = true;
        self.editing = true;
        self.gate_open = false;
    }

    pub fn open_gate(&mut self) {
        self.gate_open = true;
    }

    pub fn close_gate(&mut self) {
        self.gate_open = false;
    }

    pub fn toggle_palette(&mut self) {
        self.palette_open = !self.palette_open;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}
