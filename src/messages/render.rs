//! Render state - data structure sent from App layer to UI for rendering

use crate::models::FetchState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    /// Current fetch lifecycle phase (drives the four visual branches)
    pub fetch: FetchState,

    // List state
    pub cursor: usize,
    pub selected: Option<usize>,

    // Failure toast (transient, auto-dismissed)
    pub toast: Option<String>,

    // Loading spinner frame index
    pub spinner_frame: usize,

    // Fetch metadata for the status bar
    pub last_fetch_ms: u64,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            fetch: FetchState::Start,
            cursor: 0,
            selected: None,
            toast: None,
            spinner_frame: 0,
            last_fetch_ms: 0,
            last_updated: None,
            show_help: false,
        }
    }
}
