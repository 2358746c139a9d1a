//! App state - pure data structure with no I/O logic

use std::time::{Duration, Instant};

use crate::constants::TOAST_TTL_MS;
use crate::messages::RenderState;
use crate::models::{Country, FetchState};

/// A transient failure notification
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_millis(TOAST_TTL_MS),
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    /// Fetch lifecycle phase
    pub fetch: FetchState,

    /// Latest successfully fetched list; empty until the first success,
    /// untouched by failures
    pub countries: Vec<Country>,

    // List navigation
    pub cursor: usize,
    pub selected: Option<usize>,

    // Request tracking
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Failure toast
    pub toast: Option<Toast>,

    // Loading spinner
    pub spinner_frame: usize,

    // Fetch metadata
    pub last_fetch_ms: u64,
    pub last_updated: Option<chrono::DateTime<chrono::Utc>>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            fetch: FetchState::Start,
            countries: Vec::new(),
            cursor: 0,
            selected: None,
            next_request_id: 1,
            pending_request_id: None,
            toast: None,
            spinner_frame: 0,
            last_fetch_ms: 0,
            last_updated: None,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Number of rows currently visible in the list
    pub fn list_len(&self) -> usize {
        match &self.fetch {
            FetchState::Success(countries) => countries.len(),
            _ => 0,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            fetch: self.fetch.clone(),
            cursor: self.cursor,
            selected: self.selected,
            toast: self.toast.as_ref().map(|t| t.message.clone()),
            spinner_frame: self.spinner_frame,
            last_fetch_ms: self.last_fetch_ms,
            last_updated: self.last_updated,
            show_help: self.show_help,
        }
    }
}
