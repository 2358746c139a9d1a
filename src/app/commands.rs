//! Command handlers - business logic for processing UI events

use crate::app::state::{AppState, Toast};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::FetchState;

impl AppState {
    // ========================
    // List navigation
    // ========================

    pub fn cursor_up(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }

    pub fn cursor_down(&mut self) {
        let len = self.list_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Mark the row under the cursor as selected, un-marking any previous
    /// selection. No effect while no list is shown.
    pub fn select_row(&mut self) {
        if self.list_len() > 0 {
            self.selected = Some(self.cursor);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Fetch trigger
    // ========================

    /// Transition to `Loading` and hand back the fetch command.
    ///
    /// Single-flight: while a request is outstanding this returns `None`, so
    /// concurrent triggers join the in-flight fetch instead of stacking new
    /// ones.
    pub fn prepare_fetch(&mut self) -> Option<NetworkCommand> {
        if self.fetch.is_loading() {
            return None;
        }

        self.fetch = FetchState::Loading;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::FetchCountries { id })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        // Only process the response matching the pending request
        if self.pending_request_id != Some(response.id()) {
            return;
        }

        match response {
            NetworkResponse::Countries { countries, time_ms, .. } => {
                self.countries = countries.clone();
                self.fetch = FetchState::Success(countries);
                self.cursor = self.cursor.min(self.countries.len().saturating_sub(1));
                self.selected = None;
                self.last_fetch_ms = time_ms;
                self.last_updated = Some(chrono::Utc::now());
                self.finalize_request();
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                self.fetch = FetchState::Failure(message.clone());
                self.toast = Some(Toast::new(message));
                self.last_fetch_ms = time_ms;
                self.finalize_request();
            }
        }
    }

    fn finalize_request(&mut self) {
        self.pending_request_id = None;
        self.spinner_frame = 0;
    }

    // ========================
    // Timer tick
    // ========================

    /// Advance time-driven state; returns true if a re-render is needed.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.fetch.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            changed = true;
        }

        if self.toast.as_ref().map(|t| t.expired()).unwrap_or(false) {
            self.toast = None;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;
    use std::time::{Duration, Instant};

    fn country(name: &str) -> Country {
        Country::new(name, "Capital", "XX", "Region")
    }

    fn usa() -> Country {
        Country::new("United States of America", "Washington, D.C", "US", "US")
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.fetch, FetchState::Start);
        assert!(state.countries.is_empty());
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_prepare_fetch_publishes_loading_before_command() {
        let mut state = AppState::new();
        let cmd = state.prepare_fetch();
        assert_eq!(cmd, Some(NetworkCommand::FetchCountries { id: 1 }));
        assert_eq!(state.fetch, FetchState::Loading);
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_single_flight_while_loading() {
        let mut state = AppState::new();
        assert!(state.prepare_fetch().is_some());
        assert!(state.prepare_fetch().is_none());
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_success_stores_list_in_order() {
        let mut state = AppState::new();
        state.prepare_fetch();

        let list = vec![usa(), country("Uruguay")];
        state.handle_response(NetworkResponse::Countries {
            id: 1,
            countries: list.clone(),
            time_ms: 42,
        });

        assert_eq!(state.fetch, FetchState::Success(list.clone()));
        assert_eq!(state.countries, list);
        assert_eq!(state.pending_request_id, None);
        assert_eq!(state.last_fetch_ms, 42);
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn test_failure_carries_message_and_keeps_empty_list() {
        let mut state = AppState::new();
        state.prepare_fetch();

        state.handle_response(NetworkResponse::Error {
            id: 1,
            message: String::from("Network unreachable"),
            time_ms: 7,
        });

        assert_eq!(state.fetch, FetchState::Failure(String::from("Network unreachable")));
        assert!(state.countries.is_empty());
        let toast = state.toast.expect("failure sets a toast");
        assert_eq!(toast.message, "Network unreachable");
    }

    #[test]
    fn test_failure_keeps_prior_list() {
        let mut state = AppState::new();
        state.prepare_fetch();
        state.handle_response(NetworkResponse::Countries {
            id: 1,
            countries: vec![usa()],
            time_ms: 5,
        });

        // Refresh is allowed once the previous fetch resolved
        let cmd = state.prepare_fetch();
        assert_eq!(cmd, Some(NetworkCommand::FetchCountries { id: 2 }));

        state.handle_response(NetworkResponse::Error {
            id: 2,
            message: String::from("Connection failed"),
            time_ms: 3,
        });

        assert_eq!(state.fetch, FetchState::Failure(String::from("Connection failed")));
        assert_eq!(state.countries, vec![usa()]);
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut state = AppState::new();
        state.prepare_fetch();

        state.handle_response(NetworkResponse::Countries {
            id: 99,
            countries: vec![usa()],
            time_ms: 1,
        });

        assert_eq!(state.fetch, FetchState::Loading);
        assert!(state.countries.is_empty());
        assert_eq!(state.pending_request_id, Some(1));
    }

    #[test]
    fn test_select_row_i_then_j() {
        let mut state = AppState::new();
        state.prepare_fetch();
        state.handle_response(NetworkResponse::Countries {
            id: 1,
            countries: vec![country("Austria"), country("Belgium"), country("Chile")],
            time_ms: 1,
        });

        state.select_row();
        assert_eq!(state.selected, Some(0));

        state.cursor_down();
        state.cursor_down();
        state.select_row();
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_selection_noop_without_list() {
        let mut state = AppState::new();
        state.select_row();
        state.cursor_down();
        assert_eq!(state.selected, None);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_wraps_around() {
        let mut state = AppState::new();
        state.prepare_fetch();
        state.handle_response(NetworkResponse::Countries {
            id: 1,
            countries: vec![country("Austria"), country("Belgium")],
            time_ms: 1,
        });

        state.cursor_up();
        assert_eq!(state.cursor, 1);
        state.cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_tick_advances_spinner_while_loading() {
        let mut state = AppState::new();
        assert!(!state.tick());

        state.prepare_fetch();
        assert!(state.tick());
        assert_eq!(state.spinner_frame, 1);
    }

    #[test]
    fn test_tick_expires_toast() {
        let mut state = AppState::new();
        state.toast = Some(Toast {
            message: String::from("stale"),
            expires_at: Instant::now() - Duration::from_millis(1),
        });

        assert!(state.tick());
        assert!(state.toast.is_none());
    }
}
