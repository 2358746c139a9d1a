//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    CursorUp,
    CursorDown,
    SelectRow,

    // Fetch actions
    Refresh,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Help popup swallows everything else
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') => Some(UiEvent::Refresh),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::CursorDown),
        KeyCode::Enter => Some(UiEvent::SelectRow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        let mut key = KeyEvent::new(code, KeyModifiers::NONE);
        key.kind = KeyEventKind::Press;
        key
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::Up), false), Some(UiEvent::CursorUp));
        assert_eq!(key_to_ui_event(press(KeyCode::Down), false), Some(UiEvent::CursorDown));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), false), Some(UiEvent::SelectRow));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), false), None);
    }

    #[test]
    fn test_help_popup_closes_on_any_key() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), true), Some(UiEvent::CloseHelp));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_quits_even_over_help() {
        let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        key.kind = KeyEventKind::Press;
        assert_eq!(key_to_ui_event(key, true), Some(UiEvent::Quit));
    }
}
