//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::navigable::NavigableList;
use super::state::{AppState, PopupState};

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Activate the selected row of the preferences list.
    Activate,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }
    match state.popup {
        PopupState::QuitConfirm => handle_quit_confirm(state, key),
        PopupState::Help { .. } => handle_help(state, key),
        PopupState::None => handle_normal_mode(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { ref mut scroll } = state.popup else {
        return KeyAction::None;
    };
    // Increments are clamped during render
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('H') => state.popup = PopupState::None,
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(PAGE_SIZE),
        KeyCode::PageDown => *scroll = scroll.saturating_add(PAGE_SIZE),
        _ => {}
    }
    KeyAction::None
}

/// Handles keys when no popup is open.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            return KeyAction::None;
        }
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            return KeyAction::None;
        }
        _ => {}
    }

    if state.nav.is_empty() {
        handle_list(state, key)
    } else {
        handle_pushed_screen(state, key)
    }
}

/// Keys for the preferences list (navigation stack at its root).
fn handle_list(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let selection = &mut state.selection;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => selection.select_up(),
        KeyCode::Down | KeyCode::Char('j') => selection.select_down(),
        KeyCode::PageUp => selection.page_up(PAGE_SIZE),
        KeyCode::PageDown => selection.page_down(PAGE_SIZE),
        KeyCode::Home => selection.home(),
        KeyCode::End => selection.end(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            return KeyAction::Activate;
        }
        _ => {}
    }
    KeyAction::None
}

/// Keys while a pushed screen is visible: back, or forward to the screen.
fn handle_pushed_screen(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
            if let Some(entry) = state.nav.pop() {
                debug!("Popped '{}' (depth {})", entry.title, state.nav.depth());
            }
        }
        _ => {
            if let Some(top) = state.nav.top_mut() {
                top.screen.handle_key(key);
            }
        }
    }
    KeyAction::None
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::screen::TextScreen;
    use crate::tui::nav::NavEntry;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn push(state: &mut AppState, title: &str) {
        state
            .nav
            .push(NavEntry::new(title, Box::new(TextScreen::new(title, "body"))));
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = AppState::new("Preferences");

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirm_cancels_on_esc() {
        let mut state = AppState::new("Preferences");
        handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn ctrl_c_quits_from_anywhere() {
        let mut state = AppState::new("Preferences");
        state.popup = PopupState::Help { scroll: 3 };
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut state, ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn help_toggles_and_scrolls() {
        let mut state = AppState::new("Preferences");
        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Up));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });

        // List selection is untouched while help is open
        assert_eq!(state.selection.selected, 0);

        handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn list_keys_move_selection() {
        let mut state = AppState::new("Preferences");
        handle_key(&mut state, key(KeyCode::Down));
        handle_key(&mut state, key(KeyCode::Char('j')));
        assert_eq!(state.selection.selected, 2);

        handle_key(&mut state, key(KeyCode::Char('k')));
        assert_eq!(state.selection.selected, 1);

        handle_key(&mut state, key(KeyCode::End));
        assert_eq!(state.selection.selected, usize::MAX);

        handle_key(&mut state, key(KeyCode::Home));
        assert_eq!(state.selection.selected, 0);

        handle_key(&mut state, key(KeyCode::PageDown));
        assert_eq!(state.selection.selected, PAGE_SIZE);
    }

    #[test]
    fn enter_activates_at_root() {
        let mut state = AppState::new("Preferences");
        for code in [
            KeyCode::Enter,
            KeyCode::Right,
            KeyCode::Char('l'),
            KeyCode::Char(' '),
        ] {
            assert_eq!(handle_key(&mut state, key(code)), KeyAction::Activate);
        }
    }

    #[test]
    fn back_pops_pushed_screen_only() {
        let mut state = AppState::new("Preferences");
        push(&mut state, "Appearance");
        push(&mut state, "Fonts");

        handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.breadcrumb(), vec!["Preferences", "Appearance"]);

        handle_key(&mut state, key(KeyCode::Backspace));
        assert!(state.nav.is_empty());

        // Esc at the root does nothing
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), KeyAction::None);
        assert!(state.nav.is_empty());
    }

    #[test]
    fn pushed_screen_receives_keys_and_blocks_activation() {
        let mut state = AppState::new("Preferences");
        push(&mut state, "Appearance");

        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), KeyAction::None);
        handle_key(&mut state, key(KeyCode::Down));
        // Keys go to the screen, not to the list underneath
        assert_eq!(state.selection.selected, 0);
        assert_eq!(state.nav.depth(), 1);
    }
}
