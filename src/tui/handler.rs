//! Event handler for the TUI
//!
//! Translates key presses into navigation gestures. Bounds are never checked
//! here: the date cursor decides whether a gesture moves the selection.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;
use crate::services::NavigationGesture;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Navigate(NavigationGesture),
}

/// Map a key to an action, if it has one
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    let gesture = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(KeyAction::Quit),
        KeyCode::Left | KeyCode::Char('h') => NavigationGesture::Previous,
        KeyCode::Right | KeyCode::Char('l') => NavigationGesture::Next,
        KeyCode::Char('t') => NavigationGesture::Today,
        KeyCode::Home | KeyCode::Char('g') => NavigationGesture::TripStart,
        KeyCode::End | KeyCode::Char('G') => NavigationGesture::TripEnd,
        _ => return None,
    };
    Some(KeyAction::Navigate(gesture))
}

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            match key_action(key) {
                Some(KeyAction::Quit) => app.quit(),
                Some(KeyAction::Navigate(gesture)) => {
                    app.navigate(gesture, Instant::now());
                }
                None => {}
            }
            Ok(())
        }
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            key_action(press(KeyCode::Left)),
            Some(KeyAction::Navigate(NavigationGesture::Previous))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('l'))),
            Some(KeyAction::Navigate(NavigationGesture::Next))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('t'))),
            Some(KeyAction::Navigate(NavigationGesture::Today))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('G'))),
            Some(KeyAction::Navigate(NavigationGesture::TripEnd))
        );
        assert_eq!(key_action(press(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(key_action(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(key), Some(KeyAction::Quit));
    }
}
