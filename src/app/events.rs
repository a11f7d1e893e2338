// ABOUTME: Event handling for keyboard input in the onboarding wizard
// Keys map to AppEvents first so the mapping can be tested without a terminal

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::app::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    NextField,
    PreviousField,
    NextOption,
    PreviousOption,
    Toggle,
    Activate,
    InputChar(char),
    Backspace,
    Clear,
    RevealPasswords,
    NextStep,
    PreviousStep,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key_event.code == KeyCode::Char('c') {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if state.current_step().is_terminal() {
            return match key_event.code {
                KeyCode::Enter | KeyCode::Esc => Some(AppEvent::Quit),
                KeyCode::F(1) | KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if ctrl {
            return match key_event.code {
                KeyCode::Char('r') => Some(AppEvent::RevealPasswords),
                KeyCode::Char('n') => Some(AppEvent::NextStep),
                KeyCode::Char('p') => Some(AppEvent::PreviousStep),
                _ => None,
            };
        }

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            // F1 works on text fields, where '?' is typed instead
            KeyCode::F(1) => Some(AppEvent::ToggleHelp),
            KeyCode::PageDown => Some(AppEvent::NextStep),
            KeyCode::PageUp => Some(AppEvent::PreviousStep),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PreviousField),
            KeyCode::Right => Some(AppEvent::NextOption),
            KeyCode::Left => Some(AppEvent::PreviousOption),
            KeyCode::Enter => Some(AppEvent::Activate),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Delete => Some(AppEvent::Clear),
            KeyCode::Char(c) if state.focused_takes_text() => Some(AppEvent::InputChar(c)),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char(' ') => Some(AppEvent::Toggle),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        debug!(?event, step = state.current_step().number(), "Processing event");

        // A fresh keypress dismisses the previous error line
        if !matches!(event, AppEvent::ToggleHelp) {
            state.error_message = None;
        }

        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::NextField => state.focus_next(),
            AppEvent::PreviousField => state.focus_previous(),
            AppEvent::NextOption => state.cycle(true),
            AppEvent::PreviousOption => state.cycle(false),
            AppEvent::Toggle => state.toggle(),
            AppEvent::Activate => state.activate(),
            AppEvent::InputChar(c) => state.input_char(c),
            AppEvent::Backspace => state.backspace(),
            AppEvent::Clear => state.clear(),
            AppEvent::RevealPasswords => state.reveal_passwords = !state.reveal_passwords,
            AppEvent::NextStep => state.go_next(),
            AppEvent::PreviousStep => state.go_previous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = AppState::default();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::PageDown), &mut state),
            Some(AppEvent::NextStep)
        );
        assert_eq!(
            EventHandler::handle_key_event(ctrl('p'), &mut state),
            Some(AppEvent::PreviousStep)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::BackTab), &mut state),
            Some(AppEvent::PreviousField)
        );
    }

    #[test]
    fn test_text_field_swallows_question_mark_and_space() {
        let mut state = AppState::default();
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('?')), &mut state),
            Some(AppEvent::InputChar('?'))
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char(' ')), &mut state),
            Some(AppEvent::InputChar(' '))
        );
    }

    #[test]
    fn test_f1_opens_help_from_text_field() {
        let mut state = AppState::default();
        assert!(state.focused_takes_text());
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::F(1)), &mut state),
            Some(AppEvent::ToggleHelp)
        );

        state.help_visible = true;
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::F(1)), &mut state),
            Some(AppEvent::ToggleHelp)
        );
    }

    #[test]
    fn test_space_toggles_on_checkbox_panels() {
        let mut state = AppState::default();
        while state.current_step() != WizardStep::Terms {
            state.wizard.advance();
        }
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char(' ')), &mut state),
            Some(AppEvent::Toggle)
        );
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Char('?')), &mut state),
            Some(AppEvent::ToggleHelp)
        );
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut state = AppState::default();
        state.help_visible = true;
        assert_eq!(EventHandler::handle_key_event(key(KeyCode::Tab), &mut state), None);
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Esc), &mut state),
            Some(AppEvent::ToggleHelp)
        );
    }

    #[test]
    fn test_success_screen_exits_on_enter() {
        let mut state = AppState::default();
        while state.wizard.advance() {}
        assert_eq!(
            EventHandler::handle_key_event(key(KeyCode::Enter), &mut state),
            Some(AppEvent::Quit)
        );
    }

    #[test]
    fn test_error_cleared_by_next_event() {
        let mut state = AppState::default();
        state.error_message = Some("stale".to_string());
        EventHandler::process_event(AppEvent::NextField, &mut state);
        assert_eq!(state.error_message, None);
        assert_eq!(state.focused_field, 1);
    }
}
