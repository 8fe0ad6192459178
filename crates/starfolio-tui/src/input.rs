use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use starfolio_core::content::Section;

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    JumpToSection(Section),
    CarouselNext,
    CarouselPrev,
    ToggleTheme,
    OpenProfile,
    EnterForm,
    // Form mode
    Submit,
    Cancel,
    NextField,
    PrevField,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.mode == Mode::Form {
        return handle_form_mode(key);
    }

    // Browse mode keybindings
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, KeyModifiers::NONE) => Action::ScrollPageDown,
        (KeyCode::PageUp, KeyModifiers::NONE) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Section navigation
        (KeyCode::Char(c @ '1'..='7'), KeyModifiers::NONE) => {
            let index = c as usize - '1' as usize;
            Action::JumpToSection(Section::ALL[index])
        }

        // Certification carousel
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::CarouselPrev,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::CarouselNext,
        (KeyCode::Left, KeyModifiers::NONE) => Action::CarouselPrev,
        (KeyCode::Right, KeyModifiers::NONE) => Action::CarouselNext,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenProfile,

        // Contact form
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EnterForm,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::EnterForm,

        _ => Action::None,
    }
}

/// Handle key events while the contact form is focused
fn handle_form_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::Cancel,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) => Action::NextField,
        (KeyCode::BackTab, _) => Action::PrevField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char(c), _) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfolio_core::config::AppConfig;
    use starfolio_core::theme::{PreferenceStore, ThemeManager, ThemePreference};

    struct NullStore;

    impl PreferenceStore for NullStore {
        fn load(&self) -> starfolio_core::Result<Option<ThemePreference>> {
            Ok(Some(ThemePreference { is_dark: true }))
        }
        fn save(&mut self, _pref: ThemePreference) -> starfolio_core::Result<()> {
            Ok(())
        }
    }

    fn browse_app() -> App {
        let manager = ThemeManager::new(Box::new(NullStore)).unwrap();
        App::new(AppConfig::default(), manager, 100, 40)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_jumps_to_section() {
        let app = browse_app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &app),
            Action::JumpToSection(Section::Home)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('7')), &app),
            Action::JumpToSection(Section::Contact)
        );
    }

    #[test]
    fn test_gg_requires_double_press() {
        let mut app = browse_app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_form_mode_captures_text() {
        let mut app = browse_app();
        app.enter_form();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Cancel);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Submit);
    }
}
