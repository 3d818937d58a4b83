use crate::content::{SectionId, CONTACT_EMAIL, CV_URL};
use crate::state::{State, WHEEL_STEP};
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<CrosstermEvent>>,
    _tx: mpsc::Sender<Event<CrosstermEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(input) => {
                            if tx_clone.send(Event::Input(input)).is_err() {
                                break;
                            }
                        }
                        Err(e) => warn!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let now = Instant::now();
        match self.rx.recv()? {
            Event::Input(input) => Ok(handle_input(input, state, now)),
            Event::Tick => {
                state.tick(now);
                Ok(true)
            }
        }
    }
}

/// Apply one terminal input to state. Returns false if exit was requested.
///
pub fn handle_input(input: CrosstermEvent, state: &mut State, now: Instant) -> bool {
    match input {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if state.is_form_input_mode() {
                handle_form_key(key, state, now)
            } else {
                handle_page_key(key, state, now)
            }
        }
        CrosstermEvent::Mouse(mouse) => {
            handle_mouse(mouse, state, now);
            true
        }
        _ => true,
    }
}

fn handle_form_key(key: KeyEvent, state: &mut State, now: Instant) -> bool {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => state.submit_contact(now),
        KeyEvent {
            code: KeyCode::Esc, ..
        } => state.leave_form(),
        KeyEvent {
            code: KeyCode::Tab, ..
        } => state.next_field(),
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => state.prev_field(),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => state.form_enter(),
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => state.remove_form_char(),
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::SHIFT,
            ..
        } => state.add_form_char(c),
        _ => (),
    }
    true
}

fn handle_page_key(key: KeyEvent, state: &mut State, now: Instant) -> bool {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q'),
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('j'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Down,
            ..
        } => state.scroll_by(1, now),
        KeyEvent {
            code: KeyCode::Char('k'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Up, ..
        } => state.scroll_by(-1, now),
        KeyEvent {
            code: KeyCode::PageDown,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char(' '),
            ..
        } => state.scroll_page(1, now),
        KeyEvent {
            code: KeyCode::PageUp,
            ..
        } => state.scroll_page(-1, now),
        KeyEvent {
            code: KeyCode::Char('g'),
            ..
        }
        | KeyEvent {
            code: KeyCode::Home,
            ..
        } => state.scroll_to_top(now),
        KeyEvent {
            code: KeyCode::Char('G'),
            ..
        }
        | KeyEvent {
            code: KeyCode::End, ..
        } => state.scroll_to_bottom(now),
        KeyEvent {
            code: KeyCode::Char(c @ '1'..='7'),
            ..
        } => {
            let index = c as usize - '1' as usize;
            if let Some(target) = SectionId::from_index(index) {
                state.navigate_to(target, now);
            }
        }
        KeyEvent {
            code: KeyCode::Char(']'),
            ..
        } => state.nav_next(),
        KeyEvent {
            code: KeyCode::Char('['),
            ..
        } => state.nav_prev(),
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            state.activate_nav_cursor(now);
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            ..
        } => {
            state.toggle_language(now);
        }
        KeyEvent {
            code: KeyCode::Char('e'),
            ..
        } => {
            state.set_language(crate::content::Language::En, now);
        }
        KeyEvent {
            code: KeyCode::Char('p'),
            ..
        } => {
            state.set_language(crate::content::Language::Pl, now);
        }
        KeyEvent {
            code: KeyCode::Char('s'),
            ..
        } => {
            state.toggle_sound();
            state.play_click();
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            ..
        } => state.toggle_log(),
        KeyEvent {
            code: KeyCode::Char('y'),
            ..
        } => {
            state.play_click();
            copy_to_clipboard(CONTACT_EMAIL);
        }
        KeyEvent {
            code: KeyCode::Char('c'),
            ..
        } => {
            state.play_click();
            copy_to_clipboard(CV_URL);
        }
        KeyEvent {
            code: KeyCode::Char('i'),
            ..
        } => state.enter_form(now),
        _ => (),
    }
    true
}

fn handle_mouse(mouse: MouseEvent, state: &mut State, now: Instant) {
    match mouse.kind {
        MouseEventKind::ScrollDown => state.scroll_by(WHEEL_STEP, now),
        MouseEventKind::ScrollUp => state.scroll_by(-WHEEL_STEP, now),
        MouseEventKind::Down(MouseButton::Left) => {
            state.click(mouse.column, mouse.row, now);
        }
        _ => (),
    }
}

fn copy_to_clipboard(contents: &str) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(contents.to_string()) {
            Ok(_) => info!("Copied '{}' to clipboard.", contents),
            Err(e) => warn!("Failed to copy to clipboard: {}", e),
        },
        Err(e) => warn!("Failed to initialize clipboard: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Language;
    use crate::sound::ClickSound;
    use crate::state::{FormField, Focus, StateSettings};
    use crossterm::event::KeyEventState;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Bell(Arc<Mutex<Vec<u8>>>);

    impl Write for Bell {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn key(code: KeyCode) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn exit_requests() {
        let mut state = State::default();
        let now = Instant::now();
        assert!(!handle_input(ctrl('c'), &mut state, now));
        assert!(!handle_input(key(KeyCode::Char('q')), &mut state, now));
        assert!(handle_input(key(KeyCode::Char('x')), &mut state, now));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = State::default();
        let release = KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_input(CrosstermEvent::Key(release), &mut state, Instant::now());
        assert_eq!(state.get_language(), Language::En);
    }

    #[test]
    fn language_keys() {
        let mut state = State::default();
        let now = Instant::now();
        handle_input(key(KeyCode::Char('l')), &mut state, now);
        assert_eq!(state.get_language(), Language::Pl);
        handle_input(key(KeyCode::Char('e')), &mut state, now);
        assert_eq!(state.get_language(), Language::En);
        handle_input(key(KeyCode::Char('p')), &mut state, now);
        assert_eq!(state.get_language(), Language::Pl);
    }

    #[test]
    fn form_mode_captures_characters() {
        let mut state = State::default();
        let now = Instant::now();
        handle_input(key(KeyCode::Char('i')), &mut state, now);
        assert_eq!(state.current_focus(), Focus::Form(FormField::Name));

        assert!(handle_input(key(KeyCode::Char('q')), &mut state, now));
        handle_input(
            CrosstermEvent::Key(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            &mut state,
            now,
        );
        assert_eq!(state.get_contact().name, "qQ");

        handle_input(key(KeyCode::Backspace), &mut state, now);
        assert_eq!(state.get_contact().name, "q");

        handle_input(key(KeyCode::Tab), &mut state, now);
        assert_eq!(state.current_focus(), Focus::Form(FormField::Email));

        handle_input(key(KeyCode::Esc), &mut state, now);
        assert_eq!(state.current_focus(), Focus::Page);
    }

    #[test]
    fn log_panel_toggle() {
        let mut state = State::default();
        handle_input(key(KeyCode::Char('d')), &mut state, Instant::now());
        assert!(state.is_log_visible());
    }

    #[test]
    fn rail_cursor_keys() {
        let mut state = State::default();
        let now = Instant::now();
        handle_input(key(KeyCode::Char(']')), &mut state, now);
        handle_input(key(KeyCode::Char(']')), &mut state, now);
        handle_input(key(KeyCode::Char('[')), &mut state, now);
        let selected: Vec<_> = state
            .nav_controls()
            .into_iter()
            .filter(|c| c.selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, SectionId::About);
    }

    #[test]
    fn cv_export_plays_click_and_keeps_running() {
        let bell = Bell::default();
        let now = Instant::now();
        let mut state = State::with_settings(
            None,
            StateSettings::default(),
            crate::ui::Theme::default(),
            ClickSound::new(Box::new(bell.clone())),
            now,
        );
        state.toggle_sound();

        assert!(handle_input(key(KeyCode::Char('c')), &mut state, now));
        assert_eq!(bell.0.lock().unwrap().as_slice(), b"\x07");
        assert_eq!(state.current_focus(), Focus::Page);
    }
}
