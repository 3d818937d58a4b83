use crate::app::NetworkEventSender;
use crate::content::{self, Language, SectionId};
use crate::events::network::Event as NetworkEvent;
use crate::relay::RelayError;
use crate::sound::ClickSound;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::layout::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::contact::{ContactForm, SubmitRejected, DEFAULT_SUCCESS_BANNER};
use super::error::StateError;
use super::navigation::{
    Focus, FormField, NavControl, NavigationIndicator, SmoothScroll, SMOOTH_SCROLL_DURATION,
};
use super::reveal::{Appearance, RevealKey, RevealRegistry, RevealTarget, DEFAULT_REVEAL_DURATION};
use super::tracker::{SectionBounds, VisibilityTracker, DEFAULT_PROBE_DIVISOR};
use super::typewriter::{Typewriter, TypewriterTimings};

/// Maximum number of log lines kept for the log panel.
const LOG_CAPACITY: usize = 500;

/// Rows moved per mouse wheel notch.
pub const WHEEL_STEP: i64 = 3;

/// Tunables handed to the state from configuration.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSettings {
    pub probe_divisor: u32,
    pub reveal_duration: Duration,
    pub success_banner: Duration,
}

impl Default for StateSettings {
    fn default() -> Self {
        StateSettings {
            probe_divisor: DEFAULT_PROBE_DIVISOR,
            reveal_duration: DEFAULT_REVEAL_DURATION,
            success_banner: DEFAULT_SUCCESS_BANNER,
        }
    }
}

/// Houses data representative of application state.
///
/// Every piece of mutable UI state (locale, sound flag, scroll position,
/// active section, animations, contact form) lives here and changes only
/// through the methods below.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    language: Language,
    sound: ClickSound,
    theme: crate::ui::Theme,
    terminal_size: Rect,
    rail_area: Rect,
    spinner_index: usize,
    viewport_height: u32,
    scroll_offset: u32,
    page_height: u32,
    sections: Vec<SectionBounds>,
    reveal_targets: Vec<RevealTarget>,
    tracker: VisibilityTracker,
    navigation: NavigationIndicator,
    smooth_scroll: Option<SmoothScroll>,
    reveals: RevealRegistry,
    code_typewriter: Typewriter,
    status_typewriter: Typewriter,
    contact: ContactForm,
    focus: Focus,
    log_visible: bool,
    log_entries: VecDeque<String>,
}

impl Default for State {
    fn default() -> Self {
        State::with_settings(
            None,
            StateSettings::default(),
            crate::ui::Theme::default(),
            ClickSound::default(),
            Instant::now(),
        )
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        settings: StateSettings,
        theme: crate::ui::Theme,
        now: Instant,
    ) -> Self {
        State::with_settings(Some(net_sender), settings, theme, ClickSound::default(), now)
    }

    pub(crate) fn with_settings(
        net_sender: Option<NetworkEventSender>,
        settings: StateSettings,
        theme: crate::ui::Theme,
        sound: ClickSound,
        now: Instant,
    ) -> Self {
        let language = Language::default();
        State {
            net_sender,
            language,
            sound,
            theme,
            terminal_size: Rect::default(),
            rail_area: Rect::default(),
            spinner_index: 0,
            viewport_height: 0,
            scroll_offset: 0,
            page_height: 0,
            sections: vec![],
            reveal_targets: vec![],
            tracker: VisibilityTracker::new(settings.probe_divisor),
            navigation: NavigationIndicator::default(),
            smooth_scroll: None,
            reveals: RevealRegistry::new(settings.reveal_duration),
            code_typewriter: Typewriter::new(
                content::hero_code(language),
                TypewriterTimings::CODE,
                now,
            ),
            status_typewriter: Typewriter::new(
                content::HERO_GENERATING.get(language),
                TypewriterTimings::STATUS_LINE,
                now,
            ),
            contact: ContactForm::new(settings.success_banner),
            focus: Focus::Page,
            log_visible: false,
            log_entries: VecDeque::new(),
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Remember where the navigation rail was drawn, for mouse hits.
    ///
    pub fn set_rail_area(&mut self, area: Rect) -> &mut Self {
        self.rail_area = area;
        self
    }

    pub fn get_rail_area(&self) -> Rect {
        self.rail_area
    }

    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    // Locale and sound

    pub fn get_language(&self) -> Language {
        self.language
    }

    /// Switch locale, restarting both typewriters from the first character.
    ///
    pub fn set_language(&mut self, language: Language, now: Instant) -> &mut Self {
        self.play_click();
        if self.language == language {
            return self;
        }
        info!("Switching language to {}.", language.code());
        self.language = language;
        self.code_typewriter
            .restart(content::hero_code(language), now);
        self.status_typewriter
            .restart(content::HERO_GENERATING.get(language), now);
        self
    }

    pub fn toggle_language(&mut self, now: Instant) -> &mut Self {
        let next = self.language.toggled();
        self.set_language(next, now)
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.sound.is_enabled()
    }

    pub fn toggle_sound(&mut self) -> &mut Self {
        self.sound.toggle();
        self
    }

    /// Give click feedback for an interaction.
    ///
    pub fn play_click(&mut self) {
        self.sound.play();
    }

    // Layout and scrolling

    /// Record the laid-out sections and reveal targets for a viewport, then
    /// re-run tracking against them.
    ///
    pub fn sync_layout(
        &mut self,
        sections: Vec<SectionBounds>,
        reveal_targets: Vec<RevealTarget>,
        viewport_height: u32,
        now: Instant,
    ) {
        self.page_height = sections
            .iter()
            .map(|s| s.offset_top + s.height)
            .max()
            .unwrap_or(0);
        self.sections = sections;
        self.reveal_targets = reveal_targets;
        self.viewport_height = viewport_height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.refresh_tracking(now);
    }

    fn refresh_tracking(&mut self, now: Instant) {
        let previous = self.tracker.current();
        let active = self
            .tracker
            .update(self.scroll_offset, self.viewport_height, &self.sections);
        if previous != Some(active) {
            debug!("Active section is now '{}'.", active);
        }
        let revealed = self.reveals.observe(
            &self.reveal_targets,
            self.scroll_offset,
            self.viewport_height,
            now,
        );
        if revealed > 0 {
            trace!("Revealed {} targets.", revealed);
        }
    }

    pub fn get_scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn get_viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn get_page_height(&self) -> u32 {
        self.page_height
    }

    pub fn get_sections(&self) -> &[SectionBounds] {
        &self.sections
    }

    pub fn max_scroll(&self) -> u32 {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Scroll by a number of rows. Cancels any smooth scroll in flight.
    ///
    pub fn scroll_by(&mut self, delta: i64, now: Instant) {
        self.smooth_scroll = None;
        let target = (self.scroll_offset as i64 + delta).clamp(0, self.max_scroll() as i64);
        self.set_scroll_offset(target as u32, now);
    }

    pub fn scroll_page(&mut self, pages: i64, now: Instant) {
        let step = self.viewport_height.saturating_sub(2).max(1) as i64;
        self.scroll_by(pages * step, now);
    }

    pub fn scroll_to_top(&mut self, now: Instant) {
        self.scroll_by(-(self.scroll_offset as i64), now);
    }

    pub fn scroll_to_bottom(&mut self, now: Instant) {
        self.scroll_by(self.max_scroll() as i64, now);
    }

    fn set_scroll_offset(&mut self, offset: u32, now: Instant) {
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.refresh_tracking(now);
        }
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.smooth_scroll.is_some()
    }

    // Navigation

    /// Return the active section id.
    ///
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    pub fn nav_controls(&self) -> Vec<NavControl> {
        self.navigation.controls(&self.tracker, self.language)
    }

    pub fn nav_next(&mut self) {
        self.navigation.next();
    }

    pub fn nav_prev(&mut self) {
        self.navigation.prev();
    }

    /// Smoothly scroll `target` to the top of the viewport. Returns false if
    /// the section is not on the page yet.
    ///
    pub fn navigate_to(&mut self, target: SectionId, now: Instant) -> bool {
        self.play_click();
        let max_offset = self.max_scroll();
        match self.navigation.scroll_to(target, &self.sections, max_offset) {
            Some(command) => {
                debug!(
                    "Scrolling to section '{}' at row {}.",
                    command.target, command.offset
                );
                self.smooth_scroll = Some(SmoothScroll::new(
                    self.scroll_offset,
                    command.offset,
                    now,
                    SMOOTH_SCROLL_DURATION,
                ));
                true
            }
            None => false,
        }
    }

    /// Navigate to a section by its fixed identifier.
    ///
    pub fn navigate_to_id(&mut self, id: &str, now: Instant) -> Result<(), StateError> {
        let target = SectionId::parse(id).ok_or_else(|| StateError::UnknownSection(id.to_string()))?;
        if self.navigate_to(target, now) {
            Ok(())
        } else {
            Err(StateError::SectionNotLaidOut(id.to_string()))
        }
    }

    pub fn activate_nav_cursor(&mut self, now: Instant) -> bool {
        let target = self.navigation.cursor();
        self.navigate_to(target, now)
    }

    /// Handle a mouse click; clicks on the rail navigate.
    ///
    pub fn click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let area = self.rail_area;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return false;
        }
        // One control per row inside the rail border.
        let index = (row - area.y).checked_sub(1).map(usize::from);
        match index.and_then(SectionId::from_index) {
            Some(target) => self.navigate_to(target, now),
            None => false,
        }
    }

    // Animation

    /// Advance every timer-driven piece of state to `now`.
    ///
    pub fn tick(&mut self, now: Instant) {
        self.code_typewriter.tick(now);
        self.status_typewriter.tick(now);
        self.contact.tick(now);
        if let Some(scroll) = self.smooth_scroll {
            let offset = scroll.offset_at(now).min(self.max_scroll());
            if scroll.is_finished(now) {
                self.smooth_scroll = None;
            }
            self.set_scroll_offset(offset, now);
        }
        if self.contact.is_submitting() {
            self.advance_spinner_index();
        }
    }

    pub fn get_code_typewriter(&self) -> &Typewriter {
        &self.code_typewriter
    }

    pub fn get_status_typewriter(&self) -> &Typewriter {
        &self.status_typewriter
    }

    pub fn appearance(&self, key: &RevealKey, now: Instant) -> Appearance {
        self.reveals.appearance(key, now)
    }

    /// Cancel every pending timer. Called when the view is torn down.
    ///
    pub fn teardown(&mut self) {
        debug!("Cancelling animation timers...");
        self.code_typewriter.cancel();
        self.status_typewriter.cancel();
        self.contact.cancel_timers();
        self.smooth_scroll = None;
    }

    // Contact form

    pub fn get_contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn current_focus(&self) -> Focus {
        self.focus
    }

    pub fn is_form_input_mode(&self) -> bool {
        matches!(self.focus, Focus::Form(_))
    }

    /// Focus the first form field and bring the contact section into view.
    ///
    pub fn enter_form(&mut self, now: Instant) {
        self.navigate_to(SectionId::Contact, now);
        self.focus = Focus::Form(FormField::Name);
    }

    pub fn leave_form(&mut self) {
        self.focus = Focus::Page;
    }

    pub fn next_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.next());
        }
    }

    pub fn prev_field(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.focus = Focus::Form(field.prev());
        }
    }

    pub fn add_form_char(&mut self, c: char) {
        if let Focus::Form(field) = self.focus {
            self.contact.insert_char(field, c);
        }
    }

    pub fn remove_form_char(&mut self) {
        if let Focus::Form(field) = self.focus {
            self.contact.delete_char(field);
        }
    }

    /// Enter inserts a line break in the message and moves on elsewhere.
    ///
    pub fn form_enter(&mut self) {
        match self.focus {
            Focus::Form(FormField::Message) => self.contact.insert_char(FormField::Message, '\n'),
            Focus::Form(_) => self.next_field(),
            Focus::Page => {}
        }
    }

    /// Validate the form and hand a valid message to the network thread.
    ///
    pub fn submit_contact(&mut self, now: Instant) {
        self.play_click();
        let message = match self.contact.begin_submission() {
            Ok(message) => message,
            Err(SubmitRejected::Busy) | Err(SubmitRejected::Invalid) => return,
        };
        let dispatched = match &self.net_sender {
            Some(sender) => sender
                .send(NetworkEvent::SubmitContact(message))
                .map_err(|e| RelayError::Dispatch(e.to_string())),
            None => Err(RelayError::Dispatch("network thread not running".to_string())),
        };
        if let Err(e) = dispatched {
            self.contact.finish_submission(&Err(e), now);
        }
    }

    pub fn finish_contact_submission(&mut self, outcome: Result<(), RelayError>, now: Instant) {
        self.contact.finish_submission(&outcome, now);
    }

    // Log panel

    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push_back(entry);
        while self.log_entries.len() > LOG_CAPACITY {
            self.log_entries.pop_front();
        }
    }

    pub fn get_log_entries(&self) -> &VecDeque<String> {
        &self.log_entries
    }

    pub fn toggle_log(&mut self) {
        self.log_visible = !self.log_visible;
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }
}
