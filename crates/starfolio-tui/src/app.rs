use std::time::{Duration, Instant};

use tracing::warn;

use starfolio_core::animate::{
    intersection_ratio, Reveal, SequentialReveal, StaggeredReveal, Typewriter,
};
use starfolio_core::carousel::{Breakpoints, Carousel};
use starfolio_core::config::AppConfig;
use starfolio_core::contact::ContactMessage;
use starfolio_core::content::{
    Section, CERTIFICATIONS, CONTACT_CHANNELS, HERO_TITLES, PROJECTS, SKILL_CATEGORIES, TIMELINE,
};
use starfolio_core::progress::ScrollProgress;
use starfolio_core::starfield::Starfield;
use starfolio_core::theme::ThemeManager;

use crate::event::SendResult;
use crate::layout::DocumentLayout;
use crate::theme::Theme;

const STAGGER_DELAY: Duration = Duration::from_millis(100);
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Scrolling through the page
    Browse,
    /// Editing the contact form
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub field: Option<FormField>,
    pub submitting: bool,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

/// Full application state. Pure with respect to the terminal: every
/// mutation happens through an event method, so the whole thing is
/// drivable from tests.
pub struct App {
    pub config: AppConfig,
    pub theme_manager: ThemeManager,
    pub theme: Theme,
    pub mode: Mode,
    pub form: ContactForm,
    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub pending_key: Option<char>,

    /// First visible document row.
    pub scroll: usize,
    pub viewport: (u16, u16),
    pub layout: DocumentLayout,

    pub section_reveals: Vec<Reveal>,
    pub skills_reveal: StaggeredReveal,
    pub projects_reveal: StaggeredReveal,
    pub timeline_reveal: SequentialReveal,
    pub timeline_progress: ScrollProgress,
    pub carousel: Carousel,
    pub starfield: Starfield,
    pub typewriter: Typewriter,
}

impl App {
    pub fn new(config: AppConfig, theme_manager: ThemeManager, width: u16, height: u16) -> Self {
        let theme = Theme::from_preference(theme_manager.preference());
        let threshold = config.ui.reveal_threshold;
        let interval = Duration::from_millis(config.ui.sequential_interval_ms);

        let mut carousel = Carousel::new(CERTIFICATIONS.len(), Breakpoints::default());
        carousel.set_width(width);

        let mut app = Self {
            theme,
            theme_manager,
            mode: Mode::Browse,
            form: ContactForm::default(),
            toast: None,
            should_quit: false,
            pending_key: None,
            scroll: 0,
            viewport: (width, height),
            layout: DocumentLayout::compute(height as usize),
            section_reveals: Section::ALL.iter().map(|_| Reveal::new(threshold)).collect(),
            skills_reveal: StaggeredReveal::new(SKILL_CATEGORIES.len(), threshold, STAGGER_DELAY),
            projects_reveal: StaggeredReveal::new(PROJECTS.len(), threshold, STAGGER_DELAY),
            timeline_reveal: SequentialReveal::new(TIMELINE.len(), threshold, interval),
            timeline_progress: ScrollProgress::new(),
            carousel,
            starfield: Starfield::new(width as f32, height as f32),
            typewriter: Typewriter::new(&HERO_TITLES),
            config,
        };
        app.update_visibility(Instant::now());
        app
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport.1 as usize
    }

    /// The section owning the top of the viewport, for the navbar.
    pub fn current_section(&self) -> Section {
        self.layout.section_at(self.scroll)
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.typewriter.tick(now);
        self.starfield.tick();
        self.timeline_reveal.tick(now);
        if let Some(toast) = &self.toast {
            if now.duration_since(toast.shown_at) >= TOAST_TTL {
                self.toast = None;
            }
        }
        self.update_visibility(now);
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.layout = DocumentLayout::compute(height as usize);
        self.carousel.set_width(width);
        self.starfield.resize(width as f32, height as f32);
        let max = self.layout.max_scroll(self.viewport_height());
        self.scroll = self.scroll.min(max);
        self.update_visibility(Instant::now());
    }

    /// Feed every scroll-dependent tracker from the current layout.
    fn update_visibility(&mut self, now: Instant) {
        let vh = self.viewport_height();
        for s in self.layout.sections() {
            let ratio = intersection_ratio(s.top, s.height, self.scroll, vh);
            self.section_reveals[s.section.index()].observe(ratio);
            match s.section {
                Section::Skills => self.skills_reveal.observe(ratio, now),
                Section::Projects => self.projects_reveal.observe(ratio, now),
                Section::Experience => {
                    self.timeline_reveal.observe(ratio);
                    self.timeline_progress.update(
                        s.top as i64 - self.scroll as i64,
                        s.height as u64,
                        vh as u64,
                    );
                }
                _ => {}
            }
        }
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let max = self.layout.max_scroll(self.viewport_height()) as i64;
        self.scroll = (self.scroll as i64).saturating_add(delta).clamp(0, max) as usize;
        self.update_visibility(Instant::now());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
        self.update_visibility(Instant::now());
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.layout.max_scroll(self.viewport_height());
        self.update_visibility(Instant::now());
    }

    pub fn jump_to_section(&mut self, section: Section) {
        let top = self.layout.section(section).top;
        let max = self.layout.max_scroll(self.viewport_height());
        self.scroll = top.min(max);
        self.update_visibility(Instant::now());
    }

    pub fn toggle_theme(&mut self) {
        match self.theme_manager.toggle() {
            Ok(_) => {
                self.theme = Theme::from_preference(self.theme_manager.preference());
            }
            Err(e) => {
                warn!("failed to persist theme: {e}");
                self.show_toast(format!("Could not save theme: {e}"), ToastKind::Error);
            }
        }
    }

    pub fn show_toast(&mut self, text: String, kind: ToastKind) {
        self.toast = Some(Toast {
            text,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Enter form mode, scrolled to the contact section.
    pub fn enter_form(&mut self) {
        self.jump_to_section(Section::Contact);
        self.mode = Mode::Form;
        if self.form.field.is_none() {
            self.form.field = Some(FormField::Name);
        }
    }

    /// Leave form mode without touching the draft.
    pub fn cancel_form(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn form_input(&mut self, c: char) {
        if self.form.submitting {
            return;
        }
        if let Some(field) = self.form.field {
            self.form.value_mut(field).push(c);
        }
    }

    pub fn form_backspace(&mut self) {
        if self.form.submitting {
            return;
        }
        if let Some(field) = self.form.field {
            self.form.value_mut(field).pop();
        }
    }

    pub fn form_next_field(&mut self) {
        self.form.field = Some(self.form.field.map_or(FormField::Name, FormField::next));
    }

    pub fn form_prev_field(&mut self) {
        self.form.field = Some(self.form.field.map_or(FormField::Name, FormField::prev));
    }

    /// Start a submission. Returns the message to hand to the mailer, or
    /// `None` when validation fails or a send is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.form.submitting {
            return None;
        }
        let message = self.form.to_message();
        if let Err(e) = message.validate() {
            self.show_toast(e.to_string(), ToastKind::Error);
            return None;
        }
        self.form.submitting = true;
        Some(message)
    }

    /// Apply the outcome of an async submission. Success clears the form;
    /// failure keeps the draft so it can be resent by hand.
    pub fn on_send_result(&mut self, result: SendResult) {
        self.form.submitting = false;
        match result {
            SendResult::Success => {
                self.form.clear();
                self.mode = Mode::Browse;
                self.show_toast("Message sent successfully!".to_string(), ToastKind::Success);
            }
            SendResult::Failure { error } => {
                self.show_toast(format!("Failed to send message: {error}"), ToastKind::Error);
            }
        }
    }

    /// Open the portfolio's GitHub profile in the default browser.
    pub fn open_profile(&mut self) {
        let channel = &CONTACT_CHANNELS[2];
        if let Err(e) = open::that(channel.url) {
            warn!("failed to open {}: {e}", channel.url);
            self.show_toast(format!("Could not open browser: {e}"), ToastKind::Error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfolio_core::theme::{PreferenceStore, ThemePreference};

    struct NullStore(Option<ThemePreference>);

    impl PreferenceStore for NullStore {
        fn load(&self) -> starfolio_core::Result<Option<ThemePreference>> {
            Ok(self.0)
        }
        fn save(&mut self, _pref: ThemePreference) -> starfolio_core::Result<()> {
            Ok(())
        }
    }

    fn test_app() -> App {
        let manager =
            ThemeManager::new(Box::new(NullStore(Some(ThemePreference { is_dark: true }))))
                .unwrap();
        App::new(AppConfig::default(), manager, 100, 40)
    }

    #[test]
    fn test_scroll_clamps_to_document() {
        let mut app = test_app();
        app.scroll_by(-10);
        assert_eq!(app.scroll, 0);

        app.scroll_by(i64::MAX / 2);
        assert_eq!(app.scroll, app.layout.max_scroll(40));

        app.scroll_to_top();
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_reveals_latch_on_scroll_back() {
        let mut app = test_app();
        app.jump_to_section(Section::Skills);
        assert!(app.section_reveals[Section::Skills.index()].is_visible());
        assert!(app.skills_reveal.is_visible());

        app.scroll_to_top();
        assert!(app.section_reveals[Section::Skills.index()].is_visible());
    }

    #[test]
    fn test_timeline_reveals_one_entry_per_interval() {
        let mut app = test_app();
        let interval = Duration::from_millis(app.config.ui.sequential_interval_ms);
        app.jump_to_section(Section::Experience);
        assert_eq!(app.timeline_reveal.revealed(), 0);

        let start = Instant::now();
        for k in 1..=4 {
            app.on_tick(start + interval * k);
            assert_eq!(app.timeline_reveal.revealed(), k as usize);
        }
        app.on_tick(start + interval * 20);
        assert!(app.timeline_reveal.is_done());
    }

    #[test]
    fn test_successful_send_clears_form() {
        let mut app = test_app();
        app.enter_form();
        app.form.name = "Ada".to_string();
        app.form.email = "ada@example.com".to_string();
        app.form.message = "hello".to_string();

        let message = app.begin_submit().unwrap();
        assert_eq!(message.from_name, "Ada");
        assert!(app.form.submitting);

        // Double submit is ignored while in flight
        assert!(app.begin_submit().is_none());

        app.on_send_result(SendResult::Success);
        assert!(app.form.name.is_empty());
        assert!(app.form.message.is_empty());
        assert!(!app.form.submitting);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn test_failed_send_preserves_form() {
        let mut app = test_app();
        app.enter_form();
        app.form.name = "Ada".to_string();
        app.form.email = "ada@example.com".to_string();
        app.form.message = "hello".to_string();

        app.begin_submit().unwrap();
        app.on_send_result(SendResult::Failure {
            error: "timeout".to_string(),
        });
        assert_eq!(app.form.message, "hello");
        assert!(!app.form.submitting);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.text.contains("timeout"));
    }

    #[test]
    fn test_blank_form_does_not_submit() {
        let mut app = test_app();
        app.enter_form();
        assert!(app.begin_submit().is_none());
        assert!(!app.form.submitting);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_theme_toggle_swaps_palette() {
        let mut app = test_app();
        assert!(app.theme_manager.is_dark());
        let dark_bg = format!("{:?}", app.theme.bg);
        app.toggle_theme();
        assert!(!app.theme_manager.is_dark());
        assert_ne!(format!("{:?}", app.theme.bg), dark_bg);
        app.toggle_theme();
        assert_eq!(format!("{:?}", app.theme.bg), dark_bg);
    }

    #[test]
    fn test_resize_reclamps_scroll_and_resets_carousel() {
        let mut app = test_app();
        app.scroll_to_bottom();
        let bottom = app.scroll;

        // Taller viewport shrinks max scroll
        app.on_resize(100, 60);
        assert!(app.scroll <= bottom);
        assert!(app.scroll <= app.layout.max_scroll(60));

        // Crossing a breakpoint resets the carousel page
        app.carousel.next();
        app.on_resize(140, 60);
        assert_eq!(app.carousel.current_page(), 0);
    }

    #[test]
    fn test_toast_expires() {
        let mut app = test_app();
        app.show_toast("hi".to_string(), ToastKind::Info);
        let shown = app.toast.as_ref().unwrap().shown_at;
        app.on_tick(shown + TOAST_TTL);
        assert!(app.toast.is_none());
    }
}
