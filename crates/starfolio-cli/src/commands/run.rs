use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;
use tracing::info;

use starfolio_core::contact::{EmailJsMailer, Mailer};
use starfolio_core::theme::{ConfigPreferenceStore, ThemeManager};
use starfolio_core::AppConfig;
use starfolio_tui::{
    app::{App, ToastKind},
    event::{AppEvent, EventHandler, SendResult},
    input::{handle_key_event, Action},
    viewport, widgets,
};

/// Rows reserved above and below the document (navbar + status bar).
const CHROME_ROWS: u16 = 2;

pub async fn run(config: AppConfig) -> Result<()> {
    // The mailer is optional: without EmailJS credentials the form still
    // renders, submission just reports the missing configuration.
    let mailer: Option<Arc<dyn Mailer>> = match EmailJsMailer::new(&config.contact) {
        Ok(m) => Some(Arc::new(m)),
        Err(e) => {
            info!("contact form disabled: {e}");
            None
        }
    };

    let theme_manager = ThemeManager::new(Box::new(ConfigPreferenceStore::new()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Starfolio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(
        config,
        theme_manager,
        size.width,
        size.height.saturating_sub(CHROME_ROWS),
    );

    let event_handler = EventHandler::new(app.config.ui.tick_rate_ms);

    // Channel for async contact-form submissions
    let (send_tx, mut send_rx) = mpsc::unbounded_channel::<SendResult>();

    // Main loop
    loop {
        // Process any completed submissions (non-blocking)
        while let Ok(result) = send_rx.try_recv() {
            app.on_send_result(result);
        }

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Navbar, document, status bar
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(size);

            viewport::render_document(frame, rows[1], &app);
            let buf = frame.buffer_mut();
            widgets::navbar::render(rows[0], buf, &app);
            widgets::status_bar::render(rows[2], buf, &app);
            widgets::toast::render(rows[1], buf, &app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, mailer.as_ref(), &send_tx);
                }
                AppEvent::Resize(w, h) => {
                    app.on_resize(w, h.saturating_sub(CHROME_ROWS));
                }
                AppEvent::Tick => {
                    app.on_tick(Instant::now());
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_action(
    app: &mut App,
    action: Action,
    mailer: Option<&Arc<dyn Mailer>>,
    send_tx: &mpsc::UnboundedSender<SendResult>,
) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.pending_key = None;
    }

    let half_page = (app.viewport_height() / 2) as i64;
    let page = app.viewport_height() as i64;

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown => app.scroll_by(1),
        Action::ScrollUp => app.scroll_by(-1),
        Action::ScrollHalfPageDown => app.scroll_by(half_page),
        Action::ScrollHalfPageUp => app.scroll_by(-half_page),
        Action::ScrollPageDown => app.scroll_by(page),
        Action::ScrollPageUp => app.scroll_by(-page),
        Action::JumpToTop => app.scroll_to_top(),
        Action::JumpToBottom => app.scroll_to_bottom(),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::JumpToSection(section) => app.jump_to_section(section),
        Action::CarouselNext => app.carousel.next(),
        Action::CarouselPrev => app.carousel.prev(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::OpenProfile => app.open_profile(),
        Action::EnterForm => app.enter_form(),
        Action::Cancel => app.cancel_form(),
        Action::NextField => app.form_next_field(),
        Action::PrevField => app.form_prev_field(),
        Action::InputChar(c) => app.form_input(c),
        Action::Backspace => app.form_backspace(),
        Action::Submit => {
            let Some(mailer) = mailer else {
                app.show_toast(
                    "Contact form is not configured; set [contact] in the config file".to_string(),
                    ToastKind::Info,
                );
                return;
            };
            if let Some(message) = app.begin_submit() {
                let mailer = Arc::clone(mailer);
                let tx = send_tx.clone();
                // One attempt per submission; the outcome comes back
                // through the channel
                tokio::spawn(async move {
                    let result = match mailer.send(&message).await {
                        Ok(()) => SendResult::Success,
                        Err(e) => SendResult::Failure {
                            error: e.to_string(),
                        },
                    };
                    let _ = tx.send(result);
                });
            }
        }
        Action::None => {}
    }
}
