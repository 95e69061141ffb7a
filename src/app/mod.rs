//! Event loop, worker plumbing, and intent application.

mod handlers;
mod render;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use crate::{
    auth::{AuthError, SimulatedAuth},
    config::Config,
    layout,
    mock::MockData,
    routes::{Intent, Route},
    shortcuts::Shortcuts,
    toast::{Toast, ToastQueue},
    ui::Tui,
    view::ViewState,
    widgets::landing::LandingPage,
    worker::{self, WorkerCmd, WorkerEvent},
};

use handlers::{handle_key, is_ctrl_c};
use render::draw;

/// Toasts kept on screen at once.
const TOAST_LIMIT: usize = 3;

/// State shared by input handling and drawing.
pub struct App {
    pub cfg: Config,
    pub shortcuts: Shortcuts,
    pub data: MockData,
    pub view: ViewState,
    pub toasts: ToastQueue,
    /// Commands to the auth worker.
    pub worker_tx: mpsc::Sender<WorkerCmd>,
    /// Results from the auth worker.
    pub worker_rx: mpsc::Receiver<WorkerEvent>,
    /// Animation phase, advanced once per loop pass.
    pub tick: u64,
    /// Terminal area as of the last draw.
    pub viewport: Rect,
}

impl App {
    pub fn new(
        cfg: Config,
        shortcuts: Shortcuts,
        data: MockData,
        worker_tx: mpsc::Sender<WorkerCmd>,
        worker_rx: mpsc::Receiver<WorkerEvent>,
    ) -> Self {
        let toasts = ToastQueue::new(cfg.app.toast_ttl(), TOAST_LIMIT);
        let mut view = ViewState::default();
        match Route::from_path(&cfg.app.start_route) {
            Some(route) => view.navigate(route),
            None => tracing::warn!("unknown start route {}, showing home", cfg.app.start_route),
        }
        Self {
            cfg,
            shortcuts,
            data,
            view,
            toasts,
            worker_tx,
            worker_rx,
            tick: 0,
            viewport: Rect::new(0, 0, 120, 40),
        }
    }

    /// Landing page laid out for the current body area, plus the body height.
    pub fn landing_page(&self) -> (LandingPage, u16) {
        let body = layout::create_main_layout(self.viewport).body;
        (
            LandingPage::build(body.width, &self.data.plans, self.tick),
            body.height,
        )
    }

    pub fn notify(&mut self, toast: Toast) {
        self.toasts.push(toast, Instant::now());
    }
}

/// Run the main TUI loop until the user quits.
pub async fn run_app(terminal: &mut Tui, cfg_path: &Path) -> Result<()> {
    let cfg = Config::load_or_default(cfg_path)?;
    let shortcuts = Shortcuts::load_or_default(PathBuf::from("shortcut.toml"))?;
    let data = MockData::load(cfg.app.mock_data.as_deref())?;

    let (tx_cmd, rx_cmd) = mpsc::channel::<WorkerCmd>(64);
    let (tx_ev, rx_ev) = mpsc::channel::<WorkerEvent>(64);
    let backend = Arc::new(SimulatedAuth::new(cfg.app.auth_delay()));
    tokio::spawn(worker::run(rx_cmd, tx_ev, backend));

    let mut app = App::new(cfg, shortcuts, data, tx_cmd, rx_ev);

    loop {
        let size = terminal.size()?;
        app.viewport = Rect::new(0, 0, size.width, size.height);
        app.toasts.expire(Instant::now());

        terminal.draw(|f| draw(f, &app))?;

        while let Ok(ev) = app.worker_rx.try_recv() {
            handle_worker_event(&mut app, ev);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(k) = event::read()?
            && k.kind == KeyEventKind::Press
        {
            if is_ctrl_c(&k) {
                break;
            }
            let intents = handle_key(&mut app, k).await?;
            if apply_intents(&mut app, intents) {
                break;
            }
        }
        app.tick = app.tick.wrapping_add(1);
    }

    if let Some(ticket) = app.view.auth.close() {
        app.worker_tx.send(WorkerCmd::CancelAuth { ticket }).await?;
    }
    Ok(())
}

/// Apply a finished submission to the modal.
fn handle_worker_event(app: &mut App, ev: WorkerEvent) {
    match ev {
        WorkerEvent::AuthFinished {
            ticket,
            result: Err(AuthError::Cancelled),
        } => tracing::info!("auth submission {ticket} cancelled"),
        WorkerEvent::AuthFinished { ticket, result } => {
            let current = app
                .view
                .auth
                .form_mut()
                .is_some_and(|form| form.settle(ticket));
            if !current {
                tracing::warn!("dropping stale auth result {ticket}");
                return;
            }
            match result {
                Ok(session) => {
                    tracing::info!(mode = ?session.mode, user = %session.display_name, "signed in");
                    app.notify(Toast::auth_success(session.mode));
                    app.view.auth.close();
                }
                Err(e) => {
                    tracing::error!("auth failed: {e}");
                    app.notify(Toast::auth_error());
                }
            }
        }
    }
}

/// Apply handler intents in order. Returns true when the app should quit.
fn apply_intents(app: &mut App, intents: Vec<Intent>) -> bool {
    for intent in intents {
        match intent {
            Intent::Quit => return true,
            Intent::Navigate(route) => app.view.navigate(route),
            Intent::ScrollTo(section) => {
                let (page, rows) = app.landing_page();
                app.view.navbar.scroll = page.offset_of(section).min(page.max_scroll(rows));
            }
            Intent::OpenUrl(url) => {
                tracing::info!("opening {url}");
                if let Err(e) = webbrowser::open(&url) {
                    tracing::warn!("failed to open {url}: {e}");
                    app.notify(Toast::destructive("Could not open link", url));
                }
            }
            Intent::Notify(toast) => app.notify(toast),
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::{AuthMode, AuthSession},
        routes::LandingSection,
        view::ModalPhase,
    };
    use uuid::Uuid;

    pub(crate) fn test_app() -> (App, mpsc::Receiver<WorkerCmd>, mpsc::Sender<WorkerEvent>) {
        let (tx_cmd, rx_cmd) = mpsc::channel(16);
        let (tx_ev, rx_ev) = mpsc::channel(16);
        let app = App::new(
            Config::default(),
            Shortcuts::default(),
            MockData::default(),
            tx_cmd,
            rx_ev,
        );
        (app, rx_cmd, tx_ev)
    }

    fn submit_login(app: &mut App) -> Uuid {
        app.view.auth.open(AuthMode::Login);
        let form = app.view.auth.form_mut().unwrap();
        "jane@doe.io".chars().for_each(|c| form.focused_input_mut().insert_char(c));
        form.focus_next();
        "secret".chars().for_each(|c| form.focused_input_mut().insert_char(c));
        form.begin_submit().unwrap().0
    }

    fn session() -> AuthSession {
        AuthSession {
            mode: AuthMode::Login,
            display_name: "jane".into(),
        }
    }

    #[test]
    fn test_success_closes_modal_and_toasts() {
        let (mut app, _rx, _tx) = test_app();
        let ticket = submit_login(&mut app);
        handle_worker_event(
            &mut app,
            WorkerEvent::AuthFinished {
                ticket,
                result: Ok(session()),
            },
        );
        assert_eq!(app.view.auth.phase(), ModalPhase::Closed);
        assert_eq!(app.toasts.visible().next().unwrap().title, "Welcome back!");
    }

    #[test]
    fn test_failure_keeps_modal_open() {
        let (mut app, _rx, _tx) = test_app();
        let ticket = submit_login(&mut app);
        handle_worker_event(
            &mut app,
            WorkerEvent::AuthFinished {
                ticket,
                result: Err(AuthError::Validation("email already registered".into())),
            },
        );
        assert_eq!(app.view.auth.phase(), ModalPhase::OpenLogin);
        assert!(!app.view.auth.form().unwrap().is_submitting());
        assert_eq!(
            app.toasts.visible().next().unwrap().title,
            "Authentication error"
        );
    }

    #[test]
    fn test_stale_result_ignored_after_reopen() {
        let (mut app, _rx, _tx) = test_app();
        let ticket = submit_login(&mut app);
        app.view.auth.close();
        app.view.auth.open(AuthMode::Signup);
        handle_worker_event(
            &mut app,
            WorkerEvent::AuthFinished {
                ticket,
                result: Ok(session()),
            },
        );
        assert_eq!(app.view.auth.phase(), ModalPhase::OpenSignup);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_cancelled_result_is_silent() {
        let (mut app, _rx, _tx) = test_app();
        let ticket = submit_login(&mut app);
        app.view.auth.close();
        handle_worker_event(
            &mut app,
            WorkerEvent::AuthFinished {
                ticket,
                result: Err(AuthError::Cancelled),
            },
        );
        assert_eq!(app.view.auth.phase(), ModalPhase::Closed);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_start_route_from_config() {
        let (tx_cmd, _rx_cmd) = mpsc::channel(1);
        let (_tx_ev, rx_ev) = mpsc::channel(1);
        let mut cfg = Config::default();
        cfg.app.start_route = "/dashboard/pricing".into();
        let app = App::new(cfg, Shortcuts::default(), MockData::default(), tx_cmd, rx_ev);
        assert_eq!(app.view.route, Route::Pricing);

        let (tx_cmd, _rx_cmd) = mpsc::channel(1);
        let (_tx_ev, rx_ev) = mpsc::channel(1);
        let mut cfg = Config::default();
        cfg.app.start_route = "/nowhere".into();
        let app = App::new(cfg, Shortcuts::default(), MockData::default(), tx_cmd, rx_ev);
        assert_eq!(app.view.route, Route::Home);
    }

    #[test]
    fn test_intents_apply_in_order() {
        let (mut app, _rx, _tx) = test_app();
        let quit = apply_intents(
            &mut app,
            vec![
                Intent::Notify(Toast::logged_out()),
                Intent::Navigate(Route::Jobs),
            ],
        );
        assert!(!quit);
        assert_eq!(app.view.route, Route::Jobs);
        assert_eq!(app.toasts.len(), 1);
        assert!(apply_intents(&mut app, vec![Intent::Quit]));
    }

    #[test]
    fn test_scroll_to_section() {
        let (mut app, _rx, _tx) = test_app();
        apply_intents(&mut app, vec![Intent::ScrollTo(LandingSection::Features)]);
        let (page, _) = app.landing_page();
        assert_eq!(app.view.navbar.scroll, page.offset_of(LandingSection::Features));
        assert!(app.view.navbar.is_scrolled());
        apply_intents(&mut app, vec![Intent::ScrollTo(LandingSection::Hero)]);
        assert_eq!(app.view.navbar.scroll, 0);
    }
}
