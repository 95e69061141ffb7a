//! Key handlers. Each returns the intents the loop should apply.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    auth::AuthMode,
    descriptors::Describe,
    routes::{Intent, LandingSection, NavbarEntry, Route},
    shortcuts::matches_shortcut,
    toast::Toast,
    view::Screen,
    widgets::{
        dashboard::SidebarItem,
        resume_gallery::{GalleryItem, gallery_view},
    },
    worker::WorkerCmd,
};

use super::App;

/// Handle one key press.
pub async fn handle_key(app: &mut App, k: KeyEvent) -> Result<Vec<Intent>> {
    if app.view.auth.is_open() {
        return handle_auth_key(app, k).await;
    }
    match app.view.screen() {
        Screen::Landing => handle_landing_key(app, k).await,
        Screen::Dashboard => Ok(handle_dashboard_key(app, k)),
    }
}

pub fn is_ctrl_c(k: &KeyEvent) -> bool {
    k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c')
}

/// Open the modal on `mode`, cancelling whatever the old form had in flight.
async fn open_auth(app: &mut App, mode: AuthMode) -> Result<()> {
    if let Some(ticket) = app.view.auth.open(mode) {
        app.worker_tx.send(WorkerCmd::CancelAuth { ticket }).await?;
    }
    Ok(())
}

async fn close_auth(app: &mut App) -> Result<()> {
    if let Some(ticket) = app.view.auth.close() {
        app.worker_tx.send(WorkerCmd::CancelAuth { ticket }).await?;
    }
    Ok(())
}

async fn handle_landing_key(app: &mut App, k: KeyEvent) -> Result<Vec<Intent>> {
    let sc = &app.shortcuts.landing;

    if app.view.navbar.menu_open {
        if matches_shortcut(&k, &sc.close) || matches_shortcut(&k, &sc.menu) {
            app.view.navbar.close_menu();
        } else if matches_shortcut(&k, &sc.down) {
            let last = NavbarEntry::ALL.len() - 1;
            app.view.navbar.menu_cursor = (app.view.navbar.menu_cursor + 1).min(last);
        } else if matches_shortcut(&k, &sc.up) {
            app.view.navbar.menu_cursor = app.view.navbar.menu_cursor.saturating_sub(1);
        } else if matches_shortcut(&k, &sc.select) {
            let entry = NavbarEntry::ALL[app.view.navbar.menu_cursor.min(NavbarEntry::ALL.len() - 1)];
            app.view.navbar.close_menu();
            return navbar_entry(app, entry).await;
        }
        return Ok(vec![]);
    }

    let intents = if matches_shortcut(&k, &sc.quit) {
        vec![Intent::Quit]
    } else if matches_shortcut(&k, &sc.login) {
        open_auth(app, AuthMode::Login).await?;
        vec![]
    } else if matches_shortcut(&k, &sc.signup) {
        open_auth(app, AuthMode::Signup).await?;
        vec![]
    } else if matches_shortcut(&k, &sc.menu) {
        app.view.navbar.toggle_menu();
        vec![]
    } else if matches_shortcut(&k, &sc.down) || matches_shortcut(&k, &sc.up) {
        let delta = if matches_shortcut(&k, &sc.down) { 1 } else { -1 };
        let (page, rows) = app.landing_page();
        app.view.navbar.scroll_by(delta);
        app.view.navbar.scroll = app.view.navbar.scroll.min(page.max_scroll(rows));
        vec![]
    } else if matches_shortcut(&k, &sc.select) {
        let mode = app.cfg.app.initial_auth_mode;
        open_auth(app, mode).await?;
        vec![]
    } else if matches_shortcut(&k, &sc.get_started) {
        vec![Intent::Navigate(Route::Dashboard)]
    } else if matches_shortcut(&k, &sc.demo) {
        vec![Intent::Notify(Toast::coming_soon())]
    } else if matches_shortcut(&k, &sc.features) {
        vec![Intent::ScrollTo(LandingSection::Features)]
    } else if matches_shortcut(&k, &sc.pricing) {
        vec![Intent::ScrollTo(LandingSection::Pricing)]
    } else if matches_shortcut(&k, &sc.contact_sales) {
        vec![Intent::Notify(Toast::coming_soon())]
    } else {
        vec![]
    };
    Ok(intents)
}

async fn navbar_entry(app: &mut App, entry: NavbarEntry) -> Result<Vec<Intent>> {
    let intents = match entry {
        NavbarEntry::Home => vec![Intent::ScrollTo(LandingSection::Hero)],
        NavbarEntry::Features => vec![Intent::ScrollTo(LandingSection::Features)],
        NavbarEntry::Pricing => vec![Intent::ScrollTo(LandingSection::Pricing)],
        NavbarEntry::Blog | NavbarEntry::Templates | NavbarEntry::Guides => {
            vec![Intent::Notify(Toast::coming_soon())]
        }
        NavbarEntry::LogIn => {
            open_auth(app, AuthMode::Login).await?;
            vec![]
        }
        NavbarEntry::SignUp => {
            open_auth(app, AuthMode::Signup).await?;
            vec![]
        }
    };
    Ok(intents)
}

/// Number of selectable items on the current dashboard page.
fn page_len(app: &App) -> usize {
    let data = &app.data;
    match app.view.route {
        Route::Home | Route::Dashboard => match app.cfg.app.job_preview_limit {
            0 => data.jobs.len(),
            limit => data.jobs.len().min(limit),
        },
        Route::Jobs => data.jobs.len(),
        Route::Resumes => {
            gallery_view(&data.resumes, &data.templates, app.view.dashboard.resume_tab)
                .items
                .len()
        }
        Route::Pricing => data.plans.len(),
        Route::Calendar | Route::Search | Route::Settings => 0,
    }
}

fn logout() -> Vec<Intent> {
    tracing::info!("logout");
    vec![Intent::Notify(Toast::logged_out()), Intent::Navigate(Route::Home)]
}

fn sidebar_item(app: &mut App, item: SidebarItem) -> Vec<Intent> {
    app.view.dashboard.close_mobile_menu();
    match item {
        SidebarItem::Page(route) => vec![Intent::Navigate(route)],
        SidebarItem::LogOut => logout(),
    }
}

/// Posting link of the job under the cursor.
fn open_job_link(app: &App) -> Vec<Intent> {
    if !matches!(app.view.route, Route::Dashboard | Route::Jobs) {
        return vec![];
    }
    let Some(job) = app.data.jobs.get(app.view.dashboard.cursor) else {
        return vec![];
    };
    let status = job.status.descriptor();
    tracing::info!(
        company = %job.company,
        status = status.label,
        tone = status.color.family(),
        "job posting requested"
    );
    match job.url.clone() {
        Some(url) => vec![Intent::OpenUrl(url)],
        None => vec![Intent::Notify(Toast::new(
            "No posting link",
            "This application has no job posting URL.",
        ))],
    }
}

/// Enter on the current page.
fn select_item(app: &App) -> Vec<Intent> {
    match app.view.route {
        Route::Dashboard | Route::Jobs => open_job_link(app),
        Route::Resumes => {
            let view = gallery_view(
                &app.data.resumes,
                &app.data.templates,
                app.view.dashboard.resume_tab,
            );
            match view.items.get(app.view.dashboard.cursor) {
                Some(GalleryItem::Resume { resume, .. }) => {
                    tracing::info!(resume = %resume.name, "resume selected");
                    vec![Intent::Notify(Toast::coming_soon())]
                }
                Some(GalleryItem::Template { .. } | GalleryItem::Create) => {
                    vec![Intent::Notify(Toast::coming_soon())]
                }
                None if view.empty.is_some() => vec![Intent::Notify(Toast::coming_soon())],
                None => vec![],
            }
        }
        Route::Pricing => vec![Intent::Notify(Toast::coming_soon())],
        Route::Settings => vec![Intent::Navigate(Route::Pricing)],
        Route::Home | Route::Calendar | Route::Search => vec![],
    }
}

fn handle_dashboard_key(app: &mut App, k: KeyEvent) -> Vec<Intent> {
    let sc = &app.shortcuts.dashboard;

    if app.view.dashboard.mobile_menu_open {
        if matches_shortcut(&k, &sc.close) || matches_shortcut(&k, &sc.menu) {
            app.view.dashboard.close_mobile_menu();
        } else if matches_shortcut(&k, &sc.down) {
            let last = SidebarItem::ALL.len() - 1;
            app.view.dashboard.menu_cursor = (app.view.dashboard.menu_cursor + 1).min(last);
        } else if matches_shortcut(&k, &sc.up) {
            app.view.dashboard.menu_cursor = app.view.dashboard.menu_cursor.saturating_sub(1);
        } else if matches_shortcut(&k, &sc.select) {
            let idx = app.view.dashboard.menu_cursor.min(SidebarItem::ALL.len() - 1);
            return sidebar_item(app, SidebarItem::ALL[idx]);
        }
        return vec![];
    }

    if matches_shortcut(&k, &sc.quit) {
        vec![Intent::Quit]
    } else if matches_shortcut(&k, &sc.home) {
        vec![Intent::Navigate(Route::Home)]
    } else if matches_shortcut(&k, &sc.logout) {
        logout()
    } else if matches_shortcut(&k, &sc.sidebar) {
        app.view.dashboard.toggle_sidebar();
        vec![]
    } else if matches_shortcut(&k, &sc.menu) {
        app.view.dashboard.toggle_mobile_menu();
        vec![]
    } else if matches_shortcut(&k, &sc.down) {
        let len = page_len(app);
        app.view.dashboard.move_cursor(1, len);
        vec![]
    } else if matches_shortcut(&k, &sc.up) {
        let len = page_len(app);
        app.view.dashboard.move_cursor(-1, len);
        vec![]
    } else if matches_shortcut(&k, &sc.next_tab) || matches_shortcut(&k, &sc.prev_tab) {
        if matches!(app.view.route, Route::Dashboard | Route::Resumes) {
            let tab = app.view.dashboard.resume_tab;
            let tab = if matches_shortcut(&k, &sc.next_tab) {
                tab.next()
            } else {
                tab.prev()
            };
            app.view.dashboard.set_active_filter_tab(tab);
        }
        vec![]
    } else if matches_shortcut(&k, &sc.select) {
        select_item(app)
    } else if matches_shortcut(&k, &sc.open_link) {
        open_job_link(app)
    } else if matches_shortcut(&k, &sc.upload_resume) || matches_shortcut(&k, &sc.add_job) {
        vec![Intent::Notify(Toast::coming_soon())]
    } else {
        vec![]
    }
}

async fn handle_auth_key(app: &mut App, k: KeyEvent) -> Result<Vec<Intent>> {
    let sc = &app.shortcuts.auth_modal;
    if matches_shortcut(&k, &sc.close) {
        close_auth(app).await?;
        return Ok(vec![]);
    }

    let switch_mode = matches_shortcut(&k, &sc.switch_mode);
    let submit = matches_shortcut(&k, &sc.submit);
    let next_field = matches_shortcut(&k, &sc.next_field);
    let prev_field = matches_shortcut(&k, &sc.prev_field);
    let ti = &app.shortcuts.text_input;
    let edit = TextEdit::classify(&k, ti);

    let Some(form) = app.view.auth.form_mut() else {
        return Ok(vec![]);
    };
    // The form is frozen while a submission is in flight.
    if form.is_submitting() {
        return Ok(vec![]);
    }

    if switch_mode {
        let mode = form.mode().toggled();
        app.view.auth.set_mode(mode);
    } else if submit {
        match form.begin_submit() {
            Ok((ticket, credentials)) => {
                let mode = form.mode();
                app.worker_tx
                    .send(WorkerCmd::SubmitAuth {
                        ticket,
                        mode,
                        credentials,
                    })
                    .await?;
            }
            Err(e) => tracing::warn!("auth form rejected: {e}"),
        }
    } else if next_field {
        form.focus_next();
    } else if prev_field {
        form.focus_prev();
    } else if let Some(edit) = edit {
        edit.apply(form.focused_input_mut());
    }
    Ok(vec![])
}

/// Editing action on the focused text field.
enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    ClearLine,
}

impl TextEdit {
    fn classify(k: &KeyEvent, sc: &crate::shortcuts::TextInputShortcuts) -> Option<Self> {
        let edit = if matches_shortcut(k, &sc.backspace) {
            TextEdit::Backspace
        } else if matches_shortcut(k, &sc.delete) {
            TextEdit::Delete
        } else if matches_shortcut(k, &sc.left) {
            TextEdit::Left
        } else if matches_shortcut(k, &sc.right) {
            TextEdit::Right
        } else if matches_shortcut(k, &sc.home) {
            TextEdit::Home
        } else if matches_shortcut(k, &sc.end) {
            TextEdit::End
        } else if matches_shortcut(k, &sc.clear_line) {
            TextEdit::ClearLine
        } else if let KeyCode::Char(c) = k.code
            && !k.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            TextEdit::Insert(c)
        } else {
            return None;
        };
        Some(edit)
    }

    fn apply(self, input: &mut crate::input::TextInput) {
        match self {
            TextEdit::Insert(c) => input.insert_char(c),
            TextEdit::Backspace => input.backspace(),
            TextEdit::Delete => input.delete(),
            TextEdit::Left => input.move_left(),
            TextEdit::Right => input.move_right(),
            TextEdit::Home => input.move_home(),
            TextEdit::End => input.move_end(),
            TextEdit::ClearLine => input.clear_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;
    use crate::{auth::Field, view::ModalPhase};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_landing_opens_modal_with_mode() {
        let (mut app, _rx, _tx) = test_app();
        handle_key(&mut app, key(KeyCode::Char('s'))).await.unwrap();
        assert_eq!(app.view.auth.phase(), ModalPhase::OpenSignup);

        // Letters now go to the form, not the landing bindings.
        handle_key(&mut app, key(KeyCode::Char('q'))).await.unwrap();
        assert_eq!(
            app.view.auth.form().unwrap().input(Field::Name).value(),
            "q"
        );

        handle_key(&mut app, ctrl('t')).await.unwrap();
        assert_eq!(app.view.auth.phase(), ModalPhase::OpenLogin);

        handle_key(&mut app, key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.view.auth.phase(), ModalPhase::Closed);

        handle_key(&mut app, key(KeyCode::Char('l'))).await.unwrap();
        assert_eq!(app.view.auth.phase(), ModalPhase::OpenLogin);
        assert_eq!(
            app.view.auth.form().unwrap().input(Field::Name).value(),
            ""
        );
    }

    #[tokio::test]
    async fn test_submit_sends_command_and_close_cancels() {
        let (mut app, mut rx, _tx) = test_app();
        handle_key(&mut app, key(KeyCode::Char('l'))).await.unwrap();
        type_text(&mut app, "jane@doe.io").await;
        handle_key(&mut app, key(KeyCode::Tab)).await.unwrap();
        type_text(&mut app, "hunter22").await;
        handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();

        let Some(WorkerCmd::SubmitAuth {
            ticket,
            mode,
            credentials,
        }) = rx.recv().await
        else {
            panic!("expected a submit command");
        };
        assert_eq!(mode, AuthMode::Login);
        assert_eq!(credentials.email, "jane@doe.io");
        assert!(app.view.auth.form().unwrap().is_submitting());

        // Typing is ignored mid-submit.
        type_text(&mut app, "zz").await;
        assert_eq!(
            app.view.auth.form().unwrap().input(Field::Password).value(),
            "hunter22"
        );

        handle_key(&mut app, key(KeyCode::Esc)).await.unwrap();
        match rx.recv().await {
            Some(WorkerCmd::CancelAuth { ticket: cancelled }) => assert_eq!(cancelled, ticket),
            other => panic!("expected cancel, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_submit_stays_local() {
        let (mut app, mut rx, _tx) = test_app();
        handle_key(&mut app, key(KeyCode::Char('l'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();
        let form = app.view.auth.form().unwrap();
        assert_eq!(form.error(), Some("Email is required"));
        assert!(!form.is_submitting());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_landing_actions() {
        let (mut app, _rx, _tx) = test_app();
        let intents = handle_key(&mut app, key(KeyCode::Char('d'))).await.unwrap();
        assert_eq!(intents, vec![Intent::Notify(Toast::coming_soon())]);
        let intents = handle_key(&mut app, key(KeyCode::Char('g'))).await.unwrap();
        assert_eq!(intents, vec![Intent::Navigate(Route::Dashboard)]);
        let intents = handle_key(&mut app, key(KeyCode::Char('p'))).await.unwrap();
        assert_eq!(intents, vec![Intent::ScrollTo(LandingSection::Pricing)]);

        handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        assert!(app.view.navbar.is_scrolled());
    }

    #[tokio::test]
    async fn test_contact_sales_is_coming_soon() {
        let (mut app, _rx, _tx) = test_app();
        let intents = handle_key(&mut app, key(KeyCode::Char('c'))).await.unwrap();
        assert_eq!(intents, vec![Intent::Notify(Toast::coming_soon())]);
        assert!(!app.view.auth.is_open());
        assert_eq!(app.view.route, Route::Home);
    }

    #[tokio::test]
    async fn test_navbar_menu_entry_closes_menu() {
        let (mut app, _rx, _tx) = test_app();
        handle_key(&mut app, key(KeyCode::Char('m'))).await.unwrap();
        assert!(app.view.navbar.menu_open);
        // Home, Features, Pricing, Blog
        for _ in 0..3 {
            handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        }
        let intents = handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(intents, vec![Intent::Notify(Toast::coming_soon())]);
        assert!(!app.view.navbar.menu_open);
        assert!(!app.view.auth.is_open());
    }

    #[tokio::test]
    async fn test_dashboard_logout_and_tabs() {
        let (mut app, _rx, _tx) = test_app();
        app.view.navigate(Route::Resumes);

        handle_key(&mut app, key(KeyCode::Tab)).await.unwrap();
        assert_eq!(
            app.view.dashboard.resume_tab,
            crate::view::ResumeTab::Optimized
        );
        handle_key(&mut app, key(KeyCode::BackTab)).await.unwrap();
        assert_eq!(app.view.dashboard.resume_tab, crate::view::ResumeTab::All);

        // Two resumes plus the create card.
        for _ in 0..5 {
            handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        }
        assert_eq!(app.view.dashboard.cursor, 2);

        let intents = handle_key(&mut app, key(KeyCode::Char('x'))).await.unwrap();
        assert_eq!(
            intents,
            vec![Intent::Notify(Toast::logged_out()), Intent::Navigate(Route::Home)]
        );
    }

    #[tokio::test]
    async fn test_mobile_menu_navigates() {
        let (mut app, _rx, _tx) = test_app();
        app.view.navigate(Route::Dashboard);
        handle_key(&mut app, key(KeyCode::Char('m'))).await.unwrap();
        handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        handle_key(&mut app, key(KeyCode::Down)).await.unwrap();
        let intents = handle_key(&mut app, key(KeyCode::Enter)).await.unwrap();
        assert_eq!(intents, vec![Intent::Navigate(Route::Jobs)]);
        assert!(!app.view.dashboard.mobile_menu_open);
        assert!(app.view.dashboard.sidebar_open);
    }

    #[tokio::test]
    async fn test_open_link_without_url_notifies() {
        let (mut app, _rx, _tx) = test_app();
        app.view.navigate(Route::Jobs);
        let intents = handle_key(&mut app, key(KeyCode::Char('o'))).await.unwrap();
        assert!(matches!(intents.as_slice(), [Intent::Notify(_)]));

        app.data.jobs[0].url = Some("https://example.com/jobs/1".into());
        let intents = handle_key(&mut app, key(KeyCode::Char('o'))).await.unwrap();
        assert_eq!(
            intents,
            vec![Intent::OpenUrl("https://example.com/jobs/1".into())]
        );
    }
}
