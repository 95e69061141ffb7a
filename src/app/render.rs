//! Frame composition: screen, overlays, help bar.

use ratatui::{
    Frame,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    layout,
    routes::Route,
    shortcuts::format_keys,
    view::Screen,
    widgets::{auth_modal, dashboard, landing, toasts},
};

use super::App;

/// Draw the whole frame.
pub fn draw(f: &mut Frame, app: &App) {
    let main = layout::create_main_layout(f.area());

    match app.view.screen() {
        Screen::Landing => draw_landing(f, app, &main),
        Screen::Dashboard => draw_dashboard(f, app, &main),
    }

    let help = Paragraph::new(help_text(app))
        .block(Block::default().borders(Borders::ALL).title("HELP"))
        .wrap(Wrap { trim: true });
    f.render_widget(help, main.help_bar);

    if let Some(form) = app.view.auth.form() {
        auth_modal::render_auth_modal(f, f.area(), form, app.tick);
    }
    toasts::render_toasts(f, f.area(), &app.toasts);
}

fn draw_landing(f: &mut Frame, app: &App, main: &layout::MainLayout) {
    landing::render_navbar(f, main.top_bar, &app.view.navbar);
    let page = landing::LandingPage::build(main.body.width, &app.data.plans, app.tick);
    landing::render_landing(f, main.body, page, app.view.navbar.scroll);
    if app.view.navbar.menu_open {
        landing::render_navbar_menu(f, main.body, app.view.navbar.menu_cursor);
    }
}

fn draw_dashboard(f: &mut Frame, app: &App, main: &layout::MainLayout) {
    let compact = layout::is_compact(main.body.width);
    let dash = &app.view.dashboard;
    dashboard::render_header(f, main.top_bar, &app.cfg.user, compact);

    let shell = layout::create_shell_layout(main.body, dash.sidebar_open && !compact);
    if let Some(sidebar) = shell.sidebar {
        dashboard::render_sidebar(f, sidebar, app.view.route);
    }
    dashboard::render_page(
        f,
        shell.content,
        app.view.route,
        &app.cfg,
        &app.data,
        dash,
        app.tick,
    );
    if dash.mobile_menu_open {
        dashboard::render_mobile_menu(f, main.body, app.view.route, dash.menu_cursor);
    }
}

/// Key hints for whatever currently has input focus.
fn help_text(app: &App) -> String {
    let sc = &app.shortcuts;
    if app.view.auth.is_open() {
        let m = &sc.auth_modal;
        return format!(
            "{}: submit  {}: next field  {}: prev field  {}: switch log in/sign up  {}: close",
            format_keys(&m.submit),
            format_keys(&m.next_field),
            format_keys(&m.prev_field),
            format_keys(&m.switch_mode),
            format_keys(&m.close),
        );
    }
    match app.view.screen() {
        Screen::Landing => {
            let l = &sc.landing;
            if app.view.navbar.menu_open {
                return format!(
                    "{}/{}: move  {}: open  {}: close menu",
                    format_keys(&l.down),
                    format_keys(&l.up),
                    format_keys(&l.select),
                    format_keys(&l.close),
                );
            }
            format!(
                "{}: account  {}: log in  {}: sign up  {}: get started  {}: demo  {}: features  {}: pricing  {}: contact sales  {}/{}: scroll  {}: menu  {}: quit",
                format_keys(&l.select),
                format_keys(&l.login),
                format_keys(&l.signup),
                format_keys(&l.get_started),
                format_keys(&l.demo),
                format_keys(&l.features),
                format_keys(&l.pricing),
                format_keys(&l.contact_sales),
                format_keys(&l.down),
                format_keys(&l.up),
                format_keys(&l.menu),
                format_keys(&l.quit),
            )
        }
        Screen::Dashboard => {
            let d = &sc.dashboard;
            if app.view.dashboard.mobile_menu_open {
                return format!(
                    "{}/{}: move  {}: open  {}: close menu",
                    format_keys(&d.down),
                    format_keys(&d.up),
                    format_keys(&d.select),
                    format_keys(&d.close),
                );
            }
            let page = match app.view.route {
                Route::Dashboard | Route::Resumes => format!(
                    "{}/{}: resume tab  {}: upload resume  ",
                    format_keys(&d.next_tab),
                    format_keys(&d.prev_tab),
                    format_keys(&d.upload_resume),
                ),
                Route::Jobs => format!(
                    "{}: open posting  {}: add job  ",
                    format_keys(&d.open_link),
                    format_keys(&d.add_job),
                ),
                _ => String::new(),
            };
            format!(
                "{}/{}: move  {}: select  {page}{}: sidebar  {}: menu  {}: home  {}: log out  {}: quit",
                format_keys(&d.down),
                format_keys(&d.up),
                format_keys(&d.select),
                format_keys(&d.sidebar),
                format_keys(&d.menu),
                format_keys(&d.home),
                format_keys(&d.logout),
                format_keys(&d.quit),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_app;
    use super::*;
    use crate::{auth::AuthMode, toast::Toast};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_landing_frame() {
        let (app, _rx, _tx) = test_app();
        let text = render(&app, 120, 40);
        assert!(text.contains("SmartJobber"));
        assert!(text.contains("Now in Beta"));
        assert!(text.contains("HELP"));
        assert!(text.contains("c: contact sales"));
    }

    #[test]
    fn test_dashboard_frame_with_sidebar() {
        let (mut app, _rx, _tx) = test_app();
        app.view.navigate(Route::Jobs);
        let text = render(&app, 140, 40);
        assert!(text.contains("Job Tracker"));
        assert!(text.contains("Log Out"));
        assert!(text.contains("John Doe"));
    }

    #[test]
    fn test_compact_dashboard_hides_sidebar() {
        let (mut app, _rx, _tx) = test_app();
        app.view.navigate(Route::Jobs);
        let text = render(&app, 80, 40);
        assert!(!text.contains("Log Out"));
    }

    #[test]
    fn test_overlays_on_top() {
        let (mut app, _rx, _tx) = test_app();
        app.view.auth.open(AuthMode::Signup);
        app.notify(Toast::coming_soon());
        let text = render(&app, 120, 40);
        assert!(text.contains("Create an account"));
        assert!(text.contains("Coming Soon"));
        assert!(text.contains("switch log in/sign up"));
    }
}
