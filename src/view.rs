//! View-state: one independent slice per UI surface.
//!
//! No transition reads or writes a slice other than its own. Closing the
//! mobile menu leaves the modal alone, and switching the resume tab leaves the
//! route alone.

use uuid::Uuid;

use crate::{
    auth::{AuthForm, AuthMode},
    models::ResumeCard,
    routes::Route,
};

/// Top-level screen derived from the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Dashboard,
}

/// Observable phase of the auth modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    OpenLogin,
    OpenSignup,
}

/// Auth modal: closed, or open with a live form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthModal {
    #[default]
    Closed,
    Open(AuthForm),
}

impl AuthModal {
    /// Open with `initial` as the mode and an empty form. Returns the ticket of
    /// a submission that was in flight in the replaced form, if any.
    pub fn open(&mut self, initial: AuthMode) -> Option<Uuid> {
        let previous = std::mem::replace(self, AuthModal::Open(AuthForm::new(initial)));
        tracing::info!(mode = ?initial, "auth modal opened");
        match previous {
            AuthModal::Open(form) => form.pending(),
            AuthModal::Closed => None,
        }
    }

    /// Close and drop the form. Returns the ticket to cancel, if any.
    pub fn close(&mut self) -> Option<Uuid> {
        match std::mem::take(self) {
            AuthModal::Open(form) => {
                tracing::info!("auth modal closed");
                form.pending()
            }
            AuthModal::Closed => None,
        }
    }

    /// Replace the active tab. No-op while closed.
    pub fn set_mode(&mut self, mode: AuthMode) -> bool {
        match self {
            AuthModal::Open(form) => {
                form.set_mode(mode);
                tracing::info!(mode = ?mode, "auth tab switched");
                true
            }
            AuthModal::Closed => false,
        }
    }

    pub fn mode(&self) -> Option<AuthMode> {
        self.form().map(AuthForm::mode)
    }

    pub fn phase(&self) -> ModalPhase {
        match self.mode() {
            None => ModalPhase::Closed,
            Some(AuthMode::Login) => ModalPhase::OpenLogin,
            Some(AuthMode::Signup) => ModalPhase::OpenSignup,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase() != ModalPhase::Closed
    }

    pub fn form(&self) -> Option<&AuthForm> {
        match self {
            AuthModal::Open(form) => Some(form),
            AuthModal::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut AuthForm> {
        match self {
            AuthModal::Open(form) => Some(form),
            AuthModal::Closed => None,
        }
    }
}

/// Landing navbar: collapsed menu and scroll position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    pub menu_open: bool,
    pub menu_cursor: usize,
    pub scroll: u16,
}

impl NavbarState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.menu_cursor = 0;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// The navbar switches to its solid style once the page moved.
    pub fn is_scrolled(&self) -> bool {
        self.scroll > 0
    }
}

/// Filter tabs of the resume gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumeTab {
    #[default]
    All,
    Optimized,
    Templates,
}

impl ResumeTab {
    pub const ALL: [ResumeTab; 3] = [ResumeTab::All, ResumeTab::Optimized, ResumeTab::Templates];

    pub fn label(self) -> &'static str {
        match self {
            ResumeTab::All => "All Resumes",
            ResumeTab::Optimized => "AI Optimized",
            ResumeTab::Templates => "Templates",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ResumeTab::All => ResumeTab::Optimized,
            ResumeTab::Optimized => ResumeTab::Templates,
            ResumeTab::Templates => ResumeTab::All,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ResumeTab::All => ResumeTab::Templates,
            ResumeTab::Optimized => ResumeTab::All,
            ResumeTab::Templates => ResumeTab::Optimized,
        }
    }

    /// Whether a resume card belongs in this tab. The templates tab lists
    /// templates instead of resumes.
    pub fn admits(self, resume: &ResumeCard) -> bool {
        match self {
            ResumeTab::All => true,
            ResumeTab::Optimized => resume.is_ai_optimized,
            ResumeTab::Templates => false,
        }
    }
}

/// Resumes shown under `tab`, in their original order.
pub fn filter_resumes(resumes: &[ResumeCard], tab: ResumeTab) -> Vec<&ResumeCard> {
    resumes.iter().filter(|r| tab.admits(r)).collect()
}

/// Dashboard shell: sidebar, mobile menu, resume tab and list cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardState {
    pub sidebar_open: bool,
    pub mobile_menu_open: bool,
    pub menu_cursor: usize,
    pub resume_tab: ResumeTab,
    /// Highlighted item on the current page.
    pub cursor: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            mobile_menu_open: false,
            menu_cursor: 0,
            resume_tab: ResumeTab::All,
            cursor: 0,
        }
    }
}

impl DashboardState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.menu_cursor = 0;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn set_active_filter_tab(&mut self, tab: ResumeTab) {
        if self.resume_tab != tab {
            self.resume_tab = tab;
            self.cursor = 0;
        }
    }

    /// Move the cursor within `0..len`.
    pub fn move_cursor(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }
}

/// All view-state of the running app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub route: Route,
    pub auth: AuthModal,
    pub navbar: NavbarState,
    pub dashboard: DashboardState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            route: Route::Home,
            auth: AuthModal::Closed,
            navbar: NavbarState::default(),
            dashboard: DashboardState::default(),
        }
    }
}

impl ViewState {
    pub fn screen(&self) -> Screen {
        if self.route.is_dashboard() {
            Screen::Dashboard
        } else {
            Screen::Landing
        }
    }

    /// Switch pages; the page cursor starts over.
    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            tracing::info!(from = self.route.path(), to = route.path(), "navigate");
            self.route = route;
            self.dashboard.cursor = 0;
        }
        if route == Route::Home {
            self.navbar.scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(name: &str, optimized: bool) -> ResumeCard {
        ResumeCard {
            name: name.into(),
            preview: String::new(),
            last_edited: String::new(),
            match_score: None,
            is_ai_optimized: optimized,
            is_selected: false,
        }
    }

    #[test]
    fn test_modal_state_machine() {
        let mut modal = AuthModal::default();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.set_mode(AuthMode::Signup));
        assert_eq!(modal.phase(), ModalPhase::Closed);

        modal.open(AuthMode::Login);
        assert_eq!(modal.phase(), ModalPhase::OpenLogin);
        assert!(modal.is_open());
        assert!(modal.set_mode(AuthMode::Signup));
        assert_eq!(modal.phase(), ModalPhase::OpenSignup);
        assert!(modal.set_mode(AuthMode::Login));
        assert_eq!(modal.phase(), ModalPhase::OpenLogin);

        modal.close();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_reopen_uses_new_initial_mode() {
        let mut modal = AuthModal::default();
        modal.open(AuthMode::Login);
        modal.close();
        modal.open(AuthMode::Signup);
        assert_eq!(modal.mode(), Some(AuthMode::Signup));

        // Prior tab choice never survives a reopen.
        modal.set_mode(AuthMode::Signup);
        modal.close();
        modal.open(AuthMode::Login);
        assert_eq!(modal.mode(), Some(AuthMode::Login));
    }

    #[test]
    fn test_reopen_clears_fields() {
        let mut modal = AuthModal::default();
        modal.open(AuthMode::Login);
        if let Some(form) = modal.form_mut() {
            form.focused_input_mut().insert_char('x');
        }
        modal.close();
        modal.open(AuthMode::Login);
        let form = modal.form().unwrap();
        assert_eq!(form.input(crate::auth::Field::Email).value(), "");
    }

    #[test]
    fn test_close_returns_pending_ticket() {
        let mut modal = AuthModal::default();
        assert_eq!(modal.close(), None);
        modal.open(AuthMode::Login);
        let form = modal.form_mut().unwrap();
        "a@b.c".chars().for_each(|c| form.focused_input_mut().insert_char(c));
        form.focus_next();
        form.focused_input_mut().insert_char('p');
        let (ticket, _) = form.begin_submit().unwrap();
        assert_eq!(modal.close(), Some(ticket));
    }

    #[test]
    fn test_menu_toggle_independent_of_modal() {
        let mut view = ViewState::default();
        view.auth.open(AuthMode::Signup);
        view.navbar.toggle_menu();
        view.navbar.close_menu();
        view.dashboard.toggle_mobile_menu();
        view.dashboard.close_mobile_menu();
        assert_eq!(view.auth.phase(), ModalPhase::OpenSignup);
    }

    #[test]
    fn test_filter_optimized_is_stable_subset() {
        let resumes = vec![
            resume("a", true),
            resume("b", false),
            resume("c", true),
            resume("d", false),
            resume("e", true),
        ];
        let names: Vec<_> = filter_resumes(&resumes, ResumeTab::Optimized)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c", "e"]);
        assert_eq!(filter_resumes(&resumes, ResumeTab::All).len(), 5);
        assert!(filter_resumes(&resumes, ResumeTab::Templates).is_empty());
        // Input untouched.
        assert_eq!(resumes.len(), 5);
    }

    #[test]
    fn test_tab_cycle() {
        let mut tab = ResumeTab::All;
        for _ in 0..3 {
            tab = tab.next();
        }
        assert_eq!(tab, ResumeTab::All);
        assert_eq!(ResumeTab::All.prev(), ResumeTab::Templates);
    }

    #[test]
    fn test_set_filter_tab_resets_cursor_only() {
        let mut dash = DashboardState {
            cursor: 2,
            ..DashboardState::default()
        };
        dash.set_active_filter_tab(ResumeTab::Optimized);
        assert_eq!(dash.cursor, 0);
        assert!(dash.sidebar_open);
        assert!(!dash.mobile_menu_open);
    }

    #[test]
    fn test_cursor_clamps() {
        let mut dash = DashboardState::default();
        dash.move_cursor(5, 3);
        assert_eq!(dash.cursor, 2);
        dash.move_cursor(-10, 3);
        assert_eq!(dash.cursor, 0);
        dash.move_cursor(1, 0);
        assert_eq!(dash.cursor, 0);
    }

    #[test]
    fn test_navbar_scroll_flag() {
        let mut nav = NavbarState::default();
        assert!(!nav.is_scrolled());
        nav.scroll_by(3);
        assert!(nav.is_scrolled());
        nav.scroll_by(-10);
        assert_eq!(nav.scroll, 0);
    }

    #[test]
    fn test_navigate_home_resets_scroll() {
        let mut view = ViewState::default();
        view.navbar.scroll_by(12);
        view.navigate(Route::Jobs);
        assert_eq!(view.screen(), Screen::Dashboard);
        view.navigate(Route::Home);
        assert_eq!(view.screen(), Screen::Landing);
        assert_eq!(view.navbar.scroll, 0);
    }
}
