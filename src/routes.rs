//! Routes, landing anchors, and the intents handlers hand back to the app loop.

use crate::{descriptors::IconToken, toast::Toast};

/// Page addressed by a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Dashboard,
    Resumes,
    Jobs,
    Calendar,
    Search,
    Settings,
    Pricing,
}

impl Route {
    /// Sidebar order of the dashboard pages.
    pub const SIDEBAR: [Route; 7] = [
        Route::Dashboard,
        Route::Resumes,
        Route::Jobs,
        Route::Calendar,
        Route::Search,
        Route::Settings,
        Route::Pricing,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Resumes => "/dashboard/resumes",
            Route::Jobs => "/dashboard/jobs",
            Route::Calendar => "/dashboard/calendar",
            Route::Search => "/dashboard/search",
            Route::Settings => "/dashboard/settings",
            Route::Pricing => "/dashboard/pricing",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        std::iter::once(Route::Home)
            .chain(Route::SIDEBAR)
            .find(|r| r.path() == path)
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Dashboard => "Dashboard",
            Route::Resumes => "Resumes",
            Route::Jobs => "Jobs",
            Route::Calendar => "Calendar",
            Route::Search => "Job Search",
            Route::Settings => "Settings",
            Route::Pricing => "Pricing",
        }
    }

    pub fn icon(self) -> IconToken {
        match self {
            Route::Home | Route::Dashboard => IconToken::Home,
            Route::Resumes => IconToken::FileText,
            Route::Jobs => IconToken::Briefcase,
            Route::Calendar => IconToken::Calendar,
            Route::Search => IconToken::Search,
            Route::Settings => IconToken::Settings,
            Route::Pricing => IconToken::CreditCard,
        }
    }

    pub fn is_dashboard(self) -> bool {
        self != Route::Home
    }
}

/// Scroll targets on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingSection {
    Hero,
    Features,
    HowItWorks,
    Pricing,
    CallToAction,
    Footer,
}

/// Entries of the landing navbar (and its collapsed menu).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarEntry {
    Home,
    Features,
    Pricing,
    Blog,
    Templates,
    Guides,
    LogIn,
    SignUp,
}

impl NavbarEntry {
    pub const ALL: [NavbarEntry; 8] = [
        NavbarEntry::Home,
        NavbarEntry::Features,
        NavbarEntry::Pricing,
        NavbarEntry::Blog,
        NavbarEntry::Templates,
        NavbarEntry::Guides,
        NavbarEntry::LogIn,
        NavbarEntry::SignUp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavbarEntry::Home => "Home",
            NavbarEntry::Features => "Features",
            NavbarEntry::Pricing => "Pricing",
            NavbarEntry::Blog => "Blog",
            NavbarEntry::Templates => "Resume Templates",
            NavbarEntry::Guides => "Job Search Guides",
            NavbarEntry::LogIn => "Log in",
            NavbarEntry::SignUp => "Sign up",
        }
    }
}

/// Side effect requested by a key handler.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    Navigate(Route),
    ScrollTo(LandingSection),
    OpenUrl(String),
    Notify(Toast),
    Quit,
}
