//! Display descriptors (label, color, icon) for every tagged enum on screen.
//!
//! Every lookup below is an exhaustive `match` without a wildcard arm, so a new
//! variant does not compile until its descriptor is written.

use ratatui::style::Color;
use serde::Deserialize;

use crate::{
    auth::AuthMode,
    models::{JobStatus, UpcomingKind},
    plans::SubscriptionTier,
};

/// Named color families used by badges and borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Blue,
    Purple,
    Green,
    Red,
    Amber,
    Emerald,
    Pink,
    Brand,
    Muted,
}

impl ColorToken {
    /// Terminal color for this family.
    pub fn color(self) -> Color {
        match self {
            ColorToken::Blue => Color::Rgb(59, 130, 246),
            ColorToken::Purple => Color::Rgb(168, 85, 247),
            ColorToken::Green => Color::Rgb(34, 197, 94),
            ColorToken::Red => Color::Rgb(239, 68, 68),
            ColorToken::Amber => Color::Rgb(245, 158, 11),
            ColorToken::Emerald => Color::Rgb(16, 185, 129),
            ColorToken::Pink => Color::Rgb(236, 72, 153),
            ColorToken::Brand => Color::Rgb(2, 132, 199),
            ColorToken::Muted => Color::Rgb(113, 113, 122),
        }
    }

    /// Family name, as written to the log.
    pub fn family(self) -> &'static str {
        match self {
            ColorToken::Blue => "blue",
            ColorToken::Purple => "purple",
            ColorToken::Green => "green",
            ColorToken::Red => "red",
            ColorToken::Amber => "amber",
            ColorToken::Emerald => "emerald",
            ColorToken::Pink => "pink",
            ColorToken::Brand => "brand",
            ColorToken::Muted => "muted",
        }
    }
}

/// Glyphs standing in for the product's icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconToken {
    Clock,
    Calendar,
    CheckCircle,
    XCircle,
    AlertCircle,
    Check,
    Cross,
    Star,
    StarHalf,
    Briefcase,
    FileText,
    Target,
    Zap,
    CreditCard,
    Sparkles,
    TrendUp,
    TrendDown,
    Building,
    MapPin,
    Dollar,
    Mail,
    Lock,
    User,
    Home,
    Search,
    Settings,
    LogOut,
    Menu,
    Close,
}

impl IconToken {
    /// Single-width glyph drawn in front of labels.
    pub fn glyph(self) -> &'static str {
        match self {
            IconToken::Clock => "◷",
            IconToken::Calendar => "▦",
            IconToken::CheckCircle => "✔",
            IconToken::XCircle => "✖",
            IconToken::AlertCircle => "!",
            IconToken::Check => "✓",
            IconToken::Cross => "✗",
            IconToken::Star => "★",
            IconToken::StarHalf => "☆",
            IconToken::Briefcase => "▣",
            IconToken::FileText => "≡",
            IconToken::Target => "◎",
            IconToken::Zap => "ϟ",
            IconToken::CreditCard => "▭",
            IconToken::Sparkles => "✦",
            IconToken::TrendUp => "↗",
            IconToken::TrendDown => "↘",
            IconToken::Building => "▤",
            IconToken::MapPin => "⌖",
            IconToken::Dollar => "$",
            IconToken::Mail => "@",
            IconToken::Lock => "*",
            IconToken::User => "☺",
            IconToken::Home => "⌂",
            IconToken::Search => "⌕",
            IconToken::Settings => "⚙",
            IconToken::LogOut => "⇥",
            IconToken::Menu => "☰",
            IconToken::Close => "✕",
        }
    }
}

/// Display metadata attached to one enum tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descriptor {
    pub label: &'static str,
    pub color: ColorToken,
    pub icon: IconToken,
}

impl Descriptor {
    const fn new(label: &'static str, color: ColorToken, icon: IconToken) -> Self {
        Self { label, color, icon }
    }

    /// "glyph label" as drawn inside badges.
    pub fn badge_text(&self) -> String {
        format!("{} {}", self.icon.glyph(), self.label)
    }
}

/// Lookup from a closed enum to its descriptor.
pub trait Describe {
    fn descriptor(self) -> Descriptor;
}

impl Describe for JobStatus {
    fn descriptor(self) -> Descriptor {
        match self {
            JobStatus::Applied => Descriptor::new("Applied", ColorToken::Blue, IconToken::Clock),
            JobStatus::Interview => {
                Descriptor::new("Interview", ColorToken::Purple, IconToken::Calendar)
            }
            JobStatus::Offer => Descriptor::new("Offer", ColorToken::Green, IconToken::CheckCircle),
            JobStatus::Rejected => Descriptor::new("Rejected", ColorToken::Red, IconToken::XCircle),
            JobStatus::Saved => Descriptor::new("Saved", ColorToken::Amber, IconToken::AlertCircle),
        }
    }
}

impl Describe for AuthMode {
    fn descriptor(self) -> Descriptor {
        match self {
            AuthMode::Login => Descriptor::new("Log in", ColorToken::Brand, IconToken::Lock),
            AuthMode::Signup => Descriptor::new("Sign up", ColorToken::Brand, IconToken::User),
        }
    }
}

impl Describe for SubscriptionTier {
    fn descriptor(self) -> Descriptor {
        match self {
            SubscriptionTier::Free => {
                Descriptor::new("Free", ColorToken::Muted, IconToken::CreditCard)
            }
            SubscriptionTier::Professional => {
                Descriptor::new("Professional", ColorToken::Brand, IconToken::Zap)
            }
            SubscriptionTier::Premium => {
                Descriptor::new("Premium", ColorToken::Purple, IconToken::Sparkles)
            }
        }
    }
}

impl Describe for UpcomingKind {
    fn descriptor(self) -> Descriptor {
        match self {
            UpcomingKind::Interview => {
                Descriptor::new("Interview", ColorToken::Blue, IconToken::Calendar)
            }
            UpcomingKind::FollowUp => {
                Descriptor::new("Follow-up Reminder", ColorToken::Purple, IconToken::Clock)
            }
            UpcomingKind::Deadline => {
                Descriptor::new("Application Deadline", ColorToken::Amber, IconToken::AlertCircle)
            }
        }
    }
}

/// Whether a plan feature is part of the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureMark {
    Included,
    Excluded,
}

impl From<bool> for FeatureMark {
    fn from(included: bool) -> Self {
        if included {
            FeatureMark::Included
        } else {
            FeatureMark::Excluded
        }
    }
}

impl Describe for FeatureMark {
    fn descriptor(self) -> Descriptor {
        match self {
            FeatureMark::Included => Descriptor::new("Included", ColorToken::Green, IconToken::Check),
            FeatureMark::Excluded => {
                Descriptor::new("Not included", ColorToken::Muted, IconToken::Cross)
            }
        }
    }
}

/// Direction of a metric trend badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

impl Describe for TrendDirection {
    fn descriptor(self) -> Descriptor {
        match self {
            TrendDirection::Up => Descriptor::new("+", ColorToken::Emerald, IconToken::TrendUp),
            TrendDirection::Down => Descriptor::new("-", ColorToken::Red, IconToken::TrendDown),
        }
    }
}

/// Templates rated at or above this get a full star.
pub const TOP_RATING: f32 = 4.8;

/// Star band of a template rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBand {
    Top,
    Standard,
}

impl RatingBand {
    pub fn of(rating: f32) -> Self {
        if rating < TOP_RATING {
            RatingBand::Standard
        } else {
            RatingBand::Top
        }
    }
}

impl Describe for RatingBand {
    fn descriptor(self) -> Descriptor {
        match self {
            RatingBand::Top => Descriptor::new("Top rated", ColorToken::Amber, IconToken::Star),
            RatingBand::Standard => Descriptor::new("Rated", ColorToken::Amber, IconToken::StarHalf),
        }
    }
}

/// Overlay badges on a resume card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeBadge {
    MatchScore,
    AiOptimized,
}

impl Describe for ResumeBadge {
    fn descriptor(self) -> Descriptor {
        match self {
            ResumeBadge::MatchScore => Descriptor::new("Match", ColorToken::Green, IconToken::Target),
            ResumeBadge::AiOptimized => {
                Descriptor::new("AI Optimized", ColorToken::Brand, IconToken::Sparkles)
            }
        }
    }
}

/// Button styles used by cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Outline,
    Primary,
    Shimmer,
}

/// Button style of a plan card: the popular plan shimmers, Free is outlined.
pub fn plan_button(tier: SubscriptionTier, popular: bool) -> ButtonVariant {
    if popular {
        return ButtonVariant::Shimmer;
    }
    match tier {
        SubscriptionTier::Free => ButtonVariant::Outline,
        SubscriptionTier::Professional | SubscriptionTier::Premium => ButtonVariant::Primary,
    }
}

/// Copy shown in the auth modal for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthCopy {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

pub fn auth_copy(mode: AuthMode) -> AuthCopy {
    match mode {
        AuthMode::Login => AuthCopy {
            headline: "Welcome back",
            subtitle: "Sign in to access your SmartJobber account",
            submit: "Log in",
            submitting: "Logging in...",
        },
        AuthMode::Signup => AuthCopy {
            headline: "Create an account",
            subtitle: "Join SmartJobber and start your job search journey",
            submit: "Create account",
            submitting: "Creating account...",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_filled(d: Descriptor) {
        assert!(!d.label.is_empty());
        assert!(!d.icon.glyph().is_empty());
        assert!(!d.color.family().is_empty());
    }

    #[test]
    fn test_every_tag_has_descriptor() {
        JobStatus::ALL.into_iter().for_each(|s| assert_filled(s.descriptor()));
        SubscriptionTier::ALL
            .into_iter()
            .for_each(|t| assert_filled(t.descriptor()));
        [AuthMode::Login, AuthMode::Signup]
            .into_iter()
            .for_each(|m| assert_filled(m.descriptor()));
        [true, false]
            .into_iter()
            .for_each(|b| assert_filled(FeatureMark::from(b).descriptor()));
        [
            UpcomingKind::Interview,
            UpcomingKind::FollowUp,
            UpcomingKind::Deadline,
        ]
        .into_iter()
        .for_each(|k| assert_filled(k.descriptor()));
    }

    #[test]
    fn test_interview_and_rejected_colors() {
        let interview = JobStatus::Interview.descriptor();
        assert_eq!(interview.label, "Interview");
        assert_eq!(interview.color.family(), "purple");

        let rejected = JobStatus::Rejected.descriptor();
        assert_eq!(rejected.label, "Rejected");
        assert_eq!(rejected.color.family(), "red");
    }

    #[test]
    fn test_status_labels_are_distinct() {
        let mut labels: Vec<_> = JobStatus::ALL
            .into_iter()
            .map(|s| s.descriptor().label)
            .collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), JobStatus::ALL.len());
    }

    #[test]
    fn test_rating_band_threshold() {
        assert_eq!(RatingBand::of(4.9), RatingBand::Top);
        assert_eq!(RatingBand::of(4.8), RatingBand::Top);
        assert_eq!(RatingBand::of(4.7), RatingBand::Standard);
        assert_eq!(RatingBand::of(4.7).descriptor().icon, IconToken::StarHalf);
    }

    #[test]
    fn test_plan_button_variants() {
        assert_eq!(plan_button(SubscriptionTier::Free, false), ButtonVariant::Outline);
        assert_eq!(
            plan_button(SubscriptionTier::Premium, false),
            ButtonVariant::Primary
        );
        assert_eq!(
            plan_button(SubscriptionTier::Professional, true),
            ButtonVariant::Shimmer
        );
    }

    #[test]
    fn test_auth_copy_differs_by_mode() {
        assert_eq!(auth_copy(AuthMode::Login).submit, "Log in");
        assert_eq!(auth_copy(AuthMode::Signup).submitting, "Creating account...");
        assert_ne!(
            auth_copy(AuthMode::Login).headline,
            auth_copy(AuthMode::Signup).headline
        );
    }
}
