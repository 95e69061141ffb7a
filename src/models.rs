//! Mock entities shown by the dashboard widgets.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::descriptors::{IconToken, RatingBand, TrendDirection};

/// Where an application stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Saved,
}

#[cfg(test)]
impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
        JobStatus::Saved,
    ];
}

/// One tracked job application.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub salary: Option<String>,
    pub status: JobStatus,
    /// Date the application was sent.
    pub date: NaiveDate,
    /// Company logo reference; the card falls back to a building glyph.
    pub logo: Option<String>,
    /// Posting URL opened from the job card.
    pub url: Option<String>,
}

impl Job {
    /// "Applied on June 12, 2023"
    pub fn applied_on(&self) -> String {
        format!("Applied on {}", self.date.format("%B %-d, %Y"))
    }
}

/// A resume in the user's gallery.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ResumeCard {
    pub name: String,
    pub preview: String,
    pub last_edited: String,
    /// Match score in percent (0..=100).
    pub match_score: Option<u8>,
    #[serde(default)]
    pub is_ai_optimized: bool,
    #[serde(default)]
    pub is_selected: bool,
}

impl ResumeCard {
    /// Badge text for the match score; a zero or missing score shows no badge.
    pub fn match_label(&self) -> Option<String> {
        self.match_score
            .filter(|s| *s > 0)
            .map(|s| format!("{}% Match", s.min(100)))
    }
}

/// A resume template offered in the Templates tab.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResumeTemplate {
    pub name: String,
    pub preview: String,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
}

impl ResumeTemplate {
    pub fn rating_band(&self) -> RatingBand {
        RatingBand::of(self.rating)
    }

    /// "4.9 (324 reviews)"
    pub fn rating_label(&self) -> String {
        format!("{} ({} reviews)", self.rating, self.reviews)
    }
}

/// Percent change shown under a metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Trend {
    pub value: u32,
    #[serde(default)]
    pub positive: bool,
}

impl Trend {
    pub fn direction(&self) -> TrendDirection {
        if self.positive {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }

    /// "+12%" / "-5%"
    pub fn label(&self) -> String {
        let sign = if self.positive { "+" } else { "-" };
        format!("{sign}{}%", self.value)
    }
}

/// Summary tile on the dashboard overview.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: String,
    pub description: Option<String>,
    pub trend: Option<Trend>,
    pub icon: IconToken,
}

/// Kind of an upcoming calendar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpcomingKind {
    Interview,
    FollowUp,
    Deadline,
}

/// Entry in the "Upcoming" panel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Upcoming {
    pub kind: UpcomingKind,
    /// e.g. "TechCorp - Senior Frontend Engineer"
    pub subject: String,
    /// Relative day label ("Tomorrow", "Friday").
    pub when: String,
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(score: Option<u8>) -> ResumeCard {
        ResumeCard {
            name: "r".into(),
            preview: "/placeholder.svg".into(),
            last_edited: "Yesterday".into(),
            match_score: score,
            is_ai_optimized: false,
            is_selected: false,
        }
    }

    #[test]
    fn test_applied_on_format() {
        let job = Job {
            id: "1".into(),
            title: "Senior Frontend Engineer".into(),
            company: "TechCorp".into(),
            location: "San Francisco, CA".into(),
            salary: None,
            status: JobStatus::Interview,
            date: NaiveDate::from_ymd_opt(2023, 6, 12).unwrap(),
            logo: None,
            url: None,
        };
        assert_eq!(job.applied_on(), "Applied on June 12, 2023");
    }

    #[test]
    fn test_match_label() {
        assert_eq!(resume(Some(85)).match_label().as_deref(), Some("85% Match"));
        assert_eq!(resume(Some(0)).match_label(), None);
        assert_eq!(resume(None).match_label(), None);
        assert_eq!(resume(Some(140)).match_label().as_deref(), Some("100% Match"));
    }

    #[test]
    fn test_trend_label() {
        let up = Trend { value: 12, positive: true };
        let down = Trend { value: 5, positive: false };
        assert_eq!(up.label(), "+12%");
        assert_eq!(down.label(), "-5%");
        assert_eq!(down.direction(), TrendDirection::Down);
    }

    #[test]
    fn test_job_status_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            status: JobStatus,
        }
        let w: Wrapper = toml::from_str("status = \"interview\"").unwrap();
        assert_eq!(w.status, JobStatus::Interview);
    }
}
