//! Mock data source: built-in sample records, optionally replaced from TOML.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{
    descriptors::IconToken,
    models::{Job, JobStatus, Metric, ResumeCard, ResumeTemplate, Trend, Upcoming, UpcomingKind},
    plans::PlanCatalog,
};

/// Everything the widgets display. Sections missing from a file keep their
/// built-in values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MockData {
    pub jobs: Vec<Job>,
    pub resumes: Vec<ResumeCard>,
    pub templates: Vec<ResumeTemplate>,
    pub plans: PlanCatalog,
    pub metrics: Vec<Metric>,
    pub upcoming: Vec<Upcoming>,
}

impl MockData {
    /// Read `path` when given, otherwise use the samples.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let s = fs::read_to_string(path)
            .with_context(|| format!("failed to read mock data {}", path.display()))?;
        let data: MockData = toml::from_str(&s)
            .with_context(|| format!("failed to parse mock data {}", path.display()))?;
        tracing::info!(
            "mock data loaded from {}: {} jobs, {} resumes",
            path.display(),
            data.jobs.len(),
            data.resumes.len()
        );
        Ok(data)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn metric(title: &str, value: &str, description: &str, trend: (u32, bool), icon: IconToken) -> Metric {
    Metric {
        title: title.into(),
        value: value.into(),
        description: Some(description.into()),
        trend: Some(Trend {
            value: trend.0,
            positive: trend.1,
        }),
        icon,
    }
}

fn template(name: &str, category: &str, rating: f32, reviews: u32) -> ResumeTemplate {
    ResumeTemplate {
        name: name.into(),
        preview: "/placeholder.svg".into(),
        category: category.into(),
        rating,
        reviews,
    }
}

impl Default for MockData {
    fn default() -> Self {
        Self {
            jobs: vec![
                Job {
                    id: "1".into(),
                    title: "Senior Frontend Engineer".into(),
                    company: "TechCorp".into(),
                    location: "San Francisco, CA".into(),
                    salary: Some("$120K - $150K".into()),
                    status: JobStatus::Interview,
                    date: date(2023, 6, 12),
                    logo: None,
                    url: None,
                },
                Job {
                    id: "2".into(),
                    title: "UX Designer".into(),
                    company: "DesignHub".into(),
                    location: "Remote".into(),
                    salary: Some("$90K - $110K".into()),
                    status: JobStatus::Applied,
                    date: date(2023, 6, 15),
                    logo: None,
                    url: None,
                },
                Job {
                    id: "3".into(),
                    title: "Product Manager".into(),
                    company: "InnovateCo".into(),
                    location: "New York, NY".into(),
                    salary: None,
                    status: JobStatus::Rejected,
                    date: date(2023, 5, 28),
                    logo: None,
                    url: None,
                },
            ],
            resumes: vec![
                ResumeCard {
                    name: "Software Engineer Resume".into(),
                    preview: "/placeholder.svg".into(),
                    last_edited: "Yesterday".into(),
                    match_score: Some(85),
                    is_ai_optimized: true,
                    is_selected: false,
                },
                ResumeCard {
                    name: "Product Manager Resume".into(),
                    preview: "/placeholder.svg".into(),
                    last_edited: "3 days ago".into(),
                    match_score: Some(72),
                    is_ai_optimized: false,
                    is_selected: false,
                },
            ],
            templates: vec![
                template("Professional", "Business", 4.9, 324),
                template("Creative", "Design", 4.7, 186),
                template("Technical", "IT & Development", 4.8, 278),
                template("Executive", "Leadership", 4.6, 142),
                template("Modern", "All-purpose", 4.5, 209),
                template("Minimal", "All-purpose", 4.4, 167),
            ],
            plans: PlanCatalog::standard(),
            metrics: vec![
                metric("Total Applications", "24", "Last 30 days", (12, true), IconToken::Briefcase),
                metric("Interviews", "5", "Last 30 days", (20, true), IconToken::Calendar),
                metric("Resume Views", "68", "Last 30 days", (5, false), IconToken::FileText),
                metric("Match Rate", "78%", "Average match score", (8, true), IconToken::Target),
            ],
            upcoming: vec![
                Upcoming {
                    kind: UpcomingKind::Interview,
                    subject: "TechCorp - Senior Frontend Engineer".into(),
                    when: "Tomorrow".into(),
                    time: Some("10:00 AM - 11:30 AM".into()),
                },
                Upcoming {
                    kind: UpcomingKind::FollowUp,
                    subject: "InnovateCo - Product Manager".into(),
                    when: "Friday".into(),
                    time: None,
                },
                Upcoming {
                    kind: UpcomingKind::Deadline,
                    subject: "DesignHub - Senior UX Designer".into(),
                    when: "Next Week".into(),
                    time: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sample_set() {
        let data = MockData::default();
        assert_eq!(data.jobs.len(), 3);
        assert_eq!(data.templates.len(), 6);
        assert_eq!(data.metrics.len(), 4);
        assert_eq!(data.resumes.iter().filter(|r| r.is_ai_optimized).count(), 1);
    }

    #[test]
    fn test_partial_file_keeps_other_sections() {
        let src = r#"
            [[jobs]]
            id = "9"
            title = "Data Engineer"
            company = "Pipes Inc"
            status = "offer"
            date = "2024-02-01"
            url = "https://example.com/jobs/9"
        "#;
        let data: MockData = toml::from_str(src).unwrap();
        assert_eq!(data.jobs.len(), 1);
        assert_eq!(data.jobs[0].status, JobStatus::Offer);
        assert_eq!(data.jobs[0].location, "");
        assert_eq!(data.templates.len(), 6);
    }

    #[test]
    fn test_empty_jobs_list_allowed() {
        let data: MockData = toml::from_str("jobs = []").unwrap();
        assert!(data.jobs.is_empty());
    }

    #[test]
    fn test_load_without_path_uses_samples() {
        assert_eq!(MockData::load(None).unwrap(), MockData::default());
    }
}
