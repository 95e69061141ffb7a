//! Job tracker list: one card per application, or the empty state.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    descriptors::{Describe, Descriptor, IconToken},
    models::Job,
    widgets::effects,
};

/// Copy shown when there is nothing to track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: IconToken,
    pub title: &'static str,
    pub message: &'static str,
    pub action: &'static str,
}

pub const NO_JOBS: EmptyState = EmptyState {
    icon: IconToken::Briefcase,
    title: "No jobs yet",
    message: "Start tracking your job applications",
    action: "Add your first job",
};

/// Derived content of one job card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobCardView<'a> {
    pub job: &'a Job,
    pub status: Descriptor,
    /// Badges after the title: company, location, salary.
    pub badges: Vec<(IconToken, &'a str)>,
}

/// What the tracker draws for a given list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobListView<'a> {
    Empty(EmptyState),
    Cards(Vec<JobCardView<'a>>),
}

/// Build the tracker view; `limit` caps the number of cards, and a limit of
/// zero means no cap.
pub fn job_list_view(jobs: &[Job], limit: Option<usize>) -> JobListView<'_> {
    if jobs.is_empty() {
        return JobListView::Empty(NO_JOBS);
    }
    let shown = limit
        .filter(|n| *n > 0)
        .unwrap_or(jobs.len())
        .min(jobs.len());
    JobListView::Cards(jobs[..shown].iter().map(job_card_view).collect())
}

fn job_card_view(job: &Job) -> JobCardView<'_> {
    let mut badges = vec![(IconToken::Building, job.company.as_str())];
    if !job.location.is_empty() {
        badges.push((IconToken::MapPin, job.location.as_str()));
    }
    if let Some(salary) = job.salary.as_deref() {
        badges.push((IconToken::Dollar, salary));
    }
    JobCardView {
        job,
        status: job.status.descriptor(),
        badges,
    }
}

/// Rows taken by one card.
const CARD_HEIGHT: u16 = 5;

/// Draw the tracker into `area`; `cursor` highlights one card.
pub fn render_job_tracker(
    f: &mut Frame,
    area: Rect,
    title: &str,
    jobs: &[Job],
    limit: Option<usize>,
    cursor: Option<usize>,
) {
    let outer = effects::glass_block(format!(" {title} "));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    match job_list_view(jobs, limit) {
        JobListView::Empty(empty) => render_empty(f, inner, &empty),
        JobListView::Cards(cards) => {
            // Scroll so the cursor card stays visible.
            let per_page = (inner.height / CARD_HEIGHT).max(1) as usize;
            let first = cursor
                .map(|c| c.saturating_sub(per_page - 1))
                .unwrap_or(0);
            for (slot, (idx, card)) in cards.iter().enumerate().skip(first).take(per_page).enumerate() {
                let rect = Rect::new(
                    inner.x,
                    inner.y + slot as u16 * CARD_HEIGHT,
                    inner.width,
                    CARD_HEIGHT.min(inner.height),
                );
                render_card(f, rect, card, cursor == Some(idx));
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &JobCardView<'_>, selected: bool) {
    let logo = if card.job.logo.is_some() {
        IconToken::Briefcase
    } else {
        IconToken::Building
    };
    let title = Line::from(vec![
        Span::raw(format!(" {} ", logo.glyph())),
        Span::styled(
            card.job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut badges: Vec<Span> = card
        .badges
        .iter()
        .flat_map(|(icon, text)| {
            [
                Span::styled(
                    format!("{} {}", icon.glyph(), text),
                    Style::default().fg(Color::Gray),
                ),
                Span::raw("  "),
            ]
        })
        .collect();
    badges.push(Span::styled(
        card.status.badge_text(),
        Style::default()
            .fg(card.status.color.color())
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![
        Line::from(badges),
        Line::from(Span::styled(
            card.job.applied_on(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if card.job.url.is_some() {
        lines[1].spans.push(Span::styled(
            "  ↗ posting",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let body = Paragraph::new(lines)
        .block(effects::glass_block_selected(title, selected))
        .wrap(Wrap { trim: true });
    f.render_widget(body, area);
}

/// Centered empty-state block shared by the list widgets.
pub fn render_empty(f: &mut Frame, area: Rect, empty: &EmptyState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            empty.icon.glyph(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            empty.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(empty.message, Style::default().fg(Color::Gray))),
        Line::from(""),
        effects::button_line(empty.action, true),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}
