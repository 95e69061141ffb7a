//! Resume gallery with the All / AI Optimized / Templates tabs.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Tabs, Wrap},
};

use crate::{
    descriptors::{Describe, Descriptor, IconToken, ResumeBadge},
    layout,
    models::{ResumeCard, ResumeTemplate},
    view::{ResumeTab, filter_resumes},
    widgets::{
        effects,
        job_tracker::{EmptyState, render_empty},
    },
};

/// Shown in the optimized tab when no resume has been optimized yet.
pub const NO_OPTIMIZED: EmptyState = EmptyState {
    icon: IconToken::Sparkles,
    title: "No AI-optimized resumes",
    message: "Optimize your resume with AI to increase your chances of getting hired!",
    action: "Optimize with AI",
};

/// One cell of the gallery grid.
#[derive(Clone, Debug, PartialEq)]
pub enum GalleryItem<'a> {
    Resume {
        resume: &'a ResumeCard,
        badges: Vec<(Descriptor, String)>,
    },
    Template {
        template: &'a ResumeTemplate,
        rating: Descriptor,
    },
    /// "Create New" / "Upload PDF" card at the end of the All tab.
    Create,
}

/// Content of the gallery for one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView<'a> {
    pub tab: ResumeTab,
    pub items: Vec<GalleryItem<'a>>,
    pub empty: Option<EmptyState>,
}

pub fn gallery_view<'a>(
    resumes: &'a [ResumeCard],
    templates: &'a [ResumeTemplate],
    tab: ResumeTab,
) -> GalleryView<'a> {
    let mut items: Vec<GalleryItem<'a>> = match tab {
        ResumeTab::Templates => templates
            .iter()
            .map(|template| GalleryItem::Template {
                template,
                rating: template.rating_band().descriptor(),
            })
            .collect(),
        ResumeTab::All | ResumeTab::Optimized => filter_resumes(resumes, tab)
            .into_iter()
            .map(resume_item)
            .collect(),
    };
    if tab == ResumeTab::All {
        items.push(GalleryItem::Create);
    }
    let empty = (tab == ResumeTab::Optimized && items.is_empty()).then_some(NO_OPTIMIZED);
    GalleryView { tab, items, empty }
}

fn resume_item(resume: &ResumeCard) -> GalleryItem<'_> {
    let mut badges = Vec::new();
    if let Some(label) = resume.match_label() {
        badges.push((ResumeBadge::MatchScore.descriptor(), label));
    }
    if resume.is_ai_optimized {
        let d = ResumeBadge::AiOptimized.descriptor();
        badges.push((d, d.label.to_string()));
    }
    GalleryItem::Resume { resume, badges }
}

const CARD_HEIGHT: u16 = 7;
const GRID_COLUMNS: usize = 3;

/// Draw the tab bar and the grid for `tab`.
pub fn render_resume_gallery(
    f: &mut Frame,
    area: Rect,
    resumes: &[ResumeCard],
    templates: &[ResumeTemplate],
    tab: ResumeTab,
    cursor: Option<usize>,
) {
    let outer = effects::glass_block(" Your Resumes ");
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let selected = ResumeTab::ALL.iter().position(|t| *t == tab).unwrap_or(0);
    let tabs = Tabs::new(ResumeTab::ALL.iter().map(|t| t.label()))
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(2, 132, 199))
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, rows[0]);

    let view = gallery_view(resumes, templates, tab);
    if let Some(empty) = &view.empty {
        render_empty(f, rows[1], empty);
        return;
    }

    // Page through whole grid rows so the cursor stays on screen.
    let rows_visible = (rows[1].height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = cursor.unwrap_or(0) / GRID_COLUMNS;
    let first_row = cursor_row.saturating_sub(rows_visible - 1);

    for (idx, item) in view.items.iter().enumerate() {
        let row = idx / GRID_COLUMNS;
        if row < first_row || row >= first_row + rows_visible {
            continue;
        }
        let y = rows[1].y + ((row - first_row) as u16) * CARD_HEIGHT;
        let band = Rect::new(rows[1].x, y, rows[1].width, CARD_HEIGHT.min(rows[1].bottom() - y));
        let cell = layout::columns(band, GRID_COLUMNS)[idx % GRID_COLUMNS];
        render_item(f, cell, item, cursor == Some(idx));
    }
}

fn render_item(f: &mut Frame, area: Rect, item: &GalleryItem<'_>, cursor_here: bool) {
    let muted = Style::default().fg(Color::Gray);
    let (title, lines, selected) = match item {
        GalleryItem::Resume { resume, badges } => {
            let mut lines: Vec<Line> = badges
                .iter()
                .map(|(d, text)| {
                    Line::from(Span::styled(
                        format!("{} {}", d.icon.glyph(), text),
                        Style::default().fg(d.color.color()),
                    ))
                })
                .collect();
            lines.push(Line::from(Span::styled(
                format!("Edited {}", resume.last_edited),
                muted,
            )));
            lines.push(Line::from("[Edit] [Download]"));
            (
                format!(" {} {} ", IconToken::FileText.glyph(), resume.name),
                lines,
                cursor_here || resume.is_selected,
            )
        }
        GalleryItem::Template { template, rating } => (
            format!(" {} ", template.name),
            vec![
                Line::from(Span::styled(template.category.clone(), muted)),
                Line::from(Span::styled(
                    format!("{} {}", rating.icon.glyph(), template.rating_label()),
                    Style::default().fg(rating.color.color()),
                )),
                effects::button_line("Use Template", false),
            ],
            cursor_here,
        ),
        GalleryItem::Create => (
            " + Create New ".to_string(),
            vec![
                Line::from(Span::styled("Start from scratch or use a template", muted)),
                Line::from(""),
                Line::from("[Create New] [Upload PDF]"),
            ],
            cursor_here,
        ),
    };

    let card = Paragraph::new(lines)
        .block(effects::glass_block_selected(title, selected))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockData;

    #[test]
    fn test_all_tab_appends_create_card() {
        let data = MockData::default();
        let view = gallery_view(&data.resumes, &data.templates, ResumeTab::All);
        assert_eq!(view.items.len(), data.resumes.len() + 1);
        assert_eq!(view.items.last(), Some(&GalleryItem::Create));
        assert!(view.empty.is_none());
    }

    #[test]
    fn test_optimized_tab_badges() {
        let data = MockData::default();
        let view = gallery_view(&data.resumes, &data.templates, ResumeTab::Optimized);
        assert_eq!(view.items.len(), 1);
        let GalleryItem::Resume { resume, badges } = &view.items[0] else {
            panic!("expected a resume");
        };
        assert_eq!(resume.name, "Software Engineer Resume");
        let texts: Vec<_> = badges.iter().map(|(_, t)| t.as_str()).collect();
        assert_eq!(texts, vec!["85% Match", "AI Optimized"]);
    }

    #[test]
    fn test_optimized_tab_empty_state() {
        let data = MockData::default();
        let plain: Vec<_> = data
            .resumes
            .iter()
            .cloned()
            .map(|mut r| {
                r.is_ai_optimized = false;
                r
            })
            .collect();
        let view = gallery_view(&plain, &data.templates, ResumeTab::Optimized);
        assert!(view.items.is_empty());
        assert_eq!(view.empty, Some(NO_OPTIMIZED));
    }

    #[test]
    fn test_templates_tab_rating_band() {
        let data = MockData::default();
        let view = gallery_view(&data.resumes, &data.templates, ResumeTab::Templates);
        assert_eq!(view.items.len(), 6);
        let icons: Vec<_> = view
            .items
            .iter()
            .map(|item| match item {
                GalleryItem::Template { rating, .. } => rating.icon,
                _ => panic!("templates tab only lists templates"),
            })
            .collect();
        // 4.9, 4.7, 4.8, 4.6, 4.5, 4.4
        assert_eq!(icons[0], IconToken::Star);
        assert_eq!(icons[1], IconToken::StarHalf);
        assert_eq!(icons[2], IconToken::Star);
        assert!(icons[3..].iter().all(|i| *i == IconToken::StarHalf));
    }
}
