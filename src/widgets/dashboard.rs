//! Dashboard shell (header, sidebar, mobile menu) and its pages.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use crate::{
    config::{Config, UserCfg},
    descriptors::{ColorToken, Describe, IconToken},
    layout,
    mock::MockData,
    models::{Metric, Upcoming},
    routes::Route,
    view::DashboardState,
    widgets::{
        effects,
        job_tracker::{EmptyState, render_empty, render_job_tracker},
        resume_gallery::render_resume_gallery,
        subscription::render_plan_grid,
    },
};

/// Entry of the sidebar and of the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarItem {
    Page(Route),
    LogOut,
}

impl SidebarItem {
    pub const ALL: [SidebarItem; 8] = [
        SidebarItem::Page(Route::Dashboard),
        SidebarItem::Page(Route::Resumes),
        SidebarItem::Page(Route::Jobs),
        SidebarItem::Page(Route::Calendar),
        SidebarItem::Page(Route::Search),
        SidebarItem::Page(Route::Settings),
        SidebarItem::Page(Route::Pricing),
        SidebarItem::LogOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SidebarItem::Page(route) => route.label(),
            SidebarItem::LogOut => "Log Out",
        }
    }

    pub fn icon(self) -> IconToken {
        match self {
            SidebarItem::Page(route) => route.icon(),
            SidebarItem::LogOut => IconToken::LogOut,
        }
    }
}

pub const SEARCH_SOON: EmptyState = EmptyState {
    icon: IconToken::Search,
    title: "Job Search",
    message: "AI-matched job search is on its way",
    action: "Coming Soon",
};

/// "Welcome back, John!"
pub fn welcome_line(user: &UserCfg) -> String {
    format!("Welcome back, {}!", user.first_name())
}

/// Top bar: menu toggle, brand, and the signed-in user.
pub fn render_header(f: &mut Frame, area: Rect, user: &UserCfg, compact: bool) {
    let mut left = Vec::new();
    if compact {
        left.push(Span::raw(format!("{} ", IconToken::Menu.glyph())));
    }
    left.push(Span::styled(
        "SmartJobber",
        Style::default()
            .fg(ColorToken::Brand.color())
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(12), Constraint::Length(40)])
        .split(inner);
    f.render_widget(Paragraph::new(Line::from(left)), cols[0]);

    let profile = Line::from(vec![
        Span::styled(
            user.full_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {} ", user.plan_label),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            format!(" {} ", user.initials()),
            Style::default()
                .fg(Color::Black)
                .bg(ColorToken::Brand.color()),
        ),
    ]);
    f.render_widget(Paragraph::new(profile).alignment(Alignment::Right), cols[1]);
}

fn menu_items(active: Route, cursor: Option<usize>) -> Vec<ListItem<'static>> {
    SidebarItem::ALL
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_active = *item == SidebarItem::Page(active);
            let mut style = if is_active {
                Style::default()
                    .fg(ColorToken::Brand.color())
                    .add_modifier(Modifier::BOLD)
            } else if *item == SidebarItem::LogOut {
                Style::default().fg(ColorToken::Red.color())
            } else {
                Style::default()
            };
            if cursor == Some(idx) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if is_active { "▌" } else { " " };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{} {}", item.icon().glyph(), item.label()),
                style,
            )))
        })
        .collect()
}

/// Sidebar listing every page with the active route highlighted.
pub fn render_sidebar(f: &mut Frame, area: Rect, active: Route) {
    let list = List::new(menu_items(active, None)).block(effects::glass_block(" Menu "));
    f.render_widget(list, area);
}

/// Overlay version of the sidebar for narrow terminals.
pub fn render_mobile_menu(f: &mut Frame, area: Rect, active: Route, cursor: usize) {
    let height = SidebarItem::ALL.len() as u16 + 2;
    let rect = Rect::new(area.x, area.y, area.width.min(30), height.min(area.height));
    f.render_widget(Clear, rect);
    let list = List::new(menu_items(active, Some(cursor)))
        .block(effects::glass_block_selected(" Menu ", true));
    f.render_widget(list, rect);
}

/// Lines of one metric card.
pub fn metric_lines(metric: &Metric) -> Vec<Line<'static>> {
    let mut detail = Vec::new();
    if let Some(trend) = metric.trend {
        let d = trend.direction().descriptor();
        detail.push(Span::styled(
            format!("{} {} ", d.icon.glyph(), trend.label()),
            Style::default().fg(d.color.color()),
        ));
    }
    if let Some(description) = &metric.description {
        detail.push(Span::styled(
            description.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    vec![
        Line::from(Span::styled(
            metric.value.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(detail),
    ]
}

fn render_metrics(f: &mut Frame, area: Rect, metrics: &[Metric]) {
    for (metric, cell) in metrics.iter().zip(layout::columns(area, metrics.len())) {
        let title = format!(" {} {} ", metric.icon.glyph(), metric.title);
        f.render_widget(
            Paragraph::new(metric_lines(metric)).block(effects::glass_block(title)),
            cell,
        );
    }
}

/// Upcoming interviews, follow-ups and deadlines.
pub fn render_upcoming(f: &mut Frame, area: Rect, upcoming: &[Upcoming]) {
    let block = effects::glass_block(format!(" {} Upcoming ", IconToken::Calendar.glyph()));
    if upcoming.is_empty() {
        f.render_widget(
            Paragraph::new("Nothing scheduled")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            area,
        );
        return;
    }
    let mut lines = Vec::new();
    for entry in upcoming {
        let d = entry.kind.descriptor();
        lines.push(Line::from(Span::styled(
            d.badge_text(),
            Style::default()
                .fg(d.color.color())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(entry.subject.clone()));
        let when = match &entry.time {
            Some(time) => format!("{}, {time}", entry.when),
            None => entry.when.clone(),
        };
        lines.push(Line::from(Span::styled(
            when,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_overview(f: &mut Frame, area: Rect, cfg: &Config, data: &MockData, dash: &DashboardState) {
    let l = layout::create_overview_layout(area);
    let header = vec![
        Line::from(Span::styled(
            welcome_line(&cfg.user),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Here's an overview of your job search activities",
            Style::default().fg(Color::Gray),
        )),
    ];
    f.render_widget(Paragraph::new(header), l.header);
    render_metrics(f, l.metrics, &data.metrics);
    render_job_tracker(
        f,
        l.jobs,
        "Recent Applications",
        &data.jobs,
        Some(cfg.app.job_preview_limit),
        Some(dash.cursor),
    );
    render_resume_gallery(
        f,
        l.resumes,
        &data.resumes,
        &data.templates,
        dash.resume_tab,
        None,
    );
    render_upcoming(f, l.upcoming, &data.upcoming);
}

fn render_settings(f: &mut Frame, area: Rect, user: &UserCfg) {
    let label = Style::default().fg(Color::Gray);
    let lines = vec![
        Line::from(vec![Span::styled("Name   ", label), Span::raw(user.full_name.clone())]),
        Line::from(vec![Span::styled("Email  ", label), Span::raw(user.email.clone())]),
        Line::from(vec![Span::styled("Plan   ", label), Span::raw(user.plan_label.clone())]),
    ];
    f.render_widget(
        Paragraph::new(lines).block(effects::glass_block(" Account Settings ")),
        area,
    );
}

/// Draw the page for `route` into the shell content area.
pub fn render_page(
    f: &mut Frame,
    area: Rect,
    route: Route,
    cfg: &Config,
    data: &MockData,
    dash: &DashboardState,
    phase: u64,
) {
    match route {
        Route::Home | Route::Dashboard => render_overview(f, area, cfg, data, dash),
        Route::Resumes => render_resume_gallery(
            f,
            area,
            &data.resumes,
            &data.templates,
            dash.resume_tab,
            Some(dash.cursor),
        ),
        Route::Jobs => render_job_tracker(f, area, "Job Tracker", &data.jobs, None, Some(dash.cursor)),
        Route::Calendar => render_upcoming(f, area, &data.upcoming),
        Route::Search => {
            let block = effects::glass_block(" Job Search ");
            let inner = block.inner(area);
            f.render_widget(block, area);
            render_empty(f, inner, &SEARCH_SOON);
        }
        Route::Settings => render_settings(f, area, &cfg.user),
        Route::Pricing => render_plan_grid(f, area, &data.plans, Some(dash.cursor), phase),
    }
}
