//! Layout helpers shared by the landing page and the dashboard shell.

use ratatui::prelude::*;

/// Below this width the navbar and sidebar collapse into a menu toggle.
pub const COMPACT_WIDTH: u16 = 100;

pub fn is_compact(width: u16) -> bool {
    width < COMPACT_WIDTH
}

/// Screen split into top bar, body and help bar.
pub struct MainLayout {
    pub top_bar: Rect,
    pub body: Rect,
    pub help_bar: Rect,
}

pub fn create_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // navbar / header
            Constraint::Min(1),    // body
            Constraint::Length(3), // help
        ])
        .split(area);

    MainLayout {
        top_bar: chunks[0],
        body: chunks[1],
        help_bar: chunks[2],
    }
}

/// Dashboard body: optional sidebar plus page content.
pub struct ShellLayout {
    pub sidebar: Option<Rect>,
    pub content: Rect,
}

pub fn create_shell_layout(area: Rect, sidebar_visible: bool) -> ShellLayout {
    if !sidebar_visible {
        return ShellLayout {
            sidebar: None,
            content: area,
        };
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(area);

    ShellLayout {
        sidebar: Some(chunks[0]),
        content: chunks[1],
    }
}

/// Overview page: header, metric row, then jobs above resumes and upcoming.
pub struct OverviewLayout {
    pub header: Rect,
    pub metrics: Rect,
    pub jobs: Rect,
    pub resumes: Rect,
    pub upcoming: Rect,
}

pub fn create_overview_layout(area: Rect) -> OverviewLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Percentage(50),
            Constraint::Min(6),
        ])
        .split(area);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(rows[3]);

    OverviewLayout {
        header: rows[0],
        metrics: rows[1],
        jobs: rows[2],
        resumes: bottom[0],
        upcoming: bottom[1],
    }
}

/// Split `area` into `n` equal columns.
pub fn columns(area: Rect, n: usize) -> Vec<Rect> {
    if n == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, n as u32); n];
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Centered box `width_percent` wide and `height` rows tall.
pub fn centered_popup(area: Rect, width_percent: u16, height: u16) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Slot `index` of the toast stack in the top-right corner.
pub fn toast_slot(area: Rect, index: u16) -> Option<Rect> {
    const W: u16 = 44;
    const H: u16 = 4;
    let y = area.y + 1 + index * H;
    if area.width < W + 2 || y + H > area.bottom() {
        return None;
    }
    Some(Rect::new(area.right() - W - 1, y, W, H))
}
