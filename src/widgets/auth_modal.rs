//! Auth modal drawn over either screen.

use ratatui::{
    prelude::*,
    widgets::{Clear, Paragraph, Wrap},
};

use crate::{
    auth::{AuthForm, AuthMode},
    descriptors::{ColorToken, Describe, auth_copy},
    input::render_text_input,
    layout,
    widgets::effects,
};

pub const PASSWORD_HINT: &str = "Password must be at least 8 characters long";

/// Rows the modal needs for `mode`.
pub fn modal_height(mode: AuthMode) -> u16 {
    // border + headline/subtitle/gap + tabs/gap + fields + hint + error + button
    let hint = u16::from(mode == AuthMode::Signup);
    2 + 3 + 2 + mode.fields().len() as u16 * 3 + hint + 2 + 1
}

fn tab_line(active: AuthMode) -> Line<'static> {
    let tab = |mode: AuthMode| {
        let d = mode.descriptor();
        let style = if mode == active {
            Style::default()
                .fg(Color::Black)
                .bg(d.color.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Span::styled(format!("  {}  ", d.label), style)
    };
    Line::from(vec![tab(AuthMode::Login), Span::raw(" "), tab(AuthMode::Signup)])
}

pub fn render_auth_modal(f: &mut Frame, area: Rect, form: &AuthForm, phase: u64) {
    let mode = form.mode();
    let copy = auth_copy(mode);
    let rect = layout::centered_popup(area, 50, modal_height(mode).min(area.height));
    f.render_widget(Clear, rect);

    let block = effects::gradient_block(
        Line::from(Span::styled(
            " SmartJobber ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        phase,
    )
    .style(Style::default().bg(Color::Rgb(24, 24, 27)));
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let fields = mode.fields();
    let mut constraints = vec![Constraint::Length(3), Constraint::Length(2)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Length(u16::from(mode == AuthMode::Signup)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = vec![
        Line::from(Span::styled(
            copy.headline,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy.subtitle, Style::default().fg(Color::Gray))),
    ];
    f.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(tab_line(mode)).alignment(Alignment::Center),
        rows[1],
    );

    for (i, field) in fields.iter().enumerate() {
        render_text_input(
            f,
            rows[2 + i],
            field.label(),
            field.placeholder(),
            form.input(*field),
            form.focus() == *field && !form.is_submitting(),
        );
    }

    let next = 2 + fields.len();
    if mode == AuthMode::Signup {
        f.render_widget(
            Paragraph::new(Span::styled(
                PASSWORD_HINT,
                Style::default().fg(Color::DarkGray),
            )),
            rows[next],
        );
    }
    if let Some(error) = form.error() {
        f.render_widget(
            Paragraph::new(Span::styled(
                error.to_string(),
                Style::default().fg(ColorToken::Red.color()),
            ))
            .wrap(Wrap { trim: true }),
            rows[next + 1],
        );
    }

    let button = if form.is_submitting() {
        effects::button_line(copy.submitting, false)
    } else {
        effects::button_line(copy.submit, true)
    };
    f.render_widget(
        Paragraph::new(button).alignment(Alignment::Center),
        rows[next + 2],
    );
}
