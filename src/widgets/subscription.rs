//! Subscription plan grid.

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    descriptors::{ButtonVariant, Describe, FeatureMark, plan_button},
    layout,
    plans::{Plan, PlanCatalog},
    widgets::effects,
};

/// Ribbon on the popular plan.
pub const POPULAR_RIBBON: &str = "Most Popular";

/// Body lines of one plan card; the button follows the features.
pub fn plan_card_lines(plan: &Plan, popular: bool, phase: u64) -> Vec<Line<'static>> {
    let tier = plan.tier.descriptor();
    let mut price = vec![Span::styled(
        plan.price.headline(),
        Style::default()
            .fg(tier.color.color())
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(note) = plan.price.billing_note() {
        price.push(Span::styled(
            format!(" {note}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![
        Line::from(price),
        Line::from(Span::styled(
            plan.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    lines.extend(plan.features.iter().map(|feature| {
        let mark = FeatureMark::from(feature.included).descriptor();
        let text_style = if feature.included {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Line::from(vec![
            Span::styled(
                format!("{} ", mark.icon.glyph()),
                Style::default().fg(mark.color.color()),
            ),
            Span::styled(feature.name.clone(), text_style),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(match plan_button(plan.tier, popular) {
        ButtonVariant::Shimmer => effects::shimmer_line(plan.button_label(), phase),
        ButtonVariant::Primary => effects::button_line(plan.button_label(), true),
        ButtonVariant::Outline => effects::button_line(plan.button_label(), false),
    });
    lines
}

/// Draw every plan side by side; `cursor` highlights one card.
pub fn render_plan_grid(
    f: &mut Frame,
    area: Rect,
    catalog: &PlanCatalog,
    cursor: Option<usize>,
    phase: u64,
) {
    if catalog.is_empty() {
        return;
    }
    let cells = layout::columns(area, catalog.len());
    for (idx, (plan, cell)) in catalog.plans().iter().zip(cells.iter()).enumerate() {
        let popular = catalog.is_popular(plan);
        let mut title = vec![Span::styled(
            format!(" {} {} ", plan.tier.descriptor().icon.glyph(), plan.name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if popular {
            title.push(Span::styled(
                format!(" {POPULAR_RIBBON} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(plan.tier.descriptor().color.color()),
            ));
        }
        let block = if popular {
            effects::gradient_block(Line::from(title), phase)
        } else {
            effects::glass_block_selected(Line::from(title), cursor == Some(idx))
        };
        let block = if popular && cursor == Some(idx) {
            block.border_style(
                Style::default()
                    .fg(effects::gradient_color(phase))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            block
        };
        f.render_widget(
            Paragraph::new(plan_card_lines(plan, popular, phase))
                .block(block)
                .wrap(Wrap { trim: true }),
            *cell,
        );
    }
}
