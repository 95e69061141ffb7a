//! Decorative effects: animated gradient border, glass card, shimmer button.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders},
};

use crate::descriptors::ColorToken;

/// Ticks for one full sweep through the gradient stops.
const GRADIENT_PERIOD: u64 = 90;

/// Blue -> purple -> pink, then back to blue.
const GRADIENT_STOPS: [ColorToken; 3] = [ColorToken::Blue, ColorToken::Purple, ColorToken::Pink];

fn rgb(token: ColorToken) -> (u8, u8, u8) {
    match token.color() {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (255, 255, 255),
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Gradient color at animation `phase`.
pub fn gradient_color(phase: u64) -> Color {
    let n = GRADIENT_STOPS.len() as u64;
    let pos = phase % GRADIENT_PERIOD;
    let seg_len = GRADIENT_PERIOD / n;
    let seg = (pos / seg_len).min(n - 1) as usize;
    let t = (pos - seg as u64 * seg_len) as f32 / seg_len as f32;

    let (r1, g1, b1) = rgb(GRADIENT_STOPS[seg]);
    let (r2, g2, b2) = rgb(GRADIENT_STOPS[(seg + 1) % GRADIENT_STOPS.len()]);
    Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
}

/// Rounded block whose border color drifts along the gradient.
pub fn gradient_block(title: impl Into<Line<'static>>, phase: u64) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(gradient_color(phase)))
        .title(title)
}

/// Frosted card: rounded, dim border, dark fill.
pub fn glass_block(title: impl Into<Line<'static>>) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(82, 82, 91)))
        .style(Style::default().bg(Color::Rgb(24, 24, 27)))
        .title(title)
}

/// Glass card with the highlight border used for the cursor.
pub fn glass_block_selected(title: impl Into<Line<'static>>, selected: bool) -> Block<'static> {
    let block = glass_block(title);
    if selected {
        block.border_style(
            Style::default()
                .fg(ColorToken::Brand.color())
                .add_modifier(Modifier::BOLD),
        )
    } else {
        block
    }
}

/// Button label with a three-cell highlight sweeping across it.
pub fn shimmer_line(label: &str, phase: u64) -> Line<'static> {
    let chars: Vec<char> = format!(" {label} ").chars().collect();
    let width = chars.len() as u64;
    let head = (phase / 2) % (width + 6);
    let base = Style::default()
        .fg(Color::Black)
        .bg(ColorToken::Brand.color())
        .add_modifier(Modifier::BOLD);
    let lit = base.bg(Color::Rgb(224, 242, 254));

    let spans = chars
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            let i = i as u64;
            let style = if i + 3 > head && i <= head { lit } else { base };
            Span::styled(c.to_string(), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Static button label in one of the card styles.
pub fn button_line(label: &str, primary: bool) -> Line<'static> {
    let style = if primary {
        Style::default()
            .fg(Color::White)
            .bg(ColorToken::Brand.color())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ColorToken::Brand.color())
    };
    let text = if primary {
        format!(" {label} ")
    } else {
        format!("[ {label} ]")
    };
    Line::from(Span::styled(text, style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_starts_at_first_stop() {
        assert_eq!(gradient_color(0), ColorToken::Blue.color());
        assert_eq!(gradient_color(GRADIENT_PERIOD), ColorToken::Blue.color());
        assert_eq!(gradient_color(GRADIENT_PERIOD / 3), ColorToken::Purple.color());
    }

    #[test]
    fn test_gradient_moves_between_stops() {
        assert_ne!(gradient_color(5), gradient_color(0));
    }

    #[test]
    fn test_shimmer_keeps_label_text() {
        let line = shimmer_line("Go", 4);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Go ");
    }
}
