//! Toast stack in the top-right corner.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    descriptors::ColorToken,
    layout,
    toast::{ToastQueue, ToastVariant},
};

pub fn render_toasts(f: &mut Frame, area: Rect, toasts: &ToastQueue) {
    if toasts.is_empty() {
        return;
    }
    for (index, toast) in toasts.visible().enumerate() {
        let Some(slot) = layout::toast_slot(area, index as u16) else {
            break;
        };
        let (border, title_style) = match toast.variant {
            ToastVariant::Default => (
                Style::default().fg(Color::Gray),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            ToastVariant::Destructive => (
                Style::default().fg(ColorToken::Red.color()),
                Style::default()
                    .fg(ColorToken::Red.color())
                    .add_modifier(Modifier::BOLD),
            ),
        };
        f.render_widget(Clear, slot);
        f.render_widget(
            Paragraph::new(toast.description.clone())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(border)
                        .title(Span::styled(format!(" {} ", toast.title), title_style)),
                ),
            slot,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Toast;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::{Duration, Instant};

    #[test]
    fn test_newest_toast_on_top() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(4), 3);
        queue.push(Toast::coming_soon(), now);
        queue.push(Toast::auth_error(), now);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| render_toasts(f, f.area(), &queue))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..80).map(|x| buffer[(x, y)].symbol().to_string()).collect()
        };
        assert!(row(1).contains("Authentication error"));
        assert!(row(5).contains("Coming Soon"));
    }
}
