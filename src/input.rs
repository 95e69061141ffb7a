//! Single-line text field used by the auth form.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Editable value with a cursor counted in characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
    /// Render every character as a bullet.
    masked: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the `idx`-th character.
    fn byte_at(&self, idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(idx)
            .map(|(b, _)| b)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    /// Remove the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_at(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear_line(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text as drawn: bullets when masked, a `|` at the cursor when focused.
    pub fn display(&self, focused: bool) -> String {
        let shown: Vec<char> = if self.masked {
            std::iter::repeat_n('•', self.len()).collect()
        } else {
            self.value.chars().collect()
        };
        if !focused {
            return shown.into_iter().collect();
        }
        let (before, after) = shown.split_at(self.cursor.min(shown.len()));
        format!(
            "{}|{}",
            before.iter().collect::<String>(),
            after.iter().collect::<String>()
        )
    }
}

/// Draw a labelled field; the focused one gets a brand-colored border.
pub fn render_text_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    placeholder: &str,
    input: &TextInput,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Rgb(2, 132, 199))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Keep the cursor visible when the value is wider than the field.
    let width = area.width.saturating_sub(2) as usize;
    let text = input.display(focused);
    let overflow = text.chars().count().saturating_sub(width);
    let visible: String = text.chars().skip(overflow).collect();

    let body = if input.value().is_empty() && !focused {
        Paragraph::new(placeholder.to_string()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(visible).style(Style::default().fg(Color::White))
    };

    f.render_widget(
        body.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label.to_string()),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        s.chars().for_each(|c| input.insert_char(c));
        input
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut input = typed("abc");
        assert_eq!(input.value(), "abc");
        input.backspace();
        assert_eq!(input.value(), "ab");
        assert_eq!(input.display(true), "ab|");
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut input = typed("añb");
        input.move_left();
        input.insert_char('é');
        assert_eq!(input.value(), "añéb");
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "ñéb");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = typed("ab");
        input.move_right();
        assert_eq!(input.display(true), "ab|");
        input.move_home();
        input.move_left();
        assert_eq!(input.display(true), "|ab");
        input.backspace();
        assert_eq!(input.value(), "ab");
        input.move_end();
        input.delete();
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        "pw1".chars().for_each(|c| input.insert_char(c));
        assert_eq!(input.display(false), "•••");
        input.move_left();
        assert_eq!(input.display(true), "••|•");
    }

    #[test]
    fn test_clear_line() {
        let mut input = typed("hello");
        input.clear_line();
        assert_eq!(input.value(), "");
        assert_eq!(input.display(true), "|");
    }
}
