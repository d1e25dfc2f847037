use derive_builder::Builder;

use crate::constants::{card, WIDTH};

/// What the sender typed in. Empty strings mean "leave it out" (or "use the default" for the year).
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into))]
pub struct GreetingFields {
    pub recipient: String,
    pub sender: String,
    pub message: String,
    pub year: String,
}

/// Pads `text` to `width` with the text in the middle. Overlong text is left alone, not truncated.
pub fn center_pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len) / 2;
    let mut centered = " ".repeat(padding);
    centered.push_str(text);
    let right = width.saturating_sub(padding + len);
    centered.extend(std::iter::repeat_n(' ', right));
    centered
}

#[derive(Debug, Clone)]
pub struct GreetingBox {
    width: usize,
    default_year: String,
    default_message: String,
}

impl Default for GreetingBox {
    fn default() -> Self {
        Self::new(card::DEFAULT_YEAR, card::DEFAULT_MESSAGE)
    }
}

impl GreetingBox {
    pub fn new(default_year: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self { width: WIDTH, default_year: default_year.into(), default_message: default_message.into() }
    }

    fn border(&self) -> String {
        format!("+{}+", "-".repeat(self.width + 2))
    }

    fn framed(&self, text: &str) -> String {
        format!("| {} |", center_pad(text, self.width))
    }

    pub fn render(&self, fields: &GreetingFields) -> Vec<String> {
        let year = if fields.year.is_empty() { &self.default_year } else { &fields.year };
        let message = if fields.message.is_empty() { &self.default_message } else { &fields.message };

        let mut lines = vec![self.border(), self.framed(&format!("{}{year}", card::TITLE_PREFIX)), self.framed("")];
        if !fields.recipient.is_empty() {
            lines.push(self.framed(&format!("{}{}", card::RECIPIENT_LABEL, fields.recipient)));
        }
        lines.push(self.framed(message));
        if !fields.sender.is_empty() {
            lines.push(self.framed(&format!("{}{}", card::SENDER_LABEL, fields.sender)));
        }
        lines.push(self.framed(""));
        lines.push(self.border());
        lines
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_center_pad() {
        assert_eq!(center_pad("ab", 6), "  ab  ");
        assert_eq!(center_pad("abc", 6), " abc  ");
        assert_eq!(center_pad("", 4), "    ");
    }

    #[test]
    fn test_center_pad_overlong_text() {
        let text = "x".repeat(WIDTH + 10);
        assert_eq!(center_pad(&text, WIDTH), text);
    }

    #[test]
    fn test_center_pad_counts_chars() {
        assert_eq!(center_pad("❄", 5), "  ❄  ");
    }

    #[test]
    fn test_empty_fields() {
        let lines = GreetingBox::default().render(&GreetingFields::default());
        insta::assert_snapshot!(lines.join("\n"), @r"
        +--------------------------------------------------------------+
        |                     MERRY CHRISTMAS 2025                     |
        |                                                              |
        |             Wishing you a warm, cozy Christmas.              |
        |                                                              |
        +--------------------------------------------------------------+
        ");
    }

    #[test]
    fn test_all_fields() {
        let fields = GreetingFieldsBuilder::default()
            .recipient("Alex")
            .sender("Sam")
            .message("Hi!")
            .year("2030")
            .build()
            .unwrap();
        let lines = GreetingBox::default().render(&fields);
        insta::assert_snapshot!(lines.join("\n"), @r"
        +--------------------------------------------------------------+
        |                     MERRY CHRISTMAS 2030                     |
        |                                                              |
        |                           To: Alex                           |
        |                             Hi!                              |
        |                          From: Sam                           |
        |                                                              |
        +--------------------------------------------------------------+
        ");
    }

    #[test]
    fn test_interior_is_always_full_width() {
        let fields = GreetingFieldsBuilder::default().recipient("Alex").sender("Sam").build().unwrap();
        let lines = GreetingBox::default().render(&fields);
        assert_eq!(lines.len(), 8);
        for line in &lines {
            assert_eq!(line.chars().count(), WIDTH + 4, "{line:?}");
        }
    }

    #[test]
    fn test_overlong_message_is_not_truncated() {
        let message = "y".repeat(WIDTH + 5);
        let fields = GreetingFieldsBuilder::default().message(message.clone()).build().unwrap();
        let lines = GreetingBox::default().render(&fields);
        assert_eq!(lines[3], format!("| {message} |"));
    }

    #[test]
    fn test_configured_defaults() {
        let lines = GreetingBox::new("1999", "Ho ho ho").render(&GreetingFields::default());
        assert!(lines[1].contains("MERRY CHRISTMAS 1999"));
        assert_eq!(lines[3], format!("| {} |", center_pad("Ho ho ho", WIDTH)));
    }
}
