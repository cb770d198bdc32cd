//! Text buffer snapshot for caret-aware edits

/// Text inserted by the indent action
pub const INDENT: &str = "  ";

/// Widget value plus selection, in `char` offsets
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBuffer {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl TextBuffer {
    /// Buffer with a collapsed caret at `caret`
    #[must_use]
    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        Self {
            text: text.into(),
            selection_start: caret,
            selection_end: caret,
        }
    }

    /// Whether the text is empty or whitespace only
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the selection with `insert` and collapse the caret after it
    pub fn replace_selection(&mut self, insert: &str) {
        let (start, end) = self.clamped_selection();
        let start_byte = self.byte_offset(start);
        let end_byte = self.byte_offset(end);
        self.text.replace_range(start_byte..end_byte, insert);

        let caret = start + insert.chars().count();
        self.selection_start = caret;
        self.selection_end = caret;
    }

    /// Insert two spaces at the caret, replacing any selection
    pub fn insert_indent(&mut self) {
        self.replace_selection(INDENT);
    }

    /// Selection ordered and clamped to the text length
    fn clamped_selection(&self) -> (usize, usize) {
        let len = self.text.chars().count();
        let a = self.selection_start.min(len);
        let b = self.selection_end.min(len);
        (a.min(b), a.max(b))
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indent_at_caret() {
        let mut buffer = TextBuffer::with_caret("ab", 1);
        buffer.insert_indent();
        assert_eq!(buffer, TextBuffer::with_caret("a  b", 3));
    }

    #[test]
    fn test_indent_replaces_selection() {
        let mut buffer = TextBuffer {
            text: "hello world".to_string(),
            selection_start: 5,
            selection_end: 11,
        };
        buffer.insert_indent();
        assert_eq!(buffer.text, "hello  ");
        assert_eq!(buffer.selection_start, 7);
        assert_eq!(buffer.selection_end, 7);
    }

    #[test]
    fn test_indent_handles_multibyte_text() {
        let mut buffer = TextBuffer::with_caret("メモ帳", 2);
        buffer.insert_indent();
        assert_eq!(buffer, TextBuffer::with_caret("メモ  帳", 4));
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let mut buffer = TextBuffer {
            text: "ab".to_string(),
            selection_start: 9,
            selection_end: 1,
        };
        buffer.insert_indent();
        assert_eq!(buffer, TextBuffer::with_caret("a  ", 3));
    }

    #[test]
    fn test_blank_detection() {
        assert!(TextBuffer::with_caret(" \n\t", 0).is_blank());
        assert!(TextBuffer::default().is_blank());
        assert!(!TextBuffer::with_caret(" x ", 0).is_blank());
    }
}
