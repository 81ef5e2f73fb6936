/// Single-line text editor backing the amount field. `cursor` counts chars, not bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineEdit {
    pub value: String,
    pub cursor: usize,
}

impl LineEdit {
    pub fn set(&mut self, s: impl Into<String>) {
        self.value = s.into();
        self.cursor = self.len();
    }
    pub fn push(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }
    pub fn left(&mut self) {
        if self.cursor > 0 { self.cursor -= 1; }
    }
    pub fn right(&mut self) {
        if self.cursor < self.len() { self.cursor += 1; }
    }
    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.len();
    }
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_at_cursor() {
        let mut e = LineEdit::default();
        for c in "1050".chars() { e.push(c); }
        e.left();
        e.left();
        e.push('.');
        assert_eq!(e.value, "10.50");
        e.backspace();
        e.delete();
        assert_eq!(e.value, "100");
        assert_eq!(e.cursor, 2);
    }

    #[test]
    fn multibyte_chars_do_not_split() {
        let mut e = LineEdit::default();
        e.set("€5");
        e.home();
        e.right();
        e.backspace();
        assert_eq!(e.value, "5");
        e.end();
        e.push('é');
        e.backspace();
        assert_eq!(e.value, "5");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut e = LineEdit::default();
        e.left();
        e.backspace();
        e.delete();
        assert_eq!(e.cursor, 0);
        e.set("12");
        e.right();
        assert_eq!(e.cursor, 2);
        e.clear();
        assert_eq!(e, LineEdit::default());
    }
}
