//! Character cursor for traversing source code.
//!
//! Tracks byte position plus 1-based line and column so every token can
//! carry a precise [`Span`]. Source text is required to be UTF-8-clean
//! (spec §1), so the cursor decodes one `char` at a time rather than one
//! byte at a time.

use fax_common::Span;

pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn current_char(&self) -> char {
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    pub fn peek_next_char(&self) -> char {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column.
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    pub fn span_from(&self, start: usize, start_line: u32, start_column: u32) -> Span {
        Span::new(
            start as u32,
            self.position as u32,
            start_line,
            start_column,
        )
    }

    pub fn slice(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
