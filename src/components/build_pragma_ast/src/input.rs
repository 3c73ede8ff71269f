use line_column::LineColumn;
use source_files::{Source, SourceFileKey};
use std::{collections::VecDeque, str::Chars};

/// Character stream with arbitrary lookahead and source tracking
pub struct Input<'a> {
    characters: LineColumn<Chars<'a>>,
    queue: VecDeque<(char, Source)>,
    key: SourceFileKey,
}

impl<'a> Input<'a> {
    pub fn new(content: &'a str, key: SourceFileKey) -> Self {
        Self {
            characters: LineColumn::new(content.chars()),
            queue: VecDeque::new(),
            key,
        }
    }

    pub fn peek_nth(&mut self, n: usize) -> Option<char> {
        while self.queue.len() <= n {
            let (c, location) = self.characters.next()?;
            self.queue.push_back((c, Source::new(self.key, location)));
        }

        self.queue.get(n).map(|(c, _)| *c)
    }

    pub fn peek(&mut self) -> Option<char> {
        self.peek_nth(0)
    }

    pub fn peek_is(&mut self, expected: char) -> bool {
        self.peek() == Some(expected)
    }

    pub fn peek_starts_with(&mut self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek_nth(i) == Some(expected))
    }

    pub fn next(&mut self) -> Option<char> {
        self.peek()?;
        self.queue.pop_front().map(|(c, _)| c)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek_is(expected) {
            self.next();
            true
        } else {
            false
        }
    }

    pub fn eat_str(&mut self, expected: &str) -> bool {
        if !self.peek_starts_with(expected) {
            return false;
        }

        for _ in expected.chars() {
            self.next();
        }
        true
    }

    /// Source of the next character, or of the end of the file
    pub fn source(&mut self) -> Source {
        match self.peek() {
            Some(_) => self.queue[0].1,
            None => Source::new(self.key, self.characters.here()),
        }
    }

    /// Skips spaces and tabs, but not newlines
    pub fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.next();
        }
    }

    /// Skips all whitespace, including newlines
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    pub fn skip_comment(&mut self) {
        if self.peek_is('#') {
            while self.peek().is_some_and(|c| c != '\n') {
                self.next();
            }
        }
    }
}
