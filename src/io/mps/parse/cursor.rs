//! # Walking through the lines of a file
//!
//! The sections of an MPS file are read strictly in order. The `Cursor` keeps track of the line
//! being looked at, so that every error can point at it.
use crate::io::error::{ErrorKind, FileLocation, Parse as ParseError, ParseResult};
use crate::io::mps::Section;
use crate::io::mps::token::{COMMENT_INDICATOR, NAME};

pub(crate) struct Cursor<'a> {
    lines: Vec<&'a str>,
    /// Index of the current line; equal to `lines.len()` at the end of the input.
    index: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            index: 0,
        }
    }

    /// The line currently looked at, `None` at the end of the input.
    pub(crate) fn current(&self) -> Option<&'a str> {
        self.lines.get(self.index).copied()
    }

    /// Number of the current line, counting from 1.
    pub(crate) fn line_number(&self) -> usize {
        self.index + 1
    }

    pub(crate) fn location(&self) -> FileLocation<'a> {
        (self.line_number(), self.current().unwrap_or(""))
    }

    /// Create an error at the current line.
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::with_location(kind, self.location())
    }

    /// Move to the first line starting with the `NAME` indicator.
    pub(crate) fn find_name(&mut self) -> ParseResult<&'a str> {
        match self.lines.iter().position(|line| line.starts_with(NAME)) {
            Some(index) => {
                self.index = index;
                Ok(self.lines[index])
            },
            None => {
                self.index = self.lines.len();
                Err(self.error(ErrorKind::SectionNotFound))
            },
        }
    }

    /// Move to the next line that is not a comment, and return it.
    pub(crate) fn next_data_line(&mut self) -> Option<&'a str> {
        if self.index < self.lines.len() {
            self.index += 1;
        }
        while self.current().is_some_and(|line| line.starts_with(COMMENT_INDICATOR)) {
            self.index += 1;
        }

        self.current()
    }

    /// Move to the next data line, if it is part of the same section.
    ///
    /// When the section has ended, the cursor is left at the line that ended it.
    pub(crate) fn next_in_section(&mut self) -> Option<&'a str> {
        self.next_data_line();
        if self.is_continuation() { self.current() } else { None }
    }

    /// Only indicators for new sections start at the first character, all other lines are
    /// indented.
    pub(crate) fn is_continuation(&self) -> bool {
        self.current().is_some_and(|line| line.starts_with([' ', '\t']))
    }

    /// The current line as a section header, without trailing whitespace.
    pub(crate) fn header(&self) -> Option<&'a str> {
        self.current().map(str::trim_end)
    }

    /// Check that the current line announces `section`.
    pub(crate) fn expect(&self, section: Section) -> ParseResult<()> {
        self.expect_one_of(&[section]).map(|_| ())
    }

    /// Check that the current line announces one of the `acceptable` sections.
    ///
    /// # Return value
    ///
    /// The section that was found.
    pub(crate) fn expect_one_of(&self, acceptable: &[Section]) -> ParseResult<Section> {
        let header = self.header();
        match header.and_then(|text| text.parse::<Section>().ok()) {
            Some(section) if acceptable.contains(&section) => Ok(section),
            _ => Err(self.error(ErrorKind::SectionMismatch {
                expected: acceptable.iter().map(Section::to_string).collect::<Vec<_>>().join(" or "),
                found: header.map(str::to_string),
            })),
        }
    }
}
