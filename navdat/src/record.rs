// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{Error, Field, Text};

/// A line record of a navigation data file.
pub trait Record<'a>: Sized {
    /// The column delimiter, or `None` if columns are separated by whitespace.
    const DELIMITER: Option<char> = None;

    /// Parse this record type from a field iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or contains invalid
    /// data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this record type from a line.
    ///
    /// # Errors
    ///
    /// Returns any error returned by [`parse`][Record::parse].
    fn from_line(line: &'a str) -> Result<Self, Error> {
        match Self::DELIMITER {
            Some(delimiter) => Self::parse(Fields::delimited(line, delimiter)),
            None => Self::parse(Fields::new(line)),
        }
    }
}

/// Cursor over the columns of one line.
pub struct Fields<'a> {
    line: &'a str,
    tokens: Vec<&'a str>,
    index: usize,
}

impl<'a> Fields<'a> {
    /// Splits the line at whitespace.
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: line.split_whitespace().collect(),
            index: 0,
        }
    }

    /// Splits the line at the delimiter and trims each column.
    pub fn delimited(line: &'a str, delimiter: char) -> Self {
        Self {
            line,
            tokens: line.split(delimiter).map(str::trim).collect(),
            index: 0,
        }
    }

    /// Reads the next field, and advances the position by one column.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails or if the line has no more
    /// columns and the field is required.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: Field<'a>,
    {
        let field = match self.tokens.get(self.index) {
            Some(token) => F::from_token(token)?,
            None => F::missing().ok_or(Error::MissingField { index: self.index })?,
        };
        self.index += 1;
        Ok(field)
    }

    /// Skips `n` columns, advancing the position without parsing.
    #[inline]
    pub fn skip(&mut self, n: usize) -> &mut Self {
        self.index += n;
        self
    }

    /// Jumps to the 1-based column and gets the field.
    ///
    /// The next field will be the one following this field's position.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn get<F>(&mut self, position: usize) -> Result<F, Error>
    where
        F: Field<'a>,
    {
        self.index = position.saturating_sub(1);
        self.next()
    }

    /// Returns the unparsed remainder of the line as text.
    ///
    /// All columns are consumed afterwards.
    pub fn rest(&mut self) -> Text<'a> {
        let text = match self.tokens.get(self.index) {
            // tokens are sub slices of the line, so the offset is in bounds
            Some(token) => {
                let offset = token.as_ptr() as usize - self.line.as_ptr() as usize;
                Text(self.line[offset..].trim_end())
            }
            None => Text(""),
        };
        self.index = self.tokens.len();
        text
    }

    /// Returns the next column without advancing.
    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.index).copied()
    }

    /// Returns the number of columns that are not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.index)
    }

    /// Returns the number of columns of the line.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the line has no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::Token;

    use super::*;

    #[test]
    fn reads_fields_in_order() {
        let mut fields = Fields::new("3  47.4 -122.3 SEA ENRT K1 SEATTLE   VORTAC");
        assert_eq!(fields.next::<u8>(), Ok(3));
        assert_eq!(fields.skip(2).next::<Token>(), Ok(Token("SEA")));
        assert_eq!(fields.get::<Token>(6), Ok(Token("K1")));
        assert_eq!(fields.rest().as_str(), "SEATTLE   VORTAC");
        assert_eq!(fields.remaining(), 0);
    }

    #[test]
    fn missing_required_field() {
        let mut fields = Fields::new("1 2");
        assert_eq!(fields.skip(2).next::<u8>(), Err(Error::MissingField { index: 2 }));
    }

    #[test]
    fn missing_optional_field() {
        let mut fields = Fields::delimited("010,A, ,", ',');
        assert_eq!(fields.next::<u16>(), Ok(10));
        assert_eq!(fields.next::<char>(), Ok('A'));
        assert_eq!(fields.next::<Option<Token>>(), Ok(None));
        assert_eq!(fields.next::<Option<Token>>(), Ok(None));
        // beyond the end of the line
        assert_eq!(fields.next::<Option<Token>>(), Ok(None));
    }
}
