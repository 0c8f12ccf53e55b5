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

use std::fmt;

use crate::Error;

/// A single field of a line record.
///
/// This trait is implemented by all field types. Each field is created
/// [`from_token`](Field::from_token) and may keep a reference to the token.
pub trait Field<'a>: Sized {
    /// Parse this field from one token of a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains invalid data.
    fn from_token(token: &'a str) -> Result<Self, Error>;

    /// The value of this field if the line ends before it.
    ///
    /// Required fields have no such value.
    fn missing() -> Option<Self> {
        None
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// A whitespace free token like an identifier or region code.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Token<'a>(pub(crate) &'a str);

impl<'a> Token<'a> {
    /// Returns the token as string.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns the first character of the token.
    #[inline]
    pub fn first(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl<'a> Field<'a> for Token<'a> {
    fn from_token(token: &'a str) -> Result<Self, Error> {
        Ok(Self(token))
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Token<'_>> for String {
    fn from(t: Token<'_>) -> Self {
        t.0.to_owned()
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Free text made of all remaining tokens of a line.
///
/// The text references the line unchanged. It is displayed with every run of
/// whitespace collapsed into a single space.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Text<'a>(pub(crate) &'a str);

impl<'a> Text<'a> {
    /// Returns the text as it appears in the line.
    #[inline]
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Returns `true` if there is no text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Returns `true` if the text contains the pattern.
    #[inline]
    pub fn contains(&self, pat: &str) -> bool {
        self.0.contains(pat)
    }

    /// Returns the tokens of the text.
    pub fn tokens(&self) -> impl Iterator<Item = &'a str> {
        self.0.split_whitespace()
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

macro_rules! numeric_impl {
    ($($t:ty),+) => {
        $(
            impl Field<'_> for $t {
                #[inline]
                fn from_token(token: &str) -> Result<Self, Error> {
                    token.parse::<$t>().map_err(|_| Error::NotANumber {
                        token: token.to_owned(),
                    })
                }
            }
        )+
    };
}

numeric_impl!(u8, u16, u32, u64, i16, i32, i64, f32, f64);

impl Field<'_> for bool {
    fn from_token(token: &str) -> Result<Self, Error> {
        match token {
            "1" => Ok(true),
            "0" => Ok(false),
            _ => Err(Error::InvalidVariant {
                field: "Flag",
                token: token.to_owned(),
                expected: "0 or 1",
            }),
        }
    }
}

impl Field<'_> for char {
    fn from_token(token: &str) -> Result<Self, Error> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::InvalidVariant {
                field: "Code",
                token: token.to_owned(),
                expected: "a single character",
            }),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

/// Optional field that may be blank or absent.
///
/// Comma separated lines keep empty columns, which are `None`. A line that
/// ends before the field yields `None` too.
impl<'a, T> Field<'a> for Option<T>
where
    T: Field<'a>,
{
    fn from_token(token: &'a str) -> Result<Self, Error> {
        if token.trim().is_empty() {
            Ok(None)
        } else {
            T::from_token(token.trim()).map(Some)
        }
    }

    fn missing() -> Option<Self> {
        Some(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_collapses_whitespace() {
        let text = Text("SEATTLE   VORTAC  ");
        assert_eq!(text.to_string(), "SEATTLE VORTAC");
        assert!(text.contains("VORTAC"));
        assert!(Text("   ").is_empty());
    }

    #[test]
    fn blank_optional_is_none() {
        assert_eq!(Option::<u32>::from_token("   "), Ok(None));
        assert_eq!(Option::<u32>::from_token(" 42"), Ok(Some(42)));
        assert!(Option::<u32>::from_token("4x2").is_err());
    }

    #[test]
    fn parses_flag() {
        assert_eq!(bool::from_token("1"), Ok(true));
        assert_eq!(bool::from_token("0"), Ok(false));
        assert!(bool::from_token("Y").is_err());
    }
}
