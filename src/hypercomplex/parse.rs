//! Text grammar for quaternion values.
//!
//! ```text
//! text  := term*
//! term  := ws* [sign ws*] digits ['.' digits] [unit]
//! unit  := 'i' | 'j' | 'k'
//! ```
//!
//! Terms may appear in any order. At most one term has no unit (the scalar)
//! and at most one term carries each unit. Signs between terms are optional.

use core::iter::Peekable;
use core::str::{Chars, FromStr};

use tracing::debug;

use super::{Quaternion, QuaternionicInteger};
use crate::error::{QuatResult, QuaternionError};

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, 'i' | 'j' | 'k' | '+' | '-' | '.')
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn format_error(text: &str, reason: &str) -> QuaternionError {
    debug!(input = text, reason, "rejected quaternion text");
    QuaternionError::Format(format!("{reason} in `{text}`"))
}

/// Parses `text` into `[scalar, i, j, k]`; missing terms are zero.
pub(crate) fn parse_components(text: &str) -> QuatResult<[f64; 4]> {
    if let Some(bad) = text.chars().find(|c| !is_allowed(*c)) {
        return Err(format_error(text, &format!("unexpected character `{bad}`")));
    }

    let mut values: [Option<f64>; 4] = [None; 4];
    let mut chars = text.chars().peekable();
    loop {
        skip_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }

        let mut negative = false;
        if let Some(sign) = chars.next_if(|c| *c == '+' || *c == '-') {
            negative = sign == '-';
            skip_whitespace(&mut chars);
        }

        let mut literal = String::new();
        while let Some(c) = chars.next_if(|c| c.is_ascii_digit() || *c == '.') {
            literal.push(c);
        }
        if !literal.chars().any(|c| c.is_ascii_digit()) {
            return Err(format_error(text, "term without digits"));
        }
        let magnitude: f64 = literal
            .parse()
            .map_err(|_| format_error(text, &format!("malformed number `{literal}`")))?;

        let index = match chars.next_if(|c| matches!(*c, 'i' | 'j' | 'k')) {
            Some('i') => 1,
            Some('j') => 2,
            Some('k') => 3,
            _ => 0,
        };
        if values[index].is_some() {
            let term = ["scalar", "i", "j", "k"][index];
            return Err(format_error(text, &format!("more than one {term} term")));
        }
        values[index] = Some(if negative { -magnitude } else { magnitude });
    }

    Ok(values.map(|v| v.unwrap_or(0.0)))
}

impl FromStr for Quaternion {
    type Err = QuaternionError;

    fn from_str(s: &str) -> QuatResult<Self> {
        parse_components(s).map(Quaternion::from_components)
    }
}

/// Parses as a [`Quaternion`], then truncates every component.
impl FromStr for QuaternionicInteger {
    type Err = QuaternionError;

    fn from_str(s: &str) -> QuatResult<Self> {
        s.parse().map(QuaternionicInteger::from_quaternion)
    }
}
