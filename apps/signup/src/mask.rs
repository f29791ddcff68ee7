//! Input masking plugin
//!
//! Installs the `mask` directive: elements annotated with a mask pattern get
//! their `value` attribute reformatted at render time. Token set:
//!
//! - `#` - a digit
//! - `S` - a letter
//! - `X` - a letter or digit
//! - `!` - escapes the next token character, emitting it as a literal
//!
//! Every other pattern character is a literal. Raw input characters that do
//! not fit the next token are skipped, so `5551234567` masked with
//! `(###) ###-####` yields `(555) 123-4567`.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;
use trellis::{App, Directive, Element, Plugin, TrellisError};

/// What a single mask token accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Digit,
    Letter,
    AlphaNumeric,
}

impl Token {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_alphabetic(),
            Self::AlphaNumeric => c.is_alphanumeric(),
        }
    }
}

static TOKENS: Lazy<HashMap<char, Token>> = Lazy::new(|| {
    HashMap::from([
        ('#', Token::Digit),
        ('S', Token::Letter),
        ('X', Token::AlphaNumeric),
    ])
});

/// Format a raw value against a mask pattern
pub fn apply_mask(pattern: &str, raw: &str) -> String {
    let mut out = String::new();
    let mut input = raw.chars().peekable();
    let mut mask = pattern.chars().peekable();

    while let Some(mc) = mask.next() {
        // Stop once the raw value is exhausted so trailing literals are
        // not appended to a partial value.
        if input.peek().is_none() {
            break;
        }

        if mc == '!' {
            if let Some(escaped) = mask.next() {
                out.push(escaped);
                if input.peek() == Some(&escaped) {
                    input.next();
                }
            }
            continue;
        }

        match TOKENS.get(&mc) {
            Some(token) => {
                // Skip raw characters until one satisfies the token.
                for c in input.by_ref() {
                    if token.accepts(c) {
                        out.push(c);
                        break;
                    }
                }
            }
            None => {
                out.push(mc);
                if input.peek() == Some(&mc) {
                    input.next();
                }
            }
        }
    }

    out
}

/// The `mask` directive: rewrites an element's `value` attribute
pub struct MaskDirective;

impl Directive for MaskDirective {
    fn applied(&self, el: &mut Element, arg: &str) -> Result<(), TrellisError> {
        let raw = el.attr("value").unwrap_or_default().to_string();
        let masked = apply_mask(arg, &raw);
        debug!("Masked '{}' with '{}' -> '{}'", raw, arg, masked);
        el.set_attr("value", masked);
        Ok(())
    }
}

/// Plugin that registers the `mask` directive with the application
pub struct InputMaskPlugin;

impl InputMaskPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InputMaskPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for InputMaskPlugin {
    fn name(&self) -> &str {
        "input-mask"
    }

    fn install(&self, app: &mut App) -> Result<(), TrellisError> {
        app.directive("mask", MaskDirective);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_mask() {
        assert_eq!(apply_mask("(###) ###-####", "5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_partial_value_stops_at_literal() {
        assert_eq!(apply_mask("(###) ###-####", "555"), "(555");
        assert_eq!(apply_mask("(###) ###-####", ""), "");
    }

    #[test]
    fn test_non_matching_characters_skipped() {
        assert_eq!(apply_mask("####", "55-51"), "5551");
        assert_eq!(apply_mask("SS", "a1b"), "ab");
    }

    #[test]
    fn test_alphanumeric_token() {
        assert_eq!(apply_mask("XXX-XXX", "ab12cd"), "ab1-2cd");
    }

    #[test]
    fn test_escaped_token_is_literal() {
        assert_eq!(apply_mask("!#-##", "42"), "#-42");
    }

    #[test]
    fn test_directive_rewrites_value_attribute() {
        let mut el = Element::new("input").with_attr("value", "5551234567");
        MaskDirective.applied(&mut el, "(###) ###-####").unwrap();
        assert_eq!(el.attr("value"), Some("(555) 123-4567"));
    }
}
