use crate::parsers::{ParseResult, Span};
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::{char, multispace1};
use nom::combinator::{opt, value};
use nom::multi::many0_count;
use nom::sequence::pair;

/// Skips any mix of whitespace and `;` line comments. Never fails.
pub fn ignore_whitespace_and_comments<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        many0_count(alt((
            value((), multispace1),
            value((), pair(char(';'), opt(is_not("\r\n")))),
        ))),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn just_semicolon() {
        let (remainder, _) = ignore_whitespace_and_comments(";\n").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn comment_only() {
        let (remainder, _) = ignore_whitespace_and_comments("; comment").unwrap();
        assert!(remainder.is_empty());
    }

    #[test]
    fn keeps_text() {
        let (remainder, _) =
            ignore_whitespace_and_comments("  ; comment\n ; another\n\tnext line").unwrap();
        assert_eq!(remainder.fragment(), &"next line");
        assert_eq!(remainder.location_line(), 3);
    }

    #[test]
    fn empty_input() {
        let (remainder, _) = ignore_whitespace_and_comments("").unwrap();
        assert!(remainder.is_empty());
    }
}
