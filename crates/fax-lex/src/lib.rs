//! fax-lex - the lexical analyzer for the fax source language.
//!
//! Converts a UTF-8-clean source string into an ordered sequence of
//! [`Token`]s (spec §4.1). The primary pass keeps `WS` as a first-class kind
//! so the full token sequence is a lossless record of the input; parsers
//! that only care about meaningful tokens call [`strip_whitespace`] to drop
//! it. On the first malformed lexeme, tokenizing stops and a [`LexError`] is
//! returned — there is no partial token stream on failure (spec §4.1
//! Failure).

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Tokenizes `source`, returning the full token sequence including `WS`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Drops every `WS` token, producing the sequence the parser consumes.
pub fn strip_whitespace(tokens: Vec<Token>) -> Vec<Token> {
    tokens
        .into_iter()
        .filter(|t| t.kind != TokenKind::WS)
        .collect()
}

#[cfg(test)]
mod edge_cases {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        strip_whitespace(tokenize(src).unwrap())
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn round_trip_reproduces_source_exactly() {
        let src = "x = 1 + 2;\n";
        let tokens = tokenize(src).unwrap();
        let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(rebuilt, src);
    }

    #[test]
    fn empty_input_is_empty_token_stream() {
        assert_eq!(tokenize("").unwrap().len(), 0);
    }

    #[test]
    fn bare_zero_is_valid_int() {
        let tokens = tokenize("0").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!(tokens[0].lexeme, "0");
    }

    #[test]
    fn leading_zero_int_is_lex_error() {
        assert!(matches!(
            tokenize("007"),
            Err(LexError::LeadingZeroInt { .. })
        ));
    }

    #[test]
    fn dangling_semicolon_without_newline_is_error() {
        assert!(matches!(
            tokenize("x = 1;"),
            Err(LexError::DanglingSemicolon { .. })
        ));
    }

    #[test]
    fn endline_is_a_single_token() {
        let tokens = tokenize(";\n").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Endline);
        assert_eq!(tokens[0].lexeme, ";\n");
    }

    #[test]
    fn lone_bang_is_error() {
        assert!(matches!(tokenize("!x"), Err(LexError::LoneBang { .. })));
    }

    #[test]
    fn lone_amp_and_pipe_are_errors() {
        assert!(matches!(tokenize("&x"), Err(LexError::LoneAmp { .. })));
        assert!(matches!(tokenize("|x"), Err(LexError::LonePipe { .. })));
    }

    #[test]
    fn two_char_operators_maximal_munch() {
        assert_eq!(kinds("=="), vec![TokenKind::EqEq]);
        assert_eq!(kinds("="), vec![TokenKind::Eq]);
        assert_eq!(kinds("<="), vec![TokenKind::LtEq]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt]);
        assert_eq!(kinds("/."), vec![TokenKind::FloatSlash]);
        assert_eq!(kinds("/"), vec![TokenKind::Slash]);
    }

    #[test]
    fn unterminated_string_is_error() {
        assert!(matches!(
            tokenize("\"abc"),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn quoted_string_has_no_escapes() {
        let tokens = tokenize("\"a\\b\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::QuotedStr);
        assert_eq!(tokens[0].lexeme, "\"a\\b\"");
    }

    #[test]
    fn reserved_words_get_dedicated_kinds() {
        assert_eq!(
            kinds("if else while break continue writeOut"),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Break,
                TokenKind::Continue,
                TokenKind::WriteOut,
            ]
        );
    }

    #[test]
    fn reader_keywords_are_distinct_from_var() {
        assert_eq!(
            kinds("readIn readInt readFloat readStr readBool readable"),
            vec![
                TokenKind::ReadIn,
                TokenKind::ReadInt,
                TokenKind::ReadFloat,
                TokenKind::ReadStr,
                TokenKind::ReadBool,
                TokenKind::Var,
            ]
        );
    }

    #[test]
    fn true_false_null_are_literals_not_vars() {
        assert_eq!(
            kinds("True False NULL"),
            vec![TokenKind::Bool, TokenKind::Bool, TokenKind::Null]
        );
    }

    #[test]
    fn whitespace_run_collapses_to_one_token() {
        let tokens = tokenize("  \t\n  ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::WS);
        assert_eq!(tokens[0].lexeme, "  \t\n  ");
    }

    #[test]
    fn unexpected_char_is_error() {
        assert!(matches!(tokenize("`"), Err(LexError::UnexpectedChar { .. })));
    }
}
