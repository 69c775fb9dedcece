//! Edge case tests for poxc-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, MatchPolicy, ScanOptions, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        tokenize(source).unwrap()
    }

    fn lex_with(policy: MatchPolicy, source: &str) -> Vec<Token<'_>> {
        Scanner::new(ScanOptions::default().with_policy(policy))
            .tokenize(source)
            .unwrap()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_trailing_dot_number() {
        let t = lex_all("42.");
        assert_eq!(
            t,
            [
                Token::new(TokenKind::Number, 0, "42"),
                Token::new(TokenKind::Dot, 2, "."),
            ]
        );
    }

    #[test]
    fn test_edge_dot_then_identifier() {
        let t = lex_all("3.x");
        assert_eq!(t[0], Token::new(TokenKind::Number, 0, "3"));
        assert_eq!(t[1].kind, TokenKind::Dot);
        assert_eq!(t[2], Token::new(TokenKind::Identifier, 2, "x"));
    }

    #[test]
    fn test_edge_two_dots() {
        let t = lex_all("1.2.3");
        assert_eq!(t[0].lexeme, "1.2");
        assert_eq!(t[1].kind, TokenKind::Dot);
        assert_eq!(t[2].lexeme, "3");
    }

    #[test]
    fn test_edge_leading_dot() {
        let t = lex_all(".5");
        assert_eq!(t[0].kind, TokenKind::Dot);
        assert_eq!(t[1], Token::new(TokenKind::Number, 1, "5"));
    }

    #[test]
    fn test_edge_unterminated_string() {
        let t = lex_all("\"abc");
        assert_eq!(t, [Token::new(TokenKind::String, 0, "\"abc")]);
    }

    #[test]
    fn test_edge_lone_quote() {
        let t = lex_all("\"");
        assert_eq!(t, [Token::new(TokenKind::String, 0, "\"")]);
    }

    #[test]
    fn test_edge_empty_string() {
        let t = lex_all("\"\"");
        assert_eq!(t, [Token::new(TokenKind::String, 0, "\"\"")]);
    }

    #[test]
    fn test_edge_string_swallows_anything() {
        let t = lex_all("\"@ # \t ~\" x");
        assert_eq!(t[0].lexeme, "\"@ # \t ~\"");
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("\"a\"\"b\"");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1], Token::new(TokenKind::String, 3, "\"b\""));
    }

    #[test]
    fn test_edge_whitespace_run() {
        let t = lex_all("a     b");
        assert_eq!(t[1], Token::new(TokenKind::WhiteSpace, 1, "     "));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_edge_only_whitespace() {
        let t = lex_all("    ");
        assert_eq!(t, [Token::new(TokenKind::WhiteSpace, 0, "    ")]);
    }

    #[test]
    fn test_edge_tab_rejected() {
        let err = tokenize("a\tb").unwrap_err();
        assert_eq!(err.offset, 1);
        assert_eq!(err.found, '\t');
    }

    #[test]
    fn test_edge_non_ascii_rejected() {
        let err = tokenize("naïve").unwrap_err();
        assert_eq!(err.offset, 2);
        assert_eq!(err.found, 'ï');
        assert_eq!(err.context, "na");
    }

    #[test]
    fn test_edge_underscore_rejected() {
        let err = tokenize("my_var").unwrap_err();
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_edge_error_after_valid_prefix() {
        let source = format!("{} $", "x ".repeat(30));
        let err = tokenize(&source).unwrap_err();
        assert_eq!(err.offset, 61);
        assert_eq!(err.context.len(), 40);
        assert!(source[..61].ends_with(&err.context));
    }

    #[test]
    fn test_edge_identifier_with_digits() {
        let t = lex_all("abc123");
        assert_eq!(t, [Token::new(TokenKind::Identifier, 0, "abc123")]);
    }

    #[test]
    fn test_edge_digits_then_letters() {
        let t = lex_all("123abc");
        assert_eq!(t[0], Token::new(TokenKind::Number, 0, "123"));
        assert_eq!(t[1], Token::new(TokenKind::Identifier, 3, "abc"));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let t = lex_all("If if");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[2].kind, TokenKind::If);
    }

    #[test]
    fn test_edge_misspelled_booleans() {
        let t = lex_all("troo nope true false");
        assert_eq!(t[0].kind, TokenKind::Troo);
        assert_eq!(t[2].kind, TokenKind::Nope);
        assert_eq!(t[4].kind, TokenKind::Identifier);
        assert_eq!(t[6].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_var_keyword() {
        let t = lex_with(MatchPolicy::FirstMatch, "var");
        assert_eq!(t, [Token::new(TokenKind::Var, 0, "var")]);
    }

    #[test]
    fn test_edge_keyword_prefixes_first_match() {
        let t = lex_with(MatchPolicy::FirstMatch, "classy");
        assert_eq!(
            t,
            [
                Token::new(TokenKind::Class, 0, "class"),
                Token::new(TokenKind::Identifier, 5, "y"),
            ]
        );
        let t = lex_with(MatchPolicy::FirstMatch, "android");
        assert_eq!(t[0].kind, TokenKind::And);
        assert_eq!(t[1].lexeme, "roid");
    }

    #[test]
    fn test_edge_keyword_prefixes_longest() {
        for word in ["classy", "android", "format", "iffy", "nullable", "thistle", "variable"] {
            let t = lex_with(MatchPolicy::Longest, word);
            assert_eq!(t, [Token::new(TokenKind::Identifier, 0, word)], "{word}");
        }
    }

    #[test]
    fn test_edge_keyword_followed_by_punctuation() {
        let t = lex_with(MatchPolicy::Longest, "print(x);");
        assert_eq!(t[0], Token::new(TokenKind::Print, 0, "print"));
        assert_eq!(t[1].kind, TokenKind::LeftParen);
    }

    #[test]
    fn test_edge_operator_runs_first_match() {
        let kinds: Vec<TokenKind> = lex_with(MatchPolicy::FirstMatch, "!==<=>=")
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Equal,
                TokenKind::Greater,
                TokenKind::Equal,
            ]
        );
    }

    #[test]
    fn test_edge_operator_runs_longest() {
        let kinds: Vec<TokenKind> = lex_with(MatchPolicy::Longest, "!==<=>=")
            .iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            [
                TokenKind::BangEqual,
                TokenKind::Equal,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
            ]
        );
    }

    #[test]
    fn test_edge_triple_equal() {
        let t = lex_all("===");
        assert_eq!(t[0], Token::new(TokenKind::EqualEqual, 0, "=="));
        assert_eq!(t[1], Token::new(TokenKind::Equal, 2, "="));
    }

    #[test]
    fn test_edge_all_punctuation() {
        let kinds: Vec<TokenKind> = lex_all("(){},.-+;/*").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::SemiColon,
                TokenKind::Slash,
                TokenKind::Star,
            ]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&name);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].lexeme.len(), 10000);
    }

    #[test]
    fn test_edge_negative_number_is_two_tokens() {
        let t = lex_all("-5");
        assert_eq!(t[0].kind, TokenKind::Minus);
        assert_eq!(t[1], Token::new(TokenKind::Number, 1, "5"));
    }

    #[test]
    fn test_edge_string_with_multibyte_text() {
        let source = "\"héllo\" x";
        let t = lex_all(source);
        assert_eq!(t[0].lexeme, "\"héllo\"");
        assert_eq!(t[2].position, source.len() - 1);
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Source fragments every rule can recognize on its own.
        fn fragment() -> impl Strategy<Value = String> {
            prop_oneof![
                "[a-zA-Z][a-zA-Z0-9]{0,8}",
                "[0-9]{1,5}(\\.[0-9]{1,3})?",
                " {1,4}",
                "\"[a-z @#]{0,6}\"",
                prop::sample::select(vec![
                    "(", ")", "{", "}", ",", ".", "-", "+", ";", "/", "*", "!", "!=", "=",
                    "==", ">", ">=", "<", "<=", "and", "class", "else", "nope", "fun", "for",
                    "if", "null", "or", "print", "return", "super", "this", "troo", "var",
                    "while",
                ])
                .prop_map(str::to_string),
            ]
        }

        fn source() -> impl Strategy<Value = String> {
            prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
        }

        fn policy() -> impl Strategy<Value = MatchPolicy> {
            prop_oneof![Just(MatchPolicy::Longest), Just(MatchPolicy::FirstMatch)]
        }

        proptest! {
            #[test]
            fn prop_lossless(src in source(), policy in policy()) {
                let tokens = lex_with(policy, &src);
                let rebuilt: String = tokens.iter().map(|t| t.lexeme).collect();
                prop_assert_eq!(rebuilt.as_str(), src.as_str());
            }

            #[test]
            fn prop_positions_contiguous(src in source(), policy in policy()) {
                let tokens = lex_with(policy, &src);
                let mut expected = 0;
                for token in &tokens {
                    prop_assert_eq!(token.position, expected);
                    prop_assert!(!token.lexeme.is_empty());
                    expected = token.end();
                }
                prop_assert_eq!(expected, src.len());
            }

            #[test]
            fn prop_whitespace_runs_are_single_tokens(n in 1usize..64) {
                let src = format!("a{}b", " ".repeat(n));
                let tokens = lex_all(&src);
                prop_assert_eq!(tokens.len(), 3);
                prop_assert_eq!(tokens[1].kind, TokenKind::WhiteSpace);
                prop_assert_eq!(tokens[1].lexeme.len(), n);
            }

            #[test]
            fn prop_lexemes_reclassify_alone(src in source(), policy in policy()) {
                let tokens = lex_with(policy, &src);
                for token in tokens.iter().filter(|t| t.kind != TokenKind::String) {
                    let alone = lex_with(policy, token.lexeme);
                    prop_assert_eq!(alone.len(), 1);
                    prop_assert_eq!(alone[0].kind, token.kind);
                    prop_assert_eq!(alone[0].lexeme, token.lexeme);
                }
            }

            #[test]
            fn prop_identifiers_scan_whole(ident in "[a-zA-Z][a-zA-Z0-9]{0,20}") {
                let tokens = lex_all(&ident);
                prop_assert_eq!(tokens.len(), 1);
                prop_assert_eq!(tokens[0].lexeme, ident.as_str());
            }
        }
    }
}
