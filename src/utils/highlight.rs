//! Syntax highlighting for the hero code window.
//!
//! Lines are split into tokens with a single regex. Unterminated strings are
//! still recognised so that text being typed out keeps its color.

use log::*;
use regex::Regex;
use std::sync::OnceLock;

const PATTERN: &str = concat!(
    r#"(?P<comment>//.*$)"#,
    r#"|(?P<string>"[^"]*"?|'[^']*'?)"#,
    r#"|(?P<keyword>\b(?:import|from|const|return|export|default)\b)"#,
    r#"|(?P<tag></?[A-Z][A-Za-z]*|/?>)"#,
    r#"|(?P<attribute>\b[a-z]+=)"#,
    r#"|(?P<punctuation>[{}()\[\];,])"#,
);

/// Specifying token categories.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Plain,
    Comment,
    String,
    Keyword,
    Tag,
    Attribute,
    Punctuation,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Highlighter {
            pattern: Regex::new(PATTERN)?,
        })
    }

    /// Split one line into tokens covering every byte of it.
    ///
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut last = 0;
        for caps in self.pattern.captures_iter(line) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                tokens.push(Token {
                    kind: TokenKind::Plain,
                    text: &line[last..whole.start()],
                });
            }
            let kind = [
                ("comment", TokenKind::Comment),
                ("string", TokenKind::String),
                ("keyword", TokenKind::Keyword),
                ("tag", TokenKind::Tag),
                ("attribute", TokenKind::Attribute),
                ("punctuation", TokenKind::Punctuation),
            ]
            .iter()
            .find(|(name, _)| caps.name(name).is_some())
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::Plain);
            tokens.push(Token {
                kind,
                text: whole.as_str(),
            });
            last = whole.end();
        }
        if last < line.len() {
            tokens.push(Token {
                kind: TokenKind::Plain,
                text: &line[last..],
            });
        }
        tokens
    }
}

/// Return the shared highlighter, or none if the pattern failed to compile.
///
pub fn highlighter() -> Option<&'static Highlighter> {
    static HIGHLIGHTER: OnceLock<Option<Highlighter>> = OnceLock::new();
    HIGHLIGHTER
        .get_or_init(|| match Highlighter::new() {
            Ok(highlighter) => Some(highlighter),
            Err(e) => {
                warn!("Failed to compile highlight pattern: {}", e);
                None
            }
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
        Highlighter::new()
            .unwrap()
            .tokenize(line)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(
            kinds("// Welcome to my workspace"),
            vec![(TokenKind::Comment, "// Welcome to my workspace")]
        );
    }

    #[test]
    fn test_import_line() {
        let tokens = kinds("import { Developer } from './universe';");
        assert_eq!(tokens[0], (TokenKind::Keyword, "import"));
        assert!(tokens.contains(&(TokenKind::Keyword, "from")));
        assert!(tokens.contains(&(TokenKind::String, "'./universe'")));
        assert_eq!(tokens.last(), Some(&(TokenKind::Punctuation, ";")));
    }

    #[test]
    fn test_attribute_and_partial_string() {
        let tokens = kinds("      name=\"Katar");
        assert_eq!(tokens[0], (TokenKind::Plain, "      "));
        assert_eq!(tokens[1], (TokenKind::Attribute, "name="));
        assert_eq!(tokens[2], (TokenKind::String, "\"Katar"));
    }

    #[test]
    fn test_tokens_cover_whole_line() {
        let line = "    <Developer";
        let joined: String = Highlighter::new()
            .unwrap()
            .tokenize(line)
            .iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(joined, line);
        assert!(kinds(line).contains(&(TokenKind::Tag, "<Developer")));
    }

    #[test]
    fn test_shared_highlighter_compiles() {
        assert!(highlighter().is_some());
    }
}
