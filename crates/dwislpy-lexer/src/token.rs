//! Token definitions for the DWISLPY lexer.

use logos::Logos;
use std::fmt;

/// Represents a token in DWISLPY.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Creates a layout token (NEWLINE, INDENT, DEDENT, EOF) with no source text.
    pub fn synthetic(kind: TokenKind) -> Self {
        Self {
            kind,
            text: String::new(),
        }
    }
}

/// Represents the different kinds of tokens in DWISLPY.
///
/// `Indent`, `Dedent` and `Eof` are never produced by the raw scanner; the
/// layout pass inserts them.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
#[logos(skip r"#[^\n]*")]
pub enum TokenKind {
    // Keywords
    #[token("def")]
    Def,

    #[token("if")]
    If,

    #[token("else")]
    Else,

    #[token("while")]
    While,

    #[token("return")]
    Return,

    #[token("pass")]
    Pass,

    #[token("print")]
    Print,

    #[token("input")]
    Input,

    #[token("int")]
    Int,

    #[token("str")]
    Str,

    #[token("bool")]
    Bool,

    #[token("and")]
    And,

    #[token("or")]
    Or,

    #[token("not")]
    Not,

    #[token("True")]
    True,

    #[token("False")]
    False,

    #[token("None")]
    None,

    // Identifiers and literals
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    String,

    // Operators
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("//")]
    SlashSlash,

    #[token("%")]
    Percent,

    #[token("=")]
    Equal,

    #[token("==")]
    EqualEqual,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEqual,

    // Punctuation
    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("->")]
    Arrow,

    // Layout
    #[token("\n")]
    Newline,

    Indent,

    Dedent,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Def => write!(f, "def"),
            Self::If => write!(f, "if"),
            Self::Else => write!(f, "else"),
            Self::While => write!(f, "while"),
            Self::Return => write!(f, "return"),
            Self::Pass => write!(f, "pass"),
            Self::Print => write!(f, "print"),
            Self::Input => write!(f, "input"),
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "str"),
            Self::Bool => write!(f, "bool"),
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
            Self::True => write!(f, "True"),
            Self::False => write!(f, "False"),
            Self::None => write!(f, "None"),

            Self::Identifier => write!(f, "identifier"),
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),

            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::SlashSlash => write!(f, "//"),
            Self::Percent => write!(f, "%"),
            Self::Equal => write!(f, "="),
            Self::EqualEqual => write!(f, "=="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),

            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Colon => write!(f, ":"),
            Self::Arrow => write!(f, "->"),

            Self::Newline => write!(f, "end of line"),
            Self::Indent => write!(f, "indent"),
            Self::Dedent => write!(f, "dedent"),
            Self::Eof => write!(f, "end of file"),
        }
    }
}
