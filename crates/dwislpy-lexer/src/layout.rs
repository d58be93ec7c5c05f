//! Layout pass: converts indentation into block tokens.

use crate::token::{Token, TokenKind};
use dwislpy_core::{Error, LineIndex, Result, Span};

/// Rewrites a raw token stream so that logical lines end in `Newline` and
/// indentation changes become `Indent`/`Dedent`.
///
/// Newlines inside parentheses are dropped, as are blank and comment-only
/// lines (the scanner already skipped their contents).
pub(crate) fn insert_layout(
    raw: Vec<(Token, Span)>,
    index: &LineIndex,
    source_len: usize,
) -> Result<Vec<(Token, Span)>> {
    let mut out = Vec::with_capacity(raw.len() + 8);
    let mut indents = vec![0usize];
    let mut paren_depth = 0usize;
    let mut at_line_start = true;

    for (token, span) in raw {
        if token.kind == TokenKind::Newline {
            if paren_depth == 0 && !at_line_start {
                out.push((Token::synthetic(TokenKind::Newline), span));
                at_line_start = true;
            }
            continue;
        }

        if at_line_start {
            let width = span.start.column - 1;
            let current = indents.last().copied().unwrap_or(0);
            let here = Span::new(span.start, span.start);

            if width > current {
                indents.push(width);
                out.push((Token::synthetic(TokenKind::Indent), here));
            } else {
                while width < indents.last().copied().unwrap_or(0) {
                    indents.pop();
                    out.push((Token::synthetic(TokenKind::Dedent), here));
                }
                if width != indents.last().copied().unwrap_or(0) {
                    return Err(Error::Lexer(
                        "Unindent does not match any outer indentation level".to_string(),
                        span,
                    ));
                }
            }
            at_line_start = false;
        }

        match token.kind {
            TokenKind::LeftParen => paren_depth += 1,
            TokenKind::RightParen => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
        out.push((token, span));
    }

    let end = index.span(source_len..source_len);
    if !at_line_start {
        out.push((Token::synthetic(TokenKind::Newline), end));
    }
    while indents.len() > 1 {
        indents.pop();
        out.push((Token::synthetic(TokenKind::Dedent), end));
    }
    out.push((Token::synthetic(TokenKind::Eof), end));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use crate::{TokenKind, tokenize};
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|(token, _)| token.kind)
            .collect()
    }

    #[test]
    fn test_block_produces_indent_and_dedent() {
        let source = "while x:\n    pass\nprint(x)\n";
        assert_eq!(
            kinds(source),
            vec![
                While, Identifier, Colon, Newline, Indent, Pass, Newline, Dedent, Print,
                LeftParen, Identifier, RightParen, Newline, Eof,
            ]
        );
    }

    #[test]
    fn test_blank_and_comment_lines_are_ignored() {
        let source = "if b:\n\n    # note\n    pass\n\n";
        assert_eq!(
            kinds(source),
            vec![If, Identifier, Colon, Newline, Indent, Pass, Newline, Dedent, Eof]
        );
    }

    #[test]
    fn test_newlines_inside_parentheses_are_joined() {
        let source = "f(1,\n  2)\n";
        assert_eq!(
            kinds(source),
            vec![Identifier, LeftParen, Integer, Comma, Integer, RightParen, Newline, Eof]
        );
    }

    #[test]
    fn test_missing_final_newline_closes_all_blocks() {
        let source = "def f() -> int:\n    if True:\n        return 1";
        let tail: Vec<_> = kinds(source).into_iter().rev().take(4).collect();
        assert_eq!(tail, vec![Eof, Dedent, Dedent, Newline]);
    }

    #[test]
    fn test_inconsistent_dedent_is_an_error() {
        let source = "if b:\n        pass\n    pass\n";
        assert!(tokenize(source).is_err());
    }
}
