//! Utility macros for the calculator front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SYMBOL_HANDLER!` - Creates a lexer handler for single-character tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, Literal::Integer(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a single-character operator or parenthesis.
///
/// The generated handler builds a token of the given kind carrying the
/// character as its literal and moves the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_SYMBOL_HANDLER!(TokenKind::Plus, '+'),
/// }
/// ```
#[macro_export]
macro_rules! MK_SYMBOL_HANDLER {
    ($kind:expr, $symbol:literal) => {
        |lexer: &mut Lexer, _matched: &str| -> Result<Token, Error> {
            let start = lexer.position();
            lexer.advance_n($symbol.len_utf8());
            Ok(MK_TOKEN!(
                $kind,
                Literal::Symbol($symbol),
                Span {
                    start,
                    end: lexer.position(),
                }
            ))
        }
    };
}
