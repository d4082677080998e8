use std::iter::Peekable;

use crate::{ast::Call, error::ParseError, interpreter::lexer::Token, value::Number};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one call statement.
///
/// The parentheses may be omitted for operations that take no arguments, so
/// `countdown` and `countdown()` are the same call. The statement must be
/// followed by a newline, a `;` or the end of input.
///
/// Grammar: `statement := IDENT ("(" (number ("," number)*)? ")")?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operation name.
///
/// # Returns
/// The parsed [`Call`].
///
/// # Errors
/// - `UnexpectedToken` if the statement does not start with a name or an
///   argument is not a number.
/// - `UnexpectedEndOfInput` if the argument list is not closed, reported on
///   the line of the call. An empty token stream has no line and reports
///   line 0.
/// - `UnexpectedTrailingTokens` if anything follows the call on the same
///   statement.
///
/// # Example
/// ```
/// use leet::{
///     ast::Call,
///     interpreter::{lexer::Token, parser::parse_statement},
///     value::Number,
/// };
///
/// let tokens = vec![(Token::Identifier("double".into()), 1),
///                   (Token::LParen, 1),
///                   (Token::Minus, 1),
///                   (Token::Integer(4), 1),
///                   (Token::RParen, 1)];
///
/// let call = parse_statement(&mut tokens.iter().peekable()).unwrap();
/// assert_eq!(call, Call { name: "double".into(), args: vec![Number::Integer(-4)], line: 1 });
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Call>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected operation name, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let args = if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        parse_comma_separated(tokens, |tokens| parse_number(tokens, line), &Token::RParen, line)?
    } else {
        Vec::new()
    };

    match tokens.next() {
        None | Some((Token::NewLine | Token::Semicolon, _)) => {},
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                              line:  *line, });
        },
    }

    Ok(Call { name, args, line })
}

/// Parses a numeric literal with an optional leading sign.
///
/// `line` is the line of the enclosing call, reported if the input ends
/// before the literal.
///
/// Grammar: `number := ("-" | "+")? (INTEGER | REAL)`
fn parse_number<'a, I>(tokens: &mut Peekable<I>, mut line: usize) -> ParseResult<Number>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let negative = match tokens.peek() {
        Some((Token::Minus, sign_line)) => {
            line = *sign_line;
            tokens.next();
            true
        },
        Some((Token::Plus, sign_line)) => {
            line = *sign_line;
            tokens.next();
            false
        },
        _ => false,
    };

    match tokens.next() {
        Some((Token::Integer(n), _)) => Ok(Number::Integer(if negative { -n } else { *n })),
        Some((Token::Real(r), _)) => Ok(Number::Real(if negative { -r } else { *r })),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected number, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
fn parse_comma_separated<'a, I, T>(tokens: &mut Peekable<I>,
                                   parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
                                   closing: &Token,
                                   line: usize)
                                   -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(tokens: &[(Token, usize)]) -> ParseResult<Call> {
        parse_statement(&mut tokens.iter().peekable())
    }

    #[test]
    fn parentheses_are_optional_without_arguments() {
        let bare = parse(&[(Token::Identifier("sayHello".into()), 3)]).unwrap();
        let called = parse(&[(Token::Identifier("sayHello".into()), 3),
                             (Token::LParen, 3),
                             (Token::RParen, 3)]).unwrap();
        assert_eq!(bare, called);
        assert_eq!(bare.line, 3);
    }

    #[test]
    fn two_arguments() {
        let call = parse(&[(Token::Identifier("multiply".into()), 1),
                           (Token::LParen, 1),
                           (Token::Real(1.5), 1),
                           (Token::Comma, 1),
                           (Token::Plus, 1),
                           (Token::Integer(2), 1),
                           (Token::RParen, 1),
                           (Token::Semicolon, 1)]).unwrap();
        assert_eq!(call.args, vec![Number::Real(1.5), Number::Integer(2)]);
    }

    #[test]
    fn unclosed_argument_list() {
        let err = parse(&[(Token::Identifier("double".into()), 2),
                          (Token::LParen, 2),
                          (Token::Integer(1), 2)]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 2 }));
    }

    #[test]
    fn missing_operand_reports_the_call_line() {
        let err = parse(&[(Token::Identifier("double".into()), 3),
                          (Token::LParen, 3),
                          (Token::Minus, 3)]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 3 }));

        let err = parse(&[(Token::Identifier("multiply".into()), 2),
                          (Token::LParen, 2),
                          (Token::Integer(1), 2),
                          (Token::Comma, 2)]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 2 }));
    }

    #[test]
    fn trailing_tokens() {
        let err = parse(&[(Token::Identifier("double".into()), 1),
                          (Token::LParen, 1),
                          (Token::Integer(1), 1),
                          (Token::RParen, 1),
                          (Token::Integer(2), 1)]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedTrailingTokens { .. }));
    }

    #[test]
    fn statement_must_start_with_a_name() {
        let err = parse(&[(Token::Integer(5), 4)]).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { line: 4, .. }));
    }
}
