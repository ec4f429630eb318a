use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{functions, parser::Parser};

// expr := term (('+' | '-') term)*
pub fn parse_expr(parser: &mut Parser) -> Result<f64, Error> {
    let mut result = parse_term(parser)?;

    loop {
        match parser.current_token_kind() {
            TokenKind::Plus => {
                parser.eat(TokenKind::Plus)?;
                result += parse_term(parser)?;
            }
            TokenKind::Minus => {
                parser.eat(TokenKind::Minus)?;
                result -= parse_term(parser)?;
            }
            _ => return Ok(result),
        }
    }
}

// term := pow_expr (('*' | '/') pow_expr)*
pub fn parse_term(parser: &mut Parser) -> Result<f64, Error> {
    let mut result = parse_pow_expr(parser)?;

    loop {
        match parser.current_token_kind() {
            TokenKind::Multiply => {
                parser.eat(TokenKind::Multiply)?;
                result *= parse_pow_expr(parser)?;
            }
            // x / 0 is left to IEEE-754: inf, -inf or NaN.
            TokenKind::Divide => {
                parser.eat(TokenKind::Divide)?;
                result /= parse_pow_expr(parser)?;
            }
            _ => return Ok(result),
        }
    }
}

// pow_expr := factor ('^' pow_expr)?
pub fn parse_pow_expr(parser: &mut Parser) -> Result<f64, Error> {
    let base = parse_factor(parser)?;

    if parser.current_token_kind() != TokenKind::Pow {
        return Ok(base);
    }

    parser.eat(TokenKind::Pow)?;
    let exponent = parse_pow_expr(parser)?;

    Ok(base.powf(exponent))
}

pub fn parse_factor(parser: &mut Parser) -> Result<f64, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer | TokenKind::Float => {
            parser.advance()?;
            token.number.ok_or_else(|| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            })
        }
        TokenKind::LParen => {
            parser.eat(TokenKind::LParen)?;
            let result = parse_expr(parser)?;
            parser.eat(TokenKind::RParen)?;
            Ok(result)
        }
        TokenKind::Sqrt => {
            let argument = parse_call_argument(parser, TokenKind::Sqrt)?;
            functions::sqrt(argument).map_err(|error| Error::new(error, token.span.start))
        }
        TokenKind::Log => {
            parser.eat(TokenKind::Log)?;
            eat_argument_list_start(parser, TokenKind::Log)?;
            let argument = parse_expr(parser)?;

            let base = if parser.current_token_kind() == TokenKind::Comma {
                parser.eat(TokenKind::Comma)?;
                Some(parse_expr(parser)?)
            } else {
                None
            };

            parser.eat(TokenKind::RParen)?;
            functions::log(argument, base).map_err(|error| Error::new(error, token.span.start))
        }
        TokenKind::Sin => Ok(parse_call_argument(parser, TokenKind::Sin)?.sin()),
        TokenKind::Cos => Ok(parse_call_argument(parser, TokenKind::Cos)?.cos()),
        TokenKind::Tan => Ok(parse_call_argument(parser, TokenKind::Tan)?.tan()),
        TokenKind::EndOfInput
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Multiply
        | TokenKind::Divide
        | TokenKind::Pow
        | TokenKind::RParen
        | TokenKind::Comma => Err(Error::new(
            ErrorImpl::ExpectedFactor {
                found: token.describe(),
            },
            token.span.start,
        )),
    }
}

/// Parses `<function> '(' expr ')'` and returns the argument's value.
fn parse_call_argument(parser: &mut Parser, function: TokenKind) -> Result<f64, Error> {
    parser.eat(function)?;
    eat_argument_list_start(parser, function)?;
    let argument = parse_expr(parser)?;
    parser.eat(TokenKind::RParen)?;

    Ok(argument)
}

fn eat_argument_list_start(parser: &mut Parser, function: TokenKind) -> Result<(), Error> {
    let error = Error::new(
        ErrorImpl::ExpectedArguments {
            function,
            found: parser.current_token().describe(),
        },
        parser.get_position(),
    );

    parser.eat_error(TokenKind::LParen, Some(error))?;
    Ok(())
}
