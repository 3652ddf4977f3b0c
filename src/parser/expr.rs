use crate::{
    ast::{ast::ParseNode, types::DataType},
    errors::errors::{Error, Expected, SemanticErrorKind},
    lexer::tokens::TokenKind,
    type_checker::type_checker::{type_of_binary_arithmetic, type_of_relational},
};

use super::{
    lookups::{BindingPower, TypedNode},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<TypedNode, Error> {
    // First parse NUD
    let nud = parser
        .get_nud_handler(parser.current_token_kind())
        .ok_or_else(|| parser.unexpected(Expected::Expression))?;

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller, keep extending lhs
    while parser.get_binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let led = match parser.get_led_handler(token_kind) {
            Some(led) => led,
            None => break,
        };
        let operator_bp = parser.get_binding_power(token_kind);

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

/// `expression [relop expression]`. At most one comparison is accepted.
pub fn parse_condition(parser: &mut Parser) -> Result<TypedNode, Error> {
    let (left, left_type) = parse_expr(parser, BindingPower::Default)?;
    let mut node = ParseNode::new("Condition", left.line);
    node.push(left);

    if !parser.current_token_kind().is_relational() {
        node.data_type = left_type;
        return Ok((node, left_type));
    }

    let operator = parser.advance();
    let (right, right_type) = parse_expr(parser, BindingPower::Default)?;

    let result_type = match type_of_relational(left_type, &operator.value, right_type) {
        Ok(ty) => ty,
        Err(kind) => {
            parser.add_error(operator.line, kind);
            DataType::Unknown
        }
    };

    node.push(ParseNode::new(operator.value, operator.line));
    node.push(right);
    node.data_type = result_type;

    Ok((node, result_type))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<TypedNode, Error> {
    let data_type = match parser.current_token_kind() {
        TokenKind::Integer => DataType::Int,
        TokenKind::Double => DataType::Double,
        TokenKind::String => DataType::Str,
        TokenKind::Boolean => DataType::Bool,
        _ => return Err(parser.unexpected(Expected::Expression)),
    };

    let token = parser.advance();
    let label = if token.kind == TokenKind::String {
        format!("\"{}\"", token.value)
    } else {
        token.value
    };

    Ok((ParseNode::typed(label, token.line, data_type), data_type))
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<TypedNode, Error> {
    if parser.peek_kind() == TokenKind::OpenParen {
        let call = parse_call_expr(parser)?;
        return Ok((call, DataType::Unknown));
    }

    let token = parser.expect(TokenKind::Identifier)?;
    let data_type = resolve_identifier(parser, &token.value, token.line);

    Ok((ParseNode::typed(token.value, token.line, data_type), data_type))
}

/// Looks `name` up in the live scopes, reporting it when undeclared.
/// Undeclared names resolve to `unknown`.
pub fn resolve_identifier(parser: &mut Parser, name: &str, line: usize) -> DataType {
    let declared = parser.symbols().lookup(name).map(|symbol| symbol.data_type);

    match declared {
        Some(data_type) => data_type,
        None => {
            parser.add_error(line, SemanticErrorKind::UndeclaredIdentifier { name: name.to_string() });
            DataType::Unknown
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: TypedNode, bp: BindingPower) -> Result<TypedNode, Error> {
    let (left, left_type) = left;
    let operator_token = parser.advance();

    let (right, right_type) = parse_expr(parser, bp)?;

    let result_type = match type_of_binary_arithmetic(left_type, &operator_token.value, right_type) {
        Ok(ty) => ty,
        Err(kind) => {
            parser.add_error(operator_token.line, kind);
            DataType::Unknown
        }
    };

    let mut node = ParseNode::typed("BinaryExpr", operator_token.line, result_type);
    node.push(left);
    node.push(ParseNode::new(operator_token.value, operator_token.line));
    node.push(right);

    Ok((node, result_type))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<TypedNode, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let (inner, data_type) = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let mut node = ParseNode::typed("Paren", inner.line, data_type);
    node.push(inner);

    Ok((node, data_type))
}

/// `name ( [expr {, expr}] )`. The callee must be a visible name, but it
/// carries no signature, so the call is typed `unknown`.
pub fn parse_call_expr(parser: &mut Parser) -> Result<ParseNode, Error> {
    let callee = parser.expect(TokenKind::Identifier)?;
    resolve_identifier(parser, &callee.value, callee.line);

    let mut node = ParseNode::typed(format!("Call {}", callee.value), callee.line, DataType::Unknown);

    parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let (argument, _) = parse_expr(parser, BindingPower::Default)?;
            node.push(argument);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance();
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(node)
}
