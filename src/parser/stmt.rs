use crate::{
    ast::{ast::ParseNode, types::DataType},
    errors::errors::{AssignContext, Error, ErrorImpl, Expected, SemanticErrorKind},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_call_expr, parse_condition, parse_expr, resolve_identifier},
        lookups::BindingPower,
    },
    type_checker::type_checker::{check_condition, is_assignable},
};

use super::parser::Parser;

/// Parses statements into `parent` until EOF or a closing brace.
pub fn parse_stmt_list(parser: &mut Parser, parent: &mut ParseNode) -> Result<(), Error> {
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        parent.push(parse_stmt(parser)?);
    }

    Ok(())
}

pub fn parse_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    match parser.get_stmt_handler(parser.current_token_kind()) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected(Expected::Statement)),
    }
}

/// `type ident [[$]= expr] ;`
///
/// The name is bound before the initializer is analysed.
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let type_token = parser.advance();
    let declared_type = match DataType::from_keyword(type_token.kind) {
        Some(ty) => ty,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: Expected::Declaration,
                    found: type_token.kind,
                    value: type_token.value,
                },
                type_token.line,
            ))
        }
    };

    let identifier = parser.expect(TokenKind::Identifier)?;
    let mut node = ParseNode::new("Declaration", identifier.line);
    node.push(ParseNode::typed(identifier.value.clone(), identifier.line, declared_type));

    if let Err(previous) = parser
        .symbols_mut()
        .declare(&identifier.value, declared_type, identifier.line)
    {
        parser.add_error(identifier.line, SemanticErrorKind::Redeclaration {
            name: identifier.value.clone(),
            previous_line: previous.line,
        });
    }

    if matches!(parser.current_token_kind(), TokenKind::Dollar | TokenKind::Assignment) {
        if parser.current_token_kind() == TokenKind::Dollar {
            parser.advance();
        }
        parser.expect(TokenKind::Assignment)?;

        let (value, value_type) = parse_expr(parser, BindingPower::Default)?;
        node.push(value);

        if !is_assignable(declared_type, value_type) {
            parser.add_error(identifier.line, SemanticErrorKind::TypeMismatch {
                context: AssignContext::Initialization,
                name: identifier.value,
                expected: declared_type,
                found: value_type,
            });
        }
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(node)
}

/// Assignment, increment/decrement or call, terminated by `;`.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let node = parse_simple_stmt(parser, AssignContext::Assignment)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(node)
}

/// The unterminated statement forms that start with an identifier. Shared
/// by statements and the update clause of `CHECKLIST`.
pub fn parse_simple_stmt(parser: &mut Parser, context: AssignContext) -> Result<ParseNode, Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected(Expected::Token(TokenKind::Identifier)));
    }

    match parser.peek_kind() {
        TokenKind::OpenParen => parse_call_expr(parser),
        TokenKind::Dollar | TokenKind::Assignment => parse_assignment(parser, context),
        TokenKind::PlusPlus | TokenKind::MinusMinus => parse_step(parser),
        _ => {
            parser.advance();
            Err(parser.unexpected(Expected::AssignmentOrCall))
        }
    }
}

fn parse_assignment(parser: &mut Parser, context: AssignContext) -> Result<ParseNode, Error> {
    let target = parser.advance();
    let target_type = parser.symbols().lookup(&target.value).map(|symbol| symbol.data_type);

    if target_type.is_none() {
        parser.add_error(target.line, SemanticErrorKind::UndeclaredIdentifier {
            name: target.value.clone(),
        });
    }

    if parser.current_token_kind() == TokenKind::Dollar {
        parser.advance();
    }
    parser.expect(TokenKind::Assignment)?;

    let (value, value_type) = parse_expr(parser, BindingPower::Default)?;

    let mut node = ParseNode::new("Assignment", target.line);
    node.push(ParseNode::typed(
        target.value.clone(),
        target.line,
        target_type.unwrap_or(DataType::Unknown),
    ));
    node.push(value);

    if let Some(expected) = target_type {
        if !is_assignable(expected, value_type) {
            parser.add_error(target.line, SemanticErrorKind::TypeMismatch {
                context,
                name: target.value,
                expected,
                found: value_type,
            });
        }
    }

    Ok(node)
}

fn parse_step(parser: &mut Parser) -> Result<ParseNode, Error> {
    let target = parser.advance();
    let target_type = resolve_identifier(parser, &target.value, target.line);
    let operator = parser.advance();

    let label = if operator.kind == TokenKind::PlusPlus {
        "Increment"
    } else {
        "Decrement"
    };

    let mut node = ParseNode::new(label, target.line);
    node.push(ParseNode::typed(target.value, target.line, target_type));

    Ok(node)
}

fn gate_condition(parser: &mut Parser, construct: &str, condition: &ParseNode, condition_type: DataType) {
    if let Err(kind) = check_condition(construct, condition_type) {
        parser.add_error(condition.line, kind);
    }
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("IF", keyword.line);

    parser.expect(TokenKind::OpenParen)?;
    let (condition, condition_type) = parse_condition(parser)?;
    gate_condition(parser, &keyword.value, &condition, condition_type);
    node.push(condition);
    parser.expect(TokenKind::CloseParen)?;

    node.push(parse_block_stmt(parser)?);

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        node.push(parse_block_stmt(parser)?);
    }

    Ok(node)
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("WHILE", keyword.line);

    parser.expect(TokenKind::OpenParen)?;
    let (condition, condition_type) = parse_condition(parser)?;
    gate_condition(parser, &keyword.value, &condition, condition_type);
    node.push(condition);
    parser.expect(TokenKind::CloseParen)?;

    node.push(parse_block_stmt(parser)?);

    Ok(node)
}

/// `CHECKLIST ( declaration condition ; update ) block`
///
/// The header opens a scope that also covers the body, so the loop
/// variable is gone once the loop ends.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("FOR", keyword.line);

    parser.expect(TokenKind::OpenParen)?;
    parser.symbols_mut().enter_scope();

    if !parser.current_token_kind().is_type_keyword() {
        return Err(parser.unexpected(Expected::Declaration));
    }
    node.push(parse_var_decl_stmt(parser)?);

    let (condition, condition_type) = parse_condition(parser)?;
    gate_condition(parser, &keyword.value, &condition, condition_type);
    node.push(condition);
    parser.expect(TokenKind::Semicolon)?;

    node.push(parse_simple_stmt(parser, AssignContext::Update)?);
    parser.expect(TokenKind::CloseParen)?;

    node.push(parse_block_stmt(parser)?);
    parser.symbols_mut().exit_scope();

    Ok(node)
}

pub fn parse_output_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("OUTPUT", keyword.line);

    let (value, _) = parse_expr(parser, BindingPower::Default)?;
    node.push(value);
    parser.expect(TokenKind::Semicolon)?;

    Ok(node)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("RETURN", keyword.line);

    let (value, _) = parse_expr(parser, BindingPower::Default)?;
    node.push(value);
    parser.expect(TokenKind::Semicolon)?;

    Ok(node)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;
    let mut node = ParseNode::new("Block", open.line);

    parser.symbols_mut().enter_scope();
    parse_stmt_list(parser, &mut node)?;
    parser.expect(TokenKind::CloseCurly)?;
    parser.symbols_mut().exit_scope();

    Ok(node)
}

/// `#ATTACH name`. Recorded only; the target is never opened.
pub fn parse_include_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let target = parser.expect(TokenKind::Identifier)?;

    let mut node = ParseNode::new("Include", keyword.line);
    node.push(ParseNode::typed(
        format!("#ATTACH {}", target.value),
        target.line,
        DataType::Include,
    ));

    Ok(node)
}

/// `plan MORNING_COFFEE ( ) block`, the program's single entry point.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<ParseNode, Error> {
    let keyword = parser.advance();
    let mut node = ParseNode::new("PlanMain", keyword.line);

    parser.expect(TokenKind::Main)?;
    parser.expect(TokenKind::OpenParen)?;
    parser.expect(TokenKind::CloseParen)?;

    if let Some(previous_line) = parser.define_entry_point(keyword.line) {
        parser.add_error(keyword.line, SemanticErrorKind::EntryPointRedefined { previous_line });
    }

    parser.symbols_mut().enter_scope();
    node.push(parse_block_stmt(parser)?);
    parser.symbols_mut().exit_scope();

    Ok(node)
}
