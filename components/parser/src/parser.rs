//! Recursive descent parser for ES5 scripts
//!
//! The parser pulls tokens from a [`TokenSource`] and builds the tree in
//! [`crate::ast`]. Grammar context (strict mode, whether `in` is an operator,
//! whether `break`/`continue`/`return` are legal) lives in a small
//! [`ParseContext`] value. Productions that change it do so through scoped
//! helpers that put the previous value back on every exit path, errors
//! included, so a failed parse never leaks context into the caller.
//!
//! Strict-mode violations in a function's name or parameter list cannot be
//! reported until the body's directive prologue has been read. They are
//! carried as a [`DeferredError`] and raised once strictness is known.

use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

use bitflags::bitflags;
use core_types::{
    is_restricted_word, is_strict_mode_reserved_word, ErrorMessage, SourcePosition, SyntaxError,
};
use tracing::{debug, trace};

use crate::ast::*;
use crate::error::{create_error, create_error_with_token, create_unexpected};
use crate::lexer::{Lexer, Token, TokenClass, TokenKind, TokenSource};
use crate::number::number_to_string;
use crate::precedence::binary_precedence;
use crate::regexp::validate_regexp;

/// Grammar context threaded through the productions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext {
    /// Strict mode code
    pub strict: bool,
    /// `in` may act as a binary operator
    pub allow_in: bool,
    /// Inside a loop body, so `continue` is legal
    pub in_iteration: bool,
    /// Inside a switch body, so `break` is legal
    pub in_switch: bool,
    /// Inside a function body, so `return` is legal
    pub in_function_body: bool,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self {
            strict: false,
            allow_in: true,
            in_iteration: false,
            in_switch: false,
            in_function_body: false,
        }
    }
}

/// Strict-mode violation found before strictness is known
type DeferredError = Option<(SourcePosition, ErrorMessage)>;

bitflags! {
    /// Kinds of property already defined under one name in an object literal
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct PropertyKinds: u8 {
        const DATA = 1;
        const GETTER = 2;
        const SETTER = 4;
    }
}

/// Deepest nesting of statements and expressions a parser accepts.
///
/// Each level costs several native stack frames, so the limit keeps deeply
/// nested input within an 8 MiB main-thread stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// One pending operator of the binary expression stack
struct BinaryFrame {
    start: SourcePosition,
    left: Expression,
    operator: BinaryOperator,
    precedence: u8,
}

/// ES5 script parser
pub struct Parser<'a, S: TokenSource<'a> = Lexer<'a>> {
    tokens: S,
    context: ParseContext,
    labels: HashSet<String>,
    depth: usize,
    _source: PhantomData<&'a str>,
}

impl<'a> Parser<'a, Lexer<'a>> {
    /// Create a parser over source text.
    ///
    /// Fails if the first token cannot be scanned.
    pub fn new(source: &'a str) -> Result<Self, SyntaxError> {
        Ok(Self::from_token_source(Lexer::new(source)?))
    }
}

impl<'a, S: TokenSource<'a>> Parser<'a, S> {
    /// Create a parser over an existing token source
    pub fn from_token_source(tokens: S) -> Self {
        Self {
            tokens,
            context: ParseContext::default(),
            labels: HashSet::new(),
            depth: 0,
            _source: PhantomData,
        }
    }

    /// Current grammar context
    pub fn context(&self) -> ParseContext {
        self.context
    }

    /// Parse the whole input as a Script
    pub fn parse_script(&mut self) -> Result<Script, SyntaxError> {
        trace!("parse_script");
        let start = self.tokens.location();
        let context = self.context;
        let (body, is_strict) = self.with_context(context, |this| this.parse_body(true))?;
        debug!(
            strict = is_strict,
            statements = body.statements.len(),
            "parsed script"
        );
        Ok(Script {
            body: self.mark_location(body, start),
        })
    }

    // Context scoping

    fn with_context<T>(
        &mut self,
        context: ParseContext,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    fn with_allow_in<T>(
        &mut self,
        allow_in: bool,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let context = ParseContext {
            allow_in,
            ..self.context
        };
        self.with_context(context, f)
    }

    fn in_iteration_body<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let context = ParseContext {
            in_iteration: true,
            ..self.context
        };
        self.with_context(context, f)
    }

    fn in_switch_body<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let context = ParseContext {
            in_switch: true,
            ..self.context
        };
        self.with_context(context, f)
    }

    /// Labels do not cross function boundaries, and neither do loops or
    /// switches for the purpose of `break`/`continue`.
    fn in_function_scope<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        let saved_labels = std::mem::take(&mut self.labels);
        let context = ParseContext {
            in_iteration: false,
            in_switch: false,
            in_function_body: true,
            ..self.context
        };
        let result = self.with_context(context, f);
        self.labels = saved_labels;
        result
    }

    fn with_label<T>(
        &mut self,
        label: &str,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        self.labels.insert(label.to_string());
        let result = f(self);
        self.labels.remove(label);
        result
    }

    /// Run `f` one nesting level deeper
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!(depth = self.depth, "nesting limit reached");
            return Err(self.error(ErrorMessage::NestingTooDeep, &[]));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // Token helpers

    fn lookahead(&self) -> &Token<'a> {
        self.tokens.lookahead()
    }

    fn matches(&self, kind: TokenKind) -> bool {
        self.tokens.matches(kind)
    }

    fn lex(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.tokens.lex()
    }

    fn eat(&mut self, kind: TokenKind) -> Result<Option<Token<'a>>, SyntaxError> {
        self.tokens.eat(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, SyntaxError> {
        if self.matches(kind) {
            self.lex()
        } else {
            Err(self.unexpected(self.lookahead()))
        }
    }

    fn unexpected(&self, token: &Token<'_>) -> SyntaxError {
        create_unexpected(token, self.context.strict)
    }

    /// Error located at the lookahead
    fn error(&self, message: ErrorMessage, args: &[&str]) -> SyntaxError {
        create_error(message, args, self.tokens.location())
    }

    /// Hook for attaching source locations to nodes. Nodes carry no
    /// location yet, so this hands the node back unchanged.
    fn mark_location<T>(&self, node: T, _start: SourcePosition) -> T {
        node
    }

    /// Automatic semicolon insertion
    fn consume_semicolon(&mut self) -> Result<(), SyntaxError> {
        // fast path: `;` directly after the previous token
        let index = self.tokens.index();
        if self.tokens.source().as_bytes().get(index) == Some(&b';') {
            self.lex()?;
            return Ok(());
        }
        if self.tokens.has_line_terminator_before_next() {
            return Ok(());
        }
        if self.eat(TokenKind::Semicolon)?.is_some() {
            return Ok(());
        }
        if !self.tokens.eof() && !self.matches(TokenKind::RBrace) {
            return Err(self.unexpected(self.lookahead()));
        }
        Ok(())
    }

    // Bodies and directives

    /// Statements up to end of input or `}`, with the directive prologue
    /// split off. Returns whether the body is strict.
    fn parse_body(&mut self, accept_eof: bool) -> Result<(FunctionBody, bool), SyntaxError> {
        let mut directives = Vec::new();
        let mut statements = Vec::new();
        let mut in_prologue = true;
        let mut is_strict = self.context.strict;
        let mut first_octal: Option<SourcePosition> = None;

        loop {
            let at_end = if accept_eof {
                self.tokens.eof()
            } else {
                self.matches(TokenKind::RBrace)
            };
            if at_end {
                break;
            }

            let token = self.lookahead();
            let (kind, text, octal, start) = (token.kind, token.text, token.octal, token.start);
            let statement = self.parse_statement()?;
            if !in_prologue {
                statements.push(statement);
                continue;
            }

            match statement {
                Statement::ExpressionStatement {
                    expression: Expression::LiteralStringExpression { value, .. },
                } if kind == TokenKind::String => {
                    trace!(directive = text, "directive");
                    if text == "\"use strict\"" || text == "'use strict'" {
                        directives.push(Directive::UseStrictDirective);
                        is_strict = true;
                        if !self.context.strict {
                            debug!(line = start.line, column = start.column, "entering strict mode");
                        }
                        self.context.strict = true;
                        if let Some(position) = first_octal {
                            return Err(create_error(
                                ErrorMessage::StrictOctalLiteral,
                                &[],
                                position,
                            ));
                        }
                    } else {
                        directives.push(Directive::UnknownDirective { value });
                        if first_octal.is_none() && octal {
                            first_octal = Some(start);
                        }
                    }
                }
                statement => {
                    in_prologue = false;
                    statements.push(statement);
                }
            }
        }

        Ok((
            FunctionBody {
                directives,
                statements,
            },
            is_strict,
        ))
    }

    fn parse_function_body(&mut self) -> Result<(FunctionBody, bool), SyntaxError> {
        let start = self.tokens.location();
        trace!(line = start.line, column = start.column, "parse_function_body");
        self.in_function_scope(|this| {
            this.expect(TokenKind::LBrace)?;
            let (body, is_strict) = this.parse_body(false)?;
            this.expect(TokenKind::RBrace)?;
            Ok((this.mark_location(body, start), is_strict))
        })
    }

    // Statements

    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.nested(|this| {
            let start = this.tokens.location();
            let statement = this.parse_statement_inner()?;
            Ok(this.mark_location(statement, start))
        })
    }

    fn parse_statement_inner(&mut self) -> Result<Statement, SyntaxError> {
        if self.tokens.eof() {
            return Err(self.unexpected(self.lookahead()));
        }

        match self.lookahead().kind {
            TokenKind::Semicolon => self.parse_empty_statement(),
            TokenKind::LBrace => self.parse_block_statement(),
            TokenKind::LParen => self.parse_expression_statement(),
            TokenKind::Break => self.parse_break_statement(),
            TokenKind::Continue => self.parse_continue_statement(),
            TokenKind::Debugger => self.parse_debugger_statement(),
            TokenKind::Do => self.parse_do_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Switch => self.parse_switch_statement(),
            TokenKind::Throw => self.parse_throw_statement(),
            TokenKind::Try => self.parse_try_statement(),
            TokenKind::Var | TokenKind::Let | TokenKind::Const => {
                self.parse_variable_declaration_statement()
            }
            TokenKind::While => self.parse_while_statement(),
            TokenKind::With => self.parse_with_statement(),
            _ => self.parse_expression_or_labeled_statement(),
        }
    }

    fn parse_expression_or_labeled_statement(&mut self) -> Result<Statement, SyntaxError> {
        let expression = self.parse_expression()?;
        match expression {
            Expression::IdentifierExpression { identifier } if self.matches(TokenKind::Colon) => {
                self.lex()?;
                if self.labels.contains(&identifier.name) {
                    return Err(self.error(ErrorMessage::LabelRedeclaration, &[&identifier.name]));
                }
                let body = self.with_label(&identifier.name, |this| this.parse_statement())?;
                Ok(Statement::LabeledStatement {
                    label: identifier,
                    body: Box::new(body),
                })
            }
            expression => {
                self.consume_semicolon()?;
                Ok(Statement::ExpressionStatement { expression })
            }
        }
    }

    fn parse_empty_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Semicolon)?;
        Ok(Statement::EmptyStatement)
    }

    fn parse_block_statement(&mut self) -> Result<Statement, SyntaxError> {
        Ok(Statement::BlockStatement {
            block: self.parse_block()?,
        })
    }

    fn parse_expression_statement(&mut self) -> Result<Statement, SyntaxError> {
        let expression = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::ExpressionStatement { expression })
    }

    fn parse_break_statement(&mut self) -> Result<Statement, SyntaxError> {
        let token = self.expect(TokenKind::Break)?;
        let breakable = self.context.in_iteration || self.context.in_switch;
        let illegal = || create_error_with_token(&token, ErrorMessage::IllegalBreak, &[]);

        if self.eat(TokenKind::Semicolon)?.is_some()
            || self.tokens.has_line_terminator_before_next()
        {
            if !breakable {
                return Err(illegal());
            }
            return Ok(Statement::BreakStatement { label: None });
        }

        let label = self.parse_jump_label()?;
        self.consume_semicolon()?;
        if label.is_none() && !breakable {
            return Err(illegal());
        }
        Ok(Statement::BreakStatement { label })
    }

    fn parse_continue_statement(&mut self) -> Result<Statement, SyntaxError> {
        let token = self.expect(TokenKind::Continue)?;
        let illegal = || create_error_with_token(&token, ErrorMessage::IllegalContinue, &[]);

        if self.eat(TokenKind::Semicolon)?.is_some()
            || self.tokens.has_line_terminator_before_next()
        {
            if !self.context.in_iteration {
                return Err(illegal());
            }
            return Ok(Statement::ContinueStatement { label: None });
        }

        let label = self.parse_jump_label()?;
        self.consume_semicolon()?;
        if !self.context.in_iteration {
            return Err(illegal());
        }
        Ok(Statement::ContinueStatement { label })
    }

    /// Optional label after `break` or `continue`; it must be active
    fn parse_jump_label(&mut self) -> Result<Option<Identifier>, SyntaxError> {
        if !self.matches(TokenKind::Identifier) {
            return Ok(None);
        }
        let label = self.parse_variable_identifier()?;
        if !self.labels.contains(&label.name) {
            return Err(self.error(ErrorMessage::UnknownLabel, &[&label.name]));
        }
        Ok(Some(label))
    }

    fn parse_debugger_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Debugger)?;
        self.consume_semicolon()?;
        Ok(Statement::DebuggerStatement)
    }

    fn parse_do_while_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Do)?;
        let body = self.in_iteration_body(|this| this.parse_statement())?;
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.eat(TokenKind::Semicolon)?;
        Ok(Statement::DoWhileStatement {
            body: Box::new(body),
            test,
        })
    }

    fn parse_for_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;

        if self.eat(TokenKind::Semicolon)?.is_some() {
            return self.parse_for_rest(None);
        }

        if self.matches(TokenKind::Var) || self.matches(TokenKind::Let) {
            let declaration = self.with_allow_in(false, |this| this.parse_variable_declaration())?;
            if declaration.declarators.len() == 1 && self.eat(TokenKind::In)?.is_some() {
                let right = self.parse_expression()?;
                let body = self.parse_iteration_body()?;
                return Ok(Statement::ForInStatement {
                    left: ForInit::VariableDeclaration(declaration),
                    right,
                    body,
                });
            }
            self.expect(TokenKind::Semicolon)?;
            return self.parse_for_rest(Some(ForInit::VariableDeclaration(declaration)));
        }

        let init = self.with_allow_in(false, |this| this.parse_expression())?;
        if self.matches(TokenKind::In) {
            if !is_left_hand_side(&init) {
                return Err(self.error(ErrorMessage::InvalidLhsInForIn, &[]));
            }
            self.lex()?;
            let right = self.parse_expression()?;
            let body = self.parse_iteration_body()?;
            return Ok(Statement::ForInStatement {
                left: ForInit::Expression(init),
                right,
                body,
            });
        }
        self.expect(TokenKind::Semicolon)?;
        self.parse_for_rest(Some(ForInit::Expression(init)))
    }

    /// `test; update) body` of a C-style `for`, after the first `;`
    fn parse_for_rest(&mut self, init: Option<ForInit>) -> Result<Statement, SyntaxError> {
        let test = if self.matches(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect(TokenKind::Semicolon)?;
        let update = if self.matches(TokenKind::RParen) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        let body = self.parse_iteration_body()?;
        Ok(Statement::ForStatement {
            init,
            test,
            update,
            body,
        })
    }

    /// `) body` of a loop head
    fn parse_iteration_body(&mut self) -> Result<Box<Statement>, SyntaxError> {
        self.expect(TokenKind::RParen)?;
        let body = self.in_iteration_body(|this| this.parse_statement())?;
        Ok(Box::new(body))
    }

    fn parse_if_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let consequent = Box::new(self.parse_statement()?);
        let alternate = match self.eat(TokenKind::Else)? {
            Some(_) => Some(Box::new(self.parse_statement()?)),
            None => None,
        };
        Ok(Statement::IfStatement {
            test,
            consequent,
            alternate,
        })
    }

    fn parse_return_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Return)?;
        if !self.context.in_function_body {
            return Err(self.error(ErrorMessage::IllegalReturn, &[]));
        }
        if self.tokens.has_line_terminator_before_next() {
            return Ok(Statement::ReturnStatement { expression: None });
        }

        let expression = if self.matches(TokenKind::Semicolon)
            || self.matches(TokenKind::RBrace)
            || self.tokens.eof()
        {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.consume_semicolon()?;
        Ok(Statement::ReturnStatement { expression })
    }

    fn parse_with_statement(&mut self) -> Result<Statement, SyntaxError> {
        if self.context.strict {
            return Err(self.error(ErrorMessage::StrictModeWith, &[]));
        }
        self.expect(TokenKind::With)?;
        self.expect(TokenKind::LParen)?;
        let object = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::WithStatement { object, body })
    }

    fn parse_switch_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Switch)?;
        self.expect(TokenKind::LParen)?;
        let discriminant = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::LBrace)?;

        if self.eat(TokenKind::RBrace)?.is_some() {
            return Ok(Statement::SwitchStatement {
                discriminant,
                cases: Vec::new(),
            });
        }

        self.in_switch_body(|this| {
            let cases = this.parse_switch_cases()?;
            if !this.matches(TokenKind::Default) {
                this.expect(TokenKind::RBrace)?;
                return Ok(Statement::SwitchStatement {
                    discriminant,
                    cases,
                });
            }

            let default_case = this.parse_switch_default()?;
            let post_default_cases = this.parse_switch_cases()?;
            if this.matches(TokenKind::Default) {
                return Err(this.error(ErrorMessage::MultipleDefaultsInSwitch, &[]));
            }
            this.expect(TokenKind::RBrace)?;
            Ok(Statement::SwitchStatementWithDefault {
                discriminant,
                pre_default_cases: cases,
                default_case,
                post_default_cases,
            })
        })
    }

    fn parse_switch_cases(&mut self) -> Result<Vec<SwitchCase>, SyntaxError> {
        let mut cases = Vec::new();
        while !(self.tokens.eof()
            || self.matches(TokenKind::RBrace)
            || self.matches(TokenKind::Default))
        {
            cases.push(self.parse_switch_case()?);
        }
        Ok(cases)
    }

    fn parse_switch_case(&mut self) -> Result<SwitchCase, SyntaxError> {
        self.expect(TokenKind::Case)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::Colon)?;
        let consequent = self.parse_switch_case_body()?;
        Ok(SwitchCase { test, consequent })
    }

    fn parse_switch_default(&mut self) -> Result<SwitchDefault, SyntaxError> {
        self.expect(TokenKind::Default)?;
        self.expect(TokenKind::Colon)?;
        Ok(SwitchDefault {
            consequent: self.parse_switch_case_body()?,
        })
    }

    fn parse_switch_case_body(&mut self) -> Result<Vec<Statement>, SyntaxError> {
        let mut statements = Vec::new();
        while !(self.tokens.eof()
            || self.matches(TokenKind::RBrace)
            || self.matches(TokenKind::Default)
            || self.matches(TokenKind::Case))
        {
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    fn parse_throw_statement(&mut self) -> Result<Statement, SyntaxError> {
        let token = self.expect(TokenKind::Throw)?;
        if self.tokens.has_line_terminator_before_next() {
            return Err(create_error_with_token(
                &token,
                ErrorMessage::NewlineAfterThrow,
                &[],
            ));
        }
        let expression = self.parse_expression()?;
        self.consume_semicolon()?;
        Ok(Statement::ThrowStatement { expression })
    }

    fn parse_try_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Try)?;
        let body = self.parse_block()?;

        if self.matches(TokenKind::Catch) {
            let catch_clause = self.parse_catch_clause()?;
            if self.eat(TokenKind::Finally)?.is_some() {
                let finalizer = self.parse_block()?;
                return Ok(Statement::TryFinallyStatement {
                    body,
                    catch_clause: Some(catch_clause),
                    finalizer,
                });
            }
            return Ok(Statement::TryCatchStatement { body, catch_clause });
        }

        if self.eat(TokenKind::Finally)?.is_some() {
            let finalizer = self.parse_block()?;
            return Ok(Statement::TryFinallyStatement {
                body,
                catch_clause: None,
                finalizer,
            });
        }

        Err(self.error(ErrorMessage::NoCatchOrFinally, &[]))
    }

    fn parse_catch_clause(&mut self) -> Result<CatchClause, SyntaxError> {
        self.expect(TokenKind::Catch)?;
        self.expect(TokenKind::LParen)?;
        if self.matches(TokenKind::RParen) {
            return Err(self.unexpected(self.lookahead()));
        }

        let binding = self.parse_variable_identifier()?;
        if self.context.strict && is_restricted_word(&binding.name) {
            return Err(self.error(ErrorMessage::StrictCatchVariable, &[]));
        }
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(CatchClause { binding, body })
    }

    fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        self.expect(TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.matches(TokenKind::RBrace) {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Block { statements })
    }

    fn parse_variable_declaration_statement(&mut self) -> Result<Statement, SyntaxError> {
        let declaration = self.parse_variable_declaration()?;
        self.consume_semicolon()?;
        Ok(Statement::VariableDeclarationStatement { declaration })
    }

    fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, SyntaxError> {
        let token = self.lex()?;
        let kind = match token.kind {
            TokenKind::Const => VariableDeclarationKind::Const,
            TokenKind::Let => VariableDeclarationKind::Let,
            _ => VariableDeclarationKind::Var,
        };

        let mut declarators = vec![self.parse_variable_declarator(kind)?];
        while self.eat(TokenKind::Comma)?.is_some() {
            declarators.push(self.parse_variable_declarator(kind)?);
        }
        Ok(VariableDeclaration { kind, declarators })
    }

    fn parse_variable_declarator(
        &mut self,
        kind: VariableDeclarationKind,
    ) -> Result<VariableDeclarator, SyntaxError> {
        let binding = self.parse_variable_identifier()?;
        if self.context.strict && is_restricted_word(&binding.name) {
            return Err(self.error(ErrorMessage::StrictVarName, &[]));
        }

        let init = if kind == VariableDeclarationKind::Const {
            self.expect(TokenKind::Assign)?;
            Some(self.parse_assignment_expression()?)
        } else if self.eat(TokenKind::Assign)?.is_some() {
            Some(self.parse_assignment_expression()?)
        } else {
            None
        };
        Ok(VariableDeclarator { binding, init })
    }

    fn parse_while_statement(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        let body = self.parse_iteration_body()?;
        Ok(Statement::WhileStatement { test, body })
    }

    // Functions

    fn parse_function_declaration(&mut self) -> Result<Statement, SyntaxError> {
        self.expect(TokenKind::Function)?;
        let (name, deferred) = self.parse_function_name()?;
        let (parameters, body) = self.parse_function_rest(deferred)?;
        Ok(Statement::FunctionDeclaration {
            name,
            parameters,
            body,
        })
    }

    fn parse_function_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::Function)?;
        let (name, deferred) = if self.matches(TokenKind::LParen) {
            (None, None)
        } else {
            let (name, deferred) = self.parse_function_name()?;
            (Some(name), deferred)
        };
        let (parameters, body) = self.parse_function_rest(deferred)?;
        Ok(Expression::FunctionExpression {
            name,
            parameters,
            body,
        })
    }

    fn parse_function_name(&mut self) -> Result<(Identifier, DeferredError), SyntaxError> {
        let start = self.tokens.location();
        let name = self.parse_variable_identifier()?;

        let mut deferred = None;
        if is_restricted_word(&name.name) {
            if self.context.strict {
                return Err(create_error(ErrorMessage::StrictFunctionName, &[], start));
            }
            deferred = Some((start, ErrorMessage::StrictFunctionName));
        } else if !self.context.strict && is_strict_mode_reserved_word(&name.name) {
            deferred = Some((start, ErrorMessage::StrictReservedWord));
        }
        Ok((name, deferred))
    }

    /// Parameters and body; raises a deferred violation if the function
    /// turns out to be strict
    fn parse_function_rest(
        &mut self,
        mut deferred: DeferredError,
    ) -> Result<(Vec<Identifier>, FunctionBody), SyntaxError> {
        let parameters = self.parse_params(&mut deferred)?;
        let (body, is_strict) = self.parse_function_body()?;
        if self.context.strict || is_strict {
            if let Some((position, message)) = deferred {
                return Err(create_error(message, &[], position));
            }
        }
        Ok((parameters, body))
    }

    fn parse_params(
        &mut self,
        deferred: &mut DeferredError,
    ) -> Result<Vec<Identifier>, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut parameters = Vec::new();

        if !self.matches(TokenKind::RParen) {
            let mut seen = HashSet::new();
            while !self.tokens.eof() {
                let start = self.tokens.location();
                let parameter = self.parse_variable_identifier()?;

                let violation = if is_restricted_word(&parameter.name) {
                    Some(ErrorMessage::StrictParamName)
                } else if !self.context.strict && is_strict_mode_reserved_word(&parameter.name) {
                    Some(ErrorMessage::StrictReservedWord)
                } else if seen.contains(&parameter.name) {
                    Some(ErrorMessage::StrictParamDupe)
                } else {
                    None
                };
                if let Some(message) = violation {
                    if self.context.strict {
                        return Err(create_error(message, &[], start));
                    }
                    if deferred.is_none() {
                        *deferred = Some((start, message));
                    }
                }

                seen.insert(parameter.name.clone());
                parameters.push(parameter);
                if self.matches(TokenKind::RParen) {
                    break;
                }
                self.expect(TokenKind::Comma)?;
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(parameters)
    }

    // Expressions

    fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let mut expression = self.parse_assignment_expression()?;
        while self.eat(TokenKind::Comma)?.is_some() {
            let right = self.parse_assignment_expression()?;
            expression = self.mark_location(
                Expression::binary(BinaryOperator::Sequence, expression, right),
                start,
            );
        }
        Ok(expression)
    }

    fn parse_assignment_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.nested(Self::parse_assignment)
    }

    fn parse_assignment(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let is_parenthesised = self.matches(TokenKind::LParen);
        let node = self.parse_conditional_expression()?;

        let Some(operator) = assignment_operator(self.lookahead().kind) else {
            return Ok(node);
        };
        if !is_parenthesised && !is_left_hand_side(&node) {
            return Err(self.error(ErrorMessage::InvalidLhsInAssignment, &[]));
        }
        if self.context.strict && is_restricted_identifier(&node) {
            return Err(create_error(ErrorMessage::StrictLhsAssignment, &[], start));
        }

        self.lex()?;
        let right = self.parse_assignment_expression()?;
        Ok(self.mark_location(
            Expression::AssignmentExpression {
                operator,
                binding: Box::new(node),
                expression: Box::new(right),
            },
            start,
        ))
    }

    fn parse_conditional_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let test = self.parse_binary_expression()?;
        if self.eat(TokenKind::Conditional)?.is_none() {
            return Ok(test);
        }

        let consequent = self.with_allow_in(true, |this| this.parse_assignment_expression())?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.parse_assignment_expression()?;
        Ok(self.mark_location(
            Expression::ConditionalExpression {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            start,
        ))
    }

    /// Binary operator at the lookahead with its precedence
    fn binary_operator(&self) -> Option<(BinaryOperator, u8)> {
        let kind = self.lookahead().kind;
        if kind == TokenKind::In && !self.context.allow_in {
            return None;
        }
        Some((binary_operator(kind)?, binary_precedence(kind)?))
    }

    /// Operator precedence parsing over an explicit stack. Frames whose
    /// precedence is at least the incoming operator's are folded first,
    /// which makes equal precedence associate to the left.
    fn parse_binary_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let left = self.parse_unary_expression()?;
        let Some((operator, precedence)) = self.binary_operator() else {
            return Ok(left);
        };
        self.lex()?;

        let mut stack = vec![BinaryFrame {
            start,
            left,
            operator,
            precedence,
        }];
        let mut operand_start = self.tokens.location();
        let mut right = self.parse_unary_expression()?;

        while let Some((operator, precedence)) = self.binary_operator() {
            while stack.last().is_some_and(|top| precedence <= top.precedence) {
                let Some(frame) = stack.pop() else {
                    break;
                };
                operand_start = frame.start;
                right = self.mark_location(
                    Expression::binary(frame.operator, frame.left, right),
                    frame.start,
                );
            }

            self.lex()?;
            stack.push(BinaryFrame {
                start: operand_start,
                left: right,
                operator,
                precedence,
            });
            operand_start = self.tokens.location();
            right = self.parse_unary_expression()?;
        }

        Ok(stack.into_iter().rev().fold(right, |right, frame| {
            self.mark_location(
                Expression::binary(frame.operator, frame.left, right),
                frame.start,
            )
        }))
    }

    fn parse_unary_expression(&mut self) -> Result<Expression, SyntaxError> {
        let Some(operator) = prefix_operator(self.lookahead().kind) else {
            return self.parse_postfix_expression();
        };
        let start = self.tokens.location();
        self.lex()?;
        let operand = self.nested(Self::parse_unary_expression)?;

        match operator {
            PrefixOperator::Increment | PrefixOperator::Decrement => {
                if self.context.strict && is_restricted_identifier(&operand) {
                    return Err(self.error(ErrorMessage::StrictLhsPrefix, &[]));
                }
                if !is_left_hand_side(&operand) {
                    return Err(self.error(ErrorMessage::InvalidLhsInAssignment, &[]));
                }
            }
            PrefixOperator::Delete => {
                if self.context.strict
                    && matches!(operand, Expression::IdentifierExpression { .. })
                {
                    return Err(self.error(ErrorMessage::StrictDelete, &[]));
                }
            }
            _ => {}
        }

        Ok(self.mark_location(
            Expression::PrefixExpression {
                operator,
                operand: Box::new(operand),
            },
            start,
        ))
    }

    fn parse_postfix_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let operand = self.parse_left_hand_side_expression_allow_call()?;
        if self.tokens.has_line_terminator_before_next() {
            return Ok(operand);
        }
        let operator = match self.lookahead().kind {
            TokenKind::Inc => PostfixOperator::Increment,
            TokenKind::Dec => PostfixOperator::Decrement,
            _ => return Ok(operand),
        };
        self.lex()?;

        if self.context.strict && is_restricted_identifier(&operand) {
            return Err(self.error(ErrorMessage::StrictLhsPostfix, &[]));
        }
        if !is_left_hand_side(&operand) {
            return Err(self.error(ErrorMessage::InvalidLhsInAssignment, &[]));
        }
        Ok(self.mark_location(
            Expression::PostfixExpression {
                operand: Box::new(operand),
                operator,
            },
            start,
        ))
    }

    fn parse_left_hand_side_expression_allow_call(&mut self) -> Result<Expression, SyntaxError> {
        self.with_allow_in(true, |this| {
            let start = this.tokens.location();
            let mut expression = this.parse_new_or_primary_expression()?;
            loop {
                expression = match this.lookahead().kind {
                    TokenKind::LParen => {
                        let arguments = this.parse_arguments()?;
                        Expression::CallExpression {
                            callee: Box::new(expression),
                            arguments,
                        }
                    }
                    TokenKind::LBracket => this.parse_computed_member(expression)?,
                    TokenKind::Period => this.parse_static_member(expression)?,
                    _ => break,
                };
                expression = this.mark_location(expression, start);
            }
            Ok(expression)
        })
    }

    /// Member expression without call suffixes; the callee of `new`
    fn parse_left_hand_side_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let mut expression = self.parse_new_or_primary_expression()?;
        loop {
            expression = match self.lookahead().kind {
                TokenKind::LBracket => self.parse_computed_member(expression)?,
                TokenKind::Period => self.parse_static_member(expression)?,
                _ => break,
            };
            expression = self.mark_location(expression, start);
        }
        Ok(expression)
    }

    fn parse_new_or_primary_expression(&mut self) -> Result<Expression, SyntaxError> {
        if self.matches(TokenKind::New) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        }
    }

    fn parse_computed_member(&mut self, object: Expression) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::ComputedMemberExpression {
            object: Box::new(object),
            expression: Box::new(expression),
        })
    }

    fn parse_static_member(&mut self, object: Expression) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::Period)?;
        let property = self.parse_non_computed_property()?;
        Ok(Expression::StaticMemberExpression {
            object: Box::new(object),
            property,
        })
    }

    /// IdentifierName after `.`; reserved words are allowed
    fn parse_non_computed_property(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.lex()?;
        if !token.is_identifier_like() {
            return Err(self.unexpected(&token));
        }
        Ok(Identifier::new(token.name()))
    }

    fn parse_new_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        self.expect(TokenKind::New)?;
        let callee = self.nested(Self::parse_left_hand_side_expression)?;
        let arguments = if self.matches(TokenKind::LParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        Ok(self.mark_location(
            Expression::NewExpression {
                callee: Box::new(callee),
                arguments,
            },
            start,
        ))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expression>, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let mut arguments = Vec::new();
        while !(self.matches(TokenKind::RParen) || self.tokens.eof()) {
            arguments.push(self.parse_assignment_expression()?);
            if self.eat(TokenKind::Comma)?.is_none() {
                break;
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn parse_primary_expression(&mut self) -> Result<Expression, SyntaxError> {
        let start = self.tokens.location();
        let expression = match self.lookahead().kind.class() {
            _ if self.matches(TokenKind::LParen) => self.parse_group_expression()?,
            TokenClass::Ident => Expression::IdentifierExpression {
                identifier: self.parse_variable_identifier()?,
            },
            TokenClass::StringLiteral => {
                let token = self.lex_literal()?;
                Expression::LiteralStringExpression {
                    value: token.string_value().to_string(),
                    raw: token.text.to_string(),
                }
            }
            TokenClass::NumericLiteral => {
                let value = self.lex_literal()?.number_value();
                if value.is_infinite() {
                    Expression::LiteralInfinityExpression
                } else {
                    Expression::LiteralNumericExpression { value }
                }
            }
            TokenClass::Keyword if self.matches(TokenKind::This) => {
                self.lex()?;
                Expression::ThisExpression
            }
            TokenClass::Keyword if self.matches(TokenKind::Function) => {
                self.parse_function_expression()?
            }
            TokenClass::BooleanLiteral => {
                let token = self.lex()?;
                Expression::LiteralBooleanExpression {
                    value: token.kind == TokenKind::True,
                }
            }
            TokenClass::NullLiteral => {
                self.lex()?;
                Expression::LiteralNullExpression
            }
            TokenClass::Punctuator if self.matches(TokenKind::LBracket) => {
                self.parse_array_expression()?
            }
            TokenClass::Punctuator if self.matches(TokenKind::LBrace) => {
                self.parse_object_expression()?
            }
            TokenClass::Punctuator
                if self.matches(TokenKind::Div) || self.matches(TokenKind::AssignDiv) =>
            {
                self.parse_regexp_literal()?
            }
            _ => {
                let token = self.lex()?;
                return Err(self.unexpected(&token));
            }
        };
        Ok(self.mark_location(expression, start))
    }

    /// Consume a string or numeric literal token, rejecting legacy octal
    /// forms in strict code
    fn lex_literal(&mut self) -> Result<Token<'a>, SyntaxError> {
        if self.context.strict && self.lookahead().octal {
            return Err(create_error_with_token(
                self.lookahead(),
                ErrorMessage::StrictOctalLiteral,
                &[],
            ));
        }
        self.lex()
    }

    fn parse_group_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::LParen)?;
        let expression = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(expression)
    }

    fn parse_array_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::LBracket)?;
        let mut elements = Vec::new();
        while !self.matches(TokenKind::RBracket) {
            if self.eat(TokenKind::Comma)?.is_some() {
                elements.push(None);
                continue;
            }
            elements.push(Some(self.parse_assignment_expression()?));
            if !self.matches(TokenKind::RBracket) {
                self.expect(TokenKind::Comma)?;
            }
        }
        self.expect(TokenKind::RBracket)?;
        Ok(Expression::ArrayExpression { elements })
    }

    /// Re-scan the `/` or `/=` lookahead as a regular expression literal
    fn parse_regexp_literal(&mut self) -> Result<Expression, SyntaxError> {
        self.tokens.skip_comment()?;
        self.tokens.scan_regexp()?;
        let token = self.lex()?;
        if let Err(reason) = validate_regexp(token.text) {
            debug!(literal = token.text, %reason, "rejected regular expression");
            return Err(create_error_with_token(
                &token,
                ErrorMessage::InvalidRegularExpression,
                &[],
            ));
        }
        Ok(Expression::LiteralRegExpExpression {
            value: token.text.to_string(),
        })
    }

    // Object literals

    fn parse_object_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.expect(TokenKind::LBrace)?;
        let mut seen: HashMap<String, PropertyKinds> = HashMap::new();
        let mut properties = Vec::new();

        while !self.matches(TokenKind::RBrace) {
            let property = self.parse_object_property()?;
            let kind = match property {
                ObjectProperty::DataProperty { .. } => PropertyKinds::DATA,
                ObjectProperty::Getter { .. } => PropertyKinds::GETTER,
                ObjectProperty::Setter { .. } => PropertyKinds::SETTER,
            };
            let name = &property.name().value;

            if let Some(&previous) = seen.get(name) {
                if previous.contains(PropertyKinds::DATA) {
                    if kind == PropertyKinds::DATA && self.context.strict {
                        return Err(self.error(ErrorMessage::StrictDuplicateProperty, &[]));
                    }
                    if kind != PropertyKinds::DATA {
                        return Err(self.error(ErrorMessage::AccessorDataProperty, &[]));
                    }
                } else if kind == PropertyKinds::DATA {
                    return Err(self.error(ErrorMessage::AccessorDataProperty, &[]));
                } else if previous.intersects(kind) {
                    return Err(self.error(ErrorMessage::AccessorGetSet, &[]));
                }
            }
            *seen.entry(name.clone()).or_default() |= kind;
            properties.push(property);

            if !self.matches(TokenKind::RBrace) {
                self.expect(TokenKind::Comma)?;
            }
        }

        self.expect(TokenKind::RBrace)?;
        Ok(Expression::ObjectExpression { properties })
    }

    fn parse_object_property(&mut self) -> Result<ObjectProperty, SyntaxError> {
        let token = self.lookahead().clone();

        if token.kind == TokenKind::Identifier {
            let name = self.parse_object_property_key()?;
            if token.name() == "get" && !self.matches(TokenKind::Colon) {
                let name = self.parse_object_property_key()?;
                self.expect(TokenKind::LParen)?;
                self.expect(TokenKind::RParen)?;
                let (body, _) = self.parse_function_body()?;
                return Ok(ObjectProperty::Getter { name, body });
            }
            if token.name() == "set" && !self.matches(TokenKind::Colon) {
                return self.parse_setter();
            }
            self.expect(TokenKind::Colon)?;
            let expression = self.parse_assignment_expression()?;
            return Ok(ObjectProperty::DataProperty { name, expression });
        }

        if token.kind == TokenKind::Eos || token.kind.class() == TokenClass::Punctuator {
            return Err(self.unexpected(&token));
        }

        let name = self.parse_object_property_key()?;
        self.expect(TokenKind::Colon)?;
        let expression = self.parse_assignment_expression()?;
        Ok(ObjectProperty::DataProperty { name, expression })
    }

    /// `name(param) { body }` after the `set` keyword
    fn parse_setter(&mut self) -> Result<ObjectProperty, SyntaxError> {
        let name = self.parse_object_property_key()?;
        self.expect(TokenKind::LParen)?;

        if !self.matches(TokenKind::Identifier) {
            let token = self.lookahead().clone();
            self.expect(TokenKind::RParen)?;
            return Err(create_error_with_token(
                &token,
                ErrorMessage::UnexpectedToken,
                &[token.kind.name()],
            ));
        }

        let parameter = self.parse_variable_identifier()?;
        self.expect(TokenKind::RParen)?;
        let (body, is_strict) = self.parse_function_body()?;
        if (self.context.strict || is_strict) && is_restricted_word(&parameter.name) {
            return Err(self.error(ErrorMessage::StrictParamName, &[]));
        }
        Ok(ObjectProperty::Setter {
            name,
            parameter,
            body,
        })
    }

    fn parse_object_property_key(&mut self) -> Result<PropertyName, SyntaxError> {
        let token = self.lookahead();
        let identifier_like = token.is_identifier_like();
        match token.kind.class() {
            TokenClass::StringLiteral => {
                let token = self.lex_literal()?;
                Ok(PropertyName::new(
                    PropertyNameKind::String,
                    token.string_value(),
                ))
            }
            TokenClass::NumericLiteral => {
                let token = self.lex_literal()?;
                Ok(PropertyName::new(
                    PropertyNameKind::Number,
                    number_to_string(token.number_value()),
                ))
            }
            _ if identifier_like => {
                let token = self.lex()?;
                Ok(PropertyName::new(PropertyNameKind::Identifier, token.name()))
            }
            _ => Err(self.error(ErrorMessage::InvalidPropertyName, &[])),
        }
    }

    /// A binding name. Strict code may not use the strict-mode reserved
    /// words as identifiers.
    fn parse_variable_identifier(&mut self) -> Result<Identifier, SyntaxError> {
        let token = self.lex()?;
        if !token.is_identifier()
            || (self.context.strict && is_strict_mode_reserved_word(token.name()))
        {
            return Err(self.unexpected(&token));
        }
        Ok(Identifier::new(token.name()))
    }
}

/// True if `expression` may syntactically stand on the left of an
/// assignment, a `for-in` head or an increment.
///
/// The check is by node kind only. Literals such as `true` pass here and
/// are left for later semantic checks to reject.
pub fn is_left_hand_side(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::CallExpression { .. }
            | Expression::NewExpression { .. }
            | Expression::StaticMemberExpression { .. }
            | Expression::ComputedMemberExpression { .. }
            | Expression::ArrayExpression { .. }
            | Expression::FunctionExpression { .. }
            | Expression::IdentifierExpression { .. }
            | Expression::LiteralBooleanExpression { .. }
            | Expression::LiteralStringExpression { .. }
            | Expression::LiteralNullExpression
            | Expression::LiteralRegExpExpression { .. }
            | Expression::ObjectExpression { .. }
            | Expression::ThisExpression
    )
}

/// `eval` or `arguments` as a bare identifier
fn is_restricted_identifier(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::IdentifierExpression { identifier } if is_restricted_word(&identifier.name)
    )
}

fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator as Op;
    let operator = match kind {
        TokenKind::Or => Op::LogicalOr,
        TokenKind::And => Op::LogicalAnd,
        TokenKind::BitOr => Op::BitwiseOr,
        TokenKind::BitXor => Op::BitwiseXor,
        TokenKind::BitAnd => Op::BitwiseAnd,
        TokenKind::Eq => Op::Equal,
        TokenKind::Ne => Op::NotEqual,
        TokenKind::EqStrict => Op::StrictEqual,
        TokenKind::NeStrict => Op::StrictNotEqual,
        TokenKind::Lt => Op::LessThan,
        TokenKind::Gt => Op::GreaterThan,
        TokenKind::Lte => Op::LessThanEqual,
        TokenKind::Gte => Op::GreaterThanEqual,
        TokenKind::In => Op::In,
        TokenKind::Instanceof => Op::Instanceof,
        TokenKind::Shl => Op::LeftShift,
        TokenKind::Shr => Op::RightShift,
        TokenKind::ShrUnsigned => Op::UnsignedRightShift,
        TokenKind::Add => Op::Add,
        TokenKind::Sub => Op::Subtract,
        TokenKind::Mul => Op::Multiply,
        TokenKind::Div => Op::Divide,
        TokenKind::Mod => Op::Remainder,
        _ => return None,
    };
    Some(operator)
}

fn assignment_operator(kind: TokenKind) -> Option<AssignmentOperator> {
    use AssignmentOperator as Op;
    let operator = match kind {
        TokenKind::Assign => Op::Assign,
        TokenKind::AssignBitOr => Op::BitwiseOrAssign,
        TokenKind::AssignBitXor => Op::BitwiseXorAssign,
        TokenKind::AssignBitAnd => Op::BitwiseAndAssign,
        TokenKind::AssignShl => Op::LeftShiftAssign,
        TokenKind::AssignShr => Op::RightShiftAssign,
        TokenKind::AssignShrUnsigned => Op::UnsignedRightShiftAssign,
        TokenKind::AssignAdd => Op::AddAssign,
        TokenKind::AssignSub => Op::SubtractAssign,
        TokenKind::AssignMul => Op::MultiplyAssign,
        TokenKind::AssignDiv => Op::DivideAssign,
        TokenKind::AssignMod => Op::RemainderAssign,
        _ => return None,
    };
    Some(operator)
}

fn prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    use PrefixOperator as Op;
    let operator = match kind {
        TokenKind::Inc => Op::Increment,
        TokenKind::Dec => Op::Decrement,
        TokenKind::Add => Op::Plus,
        TokenKind::Sub => Op::Minus,
        TokenKind::BitNot => Op::BitwiseNot,
        TokenKind::Not => Op::LogicalNot,
        TokenKind::Delete => Op::Delete,
        TokenKind::Void => Op::Void,
        TokenKind::Typeof => Op::Typeof,
        _ => return None,
    };
    Some(operator)
}
