//! Abstract Syntax Tree node definitions
//!
//! One variant or struct per grammar production. Nodes own their children
//! and are never mutated after the parser builds them. Every node serializes
//! to JSON with a `"type"` field naming its production.

use serde::{Serialize, Serializer};

/// Root node of a parsed script
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Script {
    /// Top-level directives and statements
    pub body: FunctionBody,
}

/// Body of a script or function: directive prologue plus statements
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type")]
pub struct FunctionBody {
    /// Directive prologue
    pub directives: Vec<Directive>,
    /// Statements after the prologue
    pub statements: Vec<Statement>,
}

/// A directive from a directive prologue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// `"use strict"` or `'use strict'`
    UseStrictDirective,
    /// Any other string-literal directive
    UnknownDirective {
        /// Decoded string value
        value: String,
    },
}

/// Identifier in binding or label position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    /// Identifier name with escapes decoded
    pub name: String,
}

impl Identifier {
    /// Create an identifier node
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Braced statement list
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Block {
    /// Statements in the block
    pub statements: Vec<Statement>,
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    /// `{ ... }`
    BlockStatement {
        /// The block
        block: Block,
    },
    /// `break label?;`
    BreakStatement {
        /// Target label
        label: Option<Identifier>,
    },
    /// `continue label?;`
    ContinueStatement {
        /// Target label
        label: Option<Identifier>,
    },
    /// `debugger;`
    DebuggerStatement,
    /// `do body while (test);`
    DoWhileStatement {
        /// Loop body
        body: Box<Statement>,
        /// Loop condition
        test: Expression,
    },
    /// `;`
    EmptyStatement,
    /// Expression followed by a semicolon
    ExpressionStatement {
        /// The expression
        expression: Expression,
    },
    /// `for (left in right) body`
    ForInStatement {
        /// Declaration or assignment target
        left: ForInit,
        /// Object being enumerated
        right: Expression,
        /// Loop body
        body: Box<Statement>,
    },
    /// `for (init; test; update) body`
    ForStatement {
        /// Initialization clause
        init: Option<ForInit>,
        /// Loop condition
        test: Option<Expression>,
        /// Update clause
        update: Option<Expression>,
        /// Loop body
        body: Box<Statement>,
    },
    /// `function name(params) { body }`
    FunctionDeclaration {
        /// Function name
        name: Identifier,
        /// Parameter names
        parameters: Vec<Identifier>,
        /// Function body
        body: FunctionBody,
    },
    /// `if (test) consequent else alternate`
    IfStatement {
        /// Condition
        test: Expression,
        /// Taken branch
        consequent: Box<Statement>,
        /// `else` branch
        alternate: Option<Box<Statement>>,
    },
    /// `label: body`
    LabeledStatement {
        /// The label
        label: Identifier,
        /// Labeled statement
        body: Box<Statement>,
    },
    /// `return expression?;`
    ReturnStatement {
        /// Returned value
        expression: Option<Expression>,
    },
    /// `switch` without a `default` clause
    SwitchStatement {
        /// Value being switched on
        discriminant: Expression,
        /// Case clauses
        cases: Vec<SwitchCase>,
    },
    /// `switch` with a `default` clause
    SwitchStatementWithDefault {
        /// Value being switched on
        discriminant: Expression,
        /// Cases before `default`
        pre_default_cases: Vec<SwitchCase>,
        /// The `default` clause
        default_case: SwitchDefault,
        /// Cases after `default`
        post_default_cases: Vec<SwitchCase>,
    },
    /// `throw expression;`
    ThrowStatement {
        /// Thrown value
        expression: Expression,
    },
    /// `try { } catch (e) { }`
    TryCatchStatement {
        /// Protected block
        body: Block,
        /// Handler
        catch_clause: CatchClause,
    },
    /// `try { } catch (e) { } finally { }` or `try { } finally { }`
    TryFinallyStatement {
        /// Protected block
        body: Block,
        /// Optional handler
        catch_clause: Option<CatchClause>,
        /// Finalizer block
        finalizer: Block,
    },
    /// `var`/`let`/`const` declaration statement
    VariableDeclarationStatement {
        /// The declaration
        declaration: VariableDeclaration,
    },
    /// `while (test) body`
    WhileStatement {
        /// Loop condition
        test: Expression,
        /// Loop body
        body: Box<Statement>,
    },
    /// `with (object) body`
    WithStatement {
        /// Scope object
        object: Expression,
        /// Body
        body: Box<Statement>,
    },
}

impl Statement {
    /// Production name of this statement
    pub fn node_kind(&self) -> &'static str {
        match self {
            Statement::BlockStatement { .. } => "BlockStatement",
            Statement::BreakStatement { .. } => "BreakStatement",
            Statement::ContinueStatement { .. } => "ContinueStatement",
            Statement::DebuggerStatement => "DebuggerStatement",
            Statement::DoWhileStatement { .. } => "DoWhileStatement",
            Statement::EmptyStatement => "EmptyStatement",
            Statement::ExpressionStatement { .. } => "ExpressionStatement",
            Statement::ForInStatement { .. } => "ForInStatement",
            Statement::ForStatement { .. } => "ForStatement",
            Statement::FunctionDeclaration { .. } => "FunctionDeclaration",
            Statement::IfStatement { .. } => "IfStatement",
            Statement::LabeledStatement { .. } => "LabeledStatement",
            Statement::ReturnStatement { .. } => "ReturnStatement",
            Statement::SwitchStatement { .. } => "SwitchStatement",
            Statement::SwitchStatementWithDefault { .. } => "SwitchStatementWithDefault",
            Statement::ThrowStatement { .. } => "ThrowStatement",
            Statement::TryCatchStatement { .. } => "TryCatchStatement",
            Statement::TryFinallyStatement { .. } => "TryFinallyStatement",
            Statement::VariableDeclarationStatement { .. } => "VariableDeclarationStatement",
            Statement::WhileStatement { .. } => "WhileStatement",
            Statement::WithStatement { .. } => "WithStatement",
        }
    }
}

/// Declaration keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableDeclarationKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

/// `var a = 1, b`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclaration {
    /// Declaration keyword
    pub kind: VariableDeclarationKind,
    /// Declarators, at least one
    pub declarators: Vec<VariableDeclarator>,
}

/// One `name = init` of a declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct VariableDeclarator {
    /// Bound name
    pub binding: Identifier,
    /// Initializer
    pub init: Option<Expression>,
}

/// Head of a `for` or `for-in` statement
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    /// Declaration head
    VariableDeclaration(VariableDeclaration),
    /// Expression head
    Expression(Expression),
}

/// `case test: consequent`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct SwitchCase {
    /// Case value
    pub test: Expression,
    /// Statements of the clause
    pub consequent: Vec<Statement>,
}

/// `default: consequent`
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "type")]
pub struct SwitchDefault {
    /// Statements of the clause
    pub consequent: Vec<Statement>,
}

/// `catch (binding) body`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct CatchClause {
    /// Exception binding
    pub binding: Identifier,
    /// Handler block
    pub body: Block,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// `[a, , b]`
    ArrayExpression {
        /// Elements; holes are `None`
        elements: Vec<Option<Expression>>,
    },
    /// `binding op= expression`
    AssignmentExpression {
        /// Assignment operator
        operator: AssignmentOperator,
        /// Target
        binding: Box<Expression>,
        /// Assigned value
        expression: Box<Expression>,
    },
    /// `left op right`, including the comma operator
    BinaryExpression {
        /// Operator
        operator: BinaryOperator,
        /// Left operand
        left: Box<Expression>,
        /// Right operand
        right: Box<Expression>,
    },
    /// `callee(arguments)`
    CallExpression {
        /// Called expression
        callee: Box<Expression>,
        /// Arguments
        arguments: Vec<Expression>,
    },
    /// `object[expression]`
    ComputedMemberExpression {
        /// Object
        object: Box<Expression>,
        /// Key expression
        expression: Box<Expression>,
    },
    /// `test ? consequent : alternate`
    ConditionalExpression {
        /// Condition
        test: Box<Expression>,
        /// Value when true
        consequent: Box<Expression>,
        /// Value when false
        alternate: Box<Expression>,
    },
    /// `function name?(params) { body }`
    FunctionExpression {
        /// Optional name
        name: Option<Identifier>,
        /// Parameter names
        parameters: Vec<Identifier>,
        /// Function body
        body: FunctionBody,
    },
    /// Reference to a variable
    IdentifierExpression {
        /// The identifier
        identifier: Identifier,
    },
    /// `true` or `false`
    LiteralBooleanExpression {
        /// The value
        value: bool,
    },
    /// Numeric literal too large to be finite
    LiteralInfinityExpression,
    /// `null`
    LiteralNullExpression,
    /// Finite numeric literal
    LiteralNumericExpression {
        /// The value
        value: f64,
    },
    /// `/pattern/flags`
    LiteralRegExpExpression {
        /// Full literal text including slashes and flags
        value: String,
    },
    /// String literal
    LiteralStringExpression {
        /// Decoded value
        value: String,
        /// Source text including quotes
        raw: String,
    },
    /// `new callee(arguments)`
    NewExpression {
        /// Constructor expression
        callee: Box<Expression>,
        /// Arguments; empty when parentheses are omitted
        arguments: Vec<Expression>,
    },
    /// `{ properties }`
    ObjectExpression {
        /// Properties in source order
        properties: Vec<ObjectProperty>,
    },
    /// `operand++` or `operand--`
    PostfixExpression {
        /// Operand
        operand: Box<Expression>,
        /// Operator
        operator: PostfixOperator,
    },
    /// Unary prefix operation
    PrefixExpression {
        /// Operator
        operator: PrefixOperator,
        /// Operand
        operand: Box<Expression>,
    },
    /// `object.property`
    StaticMemberExpression {
        /// Object
        object: Box<Expression>,
        /// Property name
        property: Identifier,
    },
    /// `this`
    ThisExpression,
}

impl Expression {
    /// Production name of this expression
    pub fn node_kind(&self) -> &'static str {
        match self {
            Expression::ArrayExpression { .. } => "ArrayExpression",
            Expression::AssignmentExpression { .. } => "AssignmentExpression",
            Expression::BinaryExpression { .. } => "BinaryExpression",
            Expression::CallExpression { .. } => "CallExpression",
            Expression::ComputedMemberExpression { .. } => "ComputedMemberExpression",
            Expression::ConditionalExpression { .. } => "ConditionalExpression",
            Expression::FunctionExpression { .. } => "FunctionExpression",
            Expression::IdentifierExpression { .. } => "IdentifierExpression",
            Expression::LiteralBooleanExpression { .. } => "LiteralBooleanExpression",
            Expression::LiteralInfinityExpression => "LiteralInfinityExpression",
            Expression::LiteralNullExpression => "LiteralNullExpression",
            Expression::LiteralNumericExpression { .. } => "LiteralNumericExpression",
            Expression::LiteralRegExpExpression { .. } => "LiteralRegExpExpression",
            Expression::LiteralStringExpression { .. } => "LiteralStringExpression",
            Expression::NewExpression { .. } => "NewExpression",
            Expression::ObjectExpression { .. } => "ObjectExpression",
            Expression::PostfixExpression { .. } => "PostfixExpression",
            Expression::PrefixExpression { .. } => "PrefixExpression",
            Expression::StaticMemberExpression { .. } => "StaticMemberExpression",
            Expression::ThisExpression => "ThisExpression",
        }
    }

    /// Shorthand for an identifier reference
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::IdentifierExpression {
            identifier: Identifier::new(name),
        }
    }

    /// Shorthand for a finite numeric literal
    pub fn number(value: f64) -> Self {
        Expression::LiteralNumericExpression { value }
    }

    /// Shorthand for a binary operation
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Object literal member
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ObjectProperty {
    /// `name: expression`
    DataProperty {
        /// Key
        name: PropertyName,
        /// Value
        expression: Expression,
    },
    /// `get name() { body }`
    Getter {
        /// Key
        name: PropertyName,
        /// Accessor body
        body: FunctionBody,
    },
    /// `set name(parameter) { body }`
    Setter {
        /// Key
        name: PropertyName,
        /// The single parameter
        parameter: Identifier,
        /// Accessor body
        body: FunctionBody,
    },
}

impl ObjectProperty {
    /// Key of this property
    pub fn name(&self) -> &PropertyName {
        match self {
            ObjectProperty::DataProperty { name, .. }
            | ObjectProperty::Getter { name, .. }
            | ObjectProperty::Setter { name, .. } => name,
        }
    }
}

/// How a property key was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyNameKind {
    /// IdentifierName, including reserved words
    Identifier,
    /// String literal
    String,
    /// Numeric literal
    Number,
}

/// Object literal key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct PropertyName {
    /// Key form
    pub kind: PropertyNameKind,
    /// Canonical key text; numbers use their ECMAScript string form
    pub value: String,
}

impl PropertyName {
    /// Create a property name
    pub fn new(kind: PropertyNameKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

macro_rules! operator_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            /// Source lexeme of the operator
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)*
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

operator_enum! {
    /// Binary operators, including the comma operator
    BinaryOperator {
        /// `,`
        Sequence => ",",
        /// `||`
        LogicalOr => "||",
        /// `&&`
        LogicalAnd => "&&",
        /// `|`
        BitwiseOr => "|",
        /// `^`
        BitwiseXor => "^",
        /// `&`
        BitwiseAnd => "&",
        /// `==`
        Equal => "==",
        /// `!=`
        NotEqual => "!=",
        /// `===`
        StrictEqual => "===",
        /// `!==`
        StrictNotEqual => "!==",
        /// `<`
        LessThan => "<",
        /// `>`
        GreaterThan => ">",
        /// `<=`
        LessThanEqual => "<=",
        /// `>=`
        GreaterThanEqual => ">=",
        /// `in`
        In => "in",
        /// `instanceof`
        Instanceof => "instanceof",
        /// `<<`
        LeftShift => "<<",
        /// `>>`
        RightShift => ">>",
        /// `>>>`
        UnsignedRightShift => ">>>",
        /// `+`
        Add => "+",
        /// `-`
        Subtract => "-",
        /// `*`
        Multiply => "*",
        /// `/`
        Divide => "/",
        /// `%`
        Remainder => "%",
    }
}

operator_enum! {
    /// Assignment operators
    AssignmentOperator {
        /// `=`
        Assign => "=",
        /// `|=`
        BitwiseOrAssign => "|=",
        /// `^=`
        BitwiseXorAssign => "^=",
        /// `&=`
        BitwiseAndAssign => "&=",
        /// `<<=`
        LeftShiftAssign => "<<=",
        /// `>>=`
        RightShiftAssign => ">>=",
        /// `>>>=`
        UnsignedRightShiftAssign => ">>>=",
        /// `+=`
        AddAssign => "+=",
        /// `-=`
        SubtractAssign => "-=",
        /// `*=`
        MultiplyAssign => "*=",
        /// `/=`
        DivideAssign => "/=",
        /// `%=`
        RemainderAssign => "%=",
    }
}

operator_enum! {
    /// Unary prefix operators
    PrefixOperator {
        /// `++`
        Increment => "++",
        /// `--`
        Decrement => "--",
        /// `+`
        Plus => "+",
        /// `-`
        Minus => "-",
        /// `~`
        BitwiseNot => "~",
        /// `!`
        LogicalNot => "!",
        /// `delete`
        Delete => "delete",
        /// `void`
        Void => "void",
        /// `typeof`
        Typeof => "typeof",
    }
}

operator_enum! {
    /// Postfix update operators
    PostfixOperator {
        /// `++`
        Increment => "++",
        /// `--`
        Decrement => "--",
    }
}
