use crate::ops::{BinaryOperator, UnaryOperator};
use serde::{Deserialize, Serialize};

/// A fragment of JavaScript: literal, expression or statement.
///
/// Trees are plain values. Nothing here checks that a tree is legal JavaScript
/// (a `Break` outside a loop, a `Return` at top level); producers own that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Js {
    NullLiteral,
    NumericLiteral(f64),
    StringLiteral(String),
    /// Raw template contents, emitted between backticks verbatim.
    TemplateLiteral(String),
    BooleanLiteral(bool),

    Unary(UnaryOperator, Box<Js>),
    Binary(BinaryOperator, Box<Js>, Box<Js>),
    ArrayLiteral(Vec<Js>),
    /// `object[index]`
    Indexer(Box<Js>, Box<Js>),
    ObjectLiteral(Vec<ObjectProperty>),
    /// `object.property`
    Accessor(String, Box<Js>),
    /// Optional name, parameter names, body.
    Function(Option<String>, Vec<String>, Box<Js>),
    /// Callee and arguments.
    App(Box<Js>, Vec<Js>),
    Var(String),
    /// `condition ? then : else`
    Conditional(Box<Js>, Box<Js>, Box<Js>),
    TypeOf(Box<Js>),

    Block(Vec<Js>),
    VariableIntroduction(String, Option<Box<Js>>),
    Assignment(Box<Js>, Box<Js>),
    While(Box<Js>, Box<Js>),
    /// Loop variable, initial value, condition, update, body.
    For(String, Box<Js>, Box<Js>, Box<Js>, Box<Js>),
    /// Loop variable, object, body.
    ForIn(String, Box<Js>, Box<Js>),
    IfElse(Box<Js>, Box<Js>, Option<Box<Js>>),
    Return(Box<Js>),
    Throw(Box<Js>),
    Label(String, Box<Js>),
    Break(Option<String>),
    Continue(Option<String>),
}

/// One entry of an object literal. Entry order is emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectProperty {
    LiteralKey(String, Js),
    ComputedKey(Js, Js),
    /// `get name() { body }`
    Getter(String, Vec<Js>),
    /// `set name(param) { body }`
    Setter(String, String, Vec<Js>),
}

impl Js {
    pub fn num(value: f64) -> Self {
        Js::NumericLiteral(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Js::StringLiteral(value.into())
    }

    pub fn template(raw: impl Into<String>) -> Self {
        Js::TemplateLiteral(raw.into())
    }

    pub fn bool(value: bool) -> Self {
        Js::BooleanLiteral(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Js::Var(name.into())
    }

    pub fn unary(op: UnaryOperator, operand: Js) -> Self {
        Js::Unary(op, Box::new(operand))
    }

    pub fn binary(op: BinaryOperator, left: Js, right: Js) -> Self {
        Js::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn index(object: Js, index: Js) -> Self {
        Js::Indexer(Box::new(object), Box::new(index))
    }

    pub fn accessor(property: impl Into<String>, object: Js) -> Self {
        Js::Accessor(property.into(), Box::new(object))
    }

    pub fn function<I, S>(name: Option<&str>, params: I, body: Js) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Js::Function(
            name.map(str::to_string),
            params.into_iter().map(Into::into).collect(),
            Box::new(body),
        )
    }

    pub fn app(callee: Js, args: Vec<Js>) -> Self {
        Js::App(Box::new(callee), args)
    }

    pub fn conditional(condition: Js, then: Js, otherwise: Js) -> Self {
        Js::Conditional(Box::new(condition), Box::new(then), Box::new(otherwise))
    }

    pub fn type_of(operand: Js) -> Self {
        Js::TypeOf(Box::new(operand))
    }

    pub fn block(statements: Vec<Js>) -> Self {
        Js::Block(statements)
    }

    pub fn var_decl(name: impl Into<String>, init: Option<Js>) -> Self {
        Js::VariableIntroduction(name.into(), init.map(Box::new))
    }

    pub fn assign(target: Js, value: Js) -> Self {
        Js::Assignment(Box::new(target), Box::new(value))
    }

    pub fn while_loop(condition: Js, body: Js) -> Self {
        Js::While(Box::new(condition), Box::new(body))
    }

    pub fn for_loop(
        variable: impl Into<String>,
        init: Js,
        condition: Js,
        update: Js,
        body: Js,
    ) -> Self {
        Js::For(
            variable.into(),
            Box::new(init),
            Box::new(condition),
            Box::new(update),
            Box::new(body),
        )
    }

    pub fn for_in(variable: impl Into<String>, object: Js, body: Js) -> Self {
        Js::ForIn(variable.into(), Box::new(object), Box::new(body))
    }

    pub fn if_else(condition: Js, then: Js, otherwise: Option<Js>) -> Self {
        Js::IfElse(Box::new(condition), Box::new(then), otherwise.map(Box::new))
    }

    pub fn ret(value: Js) -> Self {
        Js::Return(Box::new(value))
    }

    pub fn throw(value: Js) -> Self {
        Js::Throw(Box::new(value))
    }

    pub fn label(name: impl Into<String>, statement: Js) -> Self {
        Js::Label(name.into(), Box::new(statement))
    }

    pub fn break_to(label: Option<&str>) -> Self {
        Js::Break(label.map(str::to_string))
    }

    pub fn continue_to(label: Option<&str>) -> Self {
        Js::Continue(label.map(str::to_string))
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Js::NullLiteral
                | Js::NumericLiteral(_)
                | Js::StringLiteral(_)
                | Js::TemplateLiteral(_)
                | Js::BooleanLiteral(_)
        )
    }

    /// Variants that only make sense in statement position.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            Js::Block(_)
                | Js::VariableIntroduction(..)
                | Js::Assignment(..)
                | Js::While(..)
                | Js::For(..)
                | Js::ForIn(..)
                | Js::IfElse(..)
                | Js::Return(_)
                | Js::Throw(_)
                | Js::Label(..)
                | Js::Break(_)
                | Js::Continue(_)
        )
    }
}

impl ObjectProperty {
    pub fn literal(key: impl Into<String>, value: Js) -> Self {
        ObjectProperty::LiteralKey(key.into(), value)
    }

    pub fn computed(key: Js, value: Js) -> Self {
        ObjectProperty::ComputedKey(key, value)
    }

    pub fn getter(name: impl Into<String>, body: Vec<Js>) -> Self {
        ObjectProperty::Getter(name.into(), body)
    }

    pub fn setter(name: impl Into<String>, param: impl Into<String>, body: Vec<Js>) -> Self {
        ObjectProperty::Setter(name.into(), param.into(), body)
    }
}
