/*! JavaScript text from `Js` trees.
 *
 * Every variant has exactly one rendering. The only choices the printer makes are where a
 * sub-expression needs parentheses to keep its grouping, whether an object key or property name
 * needs quoting, and how a number is spelled.
 */

use crate::config::EmitterConfig;
use crate::emitter::{EmitContext, EmitResult, Emittable, Emitter};
use crate::literal::{format_number, is_identifier, quote_string};
use crate::precedence::Precedence;
use jsgen_core::{Js, ObjectProperty, UnaryOperator};
use std::io::Write;
use tracing::{debug, trace};

/// Prints a single node at depth zero with the default configuration.
pub fn print_js(node: &Js) -> String {
    JsPrinter::default().print(node, 0)
}

/// Prints a program body at depth zero with the default configuration.
pub fn print_program(program: &[Js]) -> String {
    JsPrinter::default().print_program(program, 0)
}

#[derive(Debug, Clone, Default)]
pub struct JsPrinter {
    config: EmitterConfig,
}

impl JsPrinter {
    pub fn new(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Expressions print bare; statement variants print in statement form. The first line is not
    /// indented, continuation lines are indented relative to `depth`.
    pub fn print(&self, node: &Js, depth: usize) -> String {
        let mut printer = Printer::new(EmitContext::from_config(&self.config).at_level(depth));
        printer.top_level(node);
        printer.out
    }

    /// One statement per line, every line indented to `depth`, no trailing newline.
    pub fn print_program(&self, program: &[Js], depth: usize) -> String {
        self.print_program_in(program, EmitContext::from_config(&self.config).at_level(depth))
    }

    fn print_program_in(&self, program: &[Js], context: EmitContext) -> String {
        trace!(
            statements = program.len(),
            depth = context.indent_level,
            "printing program"
        );
        let mut printer = Printer::new(context);
        for (i, statement) in program.iter().enumerate() {
            if i > 0 {
                printer.out.push('\n');
            }
            printer.write_indent();
            printer.statement(statement);
        }
        printer.out
    }
}

/// Writes whole programs, honouring the configured trailing newline.
#[derive(Debug, Clone, Default)]
pub struct JsEmitter {
    printer: JsPrinter,
}

impl JsEmitter {
    pub fn new(config: EmitterConfig) -> Self {
        Self {
            printer: JsPrinter::new(config),
        }
    }
}

impl Emitter for JsEmitter {
    type Item = Vec<Js>;

    fn emit<W: Write>(
        &self,
        item: &Self::Item,
        writer: &mut W,
        context: &mut EmitContext,
    ) -> EmitResult {
        let text = self.printer.print_program_in(item, context.clone());
        writer.write_all(text.as_bytes())?;
        if self.printer.config().trailing_newline && !text.is_empty() {
            writer.write_all(b"\n")?;
        }
        debug!(bytes = text.len(), statements = item.len(), "emitted program");
        Ok(())
    }

    fn initial_context(&self) -> EmitContext {
        EmitContext::from_config(self.printer.config())
    }
}

impl Emittable for Js {
    fn emit<W: Write>(&self, writer: &mut W, context: &mut EmitContext) -> EmitResult {
        let mut printer = Printer::new(context.clone());
        printer.top_level(self);
        writer.write_all(printer.out.as_bytes())?;
        Ok(())
    }
}

struct Printer {
    out: String,
    context: EmitContext,
}

impl Printer {
    fn new(context: EmitContext) -> Self {
        Self {
            out: String::new(),
            context,
        }
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        let indent = self.context.get_indent();
        self.out.push_str(&indent);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.write_indent();
    }

    fn top_level(&mut self, node: &Js) {
        if node.is_statement() {
            self.statement(node);
        } else {
            self.expression(node, Precedence::Lowest, false);
        }
    }

    fn statement(&mut self, node: &Js) {
        match node {
            Js::Block(statements) => self.block(statements),
            Js::VariableIntroduction(name, init) => {
                self.write("var ");
                self.write(name);
                if let Some(init) = init {
                    self.write(" = ");
                    self.expression(init, Precedence::Assignment, false);
                }
                self.write(";");
            }
            Js::Assignment(target, value) => {
                self.assignment(target, value, true);
                self.write(";");
            }
            Js::While(condition, body) => {
                self.write("while (");
                self.expression(condition, Precedence::Lowest, false);
                self.write(") ");
                self.body(body);
            }
            Js::For(variable, init, condition, update, body) => {
                self.write("for (var ");
                self.write(variable);
                self.write(" = ");
                self.expression(init, Precedence::Assignment, false);
                self.write("; ");
                self.expression(condition, Precedence::Lowest, false);
                self.write("; ");
                self.expression(update, Precedence::Lowest, false);
                self.write(") ");
                self.body(body);
            }
            Js::ForIn(variable, object, body) => {
                self.write("for (var ");
                self.write(variable);
                self.write(" in ");
                self.expression(object, Precedence::Lowest, false);
                self.write(") ");
                self.body(body);
            }
            Js::IfElse(condition, then, otherwise) => {
                self.write("if (");
                self.expression(condition, Precedence::Lowest, false);
                self.write(") ");
                self.body(then);
                if let Some(otherwise) = otherwise {
                    self.write(" else ");
                    match &**otherwise {
                        Js::IfElse(..) => self.statement(otherwise),
                        _ => self.body(otherwise),
                    }
                }
            }
            Js::Return(value) => {
                self.write("return ");
                self.expression(value, Precedence::Lowest, false);
                self.write(";");
            }
            Js::Throw(value) => {
                self.write("throw ");
                self.expression(value, Precedence::Lowest, false);
                self.write(";");
            }
            Js::Label(label, statement) => {
                self.write(label);
                self.write(": ");
                self.statement(statement);
            }
            Js::Break(label) => self.jump("break", label.as_deref()),
            Js::Continue(label) => self.jump("continue", label.as_deref()),
            // A named function in statement position is a declaration.
            Js::Function(Some(name), params, body) => {
                self.function(Some(name.as_str()), params, body)
            }
            _ => {
                self.expression(node, Precedence::Lowest, true);
                self.write(";");
            }
        }
    }

    fn jump(&mut self, keyword: &str, label: Option<&str>) {
        self.write(keyword);
        if let Some(label) = label {
            self.write(" ");
            self.write(label);
        }
        self.write(";");
    }

    fn block(&mut self, statements: &[Js]) {
        if statements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.context.indent();
        for statement in statements {
            self.newline();
            self.statement(statement);
        }
        self.context.dedent();
        self.newline();
        self.write("}");
    }

    /// Loop, branch and function bodies always print as a block.
    fn body(&mut self, node: &Js) {
        match node {
            Js::Block(statements) => self.block(statements),
            other => self.block(std::slice::from_ref(other)),
        }
    }

    /// `statement_start` marks the leftmost position of an expression statement, where a leading
    /// `{` or `function` would be read as a block or a declaration.
    fn expression(&mut self, node: &Js, min: Precedence, statement_start: bool) {
        let ambiguous_start =
            statement_start && matches!(node, Js::ObjectLiteral(_) | Js::Function(..));
        if Precedence::of(node) < min || ambiguous_start {
            self.write("(");
            self.bare_expression(node, false);
            self.write(")");
        } else {
            self.bare_expression(node, statement_start);
        }
    }

    fn bare_expression(&mut self, node: &Js, statement_start: bool) {
        match node {
            Js::NullLiteral => self.write("null"),
            Js::NumericLiteral(value) => self.write(&format_number(*value)),
            Js::StringLiteral(value) => self.write(&quote_string(value)),
            Js::TemplateLiteral(raw) => {
                self.write("`");
                self.write(raw);
                self.write("`");
            }
            Js::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            Js::Var(name) => self.write(name),
            Js::Unary(op, operand) => {
                self.write(op.symbol());
                let min = match op {
                    UnaryOperator::Spread => Precedence::Assignment,
                    _ => Precedence::Unary,
                };
                if sign_clash(*op, operand) {
                    self.write("(");
                    self.expression(operand, Precedence::Lowest, false);
                    self.write(")");
                } else {
                    self.expression(operand, min, false);
                }
            }
            Js::Binary(op, left, right) => {
                let precedence = Precedence::of_binary(*op);
                self.expression(left, precedence, statement_start);
                self.write(" ");
                self.write(op.symbol());
                self.write(" ");
                self.expression(right, precedence.tighter(), false);
            }
            Js::ArrayLiteral(items) => {
                self.write("[");
                self.arguments(items);
                self.write("]");
            }
            Js::Indexer(object, index) => {
                self.expression(object, Precedence::Member, statement_start);
                self.write("[");
                self.expression(index, Precedence::Lowest, false);
                self.write("]");
            }
            Js::ObjectLiteral(properties) => self.object(properties),
            Js::Accessor(property, object) => {
                self.expression(object, Precedence::Member, statement_start);
                if is_identifier(property) {
                    self.write(".");
                    self.write(property);
                } else {
                    self.write("[");
                    self.write(&quote_string(property));
                    self.write("]");
                }
            }
            Js::Function(name, params, body) => self.function(name.as_deref(), params, body),
            Js::App(callee, args) => {
                self.expression(callee, Precedence::Member, statement_start);
                self.write("(");
                self.arguments(args);
                self.write(")");
            }
            Js::Conditional(condition, then, otherwise) => {
                self.expression(condition, Precedence::LogicalOr, statement_start);
                self.write(" ? ");
                self.expression(then, Precedence::Assignment, false);
                self.write(" : ");
                self.expression(otherwise, Precedence::Assignment, false);
            }
            Js::TypeOf(operand) => {
                self.write("typeof ");
                self.expression(operand, Precedence::Unary, false);
            }
            Js::Assignment(target, value) => self.assignment(target, value, statement_start),
            // Statements nested inside expressions are a producer error; print them as they are.
            other => self.statement(other),
        }
    }

    fn assignment(&mut self, target: &Js, value: &Js, statement_start: bool) {
        self.expression(target, Precedence::Member, statement_start);
        self.write(" = ");
        self.expression(value, Precedence::Assignment, false);
    }

    fn arguments(&mut self, items: &[Js]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.expression(item, Precedence::Assignment, false);
        }
    }

    fn function(&mut self, name: Option<&str>, params: &[String], body: &Js) {
        self.write("function ");
        if let Some(name) = name {
            self.write(name);
        }
        self.write("(");
        self.write(&params.join(", "));
        self.write(") ");
        self.body(body);
    }

    fn object(&mut self, properties: &[ObjectProperty]) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.context.indent();
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.write(",");
            }
            self.newline();
            self.property(property);
        }
        self.context.dedent();
        self.newline();
        self.write("}");
    }

    fn property(&mut self, property: &ObjectProperty) {
        match property {
            ObjectProperty::LiteralKey(key, value) => {
                self.property_name(key);
                self.write(": ");
                self.expression(value, Precedence::Assignment, false);
            }
            ObjectProperty::ComputedKey(key, value) => {
                self.write("[");
                self.expression(key, Precedence::Assignment, false);
                self.write("]: ");
                self.expression(value, Precedence::Assignment, false);
            }
            ObjectProperty::Getter(name, body) => {
                self.write("get ");
                self.property_name(name);
                self.write("() ");
                self.block(body);
            }
            ObjectProperty::Setter(name, param, body) => {
                self.write("set ");
                self.property_name(name);
                self.write("(");
                self.write(param);
                self.write(") ");
                self.block(body);
            }
        }
    }

    fn property_name(&mut self, name: &str) {
        if is_identifier(name) {
            self.write(name);
        } else {
            self.write(&quote_string(name));
        }
    }
}

/// `-` directly followed by another `-` (or `+` by `+`) would lex as a decrement/increment.
fn sign_clash(op: UnaryOperator, operand: &Js) -> bool {
    let leading = match operand {
        Js::Unary(UnaryOperator::Negate, _) => Some(UnaryOperator::Negate),
        Js::Unary(UnaryOperator::Positive, _) => Some(UnaryOperator::Positive),
        Js::NumericLiteral(value) if value.is_sign_negative() && !value.is_nan() => {
            Some(UnaryOperator::Negate)
        }
        _ => None,
    };
    matches!(
        (op, leading),
        (UnaryOperator::Negate, Some(UnaryOperator::Negate))
            | (UnaryOperator::Positive, Some(UnaryOperator::Positive))
    )
}
