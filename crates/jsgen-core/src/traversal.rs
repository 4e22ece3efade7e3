/*! Structural walks over `Js` trees.
 *
 * Passes never match on every variant themselves: they hand a per-node function to one of the
 * three walks here and let the walk take care of reaching every child.
 */

use crate::node::{Js, ObjectProperty};

/// An associative combine with an identity, used to accumulate `fold` results.
pub trait Monoid {
    fn empty() -> Self;

    fn combine(self, other: Self) -> Self;
}

impl Monoid for usize {
    fn empty() -> Self {
        0
    }

    fn combine(self, other: Self) -> Self {
        self + other
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Monoid for String {
    fn empty() -> Self {
        String::new()
    }

    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl Monoid for () {
    fn empty() -> Self {}

    fn combine(self, _other: Self) -> Self {}
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }

    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}

/// Disjunction: `true` if any node matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Any(pub bool);

impl Monoid for Any {
    fn empty() -> Self {
        Any(false)
    }

    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }
}

/// Conjunction: `true` if every node matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct All(pub bool);

impl Default for All {
    fn default() -> Self {
        All(true)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        All(true)
    }

    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }
}

impl Js {
    /// Rewrites children first, then hands the rebuilt node to `f`.
    pub fn rewrite_bottom_up<F>(self, f: &mut F) -> Js
    where
        F: FnMut(Js) -> Js,
    {
        let rebuilt = self.map_children(&mut |child| child.rewrite_bottom_up(f));
        f(rebuilt)
    }

    /// Hands the node to `f` first, then descends into the children of whatever `f` returned.
    pub fn rewrite_top_down<F>(self, f: &mut F) -> Js
    where
        F: FnMut(Js) -> Js,
    {
        f(self).map_children(&mut |child| child.rewrite_top_down(f))
    }

    /// Pre-order fold: `f(self)` combined with the folds of each child, left to right.
    pub fn fold<R, F>(&self, f: &mut F) -> R
    where
        R: Monoid,
        F: FnMut(&Js) -> R,
    {
        let mut acc = f(self);
        self.for_each_child(&mut |child| {
            let folded = child.fold(f);
            acc = std::mem::replace(&mut acc, R::empty()).combine(folded);
        });
        acc
    }

    pub fn node_count(&self) -> usize {
        self.fold(&mut |_| 1usize)
    }

    pub fn contains<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Js) -> bool,
    {
        self.fold(&mut |node| Any(predicate(node))).0
    }

    /// Rebuilds this node with `f` applied to each direct child.
    pub fn map_children<F>(self, f: &mut F) -> Js
    where
        F: FnMut(Js) -> Js,
    {
        match self {
            Js::NullLiteral
            | Js::NumericLiteral(_)
            | Js::StringLiteral(_)
            | Js::TemplateLiteral(_)
            | Js::BooleanLiteral(_)
            | Js::Var(_)
            | Js::Break(_)
            | Js::Continue(_) => self,

            Js::Unary(op, operand) => Js::Unary(op, map_boxed(operand, f)),
            Js::Binary(op, left, right) => {
                let left = map_boxed(left, f);
                Js::Binary(op, left, map_boxed(right, f))
            }
            Js::ArrayLiteral(items) => Js::ArrayLiteral(items.into_iter().map(&mut *f).collect()),
            Js::Indexer(object, index) => {
                let object = map_boxed(object, f);
                Js::Indexer(object, map_boxed(index, f))
            }
            Js::ObjectLiteral(props) => Js::ObjectLiteral(
                props
                    .into_iter()
                    .map(|prop| prop.map_children(&mut *f))
                    .collect(),
            ),
            Js::Accessor(property, object) => Js::Accessor(property, map_boxed(object, f)),
            Js::Function(name, params, body) => Js::Function(name, params, map_boxed(body, f)),
            Js::App(callee, args) => {
                let callee = map_boxed(callee, f);
                Js::App(callee, args.into_iter().map(&mut *f).collect())
            }
            Js::Conditional(condition, then, otherwise) => {
                let condition = map_boxed(condition, f);
                let then = map_boxed(then, f);
                Js::Conditional(condition, then, map_boxed(otherwise, f))
            }
            Js::TypeOf(operand) => Js::TypeOf(map_boxed(operand, f)),

            Js::Block(statements) => Js::Block(statements.into_iter().map(&mut *f).collect()),
            Js::VariableIntroduction(name, init) => {
                Js::VariableIntroduction(name, init.map(|init| map_boxed(init, f)))
            }
            Js::Assignment(target, value) => {
                let target = map_boxed(target, f);
                Js::Assignment(target, map_boxed(value, f))
            }
            Js::While(condition, body) => {
                let condition = map_boxed(condition, f);
                Js::While(condition, map_boxed(body, f))
            }
            Js::For(variable, init, condition, update, body) => {
                let init = map_boxed(init, f);
                let condition = map_boxed(condition, f);
                let update = map_boxed(update, f);
                Js::For(variable, init, condition, update, map_boxed(body, f))
            }
            Js::ForIn(variable, object, body) => {
                let object = map_boxed(object, f);
                Js::ForIn(variable, object, map_boxed(body, f))
            }
            Js::IfElse(condition, then, otherwise) => {
                let condition = map_boxed(condition, f);
                let then = map_boxed(then, f);
                Js::IfElse(condition, then, otherwise.map(|otherwise| map_boxed(otherwise, f)))
            }
            Js::Return(value) => Js::Return(map_boxed(value, f)),
            Js::Throw(value) => Js::Throw(map_boxed(value, f)),
            Js::Label(label, statement) => Js::Label(label, map_boxed(statement, f)),
        }
    }

    /// Visits each direct child in declaration order.
    pub fn for_each_child<F>(&self, f: &mut F)
    where
        F: FnMut(&Js),
    {
        match self {
            Js::NullLiteral
            | Js::NumericLiteral(_)
            | Js::StringLiteral(_)
            | Js::TemplateLiteral(_)
            | Js::BooleanLiteral(_)
            | Js::Var(_)
            | Js::Break(_)
            | Js::Continue(_) => {}

            Js::Unary(_, operand) | Js::TypeOf(operand) => f(operand),
            Js::Binary(_, left, right) => {
                f(left);
                f(right);
            }
            Js::ArrayLiteral(items) | Js::Block(items) => items.iter().for_each(&mut *f),
            Js::Indexer(object, index) => {
                f(object);
                f(index);
            }
            Js::ObjectLiteral(props) => {
                for prop in props {
                    prop.for_each_child(&mut *f);
                }
            }
            Js::Accessor(_, object) => f(object),
            Js::Function(_, _, body) => f(body),
            Js::App(callee, args) => {
                f(callee);
                args.iter().for_each(&mut *f);
            }
            Js::Conditional(condition, then, otherwise) => {
                f(condition);
                f(then);
                f(otherwise);
            }
            Js::VariableIntroduction(_, init) => {
                if let Some(init) = init {
                    f(init);
                }
            }
            Js::Assignment(target, value) => {
                f(target);
                f(value);
            }
            Js::While(condition, body) => {
                f(condition);
                f(body);
            }
            Js::For(_, init, condition, update, body) => {
                f(init);
                f(condition);
                f(update);
                f(body);
            }
            Js::ForIn(_, object, body) => {
                f(object);
                f(body);
            }
            Js::IfElse(condition, then, otherwise) => {
                f(condition);
                f(then);
                if let Some(otherwise) = otherwise {
                    f(otherwise);
                }
            }
            Js::Return(value) | Js::Throw(value) => f(value),
            Js::Label(_, statement) => f(statement),
        }
    }
}

fn map_boxed<F>(node: Box<Js>, f: &mut F) -> Box<Js>
where
    F: FnMut(Js) -> Js,
{
    Box::new(f(*node))
}

impl ObjectProperty {
    pub fn map_children<F>(self, f: &mut F) -> ObjectProperty
    where
        F: FnMut(Js) -> Js,
    {
        match self {
            ObjectProperty::LiteralKey(key, value) => ObjectProperty::LiteralKey(key, f(value)),
            ObjectProperty::ComputedKey(key, value) => {
                let key = f(key);
                ObjectProperty::ComputedKey(key, f(value))
            }
            ObjectProperty::Getter(name, body) => {
                ObjectProperty::Getter(name, body.into_iter().map(f).collect())
            }
            ObjectProperty::Setter(name, param, body) => {
                ObjectProperty::Setter(name, param, body.into_iter().map(f).collect())
            }
        }
    }

    pub fn for_each_child<F>(&self, f: &mut F)
    where
        F: FnMut(&Js),
    {
        match self {
            ObjectProperty::LiteralKey(_, value) => f(value),
            ObjectProperty::ComputedKey(key, value) => {
                f(key);
                f(value);
            }
            ObjectProperty::Getter(_, body) | ObjectProperty::Setter(_, _, body) => {
                body.iter().for_each(f)
            }
        }
    }
}
