use jsgen_core::{BinaryOperator, Js, UnaryOperator};

/// JavaScript binding strength, loosest first.
///
/// A sub-expression is parenthesised when its own precedence is below the minimum its position
/// accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Assignment,
    Conditional,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Member,
    Primary,
}

impl Precedence {
    pub fn of_binary(op: BinaryOperator) -> Self {
        match op {
            BinaryOperator::Or => Precedence::LogicalOr,
            BinaryOperator::And => Precedence::LogicalAnd,
            BinaryOperator::BitwiseOr => Precedence::BitwiseOr,
            BinaryOperator::BitwiseXor => Precedence::BitwiseXor,
            BinaryOperator::BitwiseAnd => Precedence::BitwiseAnd,
            BinaryOperator::EqualTo | BinaryOperator::NotEqualTo => Precedence::Equality,
            BinaryOperator::LessThan
            | BinaryOperator::LessThanOrEqualTo
            | BinaryOperator::GreaterThan
            | BinaryOperator::GreaterThanOrEqualTo => Precedence::Relational,
            BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::ZeroFillShiftRight => Precedence::Shift,
            BinaryOperator::Add | BinaryOperator::Subtract => Precedence::Additive,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulus => {
                Precedence::Multiplicative
            }
        }
    }

    pub fn of(node: &Js) -> Self {
        match node {
            Js::NumericLiteral(value) if value.is_sign_negative() && !value.is_nan() => {
                Precedence::Unary
            }
            Js::NullLiteral
            | Js::NumericLiteral(_)
            | Js::StringLiteral(_)
            | Js::TemplateLiteral(_)
            | Js::BooleanLiteral(_)
            | Js::ArrayLiteral(_)
            | Js::ObjectLiteral(_)
            | Js::Function(..)
            | Js::Var(_) => Precedence::Primary,
            Js::Indexer(..) | Js::Accessor(..) | Js::App(..) => Precedence::Member,
            Js::Unary(UnaryOperator::Spread, _) => Precedence::Assignment,
            Js::Unary(..) | Js::TypeOf(_) => Precedence::Unary,
            Js::Binary(op, _, _) => Precedence::of_binary(*op),
            Js::Conditional(..) => Precedence::Conditional,
            Js::Assignment(..) => Precedence::Assignment,
            _ => Precedence::Lowest,
        }
    }

    /// The next tighter level; `Primary` is its own successor.
    pub fn tighter(self) -> Self {
        match self {
            Precedence::Lowest => Precedence::Assignment,
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::BitwiseOr,
            Precedence::BitwiseOr => Precedence::BitwiseXor,
            Precedence::BitwiseXor => Precedence::BitwiseAnd,
            Precedence::BitwiseAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary => Precedence::Member,
            Precedence::Member | Precedence::Primary => Precedence::Primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_table_matches_javascript() {
        assert!(
            Precedence::of_binary(BinaryOperator::Multiply)
                > Precedence::of_binary(BinaryOperator::Add)
        );
        assert!(
            Precedence::of_binary(BinaryOperator::Add)
                > Precedence::of_binary(BinaryOperator::ShiftLeft)
        );
        assert!(
            Precedence::of_binary(BinaryOperator::LessThan)
                > Precedence::of_binary(BinaryOperator::EqualTo)
        );
        assert!(
            Precedence::of_binary(BinaryOperator::BitwiseAnd)
                > Precedence::of_binary(BinaryOperator::BitwiseXor)
        );
        assert!(
            Precedence::of_binary(BinaryOperator::BitwiseOr)
                > Precedence::of_binary(BinaryOperator::And)
        );
        assert!(
            Precedence::of_binary(BinaryOperator::And) > Precedence::of_binary(BinaryOperator::Or)
        );
    }

    #[test]
    fn test_negative_literals_bind_like_unary() {
        assert_eq!(Precedence::of(&Js::num(-1.0)), Precedence::Unary);
        assert_eq!(Precedence::of(&Js::num(1.0)), Precedence::Primary);
        assert_eq!(Precedence::of(&Js::num(f64::NAN)), Precedence::Primary);
    }

    #[test]
    fn test_statements_bind_loosest() {
        assert_eq!(Precedence::of(&Js::break_to(None)), Precedence::Lowest);
        assert_eq!(
            Precedence::of(&Js::assign(Js::var("a"), Js::num(1.0))),
            Precedence::Assignment
        );
    }

    #[test]
    fn test_tighter_is_monotonic() {
        let mut level = Precedence::Lowest;
        while level != Precedence::Primary {
            let next = level.tighter();
            assert!(next > level);
            level = next;
        }
        assert_eq!(Precedence::Primary.tighter(), Precedence::Primary);
    }
}
