use crate::node::Js;
use crate::PersistError;
use tracing::debug;

/// Serializes a program to JSON.
///
/// Non-finite numeric literals have no JSON encoding; `serde_json` writes them as `null`,
/// which will not load back.
pub fn to_json(program: &[Js]) -> Result<String, PersistError> {
    let json = serde_json::to_string_pretty(program)?;
    debug!(statements = program.len(), bytes = json.len(), "encoded program");
    Ok(json)
}

pub fn from_json(json: &str) -> Result<Vec<Js>, PersistError> {
    let program: Vec<Js> = serde_json::from_str(json)?;
    debug!(statements = program.len(), "decoded program");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ObjectProperty;
    use crate::ops::BinaryOperator;
    use pretty_assertions::assert_eq;

    fn program() -> Vec<Js> {
        vec![
            Js::var_decl(
                "point",
                Some(Js::ObjectLiteral(vec![
                    ObjectProperty::literal("x", Js::num(1.5)),
                    ObjectProperty::getter("len", vec![Js::ret(Js::num(0.0))]),
                ])),
            ),
            Js::label(
                "outer",
                Js::while_loop(
                    Js::binary(BinaryOperator::LessThan, Js::var("i"), Js::num(3.0)),
                    Js::block(vec![Js::break_to(Some("outer"))]),
                ),
            ),
        ]
    }

    #[test]
    fn test_json_reload_gives_equal_program() {
        let json = to_json(&program()).unwrap();
        let loaded = from_json(&json).unwrap();

        assert_eq!(loaded, program());
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, PersistError::Json(_)));
        assert!(err.to_string().starts_with("Malformed IR:"));
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(from_json("[]").unwrap(), Vec::<Js>::new());
    }
}
