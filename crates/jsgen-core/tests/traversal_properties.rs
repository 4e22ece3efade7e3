use jsgen_core::{BinaryOperator, Js, ObjectProperty, UnaryOperator};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use proptest::sample::select;

const UNARY: [UnaryOperator; 5] = [
    UnaryOperator::Negate,
    UnaryOperator::Not,
    UnaryOperator::BitwiseNot,
    UnaryOperator::Positive,
    UnaryOperator::Spread,
];

fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,5}"
}

fn leaf() -> impl Strategy<Value = Js> {
    prop_oneof![
        Just(Js::NullLiteral),
        (-1.0e6..1.0e6f64).prop_map(Js::NumericLiteral),
        "[ -~]{0,8}".prop_map(Js::StringLiteral),
        "[a-z ]{0,8}".prop_map(Js::TemplateLiteral),
        any::<bool>().prop_map(Js::BooleanLiteral),
        name().prop_map(Js::Var),
        proptest::option::of(name()).prop_map(Js::Break),
        proptest::option::of(name()).prop_map(Js::Continue),
    ]
}

fn property(inner: impl Strategy<Value = Js> + Clone) -> impl Strategy<Value = ObjectProperty> {
    prop_oneof![
        (name(), inner.clone()).prop_map(|(k, v)| ObjectProperty::LiteralKey(k, v)),
        (inner.clone(), inner.clone()).prop_map(|(k, v)| ObjectProperty::ComputedKey(k, v)),
        (name(), prop::collection::vec(inner.clone(), 0..3))
            .prop_map(|(n, body)| ObjectProperty::Getter(n, body)),
        (name(), name(), prop::collection::vec(inner, 0..3))
            .prop_map(|(n, p, body)| ObjectProperty::Setter(n, p, body)),
    ]
}

fn expression(inner: BoxedStrategy<Js>) -> BoxedStrategy<Js> {
    prop_oneof![
        (select(UNARY.to_vec()), inner.clone()).prop_map(|(op, e)| Js::unary(op, e)),
        (select(BinaryOperator::ALL.to_vec()), inner.clone(), inner.clone())
            .prop_map(|(op, l, r)| Js::binary(op, l, r)),
        prop::collection::vec(inner.clone(), 0..4).prop_map(Js::ArrayLiteral),
        (inner.clone(), inner.clone()).prop_map(|(o, i)| Js::index(o, i)),
        prop::collection::vec(property(inner.clone()), 0..3).prop_map(Js::ObjectLiteral),
        (name(), inner.clone()).prop_map(|(p, o)| Js::accessor(p, o)),
        (
            proptest::option::of(name()),
            prop::collection::vec(name(), 0..3),
            inner.clone()
        )
            .prop_map(|(n, ps, body)| Js::Function(n, ps, Box::new(body))),
        (inner.clone(), prop::collection::vec(inner.clone(), 0..3))
            .prop_map(|(c, args)| Js::app(c, args)),
        (inner.clone(), inner.clone(), inner.clone())
            .prop_map(|(c, t, e)| Js::conditional(c, t, e)),
        inner.prop_map(Js::type_of),
    ]
    .boxed()
}

fn statement(inner: BoxedStrategy<Js>) -> BoxedStrategy<Js> {
    prop_oneof![
        prop::collection::vec(inner.clone(), 0..4).prop_map(Js::Block),
        (name(), proptest::option::of(inner.clone())).prop_map(|(n, i)| Js::var_decl(n, i)),
        (inner.clone(), inner.clone()).prop_map(|(t, v)| Js::assign(t, v)),
        (inner.clone(), inner.clone()).prop_map(|(c, b)| Js::while_loop(c, b)),
        (
            name(),
            inner.clone(),
            inner.clone(),
            inner.clone(),
            inner.clone()
        )
            .prop_map(|(v, i, c, u, b)| Js::for_loop(v, i, c, u, b)),
        (name(), inner.clone(), inner.clone()).prop_map(|(v, o, b)| Js::for_in(v, o, b)),
        (
            inner.clone(),
            inner.clone(),
            proptest::option::of(inner.clone())
        )
            .prop_map(|(c, t, e)| Js::if_else(c, t, e)),
        prop_oneof![
            inner.clone().prop_map(Js::ret),
            inner.clone().prop_map(Js::throw)
        ],
        (name(), inner).prop_map(|(l, s)| Js::label(l, s)),
    ]
    .boxed()
}

fn js() -> impl Strategy<Value = Js> {
    leaf().prop_recursive(4, 48, 4, |inner| {
        let inner = inner.boxed();
        prop_oneof![expression(inner.clone()), statement(inner)]
    })
}

fn same_variant(a: &Js, b: &Js) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

proptest! {
    #[test]
    fn equality_is_reflexive(tree in js()) {
        prop_assert_eq!(&tree, &tree.clone());
    }

    #[test]
    fn equality_is_symmetric(a in js(), b in js()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn equality_is_transitive(a in js()) {
        let b = a.clone();
        let c = b.clone();
        prop_assert!(a == b && b == c && a == c);
    }

    #[test]
    fn different_variants_are_never_equal(a in js(), b in js()) {
        if !same_variant(&a, &b) {
            prop_assert_ne!(a, b);
        }
    }

    #[test]
    fn bottom_up_identity_is_identity(tree in js()) {
        prop_assert_eq!(tree.clone().rewrite_bottom_up(&mut |node| node), tree);
    }

    #[test]
    fn top_down_identity_is_identity(tree in js()) {
        prop_assert_eq!(tree.clone().rewrite_top_down(&mut |node| node), tree);
    }

    #[test]
    fn every_walk_visits_each_node_once(tree in js()) {
        let mut bottom_up_visits = 0usize;
        tree.clone().rewrite_bottom_up(&mut |node| {
            bottom_up_visits += 1;
            node
        });

        let mut top_down_visits = 0usize;
        tree.clone().rewrite_top_down(&mut |node| {
            top_down_visits += 1;
            node
        });

        let count = tree.node_count();
        prop_assert_eq!(bottom_up_visits, count);
        prop_assert_eq!(top_down_visits, count);
    }

    #[test]
    fn top_down_visits_in_pre_order(tree in js()) {
        let mut visited = Vec::new();
        tree.clone().rewrite_top_down(&mut |node| {
            visited.push(format!("{:?}", node));
            node
        });

        let pre_order: Vec<String> = tree.fold(&mut |node| vec![format!("{:?}", node)]);
        prop_assert_eq!(visited, pre_order);
    }

    #[test]
    fn bottom_up_sees_children_before_parents(tree in js()) {
        let mut visited = Vec::new();
        tree.clone().rewrite_bottom_up(&mut |node| {
            visited.push(format!("{:?}", node));
            node
        });

        prop_assert_eq!(visited.last(), Some(&format!("{:?}", tree)));
    }
}

#[test]
fn test_count_of_empty_and_single_child_nodes() {
    assert_eq!(Js::block(vec![]).node_count(), 1);
    assert_eq!(Js::ObjectLiteral(vec![]).node_count(), 1);
    assert_eq!(Js::block(vec![Js::NullLiteral]).node_count(), 2);
    assert_eq!(
        Js::ObjectLiteral(vec![ObjectProperty::setter("noop", "_", vec![])]).node_count(),
        1
    );
}

#[test]
fn test_count_of_deeply_nested_tree() {
    let mut tree = Js::var("x");
    for _ in 0..500 {
        tree = Js::unary(UnaryOperator::Not, tree);
    }

    assert_eq!(tree.node_count(), 501);
    assert_eq!(tree.clone().rewrite_bottom_up(&mut |node| node), tree);
}

#[test]
fn test_top_down_visits_parent_markers_first() {
    let tree = Js::label(
        "level0",
        Js::block(vec![Js::label(
            "level1",
            Js::block(vec![Js::label("level2", Js::break_to(Some("level2")))]),
        )]),
    );

    let mut labels = Vec::new();
    tree.rewrite_top_down(&mut |node| {
        match &node {
            Js::Label(name, _) => labels.push(name.clone()),
            Js::Break(Some(name)) => labels.push(format!("break {}", name)),
            _ => {}
        }
        node
    });

    assert_eq!(labels, vec!["level0", "level1", "level2", "break level2"]);
}

#[test]
fn test_top_down_recurses_into_replacement_children() {
    let tree = Js::app(Js::var("wrap"), vec![Js::var("a")]);

    let mut visited = Vec::new();
    let rewritten = tree.rewrite_top_down(&mut |node| {
        visited.push(format!("{:?}", node));
        match node {
            Js::App(_, args) => Js::ArrayLiteral(args),
            Js::Var(name) => Js::Var(format!("{}_seen", name)),
            other => other,
        }
    });

    assert_eq!(rewritten, Js::ArrayLiteral(vec![Js::var("a_seen")]));
    assert_eq!(visited.len(), 2, "the dropped callee is never visited");
}
