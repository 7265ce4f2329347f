//! Tree-level round trips: infix rendering and JSON serialization.

use pretty_assertions::assert_eq;
use solvent::{eval, evaluate, parse, ExprNode};
use solvent_ast::{from_json, to_json};

#[test]
fn display_round_trips_through_the_parser() {
    let sources = [
        "3 + 4 * 2 / (1 - 5)^2",
        "avg(1+1, median(1,2,3))",
        "2^3^2",
    ];
    for source in sources {
        let tree = parse(source).unwrap();
        let rendered = tree.to_string();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(tree, reparsed, "rendering was {rendered:?}");
        assert_eq!(
            eval(&reparsed).unwrap(),
            evaluate(source).unwrap(),
            "source {source:?}"
        );
    }
}

#[test]
fn json_round_trip_preserves_evaluation() {
    let tree = parse("avg(1,2,3) * 2^2").unwrap();
    let json = to_json(&tree).unwrap();
    let restored: ExprNode = from_json(&json).unwrap();
    assert_eq!(tree, restored);
    assert_eq!(eval(&restored).unwrap(), eval(&tree).unwrap());
}
