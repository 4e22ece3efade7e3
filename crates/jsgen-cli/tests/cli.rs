use assert_cmd::Command;
use jsgen_core::{to_json, BinaryOperator, Js, ObjectProperty};
use predicates::prelude::*;
use tempfile::TempDir;

fn write_program(dir: &TempDir) -> std::path::PathBuf {
    let program = vec![
        Js::var_decl(
            "point",
            Some(Js::ObjectLiteral(vec![ObjectProperty::literal(
                "x",
                Js::num(1.0),
            )])),
        ),
        Js::if_else(
            Js::binary(
                BinaryOperator::GreaterThan,
                Js::accessor("x", Js::var("point")),
                Js::num(0.0),
            ),
            Js::ret(Js::bool(true)),
            None,
        ),
    ];
    let path = dir.path().join("program.json");
    std::fs::write(&path, to_json(&program).unwrap()).unwrap();
    path
}

#[test]
fn test_print_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_program(&dir);

    Command::cargo_bin("jsgen")
        .unwrap()
        .arg("print")
        .arg(&input)
        .assert()
        .success()
        .stdout(
            "var point = {\n    x: 1.0\n};\nif (point.x > 0.0) {\n    return true;\n}\n",
        );
}

#[test]
fn test_print_with_tabs_to_file() {
    let dir = TempDir::new().unwrap();
    let input = write_program(&dir);
    let output = dir.path().join("out.js");

    Command::cargo_bin("jsgen")
        .unwrap()
        .args(["print", "--tabs", "-o"])
        .arg(&output)
        .arg(&input)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("\tx: 1.0"));
    assert!(text.contains("\treturn true;"));
}

#[test]
fn test_debug_reports_node_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_program(&dir);

    Command::cargo_bin("jsgen")
        .unwrap()
        .arg("debug")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 statement(s)"))
        .stdout(predicate::str::contains("NumericLiteral(1.0)"));
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("jsgen")
        .unwrap()
        .arg("print")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));
}
