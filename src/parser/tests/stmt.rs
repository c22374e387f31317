//! Statement parsing tests.

use super::*;

#[test]
fn test_empty_program() {
    let program = parse_ok("");
    assert!(program.statements.is_empty());
}

#[test]
fn test_comment_only_program() {
    let program = parse_ok("-- nothing to draw\n// still nothing\n");
    assert!(program.statements.is_empty());
}

#[test]
fn test_origin_statement() {
    let program = parse_ok("ORIGIN IS (100, 200);");
    assert_eq!(program.statements.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Origin { .. }));
}

#[test]
fn test_scale_statement() {
    let program = parse_ok("SCALE IS (2, 3);");
    assert!(matches!(program.statements[0], Stmt::Scale { .. }));
}

#[test]
fn test_rot_statement() {
    let program = parse_ok("ROT IS 0;");
    assert!(matches!(program.statements[0], Stmt::Rot(_)));
}

#[test]
fn test_size_statement() {
    let program = parse_ok("SIZE IS 3.7;");
    assert!(matches!(program.statements[0], Stmt::Size(_)));
}

#[test]
fn test_color_statement() {
    let program = parse_ok("COLOR IS (255, 0, 128);");
    assert!(matches!(program.statements[0], Stmt::Color { .. }));
}

#[test]
fn test_for_statement() {
    let program = parse_ok("FOR T FROM 0 TO 2 STEP 1 DRAW (T, T*T);");
    let Stmt::For { var, .. } = &program.statements[0] else {
        panic!("Expected For statement");
    };
    assert_eq!(var, "T");
}

#[test]
fn test_multiple_statements_in_order() {
    let program = parse_ok("ORIGIN IS (0, 0); SCALE IS (1, 1); ROT IS 0;");
    assert_eq!(program.statements.len(), 3);
    assert!(matches!(program.statements[0], Stmt::Origin { .. }));
    assert!(matches!(program.statements[1], Stmt::Scale { .. }));
    assert!(matches!(program.statements[2], Stmt::Rot(_)));
}

#[test]
fn test_statements_across_lines() {
    let program = parse_ok("ORIGIN IS (0, 0);\n-- frame set up\nROT IS PI/2;\n");
    assert_eq!(program.statements.len(), 2);
}

#[test]
fn test_keywords_are_case_insensitive() {
    let upper = parse_ok("ORIGIN IS (0, 0);");
    let lower = parse_ok("origin is (0, 0);");
    let mixed = parse_ok("Origin Is (0, 0);");
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn test_parser_is_deterministic() {
    let source = "FOR T FROM 0 TO PI STEP 0.1 DRAW (T, SIN(T));";
    assert_eq!(parse_ok(source), parse_ok(source));
}
