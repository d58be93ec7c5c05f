//! Tests for the DWISLPY parser.

use dwislpy_core::Type;
use dwislpy_lexer::tokenize;
use dwislpy_parser::{BinaryOperator, Expression, Literal, Program, Statement, parse};

fn parse_source(source: &str) -> Program {
    let tokens = tokenize(source).unwrap();
    parse(&tokens).unwrap()
}

fn parse_error(source: &str) -> String {
    let tokens = tokenize(source).unwrap();
    parse(&tokens).unwrap_err().to_string()
}

#[test]
fn test_parse_empty_program() {
    let program = parse_source("");
    assert!(program.definitions.is_empty());
    assert!(program.main.statements.is_empty());
}

#[test]
fn test_parse_definition_with_parameters() {
    let source = "def add(x: int, y: str) -> int:\n    return x\n";
    let program = parse_source(source);

    assert_eq!(program.definitions.len(), 1);
    let def = &program.definitions[0];
    assert_eq!(def.name, "add");
    assert_eq!(def.return_type, Type::Int);
    assert_eq!(def.params.len(), 2);
    assert_eq!(def.params[0].name, "x");
    assert_eq!(def.params[0].param_type, Type::Int);
    assert_eq!(def.params[1].name, "y");
    assert_eq!(def.params[1].param_type, Type::Str);
    assert!(matches!(def.body.statements[0], Statement::Return { .. }));
}

#[test]
fn test_parse_procedure() {
    let source = "def show(x: int) -> None:\n    print(x)\n    return\n";
    let program = parse_source(source);

    let def = program.definition("show").unwrap();
    assert!(def.is_procedure());
    assert!(matches!(
        def.body.statements[1],
        Statement::ProcedureReturn { .. }
    ));
}

#[test]
fn test_main_script_collects_top_level_statements_in_order() {
    let source = "x: int = 1\ndef f() -> int:\n    return 1\nx = f()\nprint(x)\n";
    let program = parse_source(source);

    assert_eq!(program.definitions.len(), 1);
    let statements = &program.main.statements;
    assert_eq!(statements.len(), 3);
    assert!(matches!(statements[0], Statement::Declaration { .. }));
    assert!(matches!(statements[1], Statement::Assignment { .. }));
    assert!(matches!(statements[2], Statement::Print { .. }));
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("name: str = input(\"who? \")\n");

    let Statement::Declaration {
        name,
        var_type,
        initializer,
        ..
    } = &program.main.statements[0]
    else {
        panic!("Expected declaration");
    };
    assert_eq!(name, "name");
    assert_eq!(*var_type, Type::Str);
    assert!(matches!(initializer, Expression::Input { .. }));
}

#[test]
fn test_parse_if_else() {
    let source = "if x < 2:\n    pass\nelse:\n    print(x)\n";
    let program = parse_source(source);

    let Statement::If {
        condition,
        then_block,
        else_block,
        ..
    } = &program.main.statements[0]
    else {
        panic!("Expected if statement");
    };
    assert!(matches!(
        condition,
        Expression::Binary {
            operator: BinaryOperator::Less,
            ..
        }
    ));
    assert_eq!(then_block.statements.len(), 1);
    assert_eq!(else_block.as_ref().unwrap().statements.len(), 1);
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_source("if True:\n    pass\nprint(1)\n");

    assert_eq!(program.main.statements.len(), 2);
    let Statement::If { else_block, .. } = &program.main.statements[0] else {
        panic!("Expected if statement");
    };
    assert!(else_block.is_none());
}

#[test]
fn test_parse_single_line_suites() {
    let source = "def f(b: bool) -> int:\n    if b: return 1\n    else: return 2\n";
    let program = parse_source(source);

    let Statement::If {
        then_block,
        else_block,
        ..
    } = &program.definitions[0].body.statements[0]
    else {
        panic!("Expected if statement");
    };
    assert!(matches!(then_block.statements[0], Statement::Return { .. }));
    assert!(matches!(
        else_block.as_ref().unwrap().statements[0],
        Statement::Return { .. }
    ));
}

#[test]
fn test_parse_while() {
    let source = "while i <= 10:\n    i = i + 1\n";
    let program = parse_source(source);

    let Statement::While { body, .. } = &program.main.statements[0] else {
        panic!("Expected while statement");
    };
    assert!(matches!(body.statements[0], Statement::Assignment { .. }));
}

#[test]
fn test_call_statement_is_procedure_call() {
    let program = parse_source("show(1, \"a\")\n");

    let Statement::ProcedureCall {
        callee, arguments, ..
    } = &program.main.statements[0]
    else {
        panic!("Expected procedure call");
    };
    assert_eq!(callee, "show");
    assert_eq!(arguments.len(), 2);
}

#[test]
fn test_call_expression_is_function_call() {
    let program = parse_source("print(f(1))\n");

    let Statement::Print { value, .. } = &program.main.statements[0] else {
        panic!("Expected print");
    };
    assert!(matches!(value, Expression::Call { callee, .. } if callee == "f"));
}

#[test]
fn test_operator_precedence() {
    let program = parse_source("x = 1 + 2 * 3 < 7 and not False\n");

    let Statement::Assignment { value, .. } = &program.main.statements[0] else {
        panic!("Expected assignment");
    };
    let Expression::Binary {
        left,
        operator: BinaryOperator::And,
        right,
        ..
    } = value
    else {
        panic!("Expected 'and' at the root");
    };
    assert!(matches!(right.as_ref(), Expression::Not { .. }));

    let Expression::Binary {
        left: sum,
        operator: BinaryOperator::Less,
        ..
    } = left.as_ref()
    else {
        panic!("Expected '<' under 'and'");
    };
    let Expression::Binary {
        operator: BinaryOperator::Add,
        right: product,
        ..
    } = sum.as_ref()
    else {
        panic!("Expected '+' under '<'");
    };
    assert!(matches!(
        product.as_ref(),
        Expression::Binary {
            operator: BinaryOperator::Multiply,
            ..
        }
    ));
}

#[test]
fn test_negative_literal_and_negation() {
    let program = parse_source("x = -5\ny = -x\n");

    let Statement::Assignment { value, .. } = &program.main.statements[0] else {
        panic!("Expected assignment");
    };
    assert!(matches!(
        value,
        Expression::Literal {
            value: Literal::Int(-5),
            ..
        }
    ));

    let Statement::Assignment { value, .. } = &program.main.statements[1] else {
        panic!("Expected assignment");
    };
    assert!(matches!(
        value,
        Expression::Binary {
            operator: BinaryOperator::Subtract,
            ..
        }
    ));
    assert!(matches!(
        value.as_negation(),
        Some(Expression::Variable { name, .. }) if name == "x"
    ));
}

#[test]
fn test_explicit_subtraction_is_not_negation() {
    let program = parse_source("y = 0 - x\n");

    let Statement::Assignment { value, .. } = &program.main.statements[0] else {
        panic!("Expected assignment");
    };
    assert!(value.as_negation().is_none());
}

#[test]
fn test_conversions() {
    let program = parse_source("print(str(int(\"4\") // 2 % 3))\n");

    let Statement::Print { value, .. } = &program.main.statements[0] else {
        panic!("Expected print");
    };
    let Expression::StrConvert { operand, .. } = value else {
        panic!("Expected str()");
    };
    assert!(matches!(
        operand.as_ref(),
        Expression::Binary {
            operator: BinaryOperator::Modulo,
            ..
        }
    ));
}

#[test]
fn test_statement_spans_point_at_source() {
    let source = "x: int = 1\nprint(x)\n";
    let program = parse_source(source);

    let span = program.main.statements[1].span();
    assert_eq!(span.start.line, 2);
    assert_eq!(&source[span.start.offset..span.end.offset], "print(x)");
}

#[test]
fn test_missing_colon_is_reported() {
    insta::assert_snapshot!(
        parse_error("while True\n    pass\n"),
        @"Parser error: Expected ':', found end of line"
    );
}

#[test]
fn test_nested_definition_is_rejected() {
    let source = "def f() -> int:\n    def g() -> int:\n        return 1\n    return 2\n";
    insta::assert_snapshot!(
        parse_error(source),
        @"Parser error: Definitions are only allowed at the top level"
    );
}

#[test]
fn test_bare_expression_statement_is_rejected() {
    assert!(parse_error("1 + 2\n").starts_with("Parser error: Expected statement"));
}

#[test]
fn test_unknown_type_is_rejected() {
    insta::assert_snapshot!(
        parse_error("x: float = 1\n"),
        @"Parser error: Expected type, found 'float'"
    );
}

#[test]
fn test_type_annotations() {
    let source = "a: int = 1\nb: str = 'b'\nc: bool = True\nd: None = None\n";
    let program = parse_source(source);

    let types: Vec<Type> = program
        .main
        .statements
        .iter()
        .map(|statement| match statement {
            Statement::Declaration { var_type, .. } => *var_type,
            other => panic!("Expected declaration, found {other:?}"),
        })
        .collect();
    assert_eq!(types, [Type::Int, Type::Str, Type::Bool, Type::None]);
}

#[test]
fn test_quoted_type_name_is_not_a_type() {
    insta::assert_snapshot!(
        parse_error("x: 'int' = 1\n"),
        @"Parser error: Expected type, found ''int''"
    );
}
