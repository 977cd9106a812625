use proglet::ast::{Expression, Program};
use proglet::lexer::Token;
use proglet::parser::{ParseState, parse};

fn parse_program(input: &str) -> Program {
    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    parse(&mut state).expect("parsing failed")
}

fn parse_error(input: &str) -> String {
    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    match parse(&mut state) {
        Ok(program) => panic!("expected parse failure, got {program}"),
        Err(err) => err.to_string(),
    }
}

#[test]
fn parse_number_constant() {
    let program = parse_program("prog 42");
    assert_eq!(program.to_string(), "Prog(Const(42))");
}

#[test]
fn parse_boolean_constant() {
    let program = parse_program("prog true");
    assert_eq!(program.to_string(), "Prog(Const(true))");
}

#[test]
fn parse_variable() {
    let program = parse_program("prog x");
    assert_eq!(program.to_string(), "Prog(Variable(x))");
}

#[test]
fn flat_fold_has_no_precedence() {
    // One flat operator level: 1+2*3 is (1+2)*3, not 1+(2*3)
    let program = parse_program("prog 1+2*3");
    assert_eq!(
        program.to_string(),
        "Prog(Mul(Add(Const(1),Const(2)),Const(3)))"
    );
}

#[test]
fn comparisons_share_the_flat_level() {
    let program = parse_program("prog 1<2+3");
    assert_eq!(
        program.to_string(),
        "Prog(Add(Lt(Const(1),Const(2)),Const(3)))"
    );
}

#[test]
fn fold_is_left_associative() {
    let program = parse_program("prog 10-4-3");
    assert_eq!(
        program.to_string(),
        "Prog(Sub(Sub(Const(10),Const(4)),Const(3)))"
    );
}

#[test]
fn parse_let() {
    let program = parse_program("prog let x=1 in x end");
    assert_eq!(program.to_string(), "Prog(Let([(x,Const(1))],Variable(x)))");
}

#[test]
fn parse_let_multiple_declarations() {
    let program = parse_program("prog let x=1; y=x+1 in y end");
    assert_eq!(
        program.to_string(),
        "Prog(Let([(x,Const(1)),(y,Add(Variable(x),Const(1)))],Variable(y)))"
    );

    if let Expression::Let(le) = &program.body {
        assert_eq!(le.decls.len(), 2);
        assert_eq!(le.decls[0].name.name, "x");
        assert_eq!(le.decls[1].name.name, "y");
    } else {
        panic!("expected let expression");
    }
}

#[test]
fn parse_if_with_else() {
    let program = parse_program("prog if a=b then 1 else 2 fi");
    assert_eq!(
        program.to_string(),
        "Prog(If(Eq(Variable(a),Variable(b)),Const(1),Const(2)))"
    );
}

#[test]
fn parse_if_without_else() {
    let program = parse_program("prog if a<b then 1 fi");
    assert_eq!(
        program.to_string(),
        "Prog(If(Lt(Variable(a),Variable(b)),Const(1)))"
    );

    if let Expression::If(cond) = &program.body {
        assert!(cond.else_branch.is_none());
    } else {
        panic!("expected if expression");
    }
}

#[test]
fn parse_fun() {
    let program = parse_program("prog fun a, b => a+b end");
    assert_eq!(
        program.to_string(),
        "Prog(Fun([a,b],Add(Variable(a),Variable(b))))"
    );
}

#[test]
fn parse_call_with_variable_callee() {
    let program = parse_program("prog call f(1,2)");
    assert_eq!(
        program.to_string(),
        "Prog(Call(Variable(f),[Const(1),Const(2)]))"
    );
}

#[test]
fn parse_call_with_inline_fun() {
    let program = parse_program("prog call fun x => x*x end(4)");
    assert_eq!(
        program.to_string(),
        "Prog(Call(Fun([x],Mul(Variable(x),Variable(x))),[Const(4)]))"
    );
}

#[test]
fn parse_nested_let() {
    let program = parse_program("prog let y=2 in let y=5 in y end end");
    assert_eq!(
        program.to_string(),
        "Prog(Let([(y,Const(2))],Let([(y,Const(5))],Variable(y))))"
    );
}

#[test]
fn parse_is_deterministic() {
    let input = "prog let f=fun a => if a>0 then a*call f(a-1) else 1 fi end in call f(4) end";
    let first = parse_program(input).to_string();
    let second = parse_program(input).to_string();
    assert_eq!(first, second);
}

#[test]
fn reject_missing_prog_keyword() {
    let message = parse_error("let x=1 in x end");
    assert!(message.contains("'prog'"), "got: {message}");
}

#[test]
fn reject_trailing_input() {
    assert!(!parse_error("prog 1 2").is_empty());
}

#[test]
fn reject_unterminated_let() {
    let message = parse_error("prog let x=1 in x");
    assert!(message.contains("'end'"), "got: {message}");
}

#[test]
fn reject_unterminated_if() {
    let message = parse_error("prog if x then 1");
    assert!(message.contains("'fi'"), "got: {message}");
}

#[test]
fn reject_trailing_semicolon_in_let() {
    assert!(!parse_error("prog let x=1; in x end").is_empty());
}

#[test]
fn reject_empty_call_arguments() {
    // The grammar requires at least one argument
    assert!(!parse_error("prog call f()").is_empty());
}

#[test]
fn reject_number_literal_out_of_range() {
    let message = parse_error("prog 99999999999999999999");
    assert!(message.contains("out of range"), "got: {message}");
}

#[test]
fn error_reports_offending_token() {
    let message = parse_error("prog let x=1 in x");
    assert!(message.contains("unexpected end of input"), "got: {message}");
}
