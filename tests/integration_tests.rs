use proglet::interpreter::Value;

fn run(source: &str) -> Value {
    proglet::evaluate(source).expect("program should parse")
}

#[test]
fn operators_fold_flat_and_left() {
    // One precedence level: 1+2*3 is (1+2)*3.
    assert_eq!(run("prog 1+2*3"), Value::Int(9));
    assert_eq!(run("prog let x=1 in x+2*3 end"), Value::Int(9));
    assert_eq!(run("prog 1+2<4"), Value::Bool(true));
    // (1<2)+3 adds a boolean to an integer
    assert_eq!(run("prog 1<2+3"), Value::Undefined);
    assert_eq!(run("prog 10-3-4"), Value::Int(3));
}

#[test]
fn comparison_results() {
    assert_eq!(run("prog 1<2"), Value::Bool(true));
    assert_eq!(run("prog 2=2"), Value::Bool(true));
    assert_eq!(run("prog 1>2"), Value::Bool(false));
}

#[test]
fn division_floors() {
    assert_eq!(run("prog 7/2"), Value::Int(3));
    // (0-7)/2 under the flat fold: floor division gives -4, not -3
    assert_eq!(run("prog 0-7/2"), Value::Int(-4));
    assert_eq!(run("prog 5/0"), Value::Undefined);
}

#[test]
fn let_declarations_bind_in_order() {
    assert_eq!(run("prog let y=2; x=1+y in x end"), Value::Int(3));
    // No forward references: y is unbound while x is declared.
    assert_eq!(run("prog let x=1+y; y=2 in x end"), Value::Undefined);
}

#[test]
fn inner_let_shadows_outer() {
    assert_eq!(run("prog let x=1 in let x=5 in x end end"), Value::Int(5));
    assert_eq!(
        run("prog let x=2 in let y=5 in y+x end end"),
        Value::Int(7)
    );
}

#[test]
fn closure_captures_definition_scope() {
    // f closes over y=1; the rebinding around the call site is invisible.
    let source = "prog let y=1; f=fun x => x+y end in let y=100 in call f(5) end end";
    assert_eq!(run(source), Value::Int(6));
}

#[test]
fn later_declaration_is_visible_to_earlier_closure() {
    // g is declared after f but in the same block, so f can call it.
    let source = "prog let f=fun x => call g(x) end; g=fun x => x+1 end in call f(41) end";
    assert_eq!(run(source), Value::Int(42));
}

#[test]
fn undefined_propagates_through_expressions() {
    assert_eq!(run("prog x"), Value::Undefined);
    assert_eq!(run("prog 1+x"), Value::Undefined);
    assert_eq!(run("prog if x then 1 else 2 fi"), Value::Undefined);
    assert_eq!(run("prog 1+true"), Value::Undefined);
}

#[test]
fn if_without_else_yields_undefined_on_false() {
    assert_eq!(run("prog if 1>2 then 1 fi"), Value::Undefined);
    assert_eq!(run("prog if 2>1 then 1 fi"), Value::Int(1));
}

#[test]
fn call_anomalies_yield_undefined() {
    // Arity mismatch
    assert_eq!(
        run("prog let f=fun a,b => a+b end in call f(1) end"),
        Value::Undefined
    );
    // Callee is not a function
    assert_eq!(run("prog let f=5 in call f(1) end"), Value::Undefined);
}

#[test]
fn higher_order_functions() {
    let source =
        "prog let twice=fun f,x => call f(call f(x)) end; inc=fun n => n+1 end in call twice(inc, 3) end";
    assert_eq!(run(source), Value::Int(5));
}

#[test]
fn factorial() {
    let source = "
        prog
            let
                fac = fun a =>
                    if a > 0 then
                        a * call fac(a - 1)
                    else
                        1
                    fi
                end
            in
                call fac(4)
            end
    ";
    assert_eq!(run(source), Value::Int(24));
}

#[test]
fn fibonacci() {
    let source = "
        prog
            let
                f = fun x =>
                    if x < 2 then
                        1
                    else
                        call f(x - 1) + call f(x - 2)
                    fi
                end
            in
                call f(5)
            end
    ";
    assert_eq!(run(source), Value::Int(8));
}

#[test]
fn square_via_inline_fun() {
    let source = "prog call fun x => x * x end (4)";
    assert_eq!(run(source), Value::Int(16));
}

#[test]
fn mutually_visible_declarations() {
    // exp delegates to expRek, declared later in the same block.
    let source = "
        prog
            let
                exp = fun b, e =>
                    if e = 0 then
                        1
                    else
                        call expRek(b, e)
                    fi
                end;
                expRek = fun b, e =>
                    if e = 1 then
                        b
                    else
                        b * call exp(b, e - 1)
                    fi
                end
            in
                call exp(2, 10)
            end
    ";
    assert_eq!(run(source), Value::Int(1024));
}

#[test]
fn rendering_round_trip() {
    let program = proglet::parse_source("prog let x=1 in x+2*3 end").unwrap();
    assert_eq!(
        program.to_string(),
        "Prog(Let([(x,Const(1))],Mul(Add(Variable(x),Const(2)),Const(3))))"
    );
}
