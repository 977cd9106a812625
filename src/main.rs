use proglet::interpreter;

const INPUT: &str = r#"
prog
    let
        fac=fun
                a
            =>
                if
                    a>0
                then
                    a*call fac(a-1)
                else
                    1
                fi
            end
    in
        call fac(4)
end
"#;

fn main() -> anyhow::Result<()> {
    let program = proglet::parse_source(INPUT)?;

    println!("{program}");
    println!("{}", interpreter::run(&program));

    Ok(())
}
