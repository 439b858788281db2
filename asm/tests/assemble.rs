use hasm::symbol::SymbolKind;
use hasm::{assemble, parser, Config, Error};

fn lines(code: &str) -> Vec<&str> {
    code.lines().map(parser::clean).collect()
}

fn run(code: &str) -> Result<hasm::Output, Error> {
    let lines = lines(code);
    for (idx, line) in lines.iter().enumerate() {
        println!("{:>2}: {}", idx, line);
    }
    assemble(&lines, &Config::default())
}

fn check(code: &str, expects: &[&str]) {
    let out = run(code).expect("assembly failed");
    for (idx, text) in out.texts().iter().enumerate() {
        println!("{:>2}: {}", idx, text);
    }
    assert_eq!(out.texts(), expects);
}

macro_rules! case {
    ($name:ident, $code:expr, [$($word:expr),* $(,)?]) => {
        #[test]
        fn $name() {
            check($code, &[$($word),*]);
        }
    };
}

case!(
    add,
    "@2\nD=A\n@3\nD=D+A\n@0\nM=D",
    [
        "0000000000000010",
        "1110110000010000",
        "0000000000000011",
        "1110000010010000",
        "0000000000000000",
        "1110001100001000",
    ]
);

case!(
    loop_label,
    "(LOOP)\n@LOOP\n0;JMP",
    ["0000000000000000", "1110101010000111"]
);

case!(
    variables_reuse,
    "@foo\n@bar\n@foo",
    ["0000000000010000", "0000000000010001", "0000000000010000"]
);

case!(
    predefined,
    "@SP\n@LCL\n@ARG\n@THIS\n@THAT\n@R15\n@SCREEN\n@KBD",
    [
        "0000000000000000",
        "0000000000000001",
        "0000000000000010",
        "0000000000000011",
        "0000000000000100",
        "0000000000001111",
        "0100000000000000",
        "0110000000000000",
    ]
);

case!(
    max,
    "// Computes R2 = max(R0, R1)
    @R0
    D=M              // D = first number
    @R1
    D=D-M            // D = first - second
    @OUTPUT_FIRST
    D;JGT            // if D>0 goto output_first
    @R1
    D=M
    @OUTPUT_D
    0;JMP
(OUTPUT_FIRST)
    @R0
    D=M
(OUTPUT_D)
    @R2
    M=D
(INFINITE_LOOP)
    @INFINITE_LOOP
    0;JMP",
    [
        "0000000000000000",
        "1111110000010000",
        "0000000000000001",
        "1111010011010000",
        "0000000000001010",
        "1110001100000001",
        "0000000000000001",
        "1111110000010000",
        "0000000000001100",
        "1110101010000111",
        "0000000000000000",
        "1111110000010000",
        "0000000000000010",
        "1110001100001000",
        "0000000000001110",
        "1110101010000111",
    ]
);

case!(empty, "\n// nothing here\n\n", []);

#[test]
fn word_count_excludes_labels() {
    let code = "(A)\n@1\n(B)\nD=A\n(C)\n@A\n0;JMP\n(D)";
    let out = run(code).unwrap();
    assert_eq!(out.words.len(), 4);
    assert_eq!(out.symbols.lookup("D"), Some(4));
}

#[test]
fn forward_and_backward_reference_agree() {
    let out = run("@HERE\n(HERE)\n@HERE\n0;JMP").unwrap();
    let texts = out.texts();
    assert_eq!(texts[0], texts[1]);
    assert_eq!(out.symbols.lookup("HERE"), Some(1));
}

#[test]
fn deterministic() {
    let code = "@i\nM=1\n(LOOP)\n@sum\nM=0\n@i\nD=M\n@LOOP\nD;JGT\n@n";
    let a = run(code).unwrap();
    let b = run(code).unwrap();
    assert_eq!(a.texts(), b.texts());
    assert_eq!(a.symbols, b.symbols);
}

#[test]
fn variables_ignore_label_positions() {
    let code = "@x\n(L1)\n@y\n@L2\n(L2)\n@z\n@L1";
    let out = run(code).unwrap();
    let vars: Vec<(&str, u16)> = out
        .symbols
        .iter()
        .filter(|(_, sym)| sym.kind == SymbolKind::Variable)
        .map(|(name, sym)| (name.as_str(), sym.addr))
        .collect();
    assert_eq!(vars, [("x", 16), ("y", 17), ("z", 18)]);
}

#[test]
fn custom_base() {
    let lines = lines("@a\n@b\n@a");
    let out = assemble(&lines, &Config { var_base: 100 }).unwrap();
    assert_eq!(out.bins(), vec![100, 101, 100]);
}

#[test]
fn rewritten_lines() {
    let out = run("(START)\n@count\n@START\nD=M").unwrap();
    let text: Vec<String> = out.lines.iter().map(|l| l.stmt.to_string()).collect();
    assert_eq!(text, ["(START)", "@16", "@0", "D=M"]);
}

#[test]
fn duplicate_label_anywhere() {
    for code in ["(X)\n(X)", "(X)\n@1\nD=A\n(X)", "@1\n(X)\n// c\n\n(X)\n0;JMP"] {
        let err = run(code).unwrap_err();
        assert!(matches!(err, Error::DuplicateLabel { ref name, .. } if name == "X"));
    }
    let err = run("@1\n(X)\n// c\n\n(X)").unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn label_shadowing_predefined_is_rejected() {
    assert!(matches!(
        run("(SCREEN)\n0;JMP"),
        Err(Error::DuplicateLabel { .. })
    ));
}

#[test]
fn unknown_computation() {
    let err = run("@1\nD=D*A").unwrap_err();
    assert!(matches!(err, Error::UnknownComputation { line: 1, .. }));
}

#[test]
fn unknown_jump() {
    let err = run("0;JUMP").unwrap_err();
    assert!(matches!(err, Error::UnknownJump { line: 0, .. }));
}

#[test]
fn malformed() {
    for code in ["@", "(OPEN", "()", "=D", "D=", "@a-b"] {
        let err = run(code).unwrap_err();
        assert!(
            matches!(err, Error::MalformedInstruction { .. }),
            "{code}: {err:?}"
        );
    }
}

#[test]
fn address_out_of_range() {
    assert!(run("@32767").is_ok());
    assert!(matches!(
        run("@32768"),
        Err(Error::AddressOutOfRange { .. })
    ));
}

#[test]
fn symbol_export_in_binding_order() {
    let out = run("(LOOP)\n@i\n@LOOP\n@sum\n@i\n0;JMP").unwrap();
    let yaml = serde_yaml::to_string(&out.symbols).unwrap();
    println!("{yaml}");

    let map: serde_yaml::Mapping = serde_yaml::from_str(&yaml).unwrap();
    let names: Vec<&str> = map.keys().filter_map(|k| k.as_str()).collect();
    assert_eq!(names.len(), 26);
    assert_eq!(names[0], "R0");
    assert_eq!(names[22], "KBD");
    assert_eq!(names[23..], ["LOOP", "i", "sum"]);

    let entry = |name: &str| {
        let sym = map.get(name).unwrap();
        let kind = sym.get("kind").and_then(|v| v.as_str()).unwrap().to_string();
        let addr = sym.get("addr").and_then(|v| v.as_u64()).unwrap();
        (kind, addr)
    };
    assert_eq!(entry("SCREEN"), ("Predefined".to_string(), 16384));
    assert_eq!(entry("LOOP"), ("Label".to_string(), 0));
    assert_eq!(entry("i"), ("Variable".to_string(), 16));
    assert_eq!(entry("sum"), ("Variable".to_string(), 17));
}

#[test]
fn digit_leading_label_is_rejected() {
    let err = run("(123)\n@123").unwrap_err();
    assert!(matches!(err, Error::MalformedInstruction { line: 0, .. }));
}
