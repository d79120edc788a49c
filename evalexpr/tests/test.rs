use evalexpr::{destroy, eval_with, Frontend, UserFacing};

const FRONTENDS: [Frontend; 2] = [Frontend::Climbing, Frontend::Recursive];

fn assert(expected: i64, input: &str) {
    for f in FRONTENDS {
        match eval_with(f, input) {
            Ok(val) => assert_eq!(expected, val, "{f} parser, input `{input}`"),
            Err(e) => panic!("{f} parser, input `{input}`: {e:?}"),
        }
    }
}

fn assert_parse_failure(input: &str) {
    for f in FRONTENDS {
        match f.parse(input) {
            Ok(ast) => panic!("{f} parser, input `{input}`: expected a failure found {ast}"),
            Err(e) => assert!(e.is_parse_failure(), "{f} parser: {e:?}"),
        }
    }
}

#[test]
fn one() {
    assert(1, "1");
}

#[test]
fn the_answer() {
    assert(42, "42");
}

#[test]
fn int_max() {
    assert(2147483647, "2147483647");
    assert(i64::MAX, "9223372036854775807");
}

#[test]
fn digits_round_trip() {
    for n in [0, 7, 10, 99, 1000, 65535, 123456789] {
        assert(n, &n.to_string());
    }
    assert(7, "007");
}

#[test]
fn whitespace() {
    assert(1, "   1   ");
    assert(3, "   1   + 2     ");
}

#[test]
fn additions() {
    assert(2, "1+1");
    assert(5, "1+1+1+1+1");
}

#[test]
fn subtractions() {
    assert(0, "1-1");
    assert(-3, "1-1-1-1-1");
}

#[test]
fn multiplications() {
    assert(6, "2 * 3");
    assert(24, "1 * 2 * 3 * 4");
}

#[test]
fn divisions() {
    assert(4, "12 / 3");
    assert(1, "24 / 4 / 3 / 2");
}

#[test]
fn priority() {
    assert(7, "1 + 2 * 3");
    assert(29, "1 + 6 / 3 + 4 * 6 + 14 / 7");
}

#[test]
fn parentheses() {
    assert(9, "(1 + 2) * 3");
    assert(-3, "(1 + 2) * (3 - 4)");
}

#[test]
fn unary() {
    assert(-1, "-1");
    assert(1, "+1");
    assert(-1, "--+++--+-+-+-1");
}

#[test]
fn factorial_and_power() {
    assert(6, "3!");
    assert(64, "4^3");
    assert(262144, "4^3^2");
    assert(64, "2^3!");
}

#[test]
fn altogether() {
    assert(
        -17,
        "  -   3 ^ 2 + - 4 * 8 / 2 + + 3! -- 2 + ((-1) + 1) * 2 ",
    );
}

#[test]
fn failures() {
    for input in ["", "1 +", "1 1", "1 * * 1", "(1 + 2))", "3!!", "(", "()", "1 +* 2"] {
        assert_parse_failure(input);
    }
}

#[test]
fn destroying_a_failed_parse_is_a_no_op() {
    let ast = Frontend::Climbing.parse("1 +").ok();
    assert_eq!(0, destroy(ast));
}

#[test]
fn arithmetic_faults_are_not_parse_failures() {
    for f in FRONTENDS {
        let e = eval_with(f, "1 / 0").unwrap_err();
        assert!(!e.is_parse_failure());
    }
}

#[test]
fn both_frontends_agree() {
    let inputs = [
        "2 * (3 + 4) ^ 2 - 10 / 3",
        "-(2^3)! / 7",
        "((((5))))! - 4! * -3",
        "1 - -1 - +1",
        "10 / 3 * 3 + 10 - 10 / 3 * 3",
    ];
    for input in inputs {
        let climbing = eval_with(Frontend::Climbing, input);
        let recursive = eval_with(Frontend::Recursive, input);
        assert_eq!(climbing, recursive, "input `{input}`");
        assert!(climbing.is_ok(), "input `{input}`");
    }
}

#[test]
fn long_flat_chain() {
    let chain = vec!["1"; 500].join(" + ");
    assert(500, &chain);

    let chain = vec!["1"; 100_000].join(" + ");
    for f in FRONTENDS {
        let e = eval_with(f, &chain).unwrap_err();
        assert!(e.is_parse_failure(), "{f} parser: {e:?}");
    }
}

#[test]
fn concurrent_parsing() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || evalexpr::eval(&format!("{i} * 2 + 1"))))
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(Ok(i as i64 * 2 + 1), h.join().unwrap());
    }
}

#[test]
fn error_display_marks_the_input() {
    let input = "1 +";
    let e = evalexpr::eval(input).unwrap_err();
    let rendered = e.display(input).to_string();

    let plain = strip_ansi(&rendered);
    assert_eq!("01 │ 1 +\n   │    ^\n   │ Missing an operand", plain);
}

#[test]
fn error_display_marks_both_division_operands() {
    let input = "8 / (4 - 4)";
    let e = evalexpr::eval(input).unwrap_err();
    let plain = strip_ansi(&e.display(input).to_string());
    assert_eq!(
        "01 │ 8 / (4 - 4)\n   │ ^   ^^^^^^^\n   │ Attempted to divide by 0",
        plain
    );
}

#[test]
fn error_display_marks_the_failing_line() {
    let input = "1 +\r\n2 *";
    let e = evalexpr::eval(input).unwrap_err();
    let plain = strip_ansi(&e.display(input).to_string());
    assert_eq!("02 │ 2 *\n   │    ^\n   │ Missing an operand", plain);
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1B' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
