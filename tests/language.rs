use std::fs::{self};

use leet::{
    error::{ParseError, RuntimeError},
    run_script,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;
    let mut checked = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut lines: Vec<String> = Vec::new();
            if let Err(e) = run_script(&example.code, &mut lines) {
                panic!("Script example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       example.code,
                       e);
            }
            if let Some(expected) = example.output {
                checked += 1;
                assert_eq!(lines, expected,
                           "Script example {} in {:?} printed the wrong lines:\n{}",
                           i + 1,
                           path,
                           example.code);
            }
        }
    }

    assert!(count > 0, "No script examples found in book/src");
    assert!(checked > 0, "No script example in book/src documents its output");
}

/// A `leet` code block, and the lines of the `text` block documenting its
/// output, if one follows before any other code block.
struct Example {
    code:   String,
    output: Option<Vec<String>>,
}

#[derive(PartialEq)]
enum Fence {
    Outside,
    Script,
    Output,
    Other,
}

fn extract_script_blocks(content: &str) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();
    let mut fence = Fence::Outside;
    let mut awaiting_output = false;
    let mut buf = String::new();
    let mut output = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if fence == Fence::Outside {
            if trimmed.starts_with("```leet") {
                fence = Fence::Script;
                buf.clear();
            } else if trimmed.starts_with("```text") && awaiting_output {
                fence = Fence::Output;
                output.clear();
            } else if trimmed.starts_with("```") {
                fence = Fence::Other;
                awaiting_output = false;
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match fence {
                Fence::Script => {
                    examples.push(Example { code:   buf.clone(),
                                            output: None, });
                    awaiting_output = true;
                },
                Fence::Output => {
                    if let Some(last) = examples.last_mut() {
                        last.output = Some(output.clone());
                    }
                    awaiting_output = false;
                },
                Fence::Other | Fence::Outside => {},
            }
            fence = Fence::Outside;
            continue;
        }
        match fence {
            Fence::Script => {
                buf.push_str(line);
                buf.push('\n');
            },
            Fence::Output => output.push(line.to_string()),
            Fence::Other | Fence::Outside => {},
        }
    }

    examples
}

fn output_of(src: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Err(e) = run_script(src, &mut lines) {
        panic!("Script failed: {e}");
    }
    lines
}

fn error_of(src: &str) -> Box<dyn std::error::Error> {
    let mut lines: Vec<String> = Vec::new();
    match run_script(src, &mut lines) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn returned_values_are_printed() {
    assert_eq!(output_of("double(4)"), ["8"]);
    assert_eq!(output_of("double(-3)"), ["-6"]);
    assert_eq!(output_of("double(1.25)"), ["2.5"]);
    assert_eq!(output_of("multiply(6, 7)"), ["42"]);
    assert_eq!(output_of("multiply(0.5, -3)"), ["-1.5"]);
    assert_eq!(output_of("isPositive(1)"), ["true"]);
    assert_eq!(output_of("isPositive(0)"), ["false"]);
    assert_eq!(output_of("isPositive(-0.5)"), ["false"]);
    assert_eq!(output_of("squareRoot(16)"), ["4"]);
    assert_eq!(output_of("sayHello()"), ["Hello!"]);
}

#[test]
fn printing_operations() {
    assert_eq!(output_of("countdown()"), ["5", "4", "3", "2", "1"]);
    assert_eq!(output_of("hiRepeat()"), ["Hi", "Hi", "Hi"]);
    assert_eq!(output_of("evensUpTo10()"), ["2", "4", "6", "8", "10"]);
    assert_eq!(output_of("countdownFrom10To5()"), ["10", "9", "8", "7", "6", "5"]);
    assert_eq!(output_of("loopCount1To3()"), ["Loop 1", "Loop 2", "Loop 3"]);
}

#[test]
fn statements_run_in_order() {
    let src = "sayHello\n// a comment\n\nmultiply(2, 3); countdownFrom10To5()\nsayHello()";
    assert_eq!(output_of(src),
               ["Hello!", "6", "10", "9", "8", "7", "6", "5", "Hello!"]);
}

#[test]
fn repeated_calls_are_identical() {
    assert_eq!(output_of("countdown(); countdown()"),
               ["5", "4", "3", "2", "1", "5", "4", "3", "2", "1"]);
    assert_eq!(output_of("double(7)\ndouble(7)"), ["14", "14"]);
}

#[test]
fn negative_square_root_is_a_domain_error() {
    let e = error_of("sayHello()\nsquareRoot(-1)");
    let runtime = e.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime, RuntimeError::Domain { line: 2, .. }));
    assert!(e.to_string().contains("math domain error"));
    assert!(std::error::Error::source(runtime).is_some());
}

#[test]
fn execution_stops_at_first_error() {
    let mut lines: Vec<String> = Vec::new();
    assert!(run_script("double(1)\nsquareRoot(-4)\ndouble(2)", &mut lines).is_err());
    assert_eq!(lines, ["2"]);
}

#[test]
fn unknown_operation() {
    let e = error_of("triple(3)");
    assert!(matches!(e.downcast_ref::<RuntimeError>(),
                     Some(RuntimeError::UnknownFunction { line: 1, .. })));
}

#[test]
fn wrong_argument_count() {
    for src in ["double()", "double(1, 2)", "multiply(1)", "countdown(3)", "sayHello(1)"] {
        let e = error_of(src);
        assert!(matches!(e.downcast_ref::<RuntimeError>(),
                         Some(RuntimeError::ArgumentCountMismatch { .. })),
                "{src} should fail with an argument count mismatch");
    }
}

#[test]
fn syntax_errors_report_the_line_of_the_call() {
    for (src, line) in [("sayHello()\n\ndouble(", 3),
                        ("sayHello()\n\ndouble(-", 3),
                        ("sayHello()\ndouble(1,", 2),
                        ("double(1\n)", 1),
                        ("sayHello()\ndouble(x)", 2),
                        ("sayHello()\n\ndouble(#)", 3)]
    {
        let e = error_of(src);
        assert!(e.downcast_ref::<ParseError>().is_some(), "{src:?}: {e}");
        assert!(e.to_string().starts_with(&format!("Error on line {line}:")),
                "{src:?} should fail on line {line}, got: {e}");
    }
}

#[test]
fn syntax_errors_run_nothing() {
    for src in ["double(1)\ndouble(x)", "double(1)\ndouble(#)", "countdown()\ndouble(1) 2"] {
        let mut lines: Vec<String> = Vec::new();
        assert!(run_script(src, &mut lines).is_err());
        assert!(lines.is_empty(), "{src:?} printed {lines:?} before failing");
    }
}

#[test]
fn malformed_scripts() {
    for src in ["double(", "double(1", "double(1,)", "(1)", "double(x)", "double(1) 2", "double(#)"] {
        let e = error_of(src);
        assert!(e.downcast_ref::<ParseError>().is_some(),
                "{src} should fail to parse, got: {e}");
    }
}

#[test]
fn errors_report_their_line() {
    let e = error_of("sayHello()\n\nmultiply(1)");
    assert!(e.to_string().starts_with("Error on line 3:"), "{e}");
}

#[test]
fn empty_script_prints_nothing() {
    assert!(output_of("").is_empty());
    assert!(output_of("\n;\n// nothing\n").is_empty());
}
