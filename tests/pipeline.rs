use pretty_assertions::assert_eq;

use statclean::report::{OutputFormat, Reporter};

fn run(input: &str) -> String {
    let result = statclean::process(input);
    Reporter::render(&result, OutputFormat::Text).unwrap()
}

#[test]
fn sequential_values_have_no_outliers() {
    assert_eq!(
        run("5\n1 2 3 4 5"),
        "Mean: 3.00\n\
         Median: 3.00\n\
         Mode: 1\n\
         Standard Deviation: 1.58\n\
         Cleaned Dataset: 1 2 3 4 5\n"
    );
}

#[test]
fn large_value_is_filtered() {
    assert_eq!(
        run("6\n1 2 2 3 4 100"),
        "Mean: 18.67\n\
         Median: 2.50\n\
         Mode: 2\n\
         Standard Deviation: 39.86\n\
         Cleaned Dataset: 1 2 2 3 4\n"
    );
}

#[test]
fn single_value() {
    assert_eq!(
        run("1\n42"),
        "Mean: 42.00\n\
         Median: 42.00\n\
         Mode: 42\n\
         Standard Deviation: 0.00\n\
         Cleaned Dataset: 42\n"
    );
}

#[test]
fn malformed_count_is_rejected() {
    assert_eq!(run("abc\n1 2 3"), "Invalid input\n");
}

#[test]
fn count_mismatch_is_rejected() {
    assert_eq!(run("3\n1 2"), "Invalid input\n");
}

#[test]
fn other_rejections_print_only_the_message() {
    for input in ["", "   \n  ", "4", "2\n1 x", "-2\n1 2", "0\n\n", "2\n1 2.0"] {
        assert_eq!(run(input), "Invalid input\n", "input {input:?}");
    }
}

#[test]
fn whitespace_and_trailing_lines_are_tolerated() {
    let out = run("\n\n  4\n 10   -2 7 7 \nnot read\n");
    assert_eq!(
        out,
        "Mean: 5.50\n\
         Median: 7.00\n\
         Mode: 7\n\
         Standard Deviation: 5.20\n\
         Cleaned Dataset: 10 -2 7 7\n"
    );
}

#[test]
fn cleaned_dataset_keeps_input_order() {
    let out = run("7\n50 3 -40 4 3 5 4");
    assert!(out.ends_with("Cleaned Dataset: 3 4 3 5 4\n"), "{out}");
}

#[test]
fn json_report_includes_bounds_and_removed_values() {
    let result = statclean::process("6\n1 2 2 3 4 100");
    let out = Reporter::render(&result, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["median"], 2.5);
    assert_eq!(value["std_dev"], 39.86);
    assert_eq!(value["cleaned"], serde_json::json!([1, 2, 2, 3, 4]));
    assert_eq!(value["removed"], serde_json::json!([100]));
    assert_eq!(value["bounds"]["lower"], -1.0);
    assert_eq!(value["bounds"]["upper"], 7.0);
}
