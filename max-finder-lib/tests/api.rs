use max_finder_lib::input::read_line;
use max_finder_lib::report::{Report, PROMPT};
use max_finder_lib::{analyze, compute_max, Outcome};

#[test]
fn read_then_compute_from_reader() {
    let line = read_line("5 x 9 -3\nignored 100\n".as_bytes()).expect("line reads");
    assert_eq!(compute_max(&line), Outcome::Found(9));
}

#[test]
fn empty_reader_yields_empty_outcome() {
    let line = read_line(std::io::empty()).expect("line reads");
    assert_eq!(line, "");
    assert_eq!(compute_max(&line).to_string(), "No valid numbers provided.");
}

#[test]
fn prompt_text_is_stable() {
    assert_eq!(PROMPT, "Enter numbers separated by spaces:");
}

#[test]
fn report_from_analysis_matches_outcome() {
    let analysis = analyze("-10 -2 -50 nope");
    let report = Report::with_rejected(&analysis);

    assert_eq!(report.outcome, "found");
    assert_eq!(report.value, Some(-2));
    assert_eq!(report.rejected, Some(vec!["nope"]));
}

#[test]
fn digits_from_other_scripts_count_as_integers() {
    let analysis = analyze("１２ 5 ٣ x");

    assert_eq!(analysis.values(), &[12, 5, 3]);
    assert_eq!(analysis.rejected(), &["x"]);
    assert_eq!(compute_max("１２ 5"), Outcome::Found(12));
}
