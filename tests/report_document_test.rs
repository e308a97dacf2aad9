//! End-to-end checks on the emitted Markdown document: section structure,
//! row counts, and the behavioral rules each table demonstrates.

use cpp_types_zoo::{render_report, Toolchain};
use indoc::indoc;

fn report() -> String {
    render_report(Toolchain::default_dialect()).expect("report should render")
}

fn section<'a>(doc: &'a str, heading: &str, next: &str) -> &'a str {
    doc.split(heading)
        .nth(1)
        .unwrap_or_else(|| panic!("missing section {}", heading))
        .split(next)
        .next()
        .unwrap()
}

fn data_rows(text: &str) -> usize {
    text.lines().filter(|l| l.starts_with("| `")).count()
}

#[test]
fn document_frame() {
    let doc = report();
    assert!(doc.starts_with("# C++ Types Zoo\n"));
    assert_eq!(doc.matches("## 1. Base Variable Types").count(), 1);
    assert!(doc.ends_with("*Generated by cpp-types-zoo*\n"));
}

#[test]
fn base_variable_table_matches_exactly() {
    let doc = report();
    let expected = indoc! {"
        | Variable | Declared Type |
        |----------|---------------|
        | `x` | `int` |
        | `cx` | `const int` |
        | `rx` | `int&` |
        | `rcx` | `const int&` |
        | `rrx` | `int&&` |
        | `rrcx` | `const int&&` |
        | `px` | `int*` |
        | `pcx` | `const int*` |
        | `cpx` | `int* const` |
        | `cpcx` | `const int* const` |
    "};
    assert!(
        doc.contains(expected),
        "base variable table drifted:\n{}",
        section(&doc, "## 1. Base Variable Types", "## 2.")
    );
}

#[test]
fn every_table_has_its_fixed_row_count() {
    let doc = report();
    let counts = [
        ("## 1. Base Variable Types", "## 2.", 10),
        ("### 2.1 decltype on Variables", "### 2.2", 6),
        ("### 2.2 decltype on Parenthesized Expressions", "## 3.", 9),
        ("### 3.1 Plain `auto`", "### 3.2", 9),
        ("### 3.2 `auto&`", "### 3.3", 6),
        ("### 3.3 `const auto&`", "### 3.4", 6),
        ("### 3.4 `auto&&`", "## 4.", 10),
        ("## 4. `decltype(auto)`", "## 5.", 5),
        ("## 5. Pointers with `auto`", "## 6.", 8),
    ];
    for (heading, next, expected) in counts {
        let body = section(&doc, heading, next);
        assert_eq!(data_rows(body), expected, "row count for {}", heading);
    }
}

#[test]
fn plain_auto_from_const_source_strips_const() {
    let doc = report();
    let row = doc
        .lines()
        .find(|l| l.starts_with("| `auto v = cx`"))
        .expect("auto v = cx row");
    assert!(!row.contains("const"), "const must be stripped: {}", row);
}

#[test]
fn forwarding_ref_bound_to_named_rref_is_lvalue_ref() {
    let doc = report();
    let row = doc
        .lines()
        .find(|l| l.starts_with("| `auto&& v = rrx`"))
        .expect("auto&& v = rrx row");
    assert!(row.contains("| `int&` |"), "expected int&: {}", row);
    assert!(!row.contains("int&&"), "must not collapse to int&&: {}", row);
}

#[test]
fn decltype_on_parenthesized_variable_adds_reference() {
    let doc = report();
    let row = doc
        .lines()
        .find(|l| l.starts_with("| `decltype((x))`"))
        .expect("decltype((x)) row");
    assert!(row.contains("| `int&` |"), "{}", row);
}

#[test]
fn auto_ref_error_note_lists_all_three_rejections() {
    let doc = report();
    let note = doc
        .lines()
        .find(|l| l.starts_with("**Note:**"))
        .expect("auto& rejection note");
    for decl in [
        "`auto& v = std::move(x)`",
        "`auto& v = get_value()`",
        "`auto& v = get_rref()`",
    ] {
        assert!(note.contains(decl), "missing {} in: {}", decl, note);
    }
}

#[test]
fn output_is_deterministic() {
    assert_eq!(report(), report());
}

#[test]
fn unrecognized_toolchain_degrades_every_label_cell() {
    let doc = render_report(Toolchain::Unknown).expect("report should still render");
    assert!(doc.starts_with("# C++ Types Zoo\n"));
    assert!(doc.ends_with("*Generated by cpp-types-zoo*\n"));

    let label_cells: Vec<&str> = doc.lines().filter(|l| l.starts_with("| `")).collect();
    assert!(!label_cells.is_empty());
    for line in label_cells {
        assert!(
            line.contains("| `unknown` |"),
            "cell did not degrade: {}",
            line
        );
    }
}
