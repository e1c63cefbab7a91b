//! Report rendering: pretty JSON with a four-space indent

use crate::domain::CheckReport;
use crate::error::{GraderError, GraderResult};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

const INDENT: &[u8] = b"    ";

pub fn render_report(report: &CheckReport) -> GraderResult<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the rendered report followed by a newline
pub fn write_report<W: Write>(report: &CheckReport, mut writer: W) -> GraderResult<()> {
    let rendered = render_report(report)?;
    writeln!(writer, "{rendered}").map_err(GraderError::Output)?;
    writer.flush().map_err(GraderError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Check;

    #[test]
    fn test_four_space_indent_sorted_keys() {
        let mut report = CheckReport::new();
        report.record(&Check::from("h1"), true);
        report.record(&Check::from("a"), false);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n    \"a\": false,\n    \"h1\": true\n}\n"
        );
    }

    #[test]
    fn test_selector_quotes_are_escaped() {
        let mut report = CheckReport::new();
        report.record(&Check::from(r#"a[href="/"]"#), true);
        let rendered = render_report(&report).unwrap();
        assert_eq!(rendered, "{\n    \"a[href=\\\"/\\\"]\": true\n}");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_report(&CheckReport::new()).unwrap(), "{}");
    }

    use crate::domain::ChecksSpec;
    use crate::infrastructure::check_html_data;
    use proptest::prelude::*;

    const PAGE: &str =
        r#"<main id="app"><h1>Title</h1><p class="lead"><a href="/">home</a></p></main>"#;
    const POOL: &[&str] = &[
        "h1", "h2", "p", "a", "a[href]", "#app", "#missing", ".lead", "main > p", "footer",
    ];

    fn rendered_for(selectors: &[&str]) -> String {
        let checks = ChecksSpec::new(selectors.iter().copied().map(Check::from).collect());
        let report = check_html_data(PAGE, &checks).unwrap();
        render_report(&report).unwrap()
    }

    proptest! {
        #[test]
        fn identical_output_for_any_check_order(
            picked in proptest::sample::subsequence(POOL.to_vec(), 0..=POOL.len()),
            pivot in 0usize..16,
        ) {
            let mut reordered = picked.clone();
            reordered.reverse();
            if !reordered.is_empty() {
                let len = reordered.len();
                reordered.rotate_left(pivot % len);
            }

            let first = rendered_for(&picked);
            prop_assert_eq!(&first, &rendered_for(&reordered));
            prop_assert_eq!(&first, &rendered_for(&picked));
        }
    }
}
