//! Sorted, fixed-width report rendering.
//!
//! Ordering is imposed here, at the presentation boundary: the report's
//! maps stay unordered and are sorted by key (lexicographic,
//! case-sensitive) when printed. Passing a [`PackageIndex`] enables the
//! latest-release column; every domain entry then triggers exactly one
//! query, strictly sequential, in key order.

use crate::index::{extract_release, PackageIndex};
use crate::inspect::StackReport;
use std::collections::HashMap;
use std::fmt::Write;

/// Render the full report.
///
/// Layout: blank line, system table, blank line, domain table, blank
/// line. Keys occupy a left-justified 20-character field; with an index,
/// installed versions widen to a 50-character field followed by the
/// latest-release label. Query failures and unparseable query output
/// degrade to an empty label.
pub fn render(report: &StackReport, index: Option<&dyn PackageIndex>) -> String {
    let mut out = String::new();

    out.push('\n');
    for (name, version) in sorted(&report.system) {
        let _ = writeln!(out, "  {name:<20} : {version}");
    }

    out.push('\n');
    for (name, installed) in sorted(&report.domain) {
        match index {
            Some(index) => {
                let stdout = index
                    .query_latest(name)
                    .map(|result| result.stdout)
                    .unwrap_or_default();
                let latest = extract_release(&stdout).unwrap_or("");
                let _ = writeln!(
                    out,
                    "  {name:<20} : {installed:<50}  (latest release: {latest})"
                );
            }
            None => {
                let _ = writeln!(out, "  {name:<20} : {installed}");
            }
        }
    }
    out.push('\n');

    out
}

/// Key-sorted view of a version map.
fn sorted(map: &HashMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<_> = map
        .iter()
        .map(|(name, version)| (name.as_str(), version.as_str()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RadstackError, Result};
    use crate::shell::CommandResult;
    use std::cell::RefCell;

    /// Records queries and answers them from a canned response map.
    #[derive(Default)]
    struct StubIndex {
        responses: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl StubIndex {
        fn with_response(package: &str, stdout: &str) -> Self {
            let mut stub = Self::default();
            stub.responses
                .insert(package.to_string(), stdout.to_string());
            stub
        }
    }

    impl PackageIndex for StubIndex {
        fn query_latest(&self, package: &str) -> Result<CommandResult> {
            self.calls.borrow_mut().push(package.to_string());
            Ok(CommandResult {
                exit_code: Some(0),
                stdout: self.responses.get(package).cloned().unwrap_or_default(),
                stderr: String::new(),
                success: true,
            })
        }
    }

    /// Index whose every query fails at the spawn level.
    struct BrokenIndex;

    impl PackageIndex for BrokenIndex {
        fn query_latest(&self, package: &str) -> Result<CommandResult> {
            Err(RadstackError::CommandFailed {
                command: format!("pip index versions {package}"),
                code: None,
            })
        }
    }

    fn report_with_system(entries: &[(&str, &str)]) -> StackReport {
        let mut report = StackReport::default();
        for (name, version) in entries {
            report
                .system
                .insert(name.to_string(), version.to_string());
        }
        report
    }

    #[test]
    fn renders_system_table_sorted_with_blank_line_framing() {
        let report = report_with_system(&[("python", "3.11.4"), ("os", "linux")]);

        let rendered = render(&report, None);

        let expected = "\n  os                   : linux\n  python               : 3.11.4\n\n\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn sort_is_case_sensitive() {
        let report = report_with_system(&[("apple", "1"), ("Zebra", "2")]);

        let rendered = render(&report, None);

        // Uppercase sorts before lowercase in byte order.
        let zebra = rendered.find("Zebra").unwrap();
        let apple = rendered.find("apple").unwrap();
        assert!(zebra < apple);
    }

    #[test]
    fn domain_keys_render_sorted() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());
        report
            .domain
            .insert("radical.pilot".to_string(), "2.0".to_string());

        let rendered = render(&report, None);

        let pilot = rendered.find("radical.pilot").unwrap();
        let utils = rendered.find("radical.utils").unwrap();
        assert!(pilot < utils);
    }

    #[test]
    fn verbose_line_includes_latest_release() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());
        let stub = StubIndex::with_response("radical.utils", "radical.utils (1.1.0)");

        let rendered = render(&report, Some(&stub));

        assert!(rendered.contains("(latest release: 1.1.0)"));
        // Installed version occupies a 50-character field.
        assert!(rendered.contains(&format!("  {:<20} : {:<50}  ", "radical.utils", "1.0")));
    }

    #[test]
    fn non_verbose_never_queries_and_has_no_suffix() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());

        let rendered = render(&report, None);

        assert!(!rendered.contains("latest release"));
        assert_eq!(rendered, "\n\n  radical.utils        : 1.0\n\n");
    }

    #[test]
    fn one_query_per_domain_package_in_key_order() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());
        report
            .domain
            .insert("radical.entk".to_string(), "0.5".to_string());
        report
            .domain
            .insert("radical.pilot".to_string(), "2.0".to_string());
        let stub = StubIndex::default();

        render(&report, Some(&stub));

        assert_eq!(
            *stub.calls.borrow(),
            vec!["radical.entk", "radical.pilot", "radical.utils"]
        );
    }

    #[test]
    fn query_failure_degrades_to_empty_label() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());

        let rendered = render(&report, Some(&BrokenIndex));

        assert!(rendered.contains("(latest release: )"));
    }

    #[test]
    fn unparseable_query_output_degrades_to_empty_label() {
        let mut report = StackReport::default();
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());
        let stub = StubIndex::with_response("radical.utils", "no matching releases");

        let rendered = render(&report, Some(&stub));

        assert!(rendered.contains("(latest release: )"));
    }

    #[test]
    fn long_keys_are_not_truncated() {
        let report =
            report_with_system(&[("a-component-name-longer-than-the-field", "0.1")]);

        let rendered = render(&report, None);

        assert!(rendered.contains("  a-component-name-longer-than-the-field : 0.1"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut report = report_with_system(&[("os", "linux"), ("python", "3.11.4")]);
        report
            .domain
            .insert("radical.utils".to_string(), "1.0".to_string());
        let stub = StubIndex::with_response("radical.utils", "radical.utils (1.1.0)");

        let first = render(&report, Some(&stub));
        let second = render(&report, Some(&stub));

        assert_eq!(first, second);
    }

    #[test]
    fn empty_report_is_three_blank_lines() {
        let rendered = render(&StackReport::default(), None);
        assert_eq!(rendered, "\n\n\n");
    }
}
