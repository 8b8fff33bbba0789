//! report
//!
//! Grouping by file and text report serialization.
//!
//! # Format
//!
//! One line per issue:
//!
//! ```text
//! '<filePath>',<type>,<rule>,<line>
//! ```
//!
//! The file path is wrapped in single quotes verbatim (no escaping), the
//! four fields are comma-separated with no extra spacing, and `<line>`
//! renders as the integer value or the literal token `null` for file-level
//! issues. Lines are emitted file-group by file-group, with paths in
//! ascending lexicographic order and issues in receipt order within a
//! group.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sonar::Issue;

/// Fixed name of the report file, written to the working directory.
pub const REPORT_FILE_NAME: &str = "extract.txt";

/// Partition issues by their `component` (file path).
///
/// The path is used verbatim as the grouping key, with no normalization.
/// `BTreeMap` iteration gives the ascending lexicographic key order the
/// report requires; within a group, issues keep the order in which they
/// were received.
pub fn group_by_file(issues: Vec<Issue>) -> BTreeMap<String, Vec<Issue>> {
    let mut grouped: BTreeMap<String, Vec<Issue>> = BTreeMap::new();
    for issue in issues {
        grouped.entry(issue.component.clone()).or_default().push(issue);
    }
    grouped
}

/// Write the grouped report to `path`, overwriting any existing file.
///
/// # Errors
///
/// Fails if the file cannot be created or written; no partial report is
/// considered valid in that case.
pub fn write_report(path: &Path, grouped: &BTreeMap<String, Vec<Issue>>) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for (file_path, issues) in grouped {
        for issue in issues {
            writeln!(writer, "{}", format_line(file_path, issue))?;
        }
    }

    writer.flush()
}

/// Render one report line.
fn format_line(file_path: &str, issue: &Issue) -> String {
    let line = match issue.line {
        Some(n) => n.to_string(),
        None => "null".to_string(),
    };
    format!("'{}',{},{},{}", file_path, issue.issue_type, issue.rule, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn issue(key: &str, component: &str, line: Option<u32>) -> Issue {
        Issue {
            key: key.to_string(),
            rule: "squid:S1172".to_string(),
            issue_type: "CODE_SMELL".to_string(),
            component: component.to_string(),
            line,
        }
    }

    #[test]
    fn groups_are_a_stable_partition() {
        let issues = vec![
            issue("k1", "b.js", Some(1)),
            issue("k2", "a.js", Some(2)),
            issue("k3", "b.js", Some(3)),
            issue("k4", "a.js", Some(4)),
        ];

        let grouped = group_by_file(issues);

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a.js", "b.js"]);

        let a_keys: Vec<&str> = grouped["a.js"].iter().map(|i| i.key.as_str()).collect();
        assert_eq!(a_keys, vec!["k2", "k4"]);
        let b_keys: Vec<&str> = grouped["b.js"].iter().map(|i| i.key.as_str()).collect();
        assert_eq!(b_keys, vec!["k1", "k3"]);

        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn empty_collection_yields_empty_grouping() {
        assert!(group_by_file(Vec::new()).is_empty());
    }

    #[test]
    fn keys_sort_by_code_point() {
        let issues = vec![
            issue("k1", "src/Z.java", None),
            issue("k2", "src/a.java", None),
            issue("k3", "src/A.java", None),
        ];

        let grouped = group_by_file(issues);

        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        // Uppercase sorts before lowercase in code-point order.
        assert_eq!(keys, vec!["src/A.java", "src/Z.java", "src/a.java"]);
    }

    #[test]
    fn line_format_with_line_number() {
        let rendered = format_line("src/Foo.java", &issue("k1", "src/Foo.java", Some(42)));
        assert_eq!(rendered, "'src/Foo.java',CODE_SMELL,squid:S1172,42");
    }

    #[test]
    fn line_format_without_line_number() {
        let rendered = format_line("src/Foo.java", &issue("k1", "src/Foo.java", None));
        assert_eq!(rendered, "'src/Foo.java',CODE_SMELL,squid:S1172,null");
    }

    #[test]
    fn path_is_quoted_verbatim_without_escaping() {
        let rendered = format_line("src/it's,odd.js", &issue("k1", "src/it's,odd.js", Some(1)));
        assert_eq!(rendered, "'src/it's,odd.js',CODE_SMELL,squid:S1172,1");
    }

    #[test]
    fn writes_one_line_per_issue_in_group_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);

        let grouped = group_by_file(vec![
            issue("k1", "b.js", Some(10)),
            issue("k2", "a.js", None),
            issue("k3", "b.js", Some(20)),
        ]);
        write_report(&path, &grouped).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "'a.js',CODE_SMELL,squid:S1172,null",
                "'b.js',CODE_SMELL,squid:S1172,10",
                "'b.js',CODE_SMELL,squid:S1172,20",
            ]
        );
    }

    #[test]
    fn empty_grouping_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);

        write_report(&path, &BTreeMap::new()).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn overwrites_an_existing_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(REPORT_FILE_NAME);
        std::fs::write(&path, "stale contents\n").unwrap();

        let grouped = group_by_file(vec![issue("k1", "a.js", Some(1))]);
        write_report(&path, &grouped).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "'a.js',CODE_SMELL,squid:S1172,1\n"
        );
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join(REPORT_FILE_NAME);

        assert!(write_report(&path, &BTreeMap::new()).is_err());
    }
}
