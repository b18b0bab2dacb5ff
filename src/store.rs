// src/store.rs
//! Durable state shared across runs: a newline-delimited log of normalized
//! URLs (the historical dedup set) and an append-only two-column CSV of
//! accepted results. Plain files, no locking; a single run at a time is
//! assumed.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::filter::normalize_url;

pub const CSV_HEADER: &str = "Title,URL";

/// The unit appended to the CSV log. Keeps the URL as returned by the API;
/// the URL log stores its normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub title: String,
    pub url: String,
}

/// Read the historical URL set. Absent file means an empty set; blank lines
/// are skipped, everything else is normalized on the way in.
pub fn load_seen_urls(path: &Path) -> Result<HashSet<String>> {
    if !path.exists() {
        return Ok(HashSet::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading url log {}", path.display()))?;
    Ok(content
        .lines()
        .map(normalize_url)
        .filter(|l| !l.is_empty())
        .collect())
}

/// Append the run's records to the CSV log and their normalized URLs to the
/// URL log, in that order, creating files (and parent dirs) as needed. The
/// pair is best-effort, not transactional: a URL-log failure after the CSV
/// write leaves the CSV rows in place and surfaces the error.
pub fn commit_run(csv_path: &Path, url_log_path: &Path, records: &[ResultRecord]) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    append_records(csv_path, records)?;
    append_urls(url_log_path, records.iter().map(|r| normalize_url(&r.url)))
}

fn append_records(path: &Path, records: &[ResultRecord]) -> Result<()> {
    ensure_parent(path)?;
    let write_header = !path.exists();
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening csv log {}", path.display()))?;
    let mut out = String::new();
    if write_header {
        out.push_str(CSV_HEADER);
        out.push('\n');
    }
    for r in records {
        out.push_str(&csv_field(&r.title));
        out.push(',');
        out.push_str(&csv_field(&r.url));
        out.push('\n');
    }
    f.write_all(out.as_bytes())
        .with_context(|| format!("appending to csv log {}", path.display()))
}

fn append_urls<I: IntoIterator<Item = String>>(path: &Path, urls: I) -> Result<()> {
    ensure_parent(path)?;
    let mut f = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening url log {}", path.display()))?;
    let mut out = String::new();
    for u in urls {
        out.push_str(&u);
        out.push('\n');
    }
    f.write_all(out.as_bytes())
        .with_context(|| format!("appending to url log {}", path.display()))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Quote a CSV field, doubling any internal double quotes.
fn csv_field(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_doubles_internal_quotes() {
        assert_eq!(
            csv_field(r#"Senior "Frontend" Dev"#),
            r#""Senior ""Frontend"" Dev""#
        );
        assert_eq!(csv_field("plain"), "\"plain\"");
    }

    #[test]
    fn missing_url_log_is_an_empty_set() {
        let tmp = tempfile::tempdir().unwrap();
        let set = load_seen_urls(&tmp.path().join("nope.txt")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn url_log_lines_are_normalized_and_blanks_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("seen.txt");
        fs::write(&p, "https://A.test/1\n\n  https://b.test/2  \n").unwrap();
        let set = load_seen_urls(&p).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("https://a.test/1"));
        assert!(set.contains("https://b.test/2"));
    }

    #[test]
    fn header_written_only_on_first_commit() {
        let tmp = tempfile::tempdir().unwrap();
        let csv = tmp.path().join("out/results.csv");
        let log = tmp.path().join("out/seen.txt");
        let rec = |t: &str, u: &str| ResultRecord {
            title: t.to_string(),
            url: u.to_string(),
        };

        commit_run(&csv, &log, &[rec("First", "https://X.test/1")]).unwrap();
        commit_run(&csv, &log, &[rec("Second", "https://x.test/2")]).unwrap();

        let content = fs::read_to_string(&csv).unwrap();
        assert_eq!(
            content,
            "Title,URL\n\"First\",\"https://X.test/1\"\n\"Second\",\"https://x.test/2\"\n"
        );
        let urls = fs::read_to_string(&log).unwrap();
        assert_eq!(urls, "https://x.test/1\nhttps://x.test/2\n");
    }

    #[test]
    fn empty_commit_touches_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let csv = tmp.path().join("results.csv");
        let log = tmp.path().join("seen.txt");
        commit_run(&csv, &log, &[]).unwrap();
        assert!(!csv.exists());
        assert!(!log.exists());
    }
}
