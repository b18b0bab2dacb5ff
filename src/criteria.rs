// src/criteria.rs
//! Search criteria and the compound query string built from them.
//!
//! Every non-empty category contributes exactly one parenthesized OR-group,
//! in a fixed order; empty categories are omitted entirely.

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    /// Terms that must appear in the result title (`intitle:` group).
    #[serde(default)]
    pub title_keywords: Vec<String>,
    /// General terms, OR-combined.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Site restrictions (`site:` group).
    #[serde(default)]
    pub domains: Vec<String>,
    /// Location terms, OR-combined.
    #[serde(default)]
    pub locations: Vec<String>,
    /// Titles containing any of these are dropped after fetching; the group
    /// is also negated in the query to cut obvious noise server-side.
    #[serde(default)]
    pub avoid_keywords: Vec<String>,
    /// Lower bound on the published date (`after:` token).
    #[serde(default)]
    pub min_date: Option<NaiveDate>,
}

impl SearchCriteria {
    /// Build the query string. Group order: title, keywords, locations,
    /// domains, negated avoid group, date bound.
    pub fn build_query(&self) -> String {
        let mut groups: Vec<String> = Vec::new();

        if let Some(g) = or_group(&self.title_keywords, |t| format!("intitle:\"{t}\"")) {
            groups.push(g);
        }
        if let Some(g) = or_group(&self.keywords, |t| format!("\"{t}\"")) {
            groups.push(g);
        }
        if let Some(g) = or_group(&self.locations, |t| format!("\"{t}\"")) {
            groups.push(g);
        }
        if let Some(g) = or_group(&self.domains, |t| format!("site:{t}")) {
            groups.push(g);
        }
        if let Some(g) = or_group(&self.avoid_keywords, |t| format!("\"{t}\"")) {
            groups.push(format!("-{g}"));
        }
        if let Some(d) = self.min_date {
            groups.push(format!("after:{}", d.format("%Y-%m-%d")));
        }

        groups.join(" ")
    }
}

/// One parenthesized OR-group over the non-blank terms, or `None` when the
/// category has nothing to contribute (no empty parens).
fn or_group<F: Fn(&str) -> String>(terms: &[String], render: F) -> Option<String> {
    let parts: Vec<String> = terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(render)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("({})", parts.join(" OR ")))
    }
}
