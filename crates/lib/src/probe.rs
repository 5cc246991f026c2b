//! # Existence Probe
//!
//! A cheap check of whether a query's `FROM` source yields any row. The query is
//! rewritten textually, not parsed:
//!
//! 1. Any `ORDER BY` clause is dropped through the end of the string.
//! 2. Everything after the first `FROM` keyword becomes the source of
//!    `SELECT EXISTS (SELECT 1 FROM …)`.
//!
//! This is an approximation. Clauses that precede `FROM` (`DISTINCT`,
//! aggregates) are ignored, and a query without `FROM` cannot be probed at all;
//! such queries report `false`. When the first `FROM` sits inside a CTE or a
//! subquery (`WITH ny AS (SELECT * FROM Stores) SELECT * FROM ny`), the tail
//! is not valid SQL and the check reports `false` even if rows exist. Any
//! failure while running the probe is also reported as `false`.

use crate::{guard::is_read_only, providers::db::storage::Storage};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

/// Rewrites `sql` into an existence query, or `None` when it has no `FROM`.
pub fn build_existence_query(sql: &str) -> Option<String> {
    let order_by = Regex::new(r"(?is)\border\s+by\b.*$").ok()?;
    let from = Regex::new(r"(?i)\bfrom\b").ok()?;

    let without_order = order_by.replace(sql, "");
    let from_match = from.find(&without_order)?;

    let tail = without_order[from_match.end()..]
        .trim()
        .trim_end_matches(';')
        .trim_end();
    if tail.is_empty() {
        return None;
    }

    Some(format!("SELECT EXISTS (SELECT 1 FROM {tail})"))
}

/// Returns whether `sql` would match at least one row, as far as the rewrite
/// can tell.
pub async fn probe_exists(storage: &dyn Storage, sql: &str) -> bool {
    if !is_read_only(sql) {
        warn!(sql = %sql, "Refusing to probe a query that is not read-only.");
        return false;
    }

    let Some(existence_query) = build_existence_query(sql) else {
        debug!(sql = %sql, "Query has no FROM clause; cannot probe.");
        return false;
    };

    debug!(existence_query = %existence_query, "--> Probing for data");

    match storage.execute_query(&existence_query).await {
        Ok(rows) => rows
            .first()
            .and_then(|row| row.values().next())
            .map(is_truthy)
            .unwrap_or(false),
        Err(e) => {
            warn!(existence_query = %existence_query, "Existence probe failed, treating as no data: {e}");
            false
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    }
}
