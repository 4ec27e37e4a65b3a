pub mod balance_view;
pub mod deploy_view;
pub mod mint_view;
pub mod burn_view;

use std::fmt::Write;

/// One `label: value` row of a result view.
pub(crate) fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {:<18} {}", format!("{}:", label), value);
}

pub(crate) fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));
}
