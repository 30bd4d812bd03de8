//! Human-readable preview of a pending team change.

use std::fmt::Write;

use crate::auth::AuthorizationConfig;

const EMPTY_PLACEHOLDER: &str = "- none";

/// Render the preview shown before confirmation.
///
/// The layout is fixed: team name, then users, then groups, one entry per
/// line in input order. An empty section renders a single placeholder line.
/// The result has no trailing newline.
#[must_use]
pub fn render_preview(team_name: &str, config: &AuthorizationConfig) -> String {
    let mut out = format!("Team Name: {team_name}\n");
    push_section(&mut out, "Users", &config.users);
    out.push('\n');
    push_section(&mut out, "Groups", &config.groups);
    out
}

fn push_section(out: &mut String, title: &str, entries: &[String]) {
    let _ = write!(out, "\n{title}:");
    if entries.is_empty() {
        let _ = write!(out, "\n{EMPTY_PLACEHOLDER}");
        return;
    }
    for entry in entries {
        let _ = write!(out, "\n- {entry}");
    }
}
