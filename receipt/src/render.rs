use crate::state::ViewState;
use std::fmt::{self, Write};

pub const TITLE: &str = "Decision Receipt AI";
pub const FOOTER: &str = "© 2025 Decision Receipt AI - Audit-Ready Decisions";

const RULE: &str = "----------------------------------------";

/// Renders the whole view as text. Output depends only on `state`.
pub fn render(state: &ViewState) -> String {
    View(state).to_string()
}

/// Display adapter over [`ViewState`], for writing the view straight into
/// any formatter.
pub struct View<'a>(pub &'a ViewState);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_view(f, self.0)
    }
}

fn write_view(out: &mut impl Write, state: &ViewState) -> fmt::Result {
    let disabled = if state.is_loading() { " (busy)" } else { "" };

    writeln!(out, "{}\n", TITLE)?;

    writeln!(out, "Upload Policy Document")?;
    writeln!(
        out,
        "  File: {}",
        state
            .selected_file()
            .map(|f| f.file_name.as_str())
            .unwrap_or("No file selected")
    )?;
    writeln!(out, "  [Upload & Index]{}\n", disabled)?;

    writeln!(out, "Ask a Question")?;
    if state.question().is_empty() {
        writeln!(out, "  Question: Ask your policy question...")?;
    } else {
        writeln!(out, "  Question: {}", state.question())?;
    }
    writeln!(out, "  [Run Decision Query]{}", disabled)?;

    if !state.status().is_empty() {
        writeln!(out, "\n{}", state.status())?;
    }

    if !state.results().is_empty() {
        writeln!(out, "\nDecision Evidence")?;
        for item in state.results() {
            writeln!(out, "{}", RULE)?;
            writeln!(out, "Page: {}", item.page)?;
            writeln!(out, "Confidence: {}", item.confidence_percent())?;
            writeln!(out, "{}", item.policy_text)?;
        }
        writeln!(out, "{}", RULE)?;
    }

    writeln!(out, "\n{}", FOOTER)
}
