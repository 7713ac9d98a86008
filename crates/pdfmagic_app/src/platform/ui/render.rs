use pdfmagic_core::{AppViewModel, Lifecycle, StatusTone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Information,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub severity: Severity,
}

impl TerminalLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Information,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }
}

/// Lines describing what changed between `previous` and `view`.
pub fn render(previous: Option<&AppViewModel>, view: &AppViewModel) -> Vec<TerminalLine> {
    let mut lines = Vec::new();

    let active_tab = view.tabs.iter().find(|tab| tab.active);
    let previous_tab = previous.and_then(|prev| prev.tabs.iter().find(|tab| tab.active));
    if let Some(tab) = active_tab {
        if previous_tab.map(|prev| prev.key) != Some(tab.key) {
            lines.push(TerminalLine::info(format!(
                "{} [{}]: {} (accepts {})",
                tab.label, tab.key, view.helper_text, view.accept_filter
            )));
        }
    }

    let files_changed = previous.is_none_or(|prev| prev.file_names != view.file_names);
    if files_changed && !view.file_names.is_empty() {
        lines.push(TerminalLine::info(format!(
            "Files ({}): {}",
            view.file_names.len(),
            view.file_names.join(", ")
        )));
    }

    let lifecycle_changed = previous.is_none_or(|prev| prev.lifecycle != view.lifecycle);
    if lifecycle_changed && view.lifecycle == Lifecycle::Submitting {
        lines.push(TerminalLine::info(view.submit_label));
    }

    let message_changed = previous.is_none_or(|prev| prev.status_message != view.status_message);
    if message_changed && !view.status_message.is_empty() {
        lines.push(match view.status_tone {
            StatusTone::Error => TerminalLine::error(view.status_message.clone()),
            StatusTone::Neutral | StatusTone::Success => {
                TerminalLine::info(view.status_message.clone())
            }
        });
    }

    let saved_changed = previous.is_none_or(|prev| prev.last_saved != view.last_saved);
    if saved_changed {
        if let Some(path) = &view.last_saved {
            lines.push(TerminalLine::info(format!("Saved {}", path.display())));
        }
    }

    lines
}
