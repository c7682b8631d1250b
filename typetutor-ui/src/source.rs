use egui::Ui;

/// Where the code to type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeSource {
    #[default]
    Collections,
    GitHub,
}

impl CodeSource {
    pub const ALL: [CodeSource; 2] = [CodeSource::Collections, CodeSource::GitHub];

    pub fn label(self) -> &'static str {
        match self {
            CodeSource::Collections => "📁 Predefined Collections",
            CodeSource::GitHub => "🔗 GitHub Raw URL",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            CodeSource::Collections => "Choose from curated code collections organized by programming language",
            CodeSource::GitHub => "Paste a GitHub raw URL to type over any code file from GitHub",
        }
    }
}

/// Calls `on_change` only when the choice differs from the current selection.
fn notify(selected: CodeSource, chosen: CodeSource, on_change: impl FnOnce(CodeSource)) {
    if chosen != selected {
        on_change(chosen);
    }
}

/// Source selector widget.
///
/// Holds no state: the parent owns `selected` and is told about a new choice
/// through `on_change`.
pub fn source_selector(ui: &mut Ui, selected: CodeSource, on_change: impl FnOnce(CodeSource)) {
    let mut chosen = selected;

    ui.label("Code Source:");
    egui::ComboBox::from_id_salt("code-source-selector")
        .selected_text(selected.label())
        .show_ui(ui, |ui| {
            for source in CodeSource::ALL {
                ui.selectable_value(&mut chosen, source, source.label());
            }
        });
    ui.small(selected.hint());

    notify(selected, chosen, on_change);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_modes() {
        assert_eq!(CodeSource::ALL.len(), 2);
        assert_ne!(CodeSource::Collections.label(), CodeSource::GitHub.label());
        assert_eq!(CodeSource::default(), CodeSource::Collections);
    }

    #[test]
    fn callback_fires_only_on_change() {
        let mut seen = Vec::new();
        notify(CodeSource::Collections, CodeSource::Collections, |s| seen.push(s));
        notify(CodeSource::Collections, CodeSource::GitHub, |s| seen.push(s));
        assert_eq!(seen, vec![CodeSource::GitHub]);
    }
}
