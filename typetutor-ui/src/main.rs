use eframe::{egui, Frame};
use egui::{Color32, Context, Ui};

use reqwest::Result;

mod practice;
mod rest;
mod source;
mod todo;

use practice::Practice;
use rest::{CollectionSummary, Language, RESTContext, Snippet};
use source::{source_selector, CodeSource};
use todo::TodoIsland;

/// Practice mode selected in the top bar.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Trigraphs,
    Code,
}

/// Global UI state (MUST persist between frames in egui).
struct TypeTutorUI {
    rest: RESTContext,
    status: Option<String>,
    mode: Mode,

    trigraphs: Vec<String>,
    selected_trigraph: String,
    word_count: usize,

    code_source: CodeSource,
    languages: Vec<Language>,
    selected_language: String,
    collections: Vec<CollectionSummary>,
    selected_collection: String,
    snippets: Vec<Snippet>,
    selected_snippet: usize,
    github_url: String,

    practice: Practice,
    todo: TodoIsland,
}

impl TypeTutorUI {
    /// Initializes the UI with sane defaults.
    fn new() -> Result<Self> {
        let mut ui = Self {
            rest: RESTContext::new()?,
            status: None,
            mode: Mode::Trigraphs,

            trigraphs: Vec::new(),
            selected_trigraph: String::new(),
            word_count: 20,

            code_source: CodeSource::default(),
            languages: Vec::new(),
            selected_language: String::new(),
            collections: Vec::new(),
            selected_collection: String::new(),
            snippets: Vec::new(),
            selected_snippet: 0,
            github_url: String::new(),

            practice: Practice::default(),
            todo: TodoIsland::default(),
        };
        ui.load_trigraphs();
        ui.load_languages();
        Ok(ui)
    }

    /// Records a failed request. Failures degrade to empty content.
    fn report(&mut self, what: &str, e: reqwest::Error) {
        self.status = Some(format!("{what} unavailable: {e}"));
    }

    fn load_trigraphs(&mut self) {
        match self.rest.get_trigraphs() {
            Ok(names) => {
                if !names.contains(&self.selected_trigraph) {
                    self.selected_trigraph = names.first().cloned().unwrap_or_default();
                }
                self.trigraphs = names;
            }
            Err(e) => {
                self.trigraphs.clear();
                self.report("Trigraphs", e);
            }
        }
    }

    fn load_trigraph_words(&mut self) {
        if self.selected_trigraph.is_empty() {
            return;
        }
        match self.rest.get_trigraph_words(&self.selected_trigraph, self.word_count) {
            Ok(words) => self.practice.reset(words.join(" ")),
            Err(e) => {
                self.practice.reset(String::new());
                self.report("Words", e);
            }
        }
    }

    fn load_languages(&mut self) {
        match self.rest.get_languages() {
            Ok(languages) => {
                self.languages = languages;
                if self.selected_language.is_empty() {
                    if let Some(first) = self.languages.first() {
                        self.selected_language = first.code.clone();
                        self.load_collections();
                    }
                }
            }
            Err(e) => {
                self.languages.clear();
                self.report("Languages", e);
            }
        }
    }

    fn load_collections(&mut self) {
        match self.rest.get_collections(&self.selected_language) {
            Ok(collections) => {
                self.selected_collection = collections.first().map(|c| c.id.clone()).unwrap_or_default();
                self.collections = collections;
                self.load_snippets();
            }
            Err(e) => {
                self.collections.clear();
                self.snippets.clear();
                self.report("Collections", e);
            }
        }
    }

    fn load_snippets(&mut self) {
        if self.selected_collection.is_empty() {
            self.snippets.clear();
            return;
        }
        match self.rest.get_snippets(&self.selected_language, &self.selected_collection) {
            Ok(snippets) => {
                self.snippets = snippets;
                self.select_snippet(0);
            }
            Err(e) => {
                self.snippets.clear();
                self.report("Snippets", e);
            }
        }
    }

    /// Selects a snippet by the index the server assigned to it.
    fn select_snippet(&mut self, index: usize) {
        self.selected_snippet = index;
        let code = self
            .snippets
            .iter()
            .find(|s| s.index == index)
            .map(|s| s.code.clone())
            .unwrap_or_default();
        self.practice.reset(code);
    }

    fn load_random_snippet(&mut self) {
        match self.rest.get_random_snippet(&self.selected_language) {
            Ok(random) => {
                if random.collection_id != self.selected_collection {
                    self.selected_collection = random.collection_id;
                    self.load_snippets();
                }
                self.select_snippet(random.snippet.index);
            }
            Err(e) => self.report("Random snippet", e),
        }
    }

    fn load_github(&mut self) {
        match self.rest.post_github_content(&self.github_url) {
            Ok(response) if response.success => {
                self.status = None;
                self.practice.reset(response.content.unwrap_or_default());
            }
            Ok(response) => {
                self.status = Some(response.error.unwrap_or_else(|| "GitHub content unavailable".to_owned()));
                self.practice.reset(String::new());
            }
            Err(e) => self.report("GitHub content", e),
        }
    }

    fn trigraph_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let previous = self.selected_trigraph.clone();
            egui::ComboBox::from_id_salt("trigraph")
                .selected_text(&self.selected_trigraph)
                .show_ui(ui, |ui| {
                    for name in &self.trigraphs {
                        ui.selectable_value(&mut self.selected_trigraph, name.clone(), name);
                    }
                });
            ui.label("Words");
            let count_changed = ui
                .add(egui::DragValue::new(&mut self.word_count).range(1..=200).speed(1))
                .changed();

            if ui.button("New drill").clicked() || count_changed || previous != self.selected_trigraph {
                self.load_trigraph_words();
            }
        });
    }

    fn code_controls(&mut self, ui: &mut Ui) {
        let mut new_source = None;
        source_selector(ui, self.code_source, |source| new_source = Some(source));
        if let Some(source) = new_source {
            self.code_source = source;
            self.practice.reset(String::new());
        }

        ui.separator();
        match self.code_source {
            CodeSource::Collections => self.collection_controls(ui),
            CodeSource::GitHub => {
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.github_url);
                    if ui.button("Load").clicked() {
                        self.load_github();
                    }
                });
            }
        }
    }

    fn collection_controls(&mut self, ui: &mut Ui) {
        let previous_language = self.selected_language.clone();
        let previous_collection = self.selected_collection.clone();
        let previous_snippet = self.selected_snippet;

        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("language")
                .selected_text(&self.selected_language)
                .show_ui(ui, |ui| {
                    for language in &self.languages {
                        let text = format!("{} {}", language.icon, language.name);
                        ui.selectable_value(&mut self.selected_language, language.code.clone(), text);
                    }
                });
            egui::ComboBox::from_id_salt("collection")
                .selected_text(&self.selected_collection)
                .show_ui(ui, |ui| {
                    for collection in &self.collections {
                        let text = format!(
                            "{} ({}, {} snippets)",
                            collection.name, collection.difficulty, collection.snippet_count
                        );
                        ui.selectable_value(&mut self.selected_collection, collection.id.clone(), text);
                    }
                });
            egui::ComboBox::from_id_salt("snippet")
                .selected_text(format!("#{}", self.selected_snippet))
                .show_ui(ui, |ui| {
                    for snippet in &self.snippets {
                        let text = format!("#{} {}", snippet.index, snippet.title.as_deref().unwrap_or(""));
                        ui.selectable_value(&mut self.selected_snippet, snippet.index, text);
                    }
                });
        });

        if ui.button("Random snippet").clicked() {
            self.load_random_snippet();
        } else if previous_language != self.selected_language {
            self.load_collections();
        } else if previous_collection != self.selected_collection {
            self.load_snippets();
        } else if previous_snippet != self.selected_snippet {
            self.select_snippet(self.selected_snippet);
        }
    }

    fn practice_area(&mut self, ui: &mut Ui) {
        ui.separator();
        if self.practice.target.is_empty() {
            ui.label("No content loaded");
            return;
        }

        egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
            ui.monospace(&self.practice.target);
        });
        ui.add(
            egui::TextEdit::multiline(&mut self.practice.typed)
                .code_editor()
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        );

        if self.practice.is_complete() {
            ui.colored_label(Color32::GREEN, "Done!");
        } else {
            ui.label(format!(
                "{} / {} characters correct",
                self.practice.correct_chars(),
                self.practice.total_chars()
            ));
        }
    }
}

impl eframe::App for TypeTutorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::TopBottomPanel::top("mode").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.mode, Mode::Trigraphs, "Trigraphs");
                ui.selectable_value(&mut self.mode, Mode::Code, "Code");
                if ui.button("Reload").clicked() {
                    self.status = None;
                    self.load_trigraphs();
                    self.load_languages();
                }
            });
        });

        egui::SidePanel::right("todo").show(ctx, |ui| {
            ui.heading("To do");
            self.todo.show(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.mode {
                Mode::Trigraphs => self.trigraph_controls(ui),
                Mode::Code => self.code_controls(ui),
            }

            if let Some(status) = &self.status {
                ui.colored_label(Color32::LIGHT_RED, status);
            }

            self.practice_area(ui);
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "typetutor",
        options,
        Box::new(|_| Ok(Box::new(TypeTutorUI::new()?))),
    )
}
