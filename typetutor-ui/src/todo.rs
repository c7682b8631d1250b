use egui::Ui;

#[derive(Debug, Clone, PartialEq)]
pub struct TodoItem {
    id: u64,
    text: String,
}

impl TodoItem {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered, client-local list of text items. Nothing is persisted.
///
/// Items are addressed by id, so two items with the same text stay distinct.
#[derive(Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u64,
}

impl TodoList {
    /// Appends the trimmed text unless it is blank. Returns the new item id.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem { id, text: text.to_owned() });
        Some(id)
    }

    /// Removes the item with this id. Returns `false` if there was none.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }
}

/// Demonstration island: an input, an "Add" button and the list.
#[derive(Debug, Default)]
pub struct TodoIsland {
    list: TodoList,
    draft: String,
}

impl TodoIsland {
    pub fn show(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.draft);
            if ui.button("Add").clicked() && self.list.add(&self.draft).is_some() {
                self.draft.clear();
            }
        });

        let mut removed = None;
        for item in self.list.items() {
            ui.horizontal(|ui| {
                ui.label(item.text());
                if ui.small_button("❌").clicked() {
                    removed = Some(item.id());
                }
            });
        }
        if let Some(id) = removed {
            self.list.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_items_are_ignored() {
        let mut list = TodoList::default();
        assert_eq!(list.add("   \t"), None);
        assert_eq!(list.add(""), None);
        assert!(list.items().is_empty());
    }

    #[test]
    fn items_are_trimmed_and_ordered() {
        let mut list = TodoList::default();
        list.add("  practice home row ");
        list.add("numbers");
        let texts: Vec<&str> = list.items().iter().map(TodoItem::text).collect();
        assert_eq!(texts, vec!["practice home row", "numbers"]);
    }

    #[test]
    fn remove_by_identity_keeps_same_text_twins() {
        let mut list = TodoList::default();
        let first = list.add("drill").unwrap();
        let second = list.add("drill").unwrap();

        assert!(list.remove(first));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id(), second);
        assert!(!list.remove(first));
    }
}
