//! Questionnaire Entity
//!
//! Titled, ordered list of items, plus the questionnaire the editor opens with.

use crate::item::{Item, ItemId, ItemType, DEFAULT_TEXT_AREA_SIZE};

/// The document being edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Questionnaire {
    pub title: String,
    /// Items in display order
    pub items: Vec<Item>,
}

/// (sequence, text, max_label, min_label)
const SEED_ITEMS: &[(f64, &str, &str, &str)] = &[
    (1.0, "How many times was this person late to meetings?", "almost never", "almost always"),
    (2.0, "How many times did this person not show up?", "almost never", "almost always"),
    (3.0, "How much did this person offer to do in this project?", "100%-80%", "20%-0%"),
    (4.5, "What fraction of the work assigned to this person did s(he) do?", "100%-80%", "20%-0%"),
    (5.0, "How much initiative did this person take on this project?", "a whole lot", "total deadbeat"),
    (6.0, "Did this person try to avoid doing any task that was necessary?", "not at all", "absolutely"),
    (7.0, "How many of the useful ideas did this person come up with?", "100%-80%", "20%-0%"),
    (8.0, "What fraction of the coding did this person do?", "100%-80%", "20%-0%"),
    (9.0, "What fraction of the documentation did this person write?", "100%-80%", "20%-0%"),
    (10.0, "How important is this person to the team?", "indispensable", "redundant"),
];

impl Questionnaire {
    pub fn new(title: impl Into<String>, items: Vec<Item>) -> Self {
        Self { title: title.into(), items }
    }

    /// The teammate-review questionnaire the editor opens with
    pub fn seed() -> Self {
        let items = SEED_ITEMS
            .iter()
            .zip(1u32..)
            .map(|(&(sequence, text, max_label, min_label), id)| Item {
                id: ItemId(id),
                sequence,
                text: text.to_string(),
                item_type: ItemType::Criterion,
                weight: 1.0,
                text_area_size: DEFAULT_TEXT_AREA_SIZE.to_string(),
                max_label: max_label.to_string(),
                min_label: min_label.to_string(),
            })
            .collect();
        Self::new("Edit Teammate Review", items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Largest sequence in use, if any
    pub fn max_sequence(&self) -> Option<f64> {
        self.items.iter().map(|item| item.sequence).reduce(f64::max)
    }

    /// Largest id in use, if any
    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let q = Questionnaire::seed();
        assert_eq!(q.title, "Edit Teammate Review");
        assert_eq!(q.len(), 10);
        assert_eq!(q.items[0].text, "How many times was this person late to meetings?");
        assert_eq!(q.items[3].sequence, 4.5);
        assert!(q.items.iter().all(|i| i.item_type == ItemType::Criterion));
        assert_eq!(q.max_id(), Some(ItemId(10)));
        assert_eq!(q.max_sequence(), Some(10.0));
    }

    #[test]
    fn test_empty() {
        let q = Questionnaire::default();
        assert!(q.is_empty());
        assert_eq!(q.max_sequence(), None);
        assert_eq!(q.max_id(), None);
    }
}
