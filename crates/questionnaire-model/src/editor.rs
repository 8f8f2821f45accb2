//! Editor State
//!
//! Everything the questionnaire editor holds, with one pure update function
//! per user action. Each function leaves `self` untouched and returns the
//! next state, so the view only ever swaps whole states.

use std::collections::HashSet;

use crate::document::QuestionnaireDocument;
use crate::error::EditorError;
use crate::input::{parse_finite, parse_int};
use crate::item::{Item, ItemId, ItemType};
use crate::questionnaire::Questionnaire;

/// Imported ids above this are treated as missing and re-issued, which
/// leaves the allocator the rest of the `u32` range.
pub const MAX_IMPORTED_ID: u32 = u32::MAX / 2;

/// Review-wide parameters. Not part of the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorParams {
    pub min_score: i64,
    pub max_score: i64,
    pub is_private: bool,
}

impl Default for EditorParams {
    fn default() -> Self {
        Self {
            min_score: 0,
            max_score: 5,
            is_private: false,
        }
    }
}

/// A single field edit on one item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemEdit {
    Text(String),
    Type(ItemType),
    /// Raw input from the weight field
    Weight(String),
    TextAreaSize(String),
    MaxLabel(String),
    MinLabel(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    questionnaire: Questionnaire,
    params: EditorParams,
    /// Always above every id handed out so far
    next_id: u32,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Questionnaire::seed())
    }
}

impl EditorState {
    pub fn new(questionnaire: Questionnaire) -> Self {
        let next_id = questionnaire.max_id().map_or(1, |id| id.0.saturating_add(1));
        Self {
            questionnaire,
            params: EditorParams::default(),
            next_id,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn params(&self) -> &EditorParams {
        &self.params
    }

    pub fn items(&self) -> &[Item] {
        &self.questionnaire.items
    }

    /// Next unused id, or `None` once the id space is exhausted
    fn allocate_id(&mut self) -> Option<ItemId> {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.checked_add(1)?;
        Some(id)
    }

    /// Append `count_input` placeholder items of `item_type`.
    ///
    /// A count that is not a number, or is zero or negative, appends
    /// nothing. Counts above `max_batch` are clamped.
    pub fn add_items(&self, count_input: &str, item_type: ItemType, max_batch: usize) -> Self {
        let mut next = self.clone();
        let requested = match parse_int(count_input) {
            Some(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
            _ => {
                log::debug!("[EDITOR] Ignoring add with count {:?}", count_input);
                return next;
            }
        };
        let count = if requested > max_batch {
            log::warn!("[EDITOR] Add of {} items clamped to {}", requested, max_batch);
            max_batch
        } else {
            requested
        };

        // Each new sequence must exceed the previous one, even where
        // `base + k` is no longer exactly representable.
        let mut previous = self.questionnaire.max_sequence();
        let base = previous.map_or(0.0, f64::floor);
        let mut added = 0usize;
        for k in 1..=count {
            let mut sequence = base + k as f64;
            if let Some(prev) = previous.filter(|&prev| sequence <= prev) {
                sequence = prev.next_up();
            }
            if !sequence.is_finite() {
                log::warn!("[EDITOR] No sequence left above {:?}", previous);
                break;
            }
            let Some(id) = next.allocate_id() else {
                log::warn!("[EDITOR] Item ids exhausted");
                break;
            };
            next.questionnaire
                .items
                .push(Item::placeholder(id, sequence, item_type));
            previous = Some(sequence);
            added += 1;
        }
        log::debug!("[EDITOR] Added {} {} items", added, item_type);
        next
    }

    /// Remove the item with `id`. Unknown ids are ignored; other items keep
    /// their sequences.
    pub fn remove_item(&self, id: ItemId) -> Self {
        let mut next = self.clone();
        next.questionnaire.items.retain(|item| item.id != id);
        if next.questionnaire.len() == self.questionnaire.len() {
            log::debug!("[EDITOR] Remove of unknown item {}", id);
        } else {
            log::debug!("[EDITOR] Removed item {}", id);
        }
        next
    }

    /// Reassign sequences 1..=n in display order
    pub fn renumber(&self) -> Self {
        let mut next = self.clone();
        for (item, seq) in next.questionnaire.items.iter_mut().zip(1u32..) {
            item.sequence = f64::from(seq);
        }
        next
    }

    /// Commit a field edit. Unknown ids are ignored.
    pub fn edit_item(&self, id: ItemId, edit: ItemEdit) -> Result<Self, EditorError> {
        let mut next = self.clone();
        let Some(item) = next.questionnaire.items.iter_mut().find(|item| item.id == id) else {
            log::debug!("[EDITOR] Edit of unknown item {}", id);
            return Ok(next);
        };
        match edit {
            ItemEdit::Text(text) => item.text = text,
            ItemEdit::Type(item_type) => item.item_type = item_type,
            ItemEdit::Weight(input) => {
                item.weight = parse_finite(&input).ok_or(EditorError::InvalidNumber {
                    field: "Weight",
                    input,
                })?;
            }
            ItemEdit::TextAreaSize(size) => item.text_area_size = size,
            ItemEdit::MaxLabel(label) => item.max_label = label,
            ItemEdit::MinLabel(label) => item.min_label = label,
        }
        Ok(next)
    }

    pub fn set_title(&self, title: &str) -> Self {
        let mut next = self.clone();
        next.questionnaire.title = title.to_string();
        next
    }

    pub fn set_min_score(&self, input: &str) -> Result<Self, EditorError> {
        let value = parse_int(input).ok_or_else(|| EditorError::InvalidNumber {
            field: "Min item score",
            input: input.to_string(),
        })?;
        let mut next = self.clone();
        next.params.min_score = value;
        Ok(next)
    }

    pub fn set_max_score(&self, input: &str) -> Result<Self, EditorError> {
        let value = parse_int(input).ok_or_else(|| EditorError::InvalidNumber {
            field: "Max item score",
            input: input.to_string(),
        })?;
        let mut next = self.clone();
        next.params.max_score = value;
        Ok(next)
    }

    pub fn toggle_private(&self) -> Self {
        let mut next = self.clone();
        next.params.is_private = !next.params.is_private;
        next
    }

    /// Replace the questionnaire with an imported document.
    ///
    /// The first occurrence of each document id up to [`MAX_IMPORTED_ID`]
    /// is kept; items without an id, with a repeated one, or with a larger
    /// one get fresh ids. Parameters are unchanged.
    pub fn import(&self, doc: QuestionnaireDocument) -> Self {
        let mut next = self.clone();

        let mut kept = HashSet::new();
        let keep: Vec<bool> = doc
            .items
            .iter()
            .map(|record| {
                record
                    .id
                    .is_some_and(|id| id.0 <= MAX_IMPORTED_ID && kept.insert(id))
            })
            .collect();
        if let Some(max_kept) = kept.iter().max() {
            next.next_id = next.next_id.max(max_kept.0 + 1);
        }

        let mut fresh = 0usize;
        let mut dropped = 0usize;
        let mut items = Vec::with_capacity(doc.items.len());
        for (record, keep_id) in doc.items.into_iter().zip(keep) {
            let id = match record.id {
                Some(id) if keep_id => id,
                _ => match next.allocate_id() {
                    Some(id) => {
                        fresh += 1;
                        id
                    }
                    None => {
                        dropped += 1;
                        continue;
                    }
                },
            };
            items.push(record.into_item(id));
        }
        if fresh > 0 {
            log::warn!("[EDITOR] Assigned fresh ids to {} imported items", fresh);
        }
        if dropped > 0 {
            log::warn!("[EDITOR] Item ids exhausted, dropped {} imported items", dropped);
        }

        next.questionnaire = Questionnaire::new(doc.title, items);
        log::info!(
            "[EDITOR] Imported '{}' with {} items",
            next.questionnaire.title,
            next.questionnaire.len()
        );
        next
    }
}
