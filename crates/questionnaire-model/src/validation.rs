//! Validation
//!
//! Checks run after every update. Findings are shown inline; none of them
//! blocks editing or export.

use std::collections::HashSet;

use crate::editor::EditorState;
use crate::error::ValidationError;

/// All problems in `state`, in form order: items first, then parameters.
pub fn validate(state: &EditorState) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for item in state.items() {
        // -0.0 and 0.0 are the same sequence
        let key = (item.sequence + 0.0).to_bits();
        if !seen.insert(key) && reported.insert(key) {
            errors.push(ValidationError::DuplicateSequence { sequence: item.sequence });
        }
    }

    for item in state.items() {
        if item.weight < 0.0 {
            errors.push(ValidationError::NegativeWeight {
                sequence: item.sequence,
                weight: item.weight,
            });
        }
    }

    let params = state.params();
    if params.min_score < 0 {
        errors.push(ValidationError::NegativeScore {
            field: "Min item score",
            value: params.min_score,
        });
    }
    if params.max_score < 0 {
        errors.push(ValidationError::NegativeScore {
            field: "Max item score",
            value: params.max_score,
        });
    }
    if params.max_score < params.min_score {
        errors.push(ValidationError::InvertedScoreBounds {
            min: params.min_score,
            max: params.max_score,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ItemRecord, QuestionnaireDocument};
    use crate::editor::ItemEdit;
    use crate::item::{ItemId, ItemType};

    fn record(sequence: f64) -> ItemRecord {
        ItemRecord {
            id: None,
            sequence,
            text: "Q".into(),
            item_type: ItemType::Criterion,
            weight: 1.0,
            text_area_size: String::new(),
            max_label: String::new(),
            min_label: String::new(),
        }
    }

    #[test]
    fn test_seed_is_valid() {
        assert!(validate(&EditorState::default()).is_empty());
    }

    #[test]
    fn test_duplicate_sequence_reported_once() {
        let doc = QuestionnaireDocument {
            title: "dup".into(),
            items: vec![record(1.0), record(1.0), record(2.0), record(1.0)],
        };
        let errors = validate(&EditorState::default().import(doc));
        assert_eq!(errors, vec![ValidationError::DuplicateSequence { sequence: 1.0 }]);
        assert!(errors[0].to_string().contains("Duplicate sequence number detected"));
    }

    #[test]
    fn test_negative_weight() {
        let state = EditorState::default()
            .edit_item(ItemId(3), ItemEdit::Weight("-1".into()))
            .unwrap();
        assert_eq!(
            validate(&state),
            vec![ValidationError::NegativeWeight { sequence: 3.0, weight: -1.0 }]
        );
    }

    #[test]
    fn test_score_bounds() {
        let state = EditorState::default().set_max_score("-2").unwrap();
        assert_eq!(
            validate(&state),
            vec![
                ValidationError::NegativeScore { field: "Max item score", value: -2 },
                ValidationError::InvertedScoreBounds { min: 0, max: -2 },
            ]
        );

        let state = EditorState::default().set_min_score("7").unwrap();
        assert_eq!(
            validate(&state),
            vec![ValidationError::InvertedScoreBounds { min: 7, max: 5 }]
        );
    }
}
