//! Structural validation of compositions.
//!
//! A transition only makes sense between two held states: the playback
//! loop reads its endpoints from the elements on either side. Duration
//! limits mirror the timeline editor's drag bounds.

use crate::composition::Composition;
use crate::element::{Element, MAX_COMPOSITION_MS, MAX_ELEMENT_MS, MIN_ELEMENT_MS};
use crate::error::{IssueCode, ValidationIssue};

/// Validates a composition, returning every issue found (empty means
/// valid).
pub fn validate(composition: &Composition) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if composition.is_empty() {
        issues.push(ValidationIssue::new(
            IssueCode::EmptyComposition,
            "composition has no elements",
        ));
        return issues;
    }

    let elements = &composition.elements;
    for (i, element) in elements.iter().enumerate() {
        if element.is_transition() {
            let before_is_state =
                i > 0 && matches!(elements[i - 1], Element::State { .. });
            let after_is_state = elements
                .get(i + 1)
                .is_some_and(|next| matches!(next, Element::State { .. }));
            if !before_is_state || !after_is_state {
                let kind = match element {
                    Element::Crossfade { .. } => "crossfade",
                    _ => "meander",
                };
                issues.push(ValidationIssue::at_element(
                    IssueCode::UnenclosedTransition,
                    format!("{} must be placed between two states", kind),
                    i,
                ));
            }
        }

        let duration_ms = element.duration_ms();
        if !(MIN_ELEMENT_MS..=MAX_ELEMENT_MS).contains(&duration_ms) {
            issues.push(ValidationIssue::at_element(
                IssueCode::DurationOutOfRange,
                format!(
                    "duration {}ms outside [{}ms, {}ms]",
                    duration_ms, MIN_ELEMENT_MS, MAX_ELEMENT_MS
                ),
                i,
            ));
        }
    }

    let total_ms = composition.total_duration_ms();
    if total_ms > MAX_COMPOSITION_MS {
        issues.push(ValidationIssue::new(
            IssueCode::CompositionTooLong,
            format!(
                "total duration {}ms exceeds the {}ms cap",
                total_ms, MAX_COMPOSITION_MS
            ),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn state(x: f64) -> Element {
        Element::state(x, 0.0, 0.0)
    }

    #[test]
    fn test_valid_composition() {
        let composition = Composition {
            elements: vec![state(0.0), Element::meander(), state(1.0)],
        };
        assert!(validate(&composition).is_empty());
    }

    #[test]
    fn test_empty_composition() {
        let issues = validate(&Composition::new());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::EmptyComposition);
    }

    #[test]
    fn test_leading_transition_rejected() {
        let composition = Composition {
            elements: vec![Element::crossfade(), state(0.0)],
        };
        let issues = validate(&composition);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::UnenclosedTransition);
        assert_eq!(issues[0].element, Some(0));
    }

    #[test]
    fn test_trailing_transition_rejected() {
        let composition = Composition {
            elements: vec![state(0.0), Element::meander()],
        };
        let issues = validate(&composition);
        assert_eq!(issues[0].code, IssueCode::UnenclosedTransition);
        assert_eq!(issues[0].element, Some(1));
    }

    #[test]
    fn test_adjacent_transitions_rejected() {
        let composition = Composition {
            elements: vec![
                state(0.0),
                Element::crossfade(),
                Element::meander(),
                state(1.0),
            ],
        };
        let issues = validate(&composition);
        // Both transitions lack a state on one side.
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|issue| issue.code == IssueCode::UnenclosedTransition));
    }

    #[test]
    fn test_duration_out_of_range() {
        let mut short = state(0.0);
        if let Element::State { duration_ms, .. } = &mut short {
            *duration_ms = 10;
        }
        let composition = Composition {
            elements: vec![short],
        };
        let issues = validate(&composition);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::DurationOutOfRange);
    }

    #[test]
    fn test_total_duration_cap() {
        // Thirteen states at the maximum element duration: 130s > 120s.
        let elements = (0..13)
            .map(|i| {
                let mut element = state(i as f64);
                element.set_duration_ms(MAX_ELEMENT_MS);
                element
            })
            .collect();
        let issues = validate(&Composition { elements });
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::CompositionTooLong);
    }
}
