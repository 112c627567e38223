//! The composition timeline and its JSON dump.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::element::{Element, MAX_COMPOSITION_MS};
use crate::error::CompositionError;

/// An ordered timeline of elements, capped at
/// [`MAX_COMPOSITION_MS`](crate::element::MAX_COMPOSITION_MS) total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// Timeline entries in playback order.
    pub elements: Vec<Element>,
}

impl Composition {
    /// Creates an empty composition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements on the timeline.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the timeline is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total duration of the timeline in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.elements.iter().map(Element::duration_ms).sum()
    }

    /// Appends an element, rejecting it if the timeline would exceed
    /// the composition cap.
    pub fn push(&mut self, element: Element) -> Result<(), CompositionError> {
        let current_ms = self.total_duration_ms();
        let element_ms = element.duration_ms();
        if current_ms + element_ms > MAX_COMPOSITION_MS {
            return Err(CompositionError::Full {
                current_ms,
                element_ms,
                cap_ms: MAX_COMPOSITION_MS,
            });
        }
        self.elements.push(element);
        Ok(())
    }

    /// Parses a composition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the composition to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reads a composition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CompositionError> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    /// Writes the composition dump to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CompositionError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::DEFAULT_ELEMENT_MS;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_total_duration() {
        let mut composition = Composition::new();
        composition.push(Element::state(0.0, 0.0, 0.0)).unwrap();
        composition.push(Element::meander()).unwrap();
        composition.push(Element::state(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(composition.total_duration_ms(), 3 * DEFAULT_ELEMENT_MS);
    }

    #[test]
    fn test_push_rejects_past_cap() {
        let mut composition = Composition::new();
        // 24 default elements fill the two-minute cap exactly.
        for i in 0..24 {
            composition.push(Element::state(i as f64, 0.0, 0.0)).unwrap();
        }
        assert_eq!(composition.total_duration_ms(), MAX_COMPOSITION_MS);

        let err = composition.push(Element::crossfade()).unwrap_err();
        assert!(matches!(err, CompositionError::Full { .. }));
        assert_eq!(composition.len(), 24);
    }

    #[test]
    fn test_json_round_trip() {
        let mut composition = Composition::new();
        composition.push(Element::state(0.1, 0.2, 0.3)).unwrap();
        composition.push(Element::crossfade()).unwrap();
        composition.push(Element::state(0.4, 0.5, 0.6)).unwrap();

        let json = composition.to_json_pretty().unwrap();
        let parsed = Composition::from_json(&json).unwrap();
        assert_eq!(parsed, composition);
    }
}
