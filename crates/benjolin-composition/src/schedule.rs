//! Rendering a composition into a timed parameter schedule.
//!
//! The schedule is the playback plan: an ordered list of absolute
//! offsets at which the synthesizer's eight parameters are replaced.
//! State segments emit one update at their start; transition segments
//! spread their parameter sequence evenly across their duration, one
//! update per interval.

use benjolin_space::{LatentCoord, LatentSpace, ParamVector};
use serde::{Deserialize, Serialize};

use crate::composition::Composition;
use crate::element::Element;
use crate::error::{IssueCode, ScheduleError, ValidationIssue};
use crate::validation::validate;

/// Number of interpolation steps in a rendered crossfade (101 parameter
/// vectors per transition).
pub const CROSSFADE_STEPS: usize = 100;

/// One parameter update at an absolute offset from composition start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledUpdate {
    /// Offset from composition start, in milliseconds.
    pub at_ms: u64,
    /// The eight synthesizer parameters to apply.
    pub params: ParamVector,
}

/// A fully rendered playback plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Updates in playback order.
    pub updates: Vec<ScheduledUpdate>,
    /// Total composition duration in milliseconds.
    pub total_ms: u64,
}

/// Renders `composition` against `space` into a schedule.
///
/// The composition must pass structural validation. A meander that
/// could not reach its goal renders as far as it got; an unresolved
/// state coordinate is an error, since nothing can play from it.
pub fn render(composition: &Composition, space: &LatentSpace) -> Result<Schedule, ScheduleError> {
    let issues = validate(composition);
    if !issues.is_empty() {
        return Err(ScheduleError::Invalid { issues });
    }

    let elements = &composition.elements;
    let mut updates = Vec::new();
    let mut offset_ms = 0u64;

    for (i, element) in elements.iter().enumerate() {
        match element {
            Element::State { duration_ms, .. } => {
                let coord = state_coord(element, i)?;
                let params = space
                    .parameters_at(&coord)
                    .ok_or(ScheduleError::UnresolvedState { element: i })?;
                updates.push(ScheduledUpdate {
                    at_ms: offset_ms,
                    params,
                });
                offset_ms += duration_ms;
            }
            Element::Crossfade { duration_ms } => {
                let (from, to) = enclosing_coords(elements, i)?;
                let fade = space.crossfade_parameters(&from, &to, CROSSFADE_STEPS);
                if fade.is_empty() {
                    return Err(ScheduleError::UnresolvedState { element: i });
                }
                spread(&mut updates, offset_ms, *duration_ms, &fade);
                offset_ms += duration_ms;
            }
            Element::Meander { duration_ms } => {
                let (from, to) = enclosing_coords(elements, i)?;
                let params = space.meander_parameters(&from, &to);
                if params.is_empty() {
                    return Err(ScheduleError::UnresolvedState { element: i });
                }
                spread(&mut updates, offset_ms, *duration_ms, &params);
                offset_ms += duration_ms;
            }
        }
    }

    Ok(Schedule {
        updates,
        total_ms: offset_ms,
    })
}

/// One update per interval, interval = duration / sequence length.
fn spread(
    updates: &mut Vec<ScheduledUpdate>,
    start_ms: u64,
    duration_ms: u64,
    sequence: &[ParamVector],
) {
    let interval = duration_ms as f64 / sequence.len() as f64;
    for (i, params) in sequence.iter().enumerate() {
        updates.push(ScheduledUpdate {
            at_ms: start_ms + (i as f64 * interval).round() as u64,
            params: *params,
        });
    }
}

fn state_coord(element: &Element, index: usize) -> Result<LatentCoord, ScheduleError> {
    element.coordinate().ok_or_else(|| ScheduleError::Invalid {
        issues: vec![ValidationIssue::at_element(
            IssueCode::UnenclosedTransition,
            "expected a state element",
            index,
        )],
    })
}

fn enclosing_coords(
    elements: &[Element],
    index: usize,
) -> Result<(LatentCoord, LatentCoord), ScheduleError> {
    // Validation has already established both neighbours are states.
    let from = elements
        .get(index.wrapping_sub(1))
        .and_then(Element::coordinate);
    let to = elements.get(index + 1).and_then(Element::coordinate);
    match (from, to) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => Err(ScheduleError::Invalid {
            issues: vec![ValidationIssue::at_element(
                IssueCode::UnenclosedTransition,
                "transition is not enclosed by two states",
                index,
            )],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benjolin_space::{DatasetColumns, PathConfig, PointDataset};
    use pretty_assertions::assert_eq;

    fn line_space(n: usize) -> LatentSpace {
        let param = |scale: f64| (0..n).map(|i| i as f64 * scale).collect::<Vec<f64>>();
        let columns = DatasetColumns {
            x: (0..n).map(|i| i as f64).collect(),
            y: vec![0.0; n],
            z: vec![0.0; n],
            p1: param(1.0),
            p2: param(2.0),
            p3: param(3.0),
            p4: param(4.0),
            p5: param(5.0),
            p6: param(6.0),
            p7: param(7.0),
            p8: param(8.0),
        };
        LatentSpace::with_config(
            PointDataset::new(columns).unwrap(),
            PathConfig {
                neighbors: 6,
                ..PathConfig::default()
            },
        )
    }

    fn state_at(space: &LatentSpace, index: usize) -> Element {
        let coord = space.dataset().coordinate_of(index).unwrap();
        Element::state(coord[0], coord[1], coord[2])
    }

    #[test]
    fn test_single_state_schedule() {
        let space = line_space(5);
        let composition = Composition {
            elements: vec![state_at(&space, 2)],
        };
        let schedule = render(&composition, &space).unwrap();
        assert_eq!(schedule.updates.len(), 1);
        assert_eq!(schedule.updates[0].at_ms, 0);
        assert_eq!(
            schedule.updates[0].params,
            space.dataset().parameters_of(2).unwrap()
        );
        assert_eq!(schedule.total_ms, 5000);
    }

    #[test]
    fn test_crossfade_schedule_spreads_updates() {
        let space = line_space(5);
        let composition = Composition {
            elements: vec![state_at(&space, 0), Element::crossfade(), state_at(&space, 4)],
        };
        let schedule = render(&composition, &space).unwrap();

        // 1 state + 101 fade vectors + 1 state.
        assert_eq!(schedule.updates.len(), 1 + CROSSFADE_STEPS + 1 + 1);
        assert_eq!(schedule.total_ms, 15_000);

        // Fade updates start with the first state's parameters at the
        // segment boundary and stay inside the segment.
        let fade_start = &schedule.updates[1];
        assert_eq!(fade_start.at_ms, 5000);
        assert_eq!(
            fade_start.params,
            space.dataset().parameters_of(0).unwrap()
        );
        let fade_end = &schedule.updates[1 + CROSSFADE_STEPS];
        assert!(fade_end.at_ms < 10_000);
    }

    #[test]
    fn test_meander_schedule_spreads_path() {
        let space = line_space(8);
        let composition = Composition {
            elements: vec![state_at(&space, 0), Element::meander(), state_at(&space, 7)],
        };
        let schedule = render(&composition, &space).unwrap();

        let path_len = space.meander_between(0, 7).unwrap().len();
        assert_eq!(schedule.updates.len(), 1 + path_len + 1);

        // Offsets never decrease.
        for pair in schedule.updates.windows(2) {
            assert!(pair[0].at_ms <= pair[1].at_ms);
        }
    }

    #[test]
    fn test_render_rejects_invalid_structure() {
        let space = line_space(5);
        let composition = Composition {
            elements: vec![Element::meander()],
        };
        assert!(matches!(
            render(&composition, &space),
            Err(ScheduleError::Invalid { .. })
        ));
    }

    #[test]
    fn test_render_rejects_unresolved_state() {
        let space = line_space(5);
        let composition = Composition {
            elements: vec![Element::state(42.0, 42.0, 42.0)],
        };
        assert!(matches!(
            render(&composition, &space),
            Err(ScheduleError::UnresolvedState { element: 0 })
        ));
    }

    #[test]
    fn test_schedule_json_round_trip() {
        let space = line_space(5);
        let composition = Composition {
            elements: vec![state_at(&space, 0), Element::crossfade(), state_at(&space, 4)],
        };
        let schedule = render(&composition, &space).unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        let parsed: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, schedule);
    }
}
