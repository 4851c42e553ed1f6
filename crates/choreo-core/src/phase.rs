//! Section phase resolution.
//!
//! Maps the one-dimensional scroll offset to a per-section phase:
//! exactly one section is active at any offset; sections behind it are
//! exiting and sections ahead are anticipating, each over a spread
//! window of several sections so fast scrolling never pops a section
//! away instantly.

use serde::Serialize;

use crate::easing::ease_in_out_cubic;
use crate::timing::safe_ratio;

/// A section's phase relative to the current scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "kebab-case")]
pub enum Phase {
    /// Section is ahead of the active one. `progress` grows with
    /// distance from the active section, clamped to [0, 1].
    Anticipation { progress: f64 },
    /// Section owns the current scroll window. `progress` is the raw
    /// local progress through its budget; `eased` is the symmetric
    /// cubic easing of it.
    Active { progress: f64, eased: f64 },
    /// Section is behind the active one. `progress` reaches 1 after
    /// the configured spread of sections has scrolled past.
    Exit { progress: f64 },
}

/// Index of the section owning offset `y`, clamped to the track so the
/// very end of the track still reports the last section.
#[inline]
pub fn active_index(y: f64, budget: f64, section_count: usize) -> usize {
    if section_count == 0 {
        return 0;
    }
    if !(budget > 0.0) || !y.is_finite() || y <= 0.0 {
        return 0;
    }
    ((y / budget).floor() as usize).min(section_count - 1)
}

/// Local progress through the active section's budget, in [0, 1).
#[inline]
pub fn local_progress(y: f64, budget: f64) -> f64 {
    if !(budget > 0.0) || !y.is_finite() || y <= 0.0 {
        return 0.0;
    }
    safe_ratio(y % budget, budget)
}

/// Resolve the phase of section `index` at offset `y`.
///
/// `spread` is the number of sections an exit or anticipation window
/// spans (2 in the standard configuration).
pub fn resolve(index: usize, y: f64, budget: f64, section_count: usize, spread: f64) -> Phase {
    let active = active_index(y, budget, section_count);

    if index < active {
        Phase::Exit {
            progress: safe_ratio((active - index) as f64, spread),
        }
    } else if index > active {
        Phase::Anticipation {
            progress: safe_ratio((index - active) as f64, spread),
        }
    } else {
        let progress = local_progress(y, budget);
        Phase::Active {
            progress,
            eased: ease_in_out_cubic(progress),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: f64 = 2400.0; // 3 × 800px viewport
    const SECTIONS: usize = 4;

    #[test]
    fn test_top_of_page() {
        assert_eq!(active_index(0.0, BUDGET, SECTIONS), 0);
        assert_eq!(local_progress(0.0, BUDGET), 0.0);
        match resolve(0, 0.0, BUDGET, SECTIONS, 2.0) {
            Phase::Active { progress, eased } => {
                assert_eq!(progress, 0.0);
                assert_eq!(eased, 0.0);
            }
            other => panic!("expected active, got {:?}", other),
        }
        for i in 1..SECTIONS {
            assert!(matches!(
                resolve(i, 0.0, BUDGET, SECTIONS, 2.0),
                Phase::Anticipation { .. }
            ));
        }
    }

    #[test]
    fn test_section_boundary_hand_off() {
        // y = 1×B: section 1 becomes active at local progress 0,
        // section 0 starts exiting.
        match resolve(1, BUDGET, BUDGET, SECTIONS, 2.0) {
            Phase::Active { progress, .. } => assert_eq!(progress, 0.0),
            other => panic!("expected active, got {:?}", other),
        }
        match resolve(0, BUDGET, BUDGET, SECTIONS, 2.0) {
            Phase::Exit { progress } => assert!((progress - 0.5).abs() < 1e-9),
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_completes_over_spread() {
        // Two sections past: fully exited.
        match resolve(0, 2.0 * BUDGET, BUDGET, SECTIONS, 2.0) {
            Phase::Exit { progress } => assert_eq!(progress, 1.0),
            other => panic!("expected exit, got {:?}", other),
        }
    }

    #[test]
    fn test_exactly_one_active_section() {
        for step in 0..96 {
            let y = step as f64 * 100.0;
            let active = (0..SECTIONS)
                .filter(|&i| matches!(resolve(i, y, BUDGET, SECTIONS, 2.0), Phase::Active { .. }))
                .count();
            assert_eq!(active, 1, "at y={}", y);
        }
    }

    #[test]
    fn test_progress_always_in_unit_range() {
        for step in 0..200 {
            let y = step as f64 * 97.0;
            for i in 0..SECTIONS {
                let p = match resolve(i, y, BUDGET, SECTIONS, 2.0) {
                    Phase::Anticipation { progress } => progress,
                    Phase::Active { progress, eased } => progress.max(eased),
                    Phase::Exit { progress } => progress,
                };
                assert!((0.0..=1.0).contains(&p), "at y={} section {}", y, i);
                assert!(!p.is_nan());
            }
        }
    }

    #[test]
    fn test_active_index_clamped_to_track() {
        assert_eq!(active_index(4.0 * BUDGET, BUDGET, SECTIONS), 3);
        assert_eq!(active_index(40.0 * BUDGET, BUDGET, SECTIONS), 3);
    }

    #[test]
    fn test_phase_serializes_with_tag() {
        let json = serde_json::to_value(resolve(0, 0.0, BUDGET, SECTIONS, 2.0)).unwrap();
        assert_eq!(json["phase"], "active");
        assert_eq!(json["progress"], 0.0);
        assert_eq!(json["eased"], 0.0);
    }

    #[test]
    fn test_zero_budget_degrades_to_rest() {
        assert_eq!(active_index(5000.0, 0.0, SECTIONS), 0);
        assert_eq!(local_progress(5000.0, 0.0), 0.0);
        assert!(matches!(
            resolve(0, 5000.0, 0.0, SECTIONS, 2.0),
            Phase::Active { progress: p, .. } if p == 0.0
        ));
    }
}
