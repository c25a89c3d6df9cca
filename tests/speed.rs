// Tests for the speed-selection policy: which scroll rate applies for a
// given set of viewport-relative region bounds. Native-friendly, no
// wasm/browser APIs.

use ourstory::{Band, RegionBounds, SPEED_FAST, SPEED_NORMAL, SPEED_SLOW, compute_speed};

const VIEWPORT_H: f64 = 1000.0;

fn region(focus: (f64, f64), detail: (f64, f64)) -> RegionBounds {
    RegionBounds {
        focus: Band {
            top: focus.0,
            bottom: focus.1,
        },
        detail: Band {
            top: detail.0,
            bottom: detail.1,
        },
    }
}

// Focus spanning 10%..60% of the viewport is prominent => FAST.
#[test]
fn prominent_focus_selects_fast() {
    let regions = vec![region((100.0, 600.0), (600.0, 800.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_FAST);
}

// Detail spanning 30%..70% with no prominent focus => SLOW.
#[test]
fn readable_detail_selects_slow() {
    // Focus top at 55% fails the prominence test (needs top above 50%).
    let regions = vec![region((550.0, 1200.0), (300.0, 700.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_SLOW);
}

// Neither band matched anywhere => NORMAL.
#[test]
fn no_match_selects_normal() {
    let regions = vec![region((1200.0, 1600.0), (900.0, 1300.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_NORMAL);
}

#[test]
fn empty_region_set_selects_normal() {
    assert_eq!(compute_speed(&[], VIEWPORT_H), SPEED_NORMAL);
}

// Within one region the focus test runs before the detail test.
#[test]
fn focus_wins_over_detail_within_a_region() {
    let regions = vec![region((100.0, 600.0), (300.0, 700.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_FAST);
}

// Regions are scanned in document order: an earlier region's readable
// caption decides before a later region's prominent photo is even looked at.
#[test]
fn earlier_region_decides_first() {
    let regions = vec![
        region((850.0, 1400.0), (300.0, 700.0)), // caption readable
        region((100.0, 600.0), (700.0, 900.0)),  // photo prominent
    ];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_SLOW);
}

// Thresholds are strict: a focus top exactly on the 50% line is not
// prominent, and a detail bottom exactly on the 25% line is not readable.
#[test]
fn band_edges_are_exclusive() {
    let regions = vec![region((500.0, 900.0), (100.0, 250.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_NORMAL);

    // Nudge the focus top just above the line and it turns FAST.
    let regions = vec![region((499.9, 900.0), (100.0, 250.0))];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_FAST);
}

// A region far above the viewport (negative coordinates, already scrolled
// past) matches nothing; the pass falls through to the next region.
#[test]
fn scrolled_past_region_is_skipped() {
    let regions = vec![
        region((-900.0, -400.0), (-400.0, -200.0)),
        region((100.0, 600.0), (600.0, 800.0)),
    ];
    assert_eq!(compute_speed(&regions, VIEWPORT_H), SPEED_FAST);
}
