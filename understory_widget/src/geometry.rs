// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry and hit testing.
//!
//! ## Containment
//!
//! Bounds are half-open: a point is inside `[x0, x1) × [y0, y1)`.
//! Two widgets sharing an edge are never both hit by a point on that edge.
//!
//! ## Top widget resolution
//!
//! [`resolve_top_widget`] ranks candidates by z-order, higher first.
//! Equal z-order ties go to the most recently registered candidate, which keeps the result
//! independent of iteration order.

use kurbo::{Point, Rect};

use crate::error::{UiError, UiResult};
use crate::types::WidgetId;

/// Build bounds from an origin and a size without normalizing.
///
/// Unlike [`Rect::from_origin_size`], a negative size is preserved so that
/// [`validate_bounds`] can reject it.
pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, x + w, y + h)
}

/// Returns true if `pt` lies inside `rect` using half-open bounds.
///
/// Non-finite coordinates are never inside.
#[inline]
pub fn contains(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x < rect.x1 && pt.y >= rect.y0 && pt.y < rect.y1
}

/// Check that `rect` has finite coordinates and a non-negative size.
pub fn validate_bounds(id: WidgetId, rect: Rect) -> UiResult<()> {
    let (width, height) = (rect.x1 - rect.x0, rect.y1 - rect.y0);
    let finite = rect.x0.is_finite() && rect.y0.is_finite() && width.is_finite() && height.is_finite();
    if !finite || width < 0.0 || height < 0.0 {
        return Err(UiError::InvalidBounds { id, width, height });
    }
    Ok(())
}

/// One widget as seen by hit testing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitCandidate {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounds in root coordinates.
    pub bounds: Rect,
    /// Stacking order; higher is drawn later and hit first.
    pub z_order: i32,
    /// Registration sequence; higher was registered more recently.
    pub seq: u64,
    /// Whether the widget may be hit at all (visible, enabled, and interactive).
    pub pickable: bool,
}

/// Return the topmost pickable candidate whose bounds contain `pt`.
///
/// Ranking is by [`HitCandidate::z_order`], then by [`HitCandidate::seq`] (newer wins).
/// Returns `None` when nothing qualifies, including for out-of-surface or NaN points.
pub fn resolve_top_widget<I>(candidates: I, pt: Point) -> Option<WidgetId>
where
    I: IntoIterator<Item = HitCandidate>,
{
    let mut best: Option<HitCandidate> = None;
    for c in candidates {
        if !c.pickable || !contains(c.bounds, pt) {
            continue;
        }
        match best {
            None => best = Some(c),
            Some(b) => {
                if c.z_order > b.z_order || (c.z_order == b.z_order && c.seq > b.seq) {
                    best = Some(c);
                }
            }
        }
    }
    best.map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cand(id: u32, bounds: Rect, z_order: i32, seq: u64) -> HitCandidate {
        HitCandidate {
            id: WidgetId(id),
            bounds,
            z_order,
            seq,
            pickable: true,
        }
    }

    #[test]
    fn half_open_edges() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert!(contains(r, Point::new(0.0, 0.0)));
        assert!(contains(r, Point::new(9.999, 9.999)));
        assert!(!contains(r, Point::new(10.0, 5.0)));
        assert!(!contains(r, Point::new(5.0, 10.0)));
        assert!(!contains(r, Point::new(f64::NAN, 5.0)));
    }

    #[test]
    fn shared_edge_hits_exactly_one() {
        let left = cand(1, rect(0.0, 0.0, 10.0, 10.0), 0, 0);
        let right = cand(2, rect(10.0, 0.0, 10.0, 10.0), 0, 1);
        let hit = resolve_top_widget(vec![left, right], Point::new(10.0, 5.0));
        assert_eq!(hit, Some(WidgetId(2)));
        let hit = resolve_top_widget(vec![left, right], Point::new(9.5, 5.0));
        assert_eq!(hit, Some(WidgetId(1)));
    }

    #[test]
    fn higher_z_wins_regardless_of_order() {
        let a = cand(1, rect(0.0, 0.0, 50.0, 50.0), 2, 0);
        let b = cand(2, rect(0.0, 0.0, 50.0, 50.0), 1, 1);
        assert_eq!(
            resolve_top_widget(vec![a, b], Point::new(5.0, 5.0)),
            Some(WidgetId(1))
        );
        assert_eq!(
            resolve_top_widget(vec![b, a], Point::new(5.0, 5.0)),
            Some(WidgetId(1))
        );
    }

    #[test]
    fn equal_z_newer_registration_wins() {
        let old = cand(7, rect(0.0, 0.0, 50.0, 50.0), 3, 10);
        let new = cand(3, rect(0.0, 0.0, 50.0, 50.0), 3, 11);
        assert_eq!(
            resolve_top_widget(vec![new, old], Point::new(1.0, 1.0)),
            Some(WidgetId(3)),
            "most recently registered should win on equal z"
        );
    }

    #[test]
    fn unpickable_and_outside_are_skipped() {
        let mut hidden = cand(1, rect(0.0, 0.0, 50.0, 50.0), 5, 0);
        hidden.pickable = false;
        let under = cand(2, rect(0.0, 0.0, 50.0, 50.0), 0, 1);
        assert_eq!(
            resolve_top_widget(vec![hidden, under], Point::new(1.0, 1.0)),
            Some(WidgetId(2))
        );
        assert_eq!(
            resolve_top_widget(vec![hidden, under], Point::new(-100.0, 1e9)),
            None
        );
    }

    #[test]
    fn bounds_validation() {
        let id = WidgetId(1);
        assert!(validate_bounds(id, rect(0.0, 0.0, 0.0, 0.0)).is_ok());
        assert!(validate_bounds(id, rect(-5.0, -5.0, 10.0, 10.0)).is_ok());
        assert_eq!(
            validate_bounds(id, rect(0.0, 0.0, -1.0, 4.0)),
            Err(UiError::InvalidBounds {
                id,
                width: -1.0,
                height: 4.0
            })
        );
        assert!(validate_bounds(id, rect(0.0, 0.0, f64::INFINITY, 4.0)).is_err());
    }
}
