// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in coordinate computation.
//!
//! ## Pipeline
//!
//! 1) Place the floating rect against the reference for the current [`Placement`].
//! 2) Run the [`Middleware`] in order. Each step may move the coordinates, record data, or
//!    ask for a different placement. A placement reset recomputes the base coordinates and
//!    restarts the chain; middleware data persists across resets so steps like
//!    [`Middleware::Flip`] remember what they already tried. At most [`MAX_RESETS`] resets
//!    are honored.
//!
//! All rects are in one coordinate space (typically world or viewport space). The floating
//! rect only contributes its size.
//!
//! ```
//! use kurbo::Rect;
//! use understory_floating::compute::compute_position;
//! use understory_floating::types::{Middleware, OffsetOptions, Placement, PositionOptions};
//!
//! let reference = Rect::new(100.0, 100.0, 140.0, 120.0);
//! let floating = Rect::new(0.0, 0.0, 60.0, 30.0);
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let options = PositionOptions {
//!     placement: Placement::Bottom,
//!     middleware: vec![Middleware::Offset(OffsetOptions::main(4.0))],
//!     ..Default::default()
//! };
//! let data = compute_position(reference, floating, viewport, &options);
//! assert_eq!((data.x, data.y), (90.0, 124.0));
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{
    Alignment, ArrowData, ArrowOptions, AutoPlacementData, AutoPlacementOptions, Axis,
    FlipOptions, FloatingData, Middleware, MiddlewareData, OffsetData, OffsetOptions,
    Overflow, Placement, PositionOptions, ShiftOptions, Side,
};

/// Upper bound on placement resets within one computation.
pub const MAX_RESETS: usize = 50;

/// Seam for the coordinate computation.
///
/// Hosts that already have a positioning engine implement this; everyone else can use
/// [`DefaultEngine`].
pub trait PositionEngine {
    /// Compute coordinates for `floating` against `reference`, constrained by `boundary`.
    fn compute_position(
        &self,
        reference: Rect,
        floating: Rect,
        boundary: Rect,
        options: &PositionOptions,
    ) -> FloatingData;
}

/// Engine backed by [`compute_position`].
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultEngine;

impl PositionEngine for DefaultEngine {
    fn compute_position(
        &self,
        reference: Rect,
        floating: Rect,
        boundary: Rect,
        options: &PositionOptions,
    ) -> FloatingData {
        compute_position(reference, floating, boundary, options)
    }
}

/// Inputs visible to a middleware step.
#[derive(Copy, Clone, Debug)]
struct State {
    coords: Point,
    placement: Placement,
    initial: Placement,
    reference: Rect,
    floating: Size,
    boundary: Rect,
}

impl State {
    fn overflow(&self, padding: f64) -> Overflow {
        detect_overflow(Rect::from_origin_size(self.coords, self.floating), self.boundary, padding)
    }
}

/// Result of one middleware step.
struct Step {
    coords: Point,
    reset: Option<Placement>,
}

/// Compute coordinates for `floating` against `reference`.
pub fn compute_position(
    reference: Rect,
    floating: Rect,
    boundary: Rect,
    options: &PositionOptions,
) -> FloatingData {
    let size = floating.size();
    let mut placement = options.placement;
    let mut data = MiddlewareData::default();
    let mut resets = 0;
    let mut coords;

    'chain: loop {
        coords = coords_from_placement(reference, size, placement);
        for mw in &options.middleware {
            let state = State {
                coords,
                placement,
                initial: options.placement,
                reference,
                floating: size,
                boundary,
            };
            let step = apply(mw, &state, &mut data);
            coords = step.coords;
            if let Some(next) = step.reset
                && resets < MAX_RESETS
            {
                resets += 1;
                placement = next;
                continue 'chain;
            }
        }
        break;
    }

    FloatingData {
        x: coords.x,
        y: coords.y,
        strategy: options.strategy,
        placement,
        middleware_data: data,
    }
}

/// Base coordinates of a floating element of `floating` size at `placement`.
pub fn coords_from_placement(reference: Rect, floating: Size, placement: Placement) -> Point {
    let center_x = reference.x0 + reference.width() / 2.0 - floating.width / 2.0;
    let center_y = reference.y0 + reference.height() / 2.0 - floating.height / 2.0;
    let mut p = match placement.side() {
        Side::Top => Point::new(center_x, reference.y0 - floating.height),
        Side::Bottom => Point::new(center_x, reference.y1),
        Side::Right => Point::new(reference.x1, center_y),
        Side::Left => Point::new(reference.x0 - floating.width, center_y),
    };
    let common_align = match placement.alignment_axis() {
        Axis::X => reference.width() / 2.0 - floating.width / 2.0,
        Axis::Y => reference.height() / 2.0 - floating.height / 2.0,
    };
    let shift = match placement.alignment() {
        Some(Alignment::Start) => -common_align,
        Some(Alignment::End) => common_align,
        None => 0.0,
    };
    let axis = placement.alignment_axis();
    let aligned = axis_of(p, axis) + shift;
    set_axis(&mut p, axis, aligned);
    p
}

/// Per-edge overflow of `rect` against `boundary` inset by `padding`.
pub fn detect_overflow(rect: Rect, boundary: Rect, padding: f64) -> Overflow {
    Overflow {
        top: boundary.y0 + padding - rect.y0,
        right: rect.x1 - (boundary.x1 - padding),
        bottom: rect.y1 - (boundary.y1 - padding),
        left: boundary.x0 + padding - rect.x0,
    }
}

fn axis_of(p: Point, axis: Axis) -> f64 {
    match axis {
        Axis::X => p.x,
        Axis::Y => p.y,
    }
}

fn set_axis(p: &mut Point, axis: Axis, value: f64) {
    match axis {
        Axis::X => p.x = value,
        Axis::Y => p.y = value,
    }
}

fn len_of(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::X => size.width,
        Axis::Y => size.height,
    }
}

// Order matters when min > max: the lower bound wins, keeping the leading edge visible.
fn clamp(min: f64, value: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

fn apply(mw: &Middleware, state: &State, data: &mut MiddlewareData) -> Step {
    match mw {
        Middleware::Offset(o) => offset(o, state, data),
        Middleware::Shift(o) => shift(o, state, data),
        Middleware::Flip(o) => flip(o, state, data),
        Middleware::AutoPlacement(o) => auto_placement(o, state, data),
        Middleware::Arrow(o) => arrow(o, state, data),
    }
}

fn offset(o: &OffsetOptions, state: &State, data: &mut MiddlewareData) -> Step {
    let side = state.placement.side();
    let main_multi = match side {
        Side::Top | Side::Left => -1.0,
        Side::Bottom | Side::Right => 1.0,
    };
    let cross = match (state.placement.alignment(), o.alignment_axis) {
        (Some(Alignment::End), Some(a)) => -a,
        (Some(Alignment::Start), Some(a)) => a,
        _ => o.cross_axis,
    };
    let delta = match side.axis() {
        Axis::Y => Vec2::new(cross, o.main_axis * main_multi),
        Axis::X => Vec2::new(o.main_axis * main_multi, cross),
    };
    data.offset = Some(OffsetData {
        delta,
        placement: state.placement,
    });
    Step {
        coords: state.coords + delta,
        reset: None,
    }
}

fn shift(o: &ShiftOptions, state: &State, data: &mut MiddlewareData) -> Step {
    let overflow = state.overflow(o.padding);
    let mut coords = state.coords;
    let clamp_axis = |coords: &mut Point, axis: Axis| {
        let (min_side, max_side) = match axis {
            Axis::X => (Side::Left, Side::Right),
            Axis::Y => (Side::Top, Side::Bottom),
        };
        let v = axis_of(*coords, axis);
        let min = v + overflow.on(min_side);
        let max = v - overflow.on(max_side);
        set_axis(coords, axis, clamp(min, v, max));
    };
    if o.main_axis {
        clamp_axis(&mut coords, state.placement.alignment_axis());
    }
    if o.cross_axis {
        clamp_axis(&mut coords, state.placement.side().axis());
    }
    data.shift = Some(coords - state.coords);
    Step {
        coords,
        reset: None,
    }
}

fn flip(o: &FlipOptions, state: &State, data: &mut MiddlewareData) -> Step {
    let mut candidates: Vec<Placement> = Vec::with_capacity(1 + o.fallback_placements.len());
    candidates.push(state.initial);
    if o.fallback_placements.is_empty() {
        candidates.push(state.initial.opposite());
    } else {
        candidates.extend(o.fallback_placements.iter().copied());
    }

    let overflow = state.overflow(o.padding);
    let mut flip_data = data.flip.take().unwrap_or_default();
    flip_data.overflows.push((state.placement, overflow));

    let mut reset = None;
    if overflow.on(state.placement.side()) > 0.0 {
        let next_index = flip_data.index + 1;
        if let Some(&next) = candidates.get(next_index) {
            flip_data.index = next_index;
            reset = Some(next);
        } else {
            // Everything overflows: settle on the first fit, else the least total overflow.
            let best = flip_data
                .overflows
                .iter()
                .find(|(p, over)| over.on(p.side()) <= 0.0)
                .or_else(|| {
                    flip_data
                        .overflows
                        .iter()
                        .min_by(|a, b| a.1.total().total_cmp(&b.1.total()))
                })
                .map(|(p, _)| *p);
            if let Some(best) = best
                && best != state.placement
            {
                reset = Some(best);
            }
        }
    }
    data.flip = Some(flip_data);
    Step {
        coords: state.coords,
        reset,
    }
}

fn auto_placement(o: &AutoPlacementOptions, state: &State, data: &mut MiddlewareData) -> Step {
    let allowed: &[Placement] = if o.allowed_placements.is_empty() {
        &Placement::ALL
    } else {
        &o.allowed_placements
    };
    let overflows: Vec<(Placement, f64)> = allowed
        .iter()
        .copied()
        .filter(|p| o.alignment.is_none() || p.alignment() == o.alignment)
        .map(|p| {
            let at = coords_from_placement(state.reference, state.floating, p);
            let rect = Rect::from_origin_size(at, state.floating);
            (p, detect_overflow(rect, state.boundary, o.padding).total())
        })
        .collect();

    let chosen = overflows
        .iter()
        .find(|(_, total)| *total <= 0.0)
        .or_else(|| overflows.iter().min_by(|a, b| a.1.total_cmp(&b.1)))
        .map(|(p, _)| *p);

    let Some(chosen) = chosen else {
        return Step {
            coords: state.coords,
            reset: None,
        };
    };
    data.auto_placement = Some(AutoPlacementData {
        placement: chosen,
        overflows,
    });
    Step {
        coords: state.coords,
        reset: (chosen != state.placement).then_some(chosen),
    }
}

fn arrow(o: &ArrowOptions, state: &State, data: &mut MiddlewareData) -> Step {
    let axis = state.placement.alignment_axis();
    let (ref_start, ref_len) = match axis {
        Axis::X => (state.reference.x0, state.reference.width()),
        Axis::Y => (state.reference.y0, state.reference.height()),
    };
    let arrow_len = len_of(o.size, axis);
    let client = len_of(state.floating, axis);
    let coord = axis_of(state.coords, axis);

    let end_diff = ref_len + ref_start - coord - client;
    let start_diff = coord - ref_start;
    let center_to_reference = end_diff / 2.0 - start_diff / 2.0;

    let largest_padding = client / 2.0 - arrow_len / 2.0 - 1.0;
    let padding = o.padding.min(largest_padding);
    let min = padding;
    let max = client - arrow_len - padding;
    let center = client / 2.0 - arrow_len / 2.0 + center_to_reference;
    let offset = clamp(min, center, max);

    data.arrow = Some(ArrowData {
        x: (axis == Axis::X).then_some(offset),
        y: (axis == Axis::Y).then_some(offset),
        center_offset: center - offset,
    });
    Step {
        coords: state.coords,
        reset: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);

    fn floating(w: f64, h: f64) -> Rect {
        Rect::new(0.0, 0.0, w, h)
    }

    fn options(placement: Placement, middleware: Vec<Middleware>) -> PositionOptions {
        PositionOptions {
            placement,
            middleware,
            ..Default::default()
        }
    }

    #[test]
    fn base_coords_for_every_side_and_alignment() {
        let r = Rect::new(100.0, 100.0, 150.0, 120.0);
        let s = Size::new(20.0, 10.0);
        let at = |p| coords_from_placement(r, s, p);
        assert_eq!(at(Placement::Top), Point::new(115.0, 90.0));
        assert_eq!(at(Placement::TopStart), Point::new(100.0, 90.0));
        assert_eq!(at(Placement::TopEnd), Point::new(130.0, 90.0));
        assert_eq!(at(Placement::Bottom), Point::new(115.0, 120.0));
        assert_eq!(at(Placement::Right), Point::new(150.0, 105.0));
        assert_eq!(at(Placement::RightStart), Point::new(150.0, 100.0));
        assert_eq!(at(Placement::LeftEnd), Point::new(80.0, 110.0));
    }

    #[test]
    fn offset_moves_away_and_skids() {
        let r = Rect::new(100.0, 100.0, 150.0, 120.0);
        let top = compute_position(
            r,
            floating(20.0, 10.0),
            VIEWPORT,
            &options(
                Placement::Top,
                vec![Middleware::Offset(OffsetOptions {
                    main_axis: 5.0,
                    cross_axis: 3.0,
                    alignment_axis: None,
                })],
            ),
        );
        assert_eq!((top.x, top.y), (118.0, 85.0));

        let end = compute_position(
            r,
            floating(20.0, 10.0),
            VIEWPORT,
            &options(
                Placement::RightEnd,
                vec![Middleware::Offset(OffsetOptions {
                    main_axis: 2.0,
                    cross_axis: 9.0,
                    alignment_axis: Some(4.0),
                })],
            ),
        );
        assert_eq!((end.x, end.y), (152.0, 106.0));
        assert_eq!(
            end.middleware_data.offset.map(|o| o.delta),
            Some(Vec2::new(2.0, -4.0))
        );
    }

    #[test]
    fn flip_moves_to_opposite_side() {
        // Reference hugs the bottom edge; bottom placement overflows.
        let r = Rect::new(100.0, 280.0, 140.0, 295.0);
        let data = compute_position(
            r,
            floating(40.0, 30.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![
                    Middleware::Offset(OffsetOptions::main(4.0)),
                    Middleware::Flip(FlipOptions::default()),
                ],
            ),
        );
        assert_eq!(data.placement, Placement::Top);
        assert_eq!(data.y, 280.0 - 30.0 - 4.0);
        let flip = data.middleware_data.flip.unwrap();
        assert_eq!(flip.index, 1);
    }

    #[test]
    fn flip_keeps_preferred_when_it_fits() {
        let r = Rect::new(100.0, 100.0, 140.0, 120.0);
        let data = compute_position(
            r,
            floating(40.0, 30.0),
            VIEWPORT,
            &options(Placement::Bottom, vec![Middleware::Flip(FlipOptions::default())]),
        );
        assert_eq!(data.placement, Placement::Bottom);
        assert_eq!(data.y, 120.0);
    }

    #[test]
    fn exhausted_flip_ranks_by_total_overflow() {
        // Bottom barely spills past the bottom edge but is far too wide; Right spills
        // further on its own side yet much less overall.
        let r = Rect::new(0.0, 280.0, 20.0, 295.0);
        let data = compute_position(
            r,
            floating(400.0, 10.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![Middleware::Flip(FlipOptions {
                    padding: 0.0,
                    fallback_placements: vec![Placement::Right],
                })],
            ),
        );
        assert_eq!(data.placement, Placement::Right);
        let flip = data.middleware_data.flip.unwrap();
        let totals: Vec<(Placement, f64)> =
            flip.overflows.iter().map(|(p, o)| (*p, o.total())).collect();
        assert_eq!(totals, [(Placement::Bottom, 195.0), (Placement::Right, 20.0)]);
    }

    #[test]
    fn reset_ping_pong_stops_at_the_cap() {
        // Auto placement always prefers Top from its unshifted base coordinates, while
        // flip (seeing the offset) keeps sending it back to Bottom.
        let r = Rect::new(100.0, 130.0, 140.0, 150.0);
        let o = options(
            Placement::Bottom,
            vec![
                Middleware::Offset(OffsetOptions::main(50.0)),
                Middleware::Flip(FlipOptions::default()),
                Middleware::AutoPlacement(AutoPlacementOptions {
                    allowed_placements: vec![Placement::Top, Placement::Bottom],
                    ..Default::default()
                }),
            ],
        );
        let data = compute_position(r, floating(40.0, 100.0), VIEWPORT, &o);
        assert_eq!(data.placement, Placement::Top);
        assert_eq!((data.x, data.y), (100.0, -20.0));
        // One flip evaluation per pass: the initial pass plus every honored reset.
        let flip = data.middleware_data.flip.as_ref().unwrap();
        assert_eq!(flip.overflows.len(), MAX_RESETS + 1);
        assert_eq!(compute_position(r, floating(40.0, 100.0), VIEWPORT, &o), data);
    }

    #[test]
    fn flip_settles_on_least_overflow() {
        // Too tall for either side; the top has less overflow.
        let r = Rect::new(100.0, 200.0, 140.0, 220.0);
        let data = compute_position(
            r,
            floating(40.0, 250.0),
            VIEWPORT,
            &options(Placement::Bottom, vec![Middleware::Flip(FlipOptions::default())]),
        );
        assert_eq!(data.placement, Placement::Top);
    }

    #[test]
    fn flip_walks_fallbacks_in_order() {
        // Bottom and top both overflow; the right fits.
        let r = Rect::new(10.0, 10.0, 30.0, 290.0);
        let data = compute_position(
            r,
            floating(50.0, 50.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![Middleware::Flip(FlipOptions {
                    padding: 0.0,
                    fallback_placements: vec![Placement::Top, Placement::Right],
                })],
            ),
        );
        assert_eq!(data.placement, Placement::Right);
        assert_eq!(data.x, 30.0);
    }

    #[test]
    fn shift_clamps_along_alignment_axis() {
        // Reference near the left edge; a wide floating element would start at x < 0.
        let r = Rect::new(5.0, 100.0, 25.0, 120.0);
        let data = compute_position(
            r,
            floating(100.0, 20.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![Middleware::Shift(ShiftOptions {
                    padding: 4.0,
                    ..Default::default()
                })],
            ),
        );
        assert_eq!(data.x, 4.0);
        assert_eq!(data.y, 120.0);
        assert_eq!(data.middleware_data.shift, Some(Vec2::new(39.0, 0.0)));
    }

    #[test]
    fn shift_cross_axis_is_opt_in() {
        let r = Rect::new(100.0, 290.0, 120.0, 300.0);
        let main_only = compute_position(
            r,
            floating(20.0, 20.0),
            VIEWPORT,
            &options(Placement::Bottom, vec![Middleware::Shift(ShiftOptions::default())]),
        );
        assert_eq!(main_only.y, 300.0);
        let both = compute_position(
            r,
            floating(20.0, 20.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![Middleware::Shift(ShiftOptions {
                    cross_axis: true,
                    ..Default::default()
                })],
            ),
        );
        assert_eq!(both.y, 280.0);
    }

    #[test]
    fn auto_placement_picks_first_fitting() {
        // Reference in the top-left corner: top and left overflow.
        let r = Rect::new(0.0, 0.0, 20.0, 20.0);
        let data = compute_position(
            r,
            floating(30.0, 30.0),
            VIEWPORT,
            &options(
                Placement::Top,
                vec![Middleware::AutoPlacement(AutoPlacementOptions {
                    allowed_placements: vec![
                        Placement::Top,
                        Placement::Left,
                        Placement::BottomStart,
                        Placement::Right,
                    ],
                    ..Default::default()
                })],
            ),
        );
        assert_eq!(data.placement, Placement::BottomStart);
        let ap = data.middleware_data.auto_placement.unwrap();
        assert_eq!(ap.placement, Placement::BottomStart);
        assert_eq!(ap.overflows.len(), 4);
    }

    #[test]
    fn auto_placement_respects_alignment_filter() {
        let r = Rect::new(180.0, 140.0, 220.0, 160.0);
        let data = compute_position(
            r,
            floating(30.0, 30.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![Middleware::AutoPlacement(AutoPlacementOptions {
                    alignment: Some(Alignment::End),
                    ..Default::default()
                })],
            ),
        );
        assert_eq!(data.placement.alignment(), Some(Alignment::End));
    }

    #[test]
    fn arrow_centers_on_reference() {
        let r = Rect::new(100.0, 100.0, 150.0, 120.0);
        let data = compute_position(
            r,
            floating(200.0, 40.0),
            Rect::new(-1000.0, -1000.0, 1000.0, 1000.0),
            &options(
                Placement::Bottom,
                vec![Middleware::Arrow(ArrowOptions {
                    size: Size::new(10.0, 5.0),
                    padding: 0.0,
                })],
            ),
        );
        let arrow = data.middleware_data.arrow.unwrap();
        assert_eq!(arrow.x, Some(95.0));
        assert_eq!(arrow.y, None);
        assert_eq!(arrow.center_offset, 0.0);
    }

    #[test]
    fn arrow_clamps_after_shift() {
        // Shift pushes the floating element right; the arrow stays pointed at the reference
        // but cannot leave the floating element's padded edge.
        let r = Rect::new(0.0, 100.0, 10.0, 120.0);
        let data = compute_position(
            r,
            floating(100.0, 20.0),
            VIEWPORT,
            &options(
                Placement::Bottom,
                vec![
                    Middleware::Shift(ShiftOptions {
                        padding: 20.0,
                        ..Default::default()
                    }),
                    Middleware::Arrow(ArrowOptions {
                        size: Size::new(8.0, 4.0),
                        padding: 6.0,
                    }),
                ],
            ),
        );
        assert_eq!(data.x, 20.0);
        let arrow = data.middleware_data.arrow.unwrap();
        assert_eq!(arrow.x, Some(6.0));
        // Unclamped center would be at 5 - 20 - 4 = -19.
        assert_eq!(arrow.center_offset, -25.0);
    }

    #[test]
    fn strategy_is_carried_through() {
        let data = compute_position(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            floating(5.0, 5.0),
            VIEWPORT,
            &PositionOptions {
                strategy: crate::types::Strategy::Fixed,
                ..Default::default()
            },
        );
        assert_eq!(data.strategy, crate::types::Strategy::Fixed);
        assert_eq!(data.placement, Placement::Bottom);
    }

    #[test]
    fn default_engine_matches_function() {
        let r = Rect::new(50.0, 50.0, 70.0, 60.0);
        let o = options(Placement::LeftStart, vec![Middleware::Offset(OffsetOptions::main(2.0))]);
        assert_eq!(
            DefaultEngine.compute_position(r, floating(10.0, 10.0), VIEWPORT, &o),
            compute_position(r, floating(10.0, 10.0), VIEWPORT, &o)
        );
    }
}
