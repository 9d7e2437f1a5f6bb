// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: placements, strategies, middleware options, and computed data.

use alloc::vec::Vec;
use kurbo::{Size, Vec2};

/// Axis of a 2D layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The perpendicular axis.
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Side of the reference the floating element is placed on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the reference.
    Top,
    /// Right of the reference.
    Right,
    /// Below the reference.
    Bottom,
    /// Left of the reference.
    Left,
}

impl Side {
    /// The side across the reference.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Axis the floating element moves along when it moves away from the reference.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }
}

/// Alignment of the floating element along the reference edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Aligned with the reference's leading edge.
    Start,
    /// Aligned with the reference's trailing edge.
    End,
}

/// Where to put the floating element relative to the reference.
///
/// A side, optionally aligned to the start or end of the reference edge; unaligned
/// placements are centered.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Placement {
    /// Above, centered.
    Top,
    /// Above, start-aligned.
    TopStart,
    /// Above, end-aligned.
    TopEnd,
    /// Right, centered.
    Right,
    /// Right, start-aligned.
    RightStart,
    /// Right, end-aligned.
    RightEnd,
    /// Below, centered.
    #[default]
    Bottom,
    /// Below, start-aligned.
    BottomStart,
    /// Below, end-aligned.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, start-aligned.
    LeftStart,
    /// Left, end-aligned.
    LeftEnd,
}

impl Placement {
    /// Every placement, side-major.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopStart,
        Self::TopEnd,
        Self::Right,
        Self::RightStart,
        Self::RightEnd,
        Self::Bottom,
        Self::BottomStart,
        Self::BottomEnd,
        Self::Left,
        Self::LeftStart,
        Self::LeftEnd,
    ];

    /// Build a placement from its parts.
    pub const fn from_parts(side: Side, alignment: Option<Alignment>) -> Self {
        match (side, alignment) {
            (Side::Top, None) => Self::Top,
            (Side::Top, Some(Alignment::Start)) => Self::TopStart,
            (Side::Top, Some(Alignment::End)) => Self::TopEnd,
            (Side::Right, None) => Self::Right,
            (Side::Right, Some(Alignment::Start)) => Self::RightStart,
            (Side::Right, Some(Alignment::End)) => Self::RightEnd,
            (Side::Bottom, None) => Self::Bottom,
            (Side::Bottom, Some(Alignment::Start)) => Self::BottomStart,
            (Side::Bottom, Some(Alignment::End)) => Self::BottomEnd,
            (Side::Left, None) => Self::Left,
            (Side::Left, Some(Alignment::Start)) => Self::LeftStart,
            (Side::Left, Some(Alignment::End)) => Self::LeftEnd,
        }
    }

    /// Side component.
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
            Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
        }
    }

    /// Alignment component; `None` when centered.
    pub const fn alignment(self) -> Option<Alignment> {
        match self {
            Self::TopStart | Self::RightStart | Self::BottomStart | Self::LeftStart => {
                Some(Alignment::Start)
            }
            Self::TopEnd | Self::RightEnd | Self::BottomEnd | Self::LeftEnd => Some(Alignment::End),
            _ => None,
        }
    }

    /// Same alignment on the opposite side.
    pub const fn opposite(self) -> Self {
        Self::from_parts(self.side().opposite(), self.alignment())
    }

    /// Axis along which the alignment applies (perpendicular to the side axis).
    pub const fn alignment_axis(self) -> Axis {
        self.side().axis().other()
    }
}

/// Positioning strategy of the floating element.
///
/// Carried through to [`FloatingData`] so the host can pick its coordinate space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Relative to the offset parent.
    #[default]
    Absolute,
    /// Relative to the viewport.
    Fixed,
}

/// Options for [`Middleware::Offset`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OffsetOptions {
    /// Distance away from the reference along the side axis.
    pub main_axis: f64,
    /// Skid along the alignment axis.
    pub cross_axis: f64,
    /// Overrides `cross_axis` for aligned placements; negated for `End`.
    pub alignment_axis: Option<f64>,
}

impl OffsetOptions {
    /// Offset along the side axis only.
    pub const fn main(distance: f64) -> Self {
        Self {
            main_axis: distance,
            cross_axis: 0.0,
            alignment_axis: None,
        }
    }
}

/// Options for [`Middleware::Shift`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShiftOptions {
    /// Inset of the boundary.
    pub padding: f64,
    /// Clamp along the alignment axis.
    pub main_axis: bool,
    /// Clamp along the side axis too (may overlap the reference).
    pub cross_axis: bool,
}

impl Default for ShiftOptions {
    fn default() -> Self {
        Self {
            padding: 0.0,
            main_axis: true,
            cross_axis: false,
        }
    }
}

/// Options for [`Middleware::Flip`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlipOptions {
    /// Inset of the boundary.
    pub padding: f64,
    /// Placements to try after the initial one; empty means the opposite placement.
    pub fallback_placements: Vec<Placement>,
}

/// Options for [`Middleware::AutoPlacement`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoPlacementOptions {
    /// Inset of the boundary.
    pub padding: f64,
    /// Restrict candidates to this alignment.
    pub alignment: Option<Alignment>,
    /// Candidate placements in preference order; empty means [`Placement::ALL`].
    pub allowed_placements: Vec<Placement>,
}

/// Options for [`Middleware::Arrow`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArrowOptions {
    /// Size of the arrow element.
    pub size: Size,
    /// Minimum distance from the floating element's corners.
    pub padding: f64,
}

/// A step in the positioning pipeline, compared by value.
#[derive(Clone, Debug, PartialEq)]
pub enum Middleware {
    /// Move away from the reference.
    Offset(OffsetOptions),
    /// Keep the floating element inside the boundary along the alignment axis.
    Shift(ShiftOptions),
    /// Switch to a fallback placement when the preferred side overflows.
    Flip(FlipOptions),
    /// Choose the placement with the most room.
    AutoPlacement(AutoPlacementOptions),
    /// Position an arrow pointing at the reference.
    Arrow(ArrowOptions),
}

/// Everything a computation needs besides the element rects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PositionOptions {
    /// Preferred placement.
    pub placement: Placement,
    /// Coordinate space of the result.
    pub strategy: Strategy,
    /// Pipeline, run in order.
    pub middleware: Vec<Middleware>,
}

/// Per-edge overflow of a rect against a boundary; positive values overflow.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Overflow {
    /// Overflow past the top edge.
    pub top: f64,
    /// Overflow past the right edge.
    pub right: f64,
    /// Overflow past the bottom edge.
    pub bottom: f64,
    /// Overflow past the left edge.
    pub left: f64,
}

impl Overflow {
    /// Overflow on `side`.
    pub const fn on(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Sum of positive overflow over all edges.
    pub fn total(&self) -> f64 {
        self.top.max(0.0) + self.right.max(0.0) + self.bottom.max(0.0) + self.left.max(0.0)
    }

    /// Whether the rect fits on every edge.
    pub fn fits(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }
}

/// Output of [`Middleware::Offset`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetData {
    /// Applied delta.
    pub delta: Vec2,
    /// Placement the offset was computed for.
    pub placement: Placement,
}

/// Output of [`Middleware::Flip`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlipData {
    /// Index of the candidate last tried.
    pub index: usize,
    /// Overflow of every candidate tried, in evaluation order.
    pub overflows: Vec<(Placement, Overflow)>,
}

/// Output of [`Middleware::AutoPlacement`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutoPlacementData {
    /// Chosen placement.
    pub placement: Placement,
    /// Total overflow of every candidate.
    pub overflows: Vec<(Placement, f64)>,
}

/// Output of [`Middleware::Arrow`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ArrowData {
    /// Arrow offset within the floating element for vertical placements.
    pub x: Option<f64>,
    /// Arrow offset within the floating element for horizontal placements.
    pub y: Option<f64>,
    /// Distance the arrow was pushed away from the reference center by clamping.
    pub center_offset: f64,
}

/// Per-middleware results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MiddlewareData {
    /// Set by [`Middleware::Offset`].
    pub offset: Option<OffsetData>,
    /// Delta applied by [`Middleware::Shift`].
    pub shift: Option<Vec2>,
    /// Set by [`Middleware::Flip`].
    pub flip: Option<FlipData>,
    /// Set by [`Middleware::AutoPlacement`].
    pub auto_placement: Option<AutoPlacementData>,
    /// Set by [`Middleware::Arrow`].
    pub arrow: Option<ArrowData>,
}

/// Computed position of a floating element.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingData {
    /// Left edge of the floating element.
    pub x: f64,
    /// Top edge of the floating element.
    pub y: f64,
    /// Strategy the coordinates are expressed in.
    pub strategy: Strategy,
    /// Final placement after middleware.
    pub placement: Placement,
    /// Per-middleware results.
    pub middleware_data: MiddlewareData,
}

impl FloatingData {
    /// Unpositioned data for the given options (origin, preferred placement).
    pub fn unpositioned(options: &PositionOptions) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            strategy: options.strategy,
            placement: options.placement,
            middleware_data: MiddlewareData::default(),
        }
    }

    /// Top-left corner as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}
