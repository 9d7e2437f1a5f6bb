// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_floating --heading-base-level=0

//! Understory Floating: Kurbo-native positioning for popovers, tooltips, and menus.
//!
//! - Computes where a floating element goes relative to a reference element, inside a boundary.
//! - Supports 12 placements and a middleware pipeline (offset, shift, flip, auto placement, arrow).
//! - Tracks *when* a position is needed through a request/resolve [`PositioningAdapter`].
//!
//! ## Not a layout engine
//!
//! This crate never measures elements. The host supplies rects, either per request or through an
//! [`ElementRects`] source, and decides when layout changed.
//!
//! ## API overview
//!
//! - [`compute_position`](compute::compute_position) and the [`PositionEngine`] seam with
//!   [`DefaultEngine`] as the built-in implementation.
//! - [`PositionOptions`](types::PositionOptions): placement, strategy, and middleware.
//! - [`FloatingData`](types::FloatingData): coordinates, final placement, and per-middleware data.
//! - [`PositioningAdapter`]: owns the element handles and options, issues
//!   [`ComputeRequest`](adapter::ComputeRequest)s, and publishes results last-write-wins.
//!
//! ### Minimal usage
//!
//! ```
//! use kurbo::Rect;
//! use understory_floating::compute::compute_position;
//! use understory_floating::types::{FlipOptions, Middleware, Placement, PositionOptions};
//!
//! // The reference sits near the bottom of the viewport, so the tooltip flips above it.
//! let reference = Rect::new(50.0, 180.0, 90.0, 195.0);
//! let tooltip = Rect::new(0.0, 0.0, 60.0, 24.0);
//! let viewport = Rect::new(0.0, 0.0, 320.0, 200.0);
//!
//! let options = PositionOptions {
//!     placement: Placement::Bottom,
//!     middleware: vec![Middleware::Flip(FlipOptions::default())],
//!     ..Default::default()
//! };
//! let data = compute_position(reference, tooltip, viewport, &options);
//! assert_eq!(data.placement, Placement::Top);
//! assert_eq!((data.x, data.y), (40.0, 156.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: log issued requests and stale resolutions.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`PositioningAdapter`]: adapter::PositioningAdapter
//! [`ElementRects`]: rects::ElementRects
//! [`PositionEngine`]: compute::PositionEngine
//! [`DefaultEngine`]: compute::DefaultEngine

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod compute;
pub mod rects;
pub mod types;
