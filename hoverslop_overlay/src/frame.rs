// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for one overlay rectangle.
//!
//! An [`OverlayFrame`] is everything a host backend needs to draw a single
//! debug box: the viewport-space slop rect, the hovered flag selecting the
//! highlight style, the element's display name, and up to four numeric side
//! labels (one per margin side with a positive value). Computing a frame has
//! no side effects; the session layer recomputes it on scroll, resize,
//! mutation, and hovered-flag changes.

use alloc::string::String;
use kurbo::Rect;
use smallvec::SmallVec;

use hoverslop_state::margin::MarginBox;

/// One side of the slop rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The top margin edge.
    Top,
    /// The right margin edge.
    Right,
    /// The bottom margin edge.
    Bottom,
    /// The left margin edge.
    Left,
}

/// Numeric label for one margin side. Only sides with a positive margin get one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SideLabel {
    /// Which edge the label annotates.
    pub side: Side,
    /// The margin value in viewport units.
    pub value: f64,
}

/// Everything a host needs to draw one overlay rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayFrame {
    /// Viewport-space slop rect (element bounds grown by the margins).
    pub rect: Rect,
    /// Whether the tracked element is currently hovered. Selects the
    /// highlight style; native hover never does.
    pub hovered: bool,
    /// Display name shown in the name label.
    pub name: String,
    /// Side labels in top/right/bottom/left order, positive margins only.
    pub side_labels: SmallVec<[SideLabel; 4]>,
}

impl OverlayFrame {
    /// Compute the frame for an element rect and its normalized margins.
    ///
    /// The rect's origin is `(left - margin.left, top - margin.top)` and its
    /// size is the element size grown by the opposing margins per axis.
    #[must_use]
    pub fn compute(element_rect: Rect, margins: MarginBox, hovered: bool, name: String) -> Self {
        let rect = margins.expand(element_rect);

        let mut side_labels = SmallVec::new();
        for (side, value) in [
            (Side::Top, margins.top),
            (Side::Right, margins.right),
            (Side::Bottom, margins.bottom),
            (Side::Left, margins.left),
        ] {
            if value > 0.0 {
                side_labels.push(SideLabel { side, value });
            }
        }

        Self {
            rect,
            hovered,
            name,
            side_labels,
        }
    }
}
