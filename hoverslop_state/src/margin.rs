// Copyright 2026 the Hoverslop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slop margin specification and its normalized form.
//!
//! A [`Slop`] is what callers configure: either one scalar applied to all
//! four sides, or a per-side record where unspecified sides default to zero.
//! Normalization produces a [`MarginBox`], the four-sided form the tracker
//! and overlay actually work with. Normalized values are always finite and
//! non-negative: negative or non-finite inputs are clamped to zero rather
//! than carried through as undefined behavior.
//!
//! ## Minimal example
//!
//! ```
//! use hoverslop_state::margin::{MarginBox, Slop, SlopSides};
//!
//! // Scalar: uniform on all four sides.
//! assert_eq!(
//!     Slop::from(8.0).normalize(),
//!     MarginBox { top: 8.0, right: 8.0, bottom: 8.0, left: 8.0 },
//! );
//!
//! // Partial record: missing sides are zero.
//! let slop = Slop::from(SlopSides { left: Some(12.0), ..SlopSides::default() });
//! assert_eq!(slop.normalize().left, 12.0);
//! assert_eq!(slop.normalize().top, 0.0);
//! ```

use kurbo::{Point, Rect};

/// Per-side slop specification. Unspecified sides normalize to zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SlopSides {
    /// Extra hover margin above the element.
    pub top: Option<f64>,
    /// Extra hover margin to the right of the element.
    pub right: Option<f64>,
    /// Extra hover margin below the element.
    pub bottom: Option<f64>,
    /// Extra hover margin to the left of the element.
    pub left: Option<f64>,
}

/// A slop specification: a uniform scalar or a per-side record.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Slop {
    /// One value applied to all four sides.
    Uniform(f64),
    /// Independent values per side; missing sides are zero.
    PerSide(SlopSides),
}

impl From<f64> for Slop {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<SlopSides> for Slop {
    fn from(sides: SlopSides) -> Self {
        Self::PerSide(sides)
    }
}

impl Slop {
    /// Normalize into a [`MarginBox`].
    ///
    /// Scalar specifications expand to all four sides; per-side records fill
    /// missing sides with zero. Every value is clamped to a finite,
    /// non-negative number, so the result always satisfies the margin
    /// invariant regardless of input.
    #[must_use]
    pub fn normalize(self) -> MarginBox {
        match self {
            Self::Uniform(m) => {
                let m = sanitize(m);
                MarginBox {
                    top: m,
                    right: m,
                    bottom: m,
                    left: m,
                }
            }
            Self::PerSide(sides) => MarginBox {
                top: sanitize(sides.top.unwrap_or(0.0)),
                right: sanitize(sides.right.unwrap_or(0.0)),
                bottom: sanitize(sides.bottom.unwrap_or(0.0)),
                left: sanitize(sides.left.unwrap_or(0.0)),
            },
        }
    }
}

/// Clamp a margin value to a finite, non-negative number.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Normalized four-sided slop margin. Values are finite and non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MarginBox {
    /// Margin above the element.
    pub top: f64,
    /// Margin to the right of the element.
    pub right: f64,
    /// Margin below the element.
    pub bottom: f64,
    /// Margin to the left of the element.
    pub left: f64,
}

impl MarginBox {
    /// The zero margin: the slop rect equals the element bounds.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Grow `rect` by the per-side margins, producing the slop rect.
    #[must_use]
    pub fn expand(self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 - self.left,
            rect.y0 - self.top,
            rect.x1 + self.right,
            rect.y1 + self.bottom,
        )
    }

    /// Inside-test against the slop rect around `bounds`.
    ///
    /// Inclusive on all four edges: a pointer exactly on the expanded
    /// boundary counts as inside. (`kurbo::Rect::contains` is half-open,
    /// which is not what hover hit-testing wants.)
    #[must_use]
    pub fn hit(self, bounds: Rect, pos: Point) -> bool {
        let r = self.expand(bounds);
        pos.x >= r.x0 && pos.x <= r.x1 && pos.y >= r.y0 && pos.y <= r.y1
    }
}
