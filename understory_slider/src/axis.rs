// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis selection and pointer projection.
//!
//! The slider state machine works on a single scalar coordinate. [`Axis`]
//! collapses 2D pointer positions and track sizes onto that scalar:
//!
//! - [`Axis::project`] turns a page/window position into a *drag* coordinate.
//!   The vertical axis uses `-y`, so moving the pointer up increases the ratio.
//! - [`Axis::local`] turns a track-local offset (relative to the track's
//!   top-left corner) into a *jump* coordinate. It is not negated; the
//!   vertical inversion for jumps happens in
//!   [`SliderState::jump_to_position`](crate::SliderState::jump_to_position).
//! - [`Axis::extent`] measures the track along the axis.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_slider::Axis;
//!
//! let p = Point::new(30.0, 40.0);
//! assert_eq!(Axis::Horizontal.project(p), 30.0);
//! assert_eq!(Axis::Vertical.project(p), -40.0);
//! assert_eq!(Axis::Vertical.local(p), 40.0);
//! assert_eq!(Axis::Vertical.extent(Size::new(8.0, 120.0)), 120.0);
//! ```

use kurbo::{Point, Size};

/// The direction along which a slider measures movement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right; larger `x` means a larger ratio.
    #[default]
    Horizontal,
    /// Bottom to top; smaller `y` (higher on screen) means a larger ratio.
    Vertical,
}

impl Axis {
    /// Projects a page/window position onto the drag coordinate for this axis.
    #[must_use]
    pub fn project(self, pos: Point) -> f64 {
        match self {
            Self::Horizontal => pos.x,
            Self::Vertical => -pos.y,
        }
    }

    /// Returns the component of a track-local offset along this axis.
    #[must_use]
    pub fn local(self, offset: Point) -> f64 {
        match self {
            Self::Horizontal => offset.x,
            Self::Vertical => offset.y,
        }
    }

    /// Returns the length of a track of the given size along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Returns `true` for [`Axis::Vertical`].
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_horizontal() {
        assert_eq!(Axis::default(), Axis::Horizontal);
        assert!(!Axis::default().is_vertical());
    }

    #[test]
    fn horizontal_uses_x_and_width() {
        let axis = Axis::Horizontal;
        assert_eq!(axis.project(Point::new(12.0, 99.0)), 12.0);
        assert_eq!(axis.local(Point::new(12.0, 99.0)), 12.0);
        assert_eq!(axis.extent(Size::new(200.0, 10.0)), 200.0);
    }

    #[test]
    fn vertical_projection_is_negated_but_local_is_not() {
        let axis = Axis::Vertical;
        assert_eq!(axis.project(Point::new(12.0, 99.0)), -99.0);
        assert_eq!(axis.local(Point::new(12.0, 99.0)), 99.0);
        assert_eq!(axis.extent(Size::new(200.0, 10.0)), 10.0);
    }

    #[test]
    fn upward_motion_is_positive_on_vertical_axis() {
        let axis = Axis::Vertical;
        let down = axis.project(Point::new(0.0, 80.0));
        let up = axis.project(Point::new(0.0, 30.0));
        assert!(up - down > 0.0);
    }
}
