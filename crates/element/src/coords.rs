//! Type-safe coordinates for the canvas.
//!
//! Distinct types for the two coordinate spaces Easel deals with, so a
//! pointer position can't be stored as an element position by accident.
//!
//! # Coordinate Spaces
//!
//! - **Window space**: pointer positions as delivered by the platform
//! - **Canvas space**: pixels relative to the canvas's top-left corner

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Position relative to the canvas's top-left corner.
///
/// Element positions are stored in this space. Values outside the
/// visible canvas are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// Pointer position in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowPoint(pub Vec2);

/// Offset between two canvas points (not a position).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasDelta(pub Vec2);

// === CanvasPoint ===

impl CanvasPoint {
    pub const ORIGIN: CanvasPoint = CanvasPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate a window position into canvas space, given the window
    /// position of the canvas's top-left corner.
    pub fn from_window(point: WindowPoint, canvas_origin: WindowPoint) -> Self {
        (point.0 - canvas_origin.0).into()
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for CanvasPoint {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<CanvasPoint> for Vec2 {
    fn from(p: CanvasPoint) -> Self {
        p.to_vec2()
    }
}

impl Add<CanvasDelta> for CanvasPoint {
    type Output = CanvasPoint;

    fn add(self, delta: CanvasDelta) -> Self::Output {
        (self.to_vec2() + delta.0).into()
    }
}

impl Sub<CanvasDelta> for CanvasPoint {
    type Output = CanvasPoint;

    fn sub(self, delta: CanvasDelta) -> Self::Output {
        (self.to_vec2() - delta.0).into()
    }
}

impl Sub for CanvasPoint {
    type Output = CanvasDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: CanvasPoint) -> Self::Output {
        CanvasDelta(self.to_vec2() - other.to_vec2())
    }
}

// === WindowPoint ===

impl WindowPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for WindowPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<gpui::Point<gpui::Pixels>> for WindowPoint {
    fn from(p: gpui::Point<gpui::Pixels>) -> Self {
        let x: f32 = p.x.into();
        let y: f32 = p.y.into();
        Self::new(x, y)
    }
}

// === CanvasDelta ===

impl CanvasDelta {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    pub fn dx(&self) -> f32 {
        self.0.x
    }

    pub fn dy(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for CanvasDelta {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_to_canvas_subtracts_origin() {
        let pointer = WindowPoint::new(230.0, 140.0);
        let origin = WindowPoint::new(180.0, 90.0);
        let local = CanvasPoint::from_window(pointer, origin);
        assert_eq!(local, CanvasPoint::new(50.0, 50.0));
    }

    #[test]
    fn window_to_canvas_can_go_negative() {
        let pointer = WindowPoint::new(10.0, 10.0);
        let origin = WindowPoint::new(40.0, 25.0);
        let local = CanvasPoint::from_window(pointer, origin);
        assert_eq!(local, CanvasPoint::new(-30.0, -15.0));
    }

    #[test]
    fn canvas_point_sub_gives_delta() {
        let p1 = CanvasPoint::new(10.0, 20.0);
        let p2 = CanvasPoint::new(3.0, 5.0);
        let delta = p1 - p2;
        assert_eq!(delta.dx(), 7.0);
        assert_eq!(delta.dy(), 15.0);
    }

    #[test]
    fn add_then_sub_delta() {
        let point = CanvasPoint::new(10.0, 20.0);
        let delta = CanvasDelta::new(5.0, -3.0);
        assert_eq!(point + delta, CanvasPoint::new(15.0, 17.0));
        assert_eq!((point + delta) - delta, point);
    }

    #[test]
    fn from_gpui_point() {
        let p = gpui::point(gpui::px(12.0), gpui::px(-4.0));
        assert_eq!(WindowPoint::from(p), WindowPoint::new(12.0, -4.0));
    }
}
