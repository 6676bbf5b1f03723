//! The window hosting the popup menu.
use crate::menu::MenuTree;

/// A point in screen or client coordinates, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a new [`Point`].
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rectangle {
    /// Left edge.
    pub left: i32,
    /// Top edge.
    pub top: i32,
    /// Right edge, exclusive.
    pub right: i32,
    /// Bottom edge, exclusive.
    pub bottom: i32,
}

impl Rectangle {
    /// Returns `true` if `point` lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// The window hosting the context menu.
///
/// Backends implement this on top of the native window and menu toolkit.
pub trait Surface {
    /// Returns the client area, in client coordinates.
    fn client_rect(&self) -> Rectangle;

    /// Converts a screen point to client coordinates.
    fn screen_to_client(&self, point: Point) -> Point;

    /// Converts a client point to screen coordinates.
    fn client_to_screen(&self, point: Point) -> Point;

    /// Displays `tree` as a popup menu anchored at `point` (screen coordinates).
    ///
    /// The call must not wait for a selection; the chosen item is reported
    /// back separately by its identifier.
    fn popup(&mut self, tree: &MenuTree, point: Point);
}
