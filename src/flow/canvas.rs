use super::model::Position;

/// Screen-space rectangle, e.g. the canvas wrapper's bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// The rendered canvas, as seen by the editor once it has loaded.
pub trait CanvasInstance {
    /// Maps a point relative to the canvas origin into flow coordinates.
    fn project(&self, point: Position) -> Position;

    /// Asks the canvas to fit all nodes into view.
    fn fit_view(&mut self);
}

/// A pan/zoom transform. `project` undoes the transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

impl CanvasInstance for Viewport {
    fn project(&self, point: Position) -> Position {
        Position {
            x: (point.x - self.x) / self.zoom,
            y: (point.y - self.y) / self.zoom,
        }
    }

    fn fit_view(&mut self) {
        *self = Viewport::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// A drag hovering over the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragOverEvent {
    pub default_prevented: bool,
    pub drop_effect: DropEffect,
}

/// A palette item released over the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub client_x: f64,
    pub client_y: f64,
    /// The node type carried by the drag payload (`default` or `trigger`).
    pub node_type: String,
    /// Bounding box of the canvas wrapper, if it has been measured.
    pub bounds: Option<Rect>,
}
