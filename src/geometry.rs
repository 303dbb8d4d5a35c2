//! Rectangle math for bounding boxes.
//!
//! Boxes are kept exactly as they were drawn: `(x, y)` is the corner where the
//! drag started and `width`/`height` are signed. [`normalize`] turns such a box
//! into its canonical top-left form and is applied once, at export.

use serde::{Deserialize, Serialize};

/// A position in frame pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle as drawn. Negative extents mean the anchor is the
/// right/bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box spanned by a drag from `anchor` to `current`.
    pub fn from_drag(anchor: Point, current: Point) -> Self {
        Self {
            x: anchor.x,
            y: anchor.y,
            width: current.x - anchor.x,
            height: current.y - anchor.y,
        }
    }

    /// The corner at `(x, y)`.
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The corner at `(x + width, y + height)`.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height)
    }

    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left(),
            Corner::BottomRight => self.bottom_right(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// A box with its true top-left corner and non-negative extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NormalizedBox {
    /// COCO `bbox` layout: `[x, y, width, height]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }
}

impl From<NormalizedBox> for BoundingBox {
    fn from(b: NormalizedBox) -> Self {
        BoundingBox::new(b.x, b.y, b.width, b.height)
    }
}

/// The two draggable control points of a box.
///
/// Both are named after the corner as drawn, so `TopLeft` is the stored
/// `(x, y)` even when the box has been dragged inside out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order: top-left is checked before bottom-right.
    pub const ALL: [Corner; 2] = [Corner::TopLeft, Corner::BottomRight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::BottomRight => "bottom_right",
        }
    }
}

pub fn normalize(b: &BoundingBox) -> NormalizedBox {
    let (x, width) = if b.width < 0.0 {
        (b.x + b.width, b.width.abs())
    } else {
        (b.x, b.width)
    };
    let (y, height) = if b.height < 0.0 {
        (b.y + b.height, b.height.abs())
    } else {
        (b.y, b.height)
    };
    NormalizedBox {
        x,
        y,
        width,
        height,
    }
}

pub fn area(b: &NormalizedBox) -> f64 {
    b.width * b.height
}

/// The corner that stays fixed while `corner` is dragged.
pub fn opposite_corner(b: &BoundingBox, corner: Corner) -> Point {
    match corner {
        Corner::TopLeft => b.bottom_right(),
        Corner::BottomRight => b.top_left(),
    }
}

/// Moves `corner` to `to`, keeping the opposite corner in place.
///
/// Dragging past the opposite corner yields negative extents; that is left
/// for [`normalize`] to resolve.
pub fn resize_from_corner(b: &BoundingBox, corner: Corner, to: Point) -> BoundingBox {
    let fixed = opposite_corner(b, corner);
    match corner {
        Corner::TopLeft => BoundingBox {
            x: to.x,
            y: to.y,
            width: fixed.x - to.x,
            height: fixed.y - to.y,
        },
        Corner::BottomRight => BoundingBox {
            x: b.x,
            y: b.y,
            width: to.x - fixed.x,
            height: to.y - fixed.y,
        },
    }
}

pub fn hit_test_corner(point: Point, corner_point: Point, radius: f64) -> bool {
    let dx = point.x - corner_point.x;
    let dy = point.y - corner_point.y;
    dx * dx + dy * dy <= radius * radius
}
