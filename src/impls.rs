//! Implementations for structs within `models.rs`

use crate::conv_num;
use crate::models::{Benchmark, Point, Rect, Size};
use std::fmt;
use std::ops::Range;

impl Point {
    /// Creates a new point with the given coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Rect {
    pub const fn new(pos: Point, size: Size) -> Self {
        Self { pos, size }
    }

    /// The first column past the right edge
    pub const fn right(&self) -> i32 {
        self.pos.x.wrapping_add(self.size.width)
    }

    /// The first row past the bottom edge
    pub const fn bottom(&self) -> i32 {
        self.pos.y.wrapping_add(self.size.height)
    }

    /// Whether `point` lies in the half-open span of the rectangle
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.pos.x..self.right()).contains(&point.x)
            && (self.pos.y..self.bottom()).contains(&point.y)
    }

    /// Whether the spans of `self` reach at least as far as those of `other`
    /// on both axes. Empty rectangles are compared by their spans too.
    #[must_use]
    pub fn covers(&self, other: &Rect) -> bool {
        self.pos.x <= other.pos.x
            && other.right() <= self.right()
            && self.pos.y <= other.pos.y
            && other.bottom() <= self.bottom()
    }

    /// Returns the smallest rectangle covering both `self` and `point`.
    ///
    /// Each axis grows on its own: a point left of (or above) the rectangle
    /// moves that edge and keeps the opposite one fixed, a point at or past the
    /// right (or bottom) edge stretches the size so the point becomes the last
    /// covered cell. A point on the left edge is inside, a point on the right
    /// edge is not.
    #[must_use = "This function doesn't modify `self`, but returns a new `Rect`"]
    pub fn include(self, point: Point) -> Self {
        let mut result = self;

        if point.x < self.pos.x {
            result.size.width = self
                .size
                .width
                .wrapping_add(self.pos.x.wrapping_sub(point.x));
            result.pos.x = point.x;
        } else if point.x >= self.right() {
            result.size.width = point.x.wrapping_sub(self.pos.x).wrapping_add(1);
        }

        if point.y < self.pos.y {
            result.size.height = self
                .size
                .height
                .wrapping_add(self.pos.y.wrapping_sub(point.y));
            result.pos.y = point.y;
        } else if point.y >= self.bottom() {
            result.size.height = point.y.wrapping_sub(self.pos.y).wrapping_add(1);
        }

        result
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.pos.x, self.pos.y, self.size.width, self.size.height
        )
    }
}

impl Default for Benchmark {
    fn default() -> Self {
        Self {
            iterations: 320_000_000,
            chunk_size: 1_000_000,
            start: Rect::new(Point::new(12, 23), Size::new(2, 3)),
            x_period: 100,
            y_period: 200,
        }
    }
}

impl Benchmark {
    /// The `index`th point of the synthetic sequence. A zero period counts as 1.
    pub fn point(&self, index: u64) -> Point {
        Point::new(
            conv_num!(i32, index % self.x_period.max(1), 0),
            conv_num!(i32, index % self.y_period.max(1), 0),
        )
    }

    /// Lazily generates the points for the given index range
    pub fn points(&self, indices: Range<u64>) -> impl Iterator<Item = Point> {
        let bench = *self;
        indices.map(move |index| bench.point(index))
    }

    /// Folds the points of `indices` into `rect`
    pub fn fold(&self, rect: Rect, indices: Range<u64>) -> Rect {
        self.points(indices).fold(rect, Rect::include)
    }

    /// Splits `0..iterations` into consecutive ranges of at most `chunk_size`
    pub fn chunks(&self) -> impl Iterator<Item = Range<u64>> {
        let iterations = self.iterations;
        let chunk = self.chunk_size.max(1);
        let starts = (0..iterations.div_ceil(chunk)).map(move |n| n * chunk);

        starts.map(move |start| start..start.saturating_add(chunk).min(iterations))
    }
}
