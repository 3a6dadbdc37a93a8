//! Data structures for `rectbench`

/// A point with x and y coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The X coordinate of the point
    pub x: i32,
    /// The Y coordinate of the point
    pub y: i32,
}

/// The extent of a rectangle, counted in unit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Number of columns covered
    pub width: i32,
    /// Number of rows covered
    pub height: i32,
}

/// An axis-aligned rectangle covering `[pos.x, pos.x + width) × [pos.y, pos.y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// The top left corner
    pub pos: Point,
    pub size: Size,
}

/// The fixed parameters of the bounding rectangle benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    /// Total number of points folded into the rectangle
    pub iterations: u64,
    /// Number of iterations run between two progress bar updates
    pub chunk_size: u64,
    /// The rectangle the fold starts from
    pub start: Rect,
    /// The x coordinate of point `i` is `i % x_period`
    pub x_period: u64,
    /// The y coordinate of point `i` is `i % y_period`
    pub y_period: u64,
}

/// The outcome of one benchmark run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// The bounding rectangle after the last point was folded in
    pub rect: Rect,
    pub iterations: u64,
    pub elapsed: std::time::Duration,
}
