use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::profile::Orientation;

/// Axis-aligned rectangle over the displayed image, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub row: f64,
    pub col: f64,
    pub height: f64,
    pub width: f64,
}

/// Integer pixel window left after clipping a region to image bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelWindow {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl PixelWindow {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols.len()
    }
}

impl Region {
    pub fn new(row: f64, col: f64, height: f64, width: f64) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// Region placed after an image is (re)loaded: anchored at the origin,
    /// spanning the whole scan axis and `round(scaling_factor * dim)` of the
    /// cross axis.
    pub fn default_for(
        rows: usize,
        cols: usize,
        orientation: Orientation,
        scaling_factor: f64,
    ) -> Self {
        let cross = |dim: usize| (scaling_factor * dim as f64).round().max(1.0);
        match orientation {
            Orientation::Vertical => Self::new(0.0, 0.0, rows as f64, cross(cols)),
            Orientation::Horizontal => Self::new(0.0, 0.0, cross(rows), cols as f64),
        }
    }

    /// Round position and size to multiples of `granularity`.
    ///
    /// Sizes never drop below one granule. Non-positive granularity leaves the
    /// region untouched.
    pub fn snapped(&self, granularity: f64) -> Self {
        if !(granularity.is_finite() && granularity > 0.0) {
            return *self;
        }
        let snap = |v: f64| (v / granularity).round() * granularity;
        let snap_size = |v: f64| (v / granularity).round().max(1.0) * granularity;
        Self {
            row: snap(self.row),
            col: snap(self.col),
            height: snap_size(self.height),
            width: snap_size(self.width),
        }
    }

    pub fn translated(&self, d_row: f64, d_col: f64) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    pub fn contains(&self, row: f64, col: f64) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.row + self.height
    }

    pub fn right(&self) -> f64 {
        self.col + self.width
    }

    /// Clip to an image of `rows` x `cols`. Returns `None` when the
    /// intersection has zero area.
    pub fn clip(&self, rows: usize, cols: usize) -> Option<PixelWindow> {
        let edge = |v: f64, limit: usize| {
            if v.is_nan() {
                0
            } else {
                v.round().clamp(0.0, limit as f64) as usize
            }
        };

        let row_range = edge(self.row, rows)..edge(self.bottom(), rows);
        let col_range = edge(self.col, cols)..edge(self.right(), cols);

        if row_range.is_empty() || col_range.is_empty() {
            return None;
        }
        Some(PixelWindow {
            rows: row_range,
            cols: col_range,
        })
    }
}
