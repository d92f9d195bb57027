use super::*;

impl SpatialGrid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "index: cell ({}, {}) out of bounds for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    /// Cell coordinate containing world coordinate `v` (floored, may be out of bounds).
    #[inline]
    pub fn cell_coord(&self, v: f32) -> i64 {
        (v / self.cell_size).floor() as i64
    }

    /// Inclusive in-bounds cell range `(x0, y0, x1, y1)` touched by a body's AABB,
    /// or `None` when the body lies entirely outside the grid.
    pub fn cell_range(&self, body: &Body) -> Option<(u32, u32, u32, u32)> {
        let min = body.min();
        let max = body.max();
        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let x0 = self.cell_coord(min.x);
        let x1 = self.cell_coord(max.x);
        let y0 = self.cell_coord(min.y);
        let y1 = self.cell_coord(max.y);

        let w = self.width as i64;
        let h = self.height as i64;
        if x1 < 0 || y1 < 0 || x0 >= w || y0 >= h {
            return None;
        }

        Some((
            x0.max(0) as u32,
            y0.max(0) as u32,
            x1.min(w - 1) as u32,
            y1.min(h - 1) as u32,
        ))
    }
}
