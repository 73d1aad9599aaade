/// Per-pixel escape counts for a full frame, row-major.
///
/// This is the raw output of the engine before coloring. Every cell holds a
/// value in `0..=max_iterations`; `max_iterations` marks a bounded orbit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeImage {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    data: Vec<u32>,
}

impl EscapeImage {
    /// A zero-filled image, ready to be populated row by row.
    pub(crate) fn zeroed(width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            width,
            height,
            max_iterations,
            data: vec![0; width as usize * height as usize],
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Escape count at `(row, col)`, or `None` outside the image.
    pub fn get(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// One row of escape counts.
    ///
    /// # Panics
    /// If `row >= height`.
    pub fn row(&self, row: u32) -> &[u32] {
        let w = self.width as usize;
        let start = row as usize * w;
        &self.data[start..start + w]
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.data.chunks_exact(self.width as usize)
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.data
    }

    /// Nested rows, the shape array-plotting consumers expect.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(<[u32]>::to_vec).collect()
    }

    /// Pixels that reached `max_iterations` without escaping.
    pub fn bounded_count(&self) -> usize {
        self.data
            .iter()
            .filter(|&&n| n == self.max_iterations)
            .count()
    }

    pub fn escaped_count(&self) -> usize {
        self.data.len() - self.bounded_count()
    }
}
