//! Height history of one run, one entry per step, in step order.
//! Grows without bound for as long as the run keeps stepping.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryRecorder {
    heights: Vec<f64>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, height: f64) {
        self.heights.push(height)
    }

    pub fn snapshot(&self) -> &[f64] {
        //! full history for plotting. Borrowed, so callers cannot edit it.
        &self.heights
    }

    pub fn clear(&mut self) {
        //! only called when a new run starts.
        self.heights.clear()
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn max_height(&self) -> Option<f64> {
        self.heights.iter().copied().reduce(f64::max)
    }
}
