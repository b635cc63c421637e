//! Score bookkeeping: frames survived since the last floor touch, and the
//! best run so far this session.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u64,
    pub best: u64,
}

impl Score {
    /// Count one surviving frame
    pub fn tick(&mut self) {
        self.current += 1;
    }

    /// End the run: fold the current score into the best and start over.
    /// Returns the score of the run that just ended.
    pub fn end_run(&mut self) -> u64 {
        let ended = self.current;
        self.best = self.best.max(ended);
        self.current = 0;
        ended
    }

    /// Background brightness progress in 0..=1
    pub fn progress(&self, brighten_score: u64) -> f32 {
        (self.current as f32 / brighten_score.max(1) as f32).min(1.0)
    }
}
