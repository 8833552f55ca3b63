#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,  // (i + 1) mod N
    Backward, // (i - 1 + N) mod N
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AutoplayState {
    #[default]
    Stopped, // No recurring trigger registered
    Running, // Timer advances forward every interval
}

/// Snapshot of the slider's state. `current_index` is `None` when there are no slides.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SliderState {
    pub current_index: Option<usize>,
    pub autoplay: AutoplayState,
}

impl SliderState {
    pub fn autoplay_active(&self) -> bool {
        self.autoplay == AutoplayState::Running
    }
}

impl Direction {
    /// Steps `index` once in this direction inside `[0, len)`, wrapping at both ends.
    pub fn step(self, index: usize, len: usize) -> usize {
        debug_assert!(len > 0 && index < len);
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}
