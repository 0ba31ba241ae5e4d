#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputState {
    Idle,
    Dragging,
}

/// Pointer bookkeeping for drag panning.
#[derive(Debug, Clone)]
pub struct DragTracker {
    pub state: UserInputState,
    pub last_pos: [f64; 2],
}

impl DragTracker {
    pub fn new() -> Self {
        Self {
            state: UserInputState::Idle,
            last_pos: [0.0, 0.0],
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.state == UserInputState::Dragging
    }

    pub fn begin(&mut self, pos: [f64; 2]) {
        self.state = UserInputState::Dragging;
        self.last_pos = pos;
    }

    /// Raw screen delta since the previous pointer position, or `None` when idle.
    pub fn step(&mut self, pos: [f64; 2]) -> Option<[f64; 2]> {
        if !self.is_dragging() {
            return None;
        }
        let delta = [pos[0] - self.last_pos[0], pos[1] - self.last_pos[1]];
        self.last_pos = pos;
        Some(delta)
    }

    /// Returns whether a drag was actually in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = UserInputState::Idle;
        was_dragging
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
