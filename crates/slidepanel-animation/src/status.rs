/// Where a progress value rests when nothing is animating it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RestState {
    /// Resting at 0.
    Dismissed,
    /// Resting at 1.
    Completed,
}

/// Direction a progress value is travelling in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trajectory {
    /// Towards 1.
    Forward,
    /// Towards 0.
    Reverse,
}

/// Status reported by a progress source.
///
/// Rest states and trajectories are kept apart so that listeners never have
/// to guess whether a status came from a finished animation or from motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationStatus {
    Resting(RestState),
    Moving(Trajectory),
}

impl AnimationStatus {
    pub const DISMISSED: Self = AnimationStatus::Resting(RestState::Dismissed);
    pub const COMPLETED: Self = AnimationStatus::Resting(RestState::Completed);
    pub const FORWARD: Self = AnimationStatus::Moving(Trajectory::Forward);
    pub const REVERSE: Self = AnimationStatus::Moving(Trajectory::Reverse);

    pub fn trajectory(self) -> Option<Trajectory> {
        match self {
            AnimationStatus::Moving(trajectory) => Some(trajectory),
            AnimationStatus::Resting(_) => None,
        }
    }

    pub fn rest_state(self) -> Option<RestState> {
        match self {
            AnimationStatus::Resting(rest) => Some(rest),
            AnimationStatus::Moving(_) => None,
        }
    }

    pub fn is_dismissed(self) -> bool {
        self == Self::DISMISSED
    }

    pub fn is_completed(self) -> bool {
        self == Self::COMPLETED
    }

    /// Status implied by a value after it was set directly.
    pub fn for_value(value: f32, direction: Trajectory) -> Self {
        if value <= 0.0 {
            Self::DISMISSED
        } else if value >= 1.0 {
            Self::COMPLETED
        } else {
            AnimationStatus::Moving(direction)
        }
    }
}

impl Trajectory {
    /// Rest state reached when travelling this way finishes.
    pub fn destination(self) -> RestState {
        match self {
            Trajectory::Forward => RestState::Completed,
            Trajectory::Reverse => RestState::Dismissed,
        }
    }
}
