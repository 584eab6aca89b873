//! Damped spring physics used for flings.

/// Spring animation configuration. The simulated mass is always 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring used for drawer-style flings.
    pub fn fling() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 500.0,
            velocity_threshold: 0.001,
            position_threshold: 0.001,
        }
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Absolute damping coefficient for a unit mass.
    fn damping(&self) -> f32 {
        self.damping_ratio * 2.0 * self.stiffness.sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::fling()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SpringSolution {
    Critical { r: f32, c1: f32, c2: f32 },
    Over { r1: f32, r2: f32, c1: f32, c2: f32 },
    Under { w: f32, r: f32, c1: f32, c2: f32 },
}

impl SpringSolution {
    fn new(spec: &SpringSpec, distance: f32, velocity: f32) -> Self {
        let damping = spec.damping();
        let cmk = damping * damping - 4.0 * spec.stiffness;
        if (spec.damping_ratio - 1.0).abs() < 1e-6 {
            let r = -damping / 2.0;
            SpringSolution::Critical {
                r,
                c1: distance,
                c2: velocity - r * distance,
            }
        } else if spec.damping_ratio > 1.0 {
            let root = cmk.max(0.0).sqrt();
            let r1 = (-damping - root) / 2.0;
            let r2 = (-damping + root) / 2.0;
            let c2 = (velocity - r1 * distance) / (r2 - r1);
            SpringSolution::Over {
                r1,
                r2,
                c1: distance - c2,
                c2,
            }
        } else {
            let w = (-cmk).max(0.0).sqrt() / 2.0;
            let r = -damping / 2.0;
            SpringSolution::Under {
                w,
                r,
                c1: distance,
                c2: (velocity - r * distance) / w,
            }
        }
    }

    /// Displacement from the rest position at `t` seconds.
    fn x(&self, t: f32) -> f32 {
        match *self {
            SpringSolution::Critical { r, c1, c2 } => (c1 + c2 * t) * (r * t).exp(),
            SpringSolution::Over { r1, r2, c1, c2 } => c1 * (r1 * t).exp() + c2 * (r2 * t).exp(),
            SpringSolution::Under { w, r, c1, c2 } => {
                (r * t).exp() * (c1 * (w * t).cos() + c2 * (w * t).sin())
            }
        }
    }

    fn dx(&self, t: f32) -> f32 {
        match *self {
            SpringSolution::Critical { r, c1, c2 } => {
                let power = (r * t).exp();
                r * (c1 + c2 * t) * power + c2 * power
            }
            SpringSolution::Over { r1, r2, c1, c2 } => {
                c1 * r1 * (r1 * t).exp() + c2 * r2 * (r2 * t).exp()
            }
            SpringSolution::Under { w, r, c1, c2 } => {
                let power = (r * t).exp();
                let cosine = (w * t).cos();
                let sine = (w * t).sin();
                power * ((r * c1 + w * c2) * cosine + (r * c2 - w * c1) * sine)
            }
        }
    }
}

/// Closed-form spring motion from `start` towards `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    end: f32,
    solution: SpringSolution,
    velocity_threshold: f32,
    position_threshold: f32,
}

impl SpringSimulation {
    pub fn new(spec: SpringSpec, start: f32, end: f32, velocity: f32) -> Self {
        Self {
            end,
            solution: SpringSolution::new(&spec, start - end, velocity),
            velocity_threshold: spec.velocity_threshold,
            position_threshold: spec.position_threshold,
        }
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Position at `t` seconds after the start.
    pub fn x(&self, t: f32) -> f32 {
        self.end + self.solution.x(t)
    }

    /// Velocity at `t` seconds after the start.
    pub fn dx(&self, t: f32) -> f32 {
        self.solution.dx(t)
    }

    /// True once the spring is both close to `end` and nearly still.
    pub fn is_done(&self, t: f32) -> bool {
        (self.x(t) - self.end).abs() < self.position_threshold
            && self.dx(t).abs() < self.velocity_threshold
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
