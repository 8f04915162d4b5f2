//! Implicit time integration of `m*a + c*v + k*(u - r) = f` with the generalized-alpha family.
//!
//! ```text
//! u_{n+1} = u_n + dt*v_n + dt²*[(1/2 - β)*a_n + β*a_{n+1}]
//! v_{n+1} = v_n + dt*[(1 - γ)*a_n + γ*a_{n+1}]
//!
//! m*a_{n+1-αm} + c*v_{n+1-αf} + k*(u_{n+1-αf} - r_{n+1-αf}) = f_{n+1-αf}
//! x_{n+1-α} = (1 - α)*x_{n+1} + α*x_n
//! ```
//!
//! with `β = (1 - αm + αf)²/4` and `γ = 1/2 - αm + αf`. `αm = αf = 0` is the Newmark average
//! acceleration method, `αf = 0` is the Bossak method.

use super::Scheme;
use crate::{
    history::{SolutionStepHistory, StepRecord},
    params::DynamicParameters,
    Error,
};

#[derive(Clone, Debug)]
pub struct Newmark {
    stiffness: f64,
    damping: f64,
    params: DynamicParameters,
    beta: f64,
    gamma: f64,
}

/// Kinematic state of a step.
#[derive(Clone, Copy, Debug)]
struct Kinematics {
    displacement: f64,
    velocity: f64,
    acceleration: f64,
}

impl Newmark {
    pub fn new(stiffness: f64, damping: f64, params: DynamicParameters) -> Self {
        Self {
            stiffness,
            damping,
            beta: params.beta(),
            gamma: params.gamma(),
            params,
        }
    }

    /// Velocity and acceleration consistent with `displacement` at the end of the step.
    fn kinematics(&self, previous: &StepRecord, displacement: f64) -> Kinematics {
        let dt = self.params.time_step;
        let acceleration = (displacement - previous.displacement - dt * previous.velocity)
            / (self.beta * dt * dt)
            - (0.5 / self.beta - 1.0) * previous.acceleration;
        let velocity = previous.velocity
            + dt * ((1.0 - self.gamma) * previous.acceleration + self.gamma * acceleration);
        Kinematics {
            displacement,
            velocity,
            acceleration,
        }
    }

    /// Derivative of the residual with respect to the end-of-step displacement.
    fn jacobian(&self) -> f64 {
        let DynamicParameters {
            mass,
            time_step: dt,
            alpha_m,
            alpha_f,
            ..
        } = self.params;
        mass * (1.0 - alpha_m) / (self.beta * dt * dt)
            + self.damping * (1.0 - alpha_f) * self.gamma / (self.beta * dt)
            + self.stiffness * (1.0 - alpha_f)
    }

    /// Returns `(residual, scale)` of the balance of momentum at the generalized midpoint.
    fn residual(
        &self,
        previous: &StepRecord,
        current: &StepRecord,
        state: &Kinematics,
    ) -> (f64, f64) {
        let DynamicParameters {
            mass,
            alpha_m,
            alpha_f,
            ..
        } = self.params;
        let mid = |alpha: f64, old: f64, new: f64| (1.0 - alpha) * new + alpha * old;

        let acceleration = mid(alpha_m, previous.acceleration, state.acceleration);
        let velocity = mid(alpha_f, previous.velocity, state.velocity);
        let displacement = mid(alpha_f, previous.displacement, state.displacement);
        let root = mid(
            alpha_f,
            previous.root_point_displacement,
            current.root_point_displacement,
        );
        let load = mid(alpha_f, previous.load, current.load);

        let inertia = mass * acceleration;
        let damper = self.damping * velocity;
        let spring = self.stiffness * (displacement - root);
        let scale = [inertia, damper, spring, load]
            .into_iter()
            .fold(1.0_f64, |scale, force| scale.max(force.abs()));
        (inertia + damper + spring - load, scale)
    }
}

impl Scheme for Newmark {
    fn initialize(&self, record: &mut StepRecord) {
        let spring = self.stiffness * (record.displacement - record.root_point_displacement);
        let damper = self.damping * record.velocity;
        record.acceleration = (record.load - damper - spring) / self.params.mass;
        record.reaction = damper + spring;
    }

    fn solve(&self, history: &mut SolutionStepHistory) -> Result<(), Error> {
        let previous = *history.previous();
        let current = *history.current();
        let jacobian = self.jacobian();

        // Predictor: the committed displacement
        let mut state = self.kinematics(&previous, previous.displacement);
        let mut iterations = 0;

        loop {
            let (residual, scale) = self.residual(&previous, &current, &state);
            if !(residual.is_finite() && state.displacement.is_finite()) {
                return Err(Error::Divergence {
                    iterations,
                    residual,
                });
            }
            if residual.abs() <= self.params.tolerance * scale {
                break;
            }
            if iterations >= self.params.max_iterations {
                return Err(Error::Divergence {
                    iterations,
                    residual,
                });
            }

            let correction = -residual / jacobian;
            state = self.kinematics(&previous, state.displacement + correction);
            iterations += 1;

            // The residual cannot drop further once the correction is below the displacement's
            // resolution
            if state.displacement.is_finite()
                && correction.abs() <= self.params.tolerance * state.displacement.abs()
            {
                break;
            }
        }

        log::trace!("Dynamic solve converged after {iterations} iterations");

        let current = history.current_mut();
        current.displacement = state.displacement;
        current.velocity = state.velocity;
        current.acceleration = state.acceleration;
        current.reaction = self.damping * state.velocity
            + self.stiffness * (state.displacement - current.root_point_displacement);

        Ok(())
    }
}
