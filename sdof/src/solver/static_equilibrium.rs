use super::Scheme;
use crate::{
    history::{SolutionStepHistory, StepRecord},
    Error,
};

/// Static equilibrium `stiffness * (displacement - root) = load`.
///
/// The reaction balances the applied load, `reaction = load`. Velocity and acceleration of a
/// solved step are zero.
#[derive(Clone, Debug)]
pub struct StaticEquilibrium {
    stiffness: f64,
}

impl StaticEquilibrium {
    pub fn new(stiffness: f64) -> Self {
        Self { stiffness }
    }
}

impl Scheme for StaticEquilibrium {
    fn initialize(&self, record: &mut StepRecord) {
        record.acceleration = 0.0;
        record.reaction = self.stiffness * (record.displacement - record.root_point_displacement);
    }

    fn solve(&self, history: &mut SolutionStepHistory) -> Result<(), Error> {
        let current = history.current_mut();

        current.displacement = current.root_point_displacement + current.load / self.stiffness;
        current.velocity = 0.0;
        current.acceleration = 0.0;
        current.reaction = current.load;

        Ok(())
    }
}
