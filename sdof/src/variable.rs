use std::{fmt, str::FromStr};

use crate::StateAccessError;

/// Quantities stored per step by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverVariable {
    Load,
    RootPointDisplacement,
    Displacement,
    Velocity,
    Acceleration,
    Reaction,
}

impl SolverVariable {
    pub const ALL: [SolverVariable; 6] = [
        SolverVariable::Load,
        SolverVariable::RootPointDisplacement,
        SolverVariable::Displacement,
        SolverVariable::Velocity,
        SolverVariable::Acceleration,
        SolverVariable::Reaction,
    ];

    /// The registered name of the variable
    pub const fn name(&self) -> &'static str {
        match self {
            SolverVariable::Load => "LOAD",
            SolverVariable::RootPointDisplacement => "ROOT_POINT_DISPLACEMENT",
            SolverVariable::Displacement => "DISPLACEMENT",
            SolverVariable::Velocity => "VELOCITY",
            SolverVariable::Acceleration => "ACCELERATION",
            SolverVariable::Reaction => "REACTION",
        }
    }
}

impl fmt::Display for SolverVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverVariable {
    type Err = StateAccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|var| var.name() == s)
            .ok_or_else(|| StateAccessError::UnknownVariable { name: s.to_owned() })
    }
}
