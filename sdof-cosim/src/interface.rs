use std::fmt;

use crate::Error;

/// Direction of an exchanged quantity, seen from the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataRole {
    Input,
    Output,
}

impl fmt::Display for DataRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataRole::Input => f.write_str("input"),
            DataRole::Output => f.write_str("output"),
        }
    }
}

/// Declaration of a quantity exchanged between a solver and the rest of the co-simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDatum {
    /// Name of the datum within the orchestrator's configuration
    pub name: String,
    /// Name of the interface variable the datum is bound to
    pub variable_name: String,
    /// Name of the solver the datum belongs to
    pub solver_name: String,
    pub role: DataRole,
}

impl InterfaceDatum {
    pub fn new(
        name: impl Into<String>,
        variable_name: impl Into<String>,
        solver_name: impl Into<String>,
        role: DataRole,
    ) -> Self {
        Self {
            name: name.into(),
            variable_name: variable_name.into(),
            solver_name: solver_name.into(),
            role,
        }
    }
}

/// Generic scalar-field container supplied by the co-simulation orchestrator.
pub trait CouplingInterface {
    /// Read the value of `variable_name` at `offset` steps back from the current one.
    fn get_scalar(&self, variable_name: &str, offset: usize) -> Result<f64, Error>;

    /// Write the value of `variable_name` at `offset` steps back from the current one.
    fn set_scalar(&mut self, variable_name: &str, offset: usize, value: f64) -> Result<(), Error>;

    /// All interface data declared for the solver named `solver_name`.
    fn list_interface_data(&self, solver_name: &str) -> Vec<InterfaceDatum>;
}
