//! Coupling adapter that lets an [`sdof::SdofSolver`] take part in a partitioned co-simulation.
//!
//! The orchestrator owns a generic [`CouplingInterface`] of named scalar fields. The
//! [`CouplingAdapter`] translates between those fields and the solver's own variables:
//!
//! * `SCALAR_ROOT_POINT_DISPLACEMENT` and `SCALAR_FORCE` are pulled into the solver,
//! * `SCALAR_DISPLACEMENT` and `SCALAR_REACTION` are pushed back after the solve.
//!
//! Only [`CouplingVariable`]s may be declared as interface data of the solver, enforced once by
//! [`CouplingAdapter::check`] before the first step.
//!
//! ## Examples
//!
//! ```rust
//! use sdof::{SdofSolver, SolverConfig};
//! use sdof_cosim::{CouplingAdapter, CouplingInterface, DataRole, InterfaceDatum, ScalarInterface};
//!
//! let solver = SdofSolver::new(&SolverConfig {
//!     stiffness: Some(1000.0),
//!     ..Default::default()
//! })
//! .unwrap();
//! let mut adapter = CouplingAdapter::new("structure", solver);
//!
//! let mut interface = ScalarInterface::for_sdof(2);
//! interface.add_interface_datum(InterfaceDatum::new("load", "SCALAR_FORCE", "structure", DataRole::Input));
//! interface.add_interface_datum(InterfaceDatum::new("disp", "SCALAR_DISPLACEMENT", "structure", DataRole::Output));
//!
//! adapter.check(&interface).unwrap();
//! interface.set_scalar("SCALAR_FORCE", 0, 500.0).unwrap();
//! adapter.solve_solution_step(&mut interface).unwrap();
//! assert_eq!(interface.get_scalar("SCALAR_DISPLACEMENT", 0).unwrap(), 0.5);
//! ```
#![deny(clippy::all)]

mod adapter;
mod interface;
mod scalar_interface;
mod variable;

pub use adapter::{AdapterState, CouplingAdapter};
pub use interface::{CouplingInterface, DataRole, InterfaceDatum};
pub use scalar_interface::ScalarInterface;
pub use variable::{CouplingVariable, ROOT_POINT_DISPLACEMENT};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Variable \"{variable}\" of interface data \"{datum}\" of solver \"{solver}\" cannot be used for the SDof Solver!\nOnly the following variables are allowed: {}",
        CouplingVariable::allowed_list()
    )]
    VariableNotAllowed {
        variable: String,
        datum: String,
        solver: String,
    },

    #[error("Cannot {operation} while the coupling adapter is {state:?}")]
    Lifecycle {
        operation: &'static str,
        state: AdapterState,
    },

    #[error("Unknown interface variable: {name}")]
    UnknownInterfaceVariable { name: String },

    #[error("Offset {offset} of interface variable {name} is out of range for a buffer of size {depth}")]
    InterfaceOffsetOutOfRange {
        name: String,
        offset: usize,
        depth: usize,
    },

    #[error(transparent)]
    Solver(#[from] sdof::Error),
}
