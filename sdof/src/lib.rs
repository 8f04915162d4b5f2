//! The `sdof` crate implements a reduced-order single-degree-of-freedom (SDOF) structural solver,
//! intended to take part as one subsystem in a partitioned co-simulation.
//!
//! The solver represents a lumped mass-spring(-damper) system driven by a load and by an imposed
//! root point (support) displacement. Each coupling step it produces a displacement and the
//! reaction force transmitted to the support.
//!
//! Two variants are available, selected once at construction by [`SolverKind`]:
//! * [`SolverKind::Static`] enforces `stiffness * (displacement - root) = load`.
//! * [`SolverKind::Dynamic`] integrates `m*a + c*v + k*(u - r) = load` with the
//!   generalized-alpha / Newmark family of implicit schemes.
//!
//! Every solver owns a fixed-depth [`SolutionStepHistory`]. Offset 0 is the current step and may
//! be rewritten any number of times by an iterating coupling scheme; offsets `>= 1` are committed
//! and only move when [`SdofSolver::advance_step`] is called.
//!
//! ## Examples
//!
//! ```rust
//! use sdof::{SdofSolver, SolverConfig, SolverVariable};
//!
//! let config = SolverConfig {
//!     stiffness: Some(1000.0),
//!     ..Default::default()
//! };
//! let mut solver = SdofSolver::new(&config).unwrap();
//!
//! solver.set_value(SolverVariable::Load, 0, 500.0).unwrap();
//! solver.solve_solution_step().unwrap();
//!
//! assert_eq!(solver.get_value(SolverVariable::Displacement, 0).unwrap(), 0.5);
//! assert_eq!(solver.get_value(SolverVariable::Reaction, 0).unwrap(), 500.0);
//! ```
#![deny(clippy::all)]

mod error;
pub mod history;
pub mod params;
pub mod solver;
mod variable;

pub use error::{Error, StateAccessError};
pub use history::{SolutionStepHistory, StepRecord};
pub use params::{DynamicParameters, InitialConditions, SolverConfig, SolverKind, SolverParameters};
pub use solver::SdofSolver;
pub use variable::SolverVariable;
