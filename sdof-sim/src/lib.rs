//! `sdof-sim` drives an SDOF subsystem through its co-simulation adapter with a prescribed load
//! and support excitation, recording the committed state of every step.
//!
//! It stands in for a co-simulation orchestrator with a single participant, and does not perform
//! any coupling relaxation.

use arrow::record_batch::RecordBatch;

pub mod options;
pub mod sim;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid simulation options: {0}")]
    InvalidOptions(String),

    #[error(transparent)]
    Solver(#[from] sdof::Error),

    #[error(transparent)]
    Coupling(#[from] sdof_cosim::Error),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Run a simulation from the command line options.
pub fn simulate(options: &options::SdofSimOptions) -> Result<RecordBatch, Error> {
    let mut sim_state = sim::SimState::new(options)?;
    sim_state.initialize()?;
    let stats = sim_state.main_loop()?;
    log::debug!("{stats:?}");
    sim_state.finish()
}
