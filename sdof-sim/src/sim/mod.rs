mod output_state;
pub mod params;
pub mod signal;
pub mod util;

use arrow::record_batch::RecordBatch;
use sdof::SdofSolver;
use sdof_cosim::{
    CouplingAdapter, CouplingInterface, CouplingVariable, DataRole, InterfaceDatum,
    ScalarInterface, ROOT_POINT_DISPLACEMENT,
};

pub use output_state::RecorderState;

use crate::{options::SdofSimOptions, Error};

use self::{params::SimParams, signal::Signal};

/// Name of the SDOF participant in the driven co-simulation
pub const SOLVER_NAME: &str = "sdof";

pub struct SimState {
    sim_params: SimParams,
    load: Signal,
    root_point_displacement: Signal,
    adapter: CouplingAdapter,
    interface: ScalarInterface,
    recorder_state: RecorderState,
}

#[derive(Default, Debug)]
pub struct SimStats {
    /// End time of the simulation
    pub end_time: f64,
    /// Number of steps taken
    pub num_steps: usize,
}

impl SimState {
    pub fn new(options: &SdofSimOptions) -> Result<Self, Error> {
        let sim_params = SimParams::new_from_options(options)?;
        let solver = SdofSolver::new(&options.solver_config())?;

        let mut interface = ScalarInterface::for_sdof(solver.parameters().buffer_size());
        interface.add_interface_datum(InterfaceDatum::new(
            "load",
            CouplingVariable::Force.name(),
            SOLVER_NAME,
            DataRole::Input,
        ));
        interface.add_interface_datum(InterfaceDatum::new(
            "displacement",
            CouplingVariable::Displacement.name(),
            SOLVER_NAME,
            DataRole::Output,
        ));
        interface.add_interface_datum(InterfaceDatum::new(
            "reaction",
            CouplingVariable::Reaction.name(),
            SOLVER_NAME,
            DataRole::Output,
        ));

        let recorder_state = RecorderState::new(sim_params.num_steps + 1);

        Ok(Self {
            sim_params,
            load: options.excitation.load(),
            root_point_displacement: options.excitation.root_point_displacement(),
            adapter: CouplingAdapter::new(SOLVER_NAME, solver),
            interface,
            recorder_state,
        })
    }

    /// Check the interface data and record the initial state.
    pub fn initialize(&mut self) -> Result<(), Error> {
        self.adapter.check(&self.interface)?;
        self.recorder_state
            .record_variables(self.adapter.solver(), self.sim_params.start_time)?;
        Ok(())
    }

    pub fn main_loop(&mut self) -> Result<SimStats, Error> {
        let mut time = self.sim_params.start_time;
        let mut stats = SimStats::default();

        log::info!(
            "Simulating {} steps from t = {} to t = {}",
            self.sim_params.num_steps,
            self.sim_params.start_time,
            self.sim_params.stop_time
        );

        for n in 0..self.sim_params.num_steps {
            self.adapter.advance_in_time(self.sim_params.time_at(n))?;
            time = self.sim_params.time_at(n + 1);
            self.interface.advance();

            self.interface.set_scalar(
                ROOT_POINT_DISPLACEMENT,
                0,
                self.root_point_displacement.value(time),
            )?;
            self.interface
                .set_scalar(CouplingVariable::Force.name(), 0, self.load.value(time))?;
            self.adapter.solve_solution_step(&mut self.interface)?;

            self.recorder_state
                .record_variables(self.adapter.solver(), time)?;
            stats.num_steps += 1;
        }

        stats.end_time = time;
        self.adapter.finalize()?;

        log::info!(
            "Simulation finished at t = {:.3} after {} steps.",
            stats.end_time,
            stats.num_steps
        );

        Ok(stats)
    }

    pub fn finish(self) -> Result<RecordBatch, Error> {
        Ok(self.recorder_state.finish()?)
    }
}
