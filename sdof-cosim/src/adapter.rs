use itertools::Itertools;
use sdof::{SdofSolver, SolverVariable};

use crate::{CouplingInterface, CouplingVariable, Error, ROOT_POINT_DISPLACEMENT};

/// Lifecycle of a [`CouplingAdapter`].
///
/// ```text
/// Uninitialized -> Configured -> { Solved | Failed }* -> Solved -> Committed -> ... -> Finalized
/// ```
///
/// The initial state counts as committed, so `Configured` may also advance directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterState {
    /// Constructed, interface data not yet checked
    Uninitialized,
    /// Interface data checked, no step solved yet
    Configured,
    /// The last coupling iteration solved successfully
    Solved,
    /// The last coupling iteration failed. The step must be solved again before it is committed.
    Failed,
    /// The step was committed and a new one started
    Committed,
    Finalized,
}

/// Binds an [`SdofSolver`] to the interface data of a co-simulation.
#[derive(Debug)]
pub struct CouplingAdapter {
    name: String,
    solver: SdofSolver,
    state: AdapterState,
}

impl CouplingAdapter {
    pub fn new(name: impl Into<String>, solver: SdofSolver) -> Self {
        Self {
            name: name.into(),
            solver,
            state: AdapterState::Uninitialized,
        }
    }

    /// Name of the solver within the co-simulation
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn solver(&self) -> &SdofSolver {
        &self.solver
    }

    pub fn state(&self) -> AdapterState {
        self.state
    }

    fn require(&self, operation: &'static str, allowed: &[AdapterState]) -> Result<(), Error> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(Error::Lifecycle {
                operation,
                state: self.state,
            })
        }
    }

    /// Make sure only allow-listed variables are declared as interface data of this solver.
    ///
    /// Must succeed once before the first step is solved.
    pub fn check(&mut self, interface: &impl CouplingInterface) -> Result<(), Error> {
        self.require(
            "check",
            &[AdapterState::Uninitialized, AdapterState::Configured],
        )?;

        let data = interface.list_interface_data(&self.name);
        if let Some(datum) = data
            .iter()
            .find(|datum| CouplingVariable::from_name(&datum.variable_name).is_none())
        {
            log::error!(
                "Interface data \"{}\" of solver \"{}\" is bound to {}",
                datum.name,
                self.name,
                datum.variable_name
            );
            return Err(Error::VariableNotAllowed {
                variable: datum.variable_name.clone(),
                datum: datum.name.clone(),
                solver: datum.solver_name.clone(),
            });
        }

        log::debug!(
            "Checked interface data of solver \"{}\": [{}]",
            self.name,
            data.iter()
                .map(|datum| format!("{} ({}, {})", datum.name, datum.variable_name, datum.role))
                .join(", ")
        );

        self.state = AdapterState::Configured;
        Ok(())
    }

    /// Run one coupling iteration: pull the excitation and load from `interface`, solve the
    /// current step and push the displacement and reaction back.
    pub fn solve_solution_step(
        &mut self,
        interface: &mut impl CouplingInterface,
    ) -> Result<(), Error> {
        self.require(
            "solve a solution step",
            &[
                AdapterState::Configured,
                AdapterState::Solved,
                AdapterState::Failed,
                AdapterState::Committed,
            ],
        )?;

        match self.pull_solve_push(interface) {
            Ok(()) => {
                self.state = AdapterState::Solved;
                Ok(())
            }
            Err(err) => {
                log::warn!("Solver \"{}\" failed to solve step: {err}", self.name);
                self.state = AdapterState::Failed;
                Err(err)
            }
        }
    }

    fn pull_solve_push(&mut self, interface: &mut impl CouplingInterface) -> Result<(), Error> {
        let root_point_displacement = interface.get_scalar(ROOT_POINT_DISPLACEMENT, 0)?;
        let load = interface.get_scalar(CouplingVariable::Force.name(), 0)?;

        self.solver.set_value(
            SolverVariable::RootPointDisplacement,
            0,
            root_point_displacement,
        )?;
        self.solver.set_value(SolverVariable::Load, 0, load)?;

        self.solver.solve_solution_step()?;

        interface.set_scalar(
            CouplingVariable::Displacement.name(),
            0,
            self.solver.get_value(SolverVariable::Displacement, 0)?,
        )?;
        interface.set_scalar(
            CouplingVariable::Reaction.name(),
            0,
            self.solver.get_value(SolverVariable::Reaction, 0)?,
        )?;

        Ok(())
    }

    /// Commit the current step and start the next one at `current_time + time_step`.
    ///
    /// Every committed step except the initial one must have been solved, so advancing is only
    /// accepted once after `check` and then once after each successful solve.
    ///
    /// Returns the time of the new step.
    pub fn advance_in_time(&mut self, current_time: f64) -> Result<f64, Error> {
        self.require(
            "advance in time",
            &[AdapterState::Configured, AdapterState::Solved],
        )?;
        let time = self.solver.advance_in_time(current_time);
        self.state = AdapterState::Committed;
        Ok(time)
    }

    /// Commit the current step and start the next one. Returns the time of the new step.
    pub fn advance_step(&mut self) -> Result<f64, Error> {
        self.advance_in_time(self.solver.time())
    }

    /// Tear down the adapter. No further operation is accepted afterwards.
    pub fn finalize(&mut self) -> Result<(), Error> {
        if self.state == AdapterState::Finalized {
            return Err(Error::Lifecycle {
                operation: "finalize",
                state: self.state,
            });
        }
        log::debug!("Finalized solver \"{}\" at t = {}", self.name, self.solver.time());
        self.state = AdapterState::Finalized;
        Ok(())
    }
}
