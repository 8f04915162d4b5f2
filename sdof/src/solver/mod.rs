use crate::{
    history::{SolutionStepHistory, StepRecord},
    Error, SolverConfig, SolverKind, SolverParameters, SolverVariable,
};

mod newmark;
mod static_equilibrium;

pub use newmark::Newmark;
pub use static_equilibrium::StaticEquilibrium;

pub trait Scheme {
    /// Complete the initial record from the initial conditions.
    fn initialize(&self, record: &mut StepRecord);

    /// Solve the current step.
    ///
    /// Reads the inputs (load and root point displacement) of offset 0 and the committed state at
    /// offset 1, and overwrites every output of offset 0.
    fn solve(&self, history: &mut SolutionStepHistory) -> Result<(), Error>;
}

/// The equation selected at construction.
#[derive(Clone, Debug)]
enum Equation {
    Static(StaticEquilibrium),
    Dynamic(Newmark),
}

impl Scheme for Equation {
    fn initialize(&self, record: &mut StepRecord) {
        match self {
            Equation::Static(scheme) => scheme.initialize(record),
            Equation::Dynamic(scheme) => scheme.initialize(record),
        }
    }

    fn solve(&self, history: &mut SolutionStepHistory) -> Result<(), Error> {
        match self {
            Equation::Static(scheme) => scheme.solve(history),
            Equation::Dynamic(scheme) => scheme.solve(history),
        }
    }
}

/// A single-degree-of-freedom structural solver owning its step history.
#[derive(Clone, Debug)]
pub struct SdofSolver {
    params: SolverParameters,
    equation: Equation,
    history: SolutionStepHistory,
    time: f64,
}

impl SdofSolver {
    /// Validate `config` and create a new solver. No solver exists if validation fails.
    pub fn new(config: &SolverConfig) -> Result<Self, Error> {
        SolverParameters::new_from_config(config).map(Self::from_parameters)
    }

    pub fn from_parameters(params: SolverParameters) -> Self {
        let equation = match params.dynamic() {
            Some(dynamic) => Equation::Dynamic(Newmark::new(
                params.stiffness(),
                params.damping(),
                *dynamic,
            )),
            None => Equation::Static(StaticEquilibrium::new(params.stiffness())),
        };

        let initial = params.initial();
        let mut record = StepRecord {
            root_point_displacement: initial.root_point_displacement,
            displacement: initial.displacement,
            velocity: initial.velocity,
            ..Default::default()
        };
        equation.initialize(&mut record);

        log::debug!(
            "Created {:?} SDOF solver with k = {}, initial state {record:?}",
            params.kind(),
            params.stiffness()
        );

        Self {
            history: SolutionStepHistory::new(params.buffer_size(), record),
            time: params.start_time(),
            equation,
            params,
        }
    }

    pub fn kind(&self) -> SolverKind {
        self.params.kind()
    }

    pub fn parameters(&self) -> &SolverParameters {
        &self.params
    }

    pub fn history(&self) -> &SolutionStepHistory {
        &self.history
    }

    /// Time of the current step.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_value(
        &mut self,
        variable: SolverVariable,
        offset: usize,
        value: f64,
    ) -> Result<(), Error> {
        Ok(self.history.set(variable, offset, value)?)
    }

    pub fn get_value(&self, variable: SolverVariable, offset: usize) -> Result<f64, Error> {
        Ok(self.history.get(variable, offset)?)
    }

    /// Set a value by its registered name, e.g. `"ROOT_POINT_DISPLACEMENT"`.
    pub fn set_value_by_name(&mut self, name: &str, offset: usize, value: f64) -> Result<(), Error> {
        self.set_value(name.parse()?, offset, value)
    }

    /// Get a value by its registered name, e.g. `"REACTION"`.
    pub fn get_value_by_name(&self, name: &str, offset: usize) -> Result<f64, Error> {
        self.get_value(name.parse()?, offset)
    }

    /// Solve the current step in place.
    ///
    /// Calling this repeatedly without changing the inputs yields identical outputs. On error the
    /// outputs of offset 0 are unspecified and the step must be solved again before advancing.
    pub fn solve_solution_step(&mut self) -> Result<(), Error> {
        log::trace!(
            "Solving step at t = {}: load = {}, root point displacement = {}",
            self.time,
            self.history.current().load,
            self.history.current().root_point_displacement
        );
        self.equation.solve(&mut self.history)
    }

    /// Commit the current step and start the next one at `current_time + time_step`.
    ///
    /// Returns the time of the new step.
    pub fn advance_in_time(&mut self, current_time: f64) -> f64 {
        self.history.advance();
        self.time = current_time + self.params.time_step().unwrap_or(1.0);
        log::debug!("Advanced SDOF solver to t = {}", self.time);
        self.time
    }

    /// Commit the current step and start the next one.
    ///
    /// Returns the time of the new step.
    pub fn advance_step(&mut self) -> f64 {
        self.advance_in_time(self.time)
    }
}
