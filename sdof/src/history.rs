//! Fixed-depth ledger of per-step solver values.

use std::collections::VecDeque;

use crate::{SolverVariable, StateAccessError};

/// The values of all [`SolverVariable`]s at a single step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepRecord {
    pub load: f64,
    pub root_point_displacement: f64,
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub reaction: f64,
}

impl StepRecord {
    pub fn get(&self, variable: SolverVariable) -> f64 {
        match variable {
            SolverVariable::Load => self.load,
            SolverVariable::RootPointDisplacement => self.root_point_displacement,
            SolverVariable::Displacement => self.displacement,
            SolverVariable::Velocity => self.velocity,
            SolverVariable::Acceleration => self.acceleration,
            SolverVariable::Reaction => self.reaction,
        }
    }

    pub fn set(&mut self, variable: SolverVariable, value: f64) {
        let slot = match variable {
            SolverVariable::Load => &mut self.load,
            SolverVariable::RootPointDisplacement => &mut self.root_point_displacement,
            SolverVariable::Displacement => &mut self.displacement,
            SolverVariable::Velocity => &mut self.velocity,
            SolverVariable::Acceleration => &mut self.acceleration,
            SolverVariable::Reaction => &mut self.reaction,
        };
        *slot = value;
    }
}

/// A bounded history of [`StepRecord`]s.
///
/// Offset 0 is the current step and is the only mutable record. Offsets `1..depth` hold committed
/// steps, most recent first. All `depth` slots exist from construction on, seeded with the initial
/// record, so any offset below `depth` can always be read.
#[derive(Clone, Debug, PartialEq)]
pub struct SolutionStepHistory {
    records: VecDeque<StepRecord>,
    depth: usize,
}

impl SolutionStepHistory {
    /// Create a new history of `depth` records, all initialized to `initial`.
    ///
    /// # Panics
    ///
    /// Panics if `depth < 2`. The history must hold the current step and at least one committed
    /// step.
    pub fn new(depth: usize, initial: StepRecord) -> Self {
        assert!(depth >= 2, "history depth must be >= 2, got {depth}");
        Self {
            records: std::iter::repeat(initial).take(depth).collect(),
            depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the record at `offset` steps back from the current one.
    pub fn record(&self, offset: usize) -> Result<&StepRecord, StateAccessError> {
        self.records
            .get(offset)
            .ok_or(StateAccessError::OffsetOutOfRange {
                offset,
                depth: self.depth,
            })
    }

    /// The current (offset 0) record.
    pub fn current(&self) -> &StepRecord {
        &self.records[0]
    }

    pub fn current_mut(&mut self) -> &mut StepRecord {
        &mut self.records[0]
    }

    /// The most recently committed (offset 1) record.
    pub fn previous(&self) -> &StepRecord {
        &self.records[1]
    }

    pub fn get(&self, variable: SolverVariable, offset: usize) -> Result<f64, StateAccessError> {
        self.record(offset).map(|record| record.get(variable))
    }

    /// Set a value of the current step. Committed offsets are rejected.
    pub fn set(
        &mut self,
        variable: SolverVariable,
        offset: usize,
        value: f64,
    ) -> Result<(), StateAccessError> {
        match offset {
            0 => {
                self.current_mut().set(variable, value);
                Ok(())
            }
            offset if offset < self.depth => Err(StateAccessError::ReadOnly { variable, offset }),
            offset => Err(StateAccessError::OffsetOutOfRange {
                offset,
                depth: self.depth,
            }),
        }
    }

    /// Commit the current step.
    ///
    /// Every record moves one offset back, the oldest is dropped and a new current record is
    /// seeded with a copy of the values just committed.
    pub fn advance(&mut self) {
        let seed = *self.current();
        self.records.push_front(seed);
        self.records.truncate(self.depth);
    }

    /// Iterate the records from the current one (offset 0) to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &StepRecord> + '_ {
        self.records.iter()
    }
}
