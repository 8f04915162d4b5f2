use std::sync::Arc;

use arrow::{
    array::{ArrayRef, Float64Builder},
    datatypes::{DataType, Field, Schema, SchemaRef},
    error::ArrowError,
    record_batch::RecordBatch,
};
use sdof::{SdofSolver, SolverVariable};

/// Records the current step of an [`SdofSolver`] into one `Float64` column per variable, after a
/// leading `time` column.
pub struct RecorderState {
    output_schema: SchemaRef,
    time: Float64Builder,
    recorders: Vec<(SolverVariable, Float64Builder)>,
}

impl RecorderState {
    pub fn new(num_points: usize) -> Self {
        let fields = std::iter::once(Field::new("time", DataType::Float64, false))
            .chain(
                SolverVariable::ALL
                    .iter()
                    .map(|var| Field::new(var.name().to_lowercase(), DataType::Float64, false)),
            )
            .collect::<Vec<_>>();

        let recorders = SolverVariable::ALL
            .iter()
            .map(|&var| (var, Float64Builder::with_capacity(num_points)))
            .collect();

        Self {
            output_schema: Arc::new(Schema::new(fields)),
            time: Float64Builder::with_capacity(num_points),
            recorders,
        }
    }

    pub fn record_variables(&mut self, solver: &SdofSolver, time: f64) -> Result<(), sdof::Error> {
        log::trace!("Recording variables at time {time}");

        for (var, builder) in &mut self.recorders {
            builder.append_value(solver.get_value(*var, 0)?);
        }
        self.time.append_value(time);
        Ok(())
    }

    /// Finish the output state and return the RecordBatch.
    pub fn finish(mut self) -> Result<RecordBatch, ArrowError> {
        let columns = std::iter::once(Arc::new(self.time.finish()) as ArrayRef)
            .chain(
                self.recorders
                    .iter_mut()
                    .map(|(_, builder)| Arc::new(builder.finish()) as ArrayRef),
            )
            .collect::<Vec<_>>();

        RecordBatch::try_new(self.output_schema, columns)
    }
}
