use crate::{options::SdofSimOptions, Error};

pub struct SimParams {
    pub start_time: f64,
    pub stop_time: f64,
    pub time_step: f64,
    /// Number of communication steps between `start_time` and `stop_time`
    pub num_steps: usize,
}

impl SimParams {
    /// Upper bound on the number of communication steps of one run
    pub const MAX_STEPS: usize = 10_000_000;

    pub fn new_from_options(options: &SdofSimOptions) -> Result<Self, Error> {
        let start_time = options.integration.start_time;
        let stop_time = options.integration.stop_time;
        let time_step = options.integration.time_step;

        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(Error::InvalidOptions(
                "`time_step` must be positive.".to_owned(),
            ));
        }

        if !(stop_time.is_finite() && start_time.is_finite()) || stop_time < start_time {
            return Err(Error::InvalidOptions(format!(
                "`stop_time` ({stop_time}) must not precede `start_time` ({start_time})."
            )));
        }

        let num_steps = ((stop_time - start_time) / time_step).round();
        if !(num_steps.is_finite() && num_steps <= Self::MAX_STEPS as f64) {
            return Err(Error::InvalidOptions(format!(
                "{num_steps} steps of {time_step} from {start_time} to {stop_time} exceed the limit of {}.",
                Self::MAX_STEPS
            )));
        }
        let num_steps = num_steps as usize;

        Ok(Self {
            start_time,
            stop_time,
            time_step,
            num_steps,
        })
    }

    /// Time of the communication point `n` steps after `start_time`.
    pub fn time_at(&self, n: usize) -> f64 {
        self.start_time + n as f64 * self.time_step
    }
}
