//! Prescribed excitation signals.

use std::f64::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SignalShape {
    /// `amplitude` at all times
    #[default]
    Constant,
    /// 0 before `onset`, `amplitude` from then on
    Step,
    /// 0 before `onset`, `amplitude * sin(2π f (t - onset))` from then on
    Sine,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal {
    pub shape: SignalShape,
    pub amplitude: f64,
    pub frequency: f64,
    pub onset: f64,
}

impl Signal {
    pub fn value(&self, time: f64) -> f64 {
        match self.shape {
            SignalShape::Constant => self.amplitude,
            _ if time < self.onset => 0.0,
            SignalShape::Step => self.amplitude,
            SignalShape::Sine => self.amplitude * (TAU * self.frequency * (time - self.onset)).sin(),
        }
    }
}
