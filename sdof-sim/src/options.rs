use clap::{Args, Parser};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use sdof::{SolverConfig, SolverKind};

use crate::sim::signal::{Signal, SignalShape};

/// Simulate an SDOF subsystem through its co-simulation adapter
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct SdofSimOptions {
    #[command(flatten)]
    pub system: SystemOptions,

    #[command(flatten)]
    pub integration: IntegrationOptions,

    #[command(flatten)]
    pub excitation: ExcitationOptions,

    /// Simulation result output CSV file name. Default is to print a table to standard output.
    #[arg(short = 'o', long)]
    pub output_file: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Args)]
pub struct SystemOptions {
    /// Spring stiffness
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub stiffness: f64,

    /// Mass, required with `--dynamic`
    #[arg(short = 'm', long)]
    pub mass: Option<f64>,

    /// Viscous damping
    #[arg(short = 'c', long)]
    pub damping: Option<f64>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub initial_displacement: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub initial_velocity: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub initial_root_point_displacement: f64,
}

#[derive(Debug, Args)]
pub struct IntegrationOptions {
    /// Integrate the equation of motion instead of solving for static equilibrium
    #[arg(long)]
    pub dynamic: bool,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub start_time: f64,

    #[arg(short = 's', long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub stop_time: f64,

    /// Communication step size
    #[arg(short = 't', long, default_value_t = 0.01)]
    pub time_step: f64,

    /// Number of steps kept in the solver history
    #[arg(long, default_value_t = sdof::SolverParameters::DEFAULT_BUFFER_SIZE)]
    pub buffer_size: usize,

    /// Bossak parameter, e.g. -0.3
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alpha_m: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alpha_f: f64,

    #[arg(long, default_value_t = sdof::DynamicParameters::DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    #[arg(long, default_value_t = sdof::DynamicParameters::DEFAULT_TOLERANCE)]
    pub tolerance: f64,
}

#[derive(Debug, Args)]
pub struct ExcitationOptions {
    /// Shape of the applied load
    #[arg(long, value_enum, default_value_t = SignalShape::Constant)]
    pub load_signal: SignalShape,

    #[arg(short = 'f', long = "load", default_value_t = 0.0, allow_negative_numbers = true)]
    pub load_amplitude: f64,

    /// Frequency of a `sine` load
    #[arg(long, default_value_t = 1.0)]
    pub load_frequency: f64,

    /// Time at which a `step` or `sine` load starts
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub load_onset: f64,

    /// Shape of the imposed root point displacement
    #[arg(long, value_enum, default_value_t = SignalShape::Constant)]
    pub root_signal: SignalShape,

    #[arg(long = "root-displacement", default_value_t = 0.0, allow_negative_numbers = true)]
    pub root_amplitude: f64,

    #[arg(long, default_value_t = 1.0)]
    pub root_frequency: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub root_onset: f64,
}

impl SdofSimOptions {
    pub fn solver_config(&self) -> SolverConfig {
        let SystemOptions {
            stiffness,
            mass,
            damping,
            initial_displacement,
            initial_velocity,
            initial_root_point_displacement,
        } = self.system;

        SolverConfig {
            kind: if self.integration.dynamic {
                SolverKind::Dynamic
            } else {
                SolverKind::Static
            },
            stiffness: Some(stiffness),
            mass,
            damping,
            time_step: Some(self.integration.time_step),
            start_time: self.integration.start_time,
            initial_displacement,
            initial_velocity,
            initial_root_point_displacement,
            buffer_size: self.integration.buffer_size,
            alpha_m: self.integration.alpha_m,
            alpha_f: self.integration.alpha_f,
            max_iterations: self.integration.max_iterations,
            tolerance: self.integration.tolerance,
        }
    }
}

impl ExcitationOptions {
    pub fn load(&self) -> Signal {
        Signal {
            shape: self.load_signal,
            amplitude: self.load_amplitude,
            frequency: self.load_frequency,
            onset: self.load_onset,
        }
    }

    pub fn root_point_displacement(&self) -> Signal {
        Signal {
            shape: self.root_signal,
            amplitude: self.root_amplitude,
            frequency: self.root_frequency,
            onset: self.root_onset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let options = SdofSimOptions::try_parse_from([
            "sdof-sim",
            "-k",
            "1000",
            "--dynamic",
            "-m",
            "2",
            "--alpha-m",
            "-0.3",
            "--load",
            "-5",
            "--load-signal",
            "sine",
        ])
        .unwrap();

        let config = options.solver_config();
        assert_eq!(config.kind, SolverKind::Dynamic);
        assert_eq!(config.stiffness, Some(1000.0));
        assert_eq!(config.mass, Some(2.0));
        assert_eq!(config.damping, None);
        assert_eq!(config.time_step, Some(0.01));
        assert_eq!(config.alpha_m, -0.3);
        assert_eq!(config.buffer_size, 3);

        let load = options.excitation.load();
        assert_eq!(load.shape, SignalShape::Sine);
        assert_eq!(load.amplitude, -5.0);
        assert_eq!(options.excitation.root_point_displacement().amplitude, 0.0);
    }

    #[test]
    fn test_stiffness_required() {
        assert!(SdofSimOptions::try_parse_from(["sdof-sim"]).is_err());
    }
}
