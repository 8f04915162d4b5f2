//! Construction configuration and the validated, immutable solver parameters.

use crate::Error;

/// Selects the equation the solver enforces each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SolverKind {
    /// Equilibrium only: `stiffness * (displacement - root) = load`
    #[default]
    Static,
    /// Implicit time integration of `m*a + c*v + k*(u - r) = load`
    Dynamic,
}

/// Options used to construct a solver.
///
/// Unset optional values fall back to their documented defaults. The configuration is validated
/// exactly once, by [`SolverParameters::new_from_config`].
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfig {
    pub kind: SolverKind,
    /// Spring stiffness. Required, must be positive.
    pub stiffness: Option<f64>,
    /// Required for [`SolverKind::Dynamic`], ignored for [`SolverKind::Static`].
    pub mass: Option<f64>,
    /// Viscous damping, defaults to 0.
    pub damping: Option<f64>,
    /// Required for [`SolverKind::Dynamic`]. A static solver without a time step advances in
    /// unit pseudo-time.
    pub time_step: Option<f64>,
    pub start_time: f64,
    pub initial_displacement: f64,
    pub initial_velocity: f64,
    pub initial_root_point_displacement: f64,
    /// Number of steps retained in the history, including the current one.
    pub buffer_size: usize,
    /// Bossak parameter on the inertia term.
    pub alpha_m: f64,
    /// Generalized-alpha parameter on the internal and external forces.
    pub alpha_f: f64,
    pub max_iterations: usize,
    /// Relative residual tolerance of the dynamic solve.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            kind: SolverKind::Static,
            stiffness: None,
            mass: None,
            damping: None,
            time_step: None,
            start_time: 0.0,
            initial_displacement: 0.0,
            initial_velocity: 0.0,
            initial_root_point_displacement: 0.0,
            buffer_size: SolverParameters::DEFAULT_BUFFER_SIZE,
            alpha_m: 0.0,
            alpha_f: 0.0,
            max_iterations: DynamicParameters::DEFAULT_MAX_ITERATIONS,
            tolerance: DynamicParameters::DEFAULT_TOLERANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialConditions {
    pub displacement: f64,
    pub velocity: f64,
    pub root_point_displacement: f64,
}

/// Parameters only meaningful for [`SolverKind::Dynamic`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicParameters {
    pub mass: f64,
    pub time_step: f64,
    pub alpha_m: f64,
    pub alpha_f: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl DynamicParameters {
    pub const DEFAULT_MAX_ITERATIONS: usize = 10;
    pub const DEFAULT_TOLERANCE: f64 = 1e-10;

    /// Newmark `beta` of the generalized-alpha family.
    pub fn beta(&self) -> f64 {
        0.25 * (1.0 - self.alpha_m + self.alpha_f).powi(2)
    }

    /// Newmark `gamma` of the generalized-alpha family.
    pub fn gamma(&self) -> f64 {
        0.5 - self.alpha_m + self.alpha_f
    }
}

/// Validated solver parameters, immutable after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    stiffness: f64,
    damping: f64,
    time_step: Option<f64>,
    start_time: f64,
    buffer_size: usize,
    initial: InitialConditions,
    dynamic: Option<DynamicParameters>,
}

fn require_finite(name: &str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Configuration(format!("`{name}` must be finite, got {value}")))
    }
}

fn require_positive(name: &str, value: Option<f64>) -> Result<f64, Error> {
    let value = value.ok_or_else(|| Error::Configuration(format!("`{name}` is required")))?;
    if require_finite(name, value)? > 0.0 {
        Ok(value)
    } else {
        Err(Error::Configuration(format!("`{name}` must be positive, got {value}")))
    }
}

impl SolverParameters {
    pub const DEFAULT_BUFFER_SIZE: usize = 3;
    pub const MIN_BUFFER_SIZE: usize = 2;

    pub fn new_from_config(config: &SolverConfig) -> Result<Self, Error> {
        let stiffness = require_positive("stiffness", config.stiffness)?;

        let damping = require_finite("damping", config.damping.unwrap_or(0.0))?;
        if damping < 0.0 {
            return Err(Error::Configuration(format!(
                "`damping` must not be negative, got {damping}"
            )));
        }

        let time_step = config
            .time_step
            .map(|dt| require_positive("time_step", Some(dt)))
            .transpose()?;

        if config.buffer_size < Self::MIN_BUFFER_SIZE {
            return Err(Error::Configuration(format!(
                "`buffer_size` must be at least {}, got {}",
                Self::MIN_BUFFER_SIZE,
                config.buffer_size
            )));
        }

        let initial = InitialConditions {
            displacement: require_finite("initial_displacement", config.initial_displacement)?,
            velocity: require_finite("initial_velocity", config.initial_velocity)?,
            root_point_displacement: require_finite(
                "initial_root_point_displacement",
                config.initial_root_point_displacement,
            )?,
        };

        let dynamic = match config.kind {
            SolverKind::Static => {
                if config.mass.is_some() {
                    log::debug!("Ignoring `mass` for a static solver");
                }
                None
            }
            SolverKind::Dynamic => {
                let alpha_m = require_finite("alpha_m", config.alpha_m)?;
                let alpha_f = require_finite("alpha_f", config.alpha_f)?;
                // Unconditional stability of the generalized-alpha family
                if !(alpha_m <= alpha_f && alpha_f <= 0.5) {
                    return Err(Error::Configuration(format!(
                        "`alpha_m` <= `alpha_f` <= 0.5 is required, got alpha_m = {alpha_m}, alpha_f = {alpha_f}"
                    )));
                }
                Some(DynamicParameters {
                    mass: require_positive("mass", config.mass)?,
                    time_step: time_step.ok_or_else(|| {
                        Error::Configuration("`time_step` is required for a dynamic solver".into())
                    })?,
                    alpha_m,
                    alpha_f,
                    max_iterations: config.max_iterations,
                    tolerance: require_positive("tolerance", Some(config.tolerance))?,
                })
            }
        };

        Ok(Self {
            stiffness,
            damping,
            time_step,
            start_time: require_finite("start_time", config.start_time)?,
            buffer_size: config.buffer_size,
            initial,
            dynamic,
        })
    }

    pub fn kind(&self) -> SolverKind {
        if self.dynamic.is_some() {
            SolverKind::Dynamic
        } else {
            SolverKind::Static
        }
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> Option<f64> {
        self.dynamic.as_ref().map(|d| d.mass)
    }

    pub fn time_step(&self) -> Option<f64> {
        self.time_step
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn initial(&self) -> &InitialConditions {
        &self.initial
    }

    pub fn dynamic(&self) -> Option<&DynamicParameters> {
        self.dynamic.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic_config() -> SolverConfig {
        SolverConfig {
            kind: SolverKind::Dynamic,
            stiffness: Some(100.0),
            mass: Some(1.0),
            time_step: Some(0.01),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let params = SolverParameters::new_from_config(&SolverConfig {
            stiffness: Some(1.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.kind(), SolverKind::Static);
        assert_eq!(params.damping(), 0.0);
        assert_eq!(params.mass(), None);
        assert_eq!(params.time_step(), None);
        assert_eq!(params.buffer_size(), 3);
        assert_eq!(
            params.initial(),
            &InitialConditions {
                displacement: 0.0,
                velocity: 0.0,
                root_point_displacement: 0.0
            }
        );
    }

    #[test]
    fn test_static_ignores_mass() {
        let params = SolverParameters::new_from_config(&SolverConfig {
            stiffness: Some(1.0),
            mass: Some(-1.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(params.mass(), None);
    }

    #[test]
    fn test_missing_stiffness() {
        let err = SolverParameters::new_from_config(&SolverConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Configuration(msg) if msg.contains("stiffness")));
    }

    #[test]
    fn test_dynamic_requirements() {
        let params = SolverParameters::new_from_config(&dynamic_config()).unwrap();
        let dynamic = params.dynamic().unwrap();
        assert_eq!(dynamic.beta(), 0.25);
        assert_eq!(dynamic.gamma(), 0.5);

        let no_mass = SolverConfig {
            mass: None,
            ..dynamic_config()
        };
        assert!(matches!(
            SolverParameters::new_from_config(&no_mass),
            Err(Error::Configuration(msg)) if msg.contains("mass")
        ));

        let no_dt = SolverConfig {
            time_step: None,
            ..dynamic_config()
        };
        assert!(matches!(
            SolverParameters::new_from_config(&no_dt),
            Err(Error::Configuration(msg)) if msg.contains("time_step")
        ));
    }

    #[test]
    fn test_bossak_coefficients() {
        let params = SolverParameters::new_from_config(&SolverConfig {
            alpha_m: -0.3,
            ..dynamic_config()
        })
        .unwrap();
        let dynamic = params.dynamic().unwrap();
        assert!((dynamic.beta() - 0.4225).abs() < 1e-15);
        assert!((dynamic.gamma() - 0.8).abs() < 1e-15);

        let unstable = SolverConfig {
            alpha_m: 0.2,
            alpha_f: 0.0,
            ..dynamic_config()
        };
        assert!(SolverParameters::new_from_config(&unstable).is_err());
    }

    #[test]
    fn test_invalid_values() {
        for config in [
            SolverConfig {
                stiffness: Some(f64::NAN),
                ..Default::default()
            },
            SolverConfig {
                stiffness: Some(1.0),
                damping: Some(-0.1),
                ..Default::default()
            },
            SolverConfig {
                stiffness: Some(1.0),
                buffer_size: 1,
                ..Default::default()
            },
            SolverConfig {
                stiffness: Some(1.0),
                time_step: Some(0.0),
                ..Default::default()
            },
            SolverConfig {
                stiffness: Some(1.0),
                initial_velocity: f64::INFINITY,
                ..Default::default()
            },
            SolverConfig {
                tolerance: 0.0,
                ..dynamic_config()
            },
        ] {
            assert!(
                matches!(
                    SolverParameters::new_from_config(&config),
                    Err(Error::Configuration(_))
                ),
                "{config:?} should be rejected"
            );
        }
    }
}
