//! Test the static SDOF solver.

use assert_approx_eq::assert_approx_eq;
use rstest::rstest;
use sdof::{Error, SdofSolver, SolverConfig, SolverKind, SolverVariable};

fn solver(stiffness: f64) -> SdofSolver {
    SdofSolver::new(&SolverConfig {
        kind: SolverKind::Static,
        stiffness: Some(stiffness),
        ..Default::default()
    })
    .unwrap()
}

#[rstest]
#[case(1000.0, 500.0, 0.0)]
#[case(1000.0, 0.0, 0.0)]
#[case(1.0e7, -2.5e4, 0.02)]
#[case(3.3, 1.0e-3, -1.5)]
#[case(250.0, 12.5, 1.0e3)]
fn test_equilibrium(#[case] stiffness: f64, #[case] load: f64, #[case] root: f64) {
    let mut solver = solver(stiffness);
    solver
        .set_value(SolverVariable::RootPointDisplacement, 0, root)
        .unwrap();
    solver.set_value(SolverVariable::Load, 0, load).unwrap();
    solver.solve_solution_step().unwrap();

    let displacement = solver.get_value(SolverVariable::Displacement, 0).unwrap();
    let tol = 1e-12 * load.abs().max(stiffness * root.abs()).max(1.0);
    assert_approx_eq!(stiffness * (displacement - root), load, tol);
    assert_eq!(solver.get_value(SolverVariable::Reaction, 0).unwrap(), load);
}

#[test_log::test]
fn test_scenario() {
    let mut solver = solver(1000.0);

    solver.set_value(SolverVariable::Load, 0, 500.0).unwrap();
    solver.solve_solution_step().unwrap();
    assert_eq!(solver.get_value(SolverVariable::Displacement, 0).unwrap(), 0.5);
    assert_eq!(solver.get_value(SolverVariable::Reaction, 0).unwrap(), 500.0);

    solver.set_value(SolverVariable::Load, 0, 0.0).unwrap();
    solver.solve_solution_step().unwrap();
    assert_eq!(solver.get_value(SolverVariable::Displacement, 0).unwrap(), 0.0);
    assert_eq!(solver.get_value(SolverVariable::Reaction, 0).unwrap(), 0.0);
}

#[test]
fn test_idempotent() {
    let mut solver = solver(123.4);
    solver.set_value(SolverVariable::Load, 0, 7.7).unwrap();
    solver
        .set_value(SolverVariable::RootPointDisplacement, 0, 0.1)
        .unwrap();

    solver.solve_solution_step().unwrap();
    let first = *solver.history().current();
    solver.solve_solution_step().unwrap();
    let second = *solver.history().current();

    for var in SolverVariable::ALL {
        assert_eq!(first.get(var).to_bits(), second.get(var).to_bits(), "{var}");
    }
}

#[rstest]
#[case(Some(0.0))]
#[case(Some(-1000.0))]
#[case(None)]
fn test_invalid_stiffness(#[case] stiffness: Option<f64>) {
    let result = SdofSolver::new(&SolverConfig {
        stiffness,
        ..Default::default()
    });
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test_log::test]
fn test_history() {
    let mut solver = solver(10.0);

    let loads = [1.0, 2.0, 3.0];
    for (i, load) in loads.iter().enumerate() {
        if i > 0 {
            solver.advance_step();
        }
        solver.set_value(SolverVariable::Load, 0, *load).unwrap();
        solver.solve_solution_step().unwrap();
    }

    // After two advances offset 2 holds what was current two advances earlier
    assert_eq!(solver.get_value(SolverVariable::Load, 2).unwrap(), 1.0);
    assert_eq!(solver.get_value(SolverVariable::Displacement, 2).unwrap(), 0.1);
    assert_eq!(solver.get_value(SolverVariable::Load, 1).unwrap(), 2.0);
    assert_eq!(solver.get_value(SolverVariable::Load, 0).unwrap(), 3.0);

    // Committed values are read only
    assert!(matches!(
        solver.set_value(SolverVariable::Load, 1, 0.0),
        Err(Error::StateAccess(_))
    ));
    assert!(matches!(
        solver.get_value(SolverVariable::Load, 3),
        Err(Error::StateAccess(_))
    ));
}

#[test]
fn test_retry_keeps_committed_state() {
    let mut solver = solver(100.0);
    solver.set_value(SolverVariable::Load, 0, 50.0).unwrap();
    solver.solve_solution_step().unwrap();
    solver.advance_step();

    // Several coupling iterations on the same step
    for load in [10.0, 20.0, 30.0] {
        solver.set_value(SolverVariable::Load, 0, load).unwrap();
        solver.solve_solution_step().unwrap();
        assert_eq!(solver.get_value(SolverVariable::Displacement, 1).unwrap(), 0.5);
    }
    assert_eq!(solver.get_value(SolverVariable::Displacement, 0).unwrap(), 0.3);
}
