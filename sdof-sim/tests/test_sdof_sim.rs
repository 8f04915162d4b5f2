use arrow::{
    array::{AsArray, Float64Array},
    datatypes::Float64Type,
    record_batch::RecordBatch,
};
use assert_cmd::Command;
use clap::Parser;
use float_cmp::approx_eq;
use rstest::rstest;
use sdof_sim::{options::SdofSimOptions, simulate, Error};

fn column<'a>(batch: &'a RecordBatch, name: &str) -> &'a Float64Array {
    batch
        .column_by_name(name)
        .unwrap_or_else(|| panic!("missing column {name}"))
        .as_primitive::<Float64Type>()
}

fn run(args: &[&str]) -> Result<RecordBatch, Error> {
    let options =
        SdofSimOptions::try_parse_from(std::iter::once("sdof-sim").chain(args.iter().copied()))
            .unwrap();
    simulate(&options)
}

#[test_log::test]
fn test_static_constant_load() {
    let batch = run(&["-k", "1000", "--load", "500", "-t", "0.1"]).unwrap();
    assert_eq!(batch.num_rows(), 11);

    let time = column(&batch, "time");
    let displacement = column(&batch, "displacement");
    let reaction = column(&batch, "reaction");

    // The initial state is recorded before any load is applied
    assert_eq!(displacement.value(0), 0.0);
    // Communication points are computed from the start time, not accumulated
    assert_eq!(time.value(10), 1.0);

    for row in 1..batch.num_rows() {
        assert_eq!(displacement.value(row), 0.5);
        assert_eq!(reaction.value(row), 500.0);
        assert_eq!(column(&batch, "velocity").value(row), 0.0);
    }
}

#[test]
fn test_static_step_and_support_excitation() {
    let batch = run(&[
        "-k",
        "200",
        "--load",
        "50",
        "--load-signal",
        "step",
        "--load-onset",
        "0.5",
        "--root-displacement",
        "0.5",
        "-t",
        "0.25",
    ])
    .unwrap();

    let displacement = column(&batch, "displacement");
    let root = column(&batch, "root_point_displacement");
    assert_eq!(batch.num_rows(), 5);

    // t = 0.25: only the support has moved
    assert_eq!(root.value(1), 0.5);
    assert_eq!(displacement.value(1), 0.5);
    // t = 0.5 onwards: support and load
    assert_eq!(displacement.value(2), 0.75);
    assert_eq!(displacement.value(4), 0.75);
}

#[test_log::test]
fn test_dynamic_settles_to_static() {
    let batch = run(&[
        "-k", "100", "-m", "1", "-c", "20", "--dynamic", "--load", "5", "-s", "10",
    ])
    .unwrap();
    assert_eq!(batch.num_rows(), 1001);

    let last = batch.num_rows() - 1;
    assert!(approx_eq!(
        f64,
        column(&batch, "displacement").value(last),
        0.05,
        epsilon = 1e-8
    ));
    assert!(approx_eq!(
        f64,
        column(&batch, "reaction").value(last),
        5.0,
        epsilon = 1e-6
    ));
}

#[test]
fn test_sine_load_oscillates() {
    let batch = run(&[
        "-k",
        "10",
        "--load",
        "10",
        "--load-signal",
        "sine",
        "--load-frequency",
        "1",
        "-t",
        "0.25",
    ])
    .unwrap();

    let displacement = column(&batch, "displacement");
    assert!(approx_eq!(f64, displacement.value(1), 1.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, displacement.value(3), -1.0, epsilon = 1e-12));
}

#[rstest]
#[case(&["-k", "0"])]
#[case(&["-k", "100", "--dynamic"])]
#[case(&["-k", "100", "--buffer-size", "1"])]
fn test_invalid_solver_configuration(#[case] args: &[&str]) {
    assert!(matches!(
        run(args),
        Err(Error::Solver(sdof::Error::Configuration(_)))
    ));
}

#[rstest]
#[case(&["-k", "100", "--start-time", "2", "-s", "1"])]
#[case(&["-k", "100", "-t", "0"])]
#[case(&["-k", "1", "-s", "1e300", "-t", "1e-300"])]
#[case(&["-k", "1", "-s", "1e9", "-t", "1e-3"])]
fn test_invalid_simulation_options(#[case] args: &[&str]) {
    assert!(matches!(run(args), Err(Error::InvalidOptions(_))));
}

#[test]
fn test_cli_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    Command::cargo_bin("sdof-sim")
        .unwrap()
        .args(["-k", "1000", "--load", "500", "-t", "0.1", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("time,load,root_point_displacement,displacement,velocity,acceleration,reaction")
    );
    assert_eq!(lines.count(), 11);
}

#[test]
fn test_cli_rejects_missing_stiffness() {
    Command::cargo_bin("sdof-sim")
        .unwrap()
        .assert()
        .failure();
}
