use clap::Parser;
use skillforge::config::{Config, FootprintConfig, ParallelConfig};
use skillforge::{Boundary, BoundaryMode, Footprint, FootprintSpec, SkillError};
use std::str::FromStr;

// Stand-in for a host binary that flattens the verification settings.
#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> Result<Config, clap::Error> {
    let argv = std::iter::once("skill").chain(args.iter().copied());
    TestCli::try_parse_from(argv).map(|cli| cli.config)
}

#[test]
fn test_cli_width() {
    let config = parse(&["--width", "5"]).unwrap();
    assert_eq!(config.footprint.resolve().unwrap(), Footprint::Box(5));
    assert_eq!(config.parallel.min_parallel_rows, 64);
}

#[test]
fn test_cli_radius_and_threshold() {
    let config = parse(&["--radius", "3", "--min-parallel-rows", "8"]).unwrap();
    assert_eq!(config.footprint.resolve().unwrap(), Footprint::Circular(3));
    assert_eq!(config.parallel.min_parallel_rows, 8);
}

#[test]
fn test_cli_boundary_defaults_to_zero_padding() {
    let config = parse(&["--width", "3"]).unwrap();
    assert_eq!(config.footprint.boundary(), Boundary::constant(0.0));
}

#[test]
fn test_cli_boundary_options() {
    let config = parse(&["--radius", "2", "--boundary", "reflect"]).unwrap();
    assert_eq!(config.footprint.boundary(), Boundary::of(BoundaryMode::Reflect));

    let config = parse(&["--width", "3", "--boundary", "Constant", "--cval", "0.5"]).unwrap();
    assert_eq!(config.footprint.boundary(), Boundary::constant(0.5));

    assert!(parse(&["--width", "3", "--boundary", "smear"]).is_err());
}

#[test]
fn test_boundary_mode_names() {
    assert_eq!(BoundaryMode::from_str("wrap").unwrap(), BoundaryMode::Wrap);
    assert_eq!(BoundaryMode::from_str("MIRROR").unwrap(), BoundaryMode::Mirror);
    assert_eq!(BoundaryMode::Nearest.to_string(), "nearest");
    assert!(BoundaryMode::from_str("periodic").is_err());
}

#[test]
fn test_cli_rejects_width_with_radius() {
    assert!(parse(&["--width", "5", "--radius", "2"]).is_err());
}

#[test]
fn test_cli_without_footprint_fails_on_resolve() {
    let config = parse(&[]).unwrap();
    assert!(matches!(
        config.footprint.resolve(),
        Err(SkillError::InvalidParameters(_))
    ));
}

#[test]
fn test_deserialize_fills_defaults() {
    let config: Config = serde_json::from_str(r#"{"footprint": {"radius": 2}}"#).unwrap();
    assert_eq!(config.footprint.radius, Some(2));
    assert_eq!(config.footprint.width, None);
    assert_eq!(config.parallel, ParallelConfig::default());

    let empty: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Config::default());

    let wrapped: Config =
        serde_json::from_str(r#"{"footprint": {"width": 5, "boundary": "wrap"}}"#).unwrap();
    assert_eq!(wrapped.footprint.boundary(), Boundary::of(BoundaryMode::Wrap));
}

#[test]
fn test_builder() {
    let fp = FootprintConfig::builder().width(7).build();
    assert_eq!(fp.width, Some(7));
    assert_eq!(fp.radius, None);
    assert_eq!(fp.resolve().unwrap(), Footprint::Box(7));
}

#[test]
fn test_resolve_rejects_zero_size() {
    let fp = FootprintConfig::builder().radius(0).build();
    assert!(matches!(fp.resolve(), Err(SkillError::InvalidParameters(_))));
}

#[test]
fn test_parallel_presets() {
    assert_eq!(ParallelConfig::serial().min_parallel_rows, usize::MAX);
    assert_eq!(ParallelConfig::always().min_parallel_rows, 0);
}
