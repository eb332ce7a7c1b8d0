use std::fs;

use fitness_tracker::app::{process, run, training_info, AppError};
use fitness_tracker::config::{self, Config, ConfigError, ErrorPolicy};
use fitness_tracker::i18n::{resolve_language, Translator};
use fitness_tracker::message::MESSAGE_TEMPLATE;
use fitness_tracker::sensor::{default_packages, SensorPackage};
use fitness_tracker::workout::TrainingError;

fn mixed_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("BIKE", vec![1.0, 1.0, 1.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[test]
fn demo_packages_keep_input_order() {
    let report = process(&default_packages(), ErrorPolicy::Abort);
    let types: Vec<_> = report
        .messages()
        .map(|m| m.training_type.as_str())
        .collect();
    assert_eq!(types, ["Swimming", "Running", "SportsWalking"]);
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn abort_policy_stops_at_first_failure() {
    let report = process(&mixed_packages(), ErrorPolicy::Abort);
    assert_eq!(report.entries.len(), 2);
    let failure = report.failures().next().expect("failure");
    assert_eq!(failure.index, 1);
    assert_eq!(failure.workout_type, "BIKE");
    assert_eq!(failure.source, TrainingError::UnknownType("BIKE".into()));
}

#[test]
fn skip_policy_continues_after_failure() {
    let report = process(&mixed_packages(), ErrorPolicy::Skip);
    assert_eq!(report.entries.len(), 3);
    assert_eq!(report.messages().count(), 2);
    assert!(report.entries[1].is_err());
    assert_eq!(
        report.entries[2].as_ref().map(|m| m.training_type.as_str()),
        Ok("SportsWalking")
    );
}

#[test]
fn training_info_matches_direct_calculation() {
    let pkg: SensorPackage = "SWM:720,1,80,25,40".parse().expect("package");
    let info = training_info(&pkg).expect("info");
    assert!((info.calories - 336.0).abs() < 1e-9);
}

#[test]
fn default_config_round_trips_through_toml() {
    let cfg = Config::default();
    let text = cfg.to_toml().expect("serialize");
    assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
}

#[test]
fn partial_config_fills_defaults() {
    let cfg = Config::from_toml(
        r#"
on_error = "skip"

[[packages]]
workout_type = "RUN"
data = [15000, 1, 75]
"#,
    )
    .expect("parse");
    assert_eq!(cfg.on_error, ErrorPolicy::Skip);
    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.packages, vec![SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0])]);
}

#[test]
fn invalid_policy_is_a_parse_error() {
    assert!(Config::from_toml(r#"on_error = "retry""#).is_err());
}

fn run_to_string(policy: ErrorPolicy, packages: &[SensorPackage]) -> (Result<usize, AppError>, String) {
    let cfg = Config {
        on_error: policy,
        ..Config::default()
    };
    let mut out = Vec::new();
    let res = run(&cfg, packages, &Translator::new("en"), &mut out).map(|r| r.entries.len());
    (res, String::from_utf8(out).expect("utf8"))
}

#[test]
fn run_writes_one_line_per_package_in_order() {
    let (res, out) = run_to_string(ErrorPolicy::Abort, &default_packages());
    assert_eq!(res.expect("run"), 3);
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"), "{out}");
    assert!(lines[1].starts_with("Training type: Running;"), "{out}");
    assert!(lines[2].starts_with("Training type: SportsWalking;"), "{out}");
}

#[test]
fn run_abort_reports_failing_index_after_printing_earlier_lines() {
    let (res, out) = run_to_string(ErrorPolicy::Abort, &mixed_packages());
    match res {
        Err(AppError::Package(failure)) => {
            assert_eq!(failure.index, 1);
            assert_eq!(failure.source, TrainingError::UnknownType("BIKE".into()));
        }
        other => panic!("expected package failure, got {other:?}"),
    }
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("Training type: Running;"), "{out}");
}

#[test]
fn run_skip_records_failure_and_keeps_going() {
    let cfg = Config {
        on_error: ErrorPolicy::Skip,
        ..Config::default()
    };
    let mut out = Vec::new();
    let report = run(&cfg, &mixed_packages(), &Translator::new("en"), &mut out).expect("run");
    assert_eq!(report.failures().count(), 1);
    assert_eq!(report.failures().next().map(|f| f.index), Some(1));
    assert_eq!(String::from_utf8(out).expect("utf8").lines().count(), 2);
}

#[test]
fn default_config_prints_english_template() {
    let cfg = Config::default();
    assert_eq!(cfg.language, "en");
    let lang = resolve_language("", Some(cfg.language.as_str()));
    assert_eq!(lang, "en");
    let pkg = &cfg.packages[0];
    let info = training_info(pkg).expect("info");
    assert_eq!(
        info.get_message_with(&Translator::new(&lang)),
        info.render(MESSAGE_TEMPLATE)
    );
}

#[test]
fn missing_config_file_gives_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = config::load_or_default(&dir.path().join("config.toml")).expect("load");
    assert_eq!(cfg, Config::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ru".into(),
        on_error: ErrorPolicy::Skip,
        packages: vec![SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])],
        ..Config::default()
    };
    cfg.save(&path).expect("save");
    assert_eq!(config::load_or_default(&path).expect("load"), cfg);
}

#[test]
fn malformed_config_file_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn write_default_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::write_default(&path, false),
        Err(ConfigError::AlreadyExists(p)) if p == path
    ));
    assert_eq!(fs::read_to_string(&path).expect("read"), "language = [");

    config::write_default(&path, true).expect("forced write");
    assert_eq!(config::load_or_default(&path).expect("load"), Config::default());
}

struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn run_surfaces_output_errors_as_io() {
    let res = run(
        &Config::default(),
        &default_packages(),
        &Translator::new("en"),
        &mut BrokenPipe,
    );
    assert!(matches!(res, Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe));
}
