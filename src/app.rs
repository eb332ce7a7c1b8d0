use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, ErrorPolicy};
use crate::dispatch::read_package;
use crate::i18n::Translator;
use crate::message::InfoMessage;
use crate::sensor::SensorPackage;
use crate::workout::TrainingError;

/// 특정 패키지 처리 실패.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("package #{index} ({workout_type}): {source}")]
pub struct PackageFailure {
    /// 입력 목록에서의 위치(0부터)
    pub index: usize,
    pub workout_type: String,
    pub source: TrainingError,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error(transparent)]
    Package(#[from] PackageFailure),
}

/// 패키지 목록의 처리 결과. 입력 순서를 유지한다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub entries: Vec<Result<InfoMessage, PackageFailure>>,
}

impl Report {
    pub fn messages(&self) -> impl Iterator<Item = &InfoMessage> {
        self.entries.iter().filter_map(|e| e.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &PackageFailure> {
        self.entries.iter().filter_map(|e| e.as_ref().err())
    }
}

/// 패키지 한 건을 계산해 결과 메시지를 만든다.
pub fn training_info(package: &SensorPackage) -> Result<InfoMessage, TrainingError> {
    let training = read_package(&package.workout_type, &package.data)?;
    Ok(training.show_training_info())
}

/// 패키지를 입력 순서대로 계산한다.
/// `Abort`이면 첫 실패를 기록한 뒤 멈추고, `Skip`이면 실패를 기록하고 계속한다.
pub fn process(packages: &[SensorPackage], policy: ErrorPolicy) -> Report {
    let mut report = Report::default();
    for (index, package) in packages.iter().enumerate() {
        debug!(index, workout_type = %package.workout_type, data = ?package.data, "processing package");
        match training_info(package) {
            Ok(info) => report.entries.push(Ok(info)),
            Err(source) => {
                let failure = PackageFailure {
                    index,
                    workout_type: package.workout_type.clone(),
                    source,
                };
                report.entries.push(Err(failure));
                if policy == ErrorPolicy::Abort {
                    break;
                }
            }
        }
    }
    report
}

/// 패키지를 처리하고 결과를 `out`에 한 줄씩 쓴다.
/// 중단 정책에서도 실패 전까지 계산된 줄은 먼저 쓴다.
pub fn run(
    config: &Config,
    packages: &[SensorPackage],
    tr: &Translator,
    out: &mut impl Write,
) -> Result<Report, AppError> {
    info!(count = packages.len(), policy = ?config.on_error, "processing sensor packages");
    let report = process(packages, config.on_error);
    for entry in &report.entries {
        match entry {
            Ok(info) => writeln!(out, "{}", info.get_message_with(tr))?,
            Err(failure) if config.on_error == ErrorPolicy::Skip => {
                warn!(index = failure.index, workout_type = %failure.workout_type, error = %failure.source, "skipping package");
            }
            Err(failure) => {
                out.flush()?;
                return Err(failure.clone().into());
            }
        }
    }
    out.flush()?;
    Ok(report)
}
