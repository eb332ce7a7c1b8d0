//! 센서 패키지(종류 코드 + 값 목록)를 운동 객체로 변환한다.

use crate::workout::{Running, SportsWalking, Swimming, TrainingError, Workout, WorkoutKind};

/// 센서에서 받은 값을 해석해 알맞은 운동 객체를 만든다.
///
/// 값은 생성자 인자 순서(동작 수, 시간, 체중[, 키] / [, 수영장 길이, 횟수])대로 넘어온다.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Workout>, TrainingError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| TrainingError::UnknownType(workout_type.to_string()))?;
    if data.len() != kind.arity() {
        return Err(TrainingError::ArgumentCount {
            kind,
            expected: kind.arity(),
            got: data.len(),
        });
    }
    let action = whole_number("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);
    let workout: Box<dyn Workout> = match kind {
        WorkoutKind::Running => Box::new(Running::new(action, duration, weight)?),
        WorkoutKind::SportsWalking => {
            Box::new(SportsWalking::new(action, duration, weight, data[3])?)
        }
        WorkoutKind::Swimming => {
            let length_pool = whole_number("length_pool", data[3])?;
            let count_pool = whole_number("count_pool", data[4])?;
            Box::new(Swimming::new(
                action,
                duration,
                weight,
                narrow("length_pool", length_pool, data[3])?,
                narrow("count_pool", count_pool, data[4])?,
            )?)
        }
    };
    Ok(workout)
}

fn whole_number(field: &'static str, value: f64) -> Result<u64, TrainingError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
        Ok(value as u64)
    } else {
        Err(TrainingError::InvalidValue { field, value })
    }
}

fn narrow(field: &'static str, n: u64, raw: f64) -> Result<u32, TrainingError> {
    u32::try_from(n).map_err(|_| TrainingError::InvalidValue { field, value: raw })
}
