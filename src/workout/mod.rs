//! 운동 종류별 계산 모듈 모음.
//! 공통 센서 값(동작 수, 시간, 체중)은 `Readings`로 묶고, 종류별 칼로리 식은 각 모듈에 둔다.

pub mod running;
pub mod sports_walking;
pub mod swimming;

pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;

use thiserror::Error;

use crate::message::InfoMessage;

/// 1 km 당 미터 수
pub const M_IN_KM: f64 = 1000.0;
/// 1 시간 당 분
pub const MIN_IN_H: f64 = 60.0;
/// 기본 보폭 [m]
pub const LEN_STEP: f64 = 0.65;

/// 센서 값 해석/검증 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainingError {
    /// 알 수 없는 운동 종류 코드
    #[error("Type_Error: unknown workout type `{0}`")]
    UnknownType(String),
    /// 운동 종류에 맞지 않는 값 개수
    #[error("{kind} expects {expected} values, got {got}")]
    ArgumentCount {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },
    /// 정수여야 하는 항목에 잘못된 값이 들어옴
    #[error("`{field}` must be a non-negative whole number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },
    /// 운동 시간이 0 이하
    #[error("duration must be greater than 0 h, got {0}")]
    NonPositiveDuration(f64),
    /// 체중이 0 이하
    #[error("weight must be greater than 0 kg, got {0}")]
    NonPositiveWeight(f64),
    /// 키가 0 이하
    #[error("height must be greater than 0 cm, got {0}")]
    NonPositiveHeight(f64),
}

/// 지원하는 운동 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// 센서 패키지의 종류 코드(RUN/WLK/SWM)로 운동 종류를 찾는다.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// 결과 메시지에 표시되는 운동 이름
    pub fn type_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// 생성자가 요구하는 센서 값 개수
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// 모든 운동이 공유하는 센서 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    /// 걸음/스트로크 수
    pub action: u64,
    /// 운동 시간 [h]
    pub duration_h: f64,
    /// 체중 [kg]
    pub weight_kg: f64,
}

impl Readings {
    /// 값을 검증한 뒤 생성한다. 시간과 체중은 0보다 커야 한다.
    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        if !(duration_h.is_finite() && duration_h > 0.0) {
            return Err(TrainingError::NonPositiveDuration(duration_h));
        }
        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(TrainingError::NonPositiveWeight(weight_kg));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }

    /// 보폭 기준 이동 거리 [km]
    pub fn distance_km(&self, len_step_m: f64) -> f64 {
        self.action as f64 * len_step_m / M_IN_KM
    }
}

/// 운동 한 건의 계산 기능.
///
/// `spent_calories`는 기본 구현이 없으므로 모든 운동 종류가 반드시 제공해야 한다.
pub trait Workout: std::fmt::Debug {
    fn kind(&self) -> WorkoutKind;

    fn readings(&self) -> &Readings;

    /// 한 동작 당 이동 거리 [m]
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// 이동 거리 [km]
    fn distance(&self) -> f64 {
        self.readings().distance_km(self.len_step())
    }

    /// 평균 속도 [km/h]
    fn mean_speed(&self) -> f64 {
        self.distance() / self.readings().duration_h
    }

    /// 소모 칼로리 [kcal]
    fn spent_calories(&self) -> f64;

    /// 완료된 운동의 결과 메시지를 만든다.
    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind().type_name().to_string(),
            duration: self.readings().duration_h,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
