use super::{Readings, TrainingError, Workout, WorkoutKind, M_IN_KM};

/// 수영. 평균 속도는 수영장 길이와 왕복 횟수로 계산한다.
///
/// 거리는 스트로크 수 기반 공통 식(보폭 1.38 m)을 그대로 쓰므로
/// 거리와 평균 속도가 서로 다른 식에서 나온다.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    readings: Readings,
    /// 수영장 길이 [m]
    length_pool_m: u32,
    /// 수영장을 지나간 횟수
    count_pool: u32,
}

impl Swimming {
    const LEN_STEP: f64 = 1.38;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: u32,
        count_pool: u32,
    ) -> Result<Self, TrainingError> {
        Ok(Self {
            readings: Readings::new(action, duration_h, weight_kg)?,
            length_pool_m,
            count_pool,
        })
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    fn len_step(&self) -> f64 {
        Self::LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        f64::from(self.length_pool_m) * f64::from(self.count_pool)
            / M_IN_KM
            / self.readings.duration_h
    }

    /// (평균속도 + 1.1) * 2 * 체중
    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.readings.weight_kg
    }
}
