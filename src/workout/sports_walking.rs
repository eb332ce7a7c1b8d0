use super::{Readings, TrainingError, Workout, WorkoutKind, MIN_IN_H};

/// 스포츠 걷기. 키(cm)가 칼로리 식에 들어간다.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    readings: Readings,
    height_cm: f64,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(
        action: u64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, TrainingError> {
        let readings = Readings::new(action, duration_h, weight_kg)?;
        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(TrainingError::NonPositiveHeight(height_cm));
        }
        Ok(Self {
            readings,
            height_cm,
        })
    }
}

impl Workout for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    /// (0.035 * 체중 + floor(속도^2 / 키) * 0.029 * 체중) * 운동 시간[분]
    ///
    /// 속도^2 / 키 항은 내림 나눗셈이다. 실수 나눗셈으로 바꾸면 결과가 달라진다.
    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        let speed_sq_per_height = self.mean_speed().powi(2).div_euclid(self.height_cm);
        (Self::CALORIES_WEIGHT_MULTIPLIER * r.weight_kg
            + speed_sq_per_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * r.weight_kg)
            * (r.duration_h * MIN_IN_H)
    }
}
