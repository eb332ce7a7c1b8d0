use super::{Readings, TrainingError, Workout, WorkoutKind, MIN_IN_H, M_IN_KM};

/// 달리기.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    readings: Readings,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

    pub fn new(action: u64, duration_h: f64, weight_kg: f64) -> Result<Self, TrainingError> {
        Ok(Self {
            readings: Readings::new(action, duration_h, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn readings(&self) -> &Readings {
        &self.readings
    }

    /// ((18 * 평균속도 - 20) * 체중 / 1000) * 운동 시간[분]
    fn spent_calories(&self) -> f64 {
        let r = &self.readings;
        (Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_MEAN_SPEED_SHIFT)
            * r.weight_kg
            / M_IN_KM
            * (r.duration_h * MIN_IN_H)
    }
}
