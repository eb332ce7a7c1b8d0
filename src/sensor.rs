use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// 센서에서 받은 패키지 한 건: 운동 종류 코드와 값 목록.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// 명령줄 패키지 문자열 해석 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageParseError {
    /// `CODE:값,값,...` 형식이 아님
    #[error("expected CODE:v1,v2,... but got `{0}`")]
    Format(String),
    /// 숫자로 읽을 수 없는 값
    #[error("`{0}` is not a number")]
    Number(String),
}

impl FromStr for SensorPackage {
    type Err = PackageParseError;

    /// `SWM:720,1,80,25,40` 형식을 읽는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, values) = s
            .split_once(':')
            .ok_or_else(|| PackageParseError::Format(s.to_string()))?;
        let code = code.trim();
        if code.is_empty() || values.trim().is_empty() {
            return Err(PackageParseError::Format(s.to_string()));
        }
        let data = values
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<f64>()
                    .map_err(|_| PackageParseError::Number(v.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(code.to_uppercase(), data))
    }
}

/// 기본 데모 패키지 목록.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
