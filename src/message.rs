use crate::i18n::{keys, Translator};

/// 기본(영문) 결과 메시지 템플릿.
pub const MESSAGE_TEMPLATE: &str = "Training type: {training_type}; Duration: {duration} h.; \
Distance: {distance} km; Avg speed: {speed} km/h; Calories burned: {calories}.";

/// 운동 한 건의 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    /// 운동 종류 이름
    pub training_type: String,
    /// 운동 시간 [h]
    pub duration: f64,
    /// 이동 거리 [km]
    pub distance: f64,
    /// 평균 속도 [km/h]
    pub speed: f64,
    /// 소모 칼로리 [kcal]
    pub calories: f64,
}

impl InfoMessage {
    /// 영문 템플릿으로 메시지를 만든다.
    pub fn get_message(&self) -> String {
        self.render(MESSAGE_TEMPLATE)
    }

    /// 현재 언어의 템플릿으로 메시지를 만든다.
    pub fn get_message_with(&self, tr: &Translator) -> String {
        self.render(&tr.t(keys::REPORT_MESSAGE))
    }

    /// `{training_type}`, `{duration}`, `{distance}`, `{speed}`, `{calories}` 자리를 채운다.
    /// 숫자는 항상 소수점 아래 3자리 고정소수점으로 표기한다.
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{training_type}", &self.training_type)
            .replace("{duration}", &format!("{:.3}", self.duration))
            .replace("{distance}", &format!("{:.3}", self.distance))
            .replace("{speed}", &format!("{:.3}", self.speed))
            .replace("{calories}", &format!("{:.3}", self.calories))
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_message())
    }
}
