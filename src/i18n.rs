use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const REPORT_MESSAGE: &str = "report.message";
    pub const CONFIG_WRITTEN: &str = "config.written";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Ko,
    Ru,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else if c.starts_with("ru") {
            Language::Ru
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/ko/ru)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// TOML 언어팩 문자열로 내장 문자열 일부를 덮어쓴다.
    pub fn with_overrides_from_toml(mut self, src: &str) -> Self {
        self.overrides = parse_toml_to_map(src);
        self
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 > 현재 언어 > 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::Ru => ru(key).or_else(|| en(key)),
        };
        built_in.unwrap_or("[missing translation]").to_string()
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("ru") => Some("ru".into()),
        _ => None,
    }
}

/// `ru_RU.UTF-8`, `ko-KR` 같은 로케일 문자열에서 지원 언어만 골라낸다.
fn locale_base(loc: &str) -> Option<String> {
    let base: String = loc
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    let supported = matches!(base.as_str(), "en" | "ko" | "ru");
    supported.then_some(base)
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(locale_base) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| locale_base(&v))
}

/// `<dir>/<lang>.toml`, 없으면 `<dir>/<기본 언어>.toml` 언어팩을 읽는다.
/// 중첩 테이블은 점으로 이어진 키(`report.message`)로 펼친다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let base = lang.split(['-', '_']).next().unwrap_or(lang);
    [lang, base]
        .into_iter()
        .filter_map(|code| fs::read_to_string(dir.join(format!("{code}.toml"))).ok())
        .find_map(|content| parse_toml_to_map(&content))
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let map = flatten_table("", &table);
    (!map.is_empty()).then_some(map)
}

fn flatten_table(prefix: &str, table: &toml::Table) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (k, v) in table {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            toml::Value::String(s) => {
                map.insert(key, s.clone());
            }
            toml::Value::Table(t) => map.extend(flatten_table(&key, t)),
            _ => {}
        }
    }
    map
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        REPORT_MESSAGE => crate::message::MESSAGE_TEMPLATE,
        CONFIG_WRITTEN => "Default configuration written to",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        REPORT_MESSAGE => {
            "운동 종류: {training_type}; 시간: {duration} h.; 거리: {distance} km; \
             평균 속도: {speed} km/h; 소모 칼로리: {calories}."
        }
        CONFIG_WRITTEN => "기본 설정을 저장했습니다:",
        _ => return None,
    })
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Ошибка",
        REPORT_MESSAGE => {
            "Тип тренировки: {training_type}; Длительность: {duration} ч.; \
             Дистанция: {distance} км; Ср. скорость: {speed} км/ч; \
             Потрачено ккал: {calories}."
        }
        CONFIG_WRITTEN => "Настройки по умолчанию сохранены в",
        _ => return None,
    })
}
