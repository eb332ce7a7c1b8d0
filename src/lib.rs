//! 운동 계산 로직을 라이브러리로 분리하여 CLI 외의 프런트엔드에서도 재사용할 수 있게 한다.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod i18n;
pub mod message;
pub mod sensor;
pub mod workout;
