//! # 미들웨어 모듈
//!
//! 요청이 핸들러에 닿기 전에 거치는 횡단 관심사를 담습니다.
//! - `auth`: Bearer 토큰 검증과 identity 추출 (AuthUser extractor)

pub mod auth;
