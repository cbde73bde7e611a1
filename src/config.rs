//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: 레시피 저장소로 쓸 SQLite 경로 (필수)
//! - `JWT_SECRET`: 외부 인증 계층과 공유하는 토큰 검증 비밀키 (필수)
//! - `HOST`: 서버 바인딩 주소 (기본값 "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값 3000)

// std::env: 표준 라이브러리의 환경변수 모듈
use std::env;

// #[derive(...)]: 트레이트 구현을 자동 생성하는 derive 매크로
// - Debug: {:?} 포맷 출력용
// - Clone: .clone()으로 값 복제 가능
#[derive(Debug, Clone)]
/// 애플리케이션 전체 설정.
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 뒤 공유됩니다.
pub struct Config {
    /// SQLite 데이터베이스 경로 (예: "sqlite:data/yorinote.db?mode=rwc")
    pub database_url: String,
    /// JWT 서명 검증용 비밀키. 토큰을 발급하는 인증 계층과 같은 값을 가져야 합니다.
    pub jwt_secret: String,
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    /// u16: 0~65535 범위의 부호 없는 16비트 정수 — 포트 번호에 딱 맞는 타입
    pub port: u16,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config를 만듭니다.
    ///
    /// # 에러
    /// `DATABASE_URL`과 `JWT_SECRET`은 필수이며, 없으면 `VarError`가
    /// 돌아갑니다. 나머지는 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            // env::var("KEY"): Result<String, VarError>를 돌려줍니다.
            // `?`로 필수 변수가 없으면 즉시 에러 반환.
            database_url: env::var("DATABASE_URL")?,
            jwt_secret: env::var("JWT_SECRET")?,

            // unwrap_or_else(|_| ...): 변수가 없을 때 기본값을 쓰는 클로저
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // 포트는 문자열 → u16 파싱이 한 번 더 필요합니다.
            // 파싱에 실패해도 기본값 3000으로 동작합니다.
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
