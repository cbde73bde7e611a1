//! # YoriNote 웹 서버 진입점
//!
//! 개인 레시피 버전 관리 서비스의 **시작점(entry point)**입니다.
//! 레시피는 수정할 때마다 새 버전으로 쌓이고, 언제든 과거 버전을
//! 들춰보거나 복구할 수 있습니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성과 마이그레이션 실행
//! 4. key-value 저장소 백엔드 준비
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작

// ── 모듈 선언 ──
// `mod` 키워드는 다른 파일을 모듈로 가져옵니다.
// Rust에서는 파일 시스템 구조가 곧 모듈 구조입니다.
mod config;
mod error;
mod middleware;
mod models;
mod routes;
mod services;
mod store;

// ── 외부 크레이트와 모듈에서 필요한 항목 가져오기 ──
use anyhow::Result; // 어떤 에러 타입이든 담을 수 있는 범용 Result
use axum::{
    routing::get, // HTTP 메서드별 라우팅 함수
    Router,       // URL 경로와 핸들러를 연결하는 라우터
};
use config::Config;
use routes::{recipes::AppState, *};
use sqlx::sqlite::SqlitePoolOptions; // SQLite 연결 풀 설정
use std::path::Path;
use std::sync::Arc; // 참조 카운트 스마트 포인터 — 저장소를 핸들러들이 공유
use store::kv::SqliteStore;
use tower_http::{
    cors::{Any, CorsLayer},          // CORS 설정
    services::{ServeDir, ServeFile}, // 정적 파일 서빙
    trace::TraceLayer,               // HTTP 요청/응답 로깅 미들웨어
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// #[tokio::main]: 비동기 런타임을 시작하는 어트리뷰트 매크로.
// async main을 Tokio 런타임 안에서 실행해 줍니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok()는 Result를 Option으로 바꿔, .env 파일이 없어도 그냥 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // EnvFilter: RUST_LOG 환경변수로 로그 레벨을 제어합니다.
    // 환경변수가 없으면 이 크레이트와 HTTP 계층을 debug 레벨로 둡니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yorinote=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // `?` 연산자: Err이면 즉시 반환, Ok이면 값을 꺼냅니다.
    let config = Config::from_env()?;
    tracing::info!("Starting YoriNote server on {}:{}", config.host, config.port);

    // ── 4단계: SQLite 연결 풀 생성과 마이그레이션 ──
    // 연결 풀: 연결을 미리 만들어두고 재사용하는 패턴입니다.
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // sqlx::migrate!는 컴파일 타임에 ./migrations의 SQL 파일을 포함시키고,
    // 아직 실행되지 않은 것만 순서대로 실행합니다.
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 5단계: 애플리케이션 상태(State) 생성 ──
    // 저장소는 KeyValueStore 트레이트 객체로 주입합니다. 핸들러와 핵심
    // 로직은 뒤에 SQLite가 있는지 전혀 모릅니다 — 테스트에서는 같은
    // 자리에 인메모리 백엔드가 들어갑니다.
    let state = AppState {
        store: Arc::new(SqliteStore::new(pool)),
        jwt_secret: config.jwt_secret.clone(),
    };

    // ── 6단계: API 라우터 설정 ──
    // {title}, {version}은 URL 경로 파라미터입니다 (Path extractor로 추출).
    // .route()에 메서드 함수를 체이닝하면 같은 경로에 여러 HTTP 메서드를
    // 매핑할 수 있습니다.
    let api_routes = Router::new()
        // 레시피 목록(제목별 최신 버전)과 저장
        .route("/recipes", get(list_recipes).post(create_recipe))
        // 상세 보기, 수정 저장, 제목 단위 삭제
        .route(
            "/recipes/{title}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        // 수정 이력과 복구 선택
        .route("/recipes/{title}/versions", get(list_recipe_versions))
        .route(
            "/recipes/{title}/versions/{version}",
            get(get_recipe_version),
        )
        // 헬스체크
        .route("/health", get(health_check))
        // .with_state(): 모든 핸들러에서 AppState를 쓸 수 있게 합니다.
        .with_state(state);

    // ── 7단계: CORS 미들웨어 설정 ──
    // 개발 환경에서는 모두 허용. 프로덕션에서는 프론트엔드 도메인만
    // 허용해야 합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // ── 8단계: 프론트엔드 정적 파일 서빙 설정 ──
    // 빌드된 프론트엔드가 있으면 같은 서버에서 서빙합니다.
    // SPA이므로 매칭되지 않는 경로는 index.html로 돌려보냅니다.
    let frontend_dist = Path::new("frontend/dist");
    let app = if frontend_dist.exists() {
        tracing::info!("Serving frontend static files from frontend/dist");

        let serve_dir = ServeDir::new("frontend/dist")
            .not_found_service(ServeFile::new("frontend/dist/index.html"));

        Router::new()
            // API 라우트를 /api/v1 아래에 중첩시킵니다.
            .nest("/api/v1", api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Frontend dist directory not found, serving API only");

        Router::new()
            .nest("/api/v1", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    // ── 9단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // 이 줄에서 서버가 계속 실행됩니다 (Ctrl+C로 종료할 때까지).
    axum::serve(listener, app).await?;

    Ok(())
}
