//! 워크샵 블로그 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 계층을 초기화합니다.
//! MongoDB 연결을 설정하고 사용자/게시물 REST API를 제공합니다.
//!
//! 의존성 주입은 프레임워크에 맡기지 않고 여기서 명시적으로 수행합니다:
//! `Database` → 리포지토리 → 서비스 순으로 생성해 `web::Data`로 핸들러에
//! 전달합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use blog_service_backend::config::ServerConfig;
use blog_service_backend::db::Database;
use blog_service_backend::errors::error_translators;
use blog_service_backend::repositories::posts::post_repo::PostRepository;
use blog_service_backend::repositories::users::user_repo::UserRepository;
use blog_service_backend::routes::configure_all_routes;
use blog_service_backend::services::posts::post_service::PostService;
use blog_service_backend::services::users::user_service::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 워크샵 블로그 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // 명시적 의존성 주입: 리포지토리 → 서비스
    let user_repo = Arc::new(UserRepository::new(database.clone()));
    let post_repo = Arc::new(PostRepository::new(database.clone()));

    // 날짜 범위 쿼리용 인덱스 부트스트랩
    if let Err(e) = post_repo.ensure_indexes().await {
        error!("게시물 인덱스 생성 실패: {}", e);
    }

    let user_service = web::Data::new(UserService::new(user_repo));
    let post_service = web::Data::new(PostService::new(post_repo));

    info!("✅ 모든 계층이 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service, post_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, 에러 번역 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    post_service: web::Data<PostService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API 엔드포인트: /users, /posts");

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // 서비스 주입 (시작 시점에 구성된 인스턴스 공유)
            .app_data(user_service.clone())
            .app_data(post_service.clone())

            // 미들웨어
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // NotFound → 구조화된 404 본문 번역
            .wrap(error_translators())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    );

    info!("✅ MongoDB 연결 성공");

    database
}

/// CORS 설정을 구성합니다
///
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
