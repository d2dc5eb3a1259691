//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 게시물 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/health` | 헬스체크 |
//! | `GET/POST` | `/users` | 사용자 목록/생성 |
//! | `GET/PUT/DELETE` | `/users/{id}` | 사용자 조회/수정/삭제 |
//! | `GET` | `/posts` | 게시물 목록 |
//! | `GET` | `/posts/titlesearch` | 제목 검색 |
//! | `GET` | `/posts/fullsearch` | 통합 검색 |
//! | `GET` | `/posts/{id}` | 게시물 조회 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//! use crate::routes::configure_all_routes;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_post_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 CRUD API 엔드포인트를 `/users` 스코프에 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 게시물 관련 라우트를 설정합니다
///
/// 고정 경로(`titlesearch`, `fullsearch`)가 `{id}` 경로에 삼켜지지 않도록
/// 반드시 먼저 등록합니다.
fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/posts")
            .service(handlers::posts::title_search)
            .service(handlers::posts::full_search)
            .service(handlers::posts::get_posts)
            .service(handlers::posts::get_post),
    );
}

/// 헬스체크 엔드포인트
///
/// 서비스 상태와 버전 정보를 반환합니다.
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "workshop_blog_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Explicit wiring"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "workshop_blog_service");
    }
}
