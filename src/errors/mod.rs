//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! Spring의 `@ControllerAdvice` + `@ExceptionHandler` 조합에 해당하는
//! 번역 계층은 [`error_translators`] 미들웨어가 담당합니다.
//! `NotFound` 에러는 표준화된 [`StandardError`] 본문으로 변환되어
//! 클라이언트에게 전달됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `NotFound` | 404 Not Found | 리소스 없음 (StandardError 본문) |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn find_user(id: &str) -> Result<User, AppError> {
//!     user_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
//! }
//! ```

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 이 시스템의 유일한 도메인 에러는 `NotFound`입니다.
/// 나머지 변형들은 외부 협력자(저장소) 오류를 감싸는 용도입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// `NotFound`는 이후 [`error_translators`] 미들웨어가
    /// [`StandardError`] 본문으로 다시 작성합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 표준 에러 응답 본문
///
/// 404 응답에 사용되는 구조화된 에러 형식입니다.
///
/// ```json
/// {
///   "timestamp": 1704931200000,
///   "status": 404,
///   "message": "사용자를 찾을 수 없습니다",
///   "path": "/users/507f1f77bcf86cd799439011"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardError {
    /// 에러 발생 시각 (epoch 기준 밀리초)
    pub timestamp: i64,
    /// HTTP 상태 코드
    pub status: u16,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 에러를 유발한 요청 경로
    pub path: String,
}

impl StandardError {
    /// 현재 시각 기준으로 표준 에러 본문을 생성합니다.
    pub fn new(status: StatusCode, message: String, path: &str) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            status: status.as_u16(),
            message,
            path: path.to_string(),
        }
    }
}

/// 404 응답을 [`StandardError`] 본문으로 다시 작성하는 번역기
///
/// 핸들러가 반환한 [`AppError::NotFound`]의 메시지를 꺼내
/// 타임스탬프/상태 코드/요청 경로와 함께 구조화된 본문을 만듭니다.
fn render_not_found<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let message = res
        .response()
        .error()
        .and_then(|err| err.as_error::<AppError>())
        .map(|err| err.to_string())
        .unwrap_or_else(|| "리소스를 찾을 수 없습니다".to_string());

    let body = StandardError::new(StatusCode::NOT_FOUND, message, res.request().path());

    let (req, _) = res.into_parts();
    let response = HttpResponse::NotFound().json(body);
    let res = ServiceResponse::new(req, response).map_into_right_body();

    Ok(ErrorHandlerResponse::Response(res))
}

/// 에러 번역 미들웨어를 구성합니다.
///
/// Spring의 글로벌 예외 핸들러처럼 애플리케이션 전체에 `wrap` 한 번으로
/// 적용됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// App::new().wrap(error_translators())
/// ```
pub fn error_translators<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::NOT_FOUND, render_not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::{web, App, ResponseError};

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_status_code() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_status_code() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message_passthrough() {
        let error = AppError::NotFound("게시물을 찾을 수 없습니다".to_string());

        assert_eq!(error.to_string(), "게시물을 찾을 수 없습니다");
    }

    #[test]
    fn test_standard_error_shape() {
        let err = StandardError::new(
            StatusCode::NOT_FOUND,
            "사용자를 찾을 수 없습니다".to_string(),
            "/users/abc",
        );
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["status"], 404);
        assert_eq!(value["message"], "사용자를 찾을 수 없습니다");
        assert_eq!(value["path"], "/users/abc");
        assert!(value["timestamp"].is_i64());
    }

    #[actix_web::test]
    async fn test_translator_rewrites_404_body() {
        async fn always_missing() -> Result<HttpResponse, AppError> {
            Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
        }

        let app = actix_test::init_service(
            App::new()
                .wrap(error_translators())
                .route("/users/{id}", web::get().to(always_missing)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/users/missing")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: StandardError = actix_test::read_body_json(res).await;
        assert_eq!(body.status, 404);
        assert_eq!(body.message, "사용자를 찾을 수 없습니다");
        assert_eq!(body.path, "/users/missing");
        assert!(body.timestamp > 0);
    }
}
