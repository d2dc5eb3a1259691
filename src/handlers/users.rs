//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/users` | 전체 사용자 조회 | 200 | — |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 | 404 |
//! | `POST` | `/users` | 사용자 생성 | 201 + Location | — |
//! | `PUT` | `/users/{id}` | 사용자 전체 교체 | 204 | — |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 | 204 | 404 |

use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::dto::user_dto::UserDto;
use crate::errors::AppError;
use crate::services::users::user_service::UserService;

/// 전체 사용자 조회 핸들러
///
/// `GET /users`
///
/// 저장 순서 그대로 모든 사용자를 DTO 배열로 반환합니다.
/// 페이지네이션은 없습니다.
#[get("")]
pub async fn get_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.find_all().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "name": "Maria Brown",
///   "email": "maria@gmail.com"
/// }
/// ```
///
/// ## 사용자 없음 (404 Not Found)
/// ```json
/// {
///   "timestamp": 1704931200000,
///   "status": 404,
///   "message": "사용자를 찾을 수 없습니다",
///   "path": "/users/507f1f77bcf86cd799439011"
/// }
/// ```
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// `POST /users`
///
/// 요청 본문의 DTO로 새 사용자를 생성합니다. id는 저장소가 부여합니다.
/// 응답 본문은 비어 있고, 생성된 리소스의 위치는 `Location` 헤더로
/// 전달됩니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name": "Maria Brown", "email": "maria@gmail.com"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    let id = service.insert(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", id)))
        .finish())
}

/// 사용자 수정 핸들러
///
/// `PUT /users/{id}`
///
/// URL의 id에 해당하는 문서를 요청 본문으로 통째로 교체합니다.
/// 본문에 다른 id가 들어 있어도 URL의 id가 항상 우선합니다.
/// 성공 시 204 No Content를 반환합니다.
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    payload: web::Json<UserDto>,
) -> Result<HttpResponse, AppError> {
    service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{id}`
///
/// 존재하지 않는 id면 404를 반환하고 아무것도 변경하지 않습니다.
/// 성공 시 204 No Content를 반환합니다.
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
