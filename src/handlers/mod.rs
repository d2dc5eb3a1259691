//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! Actix-web 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/users")
//! public class UserResource {
//!
//!     @Autowired
//!     private UserService service;
//!
//!     @GetMapping("/{id}")
//!     public ResponseEntity<UserDTO> findById(@PathVariable String id) {
//!         User obj = service.findById(id);
//!         return ResponseEntity.ok().body(new UserDTO(obj));
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, get};
//! use crate::services::users::user_service::UserService;
//!
//! #[get("/{id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>, // 시작 시점에 명시적으로 주입
//!     id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.find_by_id(&id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, `NotFound`는
//! 에러 번역 미들웨어가 구조화된 404 본문으로 변환합니다.
//! 쿼리 파라미터 디코딩/파싱 실패는 에러가 아니라 기본값으로 처리됩니다.

pub mod users;
pub mod posts;
