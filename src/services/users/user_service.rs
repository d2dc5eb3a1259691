//! # 사용자 서비스 구현
//!
//! 사용자 CRUD의 비즈니스 로직을 담당하는 서비스입니다.
//! 리포지토리의 `Option` 결과를 도메인 에러(NotFound)로 변환하고,
//! 엔티티와 DTO 사이의 매핑을 수행합니다.
//!
//! ## 수정 경로의 id 규칙
//!
//! `update`는 항상 URL에서 받은 id로 저장합니다. 요청 본문에 다른 id가
//! 들어 있어도 무시됩니다. 클라이언트가 본문 id를 조작해 다른 문서를
//! 덮어쓰는 것을 막기 위한 규칙입니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::domain::dto::user_dto::UserDto;
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::UserRepository;

/// NotFound 메시지 (사용자)
const USER_NOT_FOUND: &str = "사용자를 찾을 수 없습니다";

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 전체 사용자 조회
    ///
    /// 저장 순서 그대로, DTO로 변환하여 반환합니다.
    pub async fn find_all(&self) -> AppResult<Vec<UserDto>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserDto)` - 사용자 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 id의 사용자가 존재하지 않음
    pub async fn find_by_id(&self, id: &str) -> AppResult<UserDto> {
        let user = Self::require_user(self.user_repo.find_by_id(id).await?)?;

        Ok(UserDto::from(user))
    }

    /// 새 사용자 생성
    ///
    /// DTO를 엔티티로 변환해 저장하고, 저장소가 부여한 id를 반환합니다.
    /// 핸들러는 이 id로 `Location` 헤더를 구성합니다.
    pub async fn insert(&self, dto: UserDto) -> AppResult<String> {
        let created = self.user_repo.insert(dto.into_entity()).await?;

        created.id_string().ok_or_else(|| {
            AppError::InternalError("저장된 사용자에 id가 없습니다".to_string())
        })
    }

    /// 사용자 전체 교체
    ///
    /// URL의 id로 기존 문서를 통째로 교체합니다. 사전 존재 확인은 하지
    /// 않습니다 (upsert).
    pub async fn update(&self, id: &str, dto: UserDto) -> AppResult<()> {
        let user = Self::entity_with_url_id(id, dto)?;

        self.user_repo.replace(&user).await
    }

    /// 사용자 삭제
    ///
    /// 삭제 결과에서 추론하지 않고, 명시적인 사전 조회로 존재 여부를
    /// 확인합니다. 없는 id면 아무것도 변경하지 않고 NotFound를 반환합니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.find_by_id(id).await?;

        self.user_repo.delete(id).await?;
        Ok(())
    }

    /// 조회 결과의 "없음"을 도메인 에러로 변환합니다.
    ///
    /// 빈 결과를 null 대용으로 흘려보내지 않고 항상 NotFound로
    /// 판정합니다.
    fn require_user(user: Option<User>) -> AppResult<User> {
        user.ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// URL id를 우선 적용해 교체용 엔티티를 만듭니다.
    ///
    /// 본문 DTO의 id는 버려지고 URL의 id가 항상 이깁니다.
    fn entity_with_url_id(id: &str, dto: UserDto) -> AppResult<User> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let mut user = dto.into_entity();
        user.id = Some(object_id);
        Ok(user)
    }
}
