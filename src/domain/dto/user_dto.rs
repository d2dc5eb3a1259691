//! 사용자 DTO 구현
//!
//! 사용자 엔티티의 HTTP 경계 투영입니다.
//! 요청 본문과 응답 본문 양쪽에 같은 형태를 사용합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::user::User;

/// 사용자 DTO
///
/// [`User`] 엔티티의 1:1 투영입니다.
/// 응답에서는 id가 16진수 문자열로 노출되고, 요청에서는 생략될 수 있습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl UserDto {
    /// DTO를 엔티티로 변환합니다.
    ///
    /// 순수 구조 매핑이며 검증을 수행하지 않습니다.
    /// DTO에 담긴 id는 무시됩니다. 식별자는 저장소가 부여하거나
    /// (수정 경로에서는) URL의 id가 우선하기 때문입니다.
    pub fn into_entity(self) -> User {
        User::new(self.name, self.email)
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let id = user.id_string();
        let User { name, email, .. } = user;

        Self { id, name, email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_entity_to_dto_projection() {
        let oid = ObjectId::new();
        let user = User {
            id: Some(oid),
            name: "Maria Brown".to_string(),
            email: "maria@gmail.com".to_string(),
        };

        let dto = UserDto::from(user);

        assert_eq!(dto.id.unwrap(), oid.to_hex());
        assert_eq!(dto.name, "Maria Brown");
        assert_eq!(dto.email, "maria@gmail.com");
    }

    #[test]
    fn test_dto_to_entity_drops_body_id() {
        let dto = UserDto {
            id: Some(ObjectId::new().to_hex()),
            name: "Alex Green".to_string(),
            email: "alex@gmail.com".to_string(),
        };

        let user = dto.into_entity();

        // 본문의 id는 신뢰하지 않는다
        assert!(user.id.is_none());
        assert_eq!(user.name, "Alex Green");
        assert_eq!(user.email, "alex@gmail.com");
    }

    #[test]
    fn test_round_trip_preserves_name_and_email() {
        let dto = UserDto {
            id: None,
            name: "Bob Grey".to_string(),
            email: "bob@gmail.com".to_string(),
        };

        let back = UserDto::from(dto.clone().into_entity());

        assert_eq!(back.name, dto.name);
        assert_eq!(back.email, dto.email);
    }

    #[test]
    fn test_deserialize_without_id_field() {
        let json = r#"{"name": "Maria Brown", "email": "maria@gmail.com"}"#;
        let dto: UserDto = serde_json::from_str(json).unwrap();

        assert!(dto.id.is_none());
        assert_eq!(dto.name, "Maria Brown");
    }
}
