//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 식별자는 저장소가 삽입 시점에 부여하며, 이후 변경되지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 형태입니다.
/// id의 유일성은 애플리케이션이 아니라 저장소가 보장합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 이메일 주소
    pub email: String,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    ///
    /// id는 저장소가 삽입 시점에 부여하므로 `None`으로 시작합니다.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: None,
            name,
            email,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
