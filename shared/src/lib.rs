use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::KudoDate;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端返回的用户信息
///
/// 注册成功时由后端创建，登录时原样返回。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// 注册请求体
///
/// 序列化后恰好包含 `name`、`email`、`password` 三个字段。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUserPayload {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 登录凭据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 登录成功的响应：用户信息 + 访问令牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
}

/// 表扬墙上的一条表扬
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kudo {
    pub id: String,
    pub category: String,
    pub from: String,
    pub to: String,
    pub message: String,
    pub date: KudoDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_profile_picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_payload_serializes_exactly_three_keys() {
        let payload = RegisterUserPayload::new("John Doe", "john@example.com", "ValidPassword123!");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "John Doe",
                "email": "john@example.com",
                "password": "ValidPassword123!"
            })
        );
    }

    #[test]
    fn user_without_name_is_accepted() {
        let user: User = serde_json::from_value(json!({ "id": "1", "email": "a@b.c" })).unwrap();
        assert_eq!(user.name, None);

        let encoded = serde_json::to_value(&user).unwrap();
        assert!(encoded.get("name").is_none());
    }

    #[test]
    fn login_result_reads_nested_user() {
        let result: LoginResult = serde_json::from_value(json!({
            "user": { "id": "123", "email": "test@example.com", "name": "Test User" },
            "token": "jwt.token.here"
        }))
        .unwrap();

        assert_eq!(result.token, "jwt.token.here");
        assert_eq!(result.user.name.as_deref(), Some("Test User"));
    }

    #[test]
    fn kudo_uses_camel_case_picture_fields() {
        let kudo: Kudo = serde_json::from_value(json!({
            "id": "1",
            "category": "Well Done",
            "from": "Michael Thompson",
            "to": "Sarah Chen",
            "message": "Outstanding work on the Q1 campaign!",
            "date": "2025-03-15",
            "toProfilePicture": "https://i.pravatar.cc/150?u=sarah"
        }))
        .unwrap();

        assert_eq!(
            kudo.to_profile_picture.as_deref(),
            Some("https://i.pravatar.cc/150?u=sarah")
        );
        assert_eq!(kudo.from_profile_picture, None);
        assert_eq!(kudo.date.to_string(), "Mar 15, 2025");
    }
}
