//! 登录会话
//!
//! 令牌只保存在内存中，刷新页面即失效。

use kudos_shared::{LoginResult, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// 优先显示姓名，没有时退回邮箱
    pub fn display_name(&self) -> &str {
        self.user
            .name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.user.email)
    }
}

impl From<LoginResult> for Session {
    fn from(result: LoginResult) -> Self {
        Self {
            user: result.user,
            token: result.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> User {
        User {
            id: "123".to_string(),
            email: "test@example.com".to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn session_takes_user_and_token_from_login_result() {
        let session = Session::from(LoginResult {
            user: user(Some("Test User")),
            token: "jwt.token.here".to_string(),
        });

        assert_eq!(session.token, "jwt.token.here");
        assert_eq!(session.user.id, "123");
        assert_eq!(session.display_name(), "Test User");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let anonymous = Session {
            user: user(None),
            token: "t".to_string(),
        };
        assert_eq!(anonymous.display_name(), "test@example.com");

        let blank = Session {
            user: user(Some("  ")),
            token: "t".to_string(),
        };
        assert_eq!(blank.display_name(), "test@example.com");
    }
}
