//! 认证服务适配器
//!
//! 用例只依赖 `AuthService` 能力接口，不感知仓储和传输细节，
//! 测试时可以直接替换为 `MockAuthService`。

use kudos_shared::{LoginCredentials, LoginResult, RegisterUserPayload, User};

use super::repository::UserRepository;
use crate::error::ApiResult;

#[async_trait::async_trait(?Send)]
pub trait AuthService {
    async fn register_user(&self, payload: RegisterUserPayload) -> ApiResult<User>;
    async fn login(&self, credentials: LoginCredentials) -> ApiResult<LoginResult>;
}

pub struct AuthServiceAdapter<R: UserRepository> {
    repository: R,
}

impl<R: UserRepository> AuthServiceAdapter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait(?Send)]
impl<R: UserRepository> AuthService for AuthServiceAdapter<R> {
    async fn register_user(&self, payload: RegisterUserPayload) -> ApiResult<User> {
        self.repository.register(payload).await
    }

    async fn login(&self, credentials: LoginCredentials) -> ApiResult<LoginResult> {
        self.repository.login(credentials).await
    }
}
