//! 用户仓储
//!
//! 把领域调用（注册、登录）翻译为固定路径上的 HTTP 调用。
//! 路径和方法由 `kudos_shared::protocol::ApiRequest` 声明，这里只负责转发。

use kudos_shared::{LoginCredentials, LoginResult, RegisterUserPayload, User};

use crate::api::HttpClient;
use crate::error::ApiResult;

#[async_trait::async_trait(?Send)]
pub trait UserRepository {
    /// `POST /users/register`
    async fn register(&self, payload: RegisterUserPayload) -> ApiResult<User>;
    /// `POST /users/login`
    async fn login(&self, credentials: LoginCredentials) -> ApiResult<LoginResult>;
}

pub struct HttpUserRepository<C: HttpClient> {
    http: C,
}

impl<C: HttpClient> HttpUserRepository<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}

#[async_trait::async_trait(?Send)]
impl<C: HttpClient> UserRepository for HttpUserRepository<C> {
    async fn register(&self, payload: RegisterUserPayload) -> ApiResult<User> {
        self.http.call(&payload).await
    }

    async fn login(&self, credentials: LoginCredentials) -> ApiResult<LoginResult> {
        self.http.call(&credentials).await
    }
}
