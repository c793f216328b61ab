//! 应用用例
//!
//! 单方法命令对象，UI hooks 依赖这里而不是具体的传输实现。
//! 不做业务校验，校验交给后端和表单字段约束。

use std::rc::Rc;

use kudos_shared::{LoginCredentials, LoginResult, RegisterUserPayload, User};

use super::service::AuthService;
use crate::error::ApiResult;

#[derive(Clone)]
pub struct RegisterUserUseCase {
    service: Rc<dyn AuthService>,
}

impl RegisterUserUseCase {
    pub fn new(service: Rc<dyn AuthService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, payload: RegisterUserPayload) -> ApiResult<User> {
        tracing::debug!(email = %payload.email, "registering user");
        self.service.register_user(payload).await
    }
}

#[derive(Clone)]
pub struct LoginUseCase {
    service: Rc<dyn AuthService>,
}

impl LoginUseCase {
    pub fn new(service: Rc<dyn AuthService>) -> Self {
        Self { service }
    }

    pub async fn execute(&self, credentials: LoginCredentials) -> ApiResult<LoginResult> {
        tracing::debug!(email = %credentials.email, "logging in");
        self.service.login(credentials).await
    }
}
