//! 认证模块
//!
//! 分层组装：HTTP 客户端 → 用户仓储 → 服务适配器 → 用例 → hooks。
//! `AuthProvider` 在组件树根部完成组装，并通过 Context 共享用例和会话；
//! 路由服务只通过注入的认证信号感知登录状态。

pub mod hooks;
pub mod repository;
pub mod service;
pub mod session;
pub mod use_cases;

use std::rc::Rc;

use kudos_shared::LoginResult;
use leptos::prelude::*;
use thiserror::Error;

use self::repository::HttpUserRepository;
use self::service::{AuthService, AuthServiceAdapter};
use self::session::Session;
use self::use_cases::{LoginUseCase, RegisterUserUseCase};
use crate::api::{FetchHttpClient, TokenSource};
use crate::config::AppConfig;

/// 组装好的用例集合
#[derive(Clone)]
pub struct AuthDependencies {
    pub login_use_case: LoginUseCase,
    pub register_user_use_case: RegisterUserUseCase,
}

impl AuthDependencies {
    /// 按配置组装完整的调用链
    pub fn from_config(config: &AppConfig, token_source: TokenSource) -> Self {
        let http = FetchHttpClient::new(&config.api_base_url).with_token_source(token_source);
        let service = AuthServiceAdapter::new(HttpUserRepository::new(http));
        Self::from_service(Rc::new(service))
    }

    /// 两个用例共享同一个服务实例
    pub fn from_service(service: Rc<dyn AuthService>) -> Self {
        Self {
            login_use_case: LoginUseCase::new(service.clone()),
            register_user_use_case: RegisterUserUseCase::new(service),
        }
    }
}

/// 认证上下文
///
/// 用例含有 `Rc`，只能放在本地存储的 `StoredValue` 中；会话放在信号中驱动 UI 和路由守卫。
#[derive(Clone, Copy)]
pub struct AuthContext {
    dependencies: StoredValue<AuthDependencies, LocalStorage>,
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new(dependencies: AuthDependencies, session: RwSignal<Option<Session>>) -> Self {
        Self {
            dependencies: StoredValue::new_local(dependencies),
            session,
        }
    }

    pub fn dependencies(&self) -> AuthDependencies {
        self.dependencies.get_value()
    }

    /// 当前会话（只读）
    pub fn session(&self) -> Signal<Option<Session>> {
        self.session.into()
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(Option::is_some))
    }

    pub fn sign_in(&self, result: LoginResult) {
        tracing::info!(user_id = %result.user.id, "signed in");
        self.session.set(Some(Session::from(result)));
    }

    /// 注销只清除内存中的会话，导航由路由服务的认证监听处理
    pub fn sign_out(&self) {
        if self.session.get_untracked().is_some() {
            tracing::info!("signed out");
        }
        self.session.set(None);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("use_auth_context must be used within AuthProvider")]
pub struct MissingAuthProvider;

pub fn try_use_auth_context() -> Result<AuthContext, MissingAuthProvider> {
    use_context::<AuthContext>().ok_or(MissingAuthProvider)
}

/// 从 Context 获取认证上下文
///
/// # Panics
/// 在 `AuthProvider` 之外调用属于编程错误
pub fn use_auth_context() -> AuthContext {
    match try_use_auth_context() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}

/// 认证依赖提供者
///
/// 组装调用链并提供 `AuthContext`，HTTP 客户端从会话信号中读取令牌。
#[component]
pub fn AuthProvider(
    /// 运行时配置
    config: AppConfig,
    children: Children,
) -> impl IntoView {
    let session = RwSignal::new(None::<Session>);
    let token_source: TokenSource =
        Rc::new(move || session.with_untracked(|s| s.as_ref().map(|s| s.token.clone())));

    let ctx = AuthContext::new(AuthDependencies::from_config(&config, token_source), session);
    provide_context(ctx);

    children()
}
