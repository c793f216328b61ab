//! 请求生命周期 hooks
//!
//! `RequestState` 是显式状态机：`Idle → Loading → (Succeeded | Failed)`，
//! 任何终态再次触发都会回到 `Loading`。数据和错误不可能同时存在。
//!
//! 生命周期逻辑（`LoginFlow` / `RegistrationFlow`）只依赖 `StateSink`，
//! 与 Leptos 信号解耦；`use_login` / `use_registration` 再把它们绑定到 `RwSignal`。

use std::future::Future;
use std::rc::Rc;

use kudos_shared::{LoginCredentials, LoginResult, RegisterUserPayload, User};
use leptos::prelude::*;

use super::use_cases::{LoginUseCase, RegisterUserUseCase};
use super::{AuthDependencies, use_auth_context};
use crate::error::{ApiError, ApiResult};

/// 登录失败但错误没有消息时的兜底文案
pub const LOGIN_FALLBACK_ERROR: &str = "An error occurred during login";
/// 注册失败但错误没有消息时的兜底文案
pub const REGISTRATION_FALLBACK_ERROR: &str = "An unknown error occurred.";

// =========================================================
// 状态机
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestState::Succeeded(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(data) => Some(data),
            _ => None,
        }
    }
}

/// 状态发布目标
pub trait StateSink<T> {
    fn publish(&self, state: RequestState<T>);
}

impl<T: Send + Sync + 'static> StateSink<T> for RwSignal<RequestState<T>> {
    fn publish(&self, state: RequestState<T>) {
        self.set(state);
    }
}

impl<T, S: StateSink<T> + ?Sized> StateSink<T> for Rc<S> {
    fn publish(&self, state: RequestState<T>) {
        (**self).publish(state);
    }
}

/// 把错误转换为用户可见的消息；空消息使用兜底文案
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

/// 执行一次请求并发布 `Loading` 以及恰好一个终态
async fn track<T, S, F>(sink: &S, fallback: &str, request: F) -> ApiResult<T>
where
    T: Clone,
    S: StateSink<T>,
    F: Future<Output = ApiResult<T>>,
{
    sink.publish(RequestState::Loading);

    match request.await {
        Ok(data) => {
            sink.publish(RequestState::Succeeded(data.clone()));
            Ok(data)
        }
        Err(err) => {
            sink.publish(RequestState::Failed(failure_message(&err, fallback)));
            Err(err)
        }
    }
}

// =========================================================
// 生命周期逻辑
// =========================================================

/// 登录流程：记录错误后继续返回，调用方据此决定是否导航
pub struct LoginFlow<S> {
    use_case: LoginUseCase,
    sink: S,
}

impl<S: StateSink<LoginResult>> LoginFlow<S> {
    pub fn new(use_case: LoginUseCase, sink: S) -> Self {
        Self { use_case, sink }
    }

    pub async fn login(&self, credentials: LoginCredentials) -> ApiResult<LoginResult> {
        track(
            &self.sink,
            LOGIN_FALLBACK_ERROR,
            self.use_case.execute(credentials),
        )
        .await
    }
}

/// 注册流程：错误只记录在状态中，不再向上抛出
///
/// 不做重复提交去重，每次调用都会发出请求，最后完成的一次决定最终状态。
pub struct RegistrationFlow<S> {
    use_case: RegisterUserUseCase,
    sink: S,
}

impl<S: StateSink<User>> RegistrationFlow<S> {
    pub fn new(use_case: RegisterUserUseCase, sink: S) -> Self {
        Self { use_case, sink }
    }

    pub async fn submit(&self, payload: RegisterUserPayload) {
        let email = payload.email.clone();
        let outcome = track(
            &self.sink,
            REGISTRATION_FALLBACK_ERROR,
            self.use_case.execute(payload),
        )
        .await;

        match outcome {
            Ok(user) => tracing::info!(user_id = %user.id, "registration succeeded"),
            Err(err) => tracing::warn!(%email, error = %err, "registration failed"),
        }
    }
}

// =========================================================
// Leptos hooks
// =========================================================

#[derive(Clone, Copy)]
pub struct UseLogin {
    pub state: RwSignal<RequestState<LoginResult>>,
    dependencies: StoredValue<AuthDependencies, LocalStorage>,
}

impl UseLogin {
    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(RequestState::is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    /// 绑定到本 hook 状态信号的登录流程
    pub fn flow(&self) -> LoginFlow<RwSignal<RequestState<LoginResult>>> {
        let use_case = self
            .dependencies
            .with_value(|deps| deps.login_use_case.clone());
        LoginFlow::new(use_case, self.state)
    }
}

/// 登录 hook，必须在 `AuthProvider` 内部调用
pub fn use_login() -> UseLogin {
    let auth = use_auth_context();
    UseLogin {
        state: RwSignal::new(RequestState::Idle),
        dependencies: auth.dependencies,
    }
}

#[derive(Clone, Copy)]
pub struct UseRegistration {
    pub state: RwSignal<RequestState<User>>,
    dependencies: StoredValue<AuthDependencies, LocalStorage>,
}

impl UseRegistration {
    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(RequestState::is_loading))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    pub fn is_success(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(RequestState::is_success))
    }

    pub async fn submit(self, payload: RegisterUserPayload) {
        let use_case = self
            .dependencies
            .with_value(|deps| deps.register_user_use_case.clone());
        RegistrationFlow::new(use_case, self.state)
            .submit(payload)
            .await;
    }
}

/// 注册 hook，必须在 `AuthProvider` 内部调用
pub fn use_registration() -> UseRegistration {
    let auth = use_auth_context();
    UseRegistration {
        state: RwSignal::new(RequestState::Idle),
        dependencies: auth.dependencies,
    }
}

#[cfg(test)]
mod tests;
