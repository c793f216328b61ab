//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责数据的持有以及到请求对象的转换。

use kudos_shared::{LoginCredentials, RegisterUserPayload};
use leptos::prelude::*;

/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    /// 字段原样传递，不做裁剪和校验
    pub fn to_register_payload(&self) -> RegisterUserPayload {
        RegisterUserPayload::new(
            self.name.get_untracked(),
            self.email.get_untracked(),
            self.password.get_untracked(),
        )
    }

    pub fn to_credentials(&self) -> LoginCredentials {
        LoginCredentials::new(self.email.get_untracked(), self.password.get_untracked())
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
