//! LocalStorage 封装模块
//!
//! 基于 `gloo-storage`，只保存非敏感的便利信息（上次登录的邮箱），令牌从不落盘。

use gloo_storage::{LocalStorage, Storage};

const REMEMBERED_EMAIL_KEY: &str = "kudos_last_email";

/// 本地存储操作封装
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取存储的字符串值，键不存在或读取失败时返回 None
    pub fn get(key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
            .inspect_err(|e| tracing::warn!(key, error = %e, "failed to write local storage"))
            .is_ok()
    }

    /// 上次成功登录使用的邮箱，用于自动填充
    pub fn remembered_email() -> Option<String> {
        Self::get(REMEMBERED_EMAIL_KEY).filter(|email| !email.is_empty())
    }

    pub fn remember_email(email: &str) -> bool {
        Self::set(REMEMBERED_EMAIL_KEY, email)
    }
}
