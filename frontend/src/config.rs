//! 运行时配置
//!
//! API 基础地址的解析顺序：
//! 1. 测试构建：固定的本地地址
//! 2. 生产环境（注入的 `window.__ENV.PROD`，未注入该键时看是否 release 构建）：相对路径 `/api`
//! 3. 注入的 `window.__ENV.API_URL`（也接受旧名 `VITE_API_URL`）
//! 4. 开发兜底：固定的本地地址
//!
//! `window.__ENV` 由部署时写入 `index.html` 的脚本提供。

use serde::Deserialize;
use wasm_bindgen::JsValue;

const LOCAL_API_URL: &str = "http://localhost:3001";
const PRODUCTION_API_URL: &str = "/api";
const INJECTED_ENV_KEY: &str = "__ENV";

/// 构建配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Test,
    Development,
    Production,
}

impl Profile {
    pub fn current() -> Self {
        if cfg!(test) {
            Profile::Test
        } else if cfg!(debug_assertions) {
            Profile::Development
        } else {
            Profile::Production
        }
    }
}

/// 部署时注入到页面的环境变量
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InjectedEnv {
    #[serde(rename = "API_URL", alias = "VITE_API_URL", default)]
    pub api_url: Option<String>,
    #[serde(rename = "PROD", default)]
    pub prod: Option<bool>,
}

impl InjectedEnv {
    /// 读取 `window.__ENV`，不存在或格式错误时返回 None
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(INJECTED_ENV_KEY)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }

        serde_wasm_bindgen::from_value(value)
            .inspect_err(|e| tracing::warn!(error = %e, "ignoring malformed window.__ENV"))
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// 按当前构建配置和页面注入的变量解析
    pub fn load() -> Self {
        let config = Self::resolve(Profile::current(), InjectedEnv::from_window().as_ref());
        tracing::info!(api_base_url = %config.api_base_url, "configuration loaded");
        config
    }

    pub fn resolve(profile: Profile, injected: Option<&InjectedEnv>) -> Self {
        let api_base_url = match profile {
            Profile::Test => LOCAL_API_URL.to_string(),
            _ if is_production(profile, injected) => PRODUCTION_API_URL.to_string(),
            _ => injected
                .and_then(|env| env.api_url.as_deref())
                .filter(|url| !url.is_empty())
                .unwrap_or(LOCAL_API_URL)
                .to_string(),
        };

        Self { api_base_url }
    }
}

fn is_production(profile: Profile, injected: Option<&InjectedEnv>) -> bool {
    injected
        .and_then(|env| env.prod)
        .unwrap_or(profile == Profile::Production)
}
