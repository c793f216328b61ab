//! Digital Kudos Wall 前端应用
//!
//! 采用 Context-Driven 的分层架构：
//! - `api`: JSON over HTTP 客户端
//! - `auth`: 仓储 → 服务适配器 → 用例 → hooks，以及 `AuthProvider`
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod components {
    pub mod kudos_wall;
    pub mod login_page;
    pub mod registration_form;
    pub mod registration_page;
}

// 浏览器 API 封装
pub mod web {
    pub mod console;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{FetchTransport, HttpRequest, HttpResponse, Transport};
    #[cfg(test)]
    pub use http::MockTransport;
    pub use storage::BrowserStorage;
}

pub use config::AppConfig;
pub use web::console::init_logging;

use crate::auth::AuthProvider;
use crate::components::kudos_wall::KudosWallPage;
use crate::components::login_page::LoginPage;
use crate::components::registration_page::RegistrationPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Register => view! { <RegistrationPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::KudosWall => view! { <KudosWallPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Register class="btn btn-ghost mt-4">"Back to start"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider config=AppConfig::load()>
            <AuthenticatedRouter />
        </AuthProvider>
    }
}

/// 路由器需要读取 `AuthProvider` 提供的认证信号
#[component]
fn AuthenticatedRouter() -> impl IntoView {
    let is_authenticated = auth::use_auth_context().is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
