//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

/// 写入 History 状态
fn write_history(path: &str, mode: HistoryMode) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };

    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
    };
    if result.is_err() {
        tracing::warn!(path, "failed to update browser history");
    }
}

/// 守卫：返回实际应该进入的路由
pub fn guard(target: AppRoute, is_authenticated: bool) -> AppRoute {
    if target.requires_auth() && !is_authenticated {
        AppRoute::auth_failure_redirect()
    } else if target.should_redirect_when_authenticated() && is_authenticated {
        AppRoute::auth_success_redirect()
    } else {
        target
    }
}

/// 认证状态变化后当前路由需要跳转到的位置
pub fn auth_redirect(current: AppRoute, is_authenticated: bool) -> Option<AppRoute> {
    let resolved = guard(current, is_authenticated);
    (resolved != current).then_some(resolved)
}

/// 导航能力
///
/// 页面逻辑只依赖这个接口，测试时用记录型实现替换浏览器路由。
pub trait Navigator {
    fn navigate_to(&self, target: AppRoute);
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    /// 认证状态检查（注入的信号）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let requested = AppRoute::from_path(&current_path());
        let initial = guard(requested, is_authenticated.get_untracked());
        if initial != requested {
            write_history(initial.to_path(), HistoryMode::Replace);
        }

        Self {
            current_route: RwSignal::new(initial),
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route.read_only()
    }

    fn go(&self, target: AppRoute, mode: HistoryMode) {
        let resolved = guard(target, self.is_authenticated.get_untracked());
        if resolved != target {
            tracing::info!(from = %target, to = %resolved, "navigation redirected by guard");
        }

        write_history(resolved.to_path(), mode);
        self.current_route.set(resolved);
    }

    /// 浏览器后退/前进同样经过守卫
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            if guard(target, router.is_authenticated.get_untracked()) == target {
                router.current_route.set(target);
            } else {
                router.go(target, HistoryMode::Replace);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时重新检查当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let Some(redirect) = auth_redirect(route, is_auth) {
                tracing::debug!(authenticated = is_auth, %route, %redirect, "auth state changed");
                write_history(redirect.to_path(), HistoryMode::Push);
                router.current_route.set(redirect);
            }
        });
    }
}

impl Navigator for RouterService {
    /// **核心方法：导航与守卫**
    fn navigate_to(&self, target: AppRoute) {
        self.go(target, HistoryMode::Push);
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || matcher(router.current_route().get())
}

/// 站内链接，点击时走路由服务而不是整页跳转
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
