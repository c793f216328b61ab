use kudos_shared::{LoginCredentials, LoginResult};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::hooks::{LoginFlow, StateSink, use_login};
use crate::auth::{AuthContext, use_auth_context};
use crate::components::registration_form::{FormMode, FormState, RegistrationForm};
use crate::web::BrowserStorage;
use crate::web::route::AppRoute;
use crate::web::router::{Link, Navigator, use_router};

/// 登录提交
///
/// 成功时记住邮箱、写入会话并进入称赞墙；失败时错误只留在 hook 状态中，不导航。
/// 返回是否已登录。
pub async fn submit_login<S, N>(
    flow: &LoginFlow<S>,
    credentials: LoginCredentials,
    auth: AuthContext,
    navigator: &N,
    remember_email: impl FnOnce(&str),
) -> bool
where
    S: StateSink<LoginResult>,
    N: Navigator + ?Sized,
{
    let email = credentials.email.clone();
    match flow.login(credentials).await {
        Ok(result) => {
            remember_email(&email);
            auth.sign_in(result);
            navigator.navigate_to(AppRoute::KudosWall);
            true
        }
        Err(_) => false,
    }
}

/// 登录页
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();
    let router = use_router();
    let login = use_login();

    let form = FormState::new();
    if let Some(email) = BrowserStorage::remembered_email() {
        form.email.set(email);
    }

    let on_submit = Callback::new(move |_: ()| {
        let credentials = form.to_credentials();
        spawn_local(async move {
            submit_login(&login.flow(), credentials, auth, &router, |email| {
                BrowserStorage::remember_email(email);
            })
            .await;
        });
    });

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold" data-testid="login-title">"Sign In"</h1>
                    <p class="text-base-content/70">"Sign in to continue to Digital Kudos Wall"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <div class="card-body">
                        <RegistrationForm
                            email=form.email
                            password=form.password
                            on_submit=on_submit
                            is_loading=login.is_loading()
                            error=login.error()
                            mode=FormMode::Login
                        />

                        <div class="divider"></div>
                        <p class="text-center text-sm text-base-content/70">
                            "Don't have an account? "
                            <Link to=AppRoute::Register class="link link-primary">"Sign up here"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
