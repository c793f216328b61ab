//! 注册 / 登录共用的表单组件
//!
//! 纯展示组件：字段值、提交回调、加载状态和错误都由页面传入。

mod form_state;

pub use form_state::FormState;

use leptos::prelude::*;

/// 表单模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    Login,
    #[default]
    Register,
}

impl FormMode {
    pub fn collects_name(&self) -> bool {
        matches!(self, FormMode::Register)
    }

    /// 姓名字段只在注册模式且页面提供了字段时渲染
    pub fn name_field<T>(&self, field: Option<T>) -> Option<T> {
        field.filter(|_| self.collects_name())
    }

    pub fn submit_label(&self, is_loading: bool) -> &'static str {
        match (is_loading, self) {
            (true, _) => "Processing...",
            (false, FormMode::Login) => "Sign in",
            (false, FormMode::Register) => "Create account",
        }
    }
}

#[component]
pub fn RegistrationForm(
    /// 姓名字段，登录模式下忽略
    #[prop(optional)]
    name: Option<RwSignal<String>>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    on_submit: Callback<()>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] mode: FormMode,
) -> impl IntoView {
    let name_field = mode.name_field(name);

    let handle_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="flex flex-col gap-6 w-full" novalidate on:submit=handle_submit data-testid="registration-form">
            <Show when=move || error.with(Option::is_some)>
                <div role="alert" class="alert alert-error text-sm py-2" data-testid="error-message">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            {name_field.map(|name| view! {
                <div class="form-control">
                    <label for="name" class="label">
                        <span class="label-text">"Full Name"</span>
                    </label>
                    <input id="name" required
                        type="text"
                        data-testid="name-input"
                        on:input=move |ev| name.set(event_target_value(&ev))
                        prop:value=move || name.get()
                        class="input input-bordered w-full"
                    />
                </div>
            })}

            <div class="form-control">
                <label for="email" class="label">
                    <span class="label-text">"Email Address"</span>
                </label>
                <input id="email" required
                    type="email"
                    autocomplete="email"
                    data-testid="email-input"
                    on:input=move |ev| email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                    class="input input-bordered w-full"
                />
            </div>

            <div class="form-control">
                <label for="password" class="label">
                    <span class="label-text">"Password"</span>
                </label>
                <input id="password" required
                    type="password"
                    data-testid="password-input"
                    on:input=move |ev| password.set(event_target_value(&ev))
                    prop:value=move || password.get()
                    class="input input-bordered w-full"
                />
            </div>

            <button type="submit"
                class="btn btn-primary btn-lg mt-2"
                disabled=move || is_loading.get()
                data-testid="register-button"
            >
                {move || mode.submit_label(is_loading.get())}
            </button>
        </form>
    }
}
