use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::hooks::use_registration;
use crate::components::registration_form::{FormMode, FormState, RegistrationForm};
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 注册页
#[component]
pub fn RegistrationPage() -> impl IntoView {
    let registration = use_registration();
    let is_success = registration.is_success();
    let form = FormState::new();

    let on_submit = Callback::new(move |_: ()| {
        let payload = form.to_register_payload();
        spawn_local(registration.submit(payload));
    });

    // 欢迎语使用表单中填写的邮箱
    let welcome = move || {
        format!("Welcome to the Digital Kudos Wall, {}!", form.email.get())
    };

    view! {
        <Show
            when=move || !is_success.get()
            fallback=move || view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="card w-full max-w-lg shadow-2xl bg-base-100">
                        <div class="card-body text-center">
                            <h2 class="text-3xl font-bold text-primary" data-testid="registration-success">
                                "Registration Successful!"
                            </h2>
                            <p class="text-base-content/70">{welcome}</p>
                            <Link to=AppRoute::Login class="btn btn-primary mt-4">"Sign in"</Link>
                        </div>
                    </div>
                </div>
            }
        >
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="card w-full max-w-lg shadow-2xl bg-base-100 overflow-hidden">
                    <div class="bg-gradient-to-br from-indigo-400 to-purple-700 p-8 text-center text-white">
                        <h1 class="text-3xl font-bold">"Join Our Team"</h1>
                        <p class="mt-2 opacity-90">"Create your account to start sharing kudos"</p>
                    </div>

                    <div class="card-body">
                        <RegistrationForm
                            name=form.name
                            email=form.email
                            password=form.password
                            on_submit=on_submit
                            is_loading=registration.is_loading()
                            error=registration.error()
                            mode=FormMode::Register
                        />

                        <div class="divider"></div>
                        <p class="text-center text-sm text-base-content/70">
                            "Already have an account? "
                            <Link to=AppRoute::Login class="link link-primary">"Sign in here"</Link>
                        </p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
