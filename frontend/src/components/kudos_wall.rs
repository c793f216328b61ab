//! 称赞墙
//!
//! 暂时展示固定的示例数据，加载延迟模拟后端请求。

use gloo_timers::future::TimeoutFuture;
use kudos_shared::{Kudo, KudoDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_context;

const LOADING_DELAY_MS: u32 = 500;

fn avatar(seed: &str) -> Option<String> {
    Some(format!("https://i.pravatar.cc/150?u={seed}"))
}

/// 示例数据
pub fn mock_kudos() -> Vec<Kudo> {
    let entries = [
        (
            "1",
            "Well Done",
            ("Sarah Chen", "sarah"),
            ("Michael Thompson", "michael"),
            "Outstanding work on the Q1 campaign!",
            (2025, 3, 15),
        ),
        (
            "2",
            "Great Teamwork",
            ("David Kumar", "david"),
            ("Emily Rodriguez", "emily"),
            "Incredible job debugging the production issue!",
            (2025, 3, 14),
        ),
        (
            "3",
            "Proud of You",
            ("Lisa Park", "lisa"),
            ("James Wilson", "james"),
            "Phenomenal work closing the enterprise deal!",
            (2025, 3, 13),
        ),
    ];

    entries
        .into_iter()
        .filter_map(|(id, category, (to, to_seed), (from, from_seed), message, (y, m, d))| {
            Some(Kudo {
                id: id.to_string(),
                category: category.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                message: message.to_string(),
                date: KudoDate::from_ymd(y, m, d)?,
                from_profile_picture: avatar(from_seed),
                to_profile_picture: avatar(to_seed),
            })
        })
        .collect()
}

#[component]
pub fn KudosCard(kudo: Kudo) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md" data-testid="kudos-card">
            <div class="card-body gap-3">
                <h2 class="card-title">{kudo.category}</h2>
                <div class="flex items-center gap-2">
                    <Avatar src=kudo.to_profile_picture size_class="w-10" />
                    <span>{kudo.to}</span>
                </div>
                <p class="text-sm text-base-content/70">{kudo.message}</p>
                <div class="flex items-center justify-between text-xs text-base-content/60">
                    <div class="flex items-center gap-2">
                        <Avatar src=kudo.from_profile_picture size_class="w-6" />
                        <span>"From: " {kudo.from}</span>
                    </div>
                    <span>{kudo.date.to_string()}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Avatar(src: Option<String>, size_class: &'static str) -> impl IntoView {
    view! {
        <div class="avatar">
            <div class=format!("{size_class} rounded-full bg-base-300")>
                {src.map(|src| view! { <img src=src alt="" /> })}
            </div>
        </div>
    }
}

#[component]
pub fn KudosWallPage() -> impl IntoView {
    let auth = use_auth_context();
    let session = auth.session();

    let kudos = RwSignal::new(Vec::<Kudo>::new());
    let loading = RwSignal::new(true);

    spawn_local(async move {
        TimeoutFuture::new(LOADING_DELAY_MS).await;
        kudos.set(mock_kudos());
        loading.set(false);
    });

    let greeting = move || {
        session.with(|s| {
            s.as_ref()
                .map(|s| format!("Signed in as {}", s.display_name()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-6xl mx-auto space-y-6">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1">
                        <h1 class="text-2xl font-bold px-2">"Kudos Wall"</h1>
                    </div>
                    <div class="flex-none gap-4">
                        <span class="text-sm text-base-content/70">{greeting}</span>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| auth.sign_out()>
                            "Sign out"
                        </button>
                    </div>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! {
                        <div class="flex justify-center mt-8">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4">
                        <For
                            each=move || kudos.get()
                            key=|kudo| kudo.id.clone()
                            children=move |kudo| view! { <KudosCard kudo=kudo /> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_kudos_has_three_entries_newest_first() {
        let kudos = mock_kudos();

        assert_eq!(kudos.len(), 3);
        let recipients: Vec<_> = kudos.iter().map(|k| k.to.as_str()).collect();
        assert_eq!(recipients, ["Sarah Chen", "David Kumar", "Lisa Park"]);
        assert!(kudos.windows(2).all(|pair| pair[0].date > pair[1].date));
    }

    #[test]
    fn mock_kudos_render_dates_for_display() {
        let dates: Vec<_> = mock_kudos().iter().map(|k| k.date.to_string()).collect();
        assert_eq!(dates, ["Mar 15, 2025", "Mar 14, 2025", "Mar 13, 2025"]);
    }

    #[test]
    fn mock_kudos_carry_sender_and_avatars() {
        let first = &mock_kudos()[0];
        assert_eq!(first.from, "Michael Thompson");
        assert_eq!(first.category, "Well Done");
        assert_eq!(
            first.to_profile_picture.as_deref(),
            Some("https://i.pravatar.cc/150?u=sarah")
        );
    }
}
