use leptos::prelude::*;
use ppob_shared::route::AppRoute;

use crate::assets::LOGO;
use crate::web::router::{Link, use_router};

const LINKS: [(AppRoute, &str); 3] = [
    (AppRoute::Topup, "Top Up"),
    (AppRoute::Transaction, "Transaction"),
    (AppRoute::Account, "Akun"),
];

/// 顶部导航栏，高亮当前页面
#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();

    view! {
        <nav class="navbar bg-base-100 border-b border-base-300 px-4 md:px-[8%] sticky top-0 z-40">
            <div class="flex-1">
                <Link route=AppRoute::Home class="flex items-center gap-2".to_string()>
                    <img src=LOGO alt="SIMS PPOB Logo" class="h-8 w-8" />
                    <span class="font-bold text-xl">"SIMS PPOB"</span>
                </Link>
            </div>
            <div class="flex-none flex items-center gap-8 md:gap-12 font-medium">
                {LINKS
                    .into_iter()
                    .map(|(route, label)| {
                        let target = route.clone();
                        let class = Signal::derive(move || {
                            if router.current_route().get() == target {
                                "text-error transition-colors".to_string()
                            } else {
                                "hover:text-error transition-colors".to_string()
                            }
                        });
                        view! { <Link route=route class=class>{label}</Link> }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
