//! 首页：服务目录与促销横幅

use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::flows::home::{HomeData, load_home, open_service};
use ppob_shared::route::AppRoute;

use crate::components::navbar::Navbar;
use crate::components::profile_banner::ProfileBanner;
use crate::state::{use_app, use_effects};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();
    ctx.enter(&AppRoute::Home);

    let (data, set_data) = signal(HomeData::default());
    let (loading, set_loading) = signal(true);

    let api = ctx.api();
    spawn_local(async move {
        let home = load_home(&api).await;
        set_data.try_set(home);
        set_loading.try_set(false);
    });

    view! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <main class="px-4 md:px-[8%] py-8">
                <ProfileBanner />

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg text-error"></span>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-4 md:grid-cols-6 lg:grid-cols-12 gap-4 mb-12">
                        {move || {
                            data.with(|d| d.services.clone())
                                .into_iter()
                                .map(|service| {
                                    let effect = open_service(&service);
                                    view! {
                                        <button
                                            class="flex flex-col items-center gap-2 cursor-pointer hover:opacity-80"
                                            on:click=move |_| run_effects(vec![effect.clone()])
                                        >
                                            <img
                                                src=service.service_icon.clone()
                                                alt=service.service_name.clone()
                                                class="w-14 h-14 object-contain"
                                            />
                                            <span class="text-xs text-center">{service.service_name.clone()}</span>
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <h2 class="font-semibold mb-4">"Temukan promo menarik"</h2>
                    <div class="flex gap-6 overflow-x-auto pb-4">
                        {move || {
                            data.with(|d| d.banners.clone())
                                .into_iter()
                                .map(|banner| {
                                    view! {
                                        <img
                                            src=banner.banner_image
                                            alt=banner.banner_name
                                            class="h-32 rounded-xl flex-none object-cover"
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </main>
        </div>
    }
}
