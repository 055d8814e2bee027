use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::flows::purchase::PurchaseFlow;
use ppob_shared::format::group_thousands;
use ppob_shared::route::AppRoute;

use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::profile_banner::ProfileBanner;
use crate::state::{use_app, use_effects};

/// 购买单个服务，`code` 来自 `/purchase/:code`
#[component]
pub fn PurchasePage(code: String) -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();
    ctx.enter(&AppRoute::Purchase(code.clone()));

    let flow = RwSignal::new(PurchaseFlow::new(code));

    let api = ctx.api();
    spawn_local(async move {
        let result = api.services().await;
        if let Some(effects) = flow.try_update(|f| f.on_catalog(result)) {
            run_effects(effects);
        }
    });

    let on_pay = move |_| {
        flow.update(|f| {
            f.open_confirm();
        });
    };

    let on_confirm = move |_: ()| {
        let Some(service_code) = flow.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.purchase(&service_code).await;
            match flow.try_update(|f| f.finish(result)) {
                Some(effects) => run_effects(effects),
                None => ctx.fetch_balance(),
            }
        });
    };

    let on_close = move |_: ()| {
        if let Some(effects) = flow.try_update(|f| f.close_modal()) {
            run_effects(effects);
        }
    };

    view! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <main class="px-4 md:px-[8%] py-8">
                <ProfileBanner />

                {move || match flow.with(|f| f.service().cloned()) {
                    None => view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-error"></span>
                        </div>
                    }
                    .into_any(),
                    Some(service) => view! {
                        <p class="text-lg">"Pembayaran"</p>
                        <div class="flex items-center gap-3 mb-8">
                            <img src=service.service_icon alt="" class="w-8 h-8 object-contain" />
                            <h2 class="text-xl font-bold">{service.service_name}</h2>
                        </div>
                        <div class="space-y-4">
                            <input
                                type="text"
                                readonly
                                value=group_thousands(service.service_tariff)
                                class="input input-bordered w-full"
                            />
                            <button
                                class="btn btn-error w-full"
                                disabled=move || flow.with(|f| f.is_loading())
                                on:click=on_pay
                            >
                                {move || flow.with(|f| f.button_label())}
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </main>

            <Modal
                intent=Signal::derive(move || flow.with(|f| f.modal().cloned()))
                on_confirm=on_confirm
                on_close=on_close
            />
        </div>
    }
}
