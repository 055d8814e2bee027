use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::TOPUP_PRESET_AMOUNTS;
use ppob_shared::flows::topup::TopupFlow;
use ppob_shared::format::rupiah;
use ppob_shared::route::AppRoute;

use crate::components::modal::Modal;
use crate::components::navbar::Navbar;
use crate::components::profile_banner::ProfileBanner;
use crate::state::{use_app, use_effects};

#[component]
pub fn TopupPage() -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();
    ctx.enter(&AppRoute::Topup);

    let flow = RwSignal::new(TopupFlow::new());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        flow.update(|f| {
            f.request_confirm();
        });
    };

    let on_confirm = move |_: ()| {
        let Some(amount) = flow.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.top_up(amount).await;
            match flow.try_update(|f| f.finish(result)) {
                Some(effects) => run_effects(effects),
                // 页面已卸载，仍然刷新余额
                None => ctx.fetch_balance(),
            }
        });
    };

    let on_close = move |_: ()| {
        if let Some(effects) = flow.try_update(|f| f.close_modal()) {
            run_effects(effects);
        }
    };

    let submit_disabled = move || flow.with(|f| !f.is_valid() || f.is_submitting());

    view! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <main class="px-4 md:px-[8%] py-8">
                <ProfileBanner />

                <p class="text-lg">"Silahkan masukan"</p>
                <h2 class="text-3xl font-bold mb-8">"Nominal Top Up"</h2>

                <div class="flex flex-col-reverse lg:flex-row gap-6">
                    <form class="flex-1 space-y-4" on:submit=on_submit>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="masukan nominal Top Up"
                            on:input=move |ev| flow.update(|f| f.set_input(&event_target_value(&ev)))
                            prop:value=move || flow.with(|f| f.display_input())
                            class="input input-bordered w-full"
                        />
                        <button
                            type="submit"
                            disabled=submit_disabled
                            class="btn btn-error w-full"
                        >
                            {move || if flow.with(|f| f.is_submitting()) { "Loading..." } else { "Top Up" }}
                        </button>
                    </form>

                    <div class="grid grid-cols-3 gap-4 lg:w-2/5">
                        {TOPUP_PRESET_AMOUNTS
                            .into_iter()
                            .map(|amount| {
                                view! {
                                    <button
                                        type="button"
                                        class="btn btn-outline"
                                        on:click=move |_| flow.update(|f| f.select_preset(amount))
                                    >
                                        {rupiah(amount)}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </main>

            <Modal
                intent=Signal::derive(move || flow.with(|f| f.modal().cloned()))
                on_confirm=on_confirm
                on_close=on_close
            />
        </div>
    }
}
