use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::TransactionType;
use ppob_shared::flows::history::{HistoryFlow, load_page};
use ppob_shared::format::{rupiah, transaction_time};
use ppob_shared::route::AppRoute;

use crate::components::navbar::Navbar;
use crate::components::profile_banner::ProfileBanner;
use crate::state::use_app;

#[component]
pub fn TransactionPage() -> impl IntoView {
    let ctx = use_app();
    ctx.enter(&AppRoute::Transaction);

    let flow = RwSignal::new(HistoryFlow::default());

    let fetch = move |offset: u32| {
        let api = ctx.api();
        let page_size = flow.with_untracked(|f| f.page_size());
        spawn_local(async move {
            let result = load_page(&api, page_size, offset).await;
            flow.try_update(|f| f.finish(offset, result));
        });
    };

    if let Some(offset) = flow.try_update(|f| f.reload()).flatten() {
        fetch(offset);
    }

    let on_show_more = move |_| {
        if let Some(offset) = flow.try_update(|f| f.show_more()).flatten() {
            fetch(offset);
        }
    };

    view! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <main class="px-4 md:px-[8%] py-8">
                <ProfileBanner />

                <h2 class="font-semibold text-lg mb-4">"Semua Transaksi"</h2>
                <div class="space-y-4">
                    {move || {
                        let records = flow.with(|f| f.records().to_vec());
                        if records.is_empty() && !flow.with(|f| f.is_loading()) {
                            return view! {
                                <p class="text-center text-base-content/50 py-8">
                                    "Maaf tidak ada histori transaksi saat ini"
                                </p>
                            }
                            .into_any();
                        }
                        records
                            .into_iter()
                            .map(|record| {
                                let amount_class = match record.transaction_type {
                                    TransactionType::Topup => "text-xl font-bold text-success",
                                    TransactionType::Payment => "text-xl font-bold text-error",
                                };
                                view! {
                                    <div class="border border-base-300 rounded-lg p-4 flex justify-between items-start">
                                        <div>
                                            <p class=amount_class>
                                                {record.transaction_type.sign()} " " {rupiah(record.total_amount)}
                                            </p>
                                            <p class="text-xs text-base-content/50 mt-1">
                                                {transaction_time(&record.created_on)}
                                            </p>
                                        </div>
                                        <p class="text-sm">{record.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>

                <Show when=move || flow.with(|f| f.has_more() && !f.records().is_empty())>
                    <div class="text-center mt-6">
                        <button
                            class="btn btn-ghost text-error"
                            disabled=move || flow.with(|f| f.is_loading())
                            on:click=on_show_more
                        >
                            "Show more"
                        </button>
                    </div>
                </Show>
            </main>
        </div>
    }
}
