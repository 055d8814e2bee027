//! 问候语 + 余额卡片

use leptos::prelude::*;
use ppob_shared::format::rupiah;
use ppob_shared::store::UserAction;

use crate::assets::{BALANCE_BACKGROUND, avatar_src, fallback_avatar};
use crate::state::use_app;

#[component]
pub fn ProfileBanner() -> impl IntoView {
    let ctx = use_app();
    let user = ctx.user;

    let avatar = move || user.with(|u| avatar_src(&u.profile));
    let show_balance = move || user.with(|u| u.show_balance);
    let toggle = move |_| ctx.dispatch(UserAction::SetShowBalance(!show_balance()));

    view! {
        <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-8 mb-12">
            <div class="w-full md:w-2/5 text-center md:text-left">
                <img
                    src=avatar
                    alt="Profile"
                    class="w-20 h-20 rounded-full mb-4 mx-auto md:mx-0 object-cover"
                    on:error=|ev| fallback_avatar(&ev)
                />
                <p class="text-base-content/60 text-lg">"Selamat datang,"</p>
                <h1 class="text-3xl font-bold mt-1">
                    {move || user.with(|u| u.profile.display_name())}
                </h1>
            </div>

            <div class="w-full md:w-3/5 relative rounded-2xl overflow-hidden shadow-lg bg-error text-error-content p-6 h-48 flex flex-col justify-center">
                <img
                    src=BALANCE_BACKGROUND
                    alt=""
                    class="absolute right-0 top-0 h-full w-auto object-cover opacity-80"
                />
                <div class="relative z-10">
                    <p class="opacity-80 mb-2">"Saldo anda"</p>
                    <div class="text-3xl font-bold mb-4 tracking-wider min-h-10">
                        {move || {
                            if show_balance() {
                                view! { <span>{user.with(|u| rupiah(u.balance))}</span> }.into_any()
                            } else {
                                view! { <span class="text-4xl translate-y-2 inline-block">"•••••••"</span> }
                                    .into_any()
                            }
                        }}
                    </div>
                    <p class="text-sm font-medium flex items-center gap-2">
                        "Lihat Saldo"
                        <button class="btn btn-ghost btn-xs" on:click=toggle>
                            {move || if show_balance() { "Sembunyikan" } else { "Tampilkan" }}
                        </button>
                    </p>
                </div>
            </div>
        </div>
    }
}
