//! 确认 / 结果弹窗
//!
//! 文案全部来自共享层的 [`ModalIntent`]，组件只负责渲染。

use leptos::prelude::*;
use ppob_shared::flows::{ModalIntent, ModalKind};

use crate::assets::LOGO;

fn badge_class(kind: ModalKind) -> &'static str {
    match kind {
        ModalKind::Success => "w-16 h-16 rounded-full bg-success text-success-content flex items-center justify-center",
        ModalKind::Confirm | ModalKind::Failed => {
            "w-16 h-16 rounded-full bg-error text-error-content flex items-center justify-center"
        }
    }
}

fn badge_icon(kind: ModalKind) -> AnyView {
    match kind {
        ModalKind::Confirm => view! {
            <img src=LOGO alt="Logo" class="w-10 h-10 object-contain brightness-0 invert" />
        }
        .into_any(),
        ModalKind::Success => view! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-10 h-10 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
        }
        .into_any(),
        ModalKind::Failed => view! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-10 h-10 stroke-current" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
        }
        .into_any(),
    }
}

#[component]
pub fn Modal(
    /// `None` 时不渲染
    #[prop(into)]
    intent: Signal<Option<ModalIntent>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    move || {
        intent.get().map(|intent| {
            let body = if intent.kind == ModalKind::Confirm {
                view! {
                    <p class="text-base-content/70 mb-2">{intent.headline()}</p>
                    <h3 class="text-2xl font-bold mb-4">{intent.amount_label()}</h3>
                    <button
                        class="btn btn-ghost text-error w-full mb-2"
                        on:click=move |_| on_confirm.run(())
                    >
                        {intent.confirm_label()}
                    </button>
                    <button class="btn btn-ghost w-full opacity-60" on:click=move |_| on_close.run(())>
                        "Batalkan"
                    </button>
                }
                .into_any()
            } else {
                view! {
                    <p class="text-lg mb-2">{intent.headline()}</p>
                    <h3 class="text-2xl font-bold mb-2">{intent.amount_label()}</h3>
                    <p class="text-base-content/70 mb-6">{intent.status_text()}</p>
                    <button class="btn btn-link text-error" on:click=move |_| on_close.run(())>
                        "Kembali ke Beranda"
                    </button>
                }
                .into_any()
            };

            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                    <div class="card bg-base-100 w-full max-w-sm shadow-2xl">
                        <div class="card-body items-center text-center">
                            <div class=badge_class(intent.kind)>{badge_icon(intent.kind)}</div>
                            {body}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
