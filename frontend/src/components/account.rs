//! 账户页：头像、资料编辑与登出

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::{File, HtmlInputElement};
use ppob_shared::ACCEPTED_IMAGE_TYPES;
use ppob_shared::client::ImageUpload;
use ppob_shared::flows::account::{AccountFlow, save_profile, upload_image};
use ppob_shared::route::AppRoute;
use wasm_bindgen_futures::JsFuture;

use crate::assets::{avatar_src, fallback_avatar};
use crate::components::auth_layout::FieldError;
use crate::components::navbar::Navbar;
use crate::state::{use_app, use_effects};

/// 读取文件内容
async fn read_file(file: &File) -> Option<Vec<u8>> {
    match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => Some(js_sys::Uint8Array::new(&buffer).to_vec()),
        Err(e) => {
            log::error!("failed to read {}: {:?}", file.name(), e);
            None
        }
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();
    ctx.enter(&AppRoute::Account);

    let user = ctx.user;
    let flow = RwSignal::new(AccountFlow::default());
    let errors = Signal::derive(move || flow.with(|f| f.errors().clone()));

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 允许再次选择同一个文件
        input.set_value("");

        let size = file.size() as u64;
        match flow.try_update(|f| f.begin_upload(size)) {
            Some(Ok(())) => {}
            Some(Err(alert)) => {
                run_effects(vec![alert]);
                return;
            }
            None => return,
        }

        let api = ctx.api();
        spawn_local(async move {
            let effects = match read_file(&file).await {
                Some(bytes) => {
                    let upload = ImageUpload {
                        file_name: file.name(),
                        bytes,
                    };
                    upload_image(&api, upload).await
                }
                None => Vec::new(),
            };
            flow.try_update(|f| f.finish_upload());
            run_effects(effects);
        });
    };

    let on_save = move |_| {
        let Some(form) = flow.try_update(|f| f.begin_save()).flatten() else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let saved = save_profile(&api, &form).await;
            if let Some(effects) = flow.try_update(|f| f.finish_save(saved)) {
                run_effects(effects);
            }
        });
    };

    let on_edit = move |_| user.with_untracked(|u| flow.update(|f| f.start_edit(&u.profile)));
    let on_cancel = move |_| flow.update(|f| f.cancel_edit());
    let on_logout = move |_| {
        if let Some(effects) = flow.try_update(|f| f.logout()) {
            run_effects(effects);
        }
    };

    let editing = move || flow.with(|f| f.is_editing());
    let avatar = move || user.with(|u| avatar_src(&u.profile));

    // 非编辑状态显示当前资料，编辑状态显示草稿
    let first_name = move || {
        if editing() {
            flow.with(|f| f.draft().first_name.clone())
        } else {
            user.with(|u| u.profile.first_name.clone())
        }
    };
    let last_name = move || {
        if editing() {
            flow.with(|f| f.draft().last_name.clone())
        } else {
            user.with(|u| u.profile.last_name.clone())
        }
    };

    view! {
        <div class="min-h-screen bg-base-100">
            <Navbar />
            <main class="max-w-xl mx-auto px-4 py-8 flex flex-col items-center">
                <label class="relative cursor-pointer mb-4">
                    <img
                        src=avatar
                        alt="Profile"
                        class="w-28 h-28 rounded-full object-cover border border-base-300"
                        on:error=|ev| fallback_avatar(&ev)
                    />
                    <span class="absolute bottom-0 right-0 btn btn-circle btn-xs">
                        {move || if flow.with(|f| f.is_uploading()) { "…" } else { "✎" }}
                    </span>
                    <input type="file" accept=ACCEPTED_IMAGE_TYPES class="hidden" on:change=on_file />
                </label>
                <h1 class="text-2xl font-bold mb-8">
                    {move || user.with(|u| u.profile.display_name())}
                </h1>

                <div class="w-full space-y-4">
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Email"</span></label>
                        <input
                            type="email"
                            readonly
                            prop:value=move || user.with(|u| u.profile.email.clone())
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Nama Depan"</span></label>
                        <input
                            type="text"
                            readonly=move || !editing()
                            prop:value=first_name
                            on:input=move |ev| flow.update(|f| f.set_first_name(&event_target_value(&ev)))
                            class="input input-bordered w-full"
                        />
                        <FieldError errors=errors field="first_name" />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Nama Belakang"</span></label>
                        <input
                            type="text"
                            readonly=move || !editing()
                            prop:value=last_name
                            on:input=move |ev| flow.update(|f| f.set_last_name(&event_target_value(&ev)))
                            class="input input-bordered w-full"
                        />
                        <FieldError errors=errors field="last_name" />
                    </div>

                    <Show
                        when=editing
                        fallback=move || {
                            view! {
                                <button class="btn btn-outline btn-error w-full" on:click=on_edit>
                                    "Edit Profil"
                                </button>
                                <button class="btn btn-error w-full" on:click=on_logout>
                                    "Logout"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn-error w-full"
                            disabled=move || flow.with(|f| f.is_saving())
                            on:click=on_save
                        >
                            {move || if flow.with(|f| f.is_saving()) { "Loading..." } else { "Simpan" }}
                        </button>
                        <button class="btn btn-outline btn-error w-full" on:click=on_cancel>
                            "Batalkan"
                        </button>
                    </Show>
                </div>
            </main>
        </div>
    }
}
