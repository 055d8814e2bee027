//! 登录 / 注册页共用的布局与表单小部件

use leptos::prelude::*;
use ppob_shared::forms::FieldErrors;

use crate::assets::{LOGIN_ILLUSTRATION, LOGO};
use crate::components::icons::{Eye, EyeOff};

#[component]
pub fn AuthLayout(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex bg-base-100">
            <div class="w-full lg:w-1/2 flex items-center justify-center p-8">
                <div class="w-full max-w-md">
                    <div class="flex items-center justify-center gap-2 mb-6">
                        <img src=LOGO alt="SIMS PPOB Logo" class="h-8 w-8" />
                        <span class="font-bold text-2xl">"SIMS PPOB"</span>
                    </div>
                    <h1 class="text-2xl font-bold text-center mb-8">{title}</h1>
                    {children()}
                </div>
            </div>
            <div class="hidden lg:block lg:w-1/2 bg-error/10">
                <img
                    src=LOGIN_ILLUSTRATION
                    alt="Illustrasi Login"
                    class="h-full w-full object-cover"
                />
            </div>
        </div>
    }
}

/// 可关闭的错误横幅
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span class="flex-1">{message}</span>
                    <button type="button" class="btn btn-ghost btn-xs" on:click=move |_| on_dismiss.run(())>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

/// 单个字段的内联错误
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|message| {
            view! { <span class="text-error text-xs mt-1 text-right">{message}</span> }
        })
    }
}

/// 密码框当前应使用的 `type`
fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// 带内联错误的输入框
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <input
                type=input_type
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full"
            />
            <FieldError errors=errors field=field />
        </div>
    }
}

/// 可切换明文显示的密码框
#[component]
pub fn PasswordInput(
    value: RwSignal<String>,
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div class="form-control">
            <div class="relative">
                <input
                    type=move || password_input_type(visible.get())
                    placeholder=placeholder
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered w-full pr-10"
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 flex items-center pr-3 text-base-content/40"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || {
                        if visible.get() {
                            view! { <Eye attr:class="h-5 w-5" /> }.into_any()
                        } else {
                            view! { <EyeOff attr:class="h-5 w-5" /> }.into_any()
                        }
                    }}
                </button>
            </div>
            <FieldError errors=errors field=field />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_visibility_toggles_input_type() {
        assert_eq!(password_input_type(false), "password");
        assert_eq!(password_input_type(true), "text");
    }
}
