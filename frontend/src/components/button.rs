use leptos::prelude::*;

/// 表单提交按钮，加载中禁用并显示「Loading...」
#[component]
pub fn SubmitButton(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] text: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || loading.get()
            class="btn btn-primary w-full"
        >
            {move || if loading.get() { "Loading...".to_string() } else { text.clone() }}
        </button>
    }
}
