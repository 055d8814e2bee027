use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::flows::auth::{FormFailure, login};
use ppob_shared::forms::{FieldErrors, LoginForm};
use ppob_shared::route::AppRoute;

use crate::components::auth_layout::{AuthLayout, ErrorBanner, PasswordInput, TextInput};
use crate::components::button::SubmitButton;
use crate::state::{use_app, use_effects};
use crate::web::router::Link;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = ctx.api();
        spawn_local(async move {
            match login(&api, &form).await {
                Ok(token) => {
                    set_errors.try_set(FieldErrors::default());
                    run_effects(ctx.login(token));
                }
                Err(FormFailure::Invalid(field_errors)) => {
                    set_errors.try_set(field_errors);
                }
                Err(FormFailure::Rejected(message)) => {
                    set_errors.try_set(FieldErrors::default());
                    set_error_msg.try_set(Some(message));
                }
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <AuthLayout title="Masuk atau buat akun untuk memulai">
            <form class="space-y-4" on:submit=on_submit novalidate>
                <ErrorBanner message=error_msg on_dismiss=move |_: ()| set_error_msg.set(None) />

                <TextInput value=email errors=errors field="email" input_type="email" placeholder="masukan email anda" />
                <PasswordInput value=password errors=errors field="password" placeholder="masukan password anda" />

                <SubmitButton loading=is_submitting text="Masuk" />
            </form>

            <p class="text-center text-sm text-base-content/60 mt-6">
                "belum punya akun? registrasi "
                <Link route=AppRoute::Register class="text-error font-semibold".to_string()>
                    "di sini"
                </Link>
            </p>
        </AuthLayout>
    }
}
