use leptos::prelude::*;
use leptos::task::spawn_local;
use ppob_shared::flows::auth::{FormFailure, register};
use ppob_shared::forms::{FieldErrors, RegisterForm};
use ppob_shared::route::AppRoute;

use crate::components::auth_layout::{AuthLayout, ErrorBanner, PasswordInput, TextInput};
use crate::components::button::SubmitButton;
use crate::state::{use_app, use_effects};
use crate::web::router::Link;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let run_effects = use_effects();

    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let request = RegisterForm {
            email: email.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = ctx.api();
        spawn_local(async move {
            match register(&api, &request).await {
                Ok(effects) => {
                    set_errors.try_set(FieldErrors::default());
                    set_success_msg.try_set(Some(
                        "Registrasi berhasil, silakan login".to_string(),
                    ));
                    run_effects(effects);
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
        <AuthLayout title="Lengkapi data untuk membuat akun">
            <form class="space-y-4" on:submit=on_submit novalidate>
                <ErrorBanner message=error_msg on_dismiss=move |_: ()| set_error_msg.set(None) />
                {move || {
                    success_msg
                        .get()
                        .map(|msg| view! { <div role="status" class="alert alert-success text-sm py-2">{msg}</div> })
                }}

                <TextInput value=email errors=errors field="email" input_type="email" placeholder="masukan email anda" />
                <TextInput value=first_name errors=errors field="first_name" placeholder="nama depan" />
                <TextInput value=last_name errors=errors field="last_name" placeholder="nama belakang" />
                <PasswordInput value=password errors=errors field="password" placeholder="buat password" />
                <PasswordInput
                    value=confirm_password
                    errors=errors
                    field="confirm_password"
                    placeholder="konfirmasi password"
                />

                <SubmitButton loading=is_submitting text="Registrasi" />
            </form>

            <p class="text-center text-sm text-base-content/60 mt-6">
                "sudah punya akun? login "
                <Link route=AppRoute::Login class="text-error font-semibold".to_string()>
                    "di sini"
                </Link>
            </p>
        </AuthLayout>
    }
}
