//! Input group for creating a worker or administrator account.

use leptos::prelude::*;

use crate::net::types::NewAccount;

#[component]
pub fn AccountFields(account: RwSignal<NewAccount>) -> impl IntoView {
    view! {
        <div class="form-row">
            <label class="dialog__label">
                "First Name *"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || account.with(|a| a.first_name.clone())
                    on:input=move |ev| account.update(|a| a.first_name = event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Last Name *"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || account.with(|a| a.last_name.clone())
                    on:input=move |ev| account.update(|a| a.last_name = event_target_value(&ev))
                />
            </label>
        </div>
        <label class="dialog__label">
            "Email *"
            <input
                class="dialog__input"
                type="email"
                prop:value=move || account.with(|a| a.email.clone())
                on:input=move |ev| account.update(|a| a.email = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Password *"
            <input
                class="dialog__input"
                type="password"
                autocomplete="new-password"
                prop:value=move || account.with(|a| a.password.clone())
                on:input=move |ev| account.update(|a| a.password = event_target_value(&ev))
            />
        </label>
        <label class="dialog__label">
            "Phone Number"
            <input
                class="dialog__input"
                type="tel"
                prop:value=move || account.with(|a| a.phone_number.clone().unwrap_or_default())
                on:input=move |ev| account.update(|a| a.phone_number = Some(event_target_value(&ev)))
            />
        </label>
    }
}
