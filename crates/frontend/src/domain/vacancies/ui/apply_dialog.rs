use crate::shared::icons::icon;
use contracts::domain::vacancy::VacancyRecord;
use contracts::shared::apply_form::ApplyForm;
use contracts::shared::phone::normalize_phone_input;
use leptos::prelude::*;
use std::collections::HashMap;

fn field_error(errors: &HashMap<&'static str, String>, field: &str) -> Option<String> {
    errors.get(field).cloned()
}

/// Модальное окно "Откликнуться": фамилия, имя, отчество, телефон с
/// маской и согласие на обработку персональных данных.
#[component]
pub fn ApplyDialog(vacancy: VacancyRecord, on_close: Callback<()>) -> impl IntoView {
    let last_name = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let parent_name = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let agree = RwSignal::new(false);
    let (errors, set_errors) = signal(HashMap::<&'static str, String>::new());

    let vacancy_id = vacancy.vacancy_id;
    let vacancy_title = vacancy.proftitle.clone();

    let handle_submit = move |_| {
        let form = ApplyForm {
            last_name: last_name.get_untracked(),
            first_name: first_name.get_untracked(),
            parent_name: parent_name.get_untracked(),
            phone_number: phone_number.get_untracked(),
        };
        let validation = form.validate();
        if !validation.is_empty() {
            set_errors.set(validation);
            return;
        }

        let response = serde_json::json!({
            "lastName": form.last_name,
            "firstName": form.first_name,
            "parentName": form.parent_name,
            "phoneNumber": form.phone_number,
            "vacancy_id": vacancy_id,
            "vacancy_name": vacancy_title.clone(),
        });
        let msg = format!(
            "Вы откликнулись: \n\n{}",
            serde_json::to_string_pretty(&response).unwrap_or_default()
        );
        web_sys::window().and_then(|w| w.alert_with_message(&msg).ok());
        on_close.run(());
    };


    view! {
        <div class="modal-overlay">
            <div class="modal-content" style="max-width: 440px; width: 100%; background: #fff; border-radius: 8px; padding: 24px;">
                <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;">
                    <h2 style="font-size: 24px; margin: 0;">{"Откликнуться"}</h2>
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                        title="Закрыть"
                    >
                        {icon("x")}
                    </button>
                </div>

                <div style="display: flex; flex-direction: column; gap: 16px;">
                    <div class="form__group">
                        <label class="form__label" for="lastName">{"Фамилия"}</label>
                        <input
                            id="lastName"
                            class="form__input"
                            placeholder="Фамилия"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        {move || field_error(&errors.get(), "last_name").map(|e| view! {
                            <div style="color: #c33; font-size: 13px;">{e}</div>
                        })}
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="firstName">{"Имя"}</label>
                        <input
                            id="firstName"
                            class="form__input"
                            placeholder="Имя"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        {move || field_error(&errors.get(), "first_name").map(|e| view! {
                            <div style="color: #c33; font-size: 13px;">{e}</div>
                        })}
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="parentName">{"Отчество"}</label>
                        <input
                            id="parentName"
                            class="form__input"
                            placeholder="Отчество"
                            prop:value=move || parent_name.get()
                            on:input=move |ev| parent_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="phoneNumber">{"Номер телефона"}</label>
                        <input
                            id="phoneNumber"
                            class="form__input"
                            placeholder="+7 (999) 999-99-99"
                            prop:value=move || phone_number.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                let previous = phone_number.get_untracked();
                                phone_number.set(normalize_phone_input(&value, &previous));
                            }
                        />
                        {move || field_error(&errors.get(), "phone_number").map(|e| view! {
                            <div style="color: #c33; font-size: 13px;">{e}</div>
                        })}
                    </div>
                </div>

                <div style="display: flex; flex-direction: column; align-items: start; gap: 12px; margin-top: 24px;">
                    <label style="display: inline-flex; align-items: start; gap: 6px; cursor: pointer; user-select: none;">
                        <input
                            type="checkbox"
                            prop:checked=move || agree.get()
                            on:change=move |ev| agree.set(event_target_checked(&ev))
                            style="cursor: pointer; margin-top: 4px;"
                        />
                        <span style="color: #a0aec0; font-size: 12px;">
                            {"Я даю согласие на обработку своих персональных данных в соответствии с положением об обработке персональных данных."}
                        </span>
                    </label>
                    <button
                        class="button button--primary"
                        disabled=move || !agree.get()
                        on:click=handle_submit
                    >
                        {"Откликнуться"}
                    </button>
                </div>
            </div>
        </div>
    }
}
