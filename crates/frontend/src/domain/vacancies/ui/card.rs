use contracts::domain::vacancy::VacancyRecord;
use leptos::prelude::*;

/// Карточка вакансии в общей сетке.
#[component]
pub fn VacancyCard(
    vacancy: VacancyRecord,
    /// Клик по "Откликнуться!"
    on_apply: Callback<VacancyRecord>,
) -> impl IntoView {
    let place = vacancy.placetitle.clone().unwrap_or_default();
    let title = vacancy.proftitle.clone();
    let salary = vacancy.known_salary();
    let direction = vacancy.directiontitle.clone();
    let client = vacancy.clientname.clone();
    let vacancy_for_apply = vacancy.clone();

    view! {
        <div style="display: flex; flex-direction: column; justify-content: space-between; min-width: 250px; padding: 24px 20px; border: 1px solid #e1e1e1; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); background: #fff;">
            <div>
                <div style="color: #a0aec0; font-size: 13px; margin-bottom: 16px;">{place}</div>
                <div style="padding-bottom: 30px; margin-bottom: 30px; border-bottom: 1px solid #e1e1e1; word-break: break-word;">
                    <h3 style="font-size: 18px; margin: 0;">{title}</h3>
                </div>
                <div style="display: flex; flex-direction: column; gap: 12px; font-size: 16px;">
                    <span>{salary}</span>
                    <span>{direction}</span>
                    <span>{client}</span>
                </div>
            </div>
            <div style="display: flex; flex-direction: column; gap: 8px; margin-top: 24px;">
                <button class="button button--secondary">
                    {"Подробнее"}
                </button>
                <button
                    class="button button--primary"
                    on:click=move |_| on_apply.run(vacancy_for_apply.clone())
                >
                    {"Откликнуться!"}
                </button>
            </div>
        </div>
    }
}
