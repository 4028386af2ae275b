use crate::domain::vacancies::ui::VacanciesPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <VacanciesPage />
    }
}
