use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопки листания страниц со счётчиком "Страница X / Y".
///
/// Номер страницы внутри нулевой, пользователю показывается с единицы.
#[component]
pub fn PaginationControls(
    /// Текущая страница (с нуля)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Всего страниц
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Можно ли листать назад
    #[prop(into)]
    can_prev: Signal<bool>,

    /// Можно ли листать вперёд
    #[prop(into)]
    can_next: Signal<bool>,

    /// Переход на предыдущую страницу
    on_prev: Callback<()>,

    /// Переход на следующую страницу
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; gap: 12px; padding: 16px;">
            <span>
                {move || {
                    let total = total_pages.get().max(1);
                    format!("Страница {} / {}", current_page.get() + 1, total)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_prev.get()
                title="Предыдущая страница"
            >
                {icon("arrow-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next.get()
                title="Следующая страница"
            >
                {icon("arrow-right")}
            </button>
        </div>
    }
}
