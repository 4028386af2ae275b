use super::apply_dialog::ApplyDialog;
use super::card::VacancyCard;
use super::category_panel::CategoryPanel;
use crate::domain::vacancies::api::fetch_vacancies;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use contracts::domain::vacancy::{EntityRef, VacancyFilter, VacancyRecord};
use contracts::shared::pagination::Pager;
use leptos::prelude::*;

const PAGE_SIZE: usize = 6;

/// Страница подбора вакансий: каскадные фильтры слева, сетка карточек
/// с пагинацией справа, модальное окно отклика поверх.
///
/// Все изменения выбора идут через операции `VacancyFilter`; после
/// каждой из них новый видимый срез явно передаётся пагинатору (тот
/// сам возвращается на первую страницу).
#[component]
pub fn VacanciesPage() -> impl IntoView {
    let filter = RwSignal::new(VacancyFilter::new());
    let pager = RwSignal::new(Pager::<VacancyRecord>::new(PAGE_SIZE));
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let clicked_vacancy = RwSignal::new(Option::<VacancyRecord>::None);

    let sync_pager = move || {
        let visible = filter.with_untracked(|f| f.visible_vacancies());
        pager.update(|p| p.replace_items(visible));
    };

    // Единственная асинхронная граница: одноразовая загрузка данных.
    // Успешная загрузка заменяет иерархию целиком и сбрасывает выбор.
    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_vacancies().await {
                Ok(records) => {
                    filter.update(|f| f.load(records));
                    let skipped = filter
                        .with_untracked(|f| f.hierarchy().map(|h| h.skipped_records))
                        .unwrap_or(0);
                    if skipped > 0 {
                        log::warn!("вакансий без региона или города: {skipped}");
                    }
                    sync_pager();
                    set_is_loading.set(false);
                }
                Err(e) => {
                    // прежние данные остаются на экране
                    set_error.set(Some(e));
                    set_is_loading.set(false);
                }
            }
        });
    };

    // Загрузка при монтировании
    leptos::task::spawn_local(async move {
        load();
    });

    let on_region = Callback::new(move |region: EntityRef| {
        filter.update(|f| {
            if let Err(e) = f.set_region(Some(region)) {
                log::error!("выбор региона: {e}");
            }
        });
        sync_pager();
    });

    let on_city = Callback::new(move |city: EntityRef| {
        filter.update(|f| {
            if let Err(e) = f.set_city(city) {
                log::error!("выбор города: {e}");
            }
        });
        sync_pager();
    });

    // Пустая опция селекта приходит как None и снимает фильтр организации
    let on_client = Callback::new(move |client: Option<EntityRef>| {
        filter.update(|f| f.set_client(client));
        sync_pager();
    });

    let on_reset = Callback::new(move |_: ()| {
        filter.update(|f| {
            if let Err(e) = f.reset() {
                log::error!("сброс фильтров: {e}");
            }
        });
        sync_pager();
    });

    let on_apply = Callback::new(move |vacancy: VacancyRecord| {
        clicked_vacancy.set(Some(vacancy));
    });
    let on_dialog_close = Callback::new(move |_: ()| {
        clicked_vacancy.set(None);
    });

    let visible_count = move || filter.with(|f| f.visible_count());
    let page_items = move || pager.with(|p| p.page_items().to_vec());

    let current_page = Signal::derive(move || pager.with(|p| p.page()));
    let total_pages = Signal::derive(move || pager.with(|p| p.total_pages()));
    let can_prev = Signal::derive(move || pager.with(|p| p.can_prev()));
    let can_next = Signal::derive(move || pager.with(|p| p.can_next()));
    let on_prev = Callback::new(move |_: ()| pager.update(|p| p.previous_page()));
    let on_next = Callback::new(move |_: ()| pager.update(|p| p.next_page()));

    view! {
        <div>
            // Шапка
            <div style="padding: 0 24px; border-bottom: 1px solid #e1e1e1;">
                <div style="max-width: 1240px; margin: 0 auto; height: 100px; display: flex; align-items: center; justify-content: space-between;">
                    <span style="font-size: 18px; font-weight: 600;">{"Вакансии"}</span>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            <div style="max-width: 1240px; margin: 0 auto; padding: 0 24px;">
                <div style="display: flex; flex-direction: row; gap: 32px; padding: 16px 0;">
                    <CategoryPanel
                        regions=Signal::derive(move || filter.with(|f| f.available_regions().to_vec()))
                        cities=Signal::derive(move || filter.with(|f| f.available_cities().to_vec()))
                        clients=Signal::derive(move || filter.with(|f| f.available_clients().to_vec()))
                        current_region=Signal::derive(move || filter.with(|f| f.current_region().cloned()))
                        current_city=Signal::derive(move || filter.with(|f| f.current_city().cloned()))
                        current_client=Signal::derive(move || filter.with(|f| f.current_client().cloned()))
                        on_region=on_region
                        on_city=on_city
                        on_client=on_client
                        on_reset=on_reset
                    />

                    <div style="flex: 1; display: flex; flex-direction: column; gap: 16px;">
                        {move || error.get().map(|e| view! {
                            <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; font-size: 15px;">{e}</div>
                        })}

                        {move || if is_loading.get() {
                            view! {
                                <div style="text-align: center; padding: 40px; color: #666;">{"⏳ Загрузка..."}</div>
                            }.into_any()
                        } else {
                            view! {
                                <h2 style="font-size: 24px; margin: 0;">
                                    {move || format!("Найдено вакансий: {}", visible_count())}
                                </h2>
                                <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 16px; max-width: 870px;">
                                    {move || page_items()
                                        .into_iter()
                                        .map(|vacancy| view! {
                                            <VacancyCard vacancy=vacancy on_apply=on_apply />
                                        })
                                        .collect_view()}
                                </div>
                                <PaginationControls
                                    current_page=current_page
                                    total_pages=total_pages
                                    can_prev=can_prev
                                    can_next=can_next
                                    on_prev=on_prev
                                    on_next=on_next
                                />
                            }.into_any()
                        }}
                    </div>
                </div>
            </div>

            // Модальное окно отклика
            {move || clicked_vacancy.get().map(|vacancy| view! {
                <ApplyDialog vacancy=vacancy on_close=on_dialog_close />
            })}
        </div>
    }
}
