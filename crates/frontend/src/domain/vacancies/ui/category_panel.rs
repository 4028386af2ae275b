use crate::shared::components::ui::select::Select;
use contracts::domain::vacancy::EntityRef;
use leptos::prelude::*;

fn to_options(refs: &[EntityRef]) -> Vec<(String, String)> {
    refs.iter()
        .map(|r| (r.id.to_string(), r.name.clone()))
        .collect()
}

fn selected_value(current: Option<&EntityRef>) -> String {
    current.map(|r| r.id.to_string()).unwrap_or_default()
}

/// Значение селекта обратно в пару id/название по списку опций.
fn resolve(refs: &[EntityRef], value: &str) -> Option<EntityRef> {
    let id: i64 = value.parse().ok()?;
    refs.iter().find(|r| r.id == id).cloned()
}

/// То же для очищаемого селекта: пустое значение — снятие фильтра,
/// незнакомый id — не событие вовсе.
fn resolve_clearable(refs: &[EntityRef], value: &str) -> Option<Option<EntityRef>> {
    if value.is_empty() {
        return Some(None);
    }
    resolve(refs, value).map(Some)
}

/// Панель "Поиск по категориям": каскадные селекты регион → город →
/// организация и кнопка сброса.
#[component]
pub fn CategoryPanel(
    #[prop(into)] regions: Signal<Vec<EntityRef>>,
    #[prop(into)] cities: Signal<Vec<EntityRef>>,
    #[prop(into)] clients: Signal<Vec<EntityRef>>,
    #[prop(into)] current_region: Signal<Option<EntityRef>>,
    #[prop(into)] current_city: Signal<Option<EntityRef>>,
    #[prop(into)] current_client: Signal<Option<EntityRef>>,
    on_region: Callback<EntityRef>,
    on_city: Callback<EntityRef>,
    on_client: Callback<Option<EntityRef>>,
    on_reset: Callback<()>,
) -> impl IntoView {
    let handle_region = Callback::new(move |value: String| {
        if let Some(region) = resolve(&regions.get_untracked(), &value) {
            on_region.run(region);
        }
    });
    let handle_city = Callback::new(move |value: String| {
        if let Some(city) = resolve(&cities.get_untracked(), &value) {
            on_city.run(city);
        }
    });
    let handle_client = Callback::new(move |value: String| {
        if let Some(selection) = resolve_clearable(&clients.get_untracked(), &value) {
            on_client.run(selection);
        }
    });

    view! {
        <div style="display: flex; flex-direction: column; gap: 16px;">
            <h2 style="font-size: 24px; margin: 0;">{"Поиск по категориям"}</h2>
            <div style="width: 290px; padding: 16px 24px; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); background: #fff;">
                <div style="display: flex; flex-direction: column; gap: 16px;">
                    <Select
                        id="region-select"
                        label="Регион"
                        placeholder="Выберите регион"
                        options=Signal::derive(move || to_options(&regions.get()))
                        value=Signal::derive(move || selected_value(current_region.get().as_ref()))
                        on_change=handle_region
                    />
                    <Select
                        id="city-select"
                        label="Город"
                        placeholder="Выберите город"
                        options=Signal::derive(move || to_options(&cities.get()))
                        value=Signal::derive(move || selected_value(current_city.get().as_ref()))
                        on_change=handle_city
                    />
                    <Select
                        id="client-select"
                        label="Организация"
                        placeholder="Все организации"
                        options=Signal::derive(move || to_options(&clients.get()))
                        value=Signal::derive(move || selected_value(current_client.get().as_ref()))
                        on_change=handle_client
                        clearable=true
                    />
                </div>
                <button
                    class="button button--secondary"
                    style="width: 100%; margin-top: 32px;"
                    on:click=move |_| on_reset.run(())
                >
                    {"Сбросить"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs() -> Vec<EntityRef> {
        vec![EntityRef::new(100, "Альфа"), EntityRef::new(200, "Бета")]
    }

    #[test]
    fn test_resolve_by_option_value() {
        assert_eq!(resolve(&refs(), "200").map(|r| r.id), Some(200));
        assert!(resolve(&refs(), "999").is_none());
        assert!(resolve(&refs(), "не число").is_none());
    }

    #[test]
    fn test_clearable_select_maps_empty_value_to_reset() {
        // выбор пустой опции снимает фильтр организации
        assert_eq!(resolve_clearable(&refs(), ""), Some(None));

        let selected = resolve_clearable(&refs(), "100");
        assert_eq!(selected.flatten().map(|r| r.id), Some(100));
        assert_eq!(resolve_clearable(&refs(), "999"), None);
    }
}
