use leptos::prelude::*;

/// Select component with label and placeholder option
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Placeholder shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Current value ("" = nothing selected)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// When set, the placeholder option stays selectable and re-selecting
    /// it emits an empty value (native selects fire no change event on
    /// re-selection, so this is the way back to "nothing selected")
    #[prop(optional)]
    clearable: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            >
                <option value="" selected=move || value.get().is_empty() disabled=!clearable hidden=!clearable>
                    {move || placeholder.get().unwrap_or_default()}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
