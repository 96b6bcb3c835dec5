use leptos::prelude::*;

/// Input component with label support
#[component]
pub fn Input(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Input value, written to the DOM property so edits stay controlled
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the raw text of the field
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur event handler
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Form field name
    #[prop(optional, into)]
    name: MaybeProp<String>,
    /// Input type: "text" (default), "number", "password", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// `step` attribute for numeric inputs ("any" allows fractions)
    #[prop(optional, into)]
    step: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type=input_t
                name=move || name.get()
                step=move || step.get()
                prop:value=move || value.get()
                placeholder=move || placeholder.get()
                disabled=disabled
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
                on:blur=move |_| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                }
            />
        </div>
    }
}
