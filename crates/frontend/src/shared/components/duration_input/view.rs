use super::view_model::{DurationInputViewModel, FieldPhase};
use crate::shared::components::ui::{Input, Select};
use contracts::shared::duration::{DefaultCodec, DurationCodec, UnitOption};
use leptos::prelude::*;
use std::sync::Arc;

/// Placeholder of the unit select, shown only when there is nothing to choose
fn unit_placeholder(units: &[UnitOption]) -> Option<String> {
    units.is_empty().then(|| "Нет единиц".to_string())
}

/// DurationInput component: number + unit select emitting one composite value
///
/// ```ignore
/// <DurationInput
///     name="rx_delay"
///     value="5m"
///     units=TimeUnit::options_from(&[TimeUnit::Minute, TimeUnit::Hour])
///     on_change=Callback::new(move |v: String| set_rx_delay.set(v))
/// />
/// ```
#[component]
pub fn DurationInput(
    /// Name of the number input; the select gets `{name}-select`
    #[prop(into)]
    name: String,
    /// Selectable units, in display order
    units: Vec<UnitOption>,
    /// Called with the re-encoded composite value on every edit
    #[prop(into)]
    on_change: Callback<String>,
    /// Initial composite value, decoded once at construction
    #[prop(optional, into)]
    value: Option<String>,
    /// Encode/decode policy, `DefaultCodec` when not set
    #[prop(optional)]
    codec: Option<Arc<dyn DurationCodec>>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
    /// Additional CSS classes for the container
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let codec = codec.unwrap_or_else(|| Arc::new(DefaultCodec));
    let vm = DurationInputViewModel::new(name.clone(), value, codec, &units, on_change);

    let select_options: Vec<(String, String)> =
        units.iter().map(UnitOption::as_select_pair).collect();
    let select_name = format!("{}-select", name);
    let select_placeholder = unit_placeholder(&units);

    let container_class = move || {
        let phase = match vm.phase() {
            FieldPhase::HasDuration => "duration-input--filled",
            FieldPhase::EmptyDuration => "duration-input--empty",
        };
        format!(
            "duration-input {} {}",
            phase,
            class.get().unwrap_or_default()
        )
    };

    view! {
        <div
            class=container_class
            style="display: flex; align-items: flex-end; gap: 8px;"
        >
            <Input
                label=label
                input_type="number"
                step="any"
                name=name
                class="duration-input__number"
                disabled=disabled
                value=Signal::derive(move || vm.magnitude_text())
                on_input=Callback::new(move |raw: String| vm.magnitude_command(raw))
                on_blur=Callback::new(move |_: ()| {
                    if let Some(handler) = on_blur {
                        handler.run(());
                    }
                })
            />
            <Select
                name=select_name
                class="duration-input__select"
                disabled=disabled
                placeholder=select_placeholder
                options=Signal::derive(move || select_options.clone())
                value=Signal::derive(move || vm.unit_value())
                on_change=Callback::new(move |unit: String| vm.unit_command(unit))
            />
        </div>
    }
}
