use crate::shared::components::DurationInput;
use contracts::shared::duration::{
    DecodedPair, DefaultCodec, DurationCodec, FnCodec, Magnitude, TimeUnit, UnitOption,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Units of the schedule delay field, in the same shape a form settings JSON uses
const SCHEDULE_DELAY_UNITS: &str = r#"[
    {"label": "Миллисекунды", "value": "ms"},
    {"label": "Секунды", "value": "s"},
    {"label": "Минуты", "value": "m"}
]"#;

fn load_units(json: &str) -> Vec<UnitOption> {
    match serde_json::from_str::<Vec<UnitOption>>(json) {
        Ok(units) => units,
        Err(err) => {
            log::error!("Failed to parse duration units: {}", err);
            TimeUnit::options()
        }
    }
}

/// Seconds-only codec: the host stores a plain number of seconds ("90")
fn seconds_codec() -> Arc<dyn DurationCodec> {
    Arc::new(
        FnCodec::new()
            .with_decode(|value| {
                DecodedPair::new(Magnitude::parse(value), Some(TimeUnit::Second.code().into()))
            })
            .with_encode(|duration, _unit| {
                if duration.is_set() {
                    duration.to_string()
                } else {
                    String::new()
                }
            }),
    )
}

fn describe(value: &str) -> String {
    if value.is_empty() {
        return "не задано".to_string();
    }
    match DefaultCodec.decode(value).to_time_delta() {
        Ok(delta) => format!("{} мс", delta.num_milliseconds()),
        Err(err) => {
            log::warn!("Duration {:?} not convertible: {}", value, err);
            err.to_string()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (schedule_delay, set_schedule_delay) = signal("530ms".to_string());
    let (status_interval, set_status_interval) = signal(String::new());
    let (ping_period, set_ping_period) = signal("90".to_string());

    view! {
        <div class="details-container" style="max-width: 480px; padding: 16px;">
            <div class="details-header">
                <h3>"Настройки шлюза"</h3>
            </div>

            <div class="details-form">
                <DurationInput
                    name="schedule_anytime_delay"
                    label="Задержка отправки"
                    value=schedule_delay.get_untracked()
                    units=load_units(SCHEDULE_DELAY_UNITS)
                    on_change=Callback::new(move |v: String| set_schedule_delay.set(v))
                />
                <div class="form__hint">
                    {move || describe(&schedule_delay.get())}
                </div>

                <DurationInput
                    name="status_interval"
                    label="Интервал статуса"
                    units=TimeUnit::options_from(&[TimeUnit::Second, TimeUnit::Minute, TimeUnit::Hour])
                    on_change=Callback::new(move |v: String| set_status_interval.set(v))
                />
                <div class="form__hint">
                    {move || describe(&status_interval.get())}
                </div>

                <DurationInput
                    name="ping_slot_period"
                    label="Период ping slot, сек"
                    value=ping_period.get_untracked()
                    units=vec![TimeUnit::Second.option()]
                    codec=seconds_codec()
                    on_change=Callback::new(move |v: String| set_ping_period.set(v))
                />
            </div>

            <pre class="form__preview">
                {move || {
                    format!(
                        "schedule_anytime_delay = {:?}\nstatus_interval = {:?}\nping_slot_period = {:?}",
                        schedule_delay.get(),
                        status_interval.get(),
                        ping_period.get(),
                    )
                }}
            </pre>
        </div>
    }
}
