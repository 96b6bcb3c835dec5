use contracts::shared::duration::{DecodedPair, DurationCodec, Magnitude, UnitOption};
use leptos::prelude::*;
use std::sync::Arc;

/// Two states of the field: an encodable number has been entered or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPhase {
    HasDuration,
    EmptyDuration,
}

/// Local (duration, unit) pair of the field.
///
/// Decoded once from the initial composite value and owned by the field
/// afterwards; later changes of the host value are not re-decoded.
#[derive(Clone)]
pub struct DurationInputState {
    duration: Magnitude,
    // текст числового поля как его ввёл пользователь ("1.0", "2.")
    text: String,
    unit: Option<String>,
    codec: Arc<dyn DurationCodec>,
}

impl DurationInputState {
    pub fn new(value: Option<&str>, codec: Arc<dyn DurationCodec>, units: &[UnitOption]) -> Self {
        let DecodedPair { duration, unit } = codec.decode(value.unwrap_or_default());
        // select без значения показывает первую опцию, фиксируем её явно
        let unit = unit.or_else(|| units.first().map(|u| u.value.clone()));
        Self {
            text: duration.to_input_text(),
            duration,
            unit,
            codec,
        }
    }

    /// Applies a new raw number and returns the composite value to emit
    pub fn edit_magnitude(&mut self, raw: &str) -> String {
        self.duration = Magnitude::parse(raw);
        self.text = raw.to_string();
        self.encoded()
    }

    /// Applies a new unit, keeping the entered number
    pub fn edit_unit(&mut self, unit: String) -> String {
        self.unit = if unit.is_empty() { None } else { Some(unit) };
        self.encoded()
    }

    pub fn encoded(&self) -> String {
        self.codec.encode(&self.duration, self.unit.as_deref())
    }

    pub fn phase(&self) -> FieldPhase {
        if self.duration.is_set() {
            FieldPhase::HasDuration
        } else {
            FieldPhase::EmptyDuration
        }
    }

    pub fn duration(&self) -> &Magnitude {
        &self.duration
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn magnitude_text(&self) -> String {
        self.text.clone()
    }

    pub fn unit_value(&self) -> String {
        self.unit.clone().unwrap_or_default()
    }
}

/// ViewModel for the duration field: state signal plus the host callback
#[derive(Clone, Copy)]
pub struct DurationInputViewModel {
    pub state: RwSignal<DurationInputState>,
    name: StoredValue<String>,
    on_change: Callback<String>,
}

impl DurationInputViewModel {
    pub fn new(
        name: String,
        value: Option<String>,
        codec: Arc<dyn DurationCodec>,
        units: &[UnitOption],
        on_change: Callback<String>,
    ) -> Self {
        let state = DurationInputState::new(value.as_deref(), codec, units);
        log::debug!(
            "duration field '{}' initialised: duration={:?}, unit={:?}",
            name,
            state.duration(),
            state.unit()
        );
        Self {
            state: RwSignal::new(state),
            name: StoredValue::new(name),
            on_change,
        }
    }

    pub fn magnitude_text(&self) -> String {
        self.state.with(|s| s.magnitude_text())
    }

    pub fn unit_value(&self) -> String {
        self.state.with(|s| s.unit_value())
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.with(|s| s.phase())
    }

    pub fn magnitude_command(&self, raw: String) {
        if let Some(encoded) = self.state.try_update(|s| s.edit_magnitude(&raw)) {
            self.emit(encoded);
        }
    }

    pub fn unit_command(&self, unit: String) {
        if let Some(encoded) = self.state.try_update(|s| s.edit_unit(unit)) {
            self.emit(encoded);
        }
    }

    // Состояние уже обновлено к моменту вызова колбэка формы
    fn emit(&self, encoded: String) {
        self.name
            .with_value(|name| log::debug!("duration field '{}' changed: {:?}", name, encoded));
        self.on_change.run(encoded);
    }
}
