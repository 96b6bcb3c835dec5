use serde::{Deserialize, Serialize};

/// Опция селекта единиц: подпись и значение-суффикс в составной строке
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitOption {
    pub label: String,
    pub value: String,
}

impl UnitOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Пара (value, label) в формате, который принимает `ui::Select`
    pub fn as_select_pair(&self) -> (String, String) {
        (self.value.clone(), self.label.clone())
    }
}

/// Единицы времени с суффиксами в формате Go duration ("250ms", "5m", "1h")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Суффикс единицы в составной строке
    pub fn code(&self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "ns",
            TimeUnit::Microsecond => "us",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second => "s",
            TimeUnit::Minute => "m",
            TimeUnit::Hour => "h",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "Наносекунды",
            TimeUnit::Microsecond => "Микросекунды",
            TimeUnit::Millisecond => "Миллисекунды",
            TimeUnit::Second => "Секунды",
            TimeUnit::Minute => "Минуты",
            TimeUnit::Hour => "Часы",
        }
    }

    pub fn all() -> Vec<TimeUnit> {
        vec![
            TimeUnit::Nanosecond,
            TimeUnit::Microsecond,
            TimeUnit::Millisecond,
            TimeUnit::Second,
            TimeUnit::Minute,
            TimeUnit::Hour,
        ]
    }

    /// Парсинг из суффикса
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ns" => Some(TimeUnit::Nanosecond),
            "us" | "µs" => Some(TimeUnit::Microsecond),
            "ms" => Some(TimeUnit::Millisecond),
            "s" => Some(TimeUnit::Second),
            "m" => Some(TimeUnit::Minute),
            "h" => Some(TimeUnit::Hour),
            _ => None,
        }
    }

    /// Длительность одной единицы в наносекундах
    pub fn nanos(&self) -> i64 {
        match self {
            TimeUnit::Nanosecond => 1,
            TimeUnit::Microsecond => 1_000,
            TimeUnit::Millisecond => 1_000_000,
            TimeUnit::Second => 1_000_000_000,
            TimeUnit::Minute => 60 * 1_000_000_000,
            TimeUnit::Hour => 3_600 * 1_000_000_000,
        }
    }

    pub fn option(&self) -> UnitOption {
        UnitOption::new(self.display_name(), self.code())
    }

    /// Опции для всех единиц, от меньшей к большей
    pub fn options() -> Vec<UnitOption> {
        Self::options_from(&Self::all())
    }

    pub fn options_from(units: &[TimeUnit]) -> Vec<UnitOption> {
        units.iter().map(TimeUnit::option).collect()
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
