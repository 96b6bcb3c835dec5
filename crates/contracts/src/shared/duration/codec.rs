use super::error::DurationError;
use super::magnitude::Magnitude;
use super::unit::TimeUnit;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Составное значение, разобранное на число и единицу
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecodedPair {
    pub duration: Magnitude,
    pub unit: Option<String>,
}

impl DecodedPair {
    pub fn new(duration: Magnitude, unit: Option<String>) -> Self {
        Self { duration, unit }
    }

    /// Преобразование в `chrono::TimeDelta` для известных единиц времени
    pub fn to_time_delta(&self) -> Result<TimeDelta, DurationError> {
        let n = match &self.duration {
            Magnitude::Empty => return Err(DurationError::EmptyDuration),
            Magnitude::Invalid(raw) => return Err(DurationError::InvalidMagnitude(raw.clone())),
            Magnitude::Number(n) => *n,
        };
        let code = self.unit.as_deref().ok_or(DurationError::MissingUnit)?;
        let unit =
            TimeUnit::from_code(code).ok_or_else(|| DurationError::UnknownUnit(code.to_string()))?;

        let nanos = (n * unit.nanos() as f64).round();
        if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
            return Err(DurationError::OutOfRange(format!("{}{}", n, code)));
        }
        Ok(TimeDelta::nanoseconds(nanos as i64))
    }
}

/// Политика кодирования пары (число, единица) в одну строку и обратно
pub trait DurationCodec: Send + Sync {
    fn encode(&self, duration: &Magnitude, unit: Option<&str>) -> String;
    fn decode(&self, value: &str) -> DecodedPair;
}

/// Число и суффикс единицы без разделителя: "5m", "250ms"
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl DurationCodec for DefaultCodec {
    /// Незаданное число (пустое, нечисловое, ноль) даёт пустую строку.
    /// Без единицы кодируется только число.
    fn encode(&self, duration: &Magnitude, unit: Option<&str>) -> String {
        if !duration.is_set() {
            return String::new();
        }
        format!("{}{}", duration, unit.unwrap_or_default())
    }

    /// Число — всё до первой буквы, единица — остаток после него.
    /// Без числовой части единица не извлекается.
    fn decode(&self, value: &str) -> DecodedPair {
        let split_at = value
            .char_indices()
            .find(|(_, c)| c.is_alphabetic())
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        let (number, rest) = value.split_at(split_at);

        let unit = if number.is_empty() || rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        };

        DecodedPair {
            duration: Magnitude::parse(number),
            unit,
        }
    }
}

type EncodeFn = Box<dyn Fn(&Magnitude, Option<&str>) -> String + Send + Sync>;
type DecodeFn = Box<dyn Fn(&str) -> DecodedPair + Send + Sync>;

/// Кодек из замыканий; непереопределённая сторона берётся из `DefaultCodec`
#[derive(Default)]
pub struct FnCodec {
    encode: Option<EncodeFn>,
    decode: Option<DecodeFn>,
}

impl FnCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encode(
        mut self,
        encode: impl Fn(&Magnitude, Option<&str>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.encode = Some(Box::new(encode));
        self
    }

    pub fn with_decode(
        mut self,
        decode: impl Fn(&str) -> DecodedPair + Send + Sync + 'static,
    ) -> Self {
        self.decode = Some(Box::new(decode));
        self
    }
}

impl DurationCodec for FnCodec {
    fn encode(&self, duration: &Magnitude, unit: Option<&str>) -> String {
        match &self.encode {
            Some(encode) => encode(duration, unit),
            None => DefaultCodec.encode(duration, unit),
        }
    }

    fn decode(&self, value: &str) -> DecodedPair {
        match &self.decode {
            Some(decode) => decode(value),
            None => DefaultCodec.decode(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(n: f64, unit: &str) -> DecodedPair {
        DecodedPair::new(Magnitude::Number(n), Some(unit.to_string()))
    }

    #[test]
    fn test_decode_simple() {
        assert_eq!(DefaultCodec.decode("5m"), pair(5.0, "m"));
        assert_eq!(DefaultCodec.decode("250ms"), pair(250.0, "ms"));
        assert_eq!(DefaultCodec.decode("1.5h"), pair(1.5, "h"));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(DefaultCodec.decode(""), DecodedPair::default());
    }

    #[test]
    fn test_decode_without_unit() {
        assert_eq!(
            DefaultCodec.decode("42"),
            DecodedPair::new(Magnitude::Number(42.0), None)
        );
    }

    #[test]
    fn test_decode_without_number() {
        assert_eq!(DefaultCodec.decode("m"), DecodedPair::default());
        assert_eq!(DefaultCodec.decode("abc"), DecodedPair::default());
    }

    #[test]
    fn test_decode_malformed_number() {
        let decoded = DefaultCodec.decode("1.2.3s");
        assert_eq!(decoded.duration, Magnitude::Invalid("1.2.3".into()));
        assert_eq!(decoded.unit.as_deref(), Some("s"));
        assert_eq!(DefaultCodec.encode(&decoded.duration, decoded.unit.as_deref()), "");
    }

    #[test]
    fn test_encode() {
        assert_eq!(DefaultCodec.encode(&Magnitude::Number(5.0), Some("h")), "5h");
        assert_eq!(DefaultCodec.encode(&Magnitude::Number(0.25), Some("s")), "0.25s");
        assert_eq!(DefaultCodec.encode(&Magnitude::Empty, Some("h")), "");
        assert_eq!(DefaultCodec.encode(&Magnitude::Number(0.0), Some("h")), "");
    }

    #[test]
    fn test_encode_without_unit_has_no_placeholder() {
        assert_eq!(DefaultCodec.encode(&Magnitude::Number(3.0), None), "3");
    }

    #[test]
    fn test_round_trip_all_units() {
        for unit in TimeUnit::all() {
            for n in [1.0, 5.0, 2.5, 90.0] {
                let encoded = DefaultCodec.encode(&Magnitude::Number(n), Some(unit.code()));
                let decoded = DefaultCodec.decode(&encoded);
                assert_eq!(decoded, pair(n, unit.code()));
                assert_eq!(
                    DefaultCodec.encode(&decoded.duration, decoded.unit.as_deref()),
                    encoded
                );
            }
        }
    }

    #[test]
    fn test_fn_codec_overrides_one_side() {
        let codec = FnCodec::new().with_encode(|duration, unit| {
            if duration.is_set() {
                format!("{} {}", duration, unit.unwrap_or("s"))
            } else {
                "0s".to_string()
            }
        });
        assert_eq!(codec.encode(&Magnitude::Number(7.0), Some("m")), "7 m");
        assert_eq!(codec.encode(&Magnitude::Empty, None), "0s");
        assert_eq!(codec.decode("5m"), pair(5.0, "m"));
    }

    #[test]
    fn test_to_time_delta() {
        assert_eq!(pair(5.0, "m").to_time_delta(), Ok(TimeDelta::minutes(5)));
        assert_eq!(pair(1.5, "s").to_time_delta(), Ok(TimeDelta::milliseconds(1500)));
        assert_eq!(
            DecodedPair::default().to_time_delta(),
            Err(DurationError::EmptyDuration)
        );
        assert_eq!(
            pair(1.0, "d").to_time_delta(),
            Err(DurationError::UnknownUnit("d".into()))
        );
        assert_eq!(
            DecodedPair::new(Magnitude::Number(3.0), None).to_time_delta(),
            Err(DurationError::MissingUnit)
        );
        assert!(matches!(
            pair(1e20, "h").to_time_delta(),
            Err(DurationError::OutOfRange(_))
        ));
    }
}
