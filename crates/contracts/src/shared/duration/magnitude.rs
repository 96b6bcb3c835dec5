use serde::{Deserialize, Serialize};
use std::fmt;

/// Числовая часть составного значения длительности
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Magnitude {
    /// Поле не заполнено
    #[default]
    Empty,
    /// Конечное число (может быть дробным)
    Number(f64),
    /// Текст, который не удалось прочитать как число; хранится как есть
    Invalid(String),
}

impl Magnitude {
    /// Разбор сырого текста из числового поля или префикса составной строки
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Magnitude::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Magnitude::Number(n),
            _ => Magnitude::Invalid(raw.to_string()),
        }
    }

    /// Значение считается заданным только для ненулевого числа.
    /// Ноль, пустое и нечисловое значения кодируются в пустую строку.
    pub fn is_set(&self) -> bool {
        matches!(self, Magnitude::Number(n) if *n != 0.0)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Magnitude::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Текст для `<input type="number">`: нечисловое значение показывается пустым
    pub fn to_input_text(&self) -> String {
        match self {
            Magnitude::Number(n) => n.to_string(),
            Magnitude::Empty | Magnitude::Invalid(_) => String::new(),
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Empty => Ok(()),
            Magnitude::Number(n) => write!(f, "{}", n),
            Magnitude::Invalid(raw) => f.write_str(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(Magnitude::parse("5"), Magnitude::Number(5.0));
        assert_eq!(Magnitude::parse("2.5"), Magnitude::Number(2.5));
        assert_eq!(Magnitude::parse(" 10 "), Magnitude::Number(10.0));
        assert_eq!(Magnitude::parse("-3"), Magnitude::Number(-3.0));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Magnitude::parse(""), Magnitude::Empty);
        assert_eq!(Magnitude::parse("   "), Magnitude::Empty);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Magnitude::parse("1.2.3"), Magnitude::Invalid("1.2.3".into()));
        assert_eq!(Magnitude::parse("inf"), Magnitude::Invalid("inf".into()));
        assert_eq!(Magnitude::parse("NaN"), Magnitude::Invalid("NaN".into()));
    }

    #[test]
    fn test_is_set() {
        assert!(Magnitude::Number(5.0).is_set());
        assert!(Magnitude::Number(-1.0).is_set());
        assert!(!Magnitude::Number(0.0).is_set());
        assert!(!Magnitude::Empty.is_set());
        assert!(!Magnitude::Invalid("x".into()).is_set());
    }

    #[test]
    fn test_display_and_input_text() {
        assert_eq!(Magnitude::Number(5.0).to_string(), "5");
        assert_eq!(Magnitude::Number(0.5).to_string(), "0.5");
        assert_eq!(Magnitude::Invalid("1..2".into()).to_input_text(), "");
        assert_eq!(Magnitude::Empty.to_input_text(), "");
    }
}
