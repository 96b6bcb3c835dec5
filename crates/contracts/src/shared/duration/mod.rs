//! Составное значение длительности: число и единица без разделителя ("5m", "250ms")
//!
//! - magnitude.rs: числовая часть (пустая / число / нечисловая)
//! - unit.rs: единицы измерения и опции для селекта
//! - codec.rs: кодирование/декодирование составной строки
//! - error.rs: ошибки преобразования в chrono::TimeDelta

pub mod codec;
pub mod error;
pub mod magnitude;
pub mod unit;

pub use codec::{DecodedPair, DefaultCodec, DurationCodec, FnCodec};
pub use error::DurationError;
pub use magnitude::Magnitude;
pub use unit::{TimeUnit, UnitOption};
