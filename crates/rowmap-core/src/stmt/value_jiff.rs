use super::{Type, Value};
use crate::Error;

use jiff::{civil, tz::TimeZone, SignedDuration, Timestamp};

macro_rules! impl_jiff_conversions {
    ($jiff:ty, $name:ident) => {
        impl From<$jiff> for Value {
            fn from(value: $jiff) -> Self {
                Self::$name(value)
            }
        }

        impl From<&$jiff> for Value {
            fn from(value: &$jiff) -> Self {
                Self::$name(value.clone())
            }
        }
    };
}

impl_jiff_conversions!(Timestamp, Timestamp);
impl_jiff_conversions!(civil::Date, Date);
impl_jiff_conversions!(civil::Time, Time);
impl_jiff_conversions!(civil::DateTime, DateTime);
impl_jiff_conversions!(SignedDuration, Duration);

// Values without a time zone are interpreted as UTC.

impl TryFrom<Value> for Timestamp {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Timestamp(val) => Some(*val),
            Value::Null => return Err(Error::invalid_cast(Type::Timestamp)),
            Value::DateTime(val) => TimeZone::UTC.to_timestamp(*val).ok(),
            Value::Date(val) => TimeZone::UTC
                .to_timestamp(val.to_datetime(civil::Time::midnight()))
                .ok(),
            Value::I64(val) => Timestamp::from_second(*val).ok(),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<Timestamp>().ok().or_else(|| {
                    s.parse::<civil::DateTime>()
                        .ok()
                        .and_then(|dt| TimeZone::UTC.to_timestamp(dt).ok())
                })
            }
            _ => None,
        };

        converted.ok_or_else(|| Error::coercion(value, Type::Timestamp))
    }
}

impl TryFrom<Value> for civil::Date {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Date(val) => Some(*val),
            Value::Null => return Err(Error::invalid_cast(Type::Date)),
            Value::DateTime(val) => Some(val.date()),
            Value::Timestamp(val) => Some(TimeZone::UTC.to_datetime(*val).date()),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<civil::Date>()
                    .ok()
                    .or_else(|| s.parse::<civil::DateTime>().ok().map(|dt| dt.date()))
            }
            _ => None,
        };

        converted.ok_or_else(|| Error::coercion(value, Type::Date))
    }
}

impl TryFrom<Value> for civil::Time {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Time(val) => Some(*val),
            Value::Null => return Err(Error::invalid_cast(Type::Time)),
            Value::DateTime(val) => Some(val.time()),
            Value::String(s) => s.trim().parse::<civil::Time>().ok(),
            _ => None,
        };

        converted.ok_or_else(|| Error::coercion(value, Type::Time))
    }
}

impl TryFrom<Value> for civil::DateTime {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::DateTime(val) => Some(*val),
            Value::Null => return Err(Error::invalid_cast(Type::DateTime)),
            Value::Date(val) => Some(val.to_datetime(civil::Time::midnight())),
            Value::Timestamp(val) => Some(TimeZone::UTC.to_datetime(*val)),
            Value::String(s) => s.trim().parse::<civil::DateTime>().ok(),
            _ => None,
        };

        converted.ok_or_else(|| Error::coercion(value, Type::DateTime))
    }
}

impl TryFrom<Value> for SignedDuration {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let converted = match &value {
            Value::Duration(val) => Some(*val),
            Value::Null => return Err(Error::invalid_cast(Type::Duration)),
            Value::Time(val) => Some(civil::Time::midnight().duration_until(*val)),
            Value::I64(val) => Some(SignedDuration::from_secs(*val)),
            Value::String(s) => s.trim().parse::<SignedDuration>().ok(),
            _ => None,
        };

        converted.ok_or_else(|| Error::coercion(value, Type::Duration))
    }
}
