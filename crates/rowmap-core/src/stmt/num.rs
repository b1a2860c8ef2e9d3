use super::Value;
use crate::Error;

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty)
        )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    F32(f32)
    F64(f64)
}

// Integer conversions widen freely and range-check when narrowing. Strings are
// parsed so that string-typed keys can be assigned to numeric identities.
macro_rules! try_convert_range {
    ($val:expr, $value:expr, $target_ty:ty) => {
        <$target_ty>::try_from($val)
            .map_err(|_| Error::type_conversion($value, stringify!($target_ty)))
    };
}

macro_rules! parse_string {
    ($s:expr, $target_ty:ty) => {
        $s.trim().parse::<$target_ty>().map_err(|err| {
            Error::from(err).context(Error::type_conversion(
                Value::String($s.clone()),
                stringify!($target_ty),
            ))
        })
    };
}

// Integers convert to floats only when the float holds the exact value.
// `MAX as float` rounds up to a power of two that is out of the integer range.
macro_rules! exact_float {
    ($val:expr, $value:expr, $int_ty:ty, $float_ty:ty) => {{
        let float = $val as $float_ty;
        if float != <$int_ty>::MAX as $float_ty && float as $int_ty == $val {
            Ok(float)
        } else {
            Err(Error::type_conversion($value, stringify!($float_ty)))
        }
    }};
}

macro_rules! impl_try_from_int {
    ( $( $target_ty:ty ),* ) => {
        $(
            impl TryFrom<Value> for $target_ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::I8(val) => try_convert_range!(val, value, $target_ty),
                        Value::I16(val) => try_convert_range!(val, value, $target_ty),
                        Value::I32(val) => try_convert_range!(val, value, $target_ty),
                        Value::I64(val) => try_convert_range!(val, value, $target_ty),
                        Value::Bool(val) => Ok(<$target_ty>::from(val)),
                        Value::String(ref s) => parse_string!(s, $target_ty),
                        _ => Err(Error::type_conversion(value, stringify!($target_ty))),
                    }
                }
            }
        )*
    };
}

impl_try_from_int!(i8, i16, i32, i64);

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F64(val) => Ok(val),
            Value::F32(val) => Ok(val.into()),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => Ok(val.into()),
            Value::I64(val) => exact_float!(val, value, i64, f64),
            Value::String(ref s) => parse_string!(s, f64),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl TryFrom<Value> for f32 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::F32(val) => Ok(val),
            // Values that went through a double binder come back as `F64`
            Value::F64(val) if val.is_nan() || (val as f32) as f64 == val => Ok(val as f32),
            Value::I8(val) => Ok(val.into()),
            Value::I16(val) => Ok(val.into()),
            Value::I32(val) => exact_float!(val, value, i32, f32),
            Value::I64(val) => exact_float!(val, value, i64, f32),
            Value::String(ref s) => parse_string!(s, f32),
            _ => Err(Error::type_conversion(value, "f32")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(i64::try_from(Value::I8(-3)).unwrap(), -3);
        assert_eq!(f64::try_from(Value::F32(1.5)).unwrap(), 1.5);
    }

    #[test]
    fn narrowing_checks_range() {
        assert_eq!(i8::try_from(Value::I64(127)).unwrap(), 127);
        assert!(i8::try_from(Value::I64(128)).is_err());
    }

    #[test]
    fn f32_from_exact_double() {
        assert_eq!(f32::try_from(Value::F64(2.25)).unwrap(), 2.25);
        assert!(f32::try_from(Value::F64(0.1)).is_err());
    }

    #[test]
    fn parse_numeric_strings() {
        assert_eq!(i32::try_from(Value::String(" 12 ".into())).unwrap(), 12);

        let err = i32::try_from(Value::String("twelve".into())).unwrap_err();
        assert!(err.is_type_conversion());
        assert!(err.to_string().contains("invalid digit"), "{err}");

        let err = f64::try_from(Value::String("1.2.3".into())).unwrap_err();
        assert!(err.is_type_conversion());
        assert!(err.to_string().contains("invalid float literal"), "{err}");
    }

    #[test]
    fn integers_widen_to_exact_floats() {
        assert_eq!(f64::try_from(Value::I64(1 << 40)).unwrap(), (1u64 << 40) as f64);
        assert_eq!(f64::try_from(Value::I64(i64::MIN)).unwrap(), i64::MIN as f64);
        assert_eq!(f32::try_from(Value::I32(-(1 << 20))).unwrap(), -1048576.0);
        assert_eq!(f32::try_from(Value::I64(1 << 24)).unwrap(), 16777216.0);
    }

    #[test]
    fn integers_losing_precision_are_rejected() {
        assert!(f64::try_from(Value::I64((1 << 53) + 1)).is_err());
        assert!(f64::try_from(Value::I64(i64::MAX)).is_err());
        assert!(f32::try_from(Value::I32((1 << 24) + 1)).is_err());
        assert!(f32::try_from(Value::I32(i32::MAX)).is_err());
        assert!(f32::try_from(Value::I64(i64::MAX)).is_err());
    }
}
