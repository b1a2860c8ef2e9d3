#[doc(hidden)]
pub fn failure(expected: &str, expr: &str, actual: &dyn std::fmt::Debug) -> String {
    format!("expected `{expected}`; actual={actual:?}; expr=`{expr}`")
}

/// Unwraps the error of a `Result`, panicking with the `Ok` value otherwise.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            actual => {
                #[allow(unused_mut)]
                let mut msg = $crate::result::failure("Err", stringify!($e), &actual);
                $( msg = format!("{msg}, {}", format_args!($($t)*)); )?
                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(v) => v,
            actual => {
                #[allow(unused_mut)]
                let mut msg = $crate::result::failure("Ok", stringify!($e), &actual);
                $( msg = format!("{msg}, {}", format_args!($($t)*)); )?
                panic!("{}", msg);
            }
        }
    };
}
