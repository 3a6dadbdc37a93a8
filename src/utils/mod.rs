pub mod duration;

/// Converts between numeric types without needing to use an `as` cast
#[macro_export]
macro_rules! conv_num {
    ($numtype:ty, $input:expr, $default:expr) => {{
        // Ensure that the default value is of the desired type.
        let default_val: $numtype = $default;
        let input_val = $input;
        {
            fn _assert_numeric<T: ::num_traits::Num>(_: T) {}
            _assert_numeric(default_val);
            _assert_numeric(input_val);
        }
        // Out of range inputs fall back to the default.
        <$numtype>::try_from(input_val).unwrap_or(default_val)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn converts_in_range_values() {
        assert_eq!(conv_num!(i32, 99_u64, 0), 99);
        assert_eq!(conv_num!(u64, 7_u128, 0), 7);
    }

    #[test]
    fn falls_back_to_default_when_out_of_range() {
        assert_eq!(conv_num!(i32, u64::MAX, -1), -1);
        assert_eq!(conv_num!(u64, u128::MAX, u64::MAX), u64::MAX);
    }
}
