use std::time::Duration;

pub trait DurExt {
    fn from_picos(picoseconds: u64) -> Self;

    /// Splits `self` evenly over `iterations`, rounding down to the nanosecond
    fn per_iteration(&self, iterations: u64) -> Self;
}

impl DurExt for Duration {
    fn from_picos(picoseconds: u64) -> Self {
        const PICOS_PER_NANO: u64 = 1000;
        let nanos = picoseconds / PICOS_PER_NANO;

        Duration::new(nanos / 1_000_000_000, (nanos % 1_000_000_000) as u32)
    }

    fn per_iteration(&self, iterations: u64) -> Self {
        if iterations == 0 {
            return Duration::ZERO;
        }

        let picos = self.as_nanos().saturating_mul(1000) / u128::from(iterations);
        Duration::from_picos(crate::conv_num!(u64, picos, u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_picos_truncates_to_nanos() {
        assert_eq!(Duration::from_picos(1), Duration::ZERO);
        assert_eq!(Duration::from_picos(1_999), Duration::from_nanos(1));
        assert_eq!(
            Duration::from_picos(2_500_000_000_000),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn per_iteration_divides_elapsed_time() {
        let elapsed = Duration::from_millis(320);
        assert_eq!(elapsed.per_iteration(320_000_000), Duration::from_nanos(1));
        assert_eq!(
            Duration::from_secs(3).per_iteration(2),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn per_iteration_rounds_down() {
        assert_eq!(
            Duration::from_nanos(3).per_iteration(2),
            Duration::from_nanos(1)
        );
        assert_eq!(
            Duration::from_nanos(1000).per_iteration(3),
            Duration::from_nanos(333)
        );
    }

    #[test]
    fn per_iteration_of_nothing_is_zero() {
        assert_eq!(Duration::from_secs(5).per_iteration(0), Duration::ZERO);
    }
}
