//! Yearly growth step shared by every projection

/// Net worth after one year: the return is applied first, then the contribution.
///
/// Baseline, simulated and Monte Carlo walks all call this exactly once per
/// simulated year so their outputs stay comparable.
#[must_use]
#[inline]
pub fn advance(net_worth: f64, annual_return_rate: f64, annual_contribution: f64) -> f64 {
    net_worth * (1.0 + annual_return_rate) + annual_contribution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_then_contribution() {
        assert_eq!(advance(50_000.0, 0.07, 20_000.0), 73_500.0);
    }

    #[test]
    fn test_total_loss_keeps_contribution() {
        assert_eq!(advance(250_000.0, -1.0, 5_000.0), 5_000.0);
    }

    #[test]
    fn test_negative_contribution_is_outflow() {
        assert_eq!(advance(10_000.0, 0.0, -2_500.0), 7_500.0);
    }
}
