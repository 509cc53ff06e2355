use bitcoin::{Amount, Denomination};

/// Projects a wallet balance into its display string.
///
/// Uses the BTC denomination without a unit suffix, e.g. `Amount::ZERO`
/// projects to `"0"` and 42 sats to `"0.00000042"`. Deterministic for a
/// given amount. Negative balances are unrepresentable by [`Amount`], which
/// is exactly the precondition the display relies on.
pub fn project(balance: Amount) -> String {
    balance.to_string_in(Denomination::Bitcoin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_projects_to_zero() {
        assert_eq!(project(Amount::ZERO), "0");
    }

    #[test]
    fn whole_coins_have_no_fraction_padding() {
        assert_eq!(project(Amount::from_btc(5.0).unwrap()), "5");
    }

    #[test]
    fn sub_coin_amounts_keep_full_precision() {
        assert_eq!(project(Amount::from_sat(42)), "0.00000042");
    }

    #[test]
    fn projection_is_deterministic() {
        let amount = Amount::from_sat(123_456_789);
        assert_eq!(project(amount), project(amount));
    }
}
