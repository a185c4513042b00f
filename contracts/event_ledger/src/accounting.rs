/// Total price of a ticket purchase
///
/// Formula: cost = quantity × ticket_price
///
/// Example:
/// - quantity: 16 tickets
/// - ticket_price: 2
/// - cost: 32
pub fn ticket_cost(quantity: i128, ticket_price: i128) -> Option<i128> {
    quantity.checked_mul(ticket_price)
}

/// Pro-rata share of the gains pool for one claim holder
///
/// Formula: share = floor(gains × holding / supply)
///
/// Example:
/// - gains: 40
/// - holding: 5 claim tokens
/// - supply: 20 claim tokens
/// - share: 40 × 5 / 20 = 10
///
/// Returns `None` on overflow or an empty supply. Floor division leaves any
/// remainder in the pool.
pub fn pro_rata_share(gains: i128, holding: i128, supply: i128) -> Option<i128> {
    if supply <= 0 {
        return None;
    }
    gains.checked_mul(holding)?.checked_div(supply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_cost() {
        assert_eq!(ticket_cost(4, 2), Some(8));
        assert_eq!(ticket_cost(16, 2), Some(32));
    }

    #[test]
    fn test_ticket_cost_overflow() {
        assert_eq!(ticket_cost(i128::MAX / 2 + 1, 2), None);
    }

    #[test]
    fn test_share_of_sponsor_pool() {
        // A holds 5 of 20, pool of 40
        assert_eq!(pro_rata_share(40, 5, 20), Some(10));
        // B then holds 15 of the remaining 15, pool of 30
        assert_eq!(pro_rata_share(30, 15, 15), Some(30));
    }

    #[test]
    fn test_share_rounds_down() {
        assert_eq!(pro_rata_share(1, 1, 3), Some(0));
        assert_eq!(pro_rata_share(10, 1, 3), Some(3));
    }

    #[test]
    fn test_share_empty_supply() {
        assert_eq!(pro_rata_share(10, 0, 0), None);
    }

    #[test]
    fn test_share_overflow() {
        assert_eq!(pro_rata_share(i128::MAX, 2, 3), None);
    }
}
