pub mod auction;
pub mod distribution;

use anchor_lang::error::Error;

use crate::error::MarketError;

/// Assert that a transition failed with the expected typed error
pub(crate) fn assert_market_err<T: std::fmt::Debug>(
    result: anchor_lang::Result<T>,
    expected: MarketError,
) {
    match result.expect_err("expected a typed failure") {
        Error::AnchorError(e) => assert_eq!(e.error_name, expected.name()),
        other => panic!("expected AnchorError, got {other:?}"),
    }
}
