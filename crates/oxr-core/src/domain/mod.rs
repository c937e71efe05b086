//! Value types accepted by the client operations.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Currency`] | Normalized currency code (`USD`, `EUR`, `BTC`) |
//! | [`Period`] | OHLC bucket length (`1m` .. `1mo`) |
//! | [`iso`] | ISO-8601 formatting for dates and datetimes |

mod currency;
pub mod iso;
mod period;

pub use currency::Currency;
pub use period::Period;
