// risk-core: client-side position risk and settlement calculator.
// display-layer mirror of an external trading program's math: every number
// here is advisory until the program confirms it. all computation is
// deterministic with no I/O; the async edges (price fetch, tx submit) live
// in the client shells that call this crate.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Side, Price, Usd, Leverage, Timestamp
//   2.x  position.rs: position mirror, ClosingIntent
//   3.x  pnl.rs: unrealized pnl formula
//   4.x  fees.rs: exit fee, fixed tx fee, hourly borrow fee
//   5.x  settlement.rs: receive-amount on close
//   6.x  snapshot.rs: RiskSnapshot, everything a position card renders
//   7.x  validate.rs: form-input bounds checks
//   8.x  refresh.rs: sequence-token guard against stale async responses
//   9.x  format.rs: currency/percentage/age display strings
//   10.x config.rs: params in one place, with consistency validation
//   liquidation.rs and collateral.rs carry the margin-sensitive math
//   error.rs holds the four-kind error taxonomy

// calculator core
pub mod collateral;
pub mod fees;
pub mod liquidation;
pub mod pnl;
pub mod position;
pub mod settlement;
pub mod snapshot;
pub mod types;

// boundaries and glue
pub mod config;
pub mod error;
pub mod format;
pub mod oracle;
pub mod refresh;
pub mod validate;

// re exports for convenience
pub use collateral::*;
pub use config::{ConfigError, RiskConfig};
pub use error::{InputViolation, PriceFault, RiskError};
pub use fees::*;
pub use liquidation::*;
pub use oracle::{OracleGuards, OracleQuote, SanityBand};
pub use pnl::*;
pub use position::*;
pub use refresh::{RefreshGate, RequestToken};
pub use settlement::*;
pub use snapshot::*;
pub use types::*;
