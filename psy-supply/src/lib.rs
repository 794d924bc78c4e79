//! Read-only client for the PSY token's circulating supply.
//!
//! Circulating supply is computed as
//!
//! ```text
//!    total mint supply
//!  - foundation treasury balance
//!  - tokens locked in Voter Stake Registry deposits
//!  - unvested remainder of the DAO grant
//! ```
//!
//! scaled down by the mint's decimals. Everything here is a snapshot of
//! external on-chain state at call time; nothing is written, cached or
//! retried. A failed fetch fails the whole computation and the caller is
//! expected to retry wholesale.

pub mod constants;
pub mod deposits;
pub mod state;
pub mod supply;
pub mod vesting;

pub use deposits::{locked_deposits, LockedDeposit, LockedDeposits};
pub use supply::circulating_supply;
