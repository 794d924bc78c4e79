use crate::state::lockup::Lockup;
use static_assertions::const_assert;

/// Bookkeeping for a single deposit for a given mint and lockup schedule.
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct DepositEntry {
    // Locked state.
    pub lockup: Lockup,

    /// Amount in deposited, in native currency. Withdraws of vested tokens
    /// directly reduce this amount.
    pub amount_deposited_native: u64,

    /// Amount in locked when the lockup began, in native currency.
    ///
    /// Not adjusted for withdraws; can exceed amount_deposited_native after
    /// some vesting and withdrawals.
    pub amount_initially_locked_native: u64,

    // True if the deposit entry is being used.
    pub is_used: bool,

    pub allow_clawback: bool,

    // Points to the VotingMintConfig this deposit uses.
    pub voting_mint_config_idx: u8,

    // Empty bytes for future upgrades.
    pub reserved: [u8; 29],
}
const_assert!(std::mem::size_of::<DepositEntry>() == 32 + 2 * 8 + 3 + 29);
const_assert!(std::mem::size_of::<DepositEntry>() % 8 == 0);
