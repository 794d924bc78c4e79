use anchor_lang::prelude::borsh;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use solana_sdk::pubkey::Pubkey;

/// Configuration for one mint accepted by a registrar.
///
/// Only `mint` matters for supply scanning; the vote-weight factors are the
/// program's business and are carried solely to keep the layout intact.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct VotingMintConfig {
    /// Mint for this entry.
    pub mint: Pubkey,

    /// The authority that is allowed to push grants into voters.
    pub grant_authority: Pubkey,

    /// Vote weight factor for deposits.
    pub deposit_scaled_factor: u64,

    /// Maximum vote weight factor for lockups.
    pub lockup_scaled_factor: u64,

    /// Number of seconds of lockup needed to reach the maximum lockup bonus.
    pub lockup_saturation_secs: u64,

    /// Number of digits to shift native amounts.
    pub digit_shift: i8,

    // Empty bytes for future upgrades.
    pub padding: [u8; 31],
}

impl VotingMintConfig {
    /// Whether this voting mint entry is configured.
    pub fn in_use(&self) -> bool {
        self.mint != Pubkey::default()
    }
}
