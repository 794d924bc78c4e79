//! Mainnet addresses and grant literals this crate is bound to.
//!
//! All of these describe one deployed token and governance configuration;
//! none of them are configurable at runtime.

use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// The PSY token mint.
pub const PSY_MINT: Pubkey = pubkey!("PsyFiqqjiv41G7o5SMRzDJCu4psptThNR2GtfeGHfSq");

/// Foundation treasury SPL token account, excluded from circulating supply.
pub const FOUNDATION_TREASURY: Pubkey = pubkey!("6c33US7ErPmLXZog9SyChQUYUrrJY51k4GmzdhrbhNnD");

/// The deployed Voter Stake Registry program that owns Registrar and Voter
/// accounts.
pub const VOTER_STAKE_REGISTRY_PROGRAM_ID: Pubkey =
    pubkey!("VotEn9AWwTFtJPJSMV5F9jsMY6QwWM5qn3XP9PATGW7");

/// SPL governance program the realm lives under. Not queried by this crate,
/// kept for callers that cross-reference realm accounts.
pub const SPL_GOVERNANCE_PROGRAM_ID: Pubkey =
    pubkey!("GovHgfDPyQ1GwazJTDY2avSVY8GGcpmCapmmCsymRaGe");

/// The PSY DAO realm.
pub const PSY_REALM_ID: Pubkey = pubkey!("FiG6YoqWnVzUmxFNukcRVXZC51HvLr6mts8nxcm7ScR8");

/// Token account holding the PSY DAO grant that vests per [`crate::vesting`].
pub const PSY_DAO_GRANT_ACCOUNT: Pubkey =
    pubkey!("CcNUW7KDCdaUY6rNqYJBmTKYn66RjYTVyPUqCNEiALdp");

/// Total size of the DAO grant, in native units (6 decimals).
pub const DAO_GRANT_TOTAL_NATIVE: u128 = 95_000_000_000_000;

/// The grant vests monthly from start to end, same day of month on both ends.
pub const DAO_GRANT_VESTING_START: (i32, u32, u32) = (2022, 1, 1);
pub const DAO_GRANT_VESTING_END: (i32, u32, u32) = (2025, 1, 1);
