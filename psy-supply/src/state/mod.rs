//! Client-side mirrors of the Voter Stake Registry accounts this crate
//! reads. The layouts are owned by the deployed program; nothing here is
//! ever written back.

pub use deposit_entry::*;
pub use lockup::*;
pub use registrar::*;
pub use voter::*;
pub use voting_mint_config::*;

mod deposit_entry;
mod lockup;
mod registrar;
mod voter;
mod voting_mint_config;

use anyhow::{bail, Result};
use solana_sdk::hash::hash;

/// Anchor account tag: first 8 bytes of `sha256("account:<Name>")`.
pub fn account_discriminator(name: &str) -> [u8; 8] {
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(format!("account:{name}").as_bytes()).to_bytes()[..8]);
    discriminator
}

/// Checks the leading discriminator and returns the payload behind it.
pub(crate) fn require_discriminator<'a>(name: &str, data: &'a [u8]) -> Result<&'a [u8]> {
    if data.len() < 8 {
        bail!("data length {} too small for discriminator", data.len());
    }
    if data[..8] != account_discriminator(name) {
        bail!("discriminator {:?} does not match {}", &data[..8], name);
    }
    Ok(&data[8..])
}
