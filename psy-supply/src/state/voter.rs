use crate::state::deposit_entry::DepositEntry;
use crate::state::lockup::LockupKind;
use crate::state::require_discriminator;
use anyhow::{anyhow, bail, Result};
use bytemuck::{Pod, Zeroable};
use solana_sdk::pubkey::Pubkey;
use static_assertions::const_assert;

/// Per-wallet record of deposits into the registry.
///
/// Zero copy on chain, so the bytes behind the discriminator are the
/// `repr(C)` memory of this struct rather than a borsh stream.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Voter {
    pub voter_authority: Pubkey,
    pub registrar: Pubkey,
    pub deposits: [DepositEntry; 32],
    pub voter_bump: u8,
    pub voter_weight_record_bump: u8,
    pub reserved: [u8; 94],
}
const_assert!(std::mem::size_of::<Voter>() == 2 * 32 + 32 * 80 + 2 + 94);
const_assert!(std::mem::size_of::<Voter>() % 8 == 0);

/// Byte offset of the `registrar` field within the account data, used as a
/// server-side memcmp filter when listing voters.
pub const VOTER_REGISTRAR_OFFSET: usize = 8 + 32;

unsafe impl Zeroable for Voter {}
unsafe impl Pod for Voter {}

// Offsets within the `repr(C)` layout, for validating raw bytes before they
// are reinterpreted as enum and bool fields.
const DEPOSITS_OFFSET: usize = 2 * 32;
const KIND_OFFSET: usize = 2 * 8;
const IS_USED_OFFSET: usize = 32 + 2 * 8;
const ALLOW_CLAWBACK_OFFSET: usize = IS_USED_OFFSET + 1;

impl Voter {
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        let payload = require_discriminator("Voter", data)?;
        if payload.len() != std::mem::size_of::<Self>() {
            bail!(
                "voter account data length {} does not match layout size {}",
                payload.len(),
                std::mem::size_of::<Self>()
            );
        }

        // The pod read below reinterprets bytes as LockupKind and bool, so
        // every bit pattern those fields cannot hold must be rejected first.
        let entry_size = std::mem::size_of::<DepositEntry>();
        let entries = payload[DEPOSITS_OFFSET..DEPOSITS_OFFSET + 32 * entry_size]
            .chunks(entry_size)
            .enumerate();
        for (idx, entry) in entries {
            if entry[KIND_OFFSET] > LockupKind::Cliff as u8 {
                bail!(
                    "deposit entry {} has unknown lockup kind {}",
                    idx,
                    entry[KIND_OFFSET]
                );
            }
            if entry[IS_USED_OFFSET] > 1 || entry[ALLOW_CLAWBACK_OFFSET] > 1 {
                bail!("deposit entry {} has an out of range bool byte", idx);
            }
        }

        // Account data carries no alignment guarantee, so read a copy.
        bytemuck::try_pod_read_unaligned(payload)
            .map_err(|err| anyhow!("voter account bytes rejected: {err:?}"))
    }
}
