use crate::constants::VOTER_STAKE_REGISTRY_PROGRAM_ID;
use crate::state::require_discriminator;
use crate::state::voting_mint_config::VotingMintConfig;
use anchor_lang::prelude::borsh;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use anyhow::Result;
use solana_sdk::pubkey::Pubkey;

/// Instance of a voting rights distributor.
///
/// Borsh encoded on chain behind the anchor discriminator.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default)]
pub struct Registrar {
    pub governance_program_id: Pubkey,
    pub realm: Pubkey,
    pub governing_token_mint: Pubkey,
    pub realm_authority: Pubkey,
    pub reserved1: [u8; 32],

    /// Storage for voting mints and their configuration. The length should
    /// match the deployed program's, not one's use case.
    pub voting_mints: [VotingMintConfig; 4],

    /// Debug only: time offset, to allow tests to move forward in time.
    pub time_offset: i64,
    pub bump: u8,
    pub reserved2: [u8; 7],
    pub reserved3: [u64; 11],
}

impl Registrar {
    pub fn deserialize_account(data: &[u8]) -> Result<Self> {
        let mut payload = require_discriminator("Registrar", data)?;
        Ok(AnchorDeserialize::deserialize(&mut payload)?)
    }

    /// Index of `mint` in the configured voting mints. First match wins;
    /// `None` means no deposit can reference it.
    pub fn voting_mint_index(&self, mint: &Pubkey) -> Option<usize> {
        self.voting_mints.iter().position(|v| v.mint == *mint)
    }
}

/// Deterministic registrar address for a (realm, mint) pair.
pub fn registrar_address(realm: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[realm.as_ref(), b"registrar", mint.as_ref()],
        &VOTER_STAKE_REGISTRY_PROGRAM_ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::account_discriminator;

    fn sample_registrar(mint: Pubkey) -> Registrar {
        let mut registrar = Registrar {
            realm: Pubkey::new_unique(),
            governing_token_mint: mint,
            bump: 255,
            ..Registrar::default()
        };
        registrar.voting_mints[0].mint = mint;
        registrar.voting_mints[0].digit_shift = -3;
        registrar
    }

    #[test]
    fn account_roundtrip() {
        let mint = Pubkey::new_unique();
        let registrar = sample_registrar(mint);
        let mut data = account_discriminator("Registrar").to_vec();
        registrar.serialize(&mut data).unwrap();
        // 4 pubkeys + 32 reserved + 4 mint configs of 120 bytes + time
        // offset + bump + 7 reserved + 11 reserved u64s.
        assert_eq!(data.len(), 8 + 4 * 32 + 32 + 4 * 120 + 8 + 1 + 7 + 88);

        let decoded = Registrar::deserialize_account(&data).unwrap();
        assert_eq!(decoded.realm, registrar.realm);
        assert_eq!(decoded.governing_token_mint, mint);
        assert_eq!(decoded.voting_mints[0].mint, mint);
        assert_eq!(decoded.voting_mints[0].digit_shift, -3);
        assert_eq!(decoded.bump, 255);
    }

    #[test]
    fn rejects_foreign_discriminator() {
        let mut data = account_discriminator("Voter").to_vec();
        sample_registrar(Pubkey::new_unique())
            .serialize(&mut data)
            .unwrap();
        assert!(Registrar::deserialize_account(&data).is_err());
    }

    #[test]
    fn voting_mint_index_first_match_wins() {
        let mint = Pubkey::new_unique();
        let mut registrar = sample_registrar(mint);
        registrar.voting_mints[2].mint = mint;
        assert_eq!(registrar.voting_mint_index(&mint), Some(0));
        assert_eq!(registrar.voting_mint_index(&Pubkey::new_unique()), None);
    }
}
