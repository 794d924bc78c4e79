//! Locked-deposit scanner over Voter Stake Registry accounts.

use crate::constants::{PSY_MINT, PSY_REALM_ID, VOTER_STAKE_REGISTRY_PROGRAM_ID};
use crate::state::{
    account_discriminator, registrar_address, LockupKind, Registrar, Voter, VOTER_REGISTRAR_OFFSET,
};
use anyhow::Result;
use log::debug;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;

/// One deposit currently locked in the registry, with the wallet behind it.
#[derive(Clone, Copy, Debug)]
pub struct LockedDeposit {
    /// Address of the Voter account holding the deposit.
    pub voter: Pubkey,
    /// The wallet that owns the Voter account.
    pub wallet: Pubkey,
    pub amount_native: u64,
    pub lockup_kind: LockupKind,
    pub lockup_end_ts: i64,
}

/// Scan result: every matching deposit plus their sum in native units.
#[derive(Clone, Debug, Default)]
pub struct LockedDeposits {
    pub deposits: Vec<LockedDeposit>,
    /// Sum of `amount_native` over `deposits`. Real deposit totals exceed
    /// what f64 or u64-sensitive consumers handle safely, so keep it wide.
    pub total_native: u128,
}

/// Fetches the PSY registrar and every voter pointing at it, then sums the
/// deposits that are in use, still locked and denominated in PSY.
///
/// Any failed fetch or undecodable account aborts the scan. There are no
/// partial results.
pub async fn locked_deposits(rpc: &RpcClient) -> Result<LockedDeposits> {
    let (registrar_pk, _bump) = registrar_address(&PSY_REALM_ID, &PSY_MINT);
    let registrar = Registrar::deserialize_account(&rpc.get_account_data(&registrar_pk).await?)?;

    let voters = fetch_voters(rpc, &registrar_pk).await?;
    debug!(
        "scanning {} voter accounts of registrar {}",
        voters.len(),
        registrar_pk
    );

    Ok(sum_locked_deposits(&registrar, &voters, &PSY_MINT))
}

/// Lists all Voter accounts whose stored registrar equals `registrar`,
/// filtered server side by discriminator and registrar field.
async fn fetch_voters(rpc: &RpcClient, registrar: &Pubkey) -> Result<Vec<(Pubkey, Voter)>> {
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                0,
                &account_discriminator("Voter"),
            )),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                VOTER_REGISTRAR_OFFSET,
                registrar.as_ref(),
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            ..RpcAccountInfoConfig::default()
        },
        ..RpcProgramAccountsConfig::default()
    };
    let accounts = rpc
        .get_program_accounts_with_config(&VOTER_STAKE_REGISTRY_PROGRAM_ID, config)
        .await?;

    accounts
        .iter()
        .map(|(pubkey, account)| Ok((*pubkey, Voter::from_account_data(&account.data)?)))
        .collect()
}

/// Pure filter-and-reduce over already fetched records.
///
/// A deposit counts iff it is in use, under an active lockup and references
/// the voting mint index of `mint` in `registrar`. Iteration order does not
/// affect the sum.
pub fn sum_locked_deposits(
    registrar: &Registrar,
    voters: &[(Pubkey, Voter)],
    mint: &Pubkey,
) -> LockedDeposits {
    let mut out = LockedDeposits::default();
    let mint_idx = match registrar.voting_mint_index(mint) {
        Some(idx) => idx,
        // Mint not configured on this registrar: nothing can match.
        None => return out,
    };

    for (voter_pk, voter) in voters {
        let matching = voter.deposits.iter().filter(|d| {
            d.is_used && d.lockup.is_locked() && d.voting_mint_config_idx as usize == mint_idx
        });
        for deposit in matching {
            out.deposits.push(LockedDeposit {
                voter: *voter_pk,
                wallet: voter.voter_authority,
                amount_native: deposit.amount_deposited_native,
                lockup_kind: deposit.lockup.kind,
                lockup_end_ts: deposit.lockup.end_ts,
            });
            out.total_native += u128::from(deposit.amount_deposited_native);
        }
    }
    out
}
