//! Supply aggregation: mint supply minus treasury, locked deposits and the
//! unvested grant remainder.

use crate::constants::{FOUNDATION_TREASURY, PSY_MINT};
use crate::deposits;
use crate::vesting;
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use solana_client::nonblocking::rpc_client::RpcClient;

/// Current circulating supply of PSY, in whole tokens.
///
/// The mint supply and treasury balance reads are independent and issued
/// concurrently; the registry scan and vesting remainder follow
/// sequentially. Any fetch error aborts the whole computation, to be
/// retried wholesale by the caller.
pub async fn circulating_supply(rpc: &RpcClient) -> Result<f64> {
    let (supply, treasury) = tokio::try_join!(
        rpc.get_token_supply(&PSY_MINT),
        rpc.get_token_account_balance(&FOUNDATION_TREASURY),
    )?;
    let locked = deposits::locked_deposits(rpc).await?.total_native;
    let unvested = vesting::unvested_amount(Utc::now().date_naive());

    let supply_native: u128 = supply.amount.parse().context("mint supply amount")?;
    let treasury_native: u128 = treasury.amount.parse().context("treasury balance amount")?;
    circulating(supply_native, treasury_native, locked, unvested, supply.decimals)
}

/// `(supply - treasury - locked - unvested) / 10^decimals`.
fn circulating(
    supply: u128,
    treasury: u128,
    locked: u128,
    unvested: u128,
    decimals: u8,
) -> Result<f64> {
    let reserved = treasury + locked + unvested;
    let native = supply
        .checked_sub(reserved)
        .ok_or_else(|| anyhow!("reserved amount {reserved} exceeds total supply {supply}"))?;
    Ok(native as f64 / 10f64.powi(decimals.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circulating_sample_values() {
        let result = circulating(
            1_000_000_000000,
            100_000_000000,
            50_000_000000,
            10_000_000000,
            6,
        )
        .unwrap();
        assert_eq!(result, 840_000.0);
    }

    #[test]
    fn circulating_zero_decimals() {
        assert_eq!(circulating(1000, 100, 0, 0, 0).unwrap(), 900.0);
    }

    #[test]
    fn circulating_everything_reserved() {
        assert_eq!(circulating(1000, 500, 300, 200, 6).unwrap(), 0.0);
    }

    #[test]
    fn circulating_underflow_is_an_error() {
        assert!(circulating(1000, 1000, 1, 0, 6).is_err());
    }
}
