use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;

#[derive(Parser, Debug)]
#[clap(version)]
struct Args {
    /// RPC endpoint to read account state from.
    #[clap(long, default_value = "https://api.mainnet-beta.solana.com")]
    rpc_url: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the circulating supply of PSY in whole tokens.
    CirculatingSupply,
    /// List tokens locked in Voter Stake Registry deposits, per wallet.
    LockedDeposits,
}

//
// Output format declarations. These are built from the fetched accounts and
// then converted to JSON.
//

#[derive(Serialize)]
struct DisplaySupply {
    circulating_supply: f64,
}

#[derive(Serialize)]
struct DisplayLockedDeposit {
    voter: String,
    wallet: String,
    amount_native: u64,
    lockup_kind: String,
    lockup_end_ts: i64,
}

#[derive(Serialize)]
struct DisplayLockedDeposits {
    total_native: String,
    deposits: Vec<DisplayLockedDeposit>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let rpc = RpcClient::new(args.rpc_url);

    match args.command {
        Command::CirculatingSupply => {
            let ser = DisplaySupply {
                circulating_supply: psy_supply::circulating_supply(&rpc).await?,
            };
            println!("{}", serde_json::to_string(&ser)?);
        }
        Command::LockedDeposits => {
            let scan = psy_supply::locked_deposits(&rpc).await?;
            let ser = DisplayLockedDeposits {
                total_native: scan.total_native.to_string(),
                deposits: scan
                    .deposits
                    .iter()
                    .map(|d| DisplayLockedDeposit {
                        voter: d.voter.to_string(),
                        wallet: d.wallet.to_string(),
                        amount_native: d.amount_native,
                        lockup_kind: format!("{:?}", d.lockup_kind),
                        lockup_end_ts: d.lockup_end_ts,
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&ser)?);
        }
    }
    Ok(())
}
