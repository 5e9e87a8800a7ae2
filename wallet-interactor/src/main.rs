use alloy::primitives::U256;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wallet_interactor::{config::CONFIG_FILE, InteractorConfig, PapyrusInteract};

#[derive(Parser, Debug)]
#[command(name = "papyrus-interact", version, about = "Papyrus wallet interactor")]
struct Cli {
    #[arg(short, long, default_value = CONFIG_FILE)]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full submit and confirm run against the configured wallet.
    Run,
    Unlock,
    MakeTransferable,
    /// Submit one call to the wallet as the configured submitter.
    Submit {
        #[arg(long)]
        to: String,
        #[arg(long, default_value = "0")]
        value: String,
        #[arg(long, default_value = "0x")]
        data: String,
    },
    /// Submit several calls at once, each given as `<to>:<value>:<data>`.
    SubmitBatch {
        #[arg(long = "call", required = true, value_parser = parse_call)]
        calls: Vec<CallArg>,
    },
    Confirm {
        id: u64,
    },
    ConfirmBatch {
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    TxCount,
    Balance {
        address: String,
    },
    TokenBalance {
        address: String,
    },
    WaitBlock,
}

#[derive(Debug, Clone)]
struct CallArg {
    to: String,
    value: U256,
    data: String,
}

fn parse_call(raw: &str) -> Result<CallArg, String> {
    let mut parts = raw.splitn(3, ':');
    let (Some(to), Some(value), Some(data)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected <to>:<value>:<data>, got `{raw}`"));
    };
    let value = wallet_utils::unit::u256_from_str(value).map_err(|e| e.to_string())?;

    Ok(CallArg {
        to: to.to_string(),
        value,
        data: data.to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = InteractorConfig::load(&cli.config)
        .with_context(|| format!("loading config {}", cli.config))?;
    match &config.log.dir {
        Some(dir) => wallet_utils::log::file::init_log(dir, Some(config.log.level.as_str()))?,
        None => wallet_utils::init_log(Some(config.log.level.as_str())),
    }

    let interact = PapyrusInteract::new(config)?;
    let submitter = interact.config.submitter()?.address.clone();

    match cli.command {
        Command::Run => {
            let report = interact.run_scenario().await?;
            tracing::info!(
                "scenario done single = {} batch = {:?}",
                report.single_tx_id,
                report.batch_tx_ids
            );
        }
        Command::Unlock => interact.unlock_holders().await?,
        Command::MakeTransferable => {
            let sent = interact.make_tokens_transferable().await?;
            println!("transferable (sent = {sent})");
        }
        Command::Submit { to, value, data } => {
            let value = wallet_utils::unit::u256_from_str(&value)?;
            let hash = interact
                .submit_transaction_to_wallet(&submitter, &to, value, &data)
                .await?;
            println!("{hash}");
        }
        Command::SubmitBatch { calls } => {
            let tos: Vec<String> = calls.iter().map(|c| c.to.clone()).collect();
            let values: Vec<U256> = calls.iter().map(|c| c.value).collect();
            let datas: Vec<String> = calls.iter().map(|c| c.data.clone()).collect();
            let hash = interact
                .submit_transactions_to_wallet(&submitter, &tos, &values, &datas)
                .await?;
            println!("{hash}");
        }
        Command::Confirm { id } => {
            for hash in interact.confirm_transaction_on_wallet(id).await? {
                println!("{hash}");
            }
        }
        Command::ConfirmBatch { ids } => {
            for hash in interact.confirm_transactions_on_wallet(&ids).await? {
                println!("{hash}");
            }
        }
        Command::TxCount => println!("{}", interact.transaction_count().await?),
        Command::Balance { address } => println!("{}", interact.balance(&address).await?),
        Command::TokenBalance { address } => {
            println!("{}", interact.token_balance(&address).await?)
        }
        Command::WaitBlock => println!("{}", interact.wait_for_next_block().await?),
    }

    Ok(())
}
