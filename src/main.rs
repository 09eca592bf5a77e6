// This is my main entry point for the wallet CLI
// Every command is a single request/response: nothing is retried and no key ever touches disk
use clap::Parser;
use log::{error, info, LevelFilter};
use std::process;
use wallet_signer::{
    hash, CanonicalMessage, Command, KeyPair, MiningRequest, NodeClient, Opt, SystemClock,
    Transaction, GLOBAL_CONFIG,
};

#[tokio::main]
async fn main() {
    // I log at Info by default, but RUST_LOG still takes precedence when it is set
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    // I parse the command line arguments using clap
    let opt = Opt::parse();

    // If anything fails I log the error and exit with code 1
    if let Err(e) = run(opt).await {
        error!("Error: {e}");
        process::exit(1);
    }
}

// This is where I handle all the different CLI commands
async fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // A config file is applied first, then --node wins over everything else
    if let Some(path) = &opt.config {
        GLOBAL_CONFIG.load_file(path)?;
    }
    if let Some(node) = opt.node {
        GLOBAL_CONFIG.set_node_url(node);
    }

    match opt.command {
        // When I need a fresh key pair; the caller is the only one who keeps it
        Command::Genkey => {
            let key_pair = KeyPair::generate()?;
            println!("Private key: {}", key_pair.get_private_key());
            println!("Public key: {}", key_pair.get_public_key());
        }
        // When I want to know how much a public key holds
        Command::GetBalance { public_key } => {
            let client = NodeClient::from_config(&GLOBAL_CONFIG)?;
            // The node's answer is shown as-is, whether it is a number or an error text
            let balance = client.get_balance(&public_key).await?;
            println!("{balance}");
        }
        // When I want to move value to another public key
        Command::Send {
            keys,
            recipient,
            amount,
            dry_run,
        } => {
            let key_pair = keys.to_key_pair()?;
            // A bad amount is rejected here, before any signing or network work
            let transaction = Transaction::build(&key_pair, &recipient, &amount, &SystemClock)?;
            if dry_run {
                println!("{}", transaction.to_json()?);
            } else {
                let client = NodeClient::from_config(&GLOBAL_CONFIG)?;
                let reply = client.send_transaction(&transaction).await?;
                println!("{reply}");
            }
        }
        // When I want the node to mine on my behalf
        Command::Mine { keys, dry_run } => {
            let key_pair = keys.to_key_pair()?;
            let request = MiningRequest::build(&key_pair, &SystemClock)?;
            if dry_run {
                println!("{}", request.to_json()?);
            } else {
                let client = NodeClient::from_config(&GLOBAL_CONFIG)?;
                let reply = client.send_mining_request(&request).await?;
                println!("{reply}");
            }
        }
        // When I want to check a transaction the way the node does
        Command::VerifyTx { json } => {
            let transaction = Transaction::from_json(&json)?;
            if transaction.verify() {
                info!("Transaction {} verified", transaction.get_hash());
                println!("valid");
            } else {
                println!("invalid");
                process::exit(2);
            }
        }
        // When I want the digest of arbitrary fields, joined like the assemblers join theirs
        Command::Hash { fields } => {
            let message = CanonicalMessage::new().fields(&fields).finish();
            println!("{}", hash(&message));
        }
    }
    Ok(())
}
