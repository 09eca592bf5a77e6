use crate::error::Result;
use crate::wallet::KeyPair;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "wallet-signer")]
pub struct Opt {
    #[arg(
        long,
        global = true,
        help = "Node base URL (overrides config and WALLET_NODE_URL)"
    )]
    pub node: Option<String>,
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// Caller-held keys for the signing commands
#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(
        long = "private-key",
        env = "WALLET_PRIVATE_KEY",
        hide_env_values = true,
        help = "Private key (base-10 scalar)"
    )]
    pub private_key: String,
    #[arg(
        long = "public-key",
        env = "WALLET_PUBLIC_KEY",
        help = "Public key (base64); derived from the private key when omitted"
    )]
    pub public_key: Option<String>,
}

impl KeyArgs {
    pub fn to_key_pair(&self) -> Result<KeyPair> {
        match &self.public_key {
            Some(public_key) => Ok(KeyPair::from_parts(
                self.private_key.as_str(),
                public_key.as_str(),
            )),
            None => KeyPair::from_private_key(&self.private_key),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "genkey", about = "Generate a new key pair")]
    Genkey,
    #[command(name = "getbalance", about = "Ask the node for a public key's balance")]
    GetBalance {
        #[arg(help = "The public key (base64)")]
        public_key: String,
    },
    #[command(name = "send", about = "Sign a transaction and send it to the node")]
    Send {
        #[command(flatten)]
        keys: KeyArgs,
        #[arg(help = "Recipient public key (base64)")]
        recipient: String,
        #[arg(help = "Amount to send", allow_hyphen_values = true)]
        amount: String,
        #[arg(long = "dry-run", help = "Print the signed JSON instead of sending it")]
        dry_run: bool,
    },
    #[command(name = "mine", about = "Sign a mining request and send it to the node")]
    Mine {
        #[command(flatten)]
        keys: KeyArgs,
        #[arg(long = "dry-run", help = "Print the signed JSON instead of sending it")]
        dry_run: bool,
    },
    #[command(
        name = "verifytx",
        about = "Check a transaction JSON's hash and signature"
    )]
    VerifyTx {
        #[arg(help = "Transaction JSON")]
        json: String,
    },
    #[command(name = "hash", about = "Hash the concatenation of the given fields")]
    Hash {
        #[arg(help = "Fields, concatenated in order", allow_hyphen_values = true)]
        fields: Vec<String>,
    },
}
