//! Command-line interface for the fulla DigitalOcean client.
//!
//! Each subcommand maps 1:1 onto a resource operation. Errors propagate to
//! `main`, print as a readable message, and exit non-zero.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fulla_api::models::CreateDropletRequest;
use fulla_api::DropletsClient;
use fulla_core::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Work with DigitalOcean droplets, images, and account metadata.
#[derive(Parser)]
#[command(name = "fulla", version, about)]
struct Cli {
    /// Path to the config file (defaults to the per-user location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show account details
    Account,

    /// Manage droplets
    Droplets {
        #[command(subcommand)]
        command: DropletsCommand,
    },

    /// Inspect available images
    Images {
        #[command(subcommand)]
        command: ImagesCommand,
    },

    /// Inspect registered SSH keys
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
}

#[derive(Subcommand)]
enum DropletsCommand {
    /// List droplets
    List,

    /// Create a droplet
    Create(CreateArgs),

    /// Delete a droplet
    Delete {
        /// Droplet id
        id: u64,
    },

    /// Reboot a droplet
    Reboot {
        /// Droplet id
        id: u64,
    },
}

#[derive(Subcommand)]
enum ImagesCommand {
    /// List all available images (follows pagination)
    List,
}

#[derive(Subcommand)]
enum KeysCommand {
    /// List the account's SSH keys
    List,
}

#[derive(Args)]
struct CreateArgs {
    /// Droplet name
    #[arg(long)]
    name: String,

    /// Region slug (e.g. nyc3)
    #[arg(long)]
    region: String,

    /// Size slug (e.g. 512mb)
    #[arg(long)]
    size: String,

    /// Image slug or numeric id
    #[arg(long)]
    image: String,

    /// SSH key id or fingerprint (repeatable)
    #[arg(long = "ssh-key")]
    ssh_keys: Vec<String>,

    /// Cloud-init user data
    #[arg(long)]
    user_data: Option<String>,

    /// Enable or disable IPv6
    #[arg(long)]
    ipv6: Option<bool>,

    /// Enable or disable automated backups
    #[arg(long)]
    backups: Option<bool>,

    /// Enable or disable private networking
    #[arg(long)]
    private_networking: Option<bool>,
}

impl CreateArgs {
    fn into_request(self) -> CreateDropletRequest {
        let ssh_keys = self.ssh_keys.iter().map(|key| key_reference(key)).collect();
        let mut request =
            CreateDropletRequest::new(self.name, self.region, self.size, self.image, ssh_keys);
        request.user_data = self.user_data;
        request.ipv6 = self.ipv6;
        request.backups = self.backups;
        request.private_networking = self.private_networking;
        request
    }
}

/// Numeric arguments are key ids; everything else is a fingerprint.
fn key_reference(key: &str) -> serde_json::Value {
    match key.parse::<u64>() {
        Ok(id) => serde_json::Value::from(id),
        Err(_) => serde_json::Value::from(key),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let client = DropletsClient::from_settings(&settings)?;

    run(cli.command, &client).await
}

async fn run(command: Commands, client: &DropletsClient) -> Result<()> {
    match command {
        Commands::Account => {
            let account = client.get_account().await?;
            println!("email:          {}", account.email);
            println!("uuid:           {}", account.uuid);
            println!("droplet limit:  {}", account.droplet_limit);
            println!("status:         {}", account.status);
            if !account.status_message.is_empty() {
                println!("status message: {}", account.status_message);
            }
        }
        Commands::Droplets { command } => run_droplets(command, client).await?,
        Commands::Images {
            command: ImagesCommand::List,
        } => {
            let images = client.list_images().await?;
            for image in &images {
                println!(
                    "{:<12} {:<28} {}",
                    image.id,
                    image.slug.as_deref().unwrap_or("-"),
                    image.name.as_deref().unwrap_or("")
                );
            }
            println!("{} images", images.len());
        }
        Commands::Keys {
            command: KeysCommand::List,
        } => {
            let (keys, total) = client.list_ssh_keys().await?;
            for key in &keys {
                println!(
                    "{:<12} {:<50} {}",
                    key.id,
                    key.fingerprint.as_deref().unwrap_or("-"),
                    key.name.as_deref().unwrap_or("")
                );
            }
            println!("{total} keys (server total)");
        }
    }
    Ok(())
}

async fn run_droplets(command: DropletsCommand, client: &DropletsClient) -> Result<()> {
    match command {
        DropletsCommand::List => {
            let (droplets, total) = client.list_droplets().await?;
            for droplet in &droplets {
                println!(
                    "{:<12} {:<28} {}",
                    droplet.id,
                    droplet.name,
                    droplet.status.as_deref().unwrap_or("unknown")
                );
            }
            println!("{total} droplets (server total)");
        }
        DropletsCommand::Create(args) => {
            let droplet = client.create_droplet(&args.into_request()).await?;
            println!("created droplet {} ({})", droplet.id, droplet.name);
        }
        DropletsCommand::Delete { id } => {
            client.delete_droplet(id).await?;
            println!("deleted droplet {id}");
        }
        DropletsCommand::Reboot { id } => {
            let action = client.reboot_droplet(id).await?;
            println!("reboot of droplet {id}: action {} is {}", action.id, action.status);
        }
    }
    Ok(())
}
