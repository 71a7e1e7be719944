use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{AlbumsClient, DEFAULT_API_BASE_URL};
use shared::{
    domain::{AlbumId, UserId, DEFAULT_USER_ID},
    protocol::{Album, NewAlbum},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "albums", about = "List and edit albums on a REST endpoint")]
struct Args {
    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,
    /// Print albums as JSON instead of one line each
    #[arg(long)]
    json: bool,
    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every album in server order
    List,
    /// Create an album
    Add {
        title: String,
        #[arg(long, default_value_t = DEFAULT_USER_ID.0)]
        user_id: i64,
    },
    /// Change the title of an existing album
    Rename { id: i64, title: String },
    /// Delete an album
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = AlbumsClient::new(&args.api_url)?;
    tracing::debug!(api = client.base_url(), command = ?args.command, "running");

    match args.command {
        Command::List => {
            let albums = client.list_albums().await.context("failed to list albums")?;
            tracing::debug!(count = albums.len(), "listed albums");
            print_albums(&albums, args.json)?;
        }
        Command::Add { title, user_id } => {
            let mut draft = NewAlbum::draft(UserId(user_id));
            draft.title = title;
            let album = client
                .create_album(&draft)
                .await
                .context("failed to create album")?;
            tracing::debug!(album_id = album.id.0, "created album");
            print_albums(&[album], args.json)?;
        }
        Command::Rename { id, title } => {
            client
                .update_album(AlbumId(id), &title)
                .await
                .with_context(|| format!("failed to rename album {id}"))?;
            println!("{id}\t{title}");
        }
        Command::Delete { id } => {
            client
                .delete_album(AlbumId(id))
                .await
                .with_context(|| format!("failed to delete album {id}"))?;
            println!("deleted album {id}");
        }
    }

    Ok(())
}

fn print_albums(albums: &[Album], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(albums)?);
        return Ok(());
    }
    for album in albums {
        println!("{}\t{}\t{}", album.id, album.user_id, album.title);
    }
    Ok(())
}
