use clap::{Parser, Subcommand};
use prost::Message;
use reqwest::header::CONTENT_TYPE;

use album_service::proto::ListOfAlbums;
use album_service::{Album, Format};

#[derive(Parser)]
#[command(name = "album-cli")]
#[command(about = "Command-line client for the album service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every album in one format (json, xml, yaml, proto, proto-2)
    List {
        #[arg(short, long, default_value = "json")]
        format: Format,

        /// Print at most this many albums from a protobuf response
        #[arg(long, default_value_t = 10)]
        show: usize,
    },
    /// Fetch one album by id
    Get { id: String },
    /// Create an album
    Create {
        id: String,
        title: String,
        artist: String,
        price: f64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List { format, show } => {
            let res = client
                .get(format!("{}/{}/albums", cli.url, format.path_segment()))
                .send()
                .await?;
            if format.is_binary() && res.status().is_success() {
                print_protobuf(res, show).await?;
            } else {
                print_response(res).await?;
            }
        }
        Commands::Get { id } => {
            let res = client
                .get(format!("{}/albums/{}", cli.url, id))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Create {
            id,
            title,
            artist,
            price,
        } => {
            let album = Album::new(id, title, artist, price);
            let res = client
                .post(format!("{}/albums", cli.url))
                .json(&album)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }
    println!("{}", text);
    Ok(())
}

async fn print_protobuf(
    res: reqwest::Response,
    show: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let bytes = res.bytes().await?;
    let albums: Vec<Album> = ListOfAlbums::decode(bytes.as_ref())?.into();

    println!(
        "{} albums ({} bytes, {})",
        albums.len(),
        bytes.len(),
        content_type
    );
    for album in albums.iter().take(show) {
        println!(
            "{:>8}  {:<24} {:<24} {:>8.2}",
            album.id, album.title, album.artist, album.price
        );
    }
    Ok(())
}
