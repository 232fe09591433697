use clap::{Parser, Subcommand};
use reqwest::{Response, Url};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "greeting-cli")]
#[command(about = "Command-line client for the greeting server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the static greeting
    World,
    /// Formal greeting via /SayHello
    Formal {
        #[arg(short, long)]
        name: String,
    },
    /// Informal greeting via /SayHello2/{name}
    Informal { name: String },
    /// List artists via /searchArtist/{artist}
    Artists {
        #[arg(default_value = "any")]
        artist: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    match cli.command {
        Commands::World => {
            let res = client.get(endpoint(&base, &[])?).send().await?;
            print_text(res).await?;
        }
        Commands::Formal { name } => {
            let res = client
                .get(endpoint(&base, &["SayHello"])?)
                .query(&[("name", name)])
                .send()
                .await?;
            print_text(res).await?;
        }
        Commands::Informal { name } => {
            let res = client
                .get(endpoint(&base, &["SayHello2", &name])?)
                .send()
                .await?;
            print_text(res).await?;
        }
        Commands::Artists { artist } => {
            let res = client
                .get(endpoint(&base, &["searchArtist", &artist])?)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await?;
            print_json(res).await?;
        }
    }

    Ok(())
}

/// `base` with `segments` appended, each percent-encoded.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Pass successful responses through; report anything else as an error.
async fn check(res: Response) -> Result<Response, Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    if let Ok(text) = res.text().await {
        eprintln!("Response: {}", text);
    }
    Err(format!("server returned status {}", status).into())
}

async fn print_text(res: Response) -> Result<(), Box<dyn std::error::Error>> {
    let res = check(res).await?;
    println!("{}", res.text().await?);
    Ok(())
}

async fn print_json(res: Response) -> Result<(), Box<dyn std::error::Error>> {
    let res = check(res).await?;
    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
