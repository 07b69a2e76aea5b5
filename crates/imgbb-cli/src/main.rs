//! ImgBB CLI — upload images to ImgBB from the command line.
//!
//! Set IMGBB_API_KEY (and optionally IMGBB_API_URL to point at another
//! endpoint). Prints a short summary by default, the full JSON response
//! with --json; exits non-zero on failure.

use anyhow::Context;
use clap::{Parser, Subcommand};
use imgbb_cli::{format_size, init_tracing};
use imgbb_client::{ImgbbClient, UploadOptions, UploadSource};

#[derive(Parser)]
#[command(name = "imgbb", about = "ImgBB upload CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image from a local path or a remote URL
    Upload {
        /// Path to the image file, or an absolute image URL
        image: String,
        /// Custom name for the stored image
        #[arg(long)]
        name: Option<String>,
        /// Auto-deletion delay in seconds (60-15552000); 0 keeps the image forever
        #[arg(long, default_value = "0")]
        expiration: u64,
        /// Print the full JSON response instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let client =
        ImgbbClient::from_env().context("Failed to create ImgBB client. Set IMGBB_API_KEY")?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            image,
            name,
            expiration,
            json,
        } => {
            let mut options = UploadOptions::new().expiration(expiration);
            if let Some(name) = name {
                options = options.name(name);
            }

            let response = client
                .upload_with_options(UploadSource::detect(&image), &options)
                .await?;

            if json {
                let out =
                    serde_json::to_string_pretty(&response).context("Serialize response")?;
                println!("{}", out);
            } else {
                let data = &response.data;
                println!(
                    "Uploaded {} ({}x{}, {})",
                    data.id,
                    data.width,
                    data.height,
                    format_size(data.size)
                );
                println!("  Viewer:  {}", data.url_viewer);
                println!("  Direct:  {}", data.url);
                println!("  Display: {}", data.display_url);
                println!("  Delete:  {}", data.delete_url);
                if data.expiration != 0 {
                    println!("  Expires in {} seconds", data.expiration);
                }
            }
        }
    }

    Ok(())
}
