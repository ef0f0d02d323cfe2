use artic_client::app::export::{write_artworks, OutputFormat};
use artic_client::app::gallery::{self, ArtworkCard, ArtworkDetailView};
use artic_client::app::smoke;
use artic_client::config::cli::Command;
use artic_client::config::toml_config::TomlConfig;
use artic_client::utils::error::ErrorCategory;
use artic_client::utils::logger;
use artic_client::{ArticClient, ArticError, Artwork, ArtworkApi, Cli};
use clap::Parser;
use std::io::Write;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let file = cli.file_config();

    // 初始化日誌
    let file_ref = file.as_ref().ok().and_then(Option::as_ref);
    let level = file_ref.and_then(TomlConfig::log_level);
    if cli.use_json_logs(file_ref) {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::debug!("CLI arguments: {:?}", cli);

    if let Err(e) = execute(cli, file).await {
        tracing::error!("❌ {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn execute(cli: Cli, file: Result<Option<TomlConfig>, ArticError>) -> Result<(), ArticError> {
    let client = ArticClient::new(cli.client_config_with(file?.as_ref())?)?;
    run(&client, cli.command).await
}

async fn run(client: &ArticClient, command: Command) -> Result<(), ArticError> {
    let stdout = std::io::stdout();

    match command {
        Command::Ping => {
            if client.test_connection().await {
                println!("✅ API connection successful");
            } else {
                println!("❌ API is not reachable");
                std::process::exit(1);
            }
        }
        Command::List {
            limit,
            page,
            fields,
            format,
        } => {
            let envelope = client.fetch_artworks(limit, page, fields.as_deref()).await?;
            write_artworks(&envelope.artworks()?, format, stdout.lock())?;
            if let (OutputFormat::Table, Ok(Some(pagination))) = (format, envelope.pagination()) {
                println!(
                    "\nPage {} of {} ({} artworks total)",
                    pagination.current_page.unwrap_or(page as u64),
                    pagination.total_pages.map_or("?".to_string(), |p| p.to_string()),
                    pagination.total.map_or("?".to_string(), |t| t.to_string())
                );
            }
        }
        Command::Get { id } => {
            let artwork = client.fetch_artwork_by_id(id).await?.artwork()?;
            print_detail(client, &artwork)?;
        }
        Command::Search {
            query,
            limit,
            format,
        } => {
            let envelope = client.search_artworks(&query, limit).await?;
            write_artworks(&envelope.artworks()?, format, stdout.lock())?;
        }
        Command::ImageUrl { image_id, size } => match client.image_url(Some(&image_id), &size) {
            Some(url) => println!("{}", url),
            None => {
                return Err(ArticError::ValidationError {
                    message: "An image id is required".to_string(),
                })
            }
        },
        Command::Featured { format } => {
            let artworks = gallery::featured_artworks(client).await?;
            if format == OutputFormat::Table {
                let mut out = stdout.lock();
                for artwork in &artworks {
                    let card = ArtworkCard::from_artwork(client, artwork);
                    writeln!(out, "{} ({})", card.title, card.id)?;
                    writeln!(out, "    {}", card.artist.lines().next().unwrap_or_default())?;
                    if let Some(url) = card.image_url {
                        writeln!(out, "    {}", url)?;
                    }
                }
            } else {
                write_artworks(&artworks, format, stdout.lock())?;
            }
        }
        Command::Random => match gallery::random_artwork(client, &mut rand::thread_rng()).await? {
            Some(artwork) => print_detail(client, &artwork)?,
            None => println!("No artwork found. Please try again."),
        },
        Command::Smoke { pause_ms } => {
            let report = smoke::run_smoke(client, Duration::from_millis(pause_ms)).await?;
            println!("🎉 All API checks completed");
            println!("   • Connectivity probe: {}", if report.connected { "ok" } else { "failed" });
            println!("   • General artworks: {} retrieved", report.listed);
            println!(
                "   • Specific artwork: {}",
                report.detail_title.as_deref().unwrap_or("Failed")
            );
            println!("   • Search results: {} found", report.search_results);
        }
    }

    Ok(())
}

fn print_detail(client: &ArticClient, artwork: &Artwork) -> Result<(), ArticError> {
    let view = ArtworkDetailView::from_artwork(client, artwork);
    let mut out = std::io::stdout().lock();

    writeln!(out, "{}", view.title)?;
    writeln!(out, "{}", view.artist)?;
    writeln!(out, "{}", view.date)?;
    if let Some(url) = &view.image_url {
        writeln!(out, "{}", url)?;
    }
    if let Some(description) = view.description_text() {
        writeln!(out, "\n{}", description)?;
    }
    Ok(())
}

fn exit_code(e: &ArticError) -> i32 {
    match e.category() {
        ErrorCategory::Configuration => 78,
        ErrorCategory::Timeout | ErrorCategory::Network => 2,
        ErrorCategory::Http => 3,
        ErrorCategory::Data => 4,
        ErrorCategory::Io => 74,
    }
}
