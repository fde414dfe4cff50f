use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::*;
use tracing::{error, info, Level};

use clinical_extraction::ExtractionConfig;
use error_common::{log_error, IntakeError, Result};
use intake_server::{create_app, logging, routes::paths, IntakeServer, ServerConfig};
use logger_redacted::LoggerConfig;
use voice_recognition_service::VoiceConfig;

/// Symptom Intake HTTP Server
#[derive(Parser, Debug)]
#[command(name = "intake-server")]
#[command(about = "Turns recorded patient complaints into structured intake records")]
struct Args {
    /// Server bind address (overrides INTAKE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides INTAKE_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory for in-flight uploads (overrides INTAKE_UPLOAD_DIR)
    #[arg(long)]
    upload_dir: Option<PathBuf>,

    /// Symptom table file, JSON or YAML (overrides SYMPTOM_TABLE_PATH)
    #[arg(long)]
    symptom_table: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, env = "INTAKE_VERBOSE")]
    verbose: bool,

    /// Always log JSON lines, even on a terminal
    #[arg(long, env = "INTAKE_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is normal outside development.
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(upload_dir) = args.upload_dir {
        config.upload_dir = upload_dir;
    }

    let logger = LoggerConfig::from_env();
    let level = if args.verbose {
        Level::DEBUG
    } else {
        logging::parse_level(&logger.log_level)
    };
    logging::init_tracing(config.environment, level, args.json_logs)?;
    if config.environment.is_development() && !args.json_logs {
        print_startup_banner();
    }

    info!("🏥 {}", "Starting Symptom Intake Server".bright_cyan());
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION").bright_white());
    info!("🌐 Bind address: {}", config.bind_address().bright_yellow());
    info!("📁 Upload directory: {}", config.upload_dir.display().to_string().bright_white());

    let mut extraction = ExtractionConfig::from_env()
        .map_err(|e| IntakeError::Config(format!("Extraction config: {}", e)))?;
    if let Some(table) = args.symptom_table {
        extraction.symptom_table_path = Some(table);
    }
    let voice = VoiceConfig::from_env().map_err(|e| IntakeError::Config(format!("Voice config: {}", e)))?;

    let server = match IntakeServer::initialize(config.clone(), &extraction, voice, &logger).await {
        Ok(server) => server,
        Err(e) => {
            log_error("startup", &e);
            error!("   {}", "Please check your .env file and environment variables".bright_yellow());
            return Err(e);
        }
    };
    info!("✅ {}", "Intake pipeline ready".bright_green());

    let app = create_app(server);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| IntakeError::Network(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("🚀 {}", format!("Intake server running on http://{}", addr).bright_green());
    info!("📋 {}", format!("Health check available at: http://{}{}", addr, paths::health::HEALTH).bright_blue());
    info!(
        "🎙️  {}",
        format!("Audio intake: POST http://{}{}{}", addr, paths::API_V1, paths::intake::AUDIO).bright_blue()
    );
    info!(
        "📝 {}",
        format!("Text intake: POST http://{}{}{}", addr, paths::API_V1, paths::intake::EXTRACT).bright_blue()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server stopped unexpectedly")?;

    info!("👋 {}", "Intake server stopped".bright_cyan());
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn print_startup_banner() {
    println!("{}", "╔══════════════════════════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║                    🏥 SYMPTOM INTAKE ENGINE                  ║".bright_cyan());
    println!("{}", "║            Spoken complaints to structured records           ║".bright_cyan());
    println!("{}", "╚══════════════════════════════════════════════════════════════╝".bright_cyan());
    println!();
}
