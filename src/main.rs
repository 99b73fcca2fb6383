use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};

use critic::banner::{BannerInfo, print_banner, print_session_summary};
use critic::commands::{CommandRegistry, CommandResult};
use critic::config::{GatewayConfig, load_dotenv};
use critic::console::client::HttpGatewayClient;
use critic::console::render::render_status;
use critic::console::{Console, Status};
use critic::consts::{CLIENT_FAILURE_MESSAGE, DEFAULT_GATEWAY_URL};
use critic::gateway::{self, AppState};
use critic::logging;
use critic::reviewer::gemini::GeminiReviewer;
use critic::spinner::Spinner;

const SPINNER_MESSAGE: &str = "Analyzing...";

#[derive(Parser)]
#[command(name = "critic", version, about = "Your code, read by a machine.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Gateway base URL used by the console
    #[arg(short, long, env = "CRITIC_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL)]
    gateway: String,
}

#[derive(Subcommand)]
enum Command {
    /// Run the review gateway
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Gemini model (overrides GEMINI_MODEL)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// Review a single file and exit
    Review {
        /// Source file, or `-` for stdin
        path: PathBuf,

        /// Language label sent with the code
        #[arg(short, long)]
        language: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve { port, model }) => serve(port, model).await,
        Some(Command::Review { path, language }) => {
            review_once(&cli.gateway, &path, &language).await
        }
        None => repl(&cli.gateway).await,
    }
}

async fn serve(port: Option<u16>, model: Option<String>) -> anyhow::Result<()> {
    logging::init(logging::GATEWAY_FILTER);

    let config = GatewayConfig::from_env()?.with_overrides(port, model);

    print_banner(&BannerInfo::Gateway {
        port: config.port,
        model: &config.model,
    });

    let reviewer = Arc::new(GeminiReviewer::new(config.api_key, Some(config.model)));
    let listener = gateway::bind(config.port).await?;

    gateway::serve(listener, AppState::new(reviewer), async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Run one submit cycle with the spinner attached for its duration.
async fn submit(console: &mut Console) {
    let spinner = Spinner::attach(console.subscribe(), SPINNER_MESSAGE);
    console.submit().await;
    spinner.detach().await;
}

async fn review_once(gateway: &str, path: &Path, language: &str) -> anyhow::Result<()> {
    logging::init(logging::CONSOLE_FILTER);

    let code = if path == Path::new("-") {
        let mut code = String::new();
        tokio::io::stdin()
            .read_to_string(&mut code)
            .await
            .context("failed to read code from stdin")?;
        code
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let mut console = Console::new(Arc::new(HttpGatewayClient::new(gateway)));
    console.form_mut().set_code(code);
    console.form_mut().set_language(language);

    submit(&mut console).await;

    match console.form().status() {
        Status::Feedback(_) => {
            println!("{}", render_status(console.form(), io::stdout().is_terminal()));
            Ok(())
        }
        _ => bail!(
            "{}",
            console.form().error().unwrap_or(CLIENT_FAILURE_MESSAGE)
        ),
    }
}

async fn repl(gateway: &str) -> anyhow::Result<()> {
    logging::init(logging::CONSOLE_FILTER);

    let mut console = Console::new(Arc::new(HttpGatewayClient::new(gateway)));
    let registry = CommandRegistry::new();
    let colored = io::stdout().is_terminal();

    print_banner(&BannerInfo::Console {
        gateway,
        theme: console.form().theme().label(),
    });

    // Async stdin so Ctrl+C is caught at the prompt too
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("critic> ");
        io::stdout().flush()?;

        let line = tokio::select! {
            result = lines.next_line() => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {}", e);
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        match registry.dispatch(&line, &mut console).await {
            CommandResult::NotACommand => console.form_mut().push_code_line(&line),
            CommandResult::Handled => {}
            CommandResult::Submit => {
                submit(&mut console).await;
                let status = render_status(console.form(), colored);
                if !status.is_empty() {
                    println!("{status}");
                }
            }
            CommandResult::Quit => break,
        }
    }

    print_session_summary(console.reviews());
    Ok(())
}
