//! design-tokens - resolve a token document and print the complete set
//!
//! ```text
//! design-tokens design-system/tokens.json --format css
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use design_tokens::log;
use design_tokens::{
    AppConfig, DesignTokens, FileTokenGateway, NullTokenSource, OutputFormat, ThemeContext,
    ThemePresenter, TokenSource,
};

#[derive(Parser)]
#[command(name = "design-tokens")]
#[command(about = "Resolve an external design-token document against the built-in defaults")]
struct Cli {
    /// Token document (JSON). Overrides `tokens_path` from the config file
    tokens: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,

    /// Config file (default: search the standard locations)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("design-tokens: config: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Some(log_path) = &config.log_path {
        if let Err(e) = log::init(log_path) {
            eprintln!("design-tokens: cannot open log {:?}: {}", log_path, e);
        }
    }

    let source: Box<dyn TokenSource> = match cli.tokens.or(config.tokens_path) {
        Some(path) => Box::new(FileTokenGateway::new(path)),
        None => Box::new(NullTokenSource),
    };

    let context = ThemeContext::from_source(source.as_ref(), &DesignTokens::default());
    design_tokens::log!("Resolved {} token(s) from {}", context.summary().total(), source.describe());

    match render(&context, cli.format.unwrap_or(config.output)) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("design-tokens: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(context: &ThemeContext, format: OutputFormat) -> Result<String, serde_json::Error> {
    let tokens = context.tokens();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(tokens)? + "\n",
        OutputFormat::Css => ThemePresenter::render_css(tokens),
        OutputFormat::Component => {
            serde_json::to_string_pretty(&ThemePresenter::component_theme(tokens))? + "\n"
        }
    })
}
