use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use vernan::commands::{interactive::interactive, submit::SubmitArgs, validate::validate_value};
use vernan_models::field::FieldName;
use vernan_utils::vernan_version;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        Command::Validate { field, value } => return validate_value(field, &value),
        _ => {}
    }

    init_tracing();

    let config = vernan_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Submit(args) => args.invoke(config).await?,
        Command::Interactive => interactive(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } | Command::Validate { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = vernan_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate and send a contact form in one go
    #[command(aliases(["s"]))]
    Submit(SubmitArgs),
    /// Fill in the contact form field by field
    #[command(aliases(["i"]))]
    Interactive,
    /// Check a single value against the rules of a form field
    #[command(aliases(["v"]))]
    Validate {
        /// One of name, email, phone, message
        field: FieldName,
        /// The value to check
        #[arg(default_value = "")]
        value: String,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
