//! Duologue entry point.
//!
//! Binary name: `duologue`
//!
//! Loads credentials from the environment (and `.env`), wires the two
//! personas to their search backends, and runs the alternating
//! conversation, printing each turn to stdout.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use duologue_core::driver::{ConversationDriver, DEFAULT_ROUNDS, SEED_PROMPT};
use duologue_core::generator::ResponseGenerator;
use duologue_core::persona::Persona;
use duologue_infra::config::AppConfig;
use duologue_infra::openai::OpenAiClient;
use duologue_infra::supabase::SupabaseChunkIndex;
use duologue_types::conversation::ConversationTurn;

/// System instruction for the California regional expert persona.
const NAREK_INSTRUCTION: &str = "You are an expert on all things related to the state of \
    California. You have deep knowledge of California history, geography, politics, law, \
    culture, climate, universities, technology, and local customs. When answering questions, \
    prioritize California-specific context, examples, and accuracy.";

/// System instruction for the wellness companion persona.
const IRINA_INSTRUCTION: &str =
    "You are an expert on all things related to mental health. Be uplifting, helpful, and kind.";

#[derive(Parser)]
#[command(
    name = "duologue",
    version,
    about = "Runs a retrieval-augmented conversation between two bot personas"
)]
struct Cli {
    /// Number of B/A rounds after the seed turn
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,

    /// Seed prompt given to the first persona
    #[arg(long, default_value = SEED_PROMPT)]
    seed: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(cli.verbose, cli.quiet)))
        .with_target(false)
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;

    let openai = OpenAiClient::new(config.openai_api_key, config.embedding_model);

    let narek = Persona::new(
        "Narek",
        NAREK_INSTRUCTION,
        SupabaseChunkIndex::new(
            config.first_supabase.url,
            config.first_supabase.service_role_key,
        ),
    );
    let irina = Persona::new(
        "Irina",
        IRINA_INSTRUCTION,
        SupabaseChunkIndex::new(
            config.second_supabase.url,
            config.second_supabase.service_role_key,
        ),
    );

    let generator = ResponseGenerator::new(&openai, &openai, config.chat_model);

    tracing::info!(rounds = cli.rounds, "starting conversation");

    ConversationDriver::new(cli.rounds)
        .with_seed_prompt(cli.seed)
        .run(&generator, &narek, &irina, print_turn)
        .await
        .context("conversation aborted")?;

    Ok(())
}

/// Map CLI verbosity flags to an env-filter directive.
fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,duologue=debug",
        _ => "trace",
    }
}

/// Print one turn as `SPEAKER: text`, the sole observable artifact of a run.
fn print_turn(turn: &ConversationTurn) {
    println!(
        "{} {}",
        console::style(format!("{}:", turn.speaker.to_uppercase()))
            .cyan()
            .bold(),
        turn.message
    );
}
