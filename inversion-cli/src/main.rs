//! Inversion console
//!
//! Reads French statements and prints them back as inverted questions:
//! - interactively, one phrase per line until `END`
//! - from a file of phrases (`--file`)
//!
//! Tagging goes through a `DetectSyntax` endpoint or a file of recorded
//! responses.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use inversion::{FixedGender, Gender, GenderPrompt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod console;
mod prompt;
mod session;

use config::AppConfig;
use console::{read_phrases, Console};
use prompt::TerminalGenderPrompt;
use session::Session;

#[derive(Parser)]
#[command(name = "inversion")]
#[command(about = "Turn French statements into inverted questions", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INVERSION_CONFIG", default_value = "inversion.toml")]
    config: PathBuf,

    /// Read phrases from a file, one per line, until END
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Replay recorded DetectSyntax responses instead of calling the service
    #[arg(short, long, env = "INVERSION_RECORDINGS")]
    recordings: Option<PathBuf>,

    /// DetectSyntax endpoint
    #[arg(short, long, env = "INVERSION_ENDPOINT")]
    endpoint: Option<String>,

    /// Answer the gender question up front instead of being asked
    #[arg(short, long)]
    gender: Option<GenderArg>,

    /// Print each phrase's part-of-speech tags
    #[arg(long)]
    show_tags: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GenderArg {
    Masc,
    Fem,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Masc => Gender::Masculine,
            GenderArg::Fem => Gender::Feminine,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "✗".red(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(&cli.config)?;
    if let Some(recordings) = cli.recordings {
        config.tagger.recordings = Some(recordings);
    }
    if let Some(endpoint) = cli.endpoint {
        config.tagger.endpoint = Some(endpoint);
    }

    let session = Session::from_config(&config).context("couldn't start the session")?;

    let mut fixed;
    let mut terminal;
    let prompt: &mut dyn GenderPrompt = match cli.gender {
        Some(gender) => {
            fixed = FixedGender(gender.into());
            &mut fixed
        }
        None => {
            terminal = TerminalGenderPrompt::new();
            &mut terminal
        }
    };

    let stdout = io::stdout();
    let mut console = Console::new(&session, stdout.lock()).show_tags(cli.show_tags);

    match cli.file {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
            let phrases = read_phrases(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?;
            tracing::info!(count = phrases.len(), path = %path.display(), "read phrases");
            console.run_batch(&phrases, prompt)
        }
        None => console.run_interactive(io::stdin().lock(), prompt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "inversion",
            "--file",
            "phrases.txt",
            "--gender",
            "fem",
            "--show-tags",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("phrases.txt")));
        assert_eq!(cli.gender.map(Gender::from), Some(Gender::Feminine));
        assert!(cli.show_tags);
        assert!(cli.verbose);
        assert!(Cli::try_parse_from(["inversion", "--gender", "neutre"]).is_err());
    }

    #[test]
    fn sample_phrases_run_against_recordings() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        let phrases =
            read_phrases(BufReader::new(File::open(data.join("phrases.txt")).unwrap())).unwrap();
        assert_eq!(phrases.len(), 7);

        let session = session::tests::demo_session();
        let questions: Vec<String> = session
            .process_batch(&phrases, &mut FixedGender(Gender::Feminine))
            .unwrap()
            .into_iter()
            .map(|outcome| match outcome {
                Ok(result) => result.rendered_question,
                Err(err) => err.user_message(),
            })
            .collect();

        assert_eq!(
            questions,
            vec![
                "Bonjour suis-je content ?",
                "aimes-tu aller au magasin ?",
                "Quand viens-tu ?",
                "puis-je aller au magasin je compte vouloir faire quelque chose ?",
                "Marie chante-t-elle bien ?",
                "Le chat dort-elle ?",
                inversion::APOLOGY_MESSAGE,
            ]
        );
    }

    #[test]
    fn sample_config_points_at_recordings() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join("inversion.toml");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(
            config.tagger.recordings,
            Some(PathBuf::from("inversion-tagger/fixtures/demo-recordings.json"))
        );
        assert_eq!(config.tagger.endpoint, None);
    }
}
