use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    EnvTokenProvider, HttpQuestionService, QuestionServiceConfig, QuestionSource,
    StaticTokenProvider, TokenProvider,
};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidDifficulty { raw: String },
    InvalidBackendUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw}")
            }
            ArgsError::InvalidBackendUrl { raw } => write!(f, "invalid --backend value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions: Arc<dyn QuestionSource>,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<dyn QuestionSource> {
        Arc::clone(&self.questions)
    }
}

#[derive(Default)]
struct Args {
    backend_url: Option<String>,
    role: Option<String>,
    count: Option<u32>,
    difficulty: Option<u32>,
    token: Option<String>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--backend <url>] [--role <role>] [--count <n>] [--difficulty <n>] [--token <jwt>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend http://localhost:5000");
    eprintln!("  --role volunteer");
    eprintln!("  --count 10");
    eprintln!("  --difficulty 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BACKEND_URL, QUIZ_DEFAULT_ROLE, QUIZ_QUESTION_COUNT, QUIZ_DIFFICULTY");
    eprintln!("  QUIZ_ACCESS_TOKEN (read on every request when --token is not given)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => {
                    let value = require_value(args, "--backend")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBackendUrl { raw: value });
                    }
                    parsed.backend_url = Some(value);
                }
                "--role" => {
                    parsed.role = Some(require_value(args, "--role")?);
                }
                "--count" => {
                    let value = require_value(args, "--count")?;
                    let count: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                    parsed.count = Some(count);
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    let difficulty: u32 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value.clone() })?;
                    parsed.difficulty = Some(difficulty);
                }
                "--token" => {
                    parsed.token = Some(require_value(args, "--token")?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Environment first, flags on top. Keep this in the binary glue so the
    // services stay constructible with a plain config in tests.
    let mut config = QuestionServiceConfig::from_env();
    if let Some(backend_url) = parsed.backend_url {
        config.base_url = backend_url;
    }
    if let Some(role) = parsed.role {
        config.default_role = role;
    }
    if let Some(count) = parsed.count {
        config.question_count = count;
    }
    if let Some(difficulty) = parsed.difficulty {
        config.difficulty = difficulty;
    }

    let tokens: Arc<dyn TokenProvider> = match parsed.token {
        Some(token) => Arc::new(StaticTokenProvider::new(token)),
        None => Arc::new(EnvTokenProvider),
    };
    let questions: Arc<dyn QuestionSource> = Arc::new(HttpQuestionService::new(config, tokens));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { questions });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Training Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
