use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use api::ApiConfig;
use blitz_core::report::ReportOptions;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ReportSettings};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_REPORT_DIR: &str = "reportes";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidGoal { raw: String },
    InvalidReportDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidGoal { raw } => write!(f, "invalid --default-goal value: {raw}"),
            ArgsError::InvalidReportDir { raw } => {
                write!(f, "invalid --report-dir value: {raw:?}")
            }
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--report-dir <dir>] [--default-goal <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", api::config::DEFAULT_BASE_URL);
    eprintln!("  --report-dir {DEFAULT_REPORT_DIR}");
    eprintln!("  --default-goal (none: use the backend goal)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  BLITZ_API_URL, BLITZ_API_TOKEN, BLITZ_MEMBERS_PATH, BLITZ_MAP_PATH");
    eprintln!("  BLITZ_REPORT_DIR, BLITZ_DEFAULT_GOAL, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api_url: Option<String>,
    report_dir: PathBuf,
    default_goal: Option<u64>,
}

fn parse_goal(raw: String) -> Result<u64, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(goal) if goal > 0 => Ok(goal),
        _ => Err(ArgsError::InvalidGoal { raw }),
    }
}

impl Args {
    /// Flags win over environment values; `lookup` stands in for `env::var`.
    fn parse(
        args: impl IntoIterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let env_value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut api_url = None;
        let mut report_dir = env_value("BLITZ_REPORT_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR), PathBuf::from);
        let mut default_goal = env_value("BLITZ_DEFAULT_GOAL").map(parse_goal).transpose()?;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => api_url = Some(require_value(&mut args, "--api-url")?),
                "--report-dir" => {
                    let value = require_value(&mut args, "--report-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidReportDir { raw: value });
                    }
                    report_dir = PathBuf::from(value);
                }
                "--default-goal" => {
                    default_goal = Some(parse_goal(require_value(&mut args, "--default-goal")?)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            api_url,
            report_dir,
            default_goal,
        }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    log_fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse(env::args().skip(1), |key| env::var(key).ok()) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    let config = ApiConfig::from_lookup(|key| match (key, &args.api_url) {
        ("BLITZ_API_URL", Some(url)) => Some(url.clone()),
        _ => env::var(key).ok(),
    })?;
    info!(
        api = %config.base_url(),
        report_dir = %args.report_dir.display(),
        "starting dashboard"
    );

    let services = AppServices::new_http(
        config,
        Clock::default_clock(),
        ReportSettings {
            output_dir: args.report_dir,
            options: ReportOptions {
                default_goal: args.default_goal,
            },
        },
    )?;
    let app: Arc<dyn UiApp> = Arc::new(services);
    let context = build_app_context(&app);

    // Some tao setups open the window always-on-top unless told otherwise.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Blitz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags() {
        let parsed = Args::parse(args(&[]), no_env).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                api_url: None,
                report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
                default_goal: None,
            })
        );
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "BLITZ_REPORT_DIR" => Some("/tmp/env".to_string()),
            "BLITZ_DEFAULT_GOAL" => Some("500".to_string()),
            _ => None,
        };
        let parsed = Args::parse(
            args(&[
                "--api-url",
                "https://blitz.example.org",
                "--default-goal",
                "40000",
            ]),
            env,
        )
        .unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                api_url: Some("https://blitz.example.org".into()),
                report_dir: PathBuf::from("/tmp/env"),
                default_goal: Some(40_000),
            })
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            Args::parse(args(&["--report-dir"]), no_env),
            Err(ArgsError::MissingValue {
                flag: "--report-dir"
            })
        );
        assert_eq!(
            Args::parse(args(&["--default-goal", "0"]), no_env),
            Err(ArgsError::InvalidGoal { raw: "0".into() })
        );
        assert_eq!(
            Args::parse(args(&["--db", "x"]), no_env),
            Err(ArgsError::UnknownArg("--db".into()))
        );
        assert_eq!(Args::parse(args(&["-h"]), no_env), Ok(Parsed::Help));
    }
}
