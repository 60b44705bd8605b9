//! Command-line front end: translate pages, flip the stored preference and
//! check dictionary parity.

use std::io::{
    self,
    Write as _,
};
use std::path::{
    Path,
    PathBuf,
};
use std::process::ExitCode;
use std::sync::Arc;

use catalog_i18n::config::ConfigManager;
use catalog_i18n::dom::Document;
use catalog_i18n::ir::Catalog;
use catalog_i18n::storage::JsonFileStore;
use catalog_i18n::types::LanguageCode;
use catalog_i18n::{
    Error,
    LanguageContext,
    PageState,
    Translator,
};
use clap::{
    Parser,
    Subcommand,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Preference file used when `--store` is not given.
const DEFAULT_STORE: &str = ".catalog-i18n-preference.json";

#[derive(Debug, Parser)]
#[command(
    name = "catalog-i18n",
    version,
    about = "Arabic/English page translation for the course catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write logs to daily files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Translate an HTML page
    Apply {
        /// Input HTML file
        input: PathBuf,

        /// Language to apply (also persisted); defaults to the stored preference
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<LanguageCode>,

        /// Output file; defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preference store file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,

        /// Project root holding the config file and locale dictionaries
        #[arg(long, default_value = ".")]
        project: PathBuf,
    },

    /// Flip the stored language preference and print it
    Toggle {
        /// Preference store file
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,

        /// Project root holding the config file
        #[arg(long, default_value = ".")]
        project: PathBuf,
    },

    /// Report missing keys and reverse-index collisions
    Check {
        /// Project root holding the config file and locale dictionaries
        #[arg(long, default_value = ".")]
        project: PathBuf,
    },
}

/// Parses `--lang`.
fn parse_language(value: &str) -> Result<LanguageCode, String> {
    LanguageCode::from_code(value)
        .ok_or_else(|| format!("unsupported language '{value}' (expected ar or en)"))
}

/// Installs the global subscriber. The guard must live until exit when logging to files.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Some(dir) = log_dir {
        let appender = tracing_appender::rolling::daily(dir, "catalog-i18n.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
        None
    }
}

/// Loads the project config and dictionaries.
fn load_project(project: &Path) -> Result<(ConfigManager, Catalog), Error> {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(project.to_path_buf()))?;
    let catalog = manager.load_catalog()?;
    tracing::debug!(
        ar = catalog.dictionary(LanguageCode::Ar).len(),
        en = catalog.dictionary(LanguageCode::En).len(),
        "Catalog ready"
    );
    Ok((manager, catalog))
}

/// Language context backed by the preference file.
fn context_for(manager: &ConfigManager, catalog: Catalog, store: &Path) -> LanguageContext {
    let translator = Translator::new(Arc::new(catalog), Arc::new(manager.get_settings().clone()));
    LanguageContext::new(translator, Box::new(JsonFileStore::new(store)))
}

/// `apply` command.
async fn apply(
    input: &Path,
    lang: Option<LanguageCode>,
    output: Option<&Path>,
    store: &Path,
    project: &Path,
) -> Result<ExitCode, Error> {
    let (manager, catalog) = load_project(project)?;
    let markup = tokio::fs::read_to_string(input).await.map_err(Error::io(input))?;

    let context = context_for(&manager, catalog, store);
    let state = PageState::new(Document::parse_html(&markup), context);
    let (mut document, mut context) = state.lock_all().await;
    let language = match lang {
        Some(language) => {
            context.set_language(&mut document, language);
            language
        }
        None => context.initialize(&mut document),
    };
    let html = document.to_html();
    drop(context);
    drop(document);

    match output {
        Some(path) => tokio::fs::write(path, html).await.map_err(Error::io(path))?,
        None => io::stdout().lock().write_all(html.as_bytes()).map_err(Error::io("<stdout>"))?,
    }
    tracing::info!(%language, input = %input.display(), "Page translated");
    Ok(ExitCode::SUCCESS)
}

/// `toggle` command.
fn toggle(store: &Path, project: &Path) -> Result<ExitCode, Error> {
    let mut manager = ConfigManager::new();
    manager.load_settings(Some(project.to_path_buf()))?;
    let mut context = context_for(&manager, Catalog::builtin(), store);

    let language = context.toggle(&mut Document::new());
    writeln!(io::stdout(), "{language}").map_err(Error::io("<stdout>"))?;
    Ok(ExitCode::SUCCESS)
}

/// Writes the parity and collision report.
fn write_check_report(out: &mut impl io::Write, catalog: &Catalog) -> io::Result<bool> {
    let missing = catalog.missing_keys();
    for entry in &missing {
        writeln!(out, "missing in {}: {}", entry.language, entry.keys.join(", "))?;
    }
    for language in LanguageCode::ALL {
        for collision in catalog.reverse_index(language).collisions() {
            writeln!(
                out,
                "collision in {language}: '{}' maps to '{}' (shadows '{}')",
                collision.phrase, collision.winner, collision.shadowed
            )?;
        }
    }
    if missing.is_empty() {
        writeln!(out, "ok: both dictionaries define the same keys")?;
    }
    Ok(missing.is_empty())
}

/// `check` command.
fn check(project: &Path) -> Result<ExitCode, Error> {
    let (_, catalog) = load_project(project)?;
    let complete =
        write_check_report(&mut io::stdout().lock(), &catalog).map_err(Error::io("<stdout>"))?;
    if !complete {
        tracing::warn!("Dictionaries are missing keys");
    }
    Ok(if complete { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Dispatches a subcommand.
async fn run(command: Commands) -> Result<ExitCode, Error> {
    match command {
        Commands::Apply { input, lang, output, store, project } => {
            apply(&input, lang, output.as_deref(), &store, &project).await
        }
        Commands::Toggle { store, project } => toggle(&store, &project),
        Commands::Check { project } => check(&project),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    match run(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
