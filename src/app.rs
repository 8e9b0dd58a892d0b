use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::bootstrap::{self, DemoPage, Page, PageState};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::grid::{MemoryContainer, GRID_ID};
use crate::loader::{DataSource, DEFAULT_RESOURCE};
use crate::logging::{self, format_kv_line};
use crate::output::{self, OutputFormat, Snapshot};

const DEFAULT_USER_AGENT: &str = concat!("demogrid/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
struct RunConfig {
    source: DataSource,
    query: Option<String>,
    interactive: bool,
    timeout: u64,
    user_agent: String,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);

    let source_raw = args
        .source
        .or(cfg.source)
        .unwrap_or_else(|| DEFAULT_RESOURCE.to_string());
    let source = match DataSource::parse(&source_raw) {
        DataSource::FilePath(path) => DataSource::FilePath(config::expand_tilde_string(&path)),
        other => other,
    };

    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }
    let user_agent = args
        .user_agent
        .or(cfg.user_agent)
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    let query = args.query.or(cfg.query);

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    if args.interactive && output.is_some() {
        return Err("use either --interactive or an output file, not both".to_string());
    }
    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text, json or html"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        source,
        query,
        interactive: args.interactive,
        timeout,
        user_agent,
        output,
        output_format,
        no_color,
        verbose: args.verbose,
    })
}

fn snapshot<'a>(page: &'a DemoPage<MemoryContainer>) -> Snapshot<'a> {
    Snapshot {
        grid: page.grid(),
        records: page.records(),
        term: page.search().value(),
    }
}

async fn write_stdout(rendered: &[u8]) -> Result<(), String> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(rendered)
        .await
        .map_err(|e| format!("failed to write to stdout: {e}"))?;
    stdout
        .flush()
        .await
        .map_err(|e| format!("failed to flush stdout: {e}"))
}

async fn write_output_file(path: &str, rendered: &[u8]) -> Result<(), String> {
    let mut outfile = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| format!("failed to open output file: {e}"))?;
    outfile
        .write_all(rendered)
        .await
        .map_err(|_| "failed to write output file".to_string())
}

async fn emit(run: &RunConfig, page: &DemoPage<MemoryContainer>) -> Result<(), String> {
    let rendered = output::render(run.output_format, &snapshot(page));
    match run.output.as_deref() {
        Some(path) => {
            write_output_file(path, &rendered).await?;
            logging::info(&format_kv_line("Output", path));
            Ok(())
        }
        None => write_stdout(&rendered).await,
    }
}

/// Next line from `reader` without its line ending. Bytes that are not
/// valid UTF-8 are replaced rather than ending the session.
async fn read_input_line<R>(reader: &mut R) -> Result<Option<String>, String>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let read = reader
        .read_until(b'\n', &mut buf)
        .await
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    if read == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Every stdin line is one search-input event; the grid is re-rendered
/// after each. Returns when stdin closes.
async fn interactive_loop(
    run: &RunConfig,
    page: &mut DemoPage<MemoryContainer>,
) -> Result<(), String> {
    let mut stdin = BufReader::new(tokio::io::stdin());
    while let Some(line) = read_input_line(&mut stdin).await? {
        page.on_input(&line);
        emit(run, page).await?;
    }
    Ok(())
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    logging::set_color(!run.no_color);
    logging::set_verbosity(run.verbose);

    logging::info(&format_kv_line("Source", &run.source.describe()));
    logging::debug(&format_kv_line("Timeout", &format!("{}s", run.timeout)));

    let client = reqwest::Client::builder()
        .user_agent(run.user_agent.as_str())
        .timeout(Duration::from_secs(run.timeout))
        .build()
        .map_err(|e| format!("failed to build http client: {e}"))?;

    let page = Page::new(MemoryContainer::new(GRID_ID));
    let mut page = bootstrap::bootstrap(page, &client, &run.source)
        .await
        .map_err(|e| e.to_string())?;

    if let Some(query) = run.query.as_deref() {
        page.on_input(query);
    }
    emit(&run, &page).await?;

    if let PageState::Failed = page.state() {
        return Err(format!(
            "demo list from {} could not be loaded",
            run.source.describe()
        ));
    }

    if run.interactive {
        interactive_loop(&run, &mut page).await?;
    }

    Ok(())
}

fn resolve_config(args: &CliArgs) -> Result<ConfigFile, String> {
    match args.config.as_deref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false),
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true),
            None => Ok(ConfigFile::default()),
        },
    }
}

fn init_config(args: &CliArgs) -> Result<(), String> {
    let path = match args.config.as_deref() {
        Some(path) => config::expand_tilde(path),
        None => config::default_config_path()
            .ok_or_else(|| "could not determine home directory for config".to_string())?,
    };
    let written = config::ensure_default_config_file(&path)?;
    let status = if written { "written" } else { "already exists" };
    println!(
        "{}",
        format_kv_line("Config", &format!("{} ({status})", path.display()))
    );
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        return init_config(&args);
    }

    let cfg = resolve_config(&args)?;
    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
