use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(timeout) = args.timeout {
        if timeout == 0 {
            return Err("invalid timeout, expected positive integer".to_string());
        }
    }
    if let Some(raw) = args.output_format.as_deref() {
        OutputFormat::parse(raw)
            .ok_or_else(|| format!("invalid --format '{raw}', expected text, json or html"))?;
    }
    if let Some(source) = args.source.as_deref() {
        if source.trim().is_empty() {
            return Err("invalid --source, expected a URL or file path".to_string());
        }
    }
    Ok(())
}
