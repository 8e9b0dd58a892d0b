use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "demogrid",
    version,
    about = "searchable demo-card grid",
    long_about = "demogrid loads a demo list, renders one card per demo and filters the grid by a search term.\n\nExamples:\n  demogrid -s ./site/demos.json\n  demogrid -s https://example.com/site/demos.json -q net\n  demogrid -s ./site/demos.json -o grid.html\n  demogrid -s ./site/demos.json --interactive\n\nTip: Use --config to persist the source and output settings."
)]
pub struct CliArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help_heading = "Output",
        help = "Increase verbosity (-v, -vv)."
    )]
    pub verbose: u8,

    #[arg(
        long = "no-color",
        help_heading = "Output",
        help = "Disable colored diagnostics."
    )]
    pub no_color: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help_heading = "Output",
        help = "Write the rendered grid to a file instead of stdout."
    )]
    pub output: Option<String>,

    #[arg(
        short = 'F',
        long = "format",
        visible_alias = "output-format",
        value_name = "FORMAT",
        help_heading = "Output",
        help = "Output format: text, json, html (default: inferred from --output, else text)."
    )]
    pub output_format: Option<String>,

    #[arg(
        short = 's',
        long = "source",
        visible_alias = "data",
        value_name = "URL|FILE",
        help_heading = "Input",
        help = "Demo list location (default: demos.json)."
    )]
    pub source: Option<String>,

    #[arg(
        short = 'q',
        long = "query",
        visible_alias = "search",
        value_name = "TERM",
        help_heading = "Input",
        help = "Search term applied after the initial render."
    )]
    pub query: Option<String>,

    #[arg(
        short = 'i',
        long = "interactive",
        help_heading = "Input",
        help = "Read search terms from stdin, one per line, re-rendering after each."
    )]
    pub interactive: bool,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Config",
        help = "Path to config file (defaults to ~/.demogrid/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        long = "init-config",
        help_heading = "Config",
        help = "Write a commented default config file and exit."
    )]
    pub init_config: bool,

    #[arg(
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "HTTP",
        help = "Request timeout when the source is a URL."
    )]
    pub timeout: Option<u64>,

    #[arg(
        long = "user-agent",
        value_name = "UA",
        help_heading = "HTTP",
        help = "User-Agent header sent when fetching the demo list."
    )]
    pub user_agent: Option<String>,
}
