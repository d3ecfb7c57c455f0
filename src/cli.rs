//! CLI module - command-line interface definitions and the run loop

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::render::Projection;
use crate::core::segment::compile_pattern;
use crate::scan::report::FailureLog;
use crate::scan::walk::{scan_path, ScanConfig};

/// sift - search files for a regex and project the matches.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(
    author,
    version,
    about,
    long_about = r#"sift scans a file or directory for matches of a regular expression and
renders the result through exactly one projector:

- highlight (default): print every line with matches colorized
- substitute (-s / --delete): replace or strip matched text
- table (-f): extract matched fields into an aligned table

In delimiter mode (-d) the pattern marks field boundaries instead of search
hits, so the text between delimiters becomes the selectable fields.

Examples:
    sift "TODO|FIXME" src -r
    sift "error" app.log -s "ERR"
    sift "," data.csv -d -f 1-3 --separator " | "
"#
)]
pub struct Cli {
    /// Regular expression to search for (field delimiter with -d).
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// File or directory to scan.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Case-insensitive matching.
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Recurse into subdirectories.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Include hidden files and directories (dotfiles).
    #[arg(
        long,
        long_help = "Include hidden files and directories (dotfiles).\n\n\
By default, hidden entries are skipped."
    )]
    pub hidden: bool,

    /// Treat PATTERN as a field delimiter instead of a search target.
    #[arg(
        short = 'd',
        long,
        long_help = "Delimiter mode: pattern occurrences mark field boundaries and the\n\
text between them becomes the matched fields. Combine with -f to project\n\
delimiter-separated data as a table."
    )]
    pub delimiter: bool,

    /// Delete matched text entirely.
    #[arg(
        long,
        long_help = "Delete matched text from the output. Takes priority over every other\n\
projector selection."
    )]
    pub delete: bool,

    /// Replace matched text with LITERAL.
    #[arg(short = 's', long, value_name = "LITERAL")]
    pub substitute: Option<String>,

    /// Project selected fields as an aligned table.
    #[arg(
        short = 'f',
        long,
        value_name = "FIELDS",
        long_help = "Project the matched fields of every line as an aligned table.\n\n\
FIELDS is a comma-separated list of 1-based positions and inclusive ranges;\n\
either end of a range may be omitted: \"1-3,5,7-\"."
    )]
    pub fields: Option<String>,

    /// Column separator for table output.
    #[arg(long, default_value = " ", value_name = "SEP")]
    pub separator: String,

    /// Extra file extensions to scan (repeatable).
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Suppress the end-of-run failure report.
    #[arg(short, long)]
    pub quiet: bool,

    /// Report every individual failure instead of a summary.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let pattern = compile_pattern(&cli.pattern, cli.ignore_case)
        .with_context(|| format!("invalid pattern {:?}", cli.pattern))?;

    let projection = Projection::select(
        cli.delete,
        cli.substitute.clone(),
        cli.fields.clone(),
        cli.separator.clone(),
    );

    let config = ScanConfig {
        recursive: cli.recursive,
        include_hidden: cli.hidden,
        extra_extensions: cli.extensions.clone(),
    };

    let show_names = cli.path.is_dir();
    let mut log = FailureLog::new();
    let results = scan_path(&config, &pattern, cli.delimiter, &cli.path, &mut log);

    for result in &results {
        let rendered = projection
            .render(result)
            .with_context(|| format!("cannot project {}", result.name.display()))?;
        if show_names {
            println!("{}", result.name.display().to_string().cyan().bold());
        }
        println!("{rendered}");
    }

    for line in log.report(cli.quiet, cli.verbose) {
        eprintln!("{line}");
    }

    Ok(())
}
