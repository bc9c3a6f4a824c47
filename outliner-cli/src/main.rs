//! Outliner CLI - table-of-contents generator for HTML documents
//!
//! Reads a document, outlines the headings under `#doc` into `#outline`,
//! and writes the rewritten document (or just the outline).
//!
//! Examples:
//!   outliner page.html > page.toc.html
//!   outliner page.html --format text
//!   outliner --html '<div id="doc"><h1>Hi</h1></div><div id="outline"></div>'

use std::fs;
use std::io::{self, Read as _};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use outliner_common::warning::set_quiet;
use outliner_core::{
    ListStyle, NestingPolicy, OutlineOptions, ProcessedDocument, SearchStrategy, process_html,
    render_json, render_text,
};
use outliner_dom::NodeId;
use outliner_html::print_tree;
use owo_colors::OwoColorize;

/// What to write to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The rewritten document
    #[default]
    Html,
    /// The outline as JSON
    Json,
    /// The outline as indented text
    Text,
}

/// Outliner - build a table of contents from the headings of an HTML document
#[derive(Parser, Debug)]
#[command(name = "outliner")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Add an outline to a page
    outliner page.html -o page.toc.html

    # Print the outline as indented text
    outliner page.html --format text

    # Use other element ids and a bulleted list
    outliner page.html --source main --container toc --list ul

    # Read options from a file, overriding one of them
    outliner page.html --config outliner.json --no-title
"#)]
struct Cli {
    /// HTML file to read (stdin when neither FILE nor --html is given)
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// JSON options file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Id of the element whose headings are outlined
    #[arg(long, value_name = "ID")]
    source: Option<String>,

    /// Id of the element the outline is appended to
    #[arg(long, value_name = "ID")]
    container: Option<String>,

    /// Title placed above the outline
    #[arg(long, value_name = "TEXT", conflicts_with = "no_title")]
    title: Option<String>,

    /// Render the outline without a title
    #[arg(long)]
    no_title: bool,

    /// List element: ol or ul
    #[arg(long, value_name = "STYLE")]
    list: Option<ListStyle>,

    /// Prefix for generated heading ids
    #[arg(long, value_name = "PREFIX")]
    id_prefix: Option<String>,

    /// Heading search: children or descendants
    #[arg(long, value_name = "STRATEGY")]
    search: Option<SearchStrategy>,

    /// Nesting policy: strict or clamp
    #[arg(long, value_name = "POLICY")]
    nesting: Option<NestingPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the rewritten DOM tree to stdout
    #[arg(long)]
    tree: bool,

    /// Do not print warnings
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Options from `--config` (or the defaults) with flag overrides applied.
    fn options(&self) -> Result<OutlineOptions> {
        let mut options = match &self.config {
            Some(path) => OutlineOptions::load(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => OutlineOptions::default(),
        };
        if let Some(source) = &self.source {
            options.source_id.clone_from(source);
        }
        if let Some(container) = &self.container {
            options.container_id.clone_from(container);
        }
        if self.no_title {
            options.title = None;
        } else if let Some(title) = &self.title {
            options.title = Some(title.clone());
        }
        if let Some(list) = self.list {
            options.list_style = list;
        }
        if let Some(prefix) = &self.id_prefix {
            options.id_prefix.clone_from(prefix);
        }
        if let Some(search) = self.search {
            options.search = search;
        }
        if let Some(nesting) = self.nesting {
            options.nesting = nesting;
        }
        Ok(options)
    }

    /// The document text from `--html`, FILE or stdin.
    fn input(&self) -> Result<String> {
        if let Some(html) = &self.html {
            return Ok(html.clone());
        }
        if let Some(path) = &self.path {
            return fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()));
        }
        let mut html = String::new();
        let _ = io::stdin()
            .read_to_string(&mut html)
            .context("reading stdin")?;
        if html.trim().is_empty() {
            bail!("no input: pass a FILE, --html, or pipe a document to stdin");
        }
        Ok(html)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_quiet(cli.quiet);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.options()?;
    let html = cli.input()?;
    let processed = process_html(&html, &options).context("building outline")?;

    if cli.tree {
        println!("=== DOM Tree ===");
        print_tree(&processed.tree, NodeId::ROOT);
        println!();
    }

    let output = render(&processed, cli.format)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("writing {}", path.display()))?;
        }
        None => print!("{output}"),
    }
    Ok(())
}

fn render(processed: &ProcessedDocument, format: OutputFormat) -> Result<String> {
    let mut output = match format {
        OutputFormat::Html => processed.html.clone(),
        OutputFormat::Json => render_json(&processed.report.outline)?,
        OutputFormat::Text => render_text(&processed.report.outline),
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}
