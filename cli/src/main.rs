//! sprintdoc CLI - sprint documentation generator

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use sprintdoc::{
    build_default_report, export, inspect_file, JsonFormat, OutputFormat, RenderOptions,
    ReportOptions, TableStyle, DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(name = "sprintdoc")]
#[command(version)]
#[command(about = "Generate the Adbeam sprint documentation as a Word document", long_about = None)]
struct Cli {
    /// Output .docx file
    #[arg(value_name = "OUTPUT", env = "SPRINTDOC_OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the report (default command)
    Generate {
        /// Output file
        #[arg(short, long, value_name = "FILE", env = "SPRINTDOC_OUTPUT")]
        output: Option<PathBuf>,

        /// Output format (inferred from the file extension if omitted)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Document date as YYYY-MM-DD (today if omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Preview the report as Markdown
    #[command(alias = "md")]
    Markdown {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        /// Document date as YYYY-MM-DD (today if omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Preview the report as plain text
    Text {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document date as YYYY-MM-DD (today if omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Dump the report model as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Document date as YYYY-MM-DD (today if omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Summarize an existing .docx file
    Info {
        /// Input .docx file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Args, Default)]
struct StyleArgs {
    /// Default font family
    #[arg(long, value_name = "NAME")]
    font: Option<String>,

    /// Default font size in points
    #[arg(long, value_name = "POINTS")]
    font_size: Option<f32>,

    /// Style of the info grid and feature tables
    #[arg(long, value_enum)]
    table_style: Option<TableStyleArg>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TableStyleArg {
    /// Plain single-line grid
    Grid,
    /// Light Grid Accent 1
    LightGrid,
    /// Medium Grid 1 Accent 1
    MediumGrid,
}

impl From<TableStyleArg> for TableStyle {
    fn from(style: TableStyleArg) -> Self {
        match style {
            TableStyleArg::Grid => TableStyle::Grid,
            TableStyleArg::LightGrid => TableStyle::LightGridAccent1,
            TableStyleArg::MediumGrid => TableStyle::MediumGrid1Accent1,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Word document
    Docx,
    /// Markdown preview
    Markdown,
    /// Plain text preview
    Text,
    /// JSON document model
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Docx => OutputFormat::Docx,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            output,
            format,
            date,
            style,
        }) => cmd_generate(output.as_deref(), format, date.as_deref(), &style),
        Some(Commands::Markdown {
            output,
            frontmatter,
            max_heading,
            date,
        }) => cmd_markdown(output.as_deref(), frontmatter, max_heading, date.as_deref()),
        Some(Commands::Text { output, date }) => cmd_text(output.as_deref(), date.as_deref()),
        Some(Commands::Json {
            output,
            compact,
            date,
        }) => cmd_json(output.as_deref(), compact, date.as_deref()),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(cli.output.as_deref(), None, None, &StyleArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn report_options(date: Option<&str>) -> Result<ReportOptions, Box<dyn std::error::Error>> {
    let options = ReportOptions::new();
    match date {
        Some(date) => Ok(options.with_date_str(date)?),
        None => Ok(options),
    }
}

fn styled_options(
    date: Option<&str>,
    style: &StyleArgs,
) -> Result<ReportOptions, Box<dyn std::error::Error>> {
    let mut options = report_options(date)?;

    if style.font.is_some() || style.font_size.is_some() {
        let name = style.font.clone().unwrap_or_else(|| options.style.font_name.clone());
        let size = style.font_size.unwrap_or(options.style.font_size);
        if !size.is_finite() || size <= 0.0 {
            return Err(format!("invalid font size: {}", size).into());
        }
        options = options.with_font(name, size);
    }
    if let Some(table_style) = style.table_style {
        options = options.with_table_style(table_style.into());
    }

    Ok(options)
}

fn cmd_generate(
    output: Option<&Path>,
    format: Option<FormatArg>,
    date: Option<&str>,
    style: &StyleArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    let format = format
        .map(OutputFormat::from)
        .or_else(|| OutputFormat::from_path(&path))
        .unwrap_or_default();
    let options = styled_options(date, style)?;

    let pb = ProgressBar::new(3);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Building report...");
    let doc = build_default_report(&options)?;
    pb.inc(1);

    pb.set_message(format!("Writing {}...", format));
    export(&doc, format, &path)?;
    pb.inc(1);

    pb.set_message("Verifying...");
    if format == OutputFormat::Docx {
        let summary = inspect_file(&path)?;
        log::debug!(
            "Verified {} tables and {} page breaks",
            summary.tables.len(),
            summary.page_breaks
        );
    }
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{}",
        "Sprint documentation generated successfully!".green().bold()
    );
    println!("File saved as: {}", path.display());

    Ok(())
}

fn emit(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_markdown(
    output: Option<&Path>,
    frontmatter: bool,
    max_heading: u8,
    date: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_default_report(&report_options(date)?)?;

    let render_options = RenderOptions::new()
        .with_frontmatter(frontmatter)
        .with_max_heading(max_heading);

    let markdown = sprintdoc::render::to_markdown(&doc, &render_options)?;
    emit(&markdown, output)
}

fn cmd_text(output: Option<&Path>, date: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_default_report(&report_options(date)?)?;
    let text = sprintdoc::render::to_text(&doc, &RenderOptions::new())?;
    emit(&text, output)
}

fn cmd_json(
    output: Option<&Path>,
    compact: bool,
    date: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = build_default_report(&report_options(date)?)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = sprintdoc::render::to_json(&doc, format)?;
    emit(&json, output)
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = inspect_file(input)?;

    if json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref content_type) = summary.main_content_type {
        println!("{}: {}", "Content type".bold(), content_type);
    }
    if let Some(ref title) = summary.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Parts".bold(), summary.parts.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let words = summary.text.split_whitespace().count();

    println!("{}: {}", "Paragraphs".bold(), summary.paragraphs);
    println!("{}: {}", "Headings".bold(), summary.headings);
    println!("{}: {}", "Page breaks".bold(), summary.page_breaks);
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Tables".bold(), summary.tables.len());

    let last = summary.tables.len().saturating_sub(1);
    for (i, table) in summary.tables.iter().enumerate() {
        let branch = if i == last { "└─" } else { "├─" };
        println!(
            "  {} {} rows x {} columns ({})",
            branch.dimmed(),
            table.rows,
            table.columns,
            table.style.as_deref().unwrap_or("no style")
        );
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "sprintdoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Sprint documentation generator");
    println!();
    println!("Default output: {}", DEFAULT_OUTPUT.dimmed());
    println!("License: MIT");
}
