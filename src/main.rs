//! pitchplan - turn a one-sentence product idea into a pitch plan.
//!
//! Classifies the idea by keyword and prints a Markdown, JSON, or text
//! plan. Recent prompts are remembered so they can be replayed.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pitchplan::core::{render, write_export, Config, ExportFormat, PromptHistory, CONFIG_ENV};
use pitchplan::planner::{
    all_categories, classify, generate_pitch_plan, infer_audience, score_categories, PitchPlan,
    SAMPLE_PROMPT,
};

/// Turn a one-sentence product idea into a pitch plan
#[derive(Parser)]
#[command(name = "pitchplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default lookup
    #[arg(long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Directory for stored history
    #[arg(long, global = true, env = "PITCHPLAN_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a pitch plan from a one-sentence idea
    Generate {
        /// The product idea
        prompt: Vec<String>,

        /// Output format (markdown, json, text)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't record the prompt in history
        #[arg(long)]
        no_history: bool,
    },

    /// Generate a plan for the built-in sample idea
    Sample {
        /// Output format (markdown, json, text)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show how an idea is classified
    Classify {
        /// The product idea
        prompt: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// List the planning categories and their keywords
    Categories,

    /// Manage prompt history
    History {
        /// History operation
        #[command(subcommand)]
        operation: HistoryOperation,
    },

    /// Show configuration
    Config {
        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum HistoryOperation {
    /// List recent prompts, newest first
    List,

    /// Regenerate the plan for a history entry
    Run {
        /// Entry number as shown by `history list`
        index: usize,

        /// Output format (markdown, json, text)
        #[arg(short, long)]
        format: Option<String>,

        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove all history entries
    Clear,
}

/// Settings shared by every command.
struct Context {
    config: Config,
    data_dir: Option<PathBuf>,
}

impl Context {
    fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from_file(path)?,
            None => Config::load()?,
        };
        let data_dir = data_dir.or_else(Config::data_dir);
        Ok(Self { config, data_dir })
    }

    fn history(&self) -> Result<PromptHistory> {
        let dir = self
            .data_dir
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(PromptHistory::in_dir(dir, self.config.general.max_history))
    }

    fn format(&self, name: Option<&str>) -> Result<ExportFormat> {
        match name {
            Some(name) => ExportFormat::from_name(name).ok_or_else(|| {
                anyhow::anyhow!("Unknown format: {name}. Supported: markdown, json, text")
            }),
            None => Ok(self.config.output.format),
        }
    }

    /// Remember a prompt. History problems never fail the command.
    fn remember(&self, prompt: &str) {
        let result = self.history().and_then(|mut history| {
            history.record(prompt);
            history.save()
        });
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to update history");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    let ctx = Context::load(cli.config.as_deref(), cli.data_dir)?;

    // Handle commands
    match cli.command {
        None => {
            Cli::command().print_help()?;
        }
        Some(Commands::Generate { prompt, format, output, no_history }) => {
            cmd_generate(&ctx, &prompt.join(" "), format.as_deref(), output.as_deref(), no_history)?;
        }
        Some(Commands::Sample { format }) => {
            let plan = generate_pitch_plan(SAMPLE_PROMPT)?;
            emit(&ctx, &plan, ctx.format(format.as_deref())?, None)?;
        }
        Some(Commands::Classify { prompt, format }) => {
            cmd_classify(&prompt.join(" "), &format)?;
        }
        Some(Commands::Categories) => {
            cmd_categories();
        }
        Some(Commands::History { operation }) => {
            cmd_history(&ctx, operation)?;
        }
        Some(Commands::Config { path }) => {
            cmd_config(&ctx, path)?;
        }
        Some(Commands::Completions { shell }) => {
            cmd_completions(shell);
        }
    }

    Ok(())
}

/// Generate a plan and print or save it.
fn cmd_generate(
    ctx: &Context,
    prompt: &str,
    format: Option<&str>,
    output: Option<&Path>,
    no_history: bool,
) -> Result<()> {
    let format = ctx.format(format)?;
    let plan = generate_pitch_plan(prompt)?;

    emit(ctx, &plan, format, output)?;

    if ctx.config.general.record_history && !no_history {
        ctx.remember(&plan.original_prompt);
    }

    Ok(())
}

/// Render a plan to stdout or a file.
fn emit(ctx: &Context, plan: &PitchPlan, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let rendered = render(plan, format, ctx.config.output.pretty_json)?;

    match output {
        Some(path) => {
            // A directory gets the format's default file name
            let path = if path.is_dir() {
                path.join(format.default_file_name())
            } else {
                path.to_path_buf()
            };
            write_export(&path, &rendered)?;
            println!("Saved {} plan to {}", format, path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Explain how a prompt is classified.
fn cmd_classify(prompt: &str, format: &str) -> Result<()> {
    let scores = score_categories(prompt);
    let category = classify(prompt);
    let audience = infer_audience(prompt);

    match format {
        "json" => {
            let report = serde_json::json!({
                "scores": scores,
                "category": category.name,
                "audience": audience,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "text" => {
            println!("Scores:");
            for score in &scores {
                if score.matched.is_empty() {
                    println!("  {:<16} {}", score.name, score.score);
                } else {
                    println!("  {:<16} {}  ({})", score.name, score.score, score.matched.join(", "));
                }
            }
            println!("Category: {}", category.name);
            println!("Audience: {audience}");
        }
        _ => anyhow::bail!("Unknown format: {format}. Supported: text, json"),
    }

    Ok(())
}

/// List every category.
fn cmd_categories() {
    for rule in all_categories() {
        println!("{}", rule.name);
        if rule.is_fallback() {
            println!("  keywords: (used when nothing else matches)");
        } else {
            println!("  keywords: {}", rule.keywords.join(", "));
        }
        println!("  stack:    {}", rule.stack.join(", "));
    }
}

/// Handle history commands.
fn cmd_history(ctx: &Context, operation: HistoryOperation) -> Result<()> {
    let mut history = ctx.history()?;
    tracing::debug!(path = %history.path().display(), "Using history file");

    match operation {
        HistoryOperation::List => {
            if history.is_empty() {
                println!("No history yet.");
                return Ok(());
            }
            for (i, entry) in history.entries().iter().enumerate() {
                println!("{:>2}. {} ({})", i + 1, entry.short_prompt(), entry.created_display());
            }
        }
        HistoryOperation::Run { index, format, output } => {
            let prompt = index
                .checked_sub(1)
                .and_then(|i| history.get(i))
                .map(|entry| entry.prompt.clone())
                .ok_or_else(|| anyhow::anyhow!("No history entry #{index}"))?;

            cmd_generate(ctx, &prompt, format.as_deref(), output.as_deref(), false)?;
        }
        HistoryOperation::Clear => {
            let count = history.len();
            history.clear();
            history.save()?;
            println!("Cleared {count} history entries");
        }
    }

    Ok(())
}

/// Show configuration.
fn cmd_config(ctx: &Context, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(path) = Config::global_config_path() {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let toml = toml::to_string_pretty(&ctx.config)?;
    println!("{toml}");

    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "pitchplan", &mut io::stdout());
}
