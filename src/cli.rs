use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use experience_kit::config::Config;
use experience_kit::error::{ExperienceError, Result};
use experience_kit::experience::{Experience, load_experience};
use experience_kit::form::ExperienceData;
use experience_kit::traits::{TraitRegistry, group_indices};
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Parser)]
#[command(name = "experience", about = "Inspect experience documents")]
pub struct Cli {
    /// YAML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show steps, presentation groups and form items
    Inspect(InspectArgs),
    /// Print the form state of one step
    Form(FormArgs),
    /// Print the JSON schema of experience documents
    Schema,
}

#[derive(Debug, Args, Clone)]
struct InspectArgs {
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

#[derive(Debug, Args, Clone)]
struct FormArgs {
    #[arg(value_name = "FILE")]
    file: PathBuf,
    #[arg(long)]
    step: String,
    /// Answer a field before printing, as `<field id>=<value>`; repeatable
    #[arg(long = "answer", value_name = "ID=VALUE")]
    answers: Vec<String>,
    #[arg(long, value_enum, default_value_t = FormFormat::Debug)]
    format: FormFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormFormat {
    Json,
    Profile,
    Debug,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        init_tracing(&config);

        match self.command {
            Command::Inspect(args) => inspect(&args),
            Command::Form(args) => form(&args),
            Command::Schema => {
                let schema = schemars::schema_for!(Experience);
                println!("{}", serde_json::to_string_pretty(&schema)?);
                Ok(())
            }
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn inspect(args: &InspectArgs) -> Result<()> {
    let data = ExperienceData::new(load_experience(&args.file)?);
    let experience = data.model();

    let mut header = vec![
        ("id".to_string(), experience.id.clone()),
        ("name".to_string(), experience.name.clone()),
    ];
    if let Some(kind) = &experience.experience_type {
        header.push(("type".to_string(), kind.clone()));
    }
    header.push(("steps".to_string(), experience.steps.len().to_string()));
    print!("{}", render_table(&header));

    let registry = TraitRegistry::with_builtin_traits();
    for (group_index, members) in group_indices(&registry, experience).iter().enumerate() {
        println!();
        println!("group {}", group_index + 1);
        let rows: Vec<(String, String)> = members
            .iter()
            .filter_map(|index| experience.steps.get(*index))
            .map(|step| {
                let summary = match data.state(step.id.as_str()) {
                    Some(state) if !state.is_empty() => format!(
                        "{} form item(s), {}",
                        state.len(),
                        if state.is_complete() { "complete" } else { "incomplete" }
                    ),
                    _ => "no form".to_string(),
                };
                (step.id.to_string(), summary)
            })
            .collect();
        print!("{}", render_table(&rows));
    }
    Ok(())
}

fn form(args: &FormArgs) -> Result<()> {
    let mut data = ExperienceData::new(load_experience(&args.file)?);
    let state = data
        .state_mut(&args.step)
        .ok_or_else(|| ExperienceError::UnknownStep(args.step.clone()))?;

    for answer in &args.answers {
        let (id, value) = answer
            .split_once('=')
            .ok_or_else(|| ExperienceError::Config(format!("answer `{answer}` is not ID=VALUE")))?;
        if !state.set_value(id, value) {
            tracing::warn!(field_id = id, "no form field with this id");
        }
    }

    match args.format {
        FormFormat::Json => println!("{}", serde_json::to_string_pretty(&*state)?),
        FormFormat::Profile => println!(
            "{}",
            serde_json::to_string_pretty(&state.formatted_as_profile_update())?
        ),
        FormFormat::Debug => {
            print!("{}", render_table(&state.formatted_as_debug_data()));
            println!(
                "complete: {}",
                if state.is_complete() { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}

/// Two-column table with the first column padded to its widest cell.
fn render_table(rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in rows {
        let padding = width - UnicodeWidthStr::width(label.as_str());
        out.push_str(label);
        out.push_str(&" ".repeat(padding));
        out.push_str("  ");
        out.push_str(value);
        out.push('\n');
    }
    out
}
