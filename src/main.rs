//! prompt-architect is a CLI tool that turns a plain request into a structured,
//! ready-to-use LLM prompt.
//!
//! The tool has three commands:
//! 1. `generate` - Sends a request to the model and prints the structured prompt
//! 2. `instruction` - Prints the system instruction used for a mode
//! 3. `modes` - Lists the available prompt modes

use std::fs::OpenOptions;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{LevelFilter, debug, info, warn};

use prompt_architect::{
    LlmTransport, PromptMode,
    config::{read_api_key, strip_line_ending},
    constants::DEFAULT_MODEL_URL,
    generate::generate_structured_prompt,
    instruction::{mode_guidance, system_instruction},
};

/// A CLI tool to turn a plain request into a structured LLM prompt
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The command to execute
    #[command(subcommand)]
    command: Command,

    #[arg(long, short, action = clap::ArgAction::Count, help = "Output v(v...)erbosity: error (0), warn (1), info (2), debug (3), trace (4)", global = true, default_value_t = 2)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a request into a structured prompt using an LLM model
    Generate {
        /// The request to convert; read from stdin when omitted or "-"
        text: Option<String>,
        /// Prompt mode: "structured" (default), "creative" or "coding"
        #[arg(long, short, default_value = "structured")]
        mode: PromptMode,
        /// URL of the LLM model to use, as backend://model
        #[arg(long, default_value = DEFAULT_MODEL_URL)]
        model: String,
        /// Path to a file to write the result to instead of stdout
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Print the system instruction sent for a mode
    Instruction {
        /// Prompt mode: "structured" (default), "creative" or "coding"
        #[arg(long, short, default_value = "structured")]
        mode: PromptMode,
    },
    /// List the available prompt modes
    Modes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Warn,
            2 => LevelFilter::Info,
            3 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    match cli.command {
        Command::Generate {
            text,
            mode,
            model,
            output,
        } => handle_generate_command(text, mode, model, output).await,
        Command::Instruction { mode } => {
            println!("{}", system_instruction(mode));
            Ok(())
        }
        Command::Modes => {
            for mode in PromptMode::ALL {
                let guidance = mode_guidance(mode)
                    .and_then(|guidance| guidance.lines().next())
                    .unwrap_or("Base instruction only");
                println!("{mode}: {guidance}");
            }
            Ok(())
        }
    }
}

async fn handle_generate_command(
    text: Option<String>,
    mode: PromptMode,
    model: String,
    output: Option<String>,
) -> Result<()> {
    let user_input = match text.as_deref() {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read request from stdin")?;
            strip_line_ending(&buffer).to_owned()
        }
        Some(text) => text.to_owned(),
    };

    if user_input.trim().is_empty() {
        warn!("Request is empty, nothing to generate.");
        return Ok(());
    }
    debug!("Request has {} characters", user_input.chars().count());

    let transport = LlmTransport::from_model_url(&model, read_api_key())?;
    info!("Using model {}", transport.model());

    let result = generate_structured_prompt(&transport, &user_input, mode).await;

    match output {
        Some(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(&path)
                .context(format!("Failed to open output file: {path}"))?;
            writeln!(file, "{result}").context(format!("Failed to write output file: {path}"))?;
            info!("Wrote prompt to {path}");
        }
        None => println!("{result}"),
    }

    Ok(())
}
