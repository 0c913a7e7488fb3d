use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use stop_name_codec::{count_at_markers, describe, ui_values, Codec, MULTILINE_AT_THRESHOLD};

#[derive(Parser)]
#[command(name = "stop-name")]
#[command(about = "Encode and decode display flags in bus stop names", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject flag combinations that have no encoding instead of dropping them
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the flags carried by an encoded name
    Decode {
        name: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build an encoded name from a base name and flags
    Encode {
        base_name: String,

        #[command(flatten)]
        flags: FlagArgs,

        /// Mark the English text as multiline regardless of markers
        #[arg(long, conflicts_with = "eng_display")]
        multiline: bool,
    },
    /// Replace the flags of an encoded name, keeping its base name
    Edit {
        current_name: String,

        #[command(flatten)]
        flags: FlagArgs,
    },
    /// Print the editor field values for an encoded name as JSON
    Ui { name: String },
}

#[derive(Args)]
struct FlagArgs {
    /// Advance pages automatically
    #[arg(long)]
    autoskip: bool,

    /// 6-wide and 8-wide signs use different page counts
    #[arg(long)]
    split: bool,

    /// Chinese page count (the 8-wide count when split)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    pages: u8,

    /// English display text; more than two '@' markers make it multiline
    #[arg(long, default_value = "")]
    eng_display: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let codec = if cli.strict {
        Codec::strict()
    } else {
        Codec::new()
    };
    log::debug!("codec: {codec:?}");

    match cli.command {
        Commands::Decode { name, json } => {
            let flags = codec.decode(&name);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&flags).context("failed to serialize flags")?
                );
            } else {
                println!("{}", describe(&flags));
            }
        }
        Commands::Encode {
            base_name,
            flags,
            multiline,
        } => {
            let at_count = if multiline {
                MULTILINE_AT_THRESHOLD + 1
            } else {
                count_at_markers(&flags.eng_display)
            };
            let encoded = codec
                .encode(&base_name, flags.autoskip, flags.split, flags.pages, at_count)
                .with_context(|| format!("cannot encode {base_name:?}"))?;
            println!("{encoded}");
        }
        Commands::Edit {
            current_name,
            flags,
        } => {
            let encoded = codec
                .apply_ui_edit(
                    &current_name,
                    flags.autoskip,
                    flags.split,
                    flags.pages,
                    &flags.eng_display,
                )
                .with_context(|| format!("cannot edit {current_name:?}"))?;
            println!("{encoded}");
        }
        Commands::Ui { name } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ui_values(&name))
                    .context("failed to serialize editor values")?
            );
        }
    }

    Ok(())
}
