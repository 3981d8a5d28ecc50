//! Command line front end for asker prompts.
//!
//! ```text
//! asker-demo ask "What is your name?" --default alan --required --loop
//! asker-demo select "Which language?" go Go golang --default Go
//! ```
//!
//! Set `RUST_LOG=debug` to see retries and interrupts.

use anyhow::{Context, Result};
use asker::{Options, Ui};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "asker-demo", version, about = "Ask a question on the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask for a free-text answer
    Ask {
        query: String,

        #[command(flatten)]
        common: Common,

        /// Reject an empty answer when there is no default
        #[arg(long)]
        required: bool,

        /// Do not echo the answer while it is typed
        #[arg(long)]
        mask: bool,

        /// Show the default as asterisks
        #[arg(long)]
        mask_default: bool,

        /// Minimum answer length in characters
        #[arg(long, value_name = "N")]
        min_len: Option<usize>,
    },

    /// Pick one item from a list
    Select {
        query: String,

        #[arg(required = true)]
        items: Vec<String>,

        #[command(flatten)]
        common: Common,

        /// Zero-based index of the default item
        #[arg(long, value_name = "INDEX")]
        default_index: Option<usize>,

        /// Do not number the items
        #[arg(long)]
        hide_order: bool,
    },
}

#[derive(Args, Debug)]
struct Common {
    /// Answer used for an empty line
    #[arg(long, env = "ASKER_DEFAULT")]
    default: Option<String>,

    /// Ask again after an invalid answer
    #[arg(long = "loop")]
    looping: bool,

    /// Do not mention the default in the prompt
    #[arg(long)]
    hide_default: bool,
}

impl Common {
    fn options(&self) -> Options {
        let mut opts = Options::new()
            .looping(self.looping)
            .hide_default(self.hide_default);
        if let Some(default) = &self.default {
            opts = opts.default(default.clone());
        }
        opts
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (mut ui, interrupter) = Ui::stdio_interruptible();
    ctrlc::set_handler(move || interrupter.interrupt())
        .context("failed to install Ctrl-C handler")?;

    match cli.command {
        Command::Ask {
            query,
            common,
            required,
            mask,
            mask_default,
            min_len,
        } => {
            let mut opts = common
                .options()
                .required(required)
                .mask(mask)
                .mask_default(mask_default);
            if let Some(n) = min_len {
                opts = opts.validator(move |s| {
                    if s.chars().count() >= n {
                        Ok(())
                    } else {
                        Err(format!("must be at least {} characters", n))
                    }
                });
            }
            log::debug!("asking with {:?}", opts);

            let answer = ui.ask(&query, &opts)?;
            println!("{}", answer);
        }
        Command::Select {
            query,
            items,
            common,
            default_index,
            hide_order,
        } => {
            let mut opts = common.options().hide_order(hide_order);
            if let Some(index) = default_index {
                opts = opts.default_selected(index);
            }
            log::debug!("selecting with {:?}", opts);

            let (answer, index) = ui.select(&query, &items, &opts)?;
            println!("{}\t{}", index, answer);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_select_arguments() {
        let cli = Cli::try_parse_from([
            "asker-demo",
            "select",
            "Which?",
            "go",
            "golang",
            "--default-index",
            "1",
            "--loop",
        ])
        .unwrap();

        match cli.command {
            Command::Select {
                items,
                default_index,
                common,
                ..
            } => {
                assert_eq!(items, vec!["go", "golang"]);
                assert_eq!(default_index, Some(1));
                assert!(common.looping);
                assert!(common.options().looping);
            }
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn select_requires_items() {
        assert!(Cli::try_parse_from(["asker-demo", "select", "Which?"]).is_err());
    }
}
