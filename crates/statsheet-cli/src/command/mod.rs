use clap::{Parser, Subcommand};

use self::{calc::CalcArg, tui::TuiArg};

mod calc;
mod tui;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Calculate statistics and print a report
    Calc(#[clap(flatten)] CalcArg),
    /// Interactive statistics calculator
    Tui(#[clap(flatten)] TuiArg),
}

impl CommandArgs {
    /// Whether log events may be written to stderr.
    ///
    /// The interactive calculator draws on the terminal, so it runs without logging.
    pub fn logs_to_stderr(&self) -> bool {
        matches!(self.mode, Some(Mode::Calc(_)))
    }
}

pub fn run(args: CommandArgs) -> anyhow::Result<()> {
    match args.mode.unwrap_or(Mode::Tui(TuiArg::default())) {
        Mode::Calc(arg) => calc::run(&arg)?,
        Mode::Tui(arg) => tui::run(&arg)?,
    }
    Ok(())
}
