//! Interactive statistics calculator
//!
//! Data is typed into an input line; every calculation replaces the summary
//! and both charts on screen.

use std::time::Instant;

use self::app::App;

mod app;
mod notification;
mod widgets;

const SAMPLE_DATA: &str = "12, 15, 18, 20, 22, 25, 28, 30, 32, 35, 38, 40, 42, 45, 48";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TuiArg {
    /// Initial data, calculated on start
    #[arg(long, default_value = SAMPLE_DATA)]
    data: String,
}

impl Default for TuiArg {
    fn default() -> Self {
        Self {
            data: SAMPLE_DATA.to_owned(),
        }
    }
}

pub(crate) fn run(arg: &TuiArg) -> anyhow::Result<()> {
    let mut app = App::new(arg.data.clone());
    app.calculate(Instant::now());

    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();
    app_result
}
