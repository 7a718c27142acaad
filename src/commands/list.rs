use crate::libs::config::Config;
use crate::libs::dashboard::Dashboard;
use crate::libs::task::TaskFilter;
use crate::libs::view::TerminalSurface;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,
    /// Latest due date first
    #[arg(long)]
    desc: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let store = super::open_store(&config)?;

    let mut view = config.view_state();
    if let Some(filter) = args.filter {
        view.filter = filter;
    }
    if args.desc {
        view.sort_ascending = false;
    }

    // Building the dashboard draws the first frame.
    Dashboard::with_view(store, TerminalSurface::new(config.date_format()), view);

    Ok(())
}
