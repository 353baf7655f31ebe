mod app;
mod domain;
mod store;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use app::App;
use domain::task::Task;
use store::TaskStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "taskdeck — session task list TUI", long_about = None)]
struct Args {
    /// Tick interval of render loop in milliseconds
    #[arg(long, default_value_t = 120)]
    tick_ms: u64,

    /// Start with demo tasks
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let store = if args.demo {
        TaskStore::with_seed(seed_tasks())
    } else {
        TaskStore::new()
    };

    let app = App::new(store);
    ui::run(app, Duration::from_millis(args.tick_ms))
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("Buy milk"),
        Task::new("Write weekly report"),
        Task::new("Reply to code review"),
    ]
}
