mod command;
mod config;
mod markup;

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use log::{debug, error, info};
use ninja_ui::config::ConfigLoadError;
use ninja_ui::prelude::*;
use ninjadom::{DomError, outline};
use simplelog::{Config, WriteLogger};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{Instant, MissedTickBehavior, interval};

use command::Command;
use config::DemoConfig;
use markup::{SNACKBAR_BUTTON, demo_page};

/// How often the page clock catches up with wall-clock time.
const TICK: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to build page markup: {0}")]
    Markup(#[from] DomError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

#[tokio::main]
async fn main() {
    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match DemoConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        error!("{e}");
        eprintln!("Error: {}", e);
    }
}

fn init_logging(config: &DemoConfig) -> Result<(), DemoError> {
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.level_filter(), Config::default(), log_file)?;
    Ok(())
}

async fn run(config: DemoConfig) -> Result<(), DemoError> {
    let mut page = Page::setup(demo_page()?, config.ui)?;
    page.bind_snackbar(SNACKBAR_BUTTON, "clicked!!")?;
    info!("Demo page ready");

    println!("{}", command::HELP);
    print!("{}", outline(page.document().root()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = interval(TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last = Instant::now();

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let fired = page.advance(now - last);
                last = now;
                if fired > 0 {
                    print!("{}", outline(page.document().root()));
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(cmd)) => {
                        if let Err(e) = execute(&mut page, cmd) {
                            eprintln!("Error: {}", e);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }

    info!("Demo finished");
    Ok(())
}

fn execute(page: &mut Page, cmd: Command) -> Result<(), DemoError> {
    match cmd {
        Command::Input(event) => {
            let handled = page.dispatch(event)?;
            debug!("{handled} listener(s) ran");
        }
        Command::Show(message) => page.show(message)?,
        Command::Select { container, index } => {
            page.select_tab(&container, index)?;
        }
        Command::Wait(duration) => {
            page.advance(duration);
        }
        Command::Dump => {}
        Command::Help => {
            println!("{}", command::HELP);
            return Ok(());
        }
        Command::Quit => return Ok(()),
    }
    print!("{}", outline(page.document().root()));
    Ok(())
}
