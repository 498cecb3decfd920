// sortty: Sorting Algorithm Visualiser for the Terminal

use clap::Parser;

use sortty::config::{Args, Config};
use sortty::error::AppError;
use sortty::logging;
use sortty::ui::events::{EventPump, EVENT_CHANNEL_CAPACITY};
use sortty::ui::terminal::{install_panic_hook, Tui};
use sortty::ui::App;

fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = logging::init(config.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    install_panic_hook();

    // Set up terminal before any application state exists
    let mut tui = match Tui::init() {
        Ok(tui) => tui,
        Err(e) => {
            tracing::error!(target: "sortty::startup", error = %e, "terminal init failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let res = run(&mut tui, &config);

    // Restore terminal before reporting anything
    let restored = tui.restore();
    drop(tui);

    if let Err(err) = res.and(restored) {
        tracing::error!(target: "sortty::app", error = %err, "exiting with error");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(tui: &mut Tui, config: &Config) -> Result<(), AppError> {
    let mut pump = EventPump::new(EVENT_CHANNEL_CAPACITY)
        .with_input_reader()?
        .with_ticker(config.tick_period())?
        .seal();

    let mut app = App::new(config);
    let res = match pump.receiver() {
        Some(events) => app.run(tui.terminal_mut(), events),
        None => Ok(()),
    };

    // Producers must be joined before the terminal is torn down
    pump.shutdown();
    res
}
