extern crate datepick as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use lib::calendar::{Calendar, CalendarDate};
use lib::events::Dispatcher;
use lib::ui::{render_text, App};
use nix::sys::{signal, termios};
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

fn parse_date(s: &str) -> Result<NaiveDate, lib::error::Error> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dp",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "datepick - calendar and date picker for the terminal."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        long = "today",
        help = "date to treat as today (YYYY-MM-DD)",
        parse(try_from_str = parse_date)
    )]
    pub today: Option<NaiveDate>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let today = match args.today {
        Some(date) => CalendarDate::from_datelike(&date),
        None => CalendarDate::from_datelike(&Local::now()),
    };
    log::info!("today is {}", today);

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    if args.show {
        print!("{}", render_text(&Calendar::new(today)));
        return Ok(());
    }

    const STDOUT: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(termios::tcgetattr(STDOUT)?);

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(attr) = orig_attr.lock() {
            let _ = termios::tcsetattr(STDOUT, termios::SetArg::TCSANOW, &attr);
        }

        println!("datepick ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let mut signals_to_wait = signal::SigSet::empty();
    signals_to_wait.add(signal::SIGWINCH);
    signals_to_wait.thread_block()?;

    let dispatcher = Dispatcher::new(signals_to_wait);
    let mut app = App::new(&config, today, dispatcher.event_sink().clone())?;

    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    app.run(dispatcher, term)
}
