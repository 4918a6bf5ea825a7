// Climb Calendar
// Command line front-end: month grid, logged sessions and the route list

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};

use climb_calendar::models::route::Grade;
use climb_calendar::models::settings::Settings;
use climb_calendar::services::calendar::screen::{CalendarScreen, SystemClock};
use climb_calendar::services::route::{RouteCatalog, RouteFilter};
use climb_calendar::services::session::SessionStore;
use climb_calendar::services::settings::{load_settings_or_default, resolve_config_path};
use climb_calendar::ui_text::{DayView, MonthView, RouteList};
use climb_calendar::utils::date::{parse_day_key, parse_month};

#[derive(Parser)]
#[command(name = "climb-calendar")]
#[command(about = "Climbing session calendar and gym route list")]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid and the selected day's session
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long, value_parser = parse_month_arg)]
        month: Option<NaiveDate>,

        /// Day to select (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_day_key)]
        select: Option<NaiveDate>,
    },
    /// Print the session logged on a day
    Day {
        /// Day to look up (YYYY-MM-DD), defaults to today
        #[arg(short, long, value_parser = parse_day_key)]
        date: Option<NaiveDate>,
    },
    /// List gym routes
    Routes {
        /// Easiest grade to include, e.g. V2
        #[arg(long)]
        grade_min: Option<Grade>,

        /// Hardest grade to include, e.g. V5
        #[arg(long)]
        grade_max: Option<Grade>,

        /// Style tag, e.g. Crimp
        #[arg(long)]
        style: Option<String>,

        /// Text to find in route or area names
        #[arg(long)]
        search: Option<String>,
    },
}

fn parse_month_arg(value: &str) -> Result<NaiveDate, String> {
    parse_month(value).ok_or_else(|| format!("'{}' is not a YYYY-MM month", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Settings pick the default log level; report their source once logging is up
    let settings = load_settings_or_default(cli.config.as_deref())?;
    init_logging(&settings);

    log::info!("Starting Climb Calendar");
    log_settings_source(cli.config.as_deref());

    match cli.command {
        Commands::Month { month, select } => {
            let mut screen = CalendarScreen::new(SystemClock, load_store(&settings)?);
            if let Some(date) = select {
                screen.select_date(date);
            }
            if let Some(month) = month {
                screen.show_month(month);
            }
            print_month(&screen, &settings);
        }
        Commands::Day { date } => {
            let mut screen = CalendarScreen::new(SystemClock, load_store(&settings)?);
            if let Some(date) = date {
                screen.select_date(date);
            }
            print!(
                "{}",
                DayView::render(
                    screen.selected_date(),
                    screen.selected_session(),
                    &settings.date_format
                )
            );
        }
        Commands::Routes {
            grade_min,
            grade_max,
            style,
            search,
        } => {
            let catalog = RouteCatalog::default_gym();
            let filter = RouteFilter {
                min_grade: grade_min,
                max_grade: grade_max,
                style,
                search,
            };
            let routes = catalog.filter(&filter);
            print!("{}", RouteList::render(&catalog, &routes));
        }
    }

    Ok(())
}

fn init_logging(settings: &Settings) {
    let default_level = settings.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn log_settings_source(explicit: Option<&Path>) {
    match resolve_config_path(explicit) {
        Some(path) if path.exists() => log::info!("Loaded settings from {}", path.display()),
        Some(path) => log::debug!("No config at {}, using defaults", path.display()),
        None => log::warn!("No config directory available, using default settings"),
    }
}

fn load_store(settings: &Settings) -> Result<SessionStore> {
    match &settings.seed_sessions {
        Some(path) => SessionStore::load_json(path),
        None => Ok(SessionStore::new()),
    }
}

fn print_month(screen: &CalendarScreen<SystemClock>, settings: &Settings) {
    let grid = screen.grid();
    let markers = if settings.show_session_markers {
        let month = grid.month();
        screen.store().dates_with_sessions(month.year(), month.month())
    } else {
        Default::default()
    };

    print!("{}", MonthView::render(&grid, &markers));
    println!();
    print!(
        "{}",
        DayView::render(
            screen.selected_date(),
            screen.selected_session(),
            &settings.date_format
        )
    );
}
