use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use client_core::{DealershipApi, HttpDealershipClient};
use crossbeam_channel::{bounded, Receiver, Sender};
use dealership_ui::{
    backend_bridge::{self, commands::BackendCommand},
    config,
    controller::{
        dealers::{DealerListController, DealerListEvent},
        events::UiEvent,
        login::{LoginController, LoginEvent, LoginField},
        orchestration::Session,
        outcome::RequestOutcome,
        registration::{RegistrationController, RegistrationEvent, RegistrationField},
        review::{ReviewController, ReviewEvent, ReviewField},
    },
    ui::{input, render},
};
use shared::domain::DealerId;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dealership", about = "Browse dealerships, sign in, and post reviews")]
struct Cli {
    /// Base URL of the dealership API; overrides config and environment.
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List dealerships, optionally narrowed to one state.
    Dealers {
        #[arg(long, default_value = "")]
        state: String,
        /// Retry a failed load up to this many times.
        #[arg(long, default_value_t = 0)]
        retries: u32,
        /// Print the available state filters and exit.
        #[arg(long)]
        list_states: bool,
    },
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Post a review for a dealership.
    Review {
        #[arg(long)]
        dealer_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        review: String,
        #[arg(long)]
        purchase: bool,
        #[arg(long)]
        purchase_date: Option<NaiveDate>,
        #[arg(long)]
        car_make: Option<String>,
        #[arg(long)]
        car_model: Option<String>,
        #[arg(long)]
        car_year: Option<i32>,
    },
    /// Show the car makes, and the models of one make, offered by the review form.
    Cars {
        #[arg(long)]
        make: Option<String>,
    },
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let (settings, config_warning) = config::load_settings();
    init_tracing(&settings.log_filter);
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let base_url = config::normalize_base_url(
        cli.api_url.as_deref().unwrap_or(&settings.api_base_url),
    )?;
    tracing::info!(%base_url, "using dealership api");

    let api: Arc<dyn DealershipApi> = Arc::new(HttpDealershipClient::new(base_url));
    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let worker = backend_bridge::runtime::launch(api, cmd_rx, ui_tx);

    let status = run(cli.command, cmd_tx, ui_rx)?;

    if worker.join().is_err() {
        tracing::error!("backend worker panicked");
    }
    Ok(status)
}

fn run(
    command: Command,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
) -> Result<ExitCode> {
    match command {
        Command::Dealers {
            state,
            retries,
            list_states,
        } => {
            if list_states {
                println!("{}", render::state_options());
                return Ok(ExitCode::SUCCESS);
            }
            show_dealers(
                Session::new(DealerListController::new(), cmd_tx, ui_rx),
                state.trim().to_ascii_uppercase(),
                retries,
            )
        }
        Command::Login { username, password } => {
            let mut session = Session::new(LoginController::new(), cmd_tx, ui_rx);
            session.send(LoginEvent::FieldChanged(LoginField::UserName, username));
            session.send(LoginEvent::FieldChanged(LoginField::Password, password));
            if let Err(err) = input::check_credentials(session.controller().draft()) {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
            session.send(LoginEvent::Submit);
            session.settle().context("login did not settle")?;
            Ok(report(session.controller().outcome(), session.navigations()))
        }
        Command::Register {
            username,
            first_name,
            last_name,
            email,
            password,
        } => {
            let mut session = Session::new(RegistrationController::new(), cmd_tx, ui_rx);
            for (field, value) in [
                (RegistrationField::UserName, username),
                (RegistrationField::FirstName, first_name),
                (RegistrationField::LastName, last_name),
                (RegistrationField::Email, email),
                (RegistrationField::Password, password),
            ] {
                session.send(RegistrationEvent::FieldChanged(field, value));
            }
            if let Err(err) = input::check_registration(session.controller().draft()) {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }
            session.send(RegistrationEvent::Submit);
            session.settle().context("registration did not settle")?;
            Ok(report(session.controller().outcome(), session.navigations()))
        }
        Command::Review {
            dealer_id,
            name,
            review,
            purchase,
            purchase_date,
            car_make,
            car_model,
            car_year,
        } => {
            let controller = ReviewController::new(DealerId(dealer_id));
            println!("Reviewing dealership #{}", controller.dealership());
            let mut session = Session::new(controller, cmd_tx, ui_rx);
            session.send(ReviewEvent::Mounted);
            session.settle().context("car catalog fetch did not settle")?;

            session.send(ReviewEvent::FieldChanged(ReviewField::Name, name));
            session.send(ReviewEvent::FieldChanged(ReviewField::Review, review));
            if purchase {
                session.send(ReviewEvent::PurchaseToggled(true));
                if let Some(date) = purchase_date {
                    let date = date.format("%Y-%m-%d").to_string();
                    session.send(ReviewEvent::FieldChanged(ReviewField::PurchaseDate, date));
                }
                if let Some(year) = car_year {
                    let year = year.to_string();
                    session.send(ReviewEvent::FieldChanged(ReviewField::CarYear, year));
                }
                if let Err(message) = select_car(&mut session, car_make, car_model) {
                    eprintln!("{message}");
                    return Ok(ExitCode::FAILURE);
                }
            }
            if let Err(err) = input::check_review(session.controller().draft()) {
                eprintln!("{err}");
                return Ok(ExitCode::FAILURE);
            }

            session.send(ReviewEvent::Submit);
            session.settle().context("review submission did not settle")?;
            Ok(report(session.controller().outcome(), session.navigations()))
        }
        Command::Cars { make } => {
            let mut session = Session::new(ReviewController::new(DealerId(0)), cmd_tx, ui_rx);
            session.send(ReviewEvent::Mounted);
            session.settle().context("car catalog fetch did not settle")?;
            if make.is_some() {
                session.send(ReviewEvent::PurchaseToggled(true));
                if let Err(message) = select_car(&mut session, make, None) {
                    eprintln!("{message}");
                    return Ok(ExitCode::FAILURE);
                }
            }
            println!("{}", render::car_choices(session.controller()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_dealers(
    mut session: Session<DealerListController>,
    state: String,
    retries: u32,
) -> Result<ExitCode> {
    session.send(DealerListEvent::Mounted);
    session.settle().context("dealer fetch did not settle")?;

    let mut attempts = 0;
    while session.controller().fetch_outcome().is_failure() && attempts < retries {
        attempts += 1;
        eprintln!("{}", render::dealers(session.controller()));
        session.send(DealerListEvent::Retry);
        session.settle().context("dealer retry did not settle")?;
    }

    session.send(DealerListEvent::StateSelected(state));
    println!("{}", render::dealers(session.controller()));
    if session.controller().fetch_outcome().is_failure() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Applies make and model the way the form's selectors would: only values
/// offered by the current catalog can be chosen.
fn select_car(
    session: &mut Session<ReviewController>,
    make: Option<String>,
    model: Option<String>,
) -> Result<(), String> {
    if let Some(make) = make {
        let makes = session.controller().distinct_makes();
        if !makes.contains(&make.as_str()) {
            return Err(format!(
                "unknown car make '{make}'; available: {}",
                if makes.is_empty() {
                    "none".to_string()
                } else {
                    makes.join(", ")
                }
            ));
        }
        session.send(ReviewEvent::FieldChanged(ReviewField::CarMake, make));
    }

    if let Some(model) = model {
        if !session.controller().model_selector_enabled() {
            return Err("choose a car make before a model".to_string());
        }
        let offered = session
            .controller()
            .models_for_selected_make()
            .iter()
            .any(|entry| entry.car_model == model);
        if !offered {
            return Err(format!(
                "model '{model}' is not offered for {}",
                session.controller().draft().car_make
            ));
        }
        session.send(ReviewEvent::FieldChanged(ReviewField::CarModel, model));
    }
    Ok(())
}

fn report(outcome: &RequestOutcome, navigations: &[String]) -> ExitCode {
    if let Some(message) = render::outcome(outcome) {
        println!("{message}");
    }
    for location in navigations {
        println!("-> navigating to {location}");
    }
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
