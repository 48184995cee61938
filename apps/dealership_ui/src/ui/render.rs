use std::fmt::Write as _;

use shared::domain::{state_option, Dealer, STATE_OPTIONS};

use crate::controller::{
    dealers::{DealerListController, DealerListView},
    outcome::{RequestOutcome, Settled},
    review::ReviewController,
};

fn dealer_line(dealer: &Dealer) -> String {
    format!(
        "#{:<4} {} | {}, {}, {} {} | details {} | reviews {}",
        dealer.id.0,
        dealer.full_name,
        dealer.address,
        dealer.city,
        dealer.st,
        dealer.zip,
        dealer.details_path(),
        dealer.reviews_path()
    )
}

pub fn dealers(controller: &DealerListController) -> String {
    match controller.view() {
        DealerListView::Loading => "Loading dealerships...".to_string(),
        DealerListView::Error { message } => format!("Error: {message} (retry available)"),
        DealerListView::NoResults { total } => {
            let state = controller.selected_state();
            if state.is_empty() {
                return "No dealerships found.".to_string();
            }
            let name = state_option(state).map_or(state, |option| option.name);
            format!("No dealerships found in {name} ({total} in total).")
        }
        DealerListView::Showing {
            dealers, summary, ..
        } => {
            let mut out = String::new();
            for dealer in dealers {
                let _ = writeln!(out, "{}", dealer_line(dealer));
            }
            out.push_str(&summary);
            out
        }
    }
}

pub fn state_options() -> String {
    STATE_OPTIONS
        .iter()
        .map(|option| {
            let code = if option.code.is_empty() {
                "(none)"
            } else {
                option.code
            };
            format!("{code:<6} {}", option.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Inline message under a form, or `None` when there is nothing to show.
pub fn outcome(outcome: &RequestOutcome) -> Option<String> {
    match outcome {
        RequestOutcome::Idle => None,
        RequestOutcome::Pending => Some("Working...".to_string()),
        RequestOutcome::Settled(Settled::Success(message)) => {
            message.as_ref().map(|message| format!("ok: {message}"))
        }
        RequestOutcome::Settled(Settled::Failure(message)) => Some(format!("error: {message}")),
    }
}

/// Make and model choices the review form would offer.
pub fn car_choices(controller: &ReviewController) -> String {
    let makes = controller.distinct_makes();
    if makes.is_empty() {
        return "No car makes available.".to_string();
    }

    let mut out = String::from("Makes:\n");
    for make in makes {
        let _ = writeln!(out, "  {make}");
    }
    if controller.model_selector_enabled() {
        let _ = writeln!(out, "Models for {}:", controller.draft().car_make);
        for entry in controller.models_for_selected_make() {
            match entry.car_year {
                Some(year) => {
                    let _ = writeln!(out, "  {} ({year})", entry.car_model);
                }
                None => {
                    let _ = writeln!(out, "  {}", entry.car_model);
                }
            }
        }
    }
    out.trim_end().to_string()
}
