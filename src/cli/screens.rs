//! One screen per wizard step.
//!
//! Screens render the current form state plus any validation errors, collect
//! raw field edits, and report a navigation action back to the shell loop.
//! They never validate, price, or persist anything themselves.

use dialoguer::theme::ColorfulTheme;

use crate::cli::{output, prompts};
use crate::config::Config;
use crate::currency::format_currency;
use crate::domain::{
    model_years, Addon, InsuranceType, QuoteForm, VehicleType, CAR_MAKES, LOCATIONS,
};
use crate::errors::QuoteError;
use crate::pricing::PremiumBreakdown;
use crate::quote::QuoteMetadata;
use crate::validation::ValidationErrors;
use crate::wizard::Step;

/// Navigation outcome of a rendered screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Next,
    Back,
    Jump(Step),
    Finalize,
    NewQuote,
    Exit,
}

pub fn intro_screen(theme: &ColorfulTheme) -> Result<ScreenAction, QuoteError> {
    output::section("Motor Insurance Quote");
    output::line("Get your motor insurance quote in minutes.");
    output::line("Comprehensive coverage, a quick process, and an instant premium breakdown.");
    output::separator();

    let items = vec!["Get a Quote Now".to_string(), "Exit".to_string()];
    match prompts::select(theme, "Ready to start?", &items, 0)? {
        0 => Ok(ScreenAction::Next),
        _ => Ok(ScreenAction::Exit),
    }
}

pub fn personal_screen(
    theme: &ColorfulTheme,
    form: &mut QuoteForm,
    errors: &ValidationErrors,
) -> Result<ScreenAction, QuoteError> {
    render_header(Step::Personal, errors);

    form.full_name = prompts::text(theme, "Full name", &form.full_name)?;
    form.phone = prompts::text(theme, "Phone number", &form.phone)?;
    form.email = prompts::text(theme, "Email address", &form.email)?;
    form.national_id = prompts::text(theme, "National ID (optional)", &form.national_id)?;

    let locations: Vec<String> = LOCATIONS.iter().map(|city| city.to_string()).collect();
    let default = LOCATIONS
        .iter()
        .position(|city| *city == form.location)
        .unwrap_or(0);
    let index = prompts::select(theme, "Location", &locations, default)?;
    form.location = locations[index].clone();

    navigation(theme, true)
}

pub fn vehicle_screen(
    theme: &ColorfulTheme,
    form: &mut QuoteForm,
    errors: &ValidationErrors,
) -> Result<ScreenAction, QuoteError> {
    render_header(Step::Vehicle, errors);

    let makes: Vec<String> = CAR_MAKES.iter().map(|make| make.to_string()).collect();
    let make_default = CAR_MAKES
        .iter()
        .position(|make| *make == form.make)
        .unwrap_or(0);
    let index = prompts::select(theme, "Vehicle make", &makes, make_default)?;
    form.make = makes[index].clone();

    form.model = prompts::text(theme, "Model", &form.model)?;

    let years: Vec<String> = model_years().iter().map(|year| year.to_string()).collect();
    let year_default = years
        .iter()
        .position(|year| *year == form.year)
        .unwrap_or(0);
    let index = prompts::select(theme, "Year of manufacture", &years, year_default)?;
    form.year = years[index].clone();

    form.engine_capacity =
        prompts::text(theme, "Engine capacity (e.g. 1800cc)", &form.engine_capacity)?;

    let kinds: Vec<String> = VehicleType::ALL
        .iter()
        .map(|kind| kind.label().to_string())
        .collect();
    let kind_default = form
        .vehicle_type
        .and_then(|current| VehicleType::ALL.iter().position(|kind| *kind == current))
        .unwrap_or(0);
    let index = prompts::select(theme, "Vehicle type", &kinds, kind_default)?;
    form.vehicle_type = VehicleType::ALL.get(index).copied();

    form.vehicle_value = prompts::text(
        theme,
        "Estimated vehicle value (ZMK)",
        &form.vehicle_value,
    )?;

    navigation(theme, true)
}

pub fn coverage_screen(
    theme: &ColorfulTheme,
    form: &mut QuoteForm,
    errors: &ValidationErrors,
) -> Result<ScreenAction, QuoteError> {
    render_header(Step::Coverage, errors);

    let kinds: Vec<String> = InsuranceType::ALL
        .iter()
        .map(|kind| format!("{} - {}", kind.label(), kind.description()))
        .collect();
    let kind_default = form
        .insurance_type
        .and_then(|current| InsuranceType::ALL.iter().position(|kind| *kind == current))
        .unwrap_or(0);
    let index = prompts::select(theme, "Insurance type", &kinds, kind_default)?;
    form.insurance_type = InsuranceType::ALL.get(index).copied();

    let addon_items: Vec<String> = Addon::CATALOG
        .iter()
        .map(|addon| {
            format!(
                "{} ({}/year) - {}",
                addon.name(),
                format_currency(addon.annual_cost(), crate::quote::QUOTE_CURRENCY),
                addon.description()
            )
        })
        .collect();
    let checked: Vec<bool> = Addon::CATALOG
        .iter()
        .map(|addon| form.has_addon(*addon))
        .collect();
    let selected = prompts::multi_select(theme, "Optional add-ons", &addon_items, &checked)?;
    form.addons = selected
        .into_iter()
        .filter_map(|index| Addon::CATALOG.get(index).copied())
        .collect();

    navigation(theme, true)
}

pub fn review_screen(
    theme: &ColorfulTheme,
    form: &QuoteForm,
) -> Result<ScreenAction, QuoteError> {
    output::section(Step::Review.title());
    output::line("Please review your information before getting your quote.");
    output::separator();

    output::line("Personal Information");
    output::line(format!("  Full name: {}", form.full_name));
    output::line(format!("  Phone: {}", form.phone));
    output::line(format!("  Email: {}", form.email));
    output::line(format!("  Location: {}", form.location));
    if !form.national_id.trim().is_empty() {
        output::line(format!("  National ID: {}", form.national_id));
    }
    output::separator();

    output::line("Vehicle Details");
    output::line(format!("  Make & model: {} {}", form.make, form.model));
    output::line(format!("  Year: {}", form.year));
    output::line(format!("  Engine capacity: {}", form.engine_capacity));
    if let Some(kind) = form.vehicle_type {
        output::line(format!("  Vehicle type: {}", kind.label()));
    }
    output::line(format!("  Vehicle value: {}", form.vehicle_value));
    output::separator();

    output::line("Coverage Options");
    if let Some(kind) = form.insurance_type {
        output::line(format!("  Insurance type: {}", kind.label()));
    }
    if form.addons.is_empty() {
        output::line("  Add-ons: None");
    } else {
        output::line("  Add-ons:");
        for addon in &form.addons {
            output::line(format!("    - {}", addon.name()));
        }
    }
    output::separator();

    let items = vec![
        "Get My Quote".to_string(),
        "Edit Personal Information".to_string(),
        "Edit Vehicle Details".to_string(),
        "Edit Coverage Options".to_string(),
        "Back".to_string(),
        "Exit".to_string(),
    ];
    Ok(match prompts::select(theme, "What next?", &items, 0)? {
        0 => ScreenAction::Finalize,
        1 => ScreenAction::Jump(Step::Personal),
        2 => ScreenAction::Jump(Step::Vehicle),
        3 => ScreenAction::Jump(Step::Coverage),
        4 => ScreenAction::Back,
        _ => ScreenAction::Exit,
    })
}

pub fn quote_screen(
    theme: &ColorfulTheme,
    form: &QuoteForm,
    quote: &QuoteMetadata,
    premium: &PremiumBreakdown,
    config: &Config,
) -> Result<ScreenAction, QuoteError> {
    let currency = config.currency.as_str();

    output::section(Step::Quote.title());
    output::success("Quote generated successfully! Valid for 30 days.");
    output::line(format!("Quote reference: {}", quote.quote_id));
    output::line(format!(
        "Valid until: {}",
        quote.valid_until.format("%d %b %Y")
    ));
    output::separator();

    output::line(format!(
        "Premium breakdown for {} {} ({})",
        form.make, form.model, form.year
    ));
    if let Some(kind) = form.insurance_type {
        output::line(format!(
            "  {} insurance: {}",
            kind.label(),
            format_currency(premium.base_premium, currency)
        ));
    }
    for addon in &form.addons {
        output::line(format!(
            "  {}: {}",
            addon.name(),
            format_currency(addon.annual_cost(), currency)
        ));
    }
    output::separator();
    output::line(format!(
        "Total annual premium: {}",
        format_currency(premium.total, currency)
    ));
    output::line(format!(
        "Monthly payment option: {}/month",
        format_currency((premium.total / 12.0).ceil(), currency)
    ));
    output::separator();

    let items = vec!["Start a new quote".to_string(), "Exit".to_string()];
    match prompts::select(theme, "What next?", &items, 1)? {
        0 => Ok(ScreenAction::NewQuote),
        _ => Ok(ScreenAction::Exit),
    }
}

fn render_header(step: Step, errors: &ValidationErrors) {
    output::section(format!(
        "Step {} of {} - {}",
        step.index(),
        Step::Quote.index(),
        step.title()
    ));
    if !errors.is_empty() {
        output::warning("Please fix the following before continuing:");
        for message in errors.values() {
            output::warning(format!("  {}", message));
        }
    }
}

fn navigation(theme: &ColorfulTheme, can_back: bool) -> Result<ScreenAction, QuoteError> {
    let mut items = vec!["Continue".to_string()];
    if can_back {
        items.push("Go back".to_string());
    }
    items.push("Exit".to_string());

    let choice = prompts::select(theme, "Navigation", &items, 0)?;
    Ok(if choice == 0 {
        ScreenAction::Next
    } else if can_back && choice == 1 {
        ScreenAction::Back
    } else {
        ScreenAction::Exit
    })
}
