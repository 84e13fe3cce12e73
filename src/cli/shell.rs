use crate::cli::output;
use crate::cli::prompts;
use crate::cli::screens::{self, ScreenAction};
use crate::config::{Config, ConfigManager};
use crate::errors::QuoteError;
use crate::pricing::calculate_premium;
use crate::storage::{JsonQuoteStore, QuoteStore};
use crate::validation::ValidationErrors;
use crate::wizard::{QuoteSession, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Runs the interactive wizard until the user exits. Each completed quote
/// starts a fresh session with an empty form.
pub fn run_cli() -> Result<(), QuoteError> {
    crate::init();

    let config_manager = ConfigManager::new()?;
    let mut config = config_manager.load()?;
    let store = JsonQuoteStore::new_default()?;
    tracing::info!(data_dir = %store.base_dir().display(), "quote store ready");

    loop {
        match run_session(&store, &config_manager, &mut config)? {
            LoopControl::Continue => continue,
            LoopControl::Exit => break,
        }
    }

    output::info("Goodbye.");
    Ok(())
}

fn run_session(
    store: &dyn QuoteStore,
    config_manager: &ConfigManager,
    config: &mut Config,
) -> Result<LoopControl, QuoteError> {
    let theme = prompts::theme();
    let mut session = QuoteSession::new();
    let mut errors = ValidationErrors::new();

    loop {
        let action = match session.step() {
            Step::Intro => screens::intro_screen(&theme)?,
            Step::Personal => screens::personal_screen(&theme, session.form_mut(), &errors)?,
            Step::Vehicle => screens::vehicle_screen(&theme, session.form_mut(), &errors)?,
            Step::Coverage => screens::coverage_screen(&theme, session.form_mut(), &errors)?,
            Step::Review => screens::review_screen(&theme, session.form())?,
            Step::Quote => {
                // Reaching the quote step without a finalized review only
                // happens on a logic error upstream; restart the session.
                output::warning("No generated quote for this session; starting over.");
                return Ok(LoopControl::Continue);
            }
        };

        match action {
            ScreenAction::Next => match session.try_advance() {
                Ok(_) => errors.clear(),
                Err(step_errors) => {
                    errors = step_errors;
                }
            },
            ScreenAction::Back => {
                errors.clear();
                session.retreat();
            }
            ScreenAction::Jump(step) => {
                errors.clear();
                session.jump_to(step);
            }
            ScreenAction::Finalize => {
                let quote = session.finalize_review(store)?;
                let premium = calculate_premium(session.form());

                config.last_quote_id = Some(quote.quote_id.clone());
                config_manager.save(config)?;

                let next = screens::quote_screen(&theme, session.form(), &quote, &premium, config)?;
                return Ok(match next {
                    ScreenAction::NewQuote => LoopControl::Continue,
                    _ => LoopControl::Exit,
                });
            }
            ScreenAction::NewQuote => return Ok(LoopControl::Continue),
            ScreenAction::Exit => return Ok(LoopControl::Exit),
        }
    }
}
