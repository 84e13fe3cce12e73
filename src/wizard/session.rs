use uuid::Uuid;

use crate::domain::QuoteForm;
use crate::errors::QuoteError;
use crate::quote::QuoteMetadata;
use crate::storage::QuoteStore;
use crate::validation::{validate_step, ValidationErrors};
use crate::wizard::{Step, StepController};

/// One quote session: the form record, the step machine, and the gate
/// between them.
///
/// The session owns the form exclusively; screens borrow it mutably to apply
/// field edits and the calculator and metadata generator read it. Dropping
/// the session discards the form; there is no teardown.
pub struct QuoteSession {
    id: Uuid,
    controller: StepController,
    form: QuoteForm,
}

impl QuoteSession {
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        tracing::info!(session = %id, "quote session started");
        Self {
            id,
            controller: StepController::new(),
            form: QuoteForm::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> Step {
        self.controller.current()
    }

    pub fn form(&self) -> &QuoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut QuoteForm {
        &mut self.form
    }

    /// Validates the current step and advances past it only when clean.
    /// A non-empty error map blocks the transition and has no other effect.
    pub fn try_advance(&mut self) -> Result<Step, ValidationErrors> {
        let errors = validate_step(self.step(), &self.form);
        if !errors.is_empty() {
            tracing::debug!(
                session = %self.id,
                step = self.step().title(),
                fields = errors.len(),
                "advance blocked by validation"
            );
            return Err(errors);
        }
        let step = self.controller.advance();
        tracing::debug!(session = %self.id, step = step.title(), "advanced");
        Ok(step)
    }

    /// Steps back without touching entered values.
    pub fn retreat(&mut self) -> Step {
        let step = self.controller.retreat();
        tracing::debug!(session = %self.id, step = step.title(), "retreated");
        step
    }

    /// Jumps straight to a step; used from the review screen to revisit
    /// earlier answers.
    pub fn jump_to(&mut self, step: Step) {
        self.controller.jump_to(step);
        tracing::debug!(session = %self.id, step = step.title(), "jumped");
    }

    /// Finalizes the review step: generates the immutable quote snapshot,
    /// persists it under its own key, and advances to the quote screen.
    /// Exactly one store write per invocation; each invocation produces a
    /// freshly keyed record.
    pub fn finalize_review(&mut self, store: &dyn QuoteStore) -> Result<QuoteMetadata, QuoteError> {
        if self.step() != Step::Review {
            return Err(QuoteError::InvalidInput(format!(
                "cannot finalize from the {} step",
                self.step().title()
            )));
        }
        let quote = QuoteMetadata::generate(&self.form)?;
        store.save(&quote)?;
        self.controller.advance();
        tracing::info!(
            session = %self.id,
            quote_id = %quote.quote_id,
            "quote generated and persisted"
        );
        Ok(quote)
    }
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InsuranceType, VehicleType};
    use crate::storage::JsonQuoteStore;
    use tempfile::TempDir;

    fn fill_personal(session: &mut QuoteSession) {
        let form = session.form_mut();
        form.full_name = "Chipo Mwansa".into();
        form.phone = "+260961234567".into();
        form.email = "chipo@example.com".into();
        form.location = "Lusaka".into();
    }

    fn fill_vehicle(session: &mut QuoteSession) {
        let form = session.form_mut();
        form.make = "Toyota".into();
        form.model = "Corolla".into();
        form.year = "2020".into();
        form.engine_capacity = "1800cc".into();
        form.vehicle_type = Some(VehicleType::Private);
        form.vehicle_value = "50,000".into();
    }

    fn session_at_review() -> QuoteSession {
        let mut session = QuoteSession::new();
        session.try_advance().unwrap(); // intro
        fill_personal(&mut session);
        session.try_advance().unwrap();
        fill_vehicle(&mut session);
        session.try_advance().unwrap();
        session.form_mut().insurance_type = Some(InsuranceType::ThirdParty);
        session.try_advance().unwrap();
        assert_eq!(session.step(), Step::Review);
        session
    }

    #[test]
    fn advance_is_blocked_until_the_step_validates() {
        let mut session = QuoteSession::new();
        session.try_advance().unwrap();
        assert_eq!(session.step(), Step::Personal);

        let errors = session.try_advance().unwrap_err();
        assert!(!errors.is_empty());
        assert_eq!(session.step(), Step::Personal);

        fill_personal(&mut session);
        assert_eq!(session.try_advance().unwrap(), Step::Vehicle);
    }

    #[test]
    fn retreat_keeps_entered_values() {
        let mut session = QuoteSession::new();
        session.try_advance().unwrap();
        fill_personal(&mut session);
        session.try_advance().unwrap();
        session.retreat();
        assert_eq!(session.step(), Step::Personal);
        assert_eq!(session.form().full_name, "Chipo Mwansa");
    }

    #[test]
    fn jump_from_review_then_forward_again() {
        let mut session = session_at_review();
        session.jump_to(Step::Personal);
        assert_eq!(session.step(), Step::Personal);
        // Values survived the jump, so the gates pass straight through.
        session.try_advance().unwrap();
        session.try_advance().unwrap();
        session.try_advance().unwrap();
        assert_eq!(session.step(), Step::Review);
    }

    #[test]
    fn finalize_persists_and_advances() {
        let temp = TempDir::new().unwrap();
        let store = JsonQuoteStore::new(Some(temp.path().to_path_buf())).unwrap();
        let mut session = session_at_review();

        let quote = session.finalize_review(&store).unwrap();
        assert_eq!(session.step(), Step::Quote);
        assert_eq!(store.load(&quote.quote_id).unwrap(), quote);
    }

    #[test]
    fn finalize_outside_review_is_rejected() {
        let temp = TempDir::new().unwrap();
        let store = JsonQuoteStore::new(Some(temp.path().to_path_buf())).unwrap();
        let mut session = QuoteSession::new();
        let err = session.finalize_review(&store).unwrap_err();
        assert!(matches!(err, QuoteError::InvalidInput(_)));
        assert_eq!(session.step(), Step::Intro);
    }
}
