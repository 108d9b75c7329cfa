use super::form::OnboardingForm;
use super::step::WizardStep;

/// Step cursor plus the form it edits.
///
/// Navigation never inspects field contents: moving forward with empty
/// fields is allowed, and every value survives moving back and forth.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: WizardStep,
    form: OnboardingForm,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OnboardingForm {
        &mut self.form
    }

    pub fn is_first_step(&self) -> bool {
        self.step == WizardStep::FIRST
    }

    pub fn is_last_step(&self) -> bool {
        self.step == WizardStep::LAST
    }

    /// Move to the next step; a no-op on the last one.
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move to the previous step; a no-op on the first one.
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Back to step one with an empty form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::wizard::models::step::TOTAL_STEPS;

    fn wizard_at(number: u8) -> Wizard {
        let mut wizard = Wizard::new();
        while wizard.current_step().number() < number {
            wizard.advance();
        }
        wizard
    }

    #[test]
    fn test_starts_on_first_step() {
        let wizard = Wizard::new();
        assert_eq!(wizard.current_step(), WizardStep::FirmDetails);
        assert!(wizard.is_first_step());
        assert!(!wizard.is_last_step());
    }

    #[test]
    fn test_advance_increments_below_last_step() {
        for i in 1..TOTAL_STEPS {
            let mut wizard = wizard_at(i);
            assert_eq!(wizard.advance().number(), i + 1);
        }
    }

    #[test]
    fn test_advance_on_last_step_is_noop() {
        let mut wizard = wizard_at(TOTAL_STEPS);
        assert!(wizard.is_last_step());
        assert_eq!(wizard.advance(), WizardStep::LAST);
        assert_eq!(wizard.advance(), WizardStep::LAST);
    }

    #[test]
    fn test_retreat_decrements_above_first_step() {
        for i in 2..=TOTAL_STEPS {
            let mut wizard = wizard_at(i);
            assert_eq!(wizard.retreat().number(), i - 1);
        }
    }

    #[test]
    fn test_retreat_on_first_step_is_noop() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.retreat(), WizardStep::FIRST);
    }

    #[test]
    fn test_navigation_ignores_empty_fields() {
        let mut wizard = Wizard::new();
        for _ in 1..TOTAL_STEPS {
            wizard.advance();
        }
        assert!(wizard.is_last_step());
        assert!(wizard.form().firm.firm_name.is_empty());
    }

    #[test]
    fn test_navigating_away_and_back_preserves_input() {
        let mut wizard = Wizard::new();
        wizard.form_mut().firm.firm_name = "Acme LLP".to_string();
        wizard.form_mut().firm.country = "UAE".to_string();
        wizard.advance();
        wizard.form_mut().emails[0].name = "Outreach".to_string();

        for _ in 0..5 {
            wizard.advance();
        }
        while !wizard.is_first_step() {
            wizard.retreat();
        }

        assert_eq!(wizard.form().firm.firm_name, "Acme LLP");
        assert_eq!(wizard.form().firm.country, "UAE");
        assert_eq!(wizard.form().emails[0].name, "Outreach");
    }

    #[test]
    fn test_reset_clears_form_and_step() {
        let mut wizard = wizard_at(5);
        wizard.form_mut().additional_notes = "call first".to_string();
        wizard.reset();
        assert!(wizard.is_first_step());
        assert!(wizard.form().additional_notes.is_empty());
    }
}
