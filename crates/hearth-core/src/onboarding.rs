//! Onboarding Sequencer
//!
//! Walks the user through a fixed list of steps. Each step owns a slice of
//! the profile and a gate that must hold before the wizard moves on. The last
//! step hands the finished profile to the caller.

use serde::{Deserialize, Serialize};

use crate::profile::{ProfileDraft, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    Intro,
    Basic,
    Housing,
    Mobility,
    Dietary,
    Support,
    Details,
    Complete,
}

impl OnboardingStep {
    /// Canonical order of the questionnaire
    pub const ORDER: [OnboardingStep; 8] = [
        OnboardingStep::Intro,
        OnboardingStep::Basic,
        OnboardingStep::Housing,
        OnboardingStep::Mobility,
        OnboardingStep::Dietary,
        OnboardingStep::Support,
        OnboardingStep::Details,
        OnboardingStep::Complete,
    ];

    pub fn index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingStep::Intro => "intro",
            OnboardingStep::Basic => "basic",
            OnboardingStep::Housing => "housing",
            OnboardingStep::Mobility => "mobility",
            OnboardingStep::Dietary => "dietary",
            OnboardingStep::Support => "support",
            OnboardingStep::Details => "details",
            OnboardingStep::Complete => "complete",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == OnboardingStep::Complete
    }

    /// Whether `draft` holds everything this step asks for
    pub fn is_satisfied_by(&self, draft: &ProfileDraft) -> bool {
        match self {
            OnboardingStep::Intro | OnboardingStep::Dietary | OnboardingStep::Details => true,
            OnboardingStep::Basic => {
                draft.has_name() && draft.has_location() && draft.has_household_size()
            }
            OnboardingStep::Housing => draft.housing_type.is_some() && draft.pets.is_some(),
            OnboardingStep::Mobility => draft.transportation.is_some() && draft.mobility.is_some(),
            OnboardingStep::Support => draft.social_support.is_some(),
            OnboardingStep::Complete => draft.build().is_some(),
        }
    }
}

/// Outcome of `OnboardingSequencer::advance`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step
    Moved(OnboardingStep),
    /// The current step's gate does not hold; nothing changed
    Blocked,
    /// Terminal step reached with a complete profile
    Completed(UserProfile),
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingSequencer {
    step_index: usize,
    draft: ProfileDraft,
}

impl OnboardingSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> OnboardingStep {
        OnboardingStep::ORDER[self.step_index]
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// (current index, number of steps)
    pub fn progress(&self) -> (usize, usize) {
        (self.step_index, OnboardingStep::ORDER.len())
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn toggle_dietary(&mut self, tag: &str) {
        self.draft.toggle_dietary(tag);
    }

    pub fn toggle_concern(&mut self, tag: &str) {
        self.draft.toggle_concern(tag);
    }

    pub fn can_advance(&self) -> bool {
        self.current_step().is_satisfied_by(&self.draft)
    }

    pub fn advance(&mut self) -> Advance {
        let step = self.current_step();
        if !step.is_satisfied_by(&self.draft) {
            return Advance::Blocked;
        }
        if step.is_terminal() {
            return match self.draft.build() {
                Some(profile) => Advance::Completed(profile),
                None => Advance::Blocked,
            };
        }
        self.step_index += 1;
        Advance::Moved(self.current_step())
    }

    /// Step back once; returns false at the first step
    pub fn retreat(&mut self) -> bool {
        if self.step_index == 0 {
            return false;
        }
        self.step_index -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HousingType, Mobility, SocialSupport, Transportation};

    fn fill_to_complete(seq: &mut OnboardingSequencer) {
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Basic));

        let draft = seq.draft_mut();
        draft.name = Some("Alex".into());
        draft.location = Some("Portland".into());
        draft.household_size = Some(2);
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Housing));

        seq.draft_mut().housing_type = Some(HousingType::House);
        seq.draft_mut().pets = Some(false);
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Mobility));

        seq.draft_mut().transportation = Some(Transportation::OwnCar);
        seq.draft_mut().mobility = Some(Mobility::NoLimitations);
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Dietary));

        seq.toggle_dietary("Vegan");
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Support));

        seq.draft_mut().social_support = Some(SocialSupport::Isolated);
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Details));
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Complete));
    }

    #[test]
    fn test_basic_step_blocks_until_filled() {
        let mut seq = OnboardingSequencer::new();
        seq.advance();
        assert_eq!(seq.current_step(), OnboardingStep::Basic);

        seq.draft_mut().name = Some("Alex".into());
        seq.draft_mut().location = Some("Portland".into());
        assert!(!seq.can_advance());
        assert_eq!(seq.advance(), Advance::Blocked);
        assert_eq!(seq.current_step(), OnboardingStep::Basic);

        seq.draft_mut().household_size = Some(1);
        assert!(seq.can_advance());
        assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Housing));
    }

    #[test]
    fn test_retreat_at_first_step_is_noop() {
        let mut seq = OnboardingSequencer::new();
        for _ in 0..3 {
            assert!(!seq.retreat());
            assert_eq!(seq.step_index(), 0);
        }
    }

    #[test]
    fn test_retreat_keeps_answers() {
        let mut seq = OnboardingSequencer::new();
        fill_to_complete(&mut seq);
        assert!(seq.retreat());
        assert_eq!(seq.current_step(), OnboardingStep::Details);
        assert_eq!(seq.draft().name.as_deref(), Some("Alex"));
    }

    #[test]
    fn test_terminal_advance_emits_equal_profiles() {
        let mut seq = OnboardingSequencer::new();
        fill_to_complete(&mut seq);

        let first = seq.advance();
        let second = seq.advance();
        assert!(matches!(first, Advance::Completed(_)));
        assert_eq!(first, second);
        assert_eq!(seq.current_step(), OnboardingStep::Complete);
        if let Advance::Completed(profile) = first {
            assert_eq!(profile.dietary, vec!["Vegan".to_string()]);
        }
    }

    #[test]
    fn test_optional_steps_never_block() {
        assert!(OnboardingStep::Intro.is_satisfied_by(&ProfileDraft::new()));
        assert!(OnboardingStep::Dietary.is_satisfied_by(&ProfileDraft::new()));
        assert!(OnboardingStep::Details.is_satisfied_by(&ProfileDraft::new()));
        assert!(!OnboardingStep::Complete.is_satisfied_by(&ProfileDraft::new()));
    }
}
