//! End-to-end scenarios across the generators.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::*;

fn answer_wizard(seq: &mut OnboardingSequencer) -> UserProfile {
    seq.advance();
    {
        let draft = seq.draft_mut();
        draft.name = Some("Alex".into());
        draft.location = Some("Oakland, California".into());
        draft.household_size = Some(2);
    }
    seq.advance();
    seq.draft_mut().housing_type = Some(HousingType::Apartment);
    seq.draft_mut().pets = Some(true);
    seq.advance();
    seq.draft_mut().transportation = Some(Transportation::OwnCar);
    seq.draft_mut().mobility = Some(Mobility::SomeDifficulty);
    seq.advance();
    seq.toggle_dietary("Vegan");
    seq.advance();
    seq.draft_mut().social_support = Some(SocialSupport::Isolated);
    seq.advance();
    seq.draft_mut().medications = Some("blood pressure pills".into());
    seq.advance();

    match seq.advance() {
        Advance::Completed(profile) => profile,
        other => panic!("wizard did not complete: {:?}", other),
    }
}

#[test]
fn test_onboarding_to_dashboard_scenario() {
    let mut router = ViewRouter::new();
    router.start_onboarding();

    let mut seq = OnboardingSequencer::new();
    let profile = answer_wizard(&mut seq);
    assert!(router.complete_onboarding(profile.clone()));
    assert_eq!(router.view(), View::Dashboard);

    let checklist = Checklist::for_profile(&profile);
    let neighbors = checklist
        .items()
        .iter()
        .find(|i| i.task == "Connect with neighbors")
        .unwrap();
    assert_eq!(neighbors.priority, Priority::High);

    let water = checklist.items().iter().find(|i| i.id == 2).unwrap();
    assert!(water.explanation.ends_with("6 gallons total."));

    let reply = respond("what about evacuation", &profile, &mut SmallRng::seed_from_u64(1));
    assert!(reply.starts_with("Since you have access to your own vehicle"));
}

#[test]
fn test_trackers_from_completed_profile() {
    let profile = answer_wizard(&mut OnboardingSequencer::new());

    let supply = FoodSupply::new(profile.household_size, &profile.dietary);
    assert_eq!(supply.items().len(), 9);
    assert_eq!(supply.items()[0].target, 28);

    let reminders = generate_reminders(&profile);
    let ids: Vec<u32> = reminders.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_chat_round_trip_with_responder() {
    let profile = answer_wizard(&mut OnboardingSequencer::new());
    let mut rng = SmallRng::seed_from_u64(3);
    let mut session = ChatSession::new(&profile, 0);

    let pending = session.submit("thanks!", 10).unwrap();
    let delay = thinking_delay(&mut rng);
    let reply = respond(&pending.input, &profile, &mut rng);
    assert!(session.deliver(pending.ticket, reply, 10 + delay.as_millis() as i64));

    let last = session.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert!(last.content.starts_with("You're so welcome, Alex!"));
}

#[test]
fn test_persisted_profile_restores_dashboard() {
    let profile = answer_wizard(&mut OnboardingSequencer::new());
    let record = ProfileRecord::from_profile("local-1", &profile);
    let loaded = record.into_profile().unwrap();

    let mut router = ViewRouter::new();
    assert!(router.restore(loaded));
    assert_eq!(router.profile(), Some(&profile));
}

#[test]
fn test_basic_step_rejects_oversized_household() {
    let mut seq = OnboardingSequencer::new();
    seq.advance();
    {
        let draft = seq.draft_mut();
        draft.name = Some("Alex".into());
        draft.location = Some("Oakland, California".into());
        draft.household_size = "400000000".parse().ok();
    }
    assert!(!seq.can_advance());
    assert_eq!(seq.advance(), Advance::Blocked);
    assert_eq!(seq.current_step(), OnboardingStep::Basic);

    seq.draft_mut().household_size = Some(MAX_HOUSEHOLD);
    assert_eq!(seq.advance(), Advance::Moved(OnboardingStep::Housing));

    let mut profile = answer_wizard(&mut OnboardingSequencer::new());
    profile.household_size = MAX_HOUSEHOLD;
    let supply = FoodSupply::new(profile.household_size, &profile.dietary);
    assert_eq!(supply.items()[0].target, MAX_HOUSEHOLD * 14);
}

#[test]
fn test_readiness_event_name_is_shared() {
    assert_eq!(DB_INITIALIZED_EVENT, "db-initialized");
}
