//! View Router
//!
//! Top-level mode of the app and the profile that drives it.

use serde::{Deserialize, Serialize};

use crate::profile::UserProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Welcome,
    Onboarding,
    Dashboard,
    Chat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewRouter {
    view: View,
    profile: Option<UserProfile>,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view. Dashboard and chat need a profile; without one the
    /// router falls back to the welcome screen.
    pub fn view(&self) -> View {
        match self.view {
            View::Dashboard | View::Chat if self.profile.is_none() => View::Welcome,
            view => view,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn start_onboarding(&mut self) -> bool {
        self.transition(View::Welcome, View::Onboarding)
    }

    pub fn complete_onboarding(&mut self, profile: UserProfile) -> bool {
        if self.view() != View::Onboarding {
            return false;
        }
        self.profile = Some(profile);
        self.view = View::Dashboard;
        true
    }

    /// Resume with a profile loaded from storage
    pub fn restore(&mut self, profile: UserProfile) -> bool {
        if self.view() != View::Welcome {
            return false;
        }
        self.profile = Some(profile);
        self.view = View::Dashboard;
        true
    }

    pub fn open_chat(&mut self) -> bool {
        self.transition(View::Dashboard, View::Chat)
    }

    pub fn back_to_dashboard(&mut self) -> bool {
        self.transition(View::Chat, View::Dashboard)
    }

    fn transition(&mut self, from: View, to: View) -> bool {
        if self.view() != from {
            return false;
        }
        self.view = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixture;

    #[test]
    fn test_happy_path() {
        let mut router = ViewRouter::new();
        assert_eq!(router.view(), View::Welcome);
        assert!(router.start_onboarding());
        assert!(router.complete_onboarding(fixture()));
        assert_eq!(router.view(), View::Dashboard);
        assert!(router.open_chat());
        assert_eq!(router.view(), View::Chat);
        assert!(router.back_to_dashboard());
        assert_eq!(router.view(), View::Dashboard);
    }

    #[test]
    fn test_undeclared_transitions_are_refused() {
        let mut router = ViewRouter::new();
        assert!(!router.open_chat());
        assert!(!router.back_to_dashboard());
        assert!(!router.complete_onboarding(fixture()));
        assert_eq!(router.view(), View::Welcome);
        assert!(router.profile().is_none());

        router.start_onboarding();
        assert!(!router.start_onboarding());
        assert!(!router.restore(fixture()));

        router.complete_onboarding(fixture());
        assert!(!router.start_onboarding());
        assert!(!router.back_to_dashboard());
    }

    #[test]
    fn test_restore_from_welcome() {
        let mut router = ViewRouter::new();
        assert!(router.restore(fixture()));
        assert_eq!(router.view(), View::Dashboard);
        assert_eq!(router.profile().map(|p| p.name.as_str()), Some("Alex"));
    }
}
