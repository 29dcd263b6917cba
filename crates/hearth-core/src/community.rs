//! Community panel rules: citizen-app status and network advice.

use crate::profile::{CitizenApp, SocialSupport};

impl CitizenApp {
    pub fn status_label(app: Option<CitizenApp>) -> &'static str {
        match app {
            Some(CitizenApp::YesActive) => "Active User",
            Some(CitizenApp::YesOccasional) => "Occasional User",
            Some(CitizenApp::NoInterested) => "Interested",
            Some(CitizenApp::NoNotInterested) => "Not Interested",
            None => "Unknown",
        }
    }

    /// Users who opted out are not offered the connect button
    pub fn can_connect(app: Option<CitizenApp>) -> bool {
        app != Some(CitizenApp::NoNotInterested)
    }
}

/// Advice block under the community panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkAdvice {
    pub title: &'static str,
    pub tips: Vec<&'static str>,
    /// True when the user should be nudged to build connections
    pub needs_building: bool,
}

pub fn network_advice(support: SocialSupport) -> NetworkAdvice {
    match support {
        SocialSupport::Limited | SocialSupport::Isolated => NetworkAdvice {
            title: "Building Your Network",
            tips: vec![
                "Start with one neighbor introduction",
                "Join local community groups or apps",
                "Attend neighborhood meetings",
                "Share preparedness tips with others",
            ],
            needs_building: true,
        },
        SocialSupport::Strong | SocialSupport::Some => NetworkAdvice {
            title: "Strong Network",
            tips: vec!["Your existing local connections are a huge asset for emergency preparedness!"],
            needs_building: false,
        },
    }
}

/// One-line note for the dashboard sidebar
pub fn community_note(support: SocialSupport) -> &'static str {
    match support {
        SocialSupport::Strong => "Your strong community connections are a huge asset for resilience!",
        _ => "Building local connections strengthens everyone's ability to weather challenges together.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citizen_app_status() {
        assert_eq!(CitizenApp::status_label(None), "Unknown");
        assert_eq!(CitizenApp::status_label(Some(CitizenApp::YesOccasional)), "Occasional User");
        assert!(CitizenApp::can_connect(None));
        assert!(!CitizenApp::can_connect(Some(CitizenApp::NoNotInterested)));
    }

    #[test]
    fn test_network_advice() {
        assert!(network_advice(SocialSupport::Isolated).needs_building);
        assert_eq!(network_advice(SocialSupport::Limited).tips.len(), 4);
        assert!(!network_advice(SocialSupport::Some).needs_building);
        assert_ne!(
            community_note(SocialSupport::Strong),
            community_note(SocialSupport::Some)
        );
    }
}
