use crate::models::TopicLabel;

/// One entry of the ordered rule table: a topic and the keywords that select it.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub topic: TopicLabel,
    pub keywords: &'static [&'static str],
}

impl TopicRule {
    /// Any keyword appearing as a substring of the (already lower-cased) text matches.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Topic used when no rule matches.
pub const DEFAULT_TOPIC: TopicLabel = TopicLabel::GeneralInquiry;

const PARKS: [&str; 5] = ["park", "playground", "library", "program", "community center"];
const SANITATION: [&str; 4] = ["trash", "recycling", "pickup", "sweeping"];
const TRANSPORTATION: [&str; 5] = ["pothole", "road", "traffic", "street", "crosswalk"];
const COMMUNITY_DEVELOPMENT: [&str; 4] = ["zoning", "permit", "construction", "license"];
const WATER: [&str; 4] = ["bill", "main break", "quality", "sewer"];
const PUBLIC_SAFETY: [&str; 4] = ["police", "fire", "officer", "emergency"];
const CODE_ENFORCEMENT: [&str; 3] = ["yard", "noise", "vehicle"];

/// Rules in priority order. Earlier rules win when keywords overlap.
pub const TOPIC_RULES: [TopicRule; 7] = [
    TopicRule { topic: TopicLabel::ParksRecLibrary, keywords: &PARKS },
    TopicRule { topic: TopicLabel::Sanitation, keywords: &SANITATION },
    TopicRule { topic: TopicLabel::Transportation, keywords: &TRANSPORTATION },
    TopicRule { topic: TopicLabel::CommunityDevelopment, keywords: &COMMUNITY_DEVELOPMENT },
    TopicRule { topic: TopicLabel::WaterResources, keywords: &WATER },
    TopicRule { topic: TopicLabel::PublicSafety, keywords: &PUBLIC_SAFETY },
    TopicRule { topic: TopicLabel::CodeEnforcement, keywords: &CODE_ENFORCEMENT },
];

/// First-match-wins keyword classifier over [`TOPIC_RULES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicClassifier;

impl TopicClassifier {
    pub fn new() -> Self {
        TopicClassifier
    }

    pub fn rules(&self) -> &'static [TopicRule] {
        &TOPIC_RULES
    }

    pub fn classify(&self, text: &str) -> TopicLabel {
        let lowered = text.to_lowercase();
        self.rules()
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.topic)
            .unwrap_or(DEFAULT_TOPIC)
    }
}
