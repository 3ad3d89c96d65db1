use serde::{Deserialize, Serialize};

/// One channel-specific unit of the distribution plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentArtifact {
    /// Slug of the channel name plus its 1-based position in the channel list
    pub id: String,
    pub title: String,
    /// One-line summary of what the artifact is for
    pub description: String,
    pub body: String,
}

/// The full content package returned for one brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub headline_options: Vec<String>,
    pub mission_summary: String,
    pub creative_angle: String,
    pub audience_insights: Vec<String>,
    /// Section titles, in draft order
    pub outline: Vec<String>,
    /// `## Title` heading line per section followed by its paragraph
    pub draft: String,
    /// One artifact per requested channel, same order as the request
    pub distribution_plan: Vec<AgentArtifact>,
    pub call_to_action_variants: Vec<String>,
    pub sources: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_camel_case() {
        let response = GenerationResponse {
            headline_options: vec!["A".to_string()],
            mission_summary: "M".to_string(),
            creative_angle: "C".to_string(),
            audience_insights: vec![],
            outline: vec![],
            draft: String::new(),
            distribution_plan: vec![AgentArtifact {
                id: "email-1".to_string(),
                title: "T".to_string(),
                description: "D".to_string(),
                body: "B".to_string(),
            }],
            call_to_action_variants: vec![],
            sources: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["missionSummary"], "M");
        assert_eq!(json["distributionPlan"][0]["id"], "email-1");
        assert!(json["callToActionVariants"].is_array());
    }
}
