use std::fmt;

use serde::{Deserialize, Serialize};

use crate::forms::null_as_empty;

/// Kind of learning material to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "Online Courses")]
    OnlineCourses,
    Books,
    Certifications,
    #[serde(rename = "YouTube Channels")]
    YouTubeChannels,
    #[serde(rename = "Practice Projects")]
    PracticeProjects,
}

impl ResourceType {
    pub const ALL: [ResourceType; 5] = [
        ResourceType::OnlineCourses,
        ResourceType::Books,
        ResourceType::Certifications,
        ResourceType::YouTubeChannels,
        ResourceType::PracticeProjects,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::OnlineCourses => "Online Courses",
            ResourceType::Books => "Books",
            ResourceType::Certifications => "Certifications",
            ResourceType::YouTubeChannels => "YouTube Channels",
            ResourceType::PracticeProjects => "Practice Projects",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningResourcesInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
}
