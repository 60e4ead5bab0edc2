//! Static catalogs behind the skills assessment form.
//!
//! Pure data: lookup-with-default is the only computation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Career field → ordered technical skills. Lookup is exact-match on the field name.
pub const FIELD_SKILLS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &[
            "Programming",
            "Web Development",
            "Cloud Computing",
            "Cybersecurity",
            "Database Management",
            "DevOps",
            "System Design",
        ],
    ),
    (
        "Business",
        &[
            "Financial Analysis",
            "Project Management",
            "Strategic Planning",
            "Market Research",
            "Negotiation",
            "Business Analytics",
        ],
    ),
    (
        "Healthcare",
        &[
            "Patient Care",
            "Medical Terminology",
            "Clinical Documentation",
            "Healthcare Regulations",
            "Medical Technology",
            "Public Health",
        ],
    ),
    (
        "Creative Arts",
        &[
            "Graphic Design",
            "Digital Illustration",
            "Video Editing",
            "Photography",
            "UI/UX Design",
            "Creative Writing",
        ],
    ),
    (
        "Science & Research",
        &[
            "Research Methodology",
            "Data Analysis",
            "Laboratory Techniques",
            "Scientific Writing",
            "Statistical Analysis",
            "Literature Review",
        ],
    ),
    (
        "Education",
        &[
            "Curriculum Development",
            "Classroom Management",
            "Educational Technology",
            "Assessment Design",
            "Instructional Design",
            "Student Counseling",
        ],
    ),
    (
        "Engineering",
        &[
            "CAD Design",
            "Technical Drawing",
            "Project Planning",
            "Quality Control",
            "Systems Engineering",
            "Materials Science",
            "Problem Analysis",
        ],
    ),
    (
        "Marketing",
        &[
            "Digital Marketing",
            "Content Creation",
            "SEO/SEM",
            "Social Media Marketing",
            "Marketing Analytics",
            "Brand Management",
        ],
    ),
    (
        "Data Science",
        &[
            "Python",
            "Machine Learning",
            "Statistics",
            "Data Visualization",
            "SQL",
            "Big Data Tools",
            "Deep Learning",
        ],
    ),
];

/// Returned for any field not in `FIELD_SKILLS`.
pub const GENERIC_SKILLS: &[&str] = &[
    "Technical Knowledge",
    "Industry Tools",
    "Domain Expertise",
    "Analytical Skills",
    "Research Skills",
    "Technical Writing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Leadership",
    "Problem Solving",
    "Teamwork",
    "Adaptability",
    "Time Management",
    "Creativity",
];

pub fn field_names() -> Vec<&'static str> {
    FIELD_SKILLS.iter().map(|(field, _)| *field).collect()
}

/// Technical skills for a career field, falling back to `GENERIC_SKILLS`.
pub fn technical_skills_for(field: &str) -> &'static [&'static str] {
    FIELD_SKILLS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, skills)| *skills)
        .unwrap_or(GENERIC_SKILLS)
}

/// The user's current career stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentRole {
    Student,
    #[serde(rename = "Entry Level")]
    EntryLevel,
    #[serde(rename = "Mid Level")]
    MidLevel,
    #[serde(rename = "Senior Level")]
    SeniorLevel,
    Manager,
    #[serde(rename = "Career Changer")]
    CareerChanger,
    Freelancer,
}

impl CurrentRole {
    pub const ALL: [CurrentRole; 7] = [
        CurrentRole::Student,
        CurrentRole::EntryLevel,
        CurrentRole::MidLevel,
        CurrentRole::SeniorLevel,
        CurrentRole::Manager,
        CurrentRole::CareerChanger,
        CurrentRole::Freelancer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CurrentRole::Student => "Student",
            CurrentRole::EntryLevel => "Entry Level",
            CurrentRole::MidLevel => "Mid Level",
            CurrentRole::SeniorLevel => "Senior Level",
            CurrentRole::Manager => "Manager",
            CurrentRole::CareerChanger => "Career Changer",
            CurrentRole::Freelancer => "Freelancer",
        }
    }
}

impl fmt::Display for CurrentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
