//! Career advice prompt.
//!
//! Values are interpolated verbatim; the prompt is only ever read by the model.

use crate::advisor::models::ProfileInput;
use crate::errors::AppError;
use crate::llm_client::prompts::{ADVISOR_PERSONA, MARKDOWN_INSTRUCTION};

/// Fixed guidance appended after the user's own details.
pub const CAREER_ADVICE_INSTRUCTIONS: &str = "Please give me warm, encouraging, friendly, \
    and personalized guidance. \
    List 2-4 matching career domains with descriptions, \
    skills I should develop, and 1-2 learning resources or project ideas for each. \
    Conclude with a motivational tip.";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Builds the career advice prompt, or rejects the submission if a required field is empty.
///
/// Hobbies are required only when `require_hobbies` is set, and are included
/// only when present.
pub fn build_career_advice_prompt(
    profile: &ProfileInput,
    require_hobbies: bool,
) -> Result<String, AppError> {
    let hobbies = profile.hobbies.as_deref().filter(|h| !is_blank(h));

    let mut missing = Vec::new();
    if is_blank(&profile.name) {
        missing.push("name");
    }
    if profile.education_level.is_none() {
        missing.push("education_level");
    }
    if is_blank(&profile.interests) {
        missing.push("interests");
    }
    if is_blank(&profile.skills_have) {
        missing.push("skills_have");
    }
    if is_blank(&profile.skills_want) {
        missing.push("skills_want");
    }
    if require_hobbies && hobbies.is_none() {
        missing.push("hobbies");
    }

    let Some(education_level) = profile.education_level.filter(|_| missing.is_empty()) else {
        return Err(AppError::missing_fields(&missing));
    };

    let mut prompt = format!(
        "{ADVISOR_PERSONA} My name is {name}. {education} \
         My interests are: {interests}. \
         My current skills are: {skills_have}. \
         I want to learn: {skills_want}. ",
        name = profile.name,
        education = education_level.self_description(),
        interests = profile.interests,
        skills_have = profile.skills_have,
        skills_want = profile.skills_want,
    );
    if let Some(hobbies) = hobbies {
        prompt.push_str(&format!("My hobbies are: {hobbies}. "));
    }
    prompt.push_str(CAREER_ADVICE_INSTRUCTIONS);
    prompt.push(' ');
    prompt.push_str(MARKDOWN_INSTRUCTION);

    Ok(prompt)
}
