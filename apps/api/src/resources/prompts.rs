//! Learning resources prompt.

use crate::errors::AppError;
use crate::llm_client::prompts::ADVISOR_PERSONA;
use crate::resources::models::LearningResourcesInput;

/// Number of recommendations the model is asked for.
pub const RECOMMENDATION_COUNT: usize = 5;

/// Builds the learning resources prompt, or rejects the request if either selection is missing.
pub fn build_learning_resources_prompt(input: &LearningResourcesInput) -> Result<String, AppError> {
    let field = input.field.trim();
    let mut missing = Vec::new();
    if field.is_empty() {
        missing.push("field");
    }
    let Some(resource_type) = input.resource_type else {
        missing.push("resource_type");
        return Err(AppError::missing_fields(&missing));
    };
    if !missing.is_empty() {
        return Err(AppError::missing_fields(&missing));
    }

    Ok(format!(
        "{ADVISOR_PERSONA} Recommend exactly {RECOMMENDATION_COUNT} {resource_type} \
         for someone who wants to build a career in {field}.\n\n\
         Use exactly this markdown list format, one item per recommendation and nothing else:\n\
         1. **Name**: one-sentence description\n   \
         - Level: Beginner, Intermediate or Advanced\n   \
         - Why it helps: how it builds skills for {field}\n   \
         - Where to find it: platform, publisher or link"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::models::ResourceType;

    fn input() -> LearningResourcesInput {
        LearningResourcesInput {
            field: "Data Science".to_string(),
            resource_type: Some(ResourceType::OnlineCourses),
        }
    }

    #[test]
    fn test_prompt_asks_for_exactly_five() {
        let prompt = build_learning_resources_prompt(&input()).unwrap();
        assert!(prompt.contains("Recommend exactly 5 Online Courses"));
        assert!(prompt.contains("build a career in Data Science."));
    }

    #[test]
    fn test_prompt_has_fixed_list_format() {
        let prompt = build_learning_resources_prompt(&input()).unwrap();
        assert!(prompt.contains("\n1. **Name**: one-sentence description\n   - Level:"));
        assert!(prompt.contains("   - Where to find it:"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let i = input();
        assert_eq!(
            build_learning_resources_prompt(&i).unwrap(),
            build_learning_resources_prompt(&i).unwrap()
        );
    }

    #[test]
    fn test_missing_selections_rejected() {
        let err = build_learning_resources_prompt(&LearningResourcesInput::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("field"));
        assert!(err.contains("resource_type"));
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut i = input();
        i.field = "  ".to_string();
        assert!(build_learning_resources_prompt(&i).is_err());
    }
}
