//! Skills assessment prompt.

use std::fmt::Write;

use crate::llm_client::prompts::{ADVISOR_PERSONA, MARKDOWN_INSTRUCTION};
use crate::skills::models::{SkillRating, SkillsAssessmentInput};

/// The four numbered instructions that close every skills assessment prompt.
pub const SKILLS_ASSESSMENT_INSTRUCTIONS: &str = "\
Please provide:
1. An analysis of my current skill levels, highlighting strengths and weaknesses.
2. The 3-4 most important areas for improvement for my role and field.
3. For each of those skills, 1-2 specific, actionable recommendations, including locally relevant learning platforms and resources.
4. A 3-month milestone plan for developing these skills.";

fn push_ratings(prompt: &mut String, header: &str, ratings: &[SkillRating]) {
    prompt.push_str(header);
    prompt.push('\n');
    for entry in ratings {
        // Writing to a String cannot fail
        let _ = writeln!(prompt, "- {}: {}/5", entry.skill, entry.rating);
    }
}

/// Builds the skills assessment prompt. Expects input that already passed `validate()`.
pub fn build_skills_assessment_prompt(input: &SkillsAssessmentInput) -> String {
    let mut prompt = format!(
        "{ADVISOR_PERSONA} Here is my self-assessment of my skills on a scale of 1 to 5.\n\n"
    );

    push_ratings(&mut prompt, "Technical Skills:", &input.technical_skills);
    prompt.push('\n');
    push_ratings(&mut prompt, "Soft Skills:", &input.soft_skills);

    let _ = write!(
        prompt,
        "\nCareer Field: {}\nCurrent Role: {}\n\n{SKILLS_ASSESSMENT_INSTRUCTIONS}\n\n{MARKDOWN_INSTRUCTION}",
        input.field, input.current_role
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::catalog::CurrentRole;

    fn input() -> SkillsAssessmentInput {
        SkillsAssessmentInput {
            current_role: CurrentRole::Student,
            field: "Technology".to_string(),
            technical_skills: vec![SkillRating::new("Programming", 4)],
            soft_skills: vec![SkillRating::new("Teamwork", 2)],
        }
    }

    #[test]
    fn test_prompt_contains_ratings_field_and_role() {
        let prompt = build_skills_assessment_prompt(&input());
        assert!(prompt.contains("Programming: 4/5"));
        assert!(prompt.contains("Teamwork: 2/5"));
        assert!(prompt.contains("Technology"));
        assert!(prompt.contains("Student"));
    }

    #[test]
    fn test_ratings_grouped_under_headers() {
        let prompt = build_skills_assessment_prompt(&input());
        assert!(prompt.contains("Technical Skills:\n- Programming: 4/5\n"));
        assert!(prompt.contains("Soft Skills:\n- Teamwork: 2/5\n"));
        let technical = prompt.find("Technical Skills:").unwrap();
        let soft = prompt.find("Soft Skills:").unwrap();
        assert!(technical < soft);
    }

    #[test]
    fn test_rating_order_is_preserved() {
        let mut i = input();
        i.technical_skills = vec![
            SkillRating::new("SQL", 1),
            SkillRating::new("Cloud Computing", 5),
        ];
        let prompt = build_skills_assessment_prompt(&i);
        assert!(prompt.contains("- SQL: 1/5\n- Cloud Computing: 5/5\n"));
    }

    #[test]
    fn test_instructions_are_numbered() {
        let prompt = build_skills_assessment_prompt(&input());
        for n in 1..=4 {
            assert!(prompt.contains(&format!("\n{n}. ")));
        }
        assert!(prompt.contains("3-month milestone plan"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let i = input();
        assert_eq!(
            build_skills_assessment_prompt(&i),
            build_skills_assessment_prompt(&i)
        );
    }
}
