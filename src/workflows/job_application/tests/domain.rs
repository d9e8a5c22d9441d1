use super::common::*;
use crate::workflows::job_application::domain::{
    FormData, FormField, Skill, SkillSelection, UnknownFieldName, UnknownSkillName,
};

#[test]
fn partial_skill_maps_fill_in_unchecked_skills() {
    let data: FormData = serde_json::from_str(r#"{"additionalSkills":{"Python":true}}"#)
        .expect("partial form parses");

    assert_eq!(data.additional_skills, skills(&[Skill::Python]));

    let json = serde_json::to_value(&data).expect("serializes");
    assert_eq!(
        json["additionalSkills"],
        serde_json::json!({
            "Cpp": false,
            "JavaScript": false,
            "CSS": false,
            "Python": true,
            "Java": false,
        })
    );
}

#[test]
fn missing_skill_map_defaults_to_all_unchecked() {
    let data: FormData = serde_json::from_str(r#"{"fullName":"Ada"}"#).expect("parses");

    assert_eq!(data.additional_skills, SkillSelection::default());
    assert_eq!(data.additional_skills.checked().count(), 0);
}

#[test]
fn unknown_names_carry_the_offending_text() {
    assert_eq!(
        "nickname".parse::<FormField>(),
        Err(UnknownFieldName("nickname".to_string()))
    );
    assert_eq!(
        "Rust".parse::<Skill>(),
        Err(UnknownSkillName("Rust".to_string()))
    );
    assert_eq!("portfolioURL".parse::<FormField>(), Ok(FormField::PortfolioUrl));
    assert_eq!("CSS".parse::<Skill>(), Ok(Skill::Css));
}
