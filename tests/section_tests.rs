mod test_utils;

use test_utils::*;

use profile_editor::constants::MANDATORY_DEGREES;
use profile_editor::errors::EditorError;
use profile_editor::notifications::BufferedNotifier;
use profile_editor::use_cases::education::EducationSection;
use profile_editor::use_cases::session::SectionEditor;

type EducationEditor = SectionEditor<EducationSection, MockApi, BufferedNotifier>;

fn fill_education_row(editor: &mut EducationEditor, index: usize) {
    for (field, value) in [
        ("institution", "IIT Delhi"),
        ("start_month", "July"),
        ("start_year", "2014"),
        ("end_month", "May"),
        ("end_year", "2016"),
    ] {
        editor.set_field(index, field, value).unwrap();
    }
}

#[tokio::test]
async fn education_merge_seeds_every_mandatory_level() {
    let (workspace, _notifier) = workspace_with(MockApi::new(), sample_profile());
    let editor = workspace.open_education();
    let entries = editor.entries();

    assert_eq!(entries.len(), 5);
    for (entry, degree) in entries.iter().zip(MANDATORY_DEGREES) {
        assert_eq!(entry.degree, degree);
        assert!(entry.mandatory);
    }

    // The existing Graduation record filled its slot...
    assert_eq!(entries[2].institution, "Graphic Era Hill University");
    // ...unmatched levels stayed blank...
    assert!(entries[0].institution.is_empty());
    // ...and the leftover record was appended as optional.
    assert_eq!(entries[4].degree, "Diploma");
    assert!(!entries[4].mandatory);
}

#[tokio::test]
async fn education_rows_split_stored_dates() {
    let (workspace, _notifier) = workspace_with(MockApi::new(), sample_profile());
    let editor = workspace.open_education();
    let graduation = &editor.entries()[2];

    assert_eq!(graduation.start_month, "August");
    assert_eq!(graduation.start_year, "2018");
    assert_eq!(graduation.end_month, "June");
    assert_eq!(graduation.end_year, "2022");
}

#[tokio::test]
async fn campus_submits_empty_when_none_selected() {
    let mut profile = blank_profile();
    profile.education.push(education_record(
        "Graduation",
        "Graphic Era Hill University",
        "August 2018",
        "June 2022",
    ));

    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| {
            let education = update.education.as_ref().unwrap();
            education.len() == 4
                && education
                    .iter()
                    .find(|r| r.degree == "Graduation")
                    .is_some_and(|r| {
                        r.institution == "Graphic Era Hill University" && r.campus.is_empty()
                    })
        })
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, profile);
    let mut editor = workspace.open_education();
    for index in [0, 1, 3] {
        fill_education_row(&mut editor, index);
    }

    editor.save().await.unwrap();
}

#[tokio::test]
async fn campus_is_cleared_for_other_institutions() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| {
            update
                .education
                .as_ref()
                .unwrap()
                .iter()
                .all(|r| r.campus.is_empty())
        })
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, blank_profile());
    let mut editor = workspace.open_education();
    for index in 0..4 {
        fill_education_row(&mut editor, index);
    }
    // A stale campus selection must not survive an institution change.
    editor.set_field(2, "campus", "Dehradun").unwrap();

    editor.save().await.unwrap();
}

#[tokio::test]
async fn unknown_campus_is_rejected() {
    let mut api = MockApi::new();
    api.expect_update_profile().times(0);

    let (workspace, _notifier) = workspace_with(api, blank_profile());
    let mut editor = workspace.open_education();
    for index in 0..4 {
        fill_education_row(&mut editor, index);
    }
    editor
        .set_field(2, "institution", "Graphic Era Hill University")
        .unwrap();
    editor.set_field(2, "campus", "Mars").unwrap();

    let err = editor.save().await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    assert!(editor.error_for(2, "campus").is_some());
}

#[tokio::test]
async fn unknown_selection_values_are_rejected() {
    let mut api = MockApi::new();
    api.expect_update_profile().times(0);

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_experience();
    editor.set_field(0, "employment_type", "Moonlighting").unwrap();
    editor.set_field(0, "location_type", "Underwater").unwrap();
    editor.set_field(0, "start_month", "Mar").unwrap();

    let err = editor.save().await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    assert!(editor.error_for(0, "employment_type").is_some());
    assert!(editor.error_for(0, "location_type").is_some());
    assert!(editor.error_for(0, "start_month").is_some());
}

#[tokio::test]
async fn preferred_locations_drop_blank_entries() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| {
            update.job_preferences.as_ref().unwrap().preferred_locations
                == vec!["Delhi".to_string(), "Mumbai".to_string()]
        })
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_job_preferences();
    editor
        .set_field(0, "preferred_locations", "Delhi, Mumbai, ")
        .unwrap();

    editor.save().await.unwrap();
}

#[tokio::test]
async fn malformed_resume_link_blocks_save() {
    let mut api = MockApi::new();
    api.expect_update_profile().times(0);

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_job_preferences();
    editor.set_field(0, "resume_link", "not-a-url").unwrap();

    let err = editor.save().await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    assert!(editor.error_for(0, "resume_link").is_some());
}

#[tokio::test]
async fn wellformed_resume_link_saves() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_job_preferences();
    editor
        .set_field(0, "resume_link", "https://example.com/r.pdf")
        .unwrap();

    editor.save().await.unwrap();
}

#[tokio::test]
async fn ongoing_experience_round_trips_present_sentinel() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| {
            let record = &update.experience.as_ref().unwrap()[0];
            record.end_date == "Present"
                && record.location == "Mumbai, Maharashtra, India"
                && record.skills == vec!["Rust".to_string(), "Tokio".to_string()]
        })
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_experience();

    let entry = &editor.entries()[0];
    assert!(entry.current);
    assert!(entry.end_month.is_empty() && entry.end_year.is_empty());

    editor.save().await.unwrap();
}

#[tokio::test]
async fn finished_experience_requires_end_date() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| update.experience.as_ref().unwrap()[0].end_date == "June 2023")
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_experience();
    editor.set_field(0, "current", "false").unwrap();

    let err = editor.save().await.unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    assert!(editor.error_for(0, "end_month").is_some());
    assert!(editor.error_for(0, "end_year").is_some());

    editor.set_field(0, "end_month", "June").unwrap();
    editor.set_field(0, "end_year", "2023").unwrap();
    editor.save().await.unwrap();
}

#[tokio::test]
async fn changing_country_resets_dependent_selections() {
    let (workspace, _notifier) = workspace_with(MockApi::new(), sample_profile());
    let mut editor = workspace.open_experience();

    assert_eq!(editor.entries()[0].country, "India");
    assert_eq!(editor.entries()[0].state, "Maharashtra");
    assert_eq!(editor.entries()[0].city, "Mumbai");

    editor.set_field(0, "country", "Canada").unwrap();

    assert_eq!(editor.entries()[0].country, "Canada");
    assert!(editor.entries()[0].state.is_empty());
    assert!(editor.entries()[0].city.is_empty());
}

#[tokio::test]
async fn unknown_stored_location_loads_as_empty_cascade() {
    let mut profile = blank_profile();
    let mut record = experience_record("Engineer", "Wayne Enterprises");
    record.location = "Gotham, Somewhere".to_string();
    profile.experience.push(record);

    let (workspace, _notifier) = workspace_with(MockApi::new(), profile);
    let editor = workspace.open_experience();

    let entry = &editor.entries()[0];
    assert!(entry.country.is_empty());
    assert!(entry.state.is_empty());
    assert!(entry.city.is_empty());
}

#[tokio::test]
async fn skills_section_splits_comma_list() {
    let mut api = MockApi::new();
    api.expect_update_profile()
        .times(1)
        .withf(|update| update.skills.as_ref().unwrap() == &vec!["Rust".to_string(), "Go".to_string()])
        .returning(|_| Ok(canonical_response()));

    let (workspace, _notifier) = workspace_with(api, sample_profile());
    let mut editor = workspace.open_skills();
    editor.set_field(0, "skills", "Rust, , Go").unwrap();

    editor.save().await.unwrap();
}
