//! Record parsing, education level tags and table rows.
//!
//! Run with: `cargo test --test schools_test`
mod common;

use serde_json::json;

use school_catalog::models::pages::{LastKnownPagination, PageResult, ReportedPage};
use school_catalog::models::schools::{EducationLevel, SchoolRecord};
use school_catalog::view::table::{TableRow, table_rows};

use common::school;

#[test]
fn test_level_lookup_table() {
    assert_eq!(
        EducationLevel::classify(Some("Высшее образование - магистратура")),
        EducationLevel::Higher
    );
    assert_eq!(
        EducationLevel::classify(Some("Высшее профессиональное образование")),
        EducationLevel::Professional
    );
    assert_eq!(
        EducationLevel::classify(Some("Высшее образование - бакалавриат")),
        EducationLevel::Bachelor
    );
    assert_eq!(
        EducationLevel::classify(Some("Высшее образование - специалитет")),
        EducationLevel::Specialist
    );
    assert_eq!(
        EducationLevel::classify(Some("Среднее профессиональное образование")),
        EducationLevel::Secondary
    );
    assert_eq!(EducationLevel::classify(None), EducationLevel::Secondary);
}

#[test]
fn test_levels_are_deduplicated_in_first_seen_order() {
    let value = school(
        "Татарстан",
        "КФУ",
        "Казань",
        &[
            "Высшее образование - бакалавриат",
            "Основное общее образование",
            "Высшее образование - бакалавриат",
            "Высшее образование - магистратура",
            "",
        ],
    );

    let row = TableRow::from(&SchoolRecord::from_value(&value));

    assert_eq!(row.levels, vec!["Bachelor", "Secondary", "Higher"]);
}

#[test]
fn test_only_first_supplement_counts() {
    let value = json!({
        "edu_org": { "short_name": "Лицей" },
        "supplements": [
            { "educational_programs": [] },
            { "educational_programs": [ { "edu_level": { "name": "Высшее образование - магистратура" } } ] }
        ]
    });

    let row = TableRow::from(&SchoolRecord::from_value(&value));
    assert!(row.levels.is_empty());
}

#[test]
fn test_missing_fields_render_placeholders() {
    let row = TableRow::from(&SchoolRecord::from_value(&json!({})));

    assert_eq!(row.region, "-");
    assert_eq!(row.name, "Not set");
    assert_eq!(row.address, "-");
    assert!(row.levels.is_empty());
}

#[test]
fn test_wrong_typed_fields_do_not_break_the_record() {
    let value = json!({
        "edu_org": {
            "region": "Москва",
            "short_name": 17,
            "contact_info": { "post_address": "Тверская, 1" }
        },
        "supplements": { "unexpected": true }
    });

    let row = TableRow::from(&SchoolRecord::from_value(&value));

    assert_eq!(row.region, "-");
    assert_eq!(row.name, "17");
    assert_eq!(row.address, "Тверская, 1");
    assert!(row.levels.is_empty());
}

#[test]
fn test_numeric_text_fields_are_shown_as_text() {
    let value = json!({
        "edu_org": {
            "region": { "name": 77 },
            "short_name": 123,
            "contact_info": { "post_address": null }
        }
    });

    let row = TableRow::from(&SchoolRecord::from_value(&value));

    assert_eq!(row.region, "77");
    assert_eq!(row.name, "123");
    assert_eq!(row.address, "-");
}

#[test]
fn test_broken_program_still_counts_as_secondary() {
    let value = json!({
        "supplements": [
            {
                "educational_programs": [
                    { "edu_level": { "name": "Высшее образование - бакалавриат" } },
                    null,
                    "junk"
                ]
            }
        ]
    });

    let record = SchoolRecord::from_value(&value);

    assert_eq!(
        record.education_levels(),
        vec![EducationLevel::Bachelor, EducationLevel::Secondary]
    );
}

#[test]
fn test_junk_later_supplement_keeps_first_one() {
    let value = json!({
        "supplements": [
            { "educational_programs": [ { "edu_level": { "name": "Высшее образование - бакалавриат" } } ] },
            "garbage",
            null
        ]
    });

    let record = SchoolRecord::from_value(&value);

    assert_eq!(record.education_levels(), vec![EducationLevel::Bachelor]);
}

#[test]
fn test_rows_keep_input_order() {
    let records: Vec<SchoolRecord> = ["Школа №3", "Гимназия №1", "Лицей №2"]
        .iter()
        .map(|name| SchoolRecord::from_value(&school("Москва", name, "-", &[])))
        .collect();

    let names: Vec<String> = table_rows(&records).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Школа №3", "Гимназия №1", "Лицей №2"]);
}

#[test]
fn test_reported_page_reads_all_fields() {
    let body = json!({
        "data": {
            "list": [ school("Москва", "Школа №1", "Арбат, 1", &[]), null ],
            "page": 4,
            "pages_count": 12,
            "total_count": 118
        }
    });

    let reported = ReportedPage::from_body(&body);

    assert_eq!(reported.records.len(), 2);
    assert_eq!(reported.page, Some(4));
    assert_eq!(reported.pages_count, Some(12));
    assert_eq!(reported.total_count, Some(118));
}

#[test]
fn test_malformed_fields_fall_back_per_field() {
    let body = json!({
        "data": {
            "list": "nope",
            "page": 0,
            "pages_count": "12",
            "total_count": 30
        }
    });
    let known = LastKnownPagination {
        total_pages: 9,
        total_count: 88,
    };

    let result = PageResult::resolve(ReportedPage::from_body(&body), 2, known);

    assert!(result.records.is_empty());
    assert_eq!(result.page, 2);
    assert_eq!(result.total_pages, 9);
    assert_eq!(result.total_count, 30);
}

#[test]
fn test_body_without_data_keeps_everything_known() {
    let known = LastKnownPagination {
        total_pages: 5,
        total_count: 50,
    };

    let result = PageResult::resolve(ReportedPage::from_body(&json!([1, 2, 3])), 3, known);

    assert!(result.records.is_empty());
    assert_eq!(result.page, 3);
    assert_eq!(result.total_pages, 5);
    assert_eq!(result.total_count, 50);
}
