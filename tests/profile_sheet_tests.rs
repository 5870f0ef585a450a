use caresheet::{
    assemble_sheet, generate_profile_sheet, DutyCategory, DutyTaxonomy, FixedAdvanceMeasurer,
    RoleDuties, SheetError, SheetOptions, StaffProfile, Verification,
};
use caresheet_layout::{LayoutElement, PositionedElement};
use std::collections::BTreeMap;

fn taxonomy() -> DutyTaxonomy {
    DutyTaxonomy {
        roles: vec![
            RoleDuties {
                role: "Nurse".to_string(),
                categories: vec![
                    DutyCategory {
                        name: "Medical".to_string(),
                        mandatory: vec!["Vitals".to_string(), "Medication".to_string()],
                        optional: vec!["Wound care".to_string()],
                    },
                    DutyCategory {
                        name: "Personal Care".to_string(),
                        mandatory: vec!["Bathing".to_string()],
                        optional: vec!["Grooming".to_string(), "Feeding".to_string()],
                    },
                ],
            },
            RoleDuties {
                role: "Attendant".to_string(),
                categories: vec![DutyCategory {
                    name: "Household".to_string(),
                    mandatory: vec![],
                    optional: vec!["Laundry".to_string(), "Cooking".to_string()],
                }],
            },
        ],
    }
}

fn profile() -> StaffProfile {
    let mut selected = BTreeMap::new();
    selected.insert(
        "Medical".to_string(),
        vec!["Vitals".to_string(), "Wound care".to_string()],
    );
    selected.insert("Personal Care".to_string(), vec!["Bathing".to_string()]);

    StaffProfile {
        name: "Maria Santos".to_string(),
        role: "Nurse".to_string(),
        phone: Some("+1 555 0100".to_string()),
        email: Some("maria@example.com".to_string()),
        address: Some("12 Elm Street, Springfield".to_string()),
        experience_years: Some(7),
        selected_duties: selected,
        verification: Verification {
            identity_verified: true,
            police_check: true,
            references_checked: false,
        },
        testimonials: vec!["Wonderful with my mother, always on time.".to_string()],
    }
}

fn texts(elements: &[PositionedElement]) -> Vec<&str> {
    elements
        .iter()
        .filter_map(|e| match &e.element {
            LayoutElement::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn sheet_contains_identity_and_selected_duties() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let elements =
        assemble_sheet(&profile(), &taxonomy(), &SheetOptions::default(), &measurer).unwrap();

    let all = texts(&elements);
    assert!(all.contains(&"Maria Santos"));
    assert!(all.contains(&"Nurse"));
    assert!(all.contains(&"Vitals"));
    assert!(all.contains(&"Wound care"));
    assert!(all.contains(&"Bathing"));
    // Selected but not in the selection map for this category.
    assert!(!all.contains(&"Medication"));
    // Other role's category never appears.
    assert!(!all.iter().any(|t| *t == "Household"));
}

#[test]
fn testimonials_render_when_space_allows() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let elements =
        assemble_sheet(&profile(), &taxonomy(), &SheetOptions::default(), &measurer).unwrap();
    assert!(texts(&elements).contains(&"Testimonials"));
}

#[test]
fn testimonials_omitted_below_cutoff() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let options = SheetOptions {
        // Force the block's start below the threshold.
        page_bottom_cutoff: 100.0,
        ..SheetOptions::default()
    };
    let elements = assemble_sheet(&profile(), &taxonomy(), &options, &measurer).unwrap();

    let all = texts(&elements);
    assert!(!all.contains(&"Testimonials"));
    // Both columns still laid out in full.
    assert!(all.contains(&"Maria Santos"));
    assert!(all.contains(&"Vitals"));
}

#[test]
fn empty_name_fails_before_layout() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let mut subject = profile();
    subject.name = "  ".to_string();
    let err = assemble_sheet(&subject, &taxonomy(), &SheetOptions::default(), &measurer)
        .unwrap_err();
    assert!(matches!(err, SheetError::MissingField(_)));
}

#[test]
fn unknown_role_fails_before_layout() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let mut subject = profile();
    subject.role = "Gardener".to_string();
    let err = assemble_sheet(&subject, &taxonomy(), &SheetOptions::default(), &measurer)
        .unwrap_err();
    assert!(matches!(err, SheetError::UnknownRole(role) if role == "Gardener"));
}

#[test]
fn generated_pdf_reflects_testimonial_cutoff() {
    let measurer = FixedAdvanceMeasurer::new(5.0);

    let with = generate_profile_sheet(
        &profile(),
        &taxonomy(),
        &SheetOptions::default(),
        &measurer,
    )
    .unwrap();
    assert!(with.starts_with(b"%PDF-"));
    assert!(contains(&with, b"(Testimonials)"));

    let options = SheetOptions {
        page_bottom_cutoff: 100.0,
        ..SheetOptions::default()
    };
    let without = generate_profile_sheet(&profile(), &taxonomy(), &options, &measurer).unwrap();
    assert!(!contains(&without, b"(Testimonials)"));
    assert!(contains(&without, b"(Maria Santos)"));
}

#[test]
fn generation_is_deterministic() {
    let measurer = FixedAdvanceMeasurer::new(5.0);
    let a = generate_profile_sheet(&profile(), &taxonomy(), &SheetOptions::default(), &measurer)
        .unwrap();
    let b = generate_profile_sheet(&profile(), &taxonomy(), &SheetOptions::default(), &measurer)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn models_deserialize_from_request_json() {
    let subject: StaffProfile = serde_json::from_str(
        r#"{
            "name": "Dev Patel",
            "role": "Attendant",
            "selected_duties": { "Household": ["Laundry"] },
            "testimonials": []
        }"#,
    )
    .unwrap();
    assert_eq!(subject.experience_years, None);
    assert!(!subject.verification.identity_verified);

    let measurer = FixedAdvanceMeasurer::new(5.0);
    let elements =
        assemble_sheet(&subject, &taxonomy(), &SheetOptions::default(), &measurer).unwrap();
    assert!(texts(&elements).contains(&"Laundry"));
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
