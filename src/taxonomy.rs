//! The duty taxonomy: role -> categories -> mandatory/optional duty labels.
//! Supplied by the caller alongside the subject record; the assembler never
//! invents duties of its own.

use caresheet_layout::{ChipLabel, DutyGroup};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyTaxonomy {
    pub roles: Vec<RoleDuties>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDuties {
    pub role: String,
    pub categories: Vec<DutyCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DutyCategory {
    pub name: String,
    /// Duties every holder of this role must offer.
    #[serde(default)]
    pub mandatory: Vec<String>,
    #[serde(default)]
    pub optional: Vec<String>,
}

impl DutyTaxonomy {
    /// Looks up the duty set for a role, case-insensitively.
    pub fn for_role(&self, role: &str) -> Option<&RoleDuties> {
        self.roles
            .iter()
            .find(|r| r.role.eq_ignore_ascii_case(role))
    }
}

impl RoleDuties {
    /// Builds the chip groups for a subject's selection: taxonomy category
    /// order is kept, mandatory duties come before optional ones within a
    /// category, and only selected duties appear. Selected labels unknown
    /// to the taxonomy are dropped.
    pub fn groups_for(&self, selected: &BTreeMap<String, Vec<String>>) -> Vec<DutyGroup> {
        self.categories
            .iter()
            .map(|category| {
                let picks = selected.get(&category.name);
                let is_selected = |duty: &String| {
                    picks
                        .map(|p| p.iter().any(|s| s.eq_ignore_ascii_case(duty)))
                        .unwrap_or(false)
                };

                let mut labels: Vec<ChipLabel> = category
                    .mandatory
                    .iter()
                    .filter(|d| is_selected(d))
                    .map(|d| ChipLabel::required(d.clone()))
                    .collect();
                labels.extend(
                    category
                        .optional
                        .iter()
                        .filter(|d| is_selected(d))
                        .map(|d| ChipLabel::new(d.clone())),
                );

                DutyGroup {
                    title: category.name.clone(),
                    labels,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> DutyTaxonomy {
        DutyTaxonomy {
            roles: vec![RoleDuties {
                role: "Nurse".to_string(),
                categories: vec![
                    DutyCategory {
                        name: "Medical".to_string(),
                        mandatory: vec!["Vitals".to_string(), "Medication".to_string()],
                        optional: vec!["Wound care".to_string()],
                    },
                    DutyCategory {
                        name: "Household".to_string(),
                        mandatory: vec![],
                        optional: vec!["Laundry".to_string()],
                    },
                ],
            }],
        }
    }

    #[test]
    fn role_lookup_is_case_insensitive() {
        let t = taxonomy();
        assert!(t.for_role("nurse").is_some());
        assert!(t.for_role("NURSE").is_some());
        assert!(t.for_role("attendant").is_none());
    }

    #[test]
    fn groups_keep_order_and_flag_mandatory() {
        let t = taxonomy();
        let mut selected = BTreeMap::new();
        selected.insert(
            "Medical".to_string(),
            vec!["Wound care".to_string(), "Vitals".to_string()],
        );

        let groups = t.for_role("Nurse").unwrap().groups_for(&selected);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Medical");
        assert_eq!(groups[0].labels.len(), 2);
        // Mandatory first, and marked.
        assert_eq!(groups[0].labels[0].text, "Vitals");
        assert!(groups[0].labels[0].required);
        assert_eq!(groups[0].labels[1].text, "Wound care");
        assert!(!groups[0].labels[1].required);
        // Nothing selected for Household.
        assert!(groups[1].labels.is_empty());
    }

    #[test]
    fn unknown_selected_labels_are_dropped() {
        let t = taxonomy();
        let mut selected = BTreeMap::new();
        selected.insert("Medical".to_string(), vec!["Surgery".to_string()]);
        let groups = t.for_role("Nurse").unwrap().groups_for(&selected);
        assert!(groups[0].labels.is_empty());
    }
}
