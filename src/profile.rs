//! The subject record: the staff member whose profile sheet is generated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfile {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    /// Category name -> duty labels the subject performs. Categories and
    /// labels are matched against the duty taxonomy during assembly.
    #[serde(default)]
    pub selected_duties: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub verification: Verification,
    /// Free-text client testimonials, appended below both columns when
    /// vertical space allows.
    #[serde(default)]
    pub testimonials: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Verification {
    #[serde(default)]
    pub identity_verified: bool,
    #[serde(default)]
    pub police_check: bool,
    #[serde(default)]
    pub references_checked: bool,
}
