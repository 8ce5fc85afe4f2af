//! Write-path validation for villain payloads.
//!
//! Applied on create and update only; reads, deletes and the random pick
//! never pass through here. The check is pure: no I/O, no store access.

use serde::Deserialize;

use crate::db::models::Villain;

/// An untrusted villain payload as it arrives on the wire. Every field is
/// optional so a missing field becomes a diagnostic instead of a
/// deserialization failure. A client-supplied `id` is accepted but only the
/// update path reads it; create ignores it.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillainPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub other_name: Option<String>,
    pub picture: Option<String>,
    pub powers: Option<String>,
    pub level: Option<i32>,
}

/// A villain that passed the gate. The store only ever sees this type, so a
/// partial record can never reach persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidVillain {
    pub name: String,
    pub other_name: String,
    pub picture: String,
    pub powers: String,
    pub level: i32,
}

impl From<Villain> for ValidVillain {
    fn from(v: Villain) -> Self {
        ValidVillain {
            name: v.name,
            other_name: v.other_name,
            picture: v.picture,
            powers: v.powers,
            level: v.level,
        }
    }
}

/// Check a payload and hand back the validated fields, or every field-level
/// problem found (all of them, not just the first).
pub fn validate(payload: &VillainPayload) -> Result<ValidVillain, Vec<String>> {
    let mut problems = Vec::new();

    match payload.name.as_deref() {
        None => problems.push("name must not be null".to_string()),
        Some("") => problems.push("name must not be empty".to_string()),
        Some(_) => {}
    }
    if payload.other_name.is_none() {
        problems.push("otherName must not be null".to_string());
    }
    if payload.picture.is_none() {
        problems.push("picture must not be null".to_string());
    }
    if payload.powers.is_none() {
        problems.push("powers must not be null".to_string());
    }
    // Zero is a legitimate level; only an absent field is invalid.
    if payload.level.is_none() {
        problems.push("level must not be null".to_string());
    }

    if !problems.is_empty() {
        return Err(problems);
    }

    Ok(ValidVillain {
        name: payload.name.clone().unwrap_or_default(),
        other_name: payload.other_name.clone().unwrap_or_default(),
        picture: payload.picture.clone().unwrap_or_default(),
        powers: payload.powers.clone().unwrap_or_default(),
        level: payload.level.unwrap_or_default(),
    })
}
