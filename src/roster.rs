//! The structured roster produced by a parse.
//!
//! This is the crate's output contract. It is shared verbatim with the CSV
//! structured importer and the review/apply UI (both external), so the JSON
//! field names are fixed — camelCase, matching the downstream consumers.
//! A `ParsedRoster` is constructed fresh per parse call and never mutated
//! after return; the caller owns all subsequent edits.

use serde::{Deserialize, Serialize};

/// How much of the sheet the parser was able to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseOutcome {
    /// Word geometry was available and the PCA/RN passes ran
    Full,
    /// Only the text-level leadership pass ran (no usable geometry)
    LeadershipOnly,
    /// Nothing could be extracted at all
    Empty,
}

/// Care level for one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareLevel {
    /// Telemetry monitoring
    Tele,
    /// Medical-surgical
    #[serde(rename = "MS")]
    MedSurg,
}

impl std::fmt::Display for CareLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CareLevel::Tele => write!(f, "Tele"),
            CareLevel::MedSurg => write!(f, "MS"),
        }
    }
}

/// Sheet-level leadership and labeling fields, extracted without geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMeta {
    /// Charge nurse name, if labeled on the sheet
    pub charge_nurse: Option<String>,
    /// Resource RN / clinical mentor name
    pub resource_rn: Option<String>,
    /// CTA name
    pub cta: Option<String>,
    /// Unit label as written on the sheet
    pub unit_label: Option<String>,
    /// Date label as written on the sheet (not parsed as a date)
    pub date_label: Option<String>,
}

impl RosterMeta {
    /// True when no meta field was found.
    pub fn is_empty(&self) -> bool {
        self.charge_nurse.is_none()
            && self.resource_rn.is_none()
            && self.cta.is_none()
            && self.unit_label.is_none()
            && self.date_label.is_none()
    }
}

/// One PCA and the rooms they cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcaAssignment {
    /// PCA name
    pub name: String,
    /// Declared patient count from the sheet, or the extracted room count
    pub count: usize,
    /// Room codes, in sheet order
    pub rooms: Vec<String>,
}

/// One room in an RN's assignment, with care level and acuity notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignment {
    /// Normalized room code
    pub room: String,
    /// Care level inferred from nearby words, if any
    pub level_of_care: Option<CareLevel>,
    /// Acuity note tags, de-duplicated in first-match order
    pub notes: Vec<String>,
}

impl RoomAssignment {
    /// A bare assignment with no detail data.
    pub fn bare(room: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            level_of_care: None,
            notes: vec![],
        }
    }
}

/// One RN and their room assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RnAssignment {
    /// RN name (or the literal `"RN"` for the fallback bucket)
    pub name: String,
    /// Rooms claimed by this RN
    pub rooms: Vec<RoomAssignment>,
}

/// The assembled roster for one sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRoster {
    /// Degradation level of this parse
    pub outcome: ParseOutcome,
    /// Sheet-level meta fields
    pub meta: RosterMeta,
    /// PCA assignments, sorted by name
    pub pcas: Vec<PcaAssignment>,
    /// RN assignments, in band order (left to right)
    pub rns: Vec<RnAssignment>,
}

impl ParsedRoster {
    /// A roster with nothing in it.
    pub fn empty() -> Self {
        Self {
            outcome: ParseOutcome::Empty,
            meta: RosterMeta::default(),
            pcas: vec![],
            rns: vec![],
        }
    }

    /// True when neither meta nor any assignment was extracted.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty() && self.pcas.is_empty() && self.rns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_care_level_serde_names() {
        assert_eq!(serde_json::to_string(&CareLevel::Tele).unwrap(), "\"Tele\"");
        assert_eq!(serde_json::to_string(&CareLevel::MedSurg).unwrap(), "\"MS\"");
        assert_eq!(CareLevel::MedSurg.to_string(), "MS");
    }

    #[test]
    fn test_output_contract_field_names() {
        let roster = ParsedRoster {
            outcome: ParseOutcome::Full,
            meta: RosterMeta {
                charge_nurse: Some("Smith".to_string()),
                ..Default::default()
            },
            pcas: vec![],
            rns: vec![RnAssignment {
                name: "Jones".to_string(),
                rooms: vec![RoomAssignment {
                    room: "214B".to_string(),
                    level_of_care: Some(CareLevel::Tele),
                    notes: vec!["ISO".to_string()],
                }],
            }],
        };
        let json = serde_json::to_string(&roster).unwrap();

        // The downstream consumers key on these exact names
        assert!(json.contains("\"chargeNurse\":\"Smith\""));
        assert!(json.contains("\"levelOfCare\":\"Tele\""));
        assert!(json.contains("\"resourceRn\":null"));
    }

    #[test]
    fn test_roster_json_round_trip() {
        let roster = ParsedRoster {
            outcome: ParseOutcome::LeadershipOnly,
            meta: RosterMeta {
                resource_rn: Some("Lee".to_string()),
                date_label: Some("7/14/25".to_string()),
                ..Default::default()
            },
            pcas: vec![PcaAssignment {
                name: "Park".to_string(),
                count: 6,
                rooms: vec!["214".to_string(), "215".to_string()],
            }],
            rns: vec![],
        };
        let json = serde_json::to_string(&roster).unwrap();
        let back: ParsedRoster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
    }

    #[test]
    fn test_empty_roster() {
        let roster = ParsedRoster::empty();
        assert!(roster.is_empty());
        assert_eq!(roster.outcome, ParseOutcome::Empty);

        let with_meta = ParsedRoster {
            meta: RosterMeta {
                cta: Some("Jones".to_string()),
                ..Default::default()
            },
            ..ParsedRoster::empty()
        };
        assert!(!with_meta.is_empty());
    }
}
