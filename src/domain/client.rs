//! Clients: identity, construction parameters, and per-(status, year)
//! numbering.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{DEFAULT_CONSTRUCTION_DAYS, DEFAULT_DEPOSIT};
use crate::domain::common::{Displayable, Identifiable};

/// Project phase. A client may move between phases in any direction;
/// each move renumbers the client within the new (status, year) scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Deposit,
    Building,
    Built,
}

impl fmt::Display for ClientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ClientStatus::Deposit => "deposit",
            ClientStatus::Building => "building",
            ClientStatus::Built => "built",
        };
        f.write_str(label)
    }
}

/// A client number scoped to (status, year), rendered as `YYYY-NNN`.
///
/// The sequence is zero-padded to three digits and grows past `999`
/// without truncation. Allocation is a max+1 scan, not a unique
/// allocator — see `ClientService::next_number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientNumber {
    pub year: i32,
    pub seq: u32,
}

impl ClientNumber {
    pub fn new(year: i32, seq: u32) -> Self {
        Self { year, seq }
    }
}

impl fmt::Display for ClientNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.year, self.seq)
    }
}

#[derive(Debug, Error)]
#[error("malformed client number: `{0}`")]
pub struct ParseClientNumberError(pub String);

impl FromStr for ClientNumber {
    type Err = ParseClientNumberError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (year, seq) = raw
            .split_once('-')
            .ok_or_else(|| ParseClientNumberError(raw.to_string()))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseClientNumberError(raw.to_string()))?;
        let seq = seq
            .parse::<u32>()
            .map_err(|_| ParseClientNumberError(raw.to_string()))?;
        Ok(Self { year, seq })
    }
}

impl Serialize for ClientNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClientNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A tracked construction client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub client_number: ClientNumber,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub iin: String,
    pub construction_address: String,
    pub living_address: String,
    pub object_name: String,
    pub construction_days: u32,
    pub total_amount: i64,
    pub deposit: i64,
    pub first_payment: i64,
    pub second_payment: i64,
    pub third_payment: i64,
    pub fourth_payment: i64,
    pub year: i32,
    #[serde(default)]
    pub hide_project_icon: bool,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

impl Client {
    pub fn from_draft(draft: ClientDraft, client_number: ClientNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_number,
            last_name: draft.last_name,
            first_name: draft.first_name,
            middle_name: draft.middle_name,
            phone: draft.phone,
            email: draft.email,
            iin: draft.iin,
            construction_address: draft.construction_address,
            living_address: draft.living_address,
            object_name: draft.object_name,
            construction_days: draft.construction_days,
            total_amount: draft.total_amount,
            deposit: draft.deposit,
            first_payment: draft.first_payment,
            second_payment: draft.second_payment,
            third_payment: draft.third_payment,
            fourth_payment: draft.fourth_payment,
            year: draft.year,
            hide_project_icon: draft.hide_project_icon,
            status: draft.status,
            created_at: Utc::now(),
        }
    }

    /// The `"<Last> <First>"` label shared with the client's icon
    /// categories on the main grid.
    pub fn icon_label(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Client {
    fn display_label(&self) -> String {
        format!("{} {}", self.client_number, self.icon_label())
    }
}

/// Form input for a client that has not been numbered yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub phone: String,
    pub email: String,
    pub iin: String,
    pub construction_address: String,
    pub living_address: String,
    pub object_name: String,
    pub construction_days: u32,
    pub total_amount: i64,
    pub deposit: i64,
    pub first_payment: i64,
    pub second_payment: i64,
    pub third_payment: i64,
    pub fourth_payment: i64,
    pub year: i32,
    #[serde(default)]
    pub hide_project_icon: bool,
    pub status: ClientStatus,
}

impl ClientDraft {
    /// New draft with the form's defaults: deposit status, the standard
    /// deposit amount, and the standard construction term.
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: String::new(),
            phone: String::new(),
            email: String::new(),
            iin: String::new(),
            construction_address: String::new(),
            living_address: String::new(),
            object_name: String::new(),
            construction_days: DEFAULT_CONSTRUCTION_DAYS,
            total_amount: 0,
            deposit: DEFAULT_DEPOSIT,
            first_payment: 0,
            second_payment: 0,
            third_payment: 0,
            fourth_payment: 0,
            year,
            hide_project_icon: false,
            status: ClientStatus::Deposit,
        }
    }
}

impl Default for ClientDraft {
    fn default() -> Self {
        Self::new("", "", Utc::now().year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_number_formats_zero_padded() {
        assert_eq!(ClientNumber::new(2025, 3).to_string(), "2025-003");
        assert_eq!(ClientNumber::new(2025, 42).to_string(), "2025-042");
        assert_eq!(ClientNumber::new(2025, 1000).to_string(), "2025-1000");
    }

    #[test]
    fn client_number_parses_stored_strings() {
        let number: ClientNumber = "2025-001".parse().unwrap();
        assert_eq!(number, ClientNumber::new(2025, 1));
        assert!("2025001".parse::<ClientNumber>().is_err());
        assert!("год-001".parse::<ClientNumber>().is_err());
    }

    #[test]
    fn draft_defaults_match_the_intake_form() {
        let draft = ClientDraft::new("Ахметов", "Ержан", 2025);
        assert_eq!(draft.deposit, DEFAULT_DEPOSIT);
        assert_eq!(draft.construction_days, DEFAULT_CONSTRUCTION_DAYS);
        assert_eq!(draft.status, ClientStatus::Deposit);
        assert!(!draft.hide_project_icon);
    }

    #[test]
    fn serialized_field_names_match_stored_documents() {
        let client = Client::from_draft(
            ClientDraft::new("Ахметов", "Ержан", 2025),
            ClientNumber::new(2025, 1),
        );
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["clientNumber"], "2025-001");
        assert!(json.get("hideProjectIcon").is_some());
        assert!(json.get("constructionDays").is_some());
        assert_eq!(json["status"], "deposit");
    }
}
