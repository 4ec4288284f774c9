//! Contract documents generated for a client.
//!
//! Only the record itself lives here; rendering to PDF/DOCX is outside
//! this crate. Contracts are deleted in cascade with their client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::client::{Client, ClientNumber};
use crate::domain::common::{Displayable, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_number: ClientNumber,
    pub contract_number: String,
    pub contract_type: String,
    pub created_at: DateTime<Utc>,
    pub total_amount: i64,
    pub content: String,
}

impl Contract {
    pub fn new(
        client: &Client,
        contract_number: impl Into<String>,
        contract_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client_id: client.id,
            client_number: client.client_number,
            contract_number: contract_number.into(),
            contract_type: contract_type.into(),
            created_at: Utc::now(),
            total_amount: client.total_amount,
            content: content.into(),
        }
    }
}

impl Identifiable for Contract {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Contract {
    fn display_label(&self) -> String {
        format!("{} ({})", self.contract_number, self.contract_type)
    }
}
