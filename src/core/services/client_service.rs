//! Client lifecycle: registration, numbering, status moves, icon
//! visibility, and cascade deletion.

use uuid::Uuid;

use crate::domain::category::{Category, ROW_CLIENTS, ROW_PROJECTS};
use crate::domain::client::{Client, ClientDraft, ClientNumber, ClientStatus};
use crate::ledger::Office;

use super::{ServiceError, ServiceResult};

pub struct ClientService;

impl ClientService {
    /// Next number in the (status, year) scope: max existing sequence
    /// plus one, `001` when the scope is empty.
    ///
    /// This is a scan, not a unique allocator — two actors generating
    /// for the same scope concurrently can race to the same number; the
    /// external store is the arbiter.
    pub fn next_number(office: &Office, status: ClientStatus, year: i32) -> ClientNumber {
        let max = office
            .clients
            .iter()
            .filter(|client| client.status == status && client.year == year)
            .map(|client| client.client_number.seq)
            .max()
            .unwrap_or(0);
        ClientNumber::new(year, max + 1)
    }

    /// Registers a new client: assigns the next number for its
    /// (status, year) and, unless the draft hides it, creates the icon
    /// pair on the main grid.
    pub fn register(office: &mut Office, draft: ClientDraft) -> ServiceResult<Uuid> {
        if draft.last_name.trim().is_empty() || draft.first_name.trim().is_empty() {
            return Err(ServiceError::Invalid("Client name is empty".into()));
        }
        let number = Self::next_number(office, draft.status, draft.year);
        let client = Client::from_draft(draft, number);
        if !client.hide_project_icon {
            Self::create_icons(office, &client.icon_label());
        }
        let id = office.add_client(client);
        tracing::info!(%number, "client registered");
        Ok(id)
    }

    /// Moves a client to a new status and regenerates its number in the
    /// new (status, year) scope. Any direction of movement is legal.
    pub fn change_status(
        office: &mut Office,
        id: Uuid,
        new_status: ClientStatus,
    ) -> ServiceResult<ClientNumber> {
        let year = office
            .client(id)
            .map(|client| client.year)
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))?;
        let number = Self::next_number(office, new_status, year);
        if let Some(client) = office.client_mut(id) {
            client.status = new_status;
            client.client_number = number;
        }
        office.touch();
        tracing::info!(%number, status = %new_status, "client status changed");
        Ok(number)
    }

    /// Shows or hides the client's icon pair. Existing icons bearing the
    /// client's label are always removed first; fresh zero-balance ones
    /// are created when turning visible.
    pub fn set_visibility(office: &mut Office, id: Uuid, visible: bool) -> ServiceResult<()> {
        let label = office
            .client(id)
            .map(|client| client.icon_label())
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))?;
        Self::remove_icons(office, &label);
        if visible {
            Self::create_icons(office, &label);
        }
        if let Some(client) = office.client_mut(id) {
            client.hide_project_icon = !visible;
        }
        office.touch();
        Ok(())
    }

    /// Deletes a client together with its icon pair and every contract
    /// that references it.
    pub fn remove(office: &mut Office, id: Uuid) -> ServiceResult<Client> {
        let position = office
            .clients
            .iter()
            .position(|client| client.id == id)
            .ok_or_else(|| ServiceError::Invalid("Client not found".into()))?;
        let label = office.clients[position].icon_label();
        Self::remove_icons(office, &label);
        let contracts_before = office.contracts.len();
        office.contracts.retain(|contract| contract.client_id != id);
        let removed = office.clients.remove(position);
        office.touch();
        tracing::info!(
            number = %removed.client_number,
            contracts = contracts_before - office.contracts.len(),
            "client removed with contracts"
        );
        Ok(removed)
    }

    /// The clients-page listing: a year filter plus an optional status
    /// filter.
    pub fn filter(office: &Office, year: i32, status: Option<ClientStatus>) -> Vec<&Client> {
        office
            .clients
            .iter()
            .filter(|client| client.year == year)
            .filter(|client| status.map_or(true, |wanted| client.status == wanted))
            .collect()
    }

    fn create_icons(office: &mut Office, label: &str) {
        office.add_category(Category::new(label, "Building2", "bg-blue-500", ROW_PROJECTS));
        office.add_category(Category::new(label, "User", "bg-amber-400", ROW_CLIENTS));
    }

    fn remove_icons(office: &mut Office, label: &str) {
        office.categories.retain(|category| {
            !((category.row == ROW_CLIENTS || category.row == ROW_PROJECTS)
                && category.title == label)
        });
    }
}
