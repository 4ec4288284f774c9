pub mod category_service;
pub mod client_service;
pub mod feed_service;
pub mod summary_service;
pub mod transfer_service;

pub use category_service::CategoryService;
pub use client_service::ClientService;
pub use feed_service::{DailyTotal, FeedService};
pub use summary_service::{Stats, SummaryService};
pub use transfer_service::{TransferPlan, TransferService};

use crate::errors::StoreError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    Invalid(String),
}
