//! Models and plumbing shared by the task and vehicle services.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod server;
pub mod store;
pub mod telemetry;

pub use config::ServerArgs;
pub use error::{ApiError, ApiResult};
pub use extract::{FormBody, JsonBody, RecordId};
pub use models::{Task, TaskPayload, Vehicle, VehiclePayload};
pub use store::{Db, Store, StoreError};
