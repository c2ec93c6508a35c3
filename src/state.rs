use std::sync::Mutex;

use crate::config::AppConfig;
use crate::services::catalog::CatalogSource;
use crate::services::ledger::Ledger;

pub struct AppState {
    /// Single-writer discipline for the booking ledger: the availability
    /// re-check and the append inside create run under one lock, so
    /// concurrent creates for the same slot cannot both succeed.
    pub ledger: Mutex<Ledger>,
    pub catalog: Box<dyn CatalogSource>,
    pub config: AppConfig,
}
