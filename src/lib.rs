pub mod api;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod validation;
pub mod workflow;

use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::Config;
use crate::services::{CompanyAccountService, TransactionService, UserDirectory};
use crate::session::SessionGuard;

/// Application-state handle for one console instance.
///
/// Wires the session guard and the per-collection services to a single
/// backend client sharing one cookie jar. Passed around explicitly; the core
/// keeps no global state.
#[derive(Clone)]
pub struct Console {
    pub session: SessionGuard,
    pub transactions: TransactionService,
    pub users: UserDirectory,
    pub company_accounts: CompanyAccountService,
}

impl Console {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let api = ApiClient::new(config)?;
        let session = SessionGuard::new(Arc::new(api.clone()));

        Ok(Self {
            transactions: TransactionService::new(api.clone(), session.clone()),
            users: UserDirectory::new(api.clone(), session.clone()),
            company_accounts: CompanyAccountService::new(api, session.clone()),
            session,
        })
    }
}
