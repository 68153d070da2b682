pub mod company_accounts;
pub mod transactions;
pub mod users;

pub use company_accounts::CompanyAccountService;
pub use transactions::TransactionService;
pub use users::UserDirectory;

use crate::error::ApiError;
use crate::session::SessionGuard;

/// Backend-rejected credentials end the session for every view, not just the
/// one that made the call.
pub(crate) async fn intercept_auth<T>(
    session: &SessionGuard,
    result: Result<T, ApiError>,
) -> Result<T, ApiError> {
    if let Err(err) = &result {
        if err.is_unauthorized() {
            session.invalidate().await;
        }
    }
    result
}
