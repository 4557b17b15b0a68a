//! Bank deposit accounts.

use buycoins_core::{ApiResponse, FieldSelection, OperationRequest};
use buycoins_net::Transport;

use crate::client::{rejected, Buycoins};
use crate::error::Result;
use crate::validation::{selection_or, ValidationError};

/// Root field for creating a deposit account.
pub const CREATE_DEPOSIT_ACCOUNT: &str = "createDepositAccount";

/// Fields fetched for a new deposit account by default.
pub fn deposit_account_fields() -> Vec<FieldSelection> {
    FieldSelection::leaves([
        "accountNumber",
        "accountName",
        "accountType",
        "bankName",
        "accountReference",
    ])
}

/// Build the `createDepositAccount` mutation.
pub fn create_deposit_account_request(
    account_name: &str,
    fields: &[FieldSelection],
) -> Result<OperationRequest> {
    if account_name.trim().is_empty() {
        return Err(ValidationError::AccountName.into());
    }
    let selection = selection_or(fields, deposit_account_fields)?;
    Ok(OperationRequest::mutation(CREATE_DEPOSIT_ACCOUNT, selection)?
        .argument("accountName", account_name))
}

impl<T: Transport> Buycoins<T> {
    /// Create a bank account to deposit naira into.
    pub async fn create_deposit_account(
        &self,
        account_name: &str,
        fields: &[FieldSelection],
    ) -> Result<ApiResponse> {
        let request = create_deposit_account_request(account_name, fields)
            .map_err(|e| rejected(CREATE_DEPOSIT_ACCOUNT, e))?;
        self.execute(&request).await
    }
}
