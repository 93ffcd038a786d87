use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::catalog::{AccountTypeCatalog, AccountTypeName};
use crate::clients::CustomerDirectory;
use crate::models::{Account, AccountRequest, Message, OperationResult, ServiceError};
use crate::storage::AccountStore;
use crate::types::{AccountId, CustomerId};

/// Account lifecycle operations: opening, update, deletion, enumeration, and
/// the monthly allowance reset.
pub struct AccountLifecycleManager<S, D> {
    store: Arc<S>,
    directory: Arc<D>,
    catalog: Arc<AccountTypeCatalog>,
}

impl<S: AccountStore, D: CustomerDirectory> AccountLifecycleManager<S, D> {
    pub fn new(store: Arc<S>, directory: Arc<D>, catalog: Arc<AccountTypeCatalog>) -> Self {
        Self {
            store,
            directory,
            catalog,
        }
    }

    pub async fn all_accounts(&self) -> Result<Vec<Account>, ServiceError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn account_by_id(
        &self,
        account_id: &AccountId,
    ) -> Result<Option<Account>, ServiceError> {
        Ok(self.store.find_by_id(account_id).await?)
    }

    /// Opens an account for a personal customer.
    ///
    /// The customer lookup runs before the duplicate scan, which runs before
    /// anything is persisted. A person holds at most one account per type
    /// name.
    pub async fn create_account_person(
        &self,
        request: &AccountRequest,
    ) -> Result<OperationResult, ServiceError> {
        let entry = self.catalog.lookup(request.type_account)?;

        let Some(customer) = self.directory.person_by_id(&request.customer_id).await? else {
            return Ok(OperationResult::rejected("Client does not exist"));
        };

        if self
            .account_of_type(&request.customer_id, entry.name)
            .await?
            .is_some()
        {
            return Ok(OperationResult::rejected(format!(
                "Personal client already has a bank account: {}",
                entry.name
            )));
        }

        let account = self
            .store
            .save(Account::open(request, entry, customer.customer_type))
            .await?;

        debug!(
            "Account [{}] opened for personal customer [{}]",
            account.account_number, account.customer_id
        );

        Ok(OperationResult::accepted(
            "Account created successfully",
            account,
        ))
    }

    /// Opens an account for a company customer.
    ///
    /// Companies may only hold C_CORRIENTE accounts. Unlike personal creation
    /// there is no duplicate-account scan; a company may open any number of
    /// current accounts.
    pub async fn create_account_company(
        &self,
        request: &AccountRequest,
    ) -> Result<OperationResult, ServiceError> {
        let entry = self.catalog.lookup(request.type_account)?;

        let Some(customer) = self.directory.company_by_id(&request.customer_id).await? else {
            return Ok(OperationResult::rejected("Client does not exist"));
        };

        if entry.name != AccountTypeName::CCorriente {
            return Ok(OperationResult::rejected(
                "For company only type of account: C_CORRIENTE",
            ));
        }

        let account = self
            .store
            .save(Account::open(request, entry, customer.customer_type))
            .await?;

        debug!(
            "Account [{}] opened for company customer [{}]",
            account.account_number, account.customer_id
        );

        Ok(OperationResult::accepted(
            "Account created successfully",
            account,
        ))
    }

    /// Trusted overwrite of every mutable field, with the type name
    /// re-derived from the catalog. Fails when the account is missing.
    pub async fn update_account(
        &self,
        request: &AccountRequest,
    ) -> Result<Account, ServiceError> {
        let account_id = request.id.clone().unwrap_or_default();

        let Some(mut account) = self.store.find_by_id(&account_id).await? else {
            return Err(ServiceError::AccountNotFound(account_id));
        };

        let entry = self.catalog.lookup(request.type_account)?;
        account.apply_update(request, entry);

        Ok(self.store.save(account).await?)
    }

    /// Deleting a missing account is a reported outcome, not an error.
    pub async fn delete_account(&self, account_id: &AccountId) -> Result<Message, ServiceError> {
        let Some(account) = self.store.find_by_id(account_id).await? else {
            return Ok(Message::new("Account does not exist"));
        };

        let id = account.id.clone().unwrap_or_default();
        self.store.delete_by_id(&id).await?;

        Ok(Message::new("Account deleted successfully"))
    }

    pub async fn accounts_by_customer(
        &self,
        customer_id: &CustomerId,
    ) -> Result<Vec<Account>, ServiceError> {
        let accounts = self.store.find_all().await?;

        Ok(accounts
            .into_iter()
            .filter(|account| account.customer_id == *customer_id)
            .collect())
    }

    /// Monthly batch: every account's remaining allowance goes back to its
    /// catalog value, regardless of the prior count. Saves are issued
    /// concurrently with no transactional isolation.
    pub async fn restart_transactions(&self) -> Result<Message, ServiceError> {
        let accounts = self.store.find_all().await?;

        let saves = accounts.into_iter().map(|mut account| async move {
            let entry = self.catalog.lookup(account.type_account)?;
            account.restart_allowance(entry);
            self.store.save(account).await?;
            Ok::<(), ServiceError>(())
        });

        for result in join_all(saves).await {
            result?;
        }

        Ok(Message::new(
            "The number of transactions of the accounts was satisfactorily restarted",
        ))
    }

    async fn account_of_type(
        &self,
        customer_id: &CustomerId,
        name: AccountTypeName,
    ) -> Result<Option<Account>, ServiceError> {
        let accounts = self.store.find_all().await?;

        Ok(accounts.into_iter().find(|account| {
            account.customer_id == *customer_id && account.type_account_name == name
        }))
    }
}
