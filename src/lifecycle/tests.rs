use super::AccountLifecycleManager;

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::catalog::{AccountTypeCatalog, AccountTypeName};
use crate::clients::InMemoryCustomerDirectory;
use crate::models::{AccountRequest, Customer, ServiceError};
use crate::storage::{AccountStore, InMemoryAccountStore};

type Manager = AccountLifecycleManager<InMemoryAccountStore, InMemoryCustomerDirectory>;

fn fixture() -> (Arc<InMemoryAccountStore>, Arc<InMemoryCustomerDirectory>, Manager) {
    let store = Arc::new(InMemoryAccountStore::new());
    let directory = Arc::new(InMemoryCustomerDirectory::new());
    let manager = AccountLifecycleManager::new(
        store.clone(),
        directory.clone(),
        Arc::new(AccountTypeCatalog::new()),
    );

    directory.insert_person(Customer {
        id: "C001".to_string(),
        customer_type: "PERSONAL".to_string(),
    });
    directory.insert_company(Customer {
        id: "E100".to_string(),
        customer_type: "EMPRESARIAL".to_string(),
    });

    (store, directory, manager)
}

fn opening_request(customer_id: &str, type_account: u8, number: &str) -> AccountRequest {
    AccountRequest {
        customer_id: customer_id.to_string(),
        type_account,
        date_account: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        number_account: number.to_string(),
        ..AccountRequest::default()
    }
}

#[tokio::test]
async fn test_person_account_creation_snapshots_catalog_and_customer() -> Result<()> {
    let (_, _, manager) = fixture();

    let result = manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?;

    assert_eq!(result.message, "Account created successfully");

    let account = result.account.ok_or_else(|| anyhow!("account missing from result"))?;

    assert!(account.id.is_some());
    assert_eq!(account.balance, Decimal::ZERO);
    assert_eq!(account.type_account_name, AccountTypeName::Ahorro);
    assert_eq!(account.remaining_monthly_transactions, 5);
    assert_eq!(account.customer_type, "PERSONAL");

    Ok(())
}

#[tokio::test]
async fn test_person_account_creation_rejects_unknown_customers() -> Result<()> {
    let (store, _, manager) = fixture();

    let result = manager
        .create_account_person(&opening_request("C999", 1, "ACC-1001"))
        .await?;

    assert_eq!(result.message, "Client does not exist");
    assert!(result.account.is_none());
    assert!(store.find_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_person_cannot_hold_two_accounts_of_the_same_type() -> Result<()> {
    let (store, _, manager) = fixture();

    manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?;
    let result = manager
        .create_account_person(&opening_request("C001", 1, "ACC-1002"))
        .await?;

    assert_eq!(
        result.message,
        "Personal client already has a bank account: AHORRO"
    );
    assert!(result.account.is_none());
    assert_eq!(store.find_all().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_person_may_hold_accounts_of_distinct_types() -> Result<()> {
    let (store, _, manager) = fixture();

    manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?;
    let result = manager
        .create_account_person(&opening_request("C001", 3, "ACC-3001"))
        .await?;

    assert_eq!(result.message, "Account created successfully");
    assert_eq!(store.find_all().await?.len(), 2);
    assert_eq!(manager.all_accounts().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_company_accounts_must_be_current_accounts() -> Result<()> {
    let (store, _, manager) = fixture();

    let result = manager
        .create_account_company(&opening_request("E100", 1, "ACC-1001"))
        .await?;

    assert_eq!(
        result.message,
        "For company only type of account: C_CORRIENTE"
    );
    assert!(result.account.is_none());
    assert!(store.find_all().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_company_creation_rejects_unknown_customers() -> Result<()> {
    let (_, _, manager) = fixture();

    let result = manager
        .create_account_company(&opening_request("E999", 2, "ACC-2001"))
        .await?;

    assert_eq!(result.message, "Client does not exist");
    assert!(result.account.is_none());

    Ok(())
}

#[tokio::test]
async fn test_company_may_open_several_current_accounts() -> Result<()> {
    let (store, _, manager) = fixture();

    let first = manager
        .create_account_company(&opening_request("E100", 2, "ACC-2001"))
        .await?;
    let second = manager
        .create_account_company(&opening_request("E100", 2, "ACC-2002"))
        .await?;

    assert_eq!(first.message, "Account created successfully");
    assert_eq!(second.message, "Account created successfully");
    assert_eq!(store.find_all().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_creation_with_an_unmapped_type_id_is_a_fault() {
    let (_, _, manager) = fixture();

    let result = manager
        .create_account_person(&opening_request("C001", 99, "ACC-9901"))
        .await;

    assert!(matches!(result, Err(ServiceError::UnknownAccountType(_))));
}

#[tokio::test]
async fn test_update_overwrites_the_stored_account() -> Result<()> {
    let (_, _, manager) = fixture();

    let created = manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?
        .account
        .ok_or_else(|| anyhow!("account missing from result"))?;

    let request = AccountRequest {
        id: created.id.clone(),
        customer_id: "C001".to_string(),
        type_account: 2,
        amount: Decimal::from_str("300.0")?,
        maintenance: Decimal::from_str("5.0")?,
        transactions: 10,
        operation_day: None,
        date_account: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        number_account: "ACC-1001".to_string(),
        type_customer: "PERSONAL".to_string(),
    };

    let updated = manager.update_account(&request).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.type_account_name, AccountTypeName::CCorriente);
    assert_eq!(updated.balance, Decimal::from_str("300.0")?);
    assert_eq!(updated.remaining_monthly_transactions, 10);

    let stored = manager
        .account_by_id(&created.id.unwrap_or_default())
        .await?
        .ok_or_else(|| anyhow!("account missing after update"))?;

    assert_eq!(stored.balance, Decimal::from_str("300.0")?);

    Ok(())
}

#[tokio::test]
async fn test_update_of_a_missing_account_fails() {
    let (_, _, manager) = fixture();

    let request = AccountRequest {
        id: Some("99".to_string()),
        customer_id: "C001".to_string(),
        type_account: 1,
        ..AccountRequest::default()
    };

    let result = manager.update_account(&request).await;

    assert!(matches!(result, Err(ServiceError::AccountNotFound(id)) if id == "99"));
}

#[tokio::test]
async fn test_delete_reports_both_outcomes() -> Result<()> {
    let (_, _, manager) = fixture();

    let created = manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?
        .account
        .ok_or_else(|| anyhow!("account missing from result"))?;
    let id = created.id.unwrap_or_default();

    let deleted = manager.delete_account(&id).await?;

    assert_eq!(deleted.message, "Account deleted successfully");
    assert!(manager.account_by_id(&id).await?.is_none());

    let missing = manager.delete_account(&id).await?;

    assert_eq!(missing.message, "Account does not exist");

    Ok(())
}

#[tokio::test]
async fn test_accounts_by_customer_filters_the_store() -> Result<()> {
    let (_, directory, manager) = fixture();

    directory.insert_person(Customer {
        id: "C002".to_string(),
        customer_type: "PERSONAL".to_string(),
    });

    manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?;
    manager
        .create_account_person(&opening_request("C001", 3, "ACC-3001"))
        .await?;
    manager
        .create_account_person(&opening_request("C002", 1, "ACC-1002"))
        .await?;

    let accounts = manager.accounts_by_customer(&"C001".to_string()).await?;

    assert_eq!(accounts.len(), 2);
    assert!(accounts.iter().all(|account| account.customer_id == "C001"));

    Ok(())
}

#[tokio::test]
async fn test_restart_transactions_restores_every_allowance() -> Result<()> {
    let (store, _, manager) = fixture();

    let created = manager
        .create_account_person(&opening_request("C001", 1, "ACC-1001"))
        .await?
        .account
        .ok_or_else(|| anyhow!("account missing from result"))?;

    let mut drained = created.clone();
    drained.remaining_monthly_transactions = 0;
    store.save(drained).await?;

    let message = manager.restart_transactions().await?;

    assert_eq!(
        message.message,
        "The number of transactions of the accounts was satisfactorily restarted"
    );

    let restored = manager
        .account_by_id(&created.id.unwrap_or_default())
        .await?
        .ok_or_else(|| anyhow!("account missing after restart"))?;

    assert_eq!(restored.remaining_monthly_transactions, 5);

    Ok(())
}
