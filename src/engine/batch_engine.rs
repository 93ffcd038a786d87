use std::fs::File;
use std::io::BufReader;

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{error, info, warn};

use crate::clients::{CustomerDirectory, LedgerService};
use crate::lifecycle::AccountLifecycleManager;
use crate::models::{AccountRequest, ServiceError};
use crate::processor::TransactionProcessor;
use crate::storage::AccountStore;
use crate::types::{AccountId, Clock, CustomerId, TypeAccountId};

/// One row of the batch command file. Unused columns stay empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Command {
    pub op: CommandKind,
    pub account: Option<AccountId>,
    pub customer: Option<CustomerId>,
    #[serde(rename = "type")]
    pub type_account: Option<TypeAccountId>,
    pub amount: Option<Decimal>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    OpenPerson,
    OpenCompany,
    Deposit,
    Withdraw,
    Delete,
    Reset,
}

/// Streams a CSV command file through the lifecycle manager and the
/// transaction processor, in file order.
pub struct BatchEngine<S, D, L, C> {
    lifecycle: AccountLifecycleManager<S, D>,
    processor: TransactionProcessor<S, L, C>,
    clock: C,
    backpressure: usize,
}

impl<S, D, L, C> BatchEngine<S, D, L, C>
where
    S: AccountStore,
    D: CustomerDirectory,
    L: LedgerService,
    C: Clock,
{
    pub fn new(
        lifecycle: AccountLifecycleManager<S, D>,
        processor: TransactionProcessor<S, L, C>,
        clock: C,
    ) -> Self {
        Self {
            lifecycle,
            processor,
            clock,
            backpressure: 256,
        }
    }

    /// Orchestrates the end-to-end command pipeline for a CSV file.
    pub async fn run(&self, path: &str) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<Command>(self.backpressure);
        let csv_handle = Self::spawn_csv_reader(path.to_string(), sender);
        let processing_result = self.process_commands(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    fn spawn_csv_reader(path: String, sender: mpsc::Sender<Command>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {path} | {error}");
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<Command>() {
                match result {
                    Ok(command) => {
                        if sender.blocking_send(command).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_commands(&self, mut receiver: mpsc::Receiver<Command>) -> anyhow::Result<()> {
        while let Some(command) = receiver.recv().await {
            // A failed command is logged and the batch keeps going.
            if let Err(error) = self.dispatch(&command).await {
                error!("Command [{:?}] failed: {error}", command.op);
            }
        }

        Ok(())
    }

    async fn dispatch(&self, command: &Command) -> Result<(), ServiceError> {
        match command.op {
            CommandKind::OpenPerson => {
                let Some(request) = self.opening_request(command) else {
                    return Ok(());
                };
                let result = self.lifecycle.create_account_person(&request).await?;
                info!("open_person [{}]: {}", request.customer_id, result.message);
            }
            CommandKind::OpenCompany => {
                let Some(request) = self.opening_request(command) else {
                    return Ok(());
                };
                let result = self.lifecycle.create_account_company(&request).await?;
                info!("open_company [{}]: {}", request.customer_id, result.message);
            }
            CommandKind::Deposit => {
                let Some((account_id, amount)) = Self::movement_args(command) else {
                    return Ok(());
                };
                let result = self.processor.deposit(&account_id, amount).await?;
                info!("deposit [{account_id}]: {}", result.message);
            }
            CommandKind::Withdraw => {
                let Some((account_id, amount)) = Self::movement_args(command) else {
                    return Ok(());
                };
                let result = self.processor.withdraw(&account_id, amount).await?;
                info!("withdraw [{account_id}]: {}", result.message);
            }
            CommandKind::Delete => {
                let Some(account_id) = command.account.clone() else {
                    warn!("delete command is missing an account id");
                    return Ok(());
                };
                let message = self.lifecycle.delete_account(&account_id).await?;
                info!("delete [{account_id}]: {}", message.message);
            }
            CommandKind::Reset => {
                let message = self.lifecycle.restart_transactions().await?;
                info!("reset: {}", message.message);
            }
        }

        Ok(())
    }

    fn opening_request(&self, command: &Command) -> Option<AccountRequest> {
        let (Some(customer), Some(type_account)) = (command.customer.clone(), command.type_account)
        else {
            warn!("[{:?}] command is missing a customer or account type", command.op);
            return None;
        };

        Some(AccountRequest {
            customer_id: customer,
            type_account,
            date_account: self.clock.today(),
            number_account: command.number.clone().unwrap_or_default(),
            ..AccountRequest::default()
        })
    }

    fn movement_args(command: &Command) -> Option<(AccountId, Decimal)> {
        let (Some(account), Some(amount)) = (command.account.clone(), command.amount) else {
            warn!("[{:?}] command is missing an account id or amount", command.op);
            return None;
        };

        Some((account, amount))
    }
}
