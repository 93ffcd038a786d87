use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use crate::clients::CustomerDirectory;
use crate::models::Customer;
use crate::types::CustomerId;

/// Directory double keeping person and company records in separate maps,
/// mirroring the two lookup endpoints of the real service.
pub struct InMemoryCustomerDirectory {
    persons: DashMap<CustomerId, Customer>,
    companies: DashMap<CustomerId, Customer>,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self {
            persons: DashMap::new(),
            companies: DashMap::new(),
        }
    }

    pub fn insert_person(&self, customer: Customer) {
        self.persons.insert(customer.id.clone(), customer);
    }

    pub fn insert_company(&self, customer: Customer) {
        self.companies.insert(customer.id.clone(), customer);
    }
}

impl Default for InMemoryCustomerDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerDirectory for InMemoryCustomerDirectory {
    async fn person_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>> {
        Ok(self.persons.get(customer_id).map(|item| item.value().clone()))
    }

    async fn company_by_id(&self, customer_id: &CustomerId) -> Result<Option<Customer>> {
        Ok(self.companies.get(customer_id).map(|item| item.value().clone()))
    }
}
