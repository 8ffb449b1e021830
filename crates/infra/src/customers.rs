//! Customer directory

use dealdesk_domain::{Customer, CustomerDetails};

use crate::api::{encode_segment, ApiClient, ApiError, Operation};

const CUSTOMERS: &str = "/api/customers";

#[derive(Debug, Clone)]
pub struct CustomerClient {
    api: ApiClient,
}

impl CustomerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.api.get(Operation::FetchCustomers, CUSTOMERS).await
    }

    /// One customer with accounts, collateral, contacts, facilities and
    /// subsidiaries
    pub async fn customer_details(&self, customer_id: &str) -> Result<CustomerDetails, ApiError> {
        let path = format!("{CUSTOMERS}/{}/details", encode_segment(customer_id));
        self.api.get(Operation::FetchCustomerDetails, &path).await
    }
}
