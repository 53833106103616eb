use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Employee, EmployeeFields, EmployeeId},
    error::error_detail_from_body,
};
use tracing::debug;
use url::Url;

pub mod controller;
pub mod error;
pub mod view;

pub use controller::{EditBuffer, EditTarget, EmployeeListController, UiMode};
pub use error::{ClientError, ClientResult};
pub use reqwest::StatusCode;
pub use view::{EmployeeRow, EmployeeView, Notification, NotificationKind, RowAction};

const COLLECTION_SEGMENT: &str = "employee";

/// Network side of the employee list: one round trip per call.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>>;
    async fn fetch_employee(&self, emp_id: EmployeeId) -> ClientResult<Employee>;
    async fn create_employee(&self, fields: &EmployeeFields) -> ClientResult<()>;
    async fn update_employee(
        &self,
        emp_id: EmployeeId,
        fields: &EmployeeFields,
    ) -> ClientResult<()>;
    async fn delete_employee(&self, emp_id: EmployeeId) -> ClientResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeEndpoints {
    collection: Url,
}

impl EmployeeEndpoints {
    /// Accepts either the server root (`http://host:8000`) or the collection
    /// endpoint itself (`http://host:8000/employee/`).
    pub fn new(server_url: &str) -> ClientResult<Self> {
        let mut base = Url::parse(server_url.trim())?;
        let path = base.path().trim_end_matches('/').to_string();
        let collection = if path.rsplit('/').next() == Some(COLLECTION_SEGMENT) {
            base.set_path(&format!("{path}/"));
            base
        } else {
            base.set_path(&format!("{path}/"));
            base.join(&format!("{COLLECTION_SEGMENT}/"))?
        };
        Ok(Self { collection })
    }

    pub fn collection(&self) -> &Url {
        &self.collection
    }

    pub fn employee(&self, emp_id: EmployeeId) -> ClientResult<Url> {
        Ok(self.collection.join(&emp_id.to_string())?)
    }
}

#[derive(Debug, Clone)]
pub struct HttpEmployeeApi {
    http: Client,
    endpoints: EmployeeEndpoints,
}

impl HttpEmployeeApi {
    pub fn new(server_url: &str) -> ClientResult<Self> {
        Self::with_timeout(server_url, None)
    }

    pub fn with_timeout(server_url: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoints: EmployeeEndpoints::new(server_url)?,
        })
    }

    pub fn endpoints(&self) -> &EmployeeEndpoints {
        &self.endpoints
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await?;
        Err(ClientError::Server {
            status,
            detail: error_detail_from_body(&body),
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = Self::check_status(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        let url = self.endpoints.collection().clone();
        debug!(%url, "GET employee collection");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn fetch_employee(&self, emp_id: EmployeeId) -> ClientResult<Employee> {
        let url = self.endpoints.employee(emp_id)?;
        debug!(%url, "GET employee");
        let response = self.http.get(url).send().await?;
        Self::decode(response).await
    }

    async fn create_employee(&self, fields: &EmployeeFields) -> ClientResult<()> {
        let url = self.endpoints.collection().clone();
        debug!(%url, "POST employee");
        let response = self.http.post(url).json(fields).send().await?;
        let body = Self::check_status(response).await?.bytes().await?;
        if let Ok(created) = serde_json::from_slice::<Employee>(&body) {
            debug!(emp_id = created.emp_id.0, "server assigned employee id");
        }
        Ok(())
    }

    async fn update_employee(
        &self,
        emp_id: EmployeeId,
        fields: &EmployeeFields,
    ) -> ClientResult<()> {
        let url = self.endpoints.employee(emp_id)?;
        debug!(%url, "PUT employee");
        let response = self.http.put(url).json(fields).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_employee(&self, emp_id: EmployeeId) -> ClientResult<()> {
        let url = self.endpoints.employee(emp_id)?;
        debug!(%url, "DELETE employee");
        let response = self.http.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
