use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Employee;

impl ApiClient {
    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees").await
    }

    pub async fn create_employee(&self, employee: &Employee) -> Result<(), ApiError> {
        self.post_unit("/employees", employee).await
    }

    pub async fn update_employee(&self, id: i64, employee: &Employee) -> Result<(), ApiError> {
        self.put_unit(&format!("/employees/{id}"), employee).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.delete_unit(&format!("/employees/{id}")).await
    }
}
