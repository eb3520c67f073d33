use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::api::errors::ApiError;
use crate::api::routes::ASSETS_INDEX;
use crate::api::state::AppState;
use crate::domain::Employee;

/// Form body for creating an employee
///
/// Missing fields decode as empty strings. When a field repeats, its first
/// value wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub team: String,
}

impl EmployeeForm {
    /// Decode a URL-encoded body, whatever Content-Type it arrived with
    pub fn parse(body: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;

        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        Ok(Self {
            name: first("name"),
            team: first("team"),
        })
    }
}

impl From<EmployeeForm> for Employee {
    fn from(form: EmployeeForm) -> Self {
        Employee::new(form.name, form.team)
    }
}

/// List all employees
///
/// GET /employee
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employees.list().await?;

    Ok(Json(employees))
}

/// Create an employee from form input, then send the client back to the asset page
///
/// POST /employee
///
/// A failed write is logged but still answered with the redirect.
pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let form = EmployeeForm::parse(&body?)?;
    let employee = Employee::from(form);

    if let Err(e) = state.employees.create(&employee).await {
        tracing::error!(error = %e, "failed to create employee");
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, ASSETS_INDEX)]).into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use mockall::predicate::eq;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::create_router;
    use crate::domain::repositories::{MockEmployeeRepository, RepositoryError};

    fn app(repo: MockEmployeeRepository) -> Router {
        let assets = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
        create_router(AppState::new(Arc::new(repo)), assets)
    }

    fn form_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/employee")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn list_returns_stored_employees_as_json() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Ok(vec![Employee::new("Dora", "Platforms")]));

        let response = app(repo)
            .oneshot(Request::get("/employee").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let employees: Vec<Employee> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(employees, vec![Employee::new("Dora", "Platforms")]);
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty_array() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list().times(1).returning(|| Ok(Vec::new()));

        let response = app(repo)
            .oneshot(Request::get("/employee").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"[]");
    }

    #[tokio::test]
    async fn list_storage_failure_is_500_with_empty_body() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list()
            .times(1)
            .returning(|| Err(RepositoryError::Storage("connection refused".into())));

        let response = app(repo)
            .oneshot(Request::get("/employee").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn create_stores_employee_and_redirects() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .with(eq(Employee::new("Dora", "Platforms")))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(form_request("name=Dora&team=Platforms"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/assets/");
    }

    #[tokio::test]
    async fn create_storage_failure_still_redirects() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("insert rejected".into())));

        let response = app(repo)
            .oneshot(form_request("name=Dora&team=Platforms"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/assets/");
    }

    #[tokio::test]
    async fn create_missing_fields_become_empty_strings() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .with(eq(Employee::new("Dora", "")))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo).oneshot(form_request("name=Dora")).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn create_decodes_percent_encoded_values() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .with(eq(Employee::new("Dora Explorer", "R&D")))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(form_request("name=Dora+Explorer&team=R%26D"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn create_takes_first_value_of_repeated_field() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .with(eq(Employee::new("a", "t")))
            .times(1)
            .returning(|_| Ok(()));

        let response = app(repo)
            .oneshot(form_request("name=a&name=b&team=t"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/assets/");
    }

    #[tokio::test]
    async fn create_without_content_type_still_decodes_body() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create()
            .with(eq(Employee::new("a", "t")))
            .times(1)
            .returning(|_| Ok(()));

        let request = Request::builder()
            .method("POST")
            .uri("/employee")
            .body(Body::from("name=a&team=t"))
            .unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn create_with_oversized_body_is_500_and_skips_storage() {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_create().never();

        let mut body = b"name=".to_vec();
        body.resize(3 * 1024 * 1024, b'a');
        let request = Request::builder()
            .method("POST")
            .uri("/employee")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let response = app(repo).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_bytes(response).await.is_empty());
    }

    #[test]
    fn parse_of_empty_body_is_empty_form() {
        assert_eq!(EmployeeForm::parse(b"").unwrap(), EmployeeForm::default());
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let form = EmployeeForm::parse(b"team=Platforms&extra=1&name=Dora").unwrap();
        assert_eq!(Employee::from(form), Employee::new("Dora", "Platforms"));
    }
}
