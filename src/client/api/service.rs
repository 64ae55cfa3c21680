use crate::{
    client::{
        api::helper::{parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::service::ServiceDto,
};

/// Lists the public service directory, optionally filtered by type
/// (`VETERINAIRE`, `TOILETTEUR`, `AUTRE`).
pub async fn list(client: &ApiClient, kind: Option<&str>) -> Result<Vec<ServiceDto>, ApiError> {
    let url = match kind {
        Some(kind) => format!("/services?type={}", kind),
        None => "/services".to_string(),
    };
    let request = client.get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
