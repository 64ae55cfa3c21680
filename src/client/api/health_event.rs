use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::health_event::{CreateHealthEventDto, HealthEventDto, UpdateHealthEventDto},
};

pub async fn list_for_pet(client: &ApiClient, pet_id: i32) -> Result<Vec<HealthEventDto>, ApiError> {
    let url = format!("/pets/{}/health-events", pet_id);
    let request = client.get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_for_pet(
    client: &ApiClient,
    pet_id: i32,
    body: &CreateHealthEventDto,
) -> Result<HealthEventDto, ApiError> {
    let url = format!("/pets/{}/health-events", pet_id);
    let request = client.post(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update(
    client: &ApiClient,
    id: i32,
    body: &UpdateHealthEventDto,
) -> Result<HealthEventDto, ApiError> {
    let url = format!("/health-events/{}", id);
    let request = client.patch(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/health-events/{}", id);
    let request = client.delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
