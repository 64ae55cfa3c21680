use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::reminder::{CreateReminderDto, ReminderDto, UpdateReminderDto},
};

pub async fn list_for_event(
    client: &ApiClient,
    health_event_id: i32,
) -> Result<Vec<ReminderDto>, ApiError> {
    let url = format!("/health-events/{}/reminders", health_event_id);
    let request = client.get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_for_event(
    client: &ApiClient,
    health_event_id: i32,
    body: &CreateReminderDto,
) -> Result<ReminderDto, ApiError> {
    let url = format!("/health-events/{}/reminders", health_event_id);
    let request = client.post(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update(
    client: &ApiClient,
    id: i32,
    body: &UpdateReminderDto,
) -> Result<ReminderDto, ApiError> {
    let url = format!("/reminders/{}", id);
    let request = client.patch(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/reminders/{}", id);
    let request = client.delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
