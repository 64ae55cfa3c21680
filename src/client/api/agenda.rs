use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::agenda::{AgendaEventDto, CreateAgendaEventDto, UpdateAgendaEventDto},
};

pub async fn list(client: &ApiClient) -> Result<Vec<AgendaEventDto>, ApiError> {
    let request = client.get("/agenda");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create(
    client: &ApiClient,
    body: &CreateAgendaEventDto,
) -> Result<AgendaEventDto, ApiError> {
    let request = client.post("/agenda").json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update(
    client: &ApiClient,
    id: i32,
    body: &UpdateAgendaEventDto,
) -> Result<AgendaEventDto, ApiError> {
    let url = format!("/agenda/{}", id);
    let request = client.patch(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/agenda/{}", id);
    let request = client.delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
