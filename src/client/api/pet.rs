use crate::{
    client::{
        api::helper::{parse_empty_response, parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::pet::{CreatePetDto, PetDetailDto, PetDto, UpdatePetDto},
};

pub async fn get_pets(client: &ApiClient) -> Result<Vec<PetDto>, ApiError> {
    let request = client.get("/pets");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_pet(client: &ApiClient, id: i32) -> Result<PetDetailDto, ApiError> {
    let url = format!("/pets/{}", id);
    let request = client.get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_pet(client: &ApiClient, body: &CreatePetDto) -> Result<PetDto, ApiError> {
    let request = client.post("/pets").json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_pet(
    client: &ApiClient,
    id: i32,
    body: &UpdatePetDto,
) -> Result<PetDto, ApiError> {
    let url = format!("/pets/{}", id);
    let request = client.put(&url).json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_pet(client: &ApiClient, id: i32) -> Result<(), ApiError> {
    let url = format!("/pets/{}", id);
    let request = client.delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
