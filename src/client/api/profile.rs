use crate::{
    client::{
        api::helper::{parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::profile::{ProfileDto, UpdateProfileDto},
};

pub async fn get_me(client: &ApiClient) -> Result<ProfileDto, ApiError> {
    let request = client.get("/me");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_me(
    client: &ApiClient,
    body: &UpdateProfileDto,
) -> Result<ProfileDto, ApiError> {
    let request = client.patch("/me").json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
