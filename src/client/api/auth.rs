use crate::{
    client::{
        api::helper::{parse_response, send_request, ApiClient},
        model::error::ApiError,
    },
    model::auth::{AuthUserDto, LoginDto, LoginResponseDto, RegisterDto},
};

pub async fn register(client: &ApiClient, body: &RegisterDto) -> Result<AuthUserDto, ApiError> {
    let request = client.post("/auth/register").json(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Logs in and stores the returned token so subsequent calls are
/// authenticated.
pub async fn login(client: &ApiClient, body: &LoginDto) -> Result<LoginResponseDto, ApiError> {
    let request = client.post("/auth/login").json(body);
    let response = send_request(request).await?;
    let login_response: LoginResponseDto = parse_response(response).await?;

    client.tokens().set(&login_response.token);

    Ok(login_response)
}

/// Drops the stored token; there is no server-side session to end.
pub fn logout(client: &ApiClient) {
    client.tokens().clear();
}
