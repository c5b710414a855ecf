use super::prelude::*;

pub async fn login_with_password<A>(auth: &A, credentials: &Credentials) -> Result<Session>
where
    A: AuthGateway,
{
    if !credentials.is_complete() {
        return Err(Error::EmptyCredentials);
    }
    log::info!("Logging in with {}", credentials.email);
    Ok(auth.sign_in_with_password(credentials).await?)
}
