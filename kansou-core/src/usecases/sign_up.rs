use super::prelude::*;

pub async fn sign_up_with_password<A>(auth: &A, credentials: &Credentials) -> Result<SignUp>
where
    A: AuthGateway,
{
    if !credentials.is_complete() {
        return Err(Error::EmptyCredentials);
    }
    log::info!("Signing up with {}", credentials.email);
    Ok(auth.sign_up(credentials).await?)
}
