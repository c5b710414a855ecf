use super::prelude::*;

pub async fn logout<A>(auth: &A) -> Result<()>
where
    A: AuthGateway,
{
    log::info!("Logging out");
    Ok(auth.sign_out().await?)
}
