/// Blocking, modal interaction with the user.
pub trait DialogGateway {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}
