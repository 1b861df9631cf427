use crate::infra::Error;

pub trait Connection: Send + Sync {
    type Conn: Send + Sync;
    type Error: Send + Sync + Into<Error>;

    fn conn(&self) -> &Self::Conn;
}
