use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyError {
    #[error("GOPROXY set to \"off\", aborting")]
    Disabled,
}
