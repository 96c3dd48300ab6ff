use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Metadata input is not a JSON object: {found}")]
    UnexpectedRoot { found: &'static str },
}

pub type Result<T> = std::result::Result<T, MetadataError>;
