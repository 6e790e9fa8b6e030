use thiserror::Error;

pub type NapchartResult<T> = Result<T, NapchartError>;

#[derive(Debug, Error)]
pub enum NapchartError {
    #[error("invalid clock time `{input}`: expected HH:MM")]
    InvalidTimeFormat { input: String },

    #[error("no element with id `{0}` in chart")]
    ElementNotFound(String),

    #[error("no lane `{0}` in chart lanes config")]
    LaneNotFound(String),

    #[error("chart upload failed: status={status}, response: {body}")]
    UploadFailed { status: u16, body: String },

    #[error("chart import failed: status={status}, response: {body}")]
    ImportFailed { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
