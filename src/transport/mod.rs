pub mod reqwest_source;
pub mod source;

pub use reqwest_source::ReqwestSource;
pub use source::{BodyStream, HttpSource, TransportError, read_to_end};
