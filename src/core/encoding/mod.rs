mod category_encoder;
mod error;

pub use category_encoder::CategoryEncoder;
pub use category_encoder::SENTINEL_CODE;
pub use error::EncodingError;
