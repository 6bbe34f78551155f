mod error;
mod model_artifact;

pub use error::ArtifactError;
pub use model_artifact::FORMAT_VERSION;
pub use model_artifact::ModelArtifact;
