pub mod errors;
pub mod section;

pub use errors::{ConfigError, EffectError, FolioError, NavigationError};
pub use section::SectionId;

pub type Result<T> = std::result::Result<T, FolioError>;
