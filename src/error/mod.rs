mod snapshare;
mod validation;

pub use snapshare::SnapshareError;
pub use validation::{FieldError, ValidationErrors};
