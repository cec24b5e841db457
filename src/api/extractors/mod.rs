//! Custom request extractors.

mod path_id;
mod validated_json;

pub use path_id::PathId;
pub use validated_json::ValidatedJson;
