pub mod model;

pub use model::{parse_upstream_manifest, IconDefinition, UpstreamManifest, UpstreamVariant};
