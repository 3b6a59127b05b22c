pub mod assemble;
pub mod file_stems;
pub mod folder_alias;
pub mod metadata;
pub mod model;
pub mod partition;
pub mod rename;

pub use assemble::{icon_theme_family, transform_manifest, transform_manifest_text};
pub use model::{Appearance, DirectoryIcons, IconPath, IconTheme, IconThemeFamily};
