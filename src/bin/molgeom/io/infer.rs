use std::path::Path;

use molgeom::io::Format;

use crate::cli::DescriptionFormat;

/// Picks the description format: an explicit choice wins, then `.toml`,
/// then the key/value form.
pub fn description(path: &Path, explicit: Option<DescriptionFormat>) -> Format {
    match explicit {
        Some(DescriptionFormat::KeyValue) => Format::Description,
        Some(DescriptionFormat::Toml) => Format::DescriptionToml,
        None => match extension(path).as_deref() {
            Some("toml") => Format::DescriptionToml,
            _ => Format::Description,
        },
    }
}

fn extension(path: &Path) -> Option<String> {
    Some(path.extension()?.to_str()?.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_extension_selects_toml() {
        assert_eq!(
            description(Path::new("mol/water.TOML"), None),
            Format::DescriptionToml
        );
    }

    #[test]
    fn anything_else_is_key_value() {
        assert_eq!(description(Path::new("water.in"), None), Format::Description);
        assert_eq!(description(Path::new("water"), None), Format::Description);
    }

    #[test]
    fn explicit_format_overrides_extension() {
        assert_eq!(
            description(Path::new("water.toml"), Some(DescriptionFormat::KeyValue)),
            Format::Description
        );
        assert_eq!(
            description(Path::new("water.in"), Some(DescriptionFormat::Toml)),
            Format::DescriptionToml
        );
    }
}
