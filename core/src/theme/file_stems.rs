use indexmap::IndexMap;

/// Zed matches file stems case-sensitively while VS Code does not, so every
/// upstream file name is written in lower and upper case. The authored mixed
/// case spelling is not kept.
pub fn expand_file_stems(file_names: &IndexMap<String, String>) -> IndexMap<String, String> {
    let mut out = IndexMap::with_capacity(file_names.len() * 2);
    for (name, icon) in file_names {
        out.insert(name.to_lowercase(), icon.clone());
        out.insert(name.to_uppercase(), icon.clone());
    }
    out
}
