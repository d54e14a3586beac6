/// Package name from a package page path such as `/pkgs/firefox/overview/`
/// or `/site/pkgs/firefox/overview/`.
///
/// The name is the segment right after `/pkgs/`; at least one more
/// `/`-terminated segment must follow it.
pub fn package_from_path(path: &str) -> Option<&str> {
    let start = path.find("/pkgs/")? + "/pkgs/".len();
    let rest = &path[start..];
    let (name, tail) = rest.split_once('/')?;
    if name.is_empty() {
        return None;
    }
    // Need `<something>/` after the name.
    match tail.find('/') {
        Some(i) if i > 0 => Some(name),
        _ => None,
    }
}
