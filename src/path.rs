//! Windows-style path normalization and resolution.
//!
//! Paths accept both `\` and `/` separators and are stored with `/` only. An
//! absolute path is a drive key (`C:`) optionally followed by `/`-separated
//! segments; `~` expands to the home directory.

/// Home directory that `~` expands to.
pub const HOME: &str = "C:/Users/User";

/// Drive used when a path carries no usable drive letter.
pub const DEFAULT_DRIVE: &str = "C:";

/// Working directory that mutation helpers resolve their paths against.
pub const ANCHOR: &str = "C:/";

/// Converts separators to `/` and strips trailing separators.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/").trim_end_matches('/').to_string()
}

/// Returns the `X:` prefix when `path` starts with a drive letter.
pub fn drive_prefix(path: &str) -> Option<&str> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        Some(&path[..2])
    } else {
        None
    }
}

/// Splits `X:` / `X:/rest` into an uppercase drive key and the remainder.
///
/// Anything else falls back to the default drive with no segments.
fn split_drive(path: &str) -> (String, &str) {
    match drive_prefix(path) {
        Some(drive) if path.len() == 2 || path.as_bytes()[2] == b'/' => {
            (drive.to_ascii_uppercase(), &path[2..])
        }
        _ => (DEFAULT_DRIVE.to_string(), ""),
    }
}

/// Resolves `target` against `cwd` using the built-in [`HOME`].
pub fn to_absolute(cwd: &str, target: &str) -> String {
    to_absolute_in(HOME, cwd, target)
}

/// Resolves `target` against `cwd`, expanding `~` to `home`.
///
/// `.` segments are dropped and `..` pops the previous segment; popping past
/// the drive root is ignored. The result is `DRIVE` or `DRIVE/seg/...`.
pub fn to_absolute_in(home: &str, cwd: &str, target: &str) -> String {
    let cwd = normalize_path(cwd);
    let target = normalize_path(target);

    let joined = if target == "~" || target.starts_with("~/") {
        format!("{}{}", normalize_path(home), &target[1..])
    } else if drive_prefix(&target).is_some() {
        target
    } else if target.starts_with('/') {
        let drive = drive_prefix(&cwd).unwrap_or(DEFAULT_DRIVE);
        format!("{drive}{target}")
    } else {
        format!("{cwd}/{target}")
    };

    let (drive, rest) = split_drive(&joined);
    let mut resolved: Vec<&str> = Vec::new();
    for part in rest.split('/').filter(|part| !part.is_empty()) {
        match part {
            "." => {}
            ".." => {
                resolved.pop();
            }
            _ => resolved.push(part),
        }
    }

    if resolved.is_empty() {
        drive
    } else {
        format!("{drive}/{}", resolved.join("/"))
    }
}

/// Splits an absolute path into `[DRIVE, seg1, seg2, ...]`.
///
/// Returns an empty vector when the path does not start with a drive key.
pub fn split_path(absolute: &str) -> Vec<String> {
    let Some(drive) = drive_prefix(absolute) else {
        return Vec::new();
    };
    let rest = &absolute[2..];
    if !rest.is_empty() && !rest.starts_with('/') {
        return Vec::new();
    }

    std::iter::once(drive.to_ascii_uppercase())
        .chain(
            rest.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        )
        .collect()
}

/// Joins segments produced by [`split_path`] back into an absolute path.
pub fn join_segments(segments: &[String]) -> String {
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_path_matches_expected_cases() {
        let cases = [
            ("C:\\Users\\User\\", "C:/Users/User"),
            ("C:/Users//", "C:/Users"),
            ("/", ""),
            ("", ""),
            ("docs\\notes.txt", "docs/notes.txt"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_path(input), expected, "input={input:?}");
        }
    }

    #[test]
    fn to_absolute_matches_expected_cases() {
        let cases = [
            ("C:/", "Users", "C:/Users"),
            ("C:/Users", "User\\Desktop", "C:/Users/User/Desktop"),
            ("C:/Users/User", "..", "C:/Users"),
            ("C:/", "../../x", "C:/x"),
            ("C:/Users", "./User/./Documents", "C:/Users/User/Documents"),
            ("D:/Games", "~", "C:/Users/User"),
            ("D:/Games", "~/Documents", "C:/Users/User/Documents"),
            ("D:/Games", "/Backups", "D:/Backups"),
            ("Games", "/Backups", "C:/Backups"),
            ("C:/Users", "D:\\Backups\\", "D:/Backups"),
            ("C:/Users", "d:/backups", "D:/backups"),
            ("C:/Users", "D:", "D:"),
            ("C:/Users", "", "C:/Users"),
            ("C:/Users", "~other", "C:/Users/~other"),
        ];

        for (cwd, target, expected) in cases {
            assert_eq!(
                to_absolute(cwd, target),
                expected,
                "cwd={cwd:?} target={target:?}"
            );
        }
    }

    #[test]
    fn malformed_drive_syntax_falls_back_to_default_drive() {
        assert_eq!(to_absolute("C:/Users", "D:Backups"), "C:");
        assert_eq!(to_absolute("nowhere", "x"), "C:");
    }

    #[test]
    fn lone_separator_target_stays_in_cwd() {
        assert_eq!(to_absolute("D:/Games", "/"), "D:/Games");
        assert_eq!(to_absolute("D:/Games", "\\"), "D:/Games");
    }

    #[test]
    fn custom_home_is_normalized_before_expansion() {
        assert_eq!(
            to_absolute_in("D:\\Profiles\\guest\\", "C:/", "~/Music"),
            "D:/Profiles/guest/Music"
        );
    }

    #[test]
    fn split_path_yields_drive_then_segments() {
        assert_eq!(split_path("C:/Users/User"), vec!["C:", "Users", "User"]);
        assert_eq!(split_path("d:"), vec!["D:"]);
        assert_eq!(split_path("C:/a//b/"), vec!["C:", "a", "b"]);
        assert!(split_path("/Users").is_empty());
        assert!(split_path("C:Users").is_empty());
        assert!(split_path("").is_empty());
    }

    #[test]
    fn join_segments_inverts_split_path() {
        let segments = split_path("C:/Program Files (x86)/App");
        assert_eq!(join_segments(&segments), "C:/Program Files (x86)/App");
        assert_eq!(join_segments(&segments[..1]), "C:");
    }
}
