//! Android `Uri` value

use std::fmt;

/// Characters `Uri.encode` leaves alone beyond the RFC 3986 unreserved set.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// String form of an `android.net.Uri`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri(String);

impl Uri {
    /// Wrap a URI string produced by the platform (e.g. a FileProvider `content://` URI).
    #[must_use]
    pub fn parse(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw `file://` URI for an absolute path, encoding each path segment the
    /// way `Uri.fromFile` does.
    #[must_use]
    pub fn from_file(path: &str) -> Self {
        let encoded = path
            .split('/')
            .map(encode_segment)
            .collect::<Vec<_>>()
            .join("/");
        if encoded.starts_with('/') {
            Self(format!("file://{encoded}"))
        } else {
            Self(format!("file:///{encoded}"))
        }
    }

    /// `package:` URI targeting an application package.
    #[must_use]
    pub fn package(package_name: &str) -> Self {
        Self(format!("package:{package_name}"))
    }

    /// Scheme part, lowercased (`content`, `file`, `package`, ...).
    #[must_use]
    pub fn scheme(&self) -> Option<String> {
        self.0
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase())
            .filter(|s| !s.is_empty())
    }

    /// Whether this is a raw filesystem URI.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.scheme().as_deref() == Some("file")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn encode_segment(segment: &str) -> String {
    KEPT_MARKS
        .iter()
        .fold(urlencoding::encode(segment).into_owned(), |acc, (escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
