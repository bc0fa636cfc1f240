//! What a drop carries, and what it turns into.

use element::{ElementContent, ElementKind};
use smallvec::SmallVec;
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// A file dragged in from the OS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DroppedFile {
    pub path: PathBuf,
    pub content_type: String,
}

impl DroppedFile {
    /// Describe a file, inferring its content type from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = content_type_for_path(&path).to_string();
        Self { path, content_type }
    }

    pub fn with_content_type(path: impl Into<PathBuf>, content_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// A percent-encoded `file://` url for the file, valid for this session.
    /// `None` when the path is not absolute.
    pub fn local_url(&self) -> Option<String> {
        Url::from_file_path(&self.path).ok().map(String::from)
    }
}

/// The file a `file://` image url refers to.
pub(crate) fn local_path(image_url: &str) -> Option<PathBuf> {
    let url = Url::parse(image_url).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// The drag-data channel as seen by the canvas on drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropPayload {
    pub files: SmallVec<[DroppedFile; 2]>,
    pub text: Option<String>,
    /// Type tag set by a palette token.
    pub element_kind: Option<ElementKind>,
}

impl DropPayload {
    pub fn palette(kind: ElementKind) -> Self {
        Self {
            element_kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn files(files: impl IntoIterator<Item = DroppedFile>) -> Self {
        Self {
            files: files.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn from_paths(paths: &[PathBuf]) -> Self {
        Self::files(paths.iter().map(DroppedFile::new))
    }

    /// Decide what, if anything, this drop creates.
    ///
    /// First match wins: an image file, then any other file (ignored),
    /// then plain text, then the palette type tag. `armed` stands in for
    /// the tag when the payload does not carry one.
    pub fn resolve(&self, armed: Option<ElementKind>) -> DropOutcome {
        if let Some(file) = self.files.first() {
            if file.is_image() {
                return match file.local_url() {
                    Some(url) => DropOutcome::Created(ElementContent::image(url)),
                    None => DropOutcome::Ignored(IgnoreReason::RelativePath {
                        path: file.path.clone(),
                    }),
                };
            }
            return DropOutcome::Ignored(IgnoreReason::UnsupportedFile {
                path: file.path.clone(),
                content_type: file.content_type.clone(),
            });
        }

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            return DropOutcome::Created(ElementContent::text(text));
        }

        match self.element_kind.or(armed) {
            Some(kind) => DropOutcome::Created(kind.default_content()),
            None => DropOutcome::Ignored(IgnoreReason::Empty),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Created(ElementContent),
    Ignored(IgnoreReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A file that is not an image.
    UnsupportedFile { path: PathBuf, content_type: String },
    /// A file path that can't be turned into a `file://` url.
    RelativePath { path: PathBuf },
    /// Nothing usable in the payload.
    Empty,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::UnsupportedFile { path, content_type } => {
                write!(f, "dropped file is not an image: {} ({content_type})", path.display())
            }
            IgnoreReason::RelativePath { path } => {
                write!(f, "dropped file has no absolute path: {}", path.display())
            }
            IgnoreReason::Empty => write!(f, "drop carried nothing to place"),
        }
    }
}

fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        Some("tif" | "tiff") => "image/tiff",
        Some("ico") => "image/x-icon",
        Some("txt" | "md") => "text/plain",
        Some("html" | "htm") => "text/html",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use element::PLACEHOLDER_IMAGE_URL;

    #[test]
    fn content_type_from_extension() {
        assert_eq!(DroppedFile::new("/tmp/a.PNG").content_type, "image/png");
        assert_eq!(DroppedFile::new("/tmp/a.jpeg").content_type, "image/jpeg");
        assert_eq!(DroppedFile::new("/tmp/notes.txt").content_type, "text/plain");
        assert_eq!(
            DroppedFile::new("/tmp/Makefile").content_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn image_file_becomes_image_element() {
        let payload = DropPayload::from_paths(&[PathBuf::from("/tmp/cat.png")]);
        assert_eq!(
            payload.resolve(None),
            DropOutcome::Created(ElementContent::image("file:///tmp/cat.png"))
        );
    }

    #[test]
    fn image_url_is_percent_encoded() {
        let file = DroppedFile::new("/tmp/my cat #1?.png");
        let url = file.local_url().unwrap();
        assert_eq!(url, "file:///tmp/my%20cat%20%231%3F.png");
        assert_eq!(local_path(&url), Some(file.path));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_survives_the_url() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/tmp/caf\xe9.png"));
        let payload = DropPayload::from_paths(&[path.clone()]);
        let DropOutcome::Created(ElementContent::Image { image_url }) = payload.resolve(None) else {
            panic!("expected an image element");
        };
        assert_eq!(image_url, "file:///tmp/caf%E9.png");
        assert_eq!(local_path(&image_url), Some(path));
    }

    #[test]
    fn relative_image_path_is_ignored() {
        let payload = DropPayload::from_paths(&[PathBuf::from("cat.png")]);
        assert_eq!(
            payload.resolve(None),
            DropOutcome::Ignored(IgnoreReason::RelativePath {
                path: PathBuf::from("cat.png")
            })
        );
    }

    #[test]
    fn remote_urls_have_no_local_path() {
        assert_eq!(local_path(PLACEHOLDER_IMAGE_URL), None);
        assert_eq!(local_path("not a url"), None);
    }

    #[test]
    fn non_image_file_is_ignored_even_with_text_and_tag() {
        let mut payload = DropPayload::from_paths(&[PathBuf::from("/tmp/report.pdf")]);
        payload.text = Some("Hello".into());
        payload.element_kind = Some(ElementKind::Button);

        match payload.resolve(Some(ElementKind::Text)) {
            DropOutcome::Ignored(IgnoreReason::UnsupportedFile { content_type, .. }) => {
                assert_eq!(content_type, "application/pdf");
            }
            other => panic!("expected unsupported file, got {other:?}"),
        }
    }

    #[test]
    fn only_first_file_counts() {
        let payload = DropPayload::files([
            DroppedFile::new("/tmp/readme.txt"),
            DroppedFile::new("/tmp/cat.png"),
        ]);
        assert!(matches!(payload.resolve(None), DropOutcome::Ignored(_)));
    }

    #[test]
    fn explicit_content_type_wins_over_extension() {
        let payload =
            DropPayload::files([DroppedFile::with_content_type("/tmp/blob", "image/png")]);
        assert!(matches!(
            payload.resolve(None),
            DropOutcome::Created(ElementContent::Image { .. })
        ));
    }

    #[test]
    fn text_beats_palette_tag() {
        let mut payload = DropPayload::text("Hello");
        payload.element_kind = Some(ElementKind::Button);
        assert_eq!(
            payload.resolve(None),
            DropOutcome::Created(ElementContent::text("Hello"))
        );
    }

    #[test]
    fn empty_text_falls_through_to_tag() {
        let mut payload = DropPayload::text("");
        payload.element_kind = Some(ElementKind::Image);
        assert_eq!(
            payload.resolve(None),
            DropOutcome::Created(ElementContent::image(PLACEHOLDER_IMAGE_URL))
        );
    }

    #[test]
    fn armed_kind_used_when_payload_has_no_tag() {
        let payload = DropPayload::default();
        assert_eq!(
            payload.resolve(Some(ElementKind::Button)),
            DropOutcome::Created(ElementContent::button("Click Me"))
        );
    }

    #[test]
    fn payload_tag_beats_armed_kind() {
        let payload = DropPayload::palette(ElementKind::Text);
        assert_eq!(
            payload.resolve(Some(ElementKind::Button)),
            DropOutcome::Created(ElementContent::text(""))
        );
    }

    #[test]
    fn empty_payload_is_ignored() {
        assert_eq!(
            DropPayload::default().resolve(None),
            DropOutcome::Ignored(IgnoreReason::Empty)
        );
    }
}
