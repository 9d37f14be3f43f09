//! Attachment resolution: mapping a declared file name to its expected
//! place in the store and deriving extension, MIME type and size from
//! whatever is actually on disk.

use crate::model::Attachment;
use crate::store::ATTACHMENTS_DIR;
use std::path::Path;

/// MIME type used when nothing more specific can be determined.
pub const MIME_FALLBACK: &str = "application/octet-stream";

/// Resolves an attachment file name against a store root.
///
/// The candidate path is always `<store root>/attachments/<name>`, whether
/// or not a file exists there. Size stays unknown for a missing file; the
/// MIME type is probed from content when possible and otherwise derived
/// from the extension alone, so even a dangling reference yields a usable
/// record.
#[must_use]
pub fn resolve(store_root: &Path, file_name: &str) -> Attachment {
    let path = store_root.join(ATTACHMENTS_DIR).join(file_name);
    let extension = extension_of(file_name);
    let size = path.metadata().ok().map(|meta| meta.len());

    if size.is_none() {
        tracing::debug!(file = file_name, "attachment file not present in store");
    }

    Attachment {
        id: file_name.to_owned(),
        source_path: path.display().to_string(),
        file_name: file_name.to_owned(),
        location: format!("{ATTACHMENTS_DIR}/{file_name}"),
        extension: extension.map(str::to_owned),
        mime_type: Some(mime_of(&path, extension)),
        size,
        formatted_size: size.map(format_size),
    }
}

/// Extension after the last `.` of a file name.
///
/// `None` when there is no dot, the dot leads (dotfiles), or the dot
/// trails.
#[must_use]
pub fn extension_of(file_name: &str) -> Option<&str> {
    let dot = file_name.rfind('.')?;
    if dot == 0 || dot == file_name.len() - 1 {
        return None;
    }

    Some(&file_name[dot + 1..])
}

/// MIME type for a candidate path: content probe first, extension table
/// second, generic binary fallback last.
fn mime_of(path: &Path, extension: Option<&str>) -> String {
    if let Ok(Some(kind)) = infer::get_from_path(path) {
        return kind.mime_type().to_owned();
    }

    extension.map_or(MIME_FALLBACK, mime_from_extension).to_owned()
}

fn mime_from_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "xml" => "application/xml",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "avi" => "video/avi",
        "mov" => "video/quicktime",
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "7z" => "application/x-7z-compressed",
        _ => MIME_FALLBACK,
    }
}

/// Human-readable size: bytes below 1 KiB, one decimal above.
///
/// # Example
/// ```
/// use xjs_store::attachment::format_size;
///
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
#[must_use]
pub fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;

    #[allow(
        clippy::as_conversions,
        clippy::cast_precision_loss,
        reason = "attachment sizes are far below 2^52"
    )]
    let size = bytes as f64;

    if size < KIB {
        format!("{bytes} B")
    } else if size < KIB * KIB {
        format!("{:.1} KB", size / KIB)
    } else if size < KIB * KIB * KIB {
        format!("{:.1} MB", size / (KIB * KIB))
    } else {
        format!("{:.1} GB", size / (KIB * KIB * KIB))
    }
}

#[cfg(test)]
mod tests {
    use super::{extension_of, format_size, resolve};
    use crate::store::ATTACHMENTS_DIR;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extension_cases() {
        assert_eq!(extension_of("scan.pdf"), Some("pdf"));
        assert_eq!(extension_of("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".gitignore"), None);
        assert_eq!(extension_of("trailing."), None);
    }

    #[test]
    fn format_size_units() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn resolve_existing_file() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(ATTACHMENTS_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "0123456789").unwrap();

        let attachment = resolve(root.path(), "notes.txt");

        assert_eq!(attachment.id, "notes.txt");
        assert_eq!(attachment.file_name, "notes.txt");
        assert_eq!(attachment.location, "attachments/notes.txt");
        assert_eq!(attachment.extension.as_deref(), Some("txt"));
        assert_eq!(attachment.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(attachment.size, Some(10));
        assert_eq!(attachment.formatted_size.as_deref(), Some("10 B"));
    }

    #[test]
    fn resolve_probes_content_over_extension() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join(ATTACHMENTS_DIR);
        fs::create_dir_all(&dir).unwrap();

        // PNG magic bytes under a lying extension
        let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        fs::write(dir.join("photo.dat"), png_header).unwrap();

        let attachment = resolve(root.path(), "photo.dat");

        assert_eq!(attachment.mime_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn resolve_dangling_reference() {
        let root = TempDir::new().unwrap();

        let attachment = resolve(root.path(), "missing-scan.pdf");

        assert_eq!(attachment.size, None);
        assert_eq!(attachment.formatted_size, None);
        assert_eq!(attachment.mime_type.as_deref(), Some("application/pdf"));
        assert!(attachment.source_path.ends_with("missing-scan.pdf"));
    }

    #[test]
    fn resolve_dangling_without_extension_is_generic() {
        let root = TempDir::new().unwrap();

        let attachment = resolve(root.path(), "mystery");

        assert_eq!(attachment.extension, None);
        assert_eq!(
            attachment.mime_type.as_deref(),
            Some("application/octet-stream")
        );
    }
}
