use std::path::{Path, PathBuf};

use crate::error::Error;

/// Fixed fallback locations searched when the caller supplies no path.
/// Relative entries are resolved against the working directory.
const CANDIDATES: [&str; 4] = [
    "attachments/billing-invoice.pdf",
    "public/invoices/billing-invoice-styled.pdf",
    "/mnt/data/billing-invoice.pdf",
    "/mnt/data/billing-invoice-styled.pdf",
];

/// Picks the attachment path for an outgoing email.
///
/// An explicit path always wins and is never existence-checked here:
/// absolute paths are returned verbatim, relative ones are resolved
/// against the working directory. With no explicit path, the candidates
/// are tried in order and the first one that exists wins.
pub fn resolve(explicit: Option<&str>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        let p = Path::new(p);
        if p.is_absolute() {
            return Some(p.to_path_buf());
        }
        let cwd = std::env::current_dir().ok()?;
        return Some(cwd.join(p));
    }

    let cwd = std::env::current_dir().ok()?;
    let candidates: Vec<PathBuf> = CANDIDATES
        .iter()
        .map(|c| {
            let p = Path::new(c);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                cwd.join(p)
            }
        })
        .collect();

    first_existing(&candidates)
}

fn first_existing(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.exists()).cloned()
}

/// A file loaded from disk, ready to be encoded onto the provider request.
#[derive(Clone, Debug)]
pub struct Attachment {
    pub path: PathBuf,
    pub filename: String,
    pub data: Vec<u8>,
    pub content_type: Option<&'static str>,
}

impl Attachment {
    /// Reads the file in a single shot. A path that vanished since
    /// resolution surfaces as `AttachmentNotFound` here; there is no
    /// separate existence check racing the read.
    pub fn load(path: PathBuf) -> Result<Self, Error> {
        let data = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::AttachmentNotFound(path.display().to_string())
            } else {
                Error::Generic(e.to_string())
            }
        })?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_for(&filename);

        Ok(Attachment {
            path,
            filename,
            data,
            content_type,
        })
    }
}

/// Only the handful of types the billing mail ever attaches. Anything
/// else is sent without a declared type.
pub fn mime_for(filename: &str) -> Option<&'static str> {
    let ext = Path::new(filename).extension()?.to_str()?.to_lowercase();

    match ext.as_str() {
        "pdf" => Some("application/pdf"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_absolute_path_returned_verbatim() {
        // Deliberately nonexistent: explicit paths skip the existence check.
        let resolved = resolve(Some("/no/such/invoice.pdf")).unwrap();
        assert_eq!(resolved, PathBuf::from("/no/such/invoice.pdf"));
    }

    #[test]
    fn explicit_relative_path_joined_to_cwd() {
        let resolved = resolve(Some("invoices/latest.pdf")).unwrap();
        let expected = std::env::current_dir().unwrap().join("invoices/latest.pdf");
        assert_eq!(resolved, expected);
    }

    #[test]
    fn first_existing_respects_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("b.pdf");
        let third = dir.path().join("c.pdf");
        std::fs::write(&second, b"b").unwrap();
        std::fs::write(&third, b"c").unwrap();

        let candidates = vec![dir.path().join("a.pdf"), second.clone(), third];
        assert_eq!(first_existing(&candidates), Some(second));
    }

    #[test]
    fn first_existing_empty_when_none_exist() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().join("a.pdf"), dir.path().join("b.pdf")];
        assert_eq!(first_existing(&candidates), None);
    }

    #[test]
    fn load_reads_bytes_and_infers_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice.pdf");
        std::fs::write(&path, b"%PDF-1.4").unwrap();

        let attachment = Attachment::load(path).unwrap();
        assert_eq!(attachment.filename, "invoice.pdf");
        assert_eq!(attachment.data, b"%PDF-1.4");
        assert_eq!(attachment.content_type, Some("application/pdf"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.pdf");

        match Attachment::load(path.clone()) {
            Err(Error::AttachmentNotFound(p)) => {
                assert_eq!(p, path.display().to_string())
            }
            other => panic!("expected AttachmentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn mime_inference_is_case_insensitive_and_closed() {
        assert_eq!(mime_for("invoice.pdf"), Some("application/pdf"));
        assert_eq!(mime_for("scan.PNG"), Some("image/png"));
        assert_eq!(mime_for("photo.JpEg"), Some("image/jpeg"));
        assert_eq!(mime_for("photo.jpg"), Some("image/jpeg"));
        assert_eq!(mime_for("notes.txt"), None);
        assert_eq!(mime_for("no-extension"), None);
    }
}
