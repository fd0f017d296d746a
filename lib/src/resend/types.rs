use serde::{Deserialize, Serialize};

/// Send request accepted by the Resend `/emails` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<Attachment>,
}

/// A single attachment on the wire: base64 content plus an optional
/// declared MIME type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub content_type: Option<String>,
}

impl From<crate::attachment::Attachment> for Attachment {
    fn from(file: crate::attachment::Attachment) -> Attachment {
        Attachment {
            filename: file.filename,
            content: base64::encode(&file.data),
            content_type: file.content_type.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> SendEmail {
        SendEmail {
            from: "Billing <billing@example.com>".to_string(),
            to: "a@b.com".to_string(),
            subject: "Payment failed".to_string(),
            html: "<p>hi</p>".to_string(),
            attachments: Vec::new(),
        }
    }

    #[test]
    fn attachments_omitted_when_empty() {
        let body = serde_json::to_value(email()).unwrap();
        assert!(body.get("attachments").is_none());
    }

    #[test]
    fn attachment_type_renamed_and_optional() {
        let mut mail = email();
        mail.attachments.push(Attachment {
            filename: "invoice.pdf".to_string(),
            content: base64::encode(b"%PDF-1.4"),
            content_type: Some("application/pdf".to_string()),
        });
        mail.attachments.push(Attachment {
            filename: "notes.txt".to_string(),
            content: base64::encode(b"hello"),
            content_type: None,
        });

        let body = serde_json::to_value(&mail).unwrap();
        let attachments = body["attachments"].as_array().unwrap();
        assert_eq!(attachments[0]["type"], "application/pdf");
        assert!(attachments[1].get("type").is_none());
        assert_eq!(attachments[1]["content"], base64::encode(b"hello"));
    }

    #[test]
    fn loaded_file_converts_to_wire_attachment() {
        let file = crate::attachment::Attachment {
            path: "/tmp/invoice.pdf".into(),
            filename: "invoice.pdf".to_string(),
            data: b"%PDF-1.4".to_vec(),
            content_type: Some("application/pdf"),
        };

        let wire = Attachment::from(file);
        assert_eq!(wire.filename, "invoice.pdf");
        assert_eq!(wire.content, base64::encode(b"%PDF-1.4"));
        assert_eq!(wire.content_type.as_deref(), Some("application/pdf"));
    }
}
