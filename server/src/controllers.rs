use std::sync::Arc;

use bytes::Bytes;
use warp::{reply::Reply, Rejection};

use dunmail::api::{SendRequest, SendResponse};
use dunmail::attachment;
use dunmail::config::Config;
use dunmail::resend::{self, Mailer};
use dunmail::template::FailedBillingEmail;
use dunmail::Error;

use super::errors;

fn reject(err: Error) -> Rejection {
    warp::reject::custom(errors::ApiError(err))
}

/// POST /api/send-failed-billing
///
/// Linear pipeline: credential check, parse, validate, attach, render,
/// deliver. Each step fails closed; nothing is retried.
pub async fn send_failed_billing(
    body: Bytes,
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> Result<impl Reply, Rejection> {
    // Checked per request so a deploy without the secret still boots.
    if config.resend_api_key.is_none() {
        return Err(reject(Error::Config(
            "Missing RESEND_API_KEY on server".to_string(),
        )));
    }

    // Malformed JSON is treated as an empty payload; validation below
    // turns that into a field-level 400.
    let req: SendRequest = serde_json::from_slice(&body).unwrap_or_default();

    let to = match req.to.as_deref() {
        Some(to) if !to.is_empty() => to.to_string(),
        _ => {
            return Err(reject(Error::BadRequest(
                "Missing or invalid 'to' address".to_string(),
            )))
        }
    };

    let customer_name = req.customer_name.clone().filter(|n| !n.is_empty());
    let amount = req.amount.clone().filter(|a| a.is_truthy());
    let (customer_name, amount) = match (customer_name, amount) {
        (Some(name), Some(amount)) => (name, amount),
        _ => {
            return Err(reject(Error::BadRequest(
                "Missing customerName or amount".to_string(),
            )))
        }
    };

    let attachments = match attachment::resolve(req.attach_path.as_deref()) {
        Some(path) => {
            let file = attachment::Attachment::load(path).map_err(reject)?;
            log::info!("Attaching {} ({} bytes)", file.filename, file.data.len());
            vec![resend::Attachment::from(file)]
        }
        None => Vec::new(),
    };

    let mut props = FailedBillingEmail {
        customer_name,
        amount: amount.to_string(),
        invoice_number: req.invoice_number.clone(),
        ..FailedBillingEmail::default()
    };
    if let Some(url) = req.retry_url {
        props.retry_url = url;
    }
    let html = props.render_html().map_err(reject)?;

    let email = resend::SendEmail {
        from: config.sender().to_string(),
        to,
        subject: format!("Payment failed — ${}", amount),
        html,
        attachments,
    };

    let data = mailer.send(&email).await.map_err(reject)?;

    Ok(warp::reply::json(&SendResponse {
        success: true,
        data,
    }))
}
