use askama::Template;

use crate::error::Error;

/// Props for the failed-billing notice.
///
/// Rendering is a pure function of these fields. Every field carries a
/// default so a notice can be rendered from any subset of caller input.
#[derive(Clone, Debug, Template)]
#[template(path = "failed_billing.html")]
pub struct FailedBillingEmail {
    pub customer_name: String,
    pub company_name: String,
    pub plan_name: String,
    pub amount: String,
    pub retry_url: String,
    pub support_url: String,
    pub attachment_url: String,
    pub invoice_number: Option<String>,
}

impl Default for FailedBillingEmail {
    fn default() -> Self {
        FailedBillingEmail {
            customer_name: "there".to_string(),
            company_name: "Acme Inc.".to_string(),
            plan_name: "Pro Plan".to_string(),
            amount: "$29".to_string(),
            retry_url: "https://example.com/billing/retry".to_string(),
            support_url: "https://example.com/support".to_string(),
            attachment_url: "/invoices/billing-invoice-styled.pdf".to_string(),
            invoice_number: None,
        }
    }
}

impl FailedBillingEmail {
    /// Renders the notice to a static HTML string.
    pub fn render_html(&self) -> Result<String, Error> {
        self.render().map_err(Error::from)
    }
}
