use std::sync::Arc;

use warp::{reply::Reply, Filter, Rejection};

use dunmail::config::Config;
use dunmail::resend::Mailer;

use super::config;
use super::controllers;

pub fn index() -> impl Filter<Extract = (&'static str,), Error = Rejection> + Clone {
    // GET / => 200 OK with a banner
    warp::path::end().map(|| "Welcome to Dunmail!")
}

/// Route for /api/send-failed-billing
///
/// Accepts billing-failure details as JSON and forwards a rendered
/// notice to the delivery provider.
pub fn send_failed_billing(
    config: Arc<Config>,
    mailer: Arc<dyn Mailer>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "send-failed-billing")
        .and(warp::path::end())
        .and(warp::body::content_length_limit(config::MAX_BODY_SIZE))
        .and(warp::body::bytes())
        .and(warp::any().map(move || config.clone()))
        .and(warp::any().map(move || mailer.clone()))
        .and_then(controllers::send_failed_billing)
}
