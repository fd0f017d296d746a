use warp::{self, Filter};

use super::config;
use super::errors;
use super::routes;

pub async fn run(arg: config::HttpArg) {
    log::info!("Starting HTTP server at 0.0.0.0:{}...", arg.port);

    let index = routes::index();
    let send = routes::send_failed_billing(arg.config, arg.mailer);

    let get = warp::get().and(index);
    let post = warp::post().and(send);

    let router = get.or(post).recover(errors::handle_rejection);

    warp::serve(router).run(([0, 0, 0, 0], arg.port)).await;
}
