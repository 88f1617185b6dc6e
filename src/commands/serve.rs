//! Serve command
//!
//! Runs the HTTP API on a local port until interrupted.

use anyhow::anyhow;
use tiny_http::Server;

use taskmatrix::config::Config;

use super::breakdown::model_source;
use crate::server::tiny_http::{ServerContext, handle_api_request};

/// Start the HTTP API server
pub fn serve(config: &Config, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    let addr = format!("{}:{port}", config.server.host);
    let server = Server::http(&addr).map_err(|e| anyhow!("Failed to start server: {e}"))?;

    let ctx = ServerContext {
        policy: config.ranking,
        source: model_source(config),
    };

    println!("taskmatrix API listening on http://{addr}/api/v1");
    println!();
    println!("Press Ctrl+C to stop");
    log::info!("serving on {addr}");

    for mut request in server.incoming_requests() {
        let response = handle_api_request(&mut request, &ctx);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}
