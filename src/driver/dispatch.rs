use std::sync::Arc;
use std::time::Duration;

use crate::http::HttpGet;
use crate::logger::LoadLog;

/// Spawns one detached GET. The outcome is logged and never reported back.
pub(super) fn spawn_request(
    client: Arc<dyn HttpGet>,
    log: Arc<dyn LoadLog>,
    url: String,
    timeout: Duration,
) {
    drop(tokio::spawn(async move {
        send_get_request(client.as_ref(), log.as_ref(), &url, timeout).await;
    }));
}

async fn send_get_request(
    client: &dyn HttpGet,
    log: &dyn LoadLog,
    url: &str,
    timeout: Duration,
) {
    match client.get(url, timeout).await {
        Ok(response) => {
            log.info(&format!(
                "Status: {}, Data: {}, Url: {}",
                response.status, response.body, url
            ));
        }
        Err(err) => {
            log.error(&format!("Error: {}, Url: {}", err, url));
        }
    }
}
