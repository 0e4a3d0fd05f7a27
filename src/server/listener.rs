use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves connections until the task is
/// cancelled. Each accepted socket gets its own task running the full
/// request pipeline; connections share no state.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    // local_addr shows the real port when listen_addr asked for port 0
    info!("Listening on {}", listener.local_addr()?);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let document_root = cfg.document_root.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, document_root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
