//! Terminal kitchen display: spawns the board synchronizer and prints the
//! rendered columns whenever a new snapshot lands.

use kitchen_board::tracing::setup_tracing;
use kitchen_board::{render, BoardActor, BoardConfig, HttpOrderApi, StaticToken};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = BoardConfig::from_env();
    let token = std::env::var("ORDER_API_TOKEN").unwrap_or_default();
    info!(base_url = %config.base_url, "Starting kitchen display");

    let api = HttpOrderApi::new(&config.base_url, Arc::new(StaticToken::new(token)));
    let (actor, client) = BoardActor::new(api, &config);
    let actor_handle = tokio::spawn(actor.run());

    let mut snapshots = client.subscribe();
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let rendered = render(&snapshots.borrow_and_update());
                println!("{rendered}");
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    // Dropping every client handle closes the channel and ends the actor.
    drop(client);
    drop(snapshots);
    let _ = actor_handle.await;

    info!("Kitchen display stopped");
}
