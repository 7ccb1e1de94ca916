pub mod api;
pub mod ui;

use crate::relay::ChatRelay;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use log::error;

use self::ui::UiConfig;

pub struct Server {
    addr: String,
    relay: Arc<dyn ChatRelay>,
}

impl Server {
    pub fn new(addr: String, relay: Arc<dyn ChatRelay>) -> Self {
        Self { addr, relay }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let listener = match TcpListener::bind(&self.addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind chat UI to {}: {}. Try a different port.", self.addr, e);
                return Err(e.into());
            }
        };

        api::serve(listener, self.relay.clone(), UiConfig::default()).await
    }
}
