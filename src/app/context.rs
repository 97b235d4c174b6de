use std::sync::Arc;
use std::time::Duration;

use crate::app::Result;
use crate::config::Config;
use crate::hooks::{CannedHookGenerator, HookGenerator};
use crate::library::Library;
use crate::persist::{Persistence, SimulatedRemote};
use crate::samples;
use crate::scrape::{HttpRpcClient, RpcClient, ScrapeOrchestrator};
use crate::store::ContentStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<ContentStore>,
    pub orchestrator: ScrapeOrchestrator,
    pub library: Library,
    pub hooks: Arc<dyn HookGenerator>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let store = Arc::new(ContentStore::new(samples::seed_items()));

        let client: Arc<dyn RpcClient> = Arc::new(HttpRpcClient::from_config(&config.scrape)?);
        let orchestrator = ScrapeOrchestrator::new(client, &config.scrape);

        let persistence: Arc<dyn Persistence> = Arc::new(SimulatedRemote::new(
            Duration::from_millis(config.persist.latency_ms),
        ));
        let library = Library::new(store.clone(), persistence);

        let hooks: Arc<dyn HookGenerator> = Arc::new(CannedHookGenerator::new(
            Duration::from_millis(config.hooks.latency_ms),
        ));

        Ok(Self {
            config,
            store,
            orchestrator,
            library,
            hooks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_seeds_store() {
        let ctx = AppContext::new(Config::default()).unwrap();
        assert!(!ctx.store.items().unwrap().is_empty());
    }

    #[test]
    fn test_context_rejects_invalid_endpoint() {
        let mut config = Config::default();
        config.scrape.endpoint = Some("definitely not a url".into());
        assert!(AppContext::new(config).is_err());
    }
}
