//! Backend handles injected into the component tree.

use std::{rc::Rc, sync::Arc};

use dioxus::prelude::*;
use ic_core::{AuthProvider, BackendClient, PortalResult, PortalStore, RestAuth, RestStore};
use ic_types::PortalConfig;

use crate::app::storage::BrowserSessionPersistence;

/// Store and auth provider shared by every page.
///
/// Pages take these from context instead of reaching for a global client,
/// so a different implementation can be provided at the root.
#[derive(Clone)]
pub struct PortalServices {
    pub store: Rc<dyn PortalStore>,
    pub auth: Rc<dyn AuthProvider>,
}

impl PortalServices {
    pub fn new(store: Rc<dyn PortalStore>, auth: Rc<dyn AuthProvider>) -> Self {
        Self { store, auth }
    }

    /// REST store and auth sharing one client, session persisted in localStorage.
    pub fn connect(config: &PortalConfig) -> PortalResult<Self> {
        let persistence = BrowserSessionPersistence::new(&config.session_storage_key);
        let client = BackendClient::new(config)?.with_persistence(Arc::new(persistence));
        Ok(Self::new(
            Rc::new(RestStore::new(client.clone())),
            Rc::new(RestAuth::new(client)),
        ))
    }
}

impl PartialEq for PortalServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && Rc::ptr_eq(&self.auth, &other.auth)
    }
}

pub fn use_services() -> PortalServices {
    use_context::<PortalServices>()
}
