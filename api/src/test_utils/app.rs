//! Router harness
//!
//! Builds the real router over in-memory repositories. Tests keep the
//! repository handles to inspect stored state and call logs afterwards.

use std::sync::Arc;

use axum_test::TestServer;

use super::fixtures::test_hasher;
use super::mocks::{
    InMemoryOrderRepository, InMemoryProductRepository, InMemorySupplierRepository,
    InMemoryUserRepository,
};
use crate::{build_router, AppState};

#[derive(Default)]
pub struct TestRepos {
    pub users: Arc<InMemoryUserRepository>,
    pub orders: Arc<InMemoryOrderRepository>,
    pub products: Arc<InMemoryProductRepository>,
    pub suppliers: Arc<InMemorySupplierRepository>,
}

impl TestRepos {
    pub fn state(&self) -> AppState {
        AppState::new(
            self.users.clone(),
            self.orders.clone(),
            self.products.clone(),
            self.suppliers.clone(),
            test_hasher(),
        )
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(build_router(self.state())).expect("Failed to start test server")
    }
}
