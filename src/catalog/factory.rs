use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::LibraryService;
use crate::catalog::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub fn create_library_service(config: &Configuration, store: RepositoryStore) -> Arc<dyn LibraryService> {
    let book_repo = factory::create_book_repository(store);
    let publisher = create_publisher(store.gateway_publisher());
    Arc::new(LibraryServiceImpl::new(config, book_repo, publisher))
}
