use crate::books::factory::BookRepositoryRegistry;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub(crate) fn create_catalog_service(config: &Configuration, registry: &BookRepositoryRegistry) -> LibraryResult<Box<dyn CatalogService>> {
    let book_repo = registry.get(config.store.as_str())?;
    Ok(Box::new(CatalogServiceImpl::new(config, book_repo)))
}
