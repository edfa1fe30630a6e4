pub mod modules;
pub mod shared;

use modules::{
    catalog::{
        infrastructure::demo_data::seed_demo_catalog, CatalogRepository, CatalogService, Category,
        DocumentCatalogRepository,
    },
    profile::{
        BookingRepository, BookingRepositoryImpl, CheckoutService, ProfileRepository,
        ProfileRepositoryImpl, ProfileService,
    },
    store::{DocumentStore, FirestoreDocumentStore, InMemoryDocumentStore},
    trips::{TripRepository, TripRepositoryImpl, TripService},
};
use shared::{
    config::{AppConfig, StoreBackend},
    AppResult,
};
use std::sync::Arc;

/// Demo items generated per category when seeding the in-memory store
pub const DEMO_ITEMS_PER_CATEGORY: usize = 24;

/// Wired application services sharing one document store
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub catalog: Arc<CatalogService>,
    pub profiles: Arc<ProfileService>,
    pub trips: Arc<TripService>,
    pub checkout: Arc<CheckoutService>,
}

impl AppState {
    /// Construct the configured store and every service on top of it
    pub fn build(config: &AppConfig) -> AppResult<Self> {
        let store: Arc<dyn DocumentStore> = match &config.store {
            StoreBackend::Memory => {
                let memory = Arc::new(in_memory_store());
                if config.seed_demo_data {
                    seed_demo_catalog(&memory, DEMO_ITEMS_PER_CATEGORY)?;
                }
                memory as Arc<dyn DocumentStore>
            }
            StoreBackend::Firestore(firestore) => {
                Arc::new(FirestoreDocumentStore::new(firestore.clone())?)
            }
        };

        log::info!("Using {} document store", store.backend_name());
        Ok(Self::with_store(store, config))
    }

    pub fn with_store(store: Arc<dyn DocumentStore>, config: &AppConfig) -> Self {
        let catalog_repository: Arc<dyn CatalogRepository> = Arc::new(
            DocumentCatalogRepository::new(Arc::clone(&store), config.search.clone()),
        );
        let profile_repository: Arc<dyn ProfileRepository> =
            Arc::new(ProfileRepositoryImpl::new(Arc::clone(&store)));
        let booking_repository: Arc<dyn BookingRepository> =
            Arc::new(BookingRepositoryImpl::new(Arc::clone(&store)));
        let trip_repository: Arc<dyn TripRepository> =
            Arc::new(TripRepositoryImpl::new(Arc::clone(&store)));

        let catalog = Arc::new(CatalogService::new(catalog_repository, &config.search));

        Self {
            profiles: Arc::new(ProfileService::new(Arc::clone(&profile_repository))),
            trips: Arc::new(TripService::new(
                trip_repository,
                Arc::clone(&profile_repository),
            )),
            checkout: Arc::new(CheckoutService::new(
                Arc::clone(&catalog),
                profile_repository,
                booking_repository,
                config.loyalty.clone(),
            )),
            catalog,
            store,
        }
    }
}

/// In-memory store with the same composite indexes the managed store has:
/// origin plus destination on the route-based categories.
pub fn in_memory_store() -> InMemoryDocumentStore {
    Category::ALL
        .iter()
        .filter(|c| c.item_type().is_route_based())
        .fold(InMemoryDocumentStore::new(), |store, category| {
            store.with_composite_index(category.collection_name(), &["from", "to"])
        })
}
