use super::error::DataLayerError;

/// Read/stage access to one entity collection.
///
/// Entities passed to [`Repository::add`] are only staged; they become visible through
/// [`Repository::all`] once [`super::unit_of_work::UnitOfWork::save`] commits them.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait Repository<T: Send + Sync + 'static>: Send + Sync {
    /// Snapshot of all committed entities, in storage order
    async fn all(&self) -> Result<Vec<T>, DataLayerError>;

    async fn add(&self, entity: T) -> Result<(), DataLayerError>;
}
