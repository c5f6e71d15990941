use std::sync::Arc;

use crate::domain::entity::{Entity, Stored};
use crate::domain::errors::DomainError;
use crate::domain::ports::CrudRepository;

/// Validated CRUD over one entity type.
pub struct EntityService<E: Entity> {
    repo: Arc<dyn CrudRepository<E>>,
}

impl<E: Entity> EntityService<E> {
    pub fn new(repo: Arc<dyn CrudRepository<E>>) -> Self {
        Self { repo }
    }

    pub fn create(&self, data: E) -> Result<i32, DomainError> {
        data.validate()?;
        let id = self.repo.create(data)?;
        log::debug!("Created {} {}", E::NAME, id);
        Ok(id)
    }

    pub fn get(&self, id: i32) -> Result<Stored<E>, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list(&self) -> Result<Vec<Stored<E>>, DomainError> {
        self.repo.find_all()
    }

    pub fn update(&self, id: i32, data: E) -> Result<(), DomainError> {
        data.validate()?;
        self.repo.update(id, data)
    }

    pub fn delete(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)?;
        log::debug!("Deleted {} {}", E::NAME, id);
        Ok(())
    }
}
