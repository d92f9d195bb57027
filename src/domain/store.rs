use tracing::{debug, warn};

use super::body::{Body, BodyDesc, BodyId};
use super::error::{SimError, SimResult};

/// Fixed-capacity body array. Bodies are appended and never removed.
pub struct BodyStore {
    bodies: Vec<Body>,
    capacity: usize,
}

impl BodyStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a body.
    ///
    /// Returns `None` (and leaves the store untouched) once the store is full
    /// or when the description is invalid.
    pub fn add(&mut self, desc: BodyDesc) -> Option<BodyId> {
        match self.try_add(desc) {
            Ok(id) => Some(id),
            Err(SimError::CapacityExceeded { capacity }) => {
                debug!(capacity, "body store full, add ignored");
                None
            }
            Err(err) => {
                warn!(%err, "rejected body");
                None
            }
        }
    }

    /// Add a body, reporting why it could not be added.
    pub fn try_add(&mut self, desc: BodyDesc) -> SimResult<BodyId> {
        if self.is_full() {
            return Err(SimError::CapacityExceeded { capacity: self.capacity });
        }
        desc.validate()?;

        let id = self.bodies.len() as BodyId;
        self.bodies.push(desc.build());
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bodies.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id as usize)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id as usize)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }
}
