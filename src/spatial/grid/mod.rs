//! SpatialGrid - uniform grid broad-phase index, rebuilt every sub-step.
//!
//! Each cell owns two list heads: one for dynamic bodies and one for static
//! bodies. Lists are intrusive and doubly linked, with their nodes living in a
//! `NodeArena` that is cleared on every rebuild, so a node never outlives the
//! sub-step that created it. A body whose AABB spans several cells gets one
//! node per cell.

use crate::core::{NodeArena, NIL};
use crate::domain::{Body, BodyId};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

mod indexing;
mod lists;

pub use lists::ListIter;

/// Initial node capacity; the arena doubles past it.
const MIN_NODE_CAPACITY: usize = 1024;

/// Intrusive list element. `next`/`prev` are arena handles, `NIL` when unlinked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridNode {
    pub next: i32,
    pub prev: i32,
    pub body: BodyId,
}

impl Default for GridNode {
    fn default() -> Self {
        Self { next: NIL, prev: NIL, body: 0 }
    }
}

/// Uniform grid over world space.
pub struct SpatialGrid {
    width: u32,
    height: u32,
    size: usize,
    cell_size: f32,

    dynamic_heads: Vec<i32>,
    static_heads: Vec<i32>,
    nodes: NodeArena<GridNode>,
}

impl SpatialGrid {
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            size,
            cell_size,
            dynamic_heads: vec![NIL; size],
            static_heads: vec![NIL; size],
            nodes: NodeArena::new(size.max(MIN_NODE_CAPACITY)),
        }
    }

    /// Drop every list and every node.
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.dynamic_heads.par_iter_mut().for_each(|h| *h = NIL);
            self.static_heads.par_iter_mut().for_each(|h| *h = NIL);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.dynamic_heads.fill(NIL);
            self.static_heads.fill(NIL);
        }
        self.nodes.clear();
    }

    /// Clear and re-insert every body.
    pub fn rebuild(&mut self, bodies: &[Body]) {
        self.clear();
        for (id, body) in bodies.iter().enumerate() {
            self.insert_body(id as BodyId, body);
        }
    }

    /// Insert `body` into every in-bounds cell its AABB overlaps.
    pub fn insert_body(&mut self, id: BodyId, body: &Body) {
        let Some((x0, y0, x1, y1)) = self.cell_range(body) else {
            return;
        };
        for x in x0..=x1 {
            for y in y0..=y1 {
                let cell = self.index(x, y);
                self.push_front(cell, body.is_static, id);
            }
        }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Nodes allocated by the last rebuild.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Times the node pool had to reallocate since the grid was created.
    pub fn node_grows(&self) -> usize {
        self.nodes.grow_count()
    }

    /// Node lookup. Panics on `NIL` or a stale handle.
    #[inline]
    pub fn node(&self, handle: i32) -> &GridNode {
        self.nodes.get(handle)
    }
}
