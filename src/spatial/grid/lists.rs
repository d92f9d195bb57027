use super::*;

impl SpatialGrid {
    /// Prepend a node for `body` to one of the cell's lists.
    pub(super) fn push_front(&mut self, cell: usize, is_static: bool, body: BodyId) {
        let old_head = if is_static {
            self.static_heads[cell]
        } else {
            self.dynamic_heads[cell]
        };

        let id = self.nodes.append(GridNode {
            next: old_head,
            prev: NIL,
            body,
        });
        if old_head != NIL {
            self.nodes.get_mut(old_head).prev = id;
        }

        if is_static {
            self.static_heads[cell] = id;
        } else {
            self.dynamic_heads[cell] = id;
        }
    }

    #[inline]
    pub fn dynamic_head(&self, cell: usize) -> i32 {
        self.dynamic_heads[cell]
    }

    #[inline]
    pub fn static_head(&self, cell: usize) -> i32 {
        self.static_heads[cell]
    }

    /// Walk a list starting at `handle` (which may be `NIL`).
    #[inline]
    pub fn iter_list(&self, handle: i32) -> ListIter<'_> {
        ListIter { grid: self, cursor: handle }
    }

    pub fn dynamic_bodies(&self, cell: usize) -> impl Iterator<Item = BodyId> + '_ {
        self.iter_list(self.dynamic_head(cell)).map(|(_, node)| node.body)
    }

    pub fn static_bodies(&self, cell: usize) -> impl Iterator<Item = BodyId> + '_ {
        self.iter_list(self.static_head(cell)).map(|(_, node)| node.body)
    }

    /// Every cell whose lists reference `body`, in row-major order.
    pub fn cells_containing(&self, body: BodyId) -> Vec<usize> {
        (0..self.size)
            .filter(|&cell| {
                self.dynamic_bodies(cell).any(|b| b == body)
                    || self.static_bodies(cell).any(|b| b == body)
            })
            .collect()
    }
}

/// Iterator over `(handle, node)` pairs of one cell list.
pub struct ListIter<'a> {
    grid: &'a SpatialGrid,
    cursor: i32,
}

impl<'a> Iterator for ListIter<'a> {
    type Item = (i32, GridNode);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let handle = self.cursor;
        let node = *self.grid.node(handle);
        self.cursor = node.next;
        Some((handle, node))
    }
}
