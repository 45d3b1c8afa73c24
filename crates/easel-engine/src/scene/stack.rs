use super::{Shape, ShapeId, ShapeKind};

/// Ordered collection of drawable shapes.
///
/// Insertion order is render order (back-to-front). Every shape receives a
/// stable [`ShapeId`] at push time from a monotonic counter, so handles stay
/// valid across removals of other shapes.
#[derive(Debug, Default)]
pub struct SceneStack {
    entries: Vec<(ShapeId, Shape)>,
    next_id: u64,
}

impl SceneStack {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape and returns its handle.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push((id, shape));
        id
    }

    /// Removes and returns the most recently pushed shape.
    pub fn pop(&mut self) -> Option<Shape> {
        self.entries.pop().map(|(_, shape)| shape)
    }

    /// Removes and returns the oldest shape.
    pub fn shift(&mut self) -> Option<Shape> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0).1)
        }
    }

    /// Clears all shapes. Keeps allocated capacity for reuse.
    pub fn purge(&mut self) {
        self.entries.clear();
    }

    /// Removes the shape with the given id.
    ///
    /// Idempotent: removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: ShapeId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Read-only query over the stack in insertion order.
    pub fn filter<'a, P>(&'a self, mut predicate: P) -> impl Iterator<Item = (ShapeId, &'a Shape)>
    where
        P: FnMut(&Shape) -> bool + 'a,
    {
        self.entries
            .iter()
            .filter(move |(_, shape)| predicate(shape))
            .map(|(id, shape)| (*id, shape))
    }

    /// Ids of all shapes with a matching kind tag, in insertion order.
    pub fn ids_of_kind(&self, kind: ShapeKind) -> Vec<ShapeId> {
        self.filter(move |shape| shape.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of shapes with a matching kind tag.
    pub fn count_of_kind(&self, kind: ShapeKind) -> usize {
        self.filter(move |shape| shape.kind() == kind).count()
    }

    /// Visits every shape in render order; the visitor receives the shape
    /// and its current index.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&Shape, usize),
    {
        for (index, (_, shape)) in self.entries.iter().enumerate() {
            visit(shape, index);
        }
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, shape)| shape)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, shape)| shape)
    }

    #[inline]
    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
