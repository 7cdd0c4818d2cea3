use crate::api::types::{EntityId, SlotIndex};
use crate::components::entity::Entity;
use crate::input::queue::PickTag;

/// Entity arena using a flat Vec.
/// A box has a few dozen entities at most.
pub struct Scene {
    entities: Vec<Entity>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(32),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Find the interactive entity for a tag/slot/payload triple (mutable).
    pub fn find_pickable_mut(
        &mut self,
        tag: PickTag,
        slot: SlotIndex,
        payload: u32,
    ) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.tag == Some(tag) && e.slot == slot && e.payload == payload)
    }

    /// All entities belonging to one puzzle slot.
    pub fn in_slot(&self, slot: SlotIndex) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.slot == slot)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.next_id();
        scene.spawn(Entity::new(id, SlotIndex(0)).with_pos(Vec3::new(10.0, 20.0, 5.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 20.0, 5.0));
    }

    #[test]
    fn ids_keep_increasing_after_clear() {
        let mut scene = Scene::new();
        let first = scene.next_id();
        scene.clear();
        assert_ne!(scene.next_id(), first);
    }

    #[test]
    fn find_pickable_matches_all_three_keys() {
        let mut scene = Scene::new();
        for dial in 0..3 {
            let id = scene.next_id();
            scene.spawn(Entity::new(id, SlotIndex(1)).with_tag(PickTag::ColorDial, dial));
        }
        let hit = scene.find_pickable_mut(PickTag::ColorDial, SlotIndex(1), 2).unwrap();
        assert_eq!(hit.payload, 2);
        assert!(scene.find_pickable_mut(PickTag::ColorDial, SlotIndex(0), 2).is_none());
        assert!(scene.find_pickable_mut(PickTag::FloatingShape, SlotIndex(1), 2).is_none());
        assert_eq!(scene.in_slot(SlotIndex(1)).count(), 3);
    }
}
