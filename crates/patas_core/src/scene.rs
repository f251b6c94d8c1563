//! Scene: the ordered set of actors
//!
//! Actors live in a [`SlotMap`] so keys held by the editor stay valid (or
//! become `None`) across removals. A separate order list keeps insertion
//! order, which is the hierarchy order and the update/render order.

use slotmap::{new_key_type, SlotMap};
use crate::{Actor, Behavior, Patrol, Surface, Transform};

new_key_type! {
    /// Key to an actor in a scene
    ///
    /// Keys of removed actors return `None` instead of aliasing a new actor.
    pub struct ActorKey;
}

/// Ordered actor container with an optional patrol
#[derive(Debug, Default)]
pub struct Scene {
    actors: SlotMap<ActorKey, Actor>,
    order: Vec<ActorKey>,
    patrol: Option<Patrol>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            actors: SlotMap::with_key(),
            order: Vec::new(),
            patrol: None,
        }
    }

    /// Add an actor at the end of the order
    pub fn add_actor(&mut self, actor: Actor) -> ActorKey {
        let key = self.actors.insert(actor);
        self.order.push(key);
        key
    }

    /// Remove an actor, calling its destroy hook
    pub fn remove_actor(&mut self, key: ActorKey) -> Option<Actor> {
        let mut actor = self.actors.remove(key)?;
        self.order.retain(|k| *k != key);
        actor.destroy();
        Some(actor)
    }

    pub fn get(&self, key: ActorKey) -> Option<&Actor> {
        self.actors.get(key)
    }

    pub fn get_mut(&mut self, key: ActorKey) -> Option<&mut Actor> {
        self.actors.get_mut(key)
    }

    /// Actors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ActorKey, &Actor)> + '_ {
        self.order
            .iter()
            .filter_map(move |key| self.actors.get(*key).map(|actor| (*key, actor)))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> &[ActorKey] {
        &self.order
    }

    /// The key at position `index` in the order
    pub fn key_at(&self, index: usize) -> Option<ActorKey> {
        self.order.get(index).copied()
    }

    /// Position of `key` in the order
    pub fn index_of(&self, key: ActorKey) -> Option<usize> {
        self.order.iter().position(|k| *k == key)
    }

    /// The first actor with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ActorKey> {
        self.iter()
            .find(|(_, actor)| actor.name() == name)
            .map(|(key, _)| key)
    }

    #[inline]
    pub fn actor_count(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Attach the patrol that drives the actor named by its seeker
    pub fn set_patrol(&mut self, patrol: Patrol) {
        self.patrol = Some(patrol);
    }

    pub fn patrol(&self) -> Option<&Patrol> {
        self.patrol.as_ref()
    }

    /// Update every active actor in order
    ///
    /// The patrol steps right after its seeker's own update, so the seeker's
    /// shape shows last frame's position.
    pub fn update(&mut self, dt: f32) {
        for key in &self.order {
            let Some(actor) = self.actors.get_mut(*key) else {
                continue;
            };
            if !actor.is_active() {
                continue;
            }

            actor.update(dt);

            if let Some(patrol) = self.patrol.as_mut() {
                if actor.name() == patrol.seeker() {
                    if let Some(transform) = actor.get_component_mut::<Transform>() {
                        patrol.step(transform, dt);
                    }
                }
            }
        }
    }

    /// Render every active actor in order
    pub fn render(&self, surface: &mut dyn Surface) {
        for (_, actor) in self.iter() {
            if actor.is_active() {
                actor.render(surface);
            }
        }
    }
}
