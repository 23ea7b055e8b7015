//! Fixed-capacity entity pools.
//!
//! A `Pool<K>` is an ordered slot array of pre-spawned entities. Entities are
//! never despawned: a slot is only ever flipped between active and inactive,
//! and its components are rewritten in place on reuse.
//!
//! # Ownership
//! - the pool resource is the single source of truth for "is this slot live?"
//! - `commit_pool_activation::<K>` derives visibility and collision filters from it
//!
//! ```text
//!   acquire / activate ──► slot.active = true  ──┐
//!   release / reset_all ─► slot.active = false ──┼──► commit_pool_activation
//!                                                │     (Visibility, CollisionLayers)
//! ```

use std::marker::PhantomData;

use avian3d::prelude::*;
use bevy::prelude::*;

/// Pool kind marker. Also the marker component carried by every pooled entity.
pub trait PoolKind: Component + Send + Sync + 'static {
    const NAME: &'static str;

    /// Collision layers while the slot is live.
    fn active_layers() -> CollisionLayers;

    /// Collision layers while the slot is parked: same membership, empty filters.
    fn inactive_layers() -> CollisionLayers;
}

/// Stable handle: index into the pool's slot array.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub entity: Entity,
    pub active: bool,
}

#[derive(Resource, Debug)]
pub struct Pool<K: PoolKind> {
    slots: Vec<Slot>,
    capacity: usize,
    _kind: PhantomData<fn() -> K>,
}

impl<K: PoolKind> Pool<K> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots filled so far (equals capacity once initialised).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Register a freshly spawned entity as the next (inactive) slot.
    ///
    /// Returns `None` once capacity is reached; the pool never grows.
    pub fn push_slot(&mut self, entity: Entity) -> Option<SlotId> {
        if self.slots.len() >= self.capacity {
            return None;
        }
        self.slots.push(Slot {
            entity,
            active: false,
        });
        Some(SlotId(self.slots.len() - 1))
    }

    #[inline]
    pub fn entity(&self, id: SlotId) -> Option<Entity> {
        self.slots.get(id.0).map(|s| s.entity)
    }

    #[inline]
    pub fn is_active(&self, id: SlotId) -> bool {
        self.slots.get(id.0).is_some_and(|s| s.active)
    }

    pub fn any_active(&self) -> bool {
        self.slots.iter().any(|s| s.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Take the first inactive slot and mark it live.
    ///
    /// `None` means exhaustion. That is a capacity decision, not an error.
    pub fn acquire(&mut self) -> Option<SlotId> {
        let index = self.slots.iter().position(|s| !s.active)?;
        self.slots[index].active = true;
        Some(SlotId(index))
    }

    /// Mark a specific slot live. Returns `false` for an unknown id.
    pub fn activate(&mut self, id: SlotId) -> bool {
        match self.slots.get_mut(id.0) {
            Some(slot) => {
                slot.active = true;
                true
            }
            None => false,
        }
    }

    /// Park a slot. Other components of its entity are left untouched.
    ///
    /// Returns `true` only if the slot was live, so callers can detect double releases.
    pub fn release(&mut self, id: SlotId) -> bool {
        match self.slots.get_mut(id.0) {
            Some(slot) if slot.active => {
                slot.active = false;
                true
            }
            _ => false,
        }
    }

    pub fn reset_all(&mut self) {
        for slot in &mut self.slots {
            slot.active = false;
        }
    }

    pub fn active_slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.active)
            .map(|(i, _)| SlotId(i))
    }

    pub fn slots(&self) -> impl Iterator<Item = (SlotId, Slot)> + '_ {
        self.slots.iter().enumerate().map(|(i, s)| (SlotId(i), *s))
    }
}

/// Derive visibility and collision filters from slot activity.
///
/// This is the only writer of those two components for pooled entities.
pub fn commit_pool_activation<K: PoolKind>(
    pool: Option<Res<Pool<K>>>,
    mut q: Query<(&mut Visibility, &mut CollisionLayers), With<K>>,
) {
    let Some(pool) = pool else {
        return;
    };
    if !pool.is_changed() {
        return;
    }

    for (_, slot) in pool.slots() {
        let Ok((mut vis, mut layers)) = q.get_mut(slot.entity) else {
            continue;
        };

        let (want_vis, want_layers) = if slot.active {
            (Visibility::Visible, K::active_layers())
        } else {
            (Visibility::Hidden, K::inactive_layers())
        };

        vis.set_if_neq(want_vis);
        *layers = want_layers;
    }
}
