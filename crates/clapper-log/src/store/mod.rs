mod file_store;
mod key_value_store;
mod shoot_day_id;
mod shoot_day_repository;
mod store_key;

pub(crate) use {
    file_store::FileStore,
    key_value_store::KeyValueStore,
    shoot_day_id::ShootDayId,
    shoot_day_repository::ShootDayRepository,
    store_key::{StoreKey, StoreScope},
};

#[cfg(test)]
pub(crate) use memory_store::MemoryStore;
