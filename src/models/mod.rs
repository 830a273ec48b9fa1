//! Data models for the inventory dashboard

pub mod item;
pub mod movement;
pub mod order;

pub use item::{
    CreateItem, Item, ItemDefaults, NewItem, QuantityAdjusted, QuantityAdjustment, UpdateItem,
};
pub use movement::{CreateMovement, Movement};
pub use order::Order;
