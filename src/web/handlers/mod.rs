// HTTP handlers, one module per route.

pub mod compare;
pub mod health;
