//! Basket Handlers

pub(crate) mod create;
