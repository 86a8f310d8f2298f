//! Item catalog service

mod service;

pub use service::ItemService;

#[cfg(test)]
mod tests;
