//! Canonical media model
//!
//! Every decoder, whatever the upstream shape, produces a [`Media`] with an
//! embedded [`Account`] for the post owner.

mod account;
mod media;

pub use account::Account;
pub use media::{Media, TYPE_IMAGE, TYPE_VIDEO};

#[cfg(test)]
mod tests;
