#![allow(clippy::float_cmp)]

mod failure;
mod hooks;
mod properties;
mod tiers;
