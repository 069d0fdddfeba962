// src/config/mod.rs
mod config;

pub use self::config::{
    BarrierSpec, Dimensions, ElementSpec, MapConfig, PlacementStrategy, RestrictionSpec,
    DEFAULT_BARRIER_SYMBOL, DEFAULT_ELEMENT_COUNT, DEFAULT_MIN_DISTANCE,
    DEFAULT_RANDOM_BARRIER_COUNT, EMPTY_CELL,
};
