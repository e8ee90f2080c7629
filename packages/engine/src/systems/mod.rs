//! Pure systems over board snapshots: seeding new boards and advancing
//! generations. Neither keeps any state between calls.

pub mod factory;
pub mod life;
pub mod rng;
