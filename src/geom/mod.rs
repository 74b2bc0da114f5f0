mod core;

pub use self::core::{Point3, Vec3};
