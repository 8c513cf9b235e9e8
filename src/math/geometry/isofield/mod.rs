// src/math/geometry/isofield/mod.rs

pub mod builder; // IsoFieldBuilder
pub mod components; // FieldConfig
pub mod field; // VolumeField
pub mod influence; // Trait FieldInfluence
pub mod isofield;
pub mod polygonize; // Grenze zum externen Extraktor
pub mod sphere; // SphereSource

// Wichtige Re-Exporte für die einfache Nutzung des Kugelfeld-Systems
pub use self::builder::IsoFieldBuilder;
pub use self::components::FieldConfig;
pub use self::field::VolumeField;
pub use self::influence::FieldInfluence;
pub use self::isofield::IsoField;
pub use self::polygonize::extract_surface;
pub use self::sphere::SphereSource;
