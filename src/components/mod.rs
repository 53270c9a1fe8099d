pub mod header;
pub mod icons;
pub mod sections;

pub use header::Header;
pub use sections::Sections;
