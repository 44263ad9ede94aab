//! # glb-zones
//!
//! Reads GLB (binary glTF) models without a 3D editor and extracts named
//! marker nodes ("zones") for the venue viewer.
//!
//! This library provides functionality to:
//! - Validate GLB framing and decode the JSON scene chunk
//! - Extract nodes whose name starts with a prefix (`ZONE_` by default)
//! - Convert zone positions from editor space (Z up) to viewer space (Y up)
//! - Write the zone report JSON and the viewer's TypeScript snippet
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = glb_zones::read_file("SM_MFF.glb")?;
//! let zones = glb_zones::extract(&doc, glb_zones::DEFAULT_PREFIX);
//!
//! for zone in &zones {
//!     println!("{} {} {:?}", zone.id, zone.display_name, zone.position);
//! }
//!
//! let report = glb_zones::ZoneReport::new("SM_MFF.glb", &zones);
//! report.write(std::path::Path::new("zone_coordinates.json"))?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod glb;
pub mod report;
pub mod scene;
pub mod snippet;
pub mod types;
pub mod zone;

#[cfg(test)]
mod testing;

// Re-export commonly used items
#[doc(inline)]
pub use error::{Error, FormatError, Result, Tag};
#[doc(inline)]
pub use glb::{parse, read, read_file, ChunkHeader, ChunkType, Container, Header, Summary};
#[doc(inline)]
pub use report::{ZoneEntry, ZoneReport, REPORT_FILE};
#[doc(inline)]
pub use scene::{Asset, Node, SceneDocument};
#[doc(inline)]
pub use snippet::SNIPPET_FILE;
#[doc(inline)]
pub use types::{Quat, Vec3};
#[doc(inline)]
pub use zone::{display_name, extract, ZoneRecord, DEFAULT_PREFIX};
