//! Domain Layer
//!
//! Project naming, layout resolution and the ports the scaffolder talks
//! through. Nothing in here touches the file system.
//!
//! ## Structure
//!
//! - `entities/` - Project and operation outcomes
//! - `value_objects/` - ProjectName, Layout
//! - `ports/` - Event sink and external compiler interfaces

pub mod entities;
pub mod ports;
pub mod value_objects;
