//! # compose-nobuild
//!
//! A small CLI tool that strips `build` directives from a Compose-style
//! YAML file, producing an image-only variant of the deployment descriptor
//! for platforms that cannot build images from local contexts.
//!
//! ## Usage
//!
//! ```bash
//! compose-nobuild docker-compose.yml docker-compose.nobuild.yml
//! ```
//!
//! ## Modules
//!
//! - `compose` - Loading, stripping, and dumping of Compose YAML documents

pub mod compose;
