//! Navigation generation and site configuration patching for docnav.
//!
//! [`nav`] builds the outline from the documentation tree; [`patch`] splices
//! it into the site configuration file.

pub mod nav;
pub mod patch;

pub use nav::{build_outline, generate_nav, render_outline};
pub use patch::{PatchOutcome, PatchReport, splice_nav, update_config_nav};
