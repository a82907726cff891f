//! Widget Packages
//!
//! Each submodule is a self-contained widget package implementing the
//! [`WidgetPackage`](crate::gateway::WidgetPackage) contract. Packages are
//! wired into the gateway through the registry; they never reference each
//! other.

pub mod headphones;
