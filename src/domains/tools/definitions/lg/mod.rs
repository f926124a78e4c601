//! Looking Glass tools.
//!
//! One tool per query kind. All of them share the routing and result
//! formatting in [`common`].

pub mod city_code;
pub mod city_delay;
pub mod common;
pub mod eyeball_coverage;
pub mod router_explore;
pub mod zga_test;

pub use city_code::{LgCityCodeParams, LgCityCodeTool};
pub use city_delay::{LgCityDelayParams, LgCityDelayTool};
pub use common::LookingGlassTool;
pub use eyeball_coverage::{LgEyeballCoverageParams, LgEyeballCoverageTool};
pub use router_explore::{LgRouterExploreParams, LgRouterExploreTool};
pub use zga_test::{LgZgaTestParams, LgZgaTestTool};
