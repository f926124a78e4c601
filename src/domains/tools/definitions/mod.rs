//! Tool definitions module.
//!
//! Each tool is defined in its own file under `lg/`.

pub mod lg;

pub use lg::{
    LgCityCodeParams, LgCityCodeTool, LgCityDelayParams, LgCityDelayTool,
    LgEyeballCoverageParams, LgEyeballCoverageTool, LgRouterExploreParams, LgRouterExploreTool,
    LgZgaTestParams, LgZgaTestTool, LookingGlassTool,
};
