pub mod config;
pub mod convert_icon;
pub mod fix_icon_alpha;
pub mod logging;
pub mod manifest;
pub mod rasterize;
pub mod replace;
pub mod report;
pub mod strip_alpha;
