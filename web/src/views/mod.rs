pub mod map;
pub mod planner;
