mod route_planner;

pub use route_planner::{RoutePlan, RoutePlanner};
