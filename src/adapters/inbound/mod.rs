mod api_server;

pub use api_server::{
    parse_csv_rows, ApiError, ApiServer, ApiState, HealthResponse, PlanRequest, PlanResponse,
};
