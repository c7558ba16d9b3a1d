pub mod ask;
pub mod frontend_route;
pub mod health_route;
