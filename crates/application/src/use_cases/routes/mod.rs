mod get_routes;

pub use get_routes::GetRoutesUseCase;
