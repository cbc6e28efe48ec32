pub mod domains;
pub mod resolve_hostname;
pub mod routes;

pub use domains::ResolveDomainUseCase;
pub use resolve_hostname::ResolveHostnameUseCase;
pub use routes::GetRoutesUseCase;
