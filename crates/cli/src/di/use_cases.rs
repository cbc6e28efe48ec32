use routefinder_application::ports::ApiTransport;
use routefinder_application::use_cases::{
    GetRoutesUseCase, ResolveDomainUseCase, ResolveHostnameUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_hostname: Arc<ResolveHostnameUseCase>,
}

impl UseCases {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        let resolve_domain = Arc::new(ResolveDomainUseCase::new(transport.clone()));
        let get_routes = Arc::new(GetRoutesUseCase::new(transport));

        Self {
            resolve_hostname: Arc::new(ResolveHostnameUseCase::new(resolve_domain, get_routes)),
        }
    }
}
