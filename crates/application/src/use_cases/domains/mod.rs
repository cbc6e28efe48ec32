mod resolve_domain;

pub use resolve_domain::{select_most_specific, ResolveDomainUseCase};
