#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_transport;
mod pages;

pub use mock_transport::MockApiTransport;
pub use pages::{domain_page, domain_query_path, route_page, ROUTES_PATH};
