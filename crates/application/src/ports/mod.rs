mod api_transport;

pub use api_transport::ApiTransport;
