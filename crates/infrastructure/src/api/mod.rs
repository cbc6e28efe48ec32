pub mod cloud_controller_client;

pub use cloud_controller_client::CloudControllerClient;
