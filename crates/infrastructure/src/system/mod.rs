pub mod cf_cli_session;

pub use cf_cli_session::CfCliSession;
