mod static_;
pub use static_::StaticCredentialProvider;

mod env;
pub use env::EnvCredentialProvider;

mod config_file;
pub use config_file::ConfigFileCredentialProvider;

mod default;
pub use default::DefaultCredentialProvider;
