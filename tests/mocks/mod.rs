pub mod mock_postal_client;

pub use mock_postal_client::MockPostalClient;
