pub mod routes;
pub mod api_client;
pub mod metadata_services;
pub mod notification_services;

#[cfg(test)]
pub mod mock_api;
