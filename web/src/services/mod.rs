pub mod suggest_client;
